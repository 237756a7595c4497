//! Line-oriented user events for the console host.
//!
//! Each input line is one event. Commands start with `/`; arguments follow
//! after the first whitespace (e.g., `/nav Browser History`).

use thiserror::Error;
use tracing::info;

use crate::dashboard::{DashboardController, Transition};
use crate::navigation::{DashboardCard, NavItem};
use crate::render::render_html;

pub const HELP_TEXT: &str = "\
Commands:
  /login <key>        type the access key and submit it
  /type <text>        type into the login field
  /nav <item>         click a sidebar item (e.g. /nav Browser History)
  /card calls|messages  click a Dashboard preview card
  /close              go back to the Dashboard from the restricted modal
  /sidebar            open or close the sidebar
  /lang <name>        select a display language
  /remount            re-create the Dashboard view
  /render             print the page as HTML
  /status             print the state as JSON
  /help               show this help
  /quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(String),
    Type(String),
    Navigate(NavItem),
    Card(DashboardCard),
    CloseModal,
    ToggleSidebar,
    Language(String),
    Remount,
    Render,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type /help for the list of commands")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("Unknown navigation item: {0}")]
    UnknownItem(String),

    #[error("Unknown card: {0}. Expected 'calls' or 'messages'")]
    UnknownCard(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (command, arg) = match line.trim_start().split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg)),
            None => (line.trim(), None),
        };

        match command {
            // The key is passed untrimmed; the gate does its own trimming
            "/login" => Ok(Command::Login(arg.unwrap_or_default().to_string())),
            "/type" => Ok(Command::Type(arg.unwrap_or_default().to_string())),
            "/nav" => {
                let name = required(arg, "/nav")?;
                NavItem::from_name(name)
                    .map(Command::Navigate)
                    .ok_or_else(|| CommandError::UnknownItem(name.trim().to_string()))
            }
            "/card" => {
                let name = required(arg, "/card")?;
                match name.trim().to_lowercase().as_str() {
                    "calls" => Ok(Command::Card(DashboardCard::RecentCalls)),
                    "messages" => Ok(Command::Card(DashboardCard::RecentMessages)),
                    other => Err(CommandError::UnknownCard(other.to_string())),
                }
            }
            "/close" => Ok(Command::CloseModal),
            "/sidebar" => Ok(Command::ToggleSidebar),
            "/lang" => Ok(Command::Language(required(arg, "/lang")?.trim().to_string())),
            "/remount" => Ok(Command::Remount),
            "/render" => Ok(Command::Render),
            "/status" => Ok(Command::Status),
            "/help" => Ok(Command::Help),
            "/quit" | "/exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(arg: Option<&'a str>, name: &'static str) -> Result<&'a str, CommandError> {
    arg.filter(|a| !a.trim().is_empty())
        .ok_or(CommandError::MissingArgument(name))
}

/// Apply one command and return the text to show the user.
///
/// `Quit` is handled by the caller and produces no output here.
pub fn execute(controller: &mut DashboardController, command: Command) -> anyhow::Result<String> {
    let reply = match command {
        Command::Login(key) => match controller.attempt_login(&key) {
            Ok(()) => "Access granted.".to_string(),
            Err(e) => e.to_string(),
        },
        Command::Type(text) => describe(controller.type_key(&text), "Key typed."),
        Command::Navigate(item) => {
            let transition = controller.navigate(item);
            if transition == Transition::Applied && controller.view_state().modal_visible {
                info!("Restricted modal shown for {}", item.name());
                "Access Restricted: this feature is not available right now.".to_string()
            } else {
                describe(transition, "Dashboard.")
            }
        }
        Command::Card(card) => {
            let transition = controller.open_card(card);
            describe(transition, "Access Restricted: this feature is not available right now.")
        }
        Command::CloseModal => describe(controller.close_modal(), "Dashboard."),
        Command::ToggleSidebar => {
            let transition = controller.toggle_sidebar();
            let label = if controller.view_state().sidebar_open {
                "Sidebar open."
            } else {
                "Sidebar closed."
            };
            describe(transition, label)
        }
        Command::Language(name) => match controller.select_language(&name) {
            Transition::Unchanged => format!(
                "{} is not offered. Available: {}",
                name,
                controller.locale().available().join(", ")
            ),
            transition => describe(transition, "Language selected."),
        },
        Command::Remount => {
            controller.remount();
            "Dashboard re-created.".to_string()
        }
        Command::Render => render_html(&controller.snapshot()),
        Command::Status => serde_json::to_string_pretty(&controller.snapshot())?,
        Command::Help => HELP_TEXT.to_string(),
        Command::Quit => String::new(),
    };
    Ok(reply)
}

fn describe(transition: Transition, applied: &str) -> String {
    match transition {
        Transition::Applied => applied.to_string(),
        Transition::Blocked => "Locked. Enter the access key with /login <key>.".to_string(),
        Transition::Unchanged => "Nothing to do.".to_string(),
    }
}
