//! Sidebar navigation catalog and the restricted-feature state machine.
//!
//! Only the Dashboard has content. Every other catalog item opens the
//! restricted-feature modal over the Dashboard and never builds a view of
//! its own.

use serde::Serialize;
use tracing::{debug, info};

/// Fixed navigation catalog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavItem {
    Dashboard,
    Calls,
    Contacts,
    Messages,
    Locations,
    BrowserHistory,
    Photos,
    VideoPreview,
    SocialApps,
    Calendars,
    Applications,
}

impl NavItem {
    pub const ALL: [NavItem; 11] = [
        NavItem::Dashboard,
        NavItem::Calls,
        NavItem::Contacts,
        NavItem::Messages,
        NavItem::Locations,
        NavItem::BrowserHistory,
        NavItem::Photos,
        NavItem::VideoPreview,
        NavItem::SocialApps,
        NavItem::Calendars,
        NavItem::Applications,
    ];

    /// Label shown in the sidebar.
    pub fn name(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Calls => "Calls",
            NavItem::Contacts => "Contacts",
            NavItem::Messages => "Messages",
            NavItem::Locations => "Locations",
            NavItem::BrowserHistory => "Browser History",
            NavItem::Photos => "Photos",
            NavItem::VideoPreview => "Video Preview",
            NavItem::SocialApps => "Social Apps",
            NavItem::Calendars => "Calendars",
            NavItem::Applications => "Applications",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "🏠",
            NavItem::Calls => "📞",
            NavItem::Contacts => "👤",
            NavItem::Messages => "💬",
            NavItem::Locations => "📍",
            NavItem::BrowserHistory => "🌐",
            NavItem::Photos => "🖼️",
            NavItem::VideoPreview => "🎥",
            NavItem::SocialApps => "💻",
            NavItem::Calendars => "📅",
            NavItem::Applications => "📲",
        }
    }

    /// Whether the sidebar shows a "NEW" badge (cosmetic).
    pub fn is_new(&self) -> bool {
        matches!(self, NavItem::Messages | NavItem::Locations | NavItem::Photos)
    }

    /// Look up an item by its label, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<NavItem> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|item| item.name().eq_ignore_ascii_case(name))
    }
}

/// Clickable preview cards on the Dashboard that lead to restricted features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DashboardCard {
    RecentCalls,
    RecentMessages,
}

impl DashboardCard {
    /// The catalog item whose feature the card would open.
    pub fn target(&self) -> NavItem {
        match self {
            DashboardCard::RecentCalls => NavItem::Calls,
            DashboardCard::RecentMessages => NavItem::Messages,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardCard::RecentCalls => "Recent 5 most calling contacts",
            DashboardCard::RecentMessages => "Recent 5 most messages",
        }
    }
}

/// The only view with content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Dashboard,
}

/// How the sidebar is laid out. On narrow screens it is a drawer that
/// closes after every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Wide,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavState {
    Dashboard,
    RestrictedModalOpen { requested: NavItem },
}

/// Observable view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub current_view: View,
    pub modal_visible: bool,
    pub sidebar_open: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavState,
    sidebar_open: bool,
    layout: Layout,
}

impl NavigationController {
    /// The sidebar starts open on wide screens and closed on narrow ones.
    pub fn new(layout: Layout) -> Self {
        Self {
            state: NavState::Dashboard,
            sidebar_open: layout == Layout::Wide,
            layout,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            current_view: View::Dashboard,
            modal_visible: matches!(self.state, NavState::RestrictedModalOpen { .. }),
            sidebar_open: self.sidebar_open,
        }
    }

    /// Handle a sidebar click.
    pub fn navigate(&mut self, item: NavItem) -> NavState {
        self.state = match item {
            NavItem::Dashboard => NavState::Dashboard,
            requested => {
                info!("Restricted feature requested: {}", requested.name());
                NavState::RestrictedModalOpen { requested }
            }
        };

        if self.layout == Layout::Narrow && self.sidebar_open {
            debug!("Closing navigation drawer after navigation");
            self.sidebar_open = false;
        }

        self.state
    }

    /// "Go Back to Dashboard": always lands on the Dashboard.
    pub fn close_modal(&mut self) -> NavState {
        self.state = NavState::Dashboard;
        self.state
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }
}
