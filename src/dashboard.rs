//! The dashboard's single state record and its named transitions.
//!
//! `DashboardController` owns the session, view, locale, metrics, clock and
//! login form state. Every user event goes through one of its methods, and
//! each call runs to completion before the next event is handled.

use serde::Serialize;
use tracing::{debug, info};

use crate::access_gate::{AccessGate, AuthError, LoginForm, Session};
use crate::clock::ClockTick;
use crate::config::Config;
use crate::fixtures::{RestrictedModal, DEVICE_NAME};
use crate::i18n::LocaleState;
use crate::metrics::{ActivityMetrics, MetricField, UnitSource};
use crate::navigation::{DashboardCard, Layout, NavItem, NavState, NavigationController, ViewState};

/// What happened to a user event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// The event changed (or re-confirmed) the state
    Applied,
    /// The interface is locked behind the access gate; the event was ignored
    Blocked,
    /// The event was valid but not applicable (e.g., a language that isn't offered)
    Unchanged,
}

pub struct DashboardController {
    gate: AccessGate,
    session: Session,
    login: LoginForm,
    nav: NavigationController,
    locale: LocaleState,
    metrics: ActivityMetrics,
    activations: u32,
    clock: ClockTick,
    modal: RestrictedModal,
    source: Box<dyn UnitSource>,
}

impl DashboardController {
    /// Build the session state and activate the Dashboard view.
    pub fn new(config: &Config, clock: ClockTick, mut source: Box<dyn UnitSource>) -> Self {
        let metrics = ActivityMetrics::generate(source.as_mut());
        let locale = LocaleState::from_reported(&config.reported_locale);
        info!(
            "Dashboard ready (languages: {:?}, layout: {:?})",
            locale.available(),
            config.layout
        );

        Self {
            gate: AccessGate::new(),
            session: Session::new(),
            login: LoginForm::default(),
            nav: NavigationController::new(config.layout),
            locale,
            metrics,
            activations: 1,
            clock,
            modal: RestrictedModal::new(&config.admin_contact),
            source,
        }
    }

    // ==================== Access gate ====================

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// A keystroke in the login field. Clears any stale error.
    pub fn type_key(&mut self, text: &str) -> Transition {
        if self.is_authenticated() {
            return Transition::Unchanged;
        }
        self.login.set_input(text);
        Transition::Applied
    }

    /// Submit whatever is in the login field.
    pub fn submit_login(&mut self) -> Result<(), AuthError> {
        if self.is_authenticated() {
            debug!("Login submitted while already unlocked");
            return Ok(());
        }
        self.login.submit(&self.gate, &mut self.session)
    }

    /// Type `candidate` into the login field and submit it.
    pub fn attempt_login(&mut self, candidate: &str) -> Result<(), AuthError> {
        self.type_key(candidate);
        self.submit_login()
    }

    pub fn login_error(&self) -> Option<&'static str> {
        self.login.error()
    }

    // ==================== Navigation ====================

    pub fn navigate(&mut self, item: NavItem) -> Transition {
        if !self.is_authenticated() {
            debug!("Ignoring navigation to {} while locked", item.name());
            return Transition::Blocked;
        }
        self.nav.navigate(item);
        Transition::Applied
    }

    /// Click on one of the Dashboard preview cards.
    pub fn open_card(&mut self, card: DashboardCard) -> Transition {
        self.navigate(card.target())
    }

    pub fn close_modal(&mut self) -> Transition {
        if !self.is_authenticated() {
            debug!("Ignoring modal close while locked");
            return Transition::Blocked;
        }
        self.nav.close_modal();
        Transition::Applied
    }

    pub fn toggle_sidebar(&mut self) -> Transition {
        if !self.is_authenticated() {
            debug!("Ignoring sidebar toggle while locked");
            return Transition::Blocked;
        }
        self.nav.toggle_sidebar();
        Transition::Applied
    }

    pub fn view_state(&self) -> ViewState {
        self.nav.view_state()
    }

    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    // ==================== Locale ====================

    pub fn select_language(&mut self, language: &str) -> Transition {
        if !self.is_authenticated() {
            debug!("Ignoring language selection while locked");
            return Transition::Blocked;
        }
        if self.locale.select(language) {
            Transition::Applied
        } else {
            Transition::Unchanged
        }
    }

    pub fn locale(&self) -> &LocaleState {
        &self.locale
    }

    // ==================== Metrics ====================

    /// Tear down and re-create the Dashboard view, drawing fresh figures.
    pub fn remount(&mut self) {
        self.metrics = ActivityMetrics::generate(self.source.as_mut());
        self.activations += 1;
        debug!("Dashboard remounted (activation {})", self.activations);
    }

    pub fn metrics(&self) -> ActivityMetrics {
        self.metrics
    }

    pub fn activations(&self) -> u32 {
        self.activations
    }

    // ==================== Clock ====================

    pub fn apply_tick(&mut self, tick: ClockTick) {
        self.clock = tick;
    }

    pub fn clock(&self) -> &ClockTick {
        &self.clock
    }

    // ==================== Rendering ====================

    /// Everything the presentation layer needs, in one serializable value.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let view = self.nav.view_state();
        let authenticated = self.is_authenticated();

        DashboardSnapshot {
            authenticated,
            content_blocked: !authenticated || view.modal_visible,
            login_error: if authenticated { None } else { self.login.error() },
            view,
            layout: self.nav.layout(),
            nav_items: NavItem::ALL
                .iter()
                .map(|item| NavEntry {
                    item: *item,
                    name: item.name(),
                    icon: item.icon(),
                    is_new: item.is_new(),
                    current: *item == NavItem::Dashboard,
                })
                .collect(),
            languages: self.locale.available().to_vec(),
            selected_language: self.locale.selected(),
            device_name: DEVICE_NAME,
            updated: self.clock.formatted.clone(),
            metrics: self.metrics,
            bars: MetricField::ALL
                .iter()
                .map(|field| MetricBar {
                    field: *field,
                    label: field.label(),
                    icon: field.icon(),
                    value: self.metrics.get(*field),
                    width_percent: self.metrics.bar_width(*field),
                })
                .collect(),
            modal: view.modal_visible.then(|| self.modal.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    pub item: NavItem,
    pub name: &'static str,
    pub icon: &'static str,
    pub is_new: bool,
    /// The current item's button is disabled
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBar {
    pub field: MetricField,
    pub label: &'static str,
    pub icon: &'static str,
    pub value: u32,
    pub width_percent: f64,
}

/// Read-only view of the state record at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub authenticated: bool,
    /// Main panel is blurred and ignores input
    pub content_blocked: bool,
    pub login_error: Option<&'static str>,
    pub view: ViewState,
    pub layout: Layout,
    pub nav_items: Vec<NavEntry>,
    pub languages: Vec<&'static str>,
    pub selected_language: &'static str,
    pub device_name: &'static str,
    pub updated: String,
    pub metrics: ActivityMetrics,
    pub bars: Vec<MetricBar>,
    pub modal: Option<RestrictedModal>,
}
