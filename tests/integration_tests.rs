//! Integration tests for the SpyCyber dashboard
//!
//! These tests drive the public API the way the console host does: build a
//! controller, feed it user events, and check the resulting snapshot and page.

use proptest::prelude::*;
use regex::Regex;
use spycyber_dashboard::clock::{ClockService, ClockTick, CLOCK_FORMAT};
use spycyber_dashboard::config::Config;
use spycyber_dashboard::console::{execute, Command};
use spycyber_dashboard::dashboard::{DashboardController, Transition};
use spycyber_dashboard::i18n::resolve;
use spycyber_dashboard::metrics::{ActivityMetrics, RandSource, UnitSource};
use spycyber_dashboard::navigation::{NavItem, NavState, View};
use spycyber_dashboard::render::render_html;
use std::time::Duration;

// ==================== Test Helpers ====================

struct ZeroSource;

impl UnitSource for ZeroSource {
    fn next_unit(&mut self) -> f64 {
        0.0
    }
}

/// Samples supplied by proptest, consumed in order.
struct VecSource(Vec<f64>);

impl UnitSource for VecSource {
    fn next_unit(&mut self) -> f64 {
        self.0.pop().unwrap_or(0.0)
    }
}

fn create_controller(config: Config) -> DashboardController {
    DashboardController::new(
        &config,
        ClockTick {
            formatted: "Jan 01 2025 00:00:00".to_string(),
        },
        Box::new(ZeroSource),
    )
}

fn unlocked_controller() -> DashboardController {
    let mut controller = create_controller(Config::default());
    controller
        .attempt_login("user23456")
        .expect("Access key should be accepted");
    controller
}

#[derive(Debug, Clone)]
enum Event {
    Navigate(NavItem),
    CloseModal,
    ToggleSidebar,
}

fn nav_item_strategy() -> impl Strategy<Value = NavItem> {
    prop::sample::select(NavItem::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        nav_item_strategy().prop_map(Event::Navigate),
        Just(Event::CloseModal),
        Just(Event::ToggleSidebar),
    ]
}

// ==================== Access Gate Tests ====================

#[test]
fn test_locked_session_renders_blocked_page() {
    let controller = create_controller(Config::default());
    let snapshot = controller.snapshot();
    assert!(snapshot.content_blocked);

    let html = render_html(&snapshot);
    assert!(html.contains("<main class=\"blocked\">"));
    assert!(html.contains("Login Required"));
    // Every sidebar button is disabled while locked
    assert_eq!(html.matches("<button type=\"button\" disabled>").count(), 10);
}

#[test]
fn test_login_variants() {
    let mut controller = create_controller(Config::default());
    assert!(controller.attempt_login("anything-else").is_err());
    assert!(!controller.is_authenticated());
    assert_eq!(
        controller.snapshot().login_error,
        Some("Incorrect key. Try again.")
    );

    assert!(controller.attempt_login(" user23456 ").is_ok());
    assert!(controller.is_authenticated());
    assert_eq!(controller.snapshot().login_error, None);
}

// ==================== Navigation Tests ====================

#[test]
fn test_every_restricted_item_opens_modal() {
    for item in NavItem::ALL.into_iter().filter(|i| *i != NavItem::Dashboard) {
        let mut controller = unlocked_controller();
        assert_eq!(controller.navigate(item), Transition::Applied);
        let view = controller.view_state();
        assert!(view.modal_visible, "{} should open the modal", item.name());
        assert_eq!(view.current_view, View::Dashboard);

        controller.close_modal();
        let view = controller.view_state();
        assert!(!view.modal_visible);
        assert_eq!(controller.nav_state(), NavState::Dashboard);
    }
}

#[test]
fn test_unlocked_wide_page_shows_sidebar() {
    let mut controller = unlocked_controller();
    assert!(controller.view_state().sidebar_open);
    let html = render_html(&controller.snapshot());
    assert!(html.contains("<aside class=\"open\" data-layout=\"wide\">"));

    controller.toggle_sidebar();
    let html = render_html(&controller.snapshot());
    assert!(html.contains("<aside class=\"closed\" data-layout=\"wide\">"));
}

proptest! {
    #[test]
    fn prop_modal_visible_iff_last_navigation_was_restricted(
        events in prop::collection::vec(event_strategy(), 0..40)
    ) {
        let mut controller = unlocked_controller();
        let mut expect_modal = false;

        for event in events {
            match event {
                Event::Navigate(item) => {
                    controller.navigate(item);
                    expect_modal = item != NavItem::Dashboard;
                }
                Event::CloseModal => {
                    controller.close_modal();
                    expect_modal = false;
                }
                Event::ToggleSidebar => {
                    let before = controller.view_state();
                    controller.toggle_sidebar();
                    let after = controller.view_state();
                    prop_assert_eq!(after.modal_visible, before.modal_visible);
                    prop_assert_eq!(after.current_view, before.current_view);
                    prop_assert_ne!(after.sidebar_open, before.sidebar_open);
                }
            }

            let view = controller.view_state();
            prop_assert_eq!(view.current_view, View::Dashboard);
            prop_assert_eq!(view.modal_visible, expect_modal);
        }
    }

    #[test]
    fn prop_locked_session_ignores_events(
        events in prop::collection::vec(event_strategy(), 0..20)
    ) {
        let mut controller = create_controller(Config::default());
        let before = controller.view_state();
        for event in events {
            let transition = match event {
                Event::Navigate(item) => controller.navigate(item),
                Event::CloseModal => controller.close_modal(),
                Event::ToggleSidebar => controller.toggle_sidebar(),
            };
            prop_assert_eq!(transition, Transition::Blocked);
        }
        prop_assert_eq!(controller.view_state(), before);
    }

    #[test]
    fn prop_metrics_stay_in_bounds(samples in prop::collection::vec(0.0f64..1.0, 5)) {
        let m = ActivityMetrics::generate(&mut VecSource(samples));
        prop_assert!((100..200).contains(&m.calls));
        prop_assert!((20..50).contains(&m.messages));
        prop_assert!((5..10).contains(&m.locations));
        prop_assert!((5..15).contains(&m.photos));
        prop_assert!((5..25).contains(&m.videos));
    }

    #[test]
    fn prop_resolve_always_ends_with_english(locale in "\\PC{0,12}") {
        let offered = resolve(&locale);
        prop_assert_eq!(offered.last().copied(), Some("English"));
        prop_assert!(offered.len() <= 2);
        let mut unique = offered.clone();
        unique.dedup();
        prop_assert_eq!(unique.len(), offered.len());
    }
}

// ==================== Locale Tests ====================

#[test]
fn test_resolve_examples() {
    assert_eq!(resolve("es-ES"), vec!["Español", "English"]);
    assert_eq!(resolve("fr-CA"), vec!["Français", "English"]);
    assert_eq!(resolve("xx-XX"), vec!["English"]);
    assert_eq!(resolve(""), vec!["English"]);
}

// ==================== Metrics Tests ====================

#[test]
fn test_metrics_bounds_over_ten_thousand_activations() {
    let mut source = RandSource::thread();
    for _ in 0..10_000 {
        let m = ActivityMetrics::generate(&mut source);
        assert!((100..200).contains(&m.calls));
        assert!((20..50).contains(&m.messages));
        assert!((5..10).contains(&m.locations));
        assert!((5..15).contains(&m.photos));
        assert!((5..25).contains(&m.videos));
    }
}

#[test]
fn test_metrics_with_zero_source() {
    let m = ActivityMetrics::generate(&mut ZeroSource);
    assert_eq!(
        (m.calls, m.messages, m.locations, m.photos, m.videos),
        (100, 20, 5, 5, 5)
    );
}

// ==================== Clock Tests ====================

#[tokio::test]
async fn test_clock_format_matches_pattern() {
    let pattern = Regex::new(r"^[A-Z][a-z]{2} \d{2} \d{4} \d{2}:\d{2}:\d{2}$").unwrap();
    let clock = ClockService::system(Duration::from_millis(1000)).start();
    let tick = clock.latest();
    assert!(pattern.is_match(&tick.formatted), "bad format: {}", tick.formatted);
    assert!(chrono::NaiveDateTime::parse_from_str(&tick.formatted, CLOCK_FORMAT).is_ok());
    clock.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_clock_ticks_reach_controller() {
    let clock = ClockService::system(Duration::from_millis(1000)).start();
    let mut ticks = clock.subscribe();
    let mut controller = unlocked_controller();

    ticks.changed().await.unwrap();
    let tick = ticks.borrow_and_update().clone();
    controller.apply_tick(tick.clone());
    assert_eq!(controller.snapshot().updated, tick.formatted);

    clock.stop().await;
    assert!(ticks.changed().await.is_err());
}

// ==================== Console Flow Tests ====================

#[test]
fn test_console_session_flow() {
    let mut controller = create_controller(Config {
        reported_locale: "pt-BR".to_string(),
        admin_contact: "support@example.com".to_string(),
        ..Config::default()
    });

    let run = |controller: &mut DashboardController, line: &str| {
        let command = Command::parse(line).expect("command should parse");
        execute(controller, command).expect("command should run")
    };

    assert!(run(&mut controller, "/nav Calls").starts_with("Locked."));
    assert_eq!(run(&mut controller, "/login wrong"), "Incorrect key. Try again.");
    assert_eq!(run(&mut controller, "/login user23456"), "Access granted.");

    run(&mut controller, "/nav Social Apps");
    let page = run(&mut controller, "/render");
    assert!(page.contains("mailto:support@example.com"));

    assert_eq!(run(&mut controller, "/close"), "Dashboard.");
    assert_eq!(run(&mut controller, "/lang English"), "Language selected.");

    let status: serde_json::Value =
        serde_json::from_str(&run(&mut controller, "/status")).unwrap();
    assert_eq!(status["selected_language"], "English");
    assert_eq!(status["languages"][0], "Português");
    assert_eq!(status["view"]["modal_visible"], false);
}
