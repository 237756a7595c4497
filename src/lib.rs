//! SpyCyber mock monitoring dashboard.
//!
//! The interaction core of a phone-monitoring dashboard mock-up: an access
//! gate, gated sidebar navigation with a restricted-feature modal, display
//! language options derived from the host locale, a live clock and simulated
//! activity figures. Everything is session-local; nothing is persisted.

pub mod access_gate;
pub mod clock;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod fixtures;
pub mod i18n;
pub mod metrics;
pub mod navigation;
pub mod render;
