//! Display-language options derived from the host's reported locale.
//!
//! Only language *names* are offered; there is no string catalog behind them.
//!
//! # Architecture
//!
//! - `ladder`: Ordered substring-to-language rules (first match wins)
//! - `locale`: The pure `resolve` function and the session's `LocaleState`
//!
//! # Example
//!
//! ```rust
//! use spycyber_dashboard::i18n::{resolve, LocaleState};
//!
//! assert_eq!(resolve("es-ES"), vec!["Español", "English"]);
//!
//! let mut state = LocaleState::from_reported("fr-CA");
//! assert_eq!(state.selected(), "Français");
//! assert!(state.select("English"));
//! ```

mod ladder;
mod locale;

pub use ladder::{LocaleRule, BASE_LANGUAGE, LOCALE_LADDER};
pub use locale::{resolve, LocaleState};
