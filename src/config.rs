use anyhow::{bail, Context, Result};
use std::time::Duration;

use crate::navigation::Layout;

/// Administrator address used by the restricted-feature modal when none is configured
pub const DEFAULT_ADMIN_CONTACT: &str = "admin@spycyber.com";

/// Default clock refresh period
pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1000;

/// Variables consulted for the host locale, highest priority first
const LOCALE_VARS: [&str; 3] = ["DASHBOARD_LOCALE", "LC_ALL", "LANG"];

#[derive(Debug, Clone)]
pub struct Config {
    // Restricted-feature modal
    pub admin_contact: String,

    // Clock
    pub clock_interval: Duration,

    // Layout
    pub layout: Layout,

    // Locale as reported by the host runtime (may be empty)
    pub reported_locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_contact: DEFAULT_ADMIN_CONTACT.to_string(),
            clock_interval: Duration::from_millis(DEFAULT_CLOCK_INTERVAL_MS),
            layout: Layout::Wide,
            reported_locale: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let clock_interval_ms = match std::env::var("DASHBOARD_CLOCK_INTERVAL_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("DASHBOARD_CLOCK_INTERVAL_MS is not a number: {raw}"))?,
            Err(_) => DEFAULT_CLOCK_INTERVAL_MS,
        };
        if clock_interval_ms == 0 {
            bail!("DASHBOARD_CLOCK_INTERVAL_MS must be greater than zero");
        }

        let layout = match std::env::var("DASHBOARD_LAYOUT") {
            Ok(raw) => parse_layout(&raw)?,
            Err(_) => Layout::Wide,
        };

        Ok(Self {
            admin_contact: std::env::var("DASHBOARD_ADMIN_CONTACT")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_CONTACT.to_string()),

            clock_interval: Duration::from_millis(clock_interval_ms),

            layout,

            reported_locale: first_non_empty_locale(|key| std::env::var(key).ok()),
        })
    }
}

/// Value of the first locale variable that is set and not blank.
fn first_non_empty_locale(lookup: impl Fn(&str) -> Option<String>) -> String {
    LOCALE_VARS
        .iter()
        .filter_map(|&key| lookup(key))
        .find(|v| !v.trim().is_empty())
        .unwrap_or_default()
}

fn parse_layout(raw: &str) -> Result<Layout> {
    match raw.trim().to_lowercase().as_str() {
        "wide" => Ok(Layout::Wide),
        "narrow" => Ok(Layout::Narrow),
        other => bail!("Invalid DASHBOARD_LAYOUT: {}. Expected 'wide' or 'narrow'", other),
    }
}
