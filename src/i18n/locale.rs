use serde::Serialize;
use tracing::debug;

use super::ladder::{first_match, BASE_LANGUAGE};

/// Derive the ordered, duplicate-free list of offered language names.
///
/// At most one ladder language is offered, ahead of English. An empty or
/// unmatched locale yields exactly `["English"]`.
pub fn resolve(reported_locale: &str) -> Vec<&'static str> {
    let locale = reported_locale.trim().to_lowercase();

    let mut candidates = Vec::with_capacity(2);
    if let Some(rule) = first_match(&locale) {
        candidates.push(rule.language);
    }
    candidates.push(BASE_LANGUAGE);

    let mut offered: Vec<&'static str> = Vec::with_capacity(candidates.len());
    for language in candidates {
        if !offered.contains(&language) {
            offered.push(language);
        }
    }
    offered
}

/// Language options offered for the session and the one currently selected.
///
/// Computed once at startup; later changes to the host locale are not
/// picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleState {
    available: Vec<&'static str>,
    selected: &'static str,
}

impl LocaleState {
    pub fn from_reported(reported_locale: &str) -> Self {
        let available = resolve(reported_locale);
        let selected = available.first().copied().unwrap_or(BASE_LANGUAGE);
        debug!(
            "Resolved locale '{}' to options {:?}",
            reported_locale, available
        );
        Self {
            available,
            selected,
        }
    }

    pub fn available(&self) -> &[&'static str] {
        &self.available
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }

    /// Select one of the offered languages. Returns `false` (and keeps the
    /// current selection) if `language` is not offered.
    pub fn select(&mut self, language: &str) -> bool {
        let language = language.trim();
        match self.available.iter().find(|l| **l == language) {
            Some(found) => {
                self.selected = *found;
                true
            }
            None => false,
        }
    }
}
