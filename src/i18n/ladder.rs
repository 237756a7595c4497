//! Locale ladder: the fixed priority list of locale rules.
//!
//! The order of `LOCALE_LADDER` is the priority order. Only the first rule
//! whose pattern occurs in the lower-cased locale is used.

/// Language that is always offered.
pub const BASE_LANGUAGE: &str = "English";

/// One ladder rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleRule {
    /// Lower-case substring looked for in the reported locale (e.g., "es")
    pub pattern: &'static str,

    /// Native name of the language offered on match (e.g., "Español")
    pub language: &'static str,
}

pub const LOCALE_LADDER: &[LocaleRule] = &[
    LocaleRule { pattern: "es", language: "Español" },
    LocaleRule { pattern: "pt", language: "Português" },
    LocaleRule { pattern: "ja", language: "日本語" },
    LocaleRule { pattern: "ru", language: "Русский" },
    LocaleRule { pattern: "fr", language: "Français" },
    LocaleRule { pattern: "de", language: "Deutsch" },
    LocaleRule { pattern: "it", language: "Italiano" },
];

impl LocaleRule {
    /// `locale` must already be lower-cased.
    pub fn matches(&self, locale: &str) -> bool {
        locale.contains(self.pattern)
    }
}

/// First rule matching the lower-cased locale, if any.
pub(crate) fn first_match(locale: &str) -> Option<&'static LocaleRule> {
    LOCALE_LADDER.iter().find(|rule| rule.matches(locale))
}
