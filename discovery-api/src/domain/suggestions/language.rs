//! Text-search language resolution for the suggestion store.

use std::fmt;

/// Maximum length accepted for a configuration name.
const MAX_LANGUAGE_LEN: usize = 64;

/// Name of the PostgreSQL text-search configuration used to tokenize, stem
/// and rank logged queries (e.g. `english`, `german`, `simple`).
///
/// The name ends up spliced into `CREATE INDEX` and ranking statements as an
/// SQL literal: DDL takes no bound parameters, and the ranking side must use
/// the exact same expression as the index to stay plannable. Construction
/// therefore rejects anything that is not a plain lowercase identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSearchLanguage(String);

/// The configured text-search language is not a usable configuration name.
#[derive(Debug, thiserror::Error)]
#[error("invalid text-search language {0:?}: expected a lowercase PostgreSQL text-search configuration name ([a-z0-9_], max 64 chars)")]
pub struct InvalidLanguage(String);

impl TextSearchLanguage {
    /// Configuration used when none is configured.
    pub const DEFAULT: &'static str = "english";

    pub fn new(name: &str) -> Result<Self, InvalidLanguage> {
        let valid = !name.is_empty()
            && name.len() <= MAX_LANGUAGE_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(InvalidLanguage(name.to_string()))
        }
    }

    /// Resolve the configured language, falling back to [`Self::DEFAULT`].
    ///
    /// Index build and ranking must agree on the language, so the store is
    /// handed the resolved value once, at construction. A bad value is a
    /// startup error, not something to paper over at query time.
    pub fn resolve(configured: Option<&str>) -> Result<Self, InvalidLanguage> {
        match configured {
            Some(name) => Self::new(name),
            None => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TextSearchLanguage {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for TextSearchLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
