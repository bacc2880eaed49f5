//! Case and plurality variants of an identifier.

use serde::Serialize;
use thiserror::Error;

/// Error returned when a name cannot be used as an identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier '{0}'")]
pub struct InvalidIdentifier(pub String);

/// Check that a name is letter-initial and alphabetic.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Pluralize a word using standard English rules (irregular-aware).
pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Upper-case the first letter of `s`.
fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of `s`.
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Case and plurality variants derived once from an entity name.
///
/// Field names serialize in camelCase so templates can reference them
/// directly (e.g. `{{ initLowerPl }}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inflections {
    /// `FooBar`
    pub init_upper_sg: String,
    /// `fooBar`
    pub init_lower_sg: String,
    /// `FooBars`
    pub init_upper_pl: String,
    /// `fooBars`
    pub init_lower_pl: String,
    /// `FOOBAR`
    pub all_upper_sg: String,
    /// `FOOBARS`
    pub all_upper_pl: String,
}

impl Inflections {
    /// Derive all variants from an identifier.
    ///
    /// Fails unless the identifier is non-empty and purely alphabetic.
    pub fn new(identifier: &str) -> Result<Self, InvalidIdentifier> {
        if !is_identifier(identifier) {
            return Err(InvalidIdentifier(identifier.to_string()));
        }

        let init_upper_sg = upper_first(identifier);
        let init_lower_sg = lower_first(&init_upper_sg);
        let init_upper_pl = pluralize(&init_upper_sg);
        let init_lower_pl = pluralize(&init_lower_sg);
        let all_upper_sg = init_lower_sg.to_uppercase();
        let all_upper_pl = init_lower_pl.to_uppercase();

        Ok(Self {
            init_upper_sg,
            init_lower_sg,
            init_upper_pl,
            init_lower_pl,
            all_upper_sg,
            all_upper_pl,
        })
    }
}
