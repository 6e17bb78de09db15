//! Field-level match test.
//!
//! # Responsibilities
//! - Decide match/no-match for one pattern field against one observed value
//! - Treat an absent constraint as a wildcard
//! - Apply strict typed equality for literals, regex test for expressions
//!
//! # Design Decisions
//! - Numeric fields (ports) compare as numbers, text fields as text; a text
//!   constraint never matches a numeric value and vice versa
//! - A present constraint against an absent observed value does not match;
//!   only an absent constraint accepts an absent value
//! - Pure and total: no side effects, never panics on absent input

use regex::Regex;

/// A single field constraint: a literal to compare against, or a regular
/// expression to test the observed value's string form with.
#[derive(Debug, Clone)]
pub enum FieldPattern {
    /// Matches a text value by strict equality.
    Text(String),
    /// Matches a numeric value by strict equality.
    Number(u64),
    /// Matches any value whose string form satisfies the expression.
    Regex(Regex),
}

impl From<&str> for FieldPattern {
    fn from(value: &str) -> Self {
        FieldPattern::Text(value.to_string())
    }
}

impl From<String> for FieldPattern {
    fn from(value: String) -> Self {
        FieldPattern::Text(value)
    }
}

impl From<u16> for FieldPattern {
    fn from(value: u16) -> Self {
        FieldPattern::Number(u64::from(value))
    }
}

impl From<u64> for FieldPattern {
    fn from(value: u64) -> Self {
        FieldPattern::Number(value)
    }
}

impl From<Regex> for FieldPattern {
    fn from(value: Regex) -> Self {
        FieldPattern::Regex(value)
    }
}

/// One observed request field, borrowed from the observed snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u64),
}

/// Test one pattern field against one observed value.
///
/// An absent `pattern` always matches (wildcard). An absent `value` matches
/// only when the pattern is also absent: a concrete constraint cannot be
/// satisfied by a field the request does not carry.
pub fn matches(pattern: Option<&FieldPattern>, value: Option<FieldValue<'_>>) -> bool {
    let Some(pattern) = pattern else {
        return true;
    };
    let Some(value) = value else {
        return false;
    };

    match (pattern, value) {
        (FieldPattern::Text(expected), FieldValue::Text(observed)) => expected == observed,
        (FieldPattern::Number(expected), FieldValue::Number(observed)) => *expected == observed,
        (FieldPattern::Regex(re), FieldValue::Text(observed)) => re.is_match(observed),
        (FieldPattern::Regex(re), FieldValue::Number(observed)) => {
            re.is_match(&observed.to_string())
        }
        // No coercion across types.
        (FieldPattern::Text(_), FieldValue::Number(_)) => false,
        (FieldPattern::Number(_), FieldValue::Text(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pattern_is_wildcard() {
        assert!(matches(None, Some(FieldValue::Text("/anything"))));
        assert!(matches(None, Some(FieldValue::Number(8080))));
        assert!(matches(None, None));
    }

    #[test]
    fn present_pattern_rejects_absent_value() {
        let pattern = FieldPattern::from("example.com");
        assert!(!matches(Some(&pattern), None));

        let pattern = FieldPattern::from(8080u16);
        assert!(!matches(Some(&pattern), None));
    }

    #[test]
    fn text_literal_is_strict_equality() {
        let pattern = FieldPattern::from("/health");
        assert!(matches(Some(&pattern), Some(FieldValue::Text("/health"))));
        assert!(!matches(Some(&pattern), Some(FieldValue::Text("/Health"))));
        assert!(!matches(Some(&pattern), Some(FieldValue::Text("/health/"))));
    }

    #[test]
    fn number_literal_is_strict_equality() {
        let pattern = FieldPattern::from(443u16);
        assert!(matches(Some(&pattern), Some(FieldValue::Number(443))));
        assert!(!matches(Some(&pattern), Some(FieldValue::Number(8443))));
    }

    #[test]
    fn no_coercion_across_types() {
        let pattern = FieldPattern::from("443");
        assert!(!matches(Some(&pattern), Some(FieldValue::Number(443))));

        let pattern = FieldPattern::from(443u16);
        assert!(!matches(Some(&pattern), Some(FieldValue::Text("443"))));
    }

    #[test]
    fn regex_tests_string_form() {
        let pattern = FieldPattern::from(Regex::new(r"^/api/").unwrap());
        assert!(matches(Some(&pattern), Some(FieldValue::Text("/api/users"))));
        assert!(!matches(Some(&pattern), Some(FieldValue::Text("/other"))));

        let pattern = FieldPattern::from(Regex::new(r"^80\d\d$").unwrap());
        assert!(matches(Some(&pattern), Some(FieldValue::Number(8080))));
        assert!(!matches(Some(&pattern), Some(FieldValue::Number(443))));
    }
}
