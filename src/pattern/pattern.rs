//! Per-request-field constraint set.
//!
//! # Responsibilities
//! - Hold one optional [`FieldPattern`] per known request field
//! - Normalize shorthand registration forms (bare string/regex → pathname)
//! - Resolve the legacy `path`/`host` aliases, canonical field winning
//!
//! # Design Decisions
//! - The field set is closed: a typed struct cannot carry unknown fields, so
//!   nothing inert can leak into matching
//! - Entries never mutate a pattern after registration; builders consume self

use regex::Regex;

use crate::pattern::matcher::FieldPattern;

/// The set of constraints a registered handler declares over incoming
/// requests. Every field is optional; an absent field matches any value, so
/// `Pattern::new()` matches every request.
///
/// `path` and `host` are legacy aliases of `pathname` and `hostname`; when
/// both the alias and the canonical field are set, the canonical field is the
/// one consulted during matching.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    pub pathname: Option<FieldPattern>,
    /// Legacy alias of `pathname`.
    pub path: Option<FieldPattern>,
    pub hostname: Option<FieldPattern>,
    /// Legacy alias of `hostname`.
    pub host: Option<FieldPattern>,
    /// Server-side port of the accepted connection.
    pub port: Option<FieldPattern>,
    pub method: Option<FieldPattern>,
    pub http_version: Option<FieldPattern>,
    pub remote_address: Option<FieldPattern>,
    pub remote_port: Option<FieldPattern>,
    pub local_address: Option<FieldPattern>,
    pub local_port: Option<FieldPattern>,
}

impl Pattern {
    /// An empty pattern; matches every request until constrained.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pathname(mut self, value: impl Into<FieldPattern>) -> Self {
        self.pathname = Some(value.into());
        self
    }

    /// Legacy alias of [`Pattern::pathname`].
    pub fn path(mut self, value: impl Into<FieldPattern>) -> Self {
        self.path = Some(value.into());
        self
    }

    pub fn hostname(mut self, value: impl Into<FieldPattern>) -> Self {
        self.hostname = Some(value.into());
        self
    }

    /// Legacy alias of [`Pattern::hostname`].
    pub fn host(mut self, value: impl Into<FieldPattern>) -> Self {
        self.host = Some(value.into());
        self
    }

    pub fn port(mut self, value: impl Into<FieldPattern>) -> Self {
        self.port = Some(value.into());
        self
    }

    pub fn method(mut self, value: impl Into<FieldPattern>) -> Self {
        self.method = Some(value.into());
        self
    }

    pub fn http_version(mut self, value: impl Into<FieldPattern>) -> Self {
        self.http_version = Some(value.into());
        self
    }

    pub fn remote_address(mut self, value: impl Into<FieldPattern>) -> Self {
        self.remote_address = Some(value.into());
        self
    }

    pub fn remote_port(mut self, value: impl Into<FieldPattern>) -> Self {
        self.remote_port = Some(value.into());
        self
    }

    pub fn local_address(mut self, value: impl Into<FieldPattern>) -> Self {
        self.local_address = Some(value.into());
        self
    }

    pub fn local_port(mut self, value: impl Into<FieldPattern>) -> Self {
        self.local_port = Some(value.into());
        self
    }

    /// Effective pathname constraint, canonical field winning over the alias.
    pub fn pathname_constraint(&self) -> Option<&FieldPattern> {
        self.pathname.as_ref().or(self.path.as_ref())
    }

    /// Effective hostname constraint, canonical field winning over the alias.
    pub fn hostname_constraint(&self) -> Option<&FieldPattern> {
        self.hostname.as_ref().or(self.host.as_ref())
    }
}

impl From<&str> for Pattern {
    /// A bare string is shorthand for a pathname-only pattern.
    fn from(value: &str) -> Self {
        Pattern::new().pathname(value)
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::new().pathname(value)
    }
}

impl From<Regex> for Pattern {
    /// A bare regular expression is shorthand for a pathname-only pattern.
    fn from(value: Regex) -> Self {
        Pattern::new().pathname(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::matcher::{matches, FieldValue};

    #[test]
    fn empty_pattern_has_no_constraints() {
        let pattern = Pattern::new();
        assert!(pattern.pathname_constraint().is_none());
        assert!(pattern.hostname_constraint().is_none());
        assert!(matches(pattern.pathname_constraint(), None));
        assert!(matches(
            pattern.pathname_constraint(),
            Some(FieldValue::Text("/anything"))
        ));
    }

    #[test]
    fn string_shorthand_becomes_pathname() {
        let pattern = Pattern::from("/health");
        assert!(matches(
            pattern.pathname_constraint(),
            Some(FieldValue::Text("/health"))
        ));
        assert!(!matches(
            pattern.pathname_constraint(),
            Some(FieldValue::Text("/other"))
        ));
    }

    #[test]
    fn regex_shorthand_becomes_pathname() {
        let pattern = Pattern::from(Regex::new(r"^/api/").unwrap());
        assert!(matches(
            pattern.pathname_constraint(),
            Some(FieldValue::Text("/api/users"))
        ));
    }

    #[test]
    fn canonical_field_wins_over_alias() {
        let pattern = Pattern::new().path("/legacy").pathname("/canonical");
        match pattern.pathname_constraint() {
            Some(FieldPattern::Text(s)) => assert_eq!(s, "/canonical"),
            other => panic!("unexpected constraint: {other:?}"),
        }

        let pattern = Pattern::new().host("legacy.example").hostname("canonical.example");
        match pattern.hostname_constraint() {
            Some(FieldPattern::Text(s)) => assert_eq!(s, "canonical.example"),
            other => panic!("unexpected constraint: {other:?}"),
        }
    }

    #[test]
    fn alias_is_consulted_when_canonical_absent() {
        let pattern = Pattern::new().path("/legacy");
        assert!(matches(
            pattern.pathname_constraint(),
            Some(FieldValue::Text("/legacy"))
        ));
    }
}
