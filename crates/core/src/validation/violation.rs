//! Violation and outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A positional format argument attached to a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageArg {
    Int(i64),
    Text(String),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Int(n) => write!(f, "{n}"),
            MessageArg::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MessageArg {
    fn from(n: i64) -> Self {
        MessageArg::Int(n)
    }
}

impl From<i32> for MessageArg {
    fn from(n: i32) -> Self {
        MessageArg::Int(i64::from(n))
    }
}

impl From<&str> for MessageArg {
    fn from(s: &str) -> Self {
        MessageArg::Text(s.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(s: String) -> Self {
        MessageArg::Text(s)
    }
}

/// A single rule failure, scoped to a field or to the whole object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the validated object (e.g. `item`).
    pub object_name: String,
    /// Target field; `None` for whole-object violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The rule code as raised by the validator (e.g. `range`).
    pub code: String,
    /// Message-code family, most specific first.
    pub codes: Vec<String>,
    pub arguments: Vec<MessageArg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
    /// The submitted value of `field`, kept so the form can show it again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<serde_json::Value>,
}

impl Violation {
    /// Whether this violation applies to the whole object rather than a field.
    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }
}

/// Ordered violations from one validation pass. Empty means success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub object_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationOutcome {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            violations: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Field-scoped violations in evaluation order.
    pub fn field_errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_global())
    }

    /// Violations raised against one named field.
    pub fn field_errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.field.as_deref() == Some(field))
    }

    /// Whole-object violations in evaluation order.
    pub fn global_errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_global())
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors_for(field).next().is_some()
    }
}

impl<'a> IntoIterator for &'a ValidationOutcome {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(field: Option<&str>, code: &str) -> Violation {
        Violation {
            object_name: "item".to_string(),
            field: field.map(str::to_string),
            code: code.to_string(),
            codes: vec![code.to_string()],
            arguments: Vec::new(),
            default_message: None,
            rejected_value: None,
        }
    }

    #[test]
    fn empty_outcome_has_no_errors() {
        let outcome = ValidationOutcome::new("item");
        assert!(!outcome.has_errors());
        assert!(outcome.is_empty());
        assert_eq!(outcome.len(), 0);
    }

    #[test]
    fn splits_field_and_global_errors_preserving_order() {
        let mut outcome = ValidationOutcome::new("item");
        outcome.violations.push(violation(Some("price"), "range"));
        outcome.violations.push(violation(None, "totalPriceMin"));
        outcome.violations.push(violation(Some("quantity"), "max"));

        let fields: Vec<_> = outcome.field_errors().map(|v| v.code.as_str()).collect();
        assert_eq!(fields, vec!["range", "max"]);

        let globals: Vec<_> = outcome.global_errors().map(|v| v.code.as_str()).collect();
        assert_eq!(globals, vec!["totalPriceMin"]);

        assert!(outcome.has_field_errors("quantity"));
        assert!(!outcome.has_field_errors("name"));
    }

    #[test]
    fn integer_and_text_arguments_display_plainly() {
        assert_eq!(MessageArg::from(10_000i64).to_string(), "10000");
        assert_eq!(MessageArg::from("abc").to_string(), "abc");
    }

    #[test]
    fn arguments_serialize_untagged() {
        let args = vec![MessageArg::from(1000i32), MessageArg::from("x")];
        assert_eq!(serde_json::to_string(&args).unwrap(), r#"[1000,"x"]"#);
    }
}
