//! Message-code family generation.
//!
//! For a field violation the family is, in prefix format:
//!
//! ```text
//! 1. code.object.field
//! 2. code.field
//! 3. code.<field type>
//! 4. code
//! ```
//!
//! and for a whole-object violation:
//!
//! ```text
//! 1. code.object
//! 2. code
//! ```
//!
//! Postfix format reverses the order of the parts inside each key
//! (`object.field.code`, ...). The list order is the lookup order.

use std::str::FromStr;

use crate::error::CoreError;

const CODE_SEPARATOR: &str = ".";

/// Where the error code sits inside each generated key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageCodeFormat {
    #[default]
    PrefixErrorCode,
    PostfixErrorCode,
}

impl MessageCodeFormat {
    fn join(self, code: &str, object: Option<&str>, field: Option<&str>) -> String {
        let object = object.unwrap_or("");
        let field = field.unwrap_or("");
        let parts = match self {
            MessageCodeFormat::PrefixErrorCode => [code, object, field],
            MessageCodeFormat::PostfixErrorCode => [object, field, code],
        };
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(CODE_SEPARATOR)
    }
}

impl FromStr for MessageCodeFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" | "prefix_error_code" => Ok(MessageCodeFormat::PrefixErrorCode),
            "postfix" | "postfix_error_code" => Ok(MessageCodeFormat::PostfixErrorCode),
            other => Err(CoreError::Validation(format!(
                "unknown message code format '{other}', expected 'prefix' or 'postfix'"
            ))),
        }
    }
}

/// Builds the ordered lookup keys for a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCodesResolver {
    prefix: String,
    format: MessageCodeFormat,
}

impl MessageCodesResolver {
    pub fn new(format: MessageCodeFormat) -> Self {
        Self {
            prefix: String::new(),
            format,
        }
    }

    /// Prepend `prefix` to every generated key.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn format(&self) -> MessageCodeFormat {
        self.format
    }

    /// Codes for a whole-object violation.
    pub fn resolve_object_codes(&self, code: &str, object_name: &str) -> Vec<String> {
        let mut codes = Vec::with_capacity(2);
        self.push(&mut codes, code, Some(object_name), None);
        self.push(&mut codes, code, None, None);
        codes
    }

    /// Codes for a field violation. `field_type` is the type label of the
    /// field, when known.
    pub fn resolve_field_codes(
        &self,
        code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<&str>,
    ) -> Vec<String> {
        let mut codes = Vec::with_capacity(4);
        self.push(&mut codes, code, Some(object_name), Some(field));
        self.push(&mut codes, code, None, Some(field));
        if let Some(field_type) = field_type {
            self.push(&mut codes, code, None, Some(field_type));
        }
        self.push(&mut codes, code, None, None);
        codes
    }

    fn push(&self, codes: &mut Vec<String>, code: &str, object: Option<&str>, field: Option<&str>) {
        let key = format!("{}{}", self.prefix, self.format.join(code, object, field));
        if !codes.contains(&key) {
            codes.push(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_codes_prefix_format() {
        let resolver = MessageCodesResolver::default();
        let codes = resolver.resolve_field_codes("required", "item", "name", Some("String"));
        assert_eq!(
            codes,
            vec![
                "required.item.name",
                "required.name",
                "required.String",
                "required",
            ]
        );
    }

    #[test]
    fn field_codes_without_type_label() {
        let resolver = MessageCodesResolver::default();
        let codes = resolver.resolve_field_codes("max", "item", "quantity", None);
        assert_eq!(codes, vec!["max.item.quantity", "max.quantity", "max"]);
    }

    #[test]
    fn object_codes_prefix_format() {
        let resolver = MessageCodesResolver::default();
        let codes = resolver.resolve_object_codes("totalPriceMin", "item");
        assert_eq!(codes, vec!["totalPriceMin.item", "totalPriceMin"]);
    }

    #[test]
    fn postfix_format_moves_code_to_the_end() {
        let resolver = MessageCodesResolver::new(MessageCodeFormat::PostfixErrorCode);
        assert_eq!(
            resolver.resolve_field_codes("range", "item", "price", Some("i32")),
            vec!["item.price.range", "price.range", "i32.range", "range"]
        );
        assert_eq!(
            resolver.resolve_object_codes("totalPriceMin", "item"),
            vec!["item.totalPriceMin", "totalPriceMin"]
        );
    }

    #[test]
    fn prefix_is_prepended_to_every_code() {
        let resolver = MessageCodesResolver::default().with_prefix("validation.");
        assert_eq!(
            resolver.resolve_object_codes("totalPriceMin", "item"),
            vec!["validation.totalPriceMin.item", "validation.totalPriceMin"]
        );
    }

    #[test]
    fn duplicate_keys_are_collapsed() {
        let resolver = MessageCodesResolver::default();
        let codes = resolver.resolve_field_codes("required", "item", "name", Some("name"));
        assert_eq!(codes, vec!["required.item.name", "required.name", "required"]);
    }

    #[test]
    fn parses_format_names() {
        assert_eq!(
            "prefix".parse::<MessageCodeFormat>().unwrap(),
            MessageCodeFormat::PrefixErrorCode
        );
        assert_eq!(
            " POSTFIX ".parse::<MessageCodeFormat>().unwrap(),
            MessageCodeFormat::PostfixErrorCode
        );
        assert!("sideways".parse::<MessageCodeFormat>().is_err());
    }
}
