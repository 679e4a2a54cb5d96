//! Violation accumulator bound to one candidate object.

use serde_json::Value;

use super::codes::MessageCodesResolver;
use super::violation::{MessageArg, ValidationOutcome, Violation};

/// A bindable attribute of a form object.
pub trait FormField: Copy + std::fmt::Debug {
    /// Attribute name as submitted and as used in message codes.
    fn name(self) -> &'static str;

    /// Type label used for the `code.<type>` message-code level.
    fn type_label(self) -> &'static str;
}

/// An object that can be validated field by field.
///
/// Field violations can only be raised against `Self::Field`, so every
/// field violation names an attribute that exists on the object.
pub trait Bindable {
    type Field: FormField;

    /// Name used as the object part of message codes (e.g. `item`).
    const OBJECT_NAME: &'static str;

    /// Current value of `field`, used as the rejected value.
    fn field_value(&self, field: Self::Field) -> Value;
}

/// Collects violations for one candidate in the order they are raised.
#[derive(Debug)]
pub struct BindingResult<'a, T: Bindable> {
    target: &'a T,
    resolver: MessageCodesResolver,
    violations: Vec<Violation>,
}

impl<'a, T: Bindable> BindingResult<'a, T> {
    pub fn new(target: &'a T) -> Self {
        Self::with_resolver(target, MessageCodesResolver::default())
    }

    pub fn with_resolver(target: &'a T, resolver: MessageCodesResolver) -> Self {
        Self {
            target,
            resolver,
            violations: Vec::new(),
        }
    }

    /// The object under validation.
    pub fn target(&self) -> &'a T {
        self.target
    }

    pub fn object_name(&self) -> &'static str {
        T::OBJECT_NAME
    }

    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    /// Record a violation against `field`, capturing its submitted value.
    pub fn reject_value(
        &mut self,
        field: T::Field,
        code: &str,
        arguments: Vec<MessageArg>,
        default_message: Option<&str>,
    ) {
        let codes = self.resolver.resolve_field_codes(
            code,
            T::OBJECT_NAME,
            field.name(),
            Some(field.type_label()),
        );
        self.violations.push(Violation {
            object_name: T::OBJECT_NAME.to_string(),
            field: Some(field.name().to_string()),
            code: code.to_string(),
            codes,
            arguments,
            default_message: default_message.map(str::to_string),
            rejected_value: Some(self.target.field_value(field)),
        });
    }

    /// Record a violation against the whole object.
    pub fn reject(&mut self, code: &str, arguments: Vec<MessageArg>, default_message: Option<&str>) {
        let codes = self.resolver.resolve_object_codes(code, T::OBJECT_NAME);
        self.violations.push(Violation {
            object_name: T::OBJECT_NAME.to_string(),
            field: None,
            code: code.to_string(),
            codes,
            arguments,
            default_message: default_message.map(str::to_string),
            rejected_value: None,
        });
    }

    /// Reject `field` with `code` if its value is null, empty, or only
    /// whitespace.
    pub fn reject_if_empty_or_whitespace(&mut self, field: T::Field, code: &str) {
        let blank = match self.target.field_value(field) {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        };
        if blank {
            self.reject_value(field, code, Vec::new(), None);
        }
    }

    pub fn into_outcome(self) -> ValidationOutcome {
        ValidationOutcome {
            object_name: T::OBJECT_NAME.to_string(),
            violations: self.violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum LoginField {
        User,
        Age,
    }

    impl FormField for LoginField {
        fn name(self) -> &'static str {
            match self {
                LoginField::User => "user",
                LoginField::Age => "age",
            }
        }

        fn type_label(self) -> &'static str {
            match self {
                LoginField::User => "String",
                LoginField::Age => "u8",
            }
        }
    }

    struct Login {
        user: String,
        age: Option<u8>,
    }

    impl Bindable for Login {
        type Field = LoginField;
        const OBJECT_NAME: &'static str = "login";

        fn field_value(&self, field: LoginField) -> Value {
            match field {
                LoginField::User => json!(self.user),
                LoginField::Age => json!(self.age),
            }
        }
    }

    #[test]
    fn reject_value_captures_codes_and_rejected_value() {
        let login = Login {
            user: "bob".to_string(),
            age: Some(7),
        };
        let mut errors = BindingResult::new(&login);
        errors.reject_value(LoginField::Age, "min", vec![MessageArg::Int(18)], None);

        let outcome = errors.into_outcome();
        let v = &outcome.violations[0];
        assert_eq!(v.field.as_deref(), Some("age"));
        assert_eq!(v.codes, vec!["min.login.age", "min.age", "min.u8", "min"]);
        assert_eq!(v.arguments, vec![MessageArg::Int(18)]);
        assert_eq!(v.rejected_value, Some(json!(7)));
    }

    #[test]
    fn reject_records_global_violation() {
        let login = Login {
            user: String::new(),
            age: None,
        };
        let mut errors = BindingResult::new(&login);
        errors.reject("locked", Vec::new(), Some("Account locked"));

        let outcome = errors.into_outcome();
        assert!(outcome.violations[0].is_global());
        assert_eq!(outcome.violations[0].codes, vec!["locked.login", "locked"]);
        assert_eq!(
            outcome.violations[0].default_message.as_deref(),
            Some("Account locked")
        );
    }

    #[test]
    fn blank_check_treats_whitespace_and_null_as_empty() {
        let login = Login {
            user: " \t ".to_string(),
            age: None,
        };
        let mut errors = BindingResult::new(&login);
        errors.reject_if_empty_or_whitespace(LoginField::User, "required");
        errors.reject_if_empty_or_whitespace(LoginField::Age, "required");
        assert_eq!(errors.error_count(), 2);
    }

    #[test]
    fn blank_check_passes_text() {
        let login = Login {
            user: " bob ".to_string(),
            age: Some(30),
        };
        let mut errors = BindingResult::new(&login);
        errors.reject_if_empty_or_whitespace(LoginField::User, "required");
        assert!(!errors.has_errors());
    }
}
