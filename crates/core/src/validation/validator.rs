//! The validator seam.

use super::binding::{Bindable, BindingResult};
use super::codes::MessageCodesResolver;
use super::violation::ValidationOutcome;

/// A stateless rule set for one kind of object.
///
/// The validator for a given kind is picked by its type parameter and passed
/// to whoever needs it; there is no lookup by runtime type.
pub trait Validator<T: Bindable>: Send + Sync {
    /// Append every violated rule to `errors`. Must not stop at the first
    /// failure.
    fn validate_into(&self, errors: &mut BindingResult<'_, T>);

    /// Validate `target` with the default message-code format.
    fn validate(&self, target: &T) -> ValidationOutcome {
        self.validate_with(target, MessageCodesResolver::default())
    }

    /// Validate `target`, generating message codes with `resolver`.
    fn validate_with(&self, target: &T, resolver: MessageCodesResolver) -> ValidationOutcome {
        let mut errors = BindingResult::with_resolver(target, resolver);
        self.validate_into(&mut errors);
        errors.into_outcome()
    }
}
