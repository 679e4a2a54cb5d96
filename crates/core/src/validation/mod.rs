//! Form validation pipeline.
//!
//! Validators append violations to a [`binding::BindingResult`] without
//! short-circuiting; the accumulated [`violation::ValidationOutcome`] is then
//! inspected by the caller, which decides whether to re-render the form or
//! persist. Each violation carries a message-code family produced by
//! [`codes::MessageCodesResolver`] that [`messages::MessageSource`] walks
//! most-specific-first to render text.

pub mod binding;
pub mod codes;
pub mod item_validator;
pub mod messages;
pub mod validator;
pub mod violation;
