//! Item service domain logic.
//!
//! Holds the item model, the accumulated-violation validation pipeline,
//! message-code resolution, the record store abstraction, and the add/edit
//! flow controller. Nothing in here knows about HTTP or SQL.

pub mod error;
pub mod flow;
pub mod item;
pub mod store;
pub mod types;
pub mod validation;
