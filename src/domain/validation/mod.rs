//! Validation primitives shared by every aggregate.
//!
//! Aggregates check their invariants against a [`ValidationHandler`]; the
//! handler decides whether problems accumulate ([`Notification`]) or stop the
//! run at the first one ([`FailFast`]).

mod error;
mod handler;

pub use error::{DomainError, ValidationError};
pub use handler::{FailFast, Notification, ValidationHandler};
