//! Catalog management core.
//!
//! Domain aggregates (categories, genres) validate themselves against
//! accumulated business rules; use cases compose that validation with a
//! persistence gateway and return a single two-branch result instead of
//! throwing at the first problem.

pub mod application;
pub mod domain;
pub mod shared;
