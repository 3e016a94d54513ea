//! Command orchestration: one use case per operation, composing aggregate
//! validation with the persistence gateway.

pub mod category;
pub mod genre;
