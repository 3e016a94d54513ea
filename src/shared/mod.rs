// Shared kernel used by every bounded context

pub mod application; // Use case contract, failure surface, pagination
pub mod errors; // Gateway-facing error types
pub mod utils; // Logging setup
