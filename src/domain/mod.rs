pub mod entities;
pub mod gateways;
pub mod validation;
