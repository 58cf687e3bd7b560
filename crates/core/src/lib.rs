//! Shared types for the tasklist service.
//!
//! Holds the identifier type, the domain error enum, and the validation
//! applied to identifiers before they reach the repository layer.

pub mod error;
pub mod types;
pub mod validation;
