//! Validation for identifiers taken from request paths.
//!
//! Identifiers are ASCII decimal digits only. Signs, whitespace and values
//! outside the `i64` range are rejected so that a malformed path segment
//! never reaches the database.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a path segment into a [`DbId`].
///
/// `kind` names the identifier in the error message, e.g. `"category"`
/// produces `"Invalid category ID"`.
pub fn parse_id(raw: &str, kind: &str) -> Result<DbId, CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid {kind} ID"));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    raw.parse::<DbId>().map_err(|_| invalid())
}
