//! Required-field validation for bug records.
//!
//! A bug cannot be created without a non-empty `name`, `description`, and
//! `category`. Validation runs before any SQL is issued, so a rejected
//! request never touches the database.

use crate::error::CoreError;

/// Public message returned when a create request is missing a required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Required fields: 'name', 'description', 'category'";

/// Public message returned when a create request carries no JSON body at all.
pub const NO_DATA_MESSAGE: &str = "No data provided";

/// Check that all three required fields are present and non-empty.
///
/// Returns the borrowed field values on success so callers never have to
/// re-unwrap the options after validating.
pub fn require_fields<'a>(
    name: Option<&'a str>,
    description: Option<&'a str>,
    category: Option<&'a str>,
) -> Result<(&'a str, &'a str, &'a str), CoreError> {
    match (name, description, category) {
        (Some(n), Some(d), Some(c)) if !n.is_empty() && !d.is_empty() && !c.is_empty() => {
            Ok((n, d, c))
        }
        _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}
