//! Coefficient tables for the pleat generators.
//!
//! Every table deserializes with per-field defaults equal to the shipped
//! constants, so a JSON file only needs the coefficients it changes.

mod flex;
mod flex25d;
mod placeholder;
mod sampling;

pub use flex::PleatFamilyConfig;
pub use flex25d::Flex25dParams;
pub use placeholder::PlaceholderParams;
pub use sampling::SampleGridParams;

use serde::de::DeserializeOwned;

use crate::error::SpecError;

/// Parse a coefficient table from JSON, filling omitted fields with defaults.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SpecError> {
    Ok(serde_json::from_str(json)?)
}
