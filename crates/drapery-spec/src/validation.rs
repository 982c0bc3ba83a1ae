//! Common validation utilities shared by the pleat generators.
//!
//! The numeric core is total over its declared domains; these helpers reject
//! parameter bundles that fall outside them before any buffer is allocated.

use crate::error::SpecError;

/// Largest accepted raster edge in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Validate that a raster is at least 1x1, within bounds, and doesn't overflow.
///
/// # Example
/// ```
/// use drapery_spec::validation::validate_resolution;
///
/// assert!(validate_resolution(512, 2048).is_ok());
/// assert!(validate_resolution(0, 100).is_err());
/// ```
pub fn validate_resolution(width: u32, height: u32) -> Result<(), SpecError> {
    if width == 0 || height == 0 {
        return Err(SpecError::InvalidParameter(format!(
            "resolution must be at least 1x1, got [{}, {}]",
            width, height
        )));
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(SpecError::InvalidParameter(format!(
            "resolution is too large: max is {}x{}, got [{}, {}]",
            MAX_DIMENSION, MAX_DIMENSION, width, height
        )));
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| SpecError::InvalidParameter("resolution is too large".to_string()))?;

    Ok(())
}

/// Validate that a value is finite.
pub fn validate_finite(name: &str, value: f64) -> Result<(), SpecError> {
    if !value.is_finite() {
        return Err(SpecError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite and strictly positive.
pub fn validate_positive(name: &str, value: f64) -> Result<(), SpecError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(SpecError::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value lies in [0, 1].
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), SpecError> {
    validate_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(SpecError::InvalidParameter(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_bounds() {
        assert!(validate_resolution(1, 1).is_ok());
        assert!(validate_resolution(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert!(validate_resolution(0, 1).is_err());
        assert!(validate_resolution(1, 0).is_err());
        assert!(validate_resolution(MAX_DIMENSION + 1, 1).is_err());
    }

    #[test]
    fn test_scalar_checks() {
        assert!(validate_finite("x", f64::NAN).is_err());
        assert!(validate_finite("x", -3.0).is_ok());
        assert!(validate_positive("x", 0.0).is_err());
        assert!(validate_positive("x", 0.1).is_ok());
        assert!(validate_unit_interval("x", 1.0).is_ok());
        assert!(validate_unit_interval("x", 1.01).is_err());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = validate_unit_interval("ao_min", 2.0).unwrap_err();
        assert!(err.to_string().contains("ao_min"));
    }
}
