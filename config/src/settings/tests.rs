//! Tests for the validated geometry settings.

use super::*;

/// Ensures default settings are sane and positive.
#[test]
fn default_settings_are_valid() {
    let cfg = GeometryConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.miter_limit >= 1.0);
    assert!(cfg.fan_step_degrees > 0.0);
    assert!(cfg.checkpoint_precision >= 1);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeometryConfig::new(0.0, 4.0, 15.0, 50).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GeometryConfig::new(1.0e-9, 0.5, 15.0, 50).unwrap_err(),
        ConfigError::InvalidMiterLimit(0.5)
    );
    assert_eq!(
        GeometryConfig::new(1.0e-9, 4.0, 0.0, 50).unwrap_err(),
        ConfigError::InvalidFanStep(0.0)
    );
    assert_eq!(
        GeometryConfig::new(1.0e-9, 4.0, 15.0, 0).unwrap_err(),
        ConfigError::InvalidPrecision(0)
    );
}

#[test]
fn nan_tolerance_is_rejected() {
    assert!(GeometryConfig::new(f64::NAN, 4.0, 15.0, 50).is_err());
}

#[test]
fn min_miter_sine_is_reciprocal_of_limit() {
    let cfg = GeometryConfig::new(1.0e-9, 2.0, 15.0, 50).unwrap();
    assert_eq!(cfg.min_miter_sine(), 0.5);
}

#[test]
fn error_messages_name_the_field() {
    let message = ConfigError::InvalidFanStep(200.0).to_string();
    assert!(message.contains("fan_step_degrees"));
}
