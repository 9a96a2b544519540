//! Runtime geometry settings shared between the geometry crates.
//!
//! The constants in [`crate::constants`] are the defaults; a
//! [`GeometryConfig`] snapshot lets a host override them after validation.

use crate::constants::{
    DEFAULT_CHECKPOINT_PRECISION, DEFAULT_MITER_LIMIT, EPSILON, ROUND_FAN_STEP_DEGREES,
};
use thiserror::Error;

/// Immutable snapshot of geometry settings.
///
/// # Examples
/// ```
/// use config::settings::GeometryConfig;
/// let config = GeometryConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Distance under which consecutive line anchors count as one.
    pub tolerance: f64,
    /// Miter leg cap, as a multiple of half the line width.
    pub miter_limit: f64,
    /// Largest wedge angle of a round-corner fan, in degrees.
    pub fan_step_degrees: f64,
    /// Samples per Bezier arc-length table of a `BezierCurve`.
    pub checkpoint_precision: usize,
}

impl GeometryConfig {
    /// Builds a configuration, rejecting values the geometry kernels cannot
    /// work with.
    ///
    /// # Examples
    /// ```
    /// use config::settings::GeometryConfig;
    /// let cfg = GeometryConfig::new(1.0e-6, 2.0, 10.0, 32).expect("valid config");
    /// assert_eq!(cfg.checkpoint_precision, 32);
    /// ```
    pub fn new(
        tolerance: f64,
        miter_limit: f64,
        fan_step_degrees: f64,
        checkpoint_precision: usize,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(miter_limit >= 1.0) {
            return Err(ConfigError::InvalidMiterLimit(miter_limit));
        }
        if !(fan_step_degrees > 0.0 && fan_step_degrees <= 180.0) {
            return Err(ConfigError::InvalidFanStep(fan_step_degrees));
        }
        if checkpoint_precision < 1 {
            return Err(ConfigError::InvalidPrecision(checkpoint_precision));
        }
        Ok(Self {
            tolerance,
            miter_limit,
            fan_step_degrees,
            checkpoint_precision,
        })
    }

    /// Smallest sine magnitude the miter computation may divide by.
    #[inline]
    pub fn min_miter_sine(&self) -> f64 {
        1.0 / self.miter_limit
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            miter_limit: DEFAULT_MITER_LIMIT,
            fan_step_degrees: ROUND_FAN_STEP_DEGREES,
            checkpoint_precision: DEFAULT_CHECKPOINT_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    #[error("tolerance must be positive: {0}")]
    InvalidTolerance(f64),
    /// Raised when the miter limit would shorten legs below half the width.
    #[error("miter_limit must be >= 1: {0}")]
    InvalidMiterLimit(f64),
    /// Raised when the fan wedge angle is outside (0, 180].
    #[error("fan_step_degrees must be in (0, 180]: {0}")]
    InvalidFanStep(f64),
    /// Raised when the arc-length table would have no samples.
    #[error("checkpoint_precision must be >= 1: {0}")]
    InvalidPrecision(usize),
}

#[cfg(test)]
mod tests;
