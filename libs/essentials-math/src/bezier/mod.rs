//! # Bezier Curves
//!
//! Cubic Bezier segments and multi-part curves.
//!
//! ## Arc-Length Parameterization
//!
//! Raw Bezier parameters do not advance at constant speed along the curve.
//! Each segment can sample itself into a checkpoint table of cumulative
//! lengths; [`Bezier::evaluate_at_distance`] inverts that table so that
//! [`BezierCurve::get_point`] moves uniformly along the whole curve.
//!
//! ```text
//! t:          0 ─── 0.25 ─── 0.5 ─── 0.75 ─── 1
//! checkpoint: 0     l1       l2      l3       L   (cumulative length)
//! ```

mod curve;

#[cfg(test)]
mod tests;

pub use curve::BezierCurve;

use config::constants::DEFAULT_CHECKPOINT_PRECISION;
use glam::{DVec2, DVec3};
use std::ops::{Add, Mul, Sub};

/// Point types a Bezier curve can be evaluated over.
pub trait CurvePoint:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// Euclidean distance between two points.
    fn distance_to(self, other: Self) -> f64;
}

impl CurvePoint for DVec2 {
    #[inline]
    fn distance_to(self, other: Self) -> f64 {
        self.distance(other)
    }
}

impl CurvePoint for DVec3 {
    #[inline]
    fn distance_to(self, other: Self) -> f64 {
        self.distance(other)
    }
}

/// A cubic Bezier segment from `a` to `d` with handles `b` and `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier<P> {
    /// Start point
    pub a: P,
    /// Start handle
    pub b: P,
    /// End handle
    pub c: P,
    /// End point
    pub d: P,
    /// Cumulative lengths at `t = i / (len - 1)`; empty until computed.
    checkpoints: Vec<f64>,
}

impl<P: CurvePoint> Bezier<P> {
    /// Creates a segment. No arc-length table is computed.
    pub fn new(a: P, b: P, c: P, d: P) -> Self {
        Self {
            a,
            b,
            c,
            d,
            checkpoints: Vec::new(),
        }
    }

    /// Creates a segment and computes its arc-length table.
    pub fn with_checkpoints(a: P, b: P, c: P, d: P, precision: usize) -> Self {
        let mut bezier = Self::new(a, b, c, d);
        bezier.calculate_checkpoints(precision);
        bezier
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    ///
    /// `evaluate(0.0)` is exactly `a` and `evaluate(1.0)` is exactly `d`.
    pub fn evaluate(&self, t: f64) -> P {
        let u = 1.0 - t;
        self.a * (u * u * u)
            + self.b * (3.0 * u * u * t)
            + self.c * (3.0 * u * t * t)
            + self.d * (t * t * t)
    }

    /// Sum of the three control polygon edges.
    ///
    /// An upper bound of the arc length, used to pick subdivision counts.
    pub fn control_polygon_length(&self) -> f64 {
        self.a.distance_to(self.b) + self.b.distance_to(self.c) + self.c.distance_to(self.d)
    }

    /// Samples the curve `precision` times and stores cumulative lengths.
    pub fn calculate_checkpoints(&mut self, precision: usize) {
        self.checkpoints = self.sample_checkpoints(precision);
    }

    /// Returns true once an arc-length table exists.
    pub fn has_checkpoints(&self) -> bool {
        !self.checkpoints.is_empty()
    }

    fn sample_checkpoints(&self, precision: usize) -> Vec<f64> {
        let precision = precision.max(1);
        let mut table = Vec::with_capacity(precision + 1);
        let mut total = 0.0;
        let mut previous = self.a;
        table.push(0.0);
        for i in 1..=precision {
            let point = self.evaluate(i as f64 / precision as f64);
            total += previous.distance_to(point);
            table.push(total);
            previous = point;
        }
        table
    }

    /// Arc length of the segment.
    ///
    /// Uses the stored table when present, otherwise samples at
    /// [`DEFAULT_CHECKPOINT_PRECISION`].
    pub fn length(&self) -> f64 {
        match self.checkpoints.last() {
            Some(&length) => length,
            None => self
                .sample_checkpoints(DEFAULT_CHECKPOINT_PRECISION)
                .last()
                .copied()
                .unwrap_or(0.0),
        }
    }

    /// Returns the point `distance` along the curve from `a`, clamped to the
    /// segment.
    pub fn evaluate_at_distance(&self, distance: f64) -> P {
        let sampled;
        let table = if self.checkpoints.is_empty() {
            sampled = self.sample_checkpoints(DEFAULT_CHECKPOINT_PRECISION);
            &sampled
        } else {
            &self.checkpoints
        };
        self.evaluate(parameter_for_distance(table, distance))
    }
}

/// Inverts a cumulative length table into a curve parameter.
fn parameter_for_distance(table: &[f64], distance: f64) -> f64 {
    let steps = table.len().saturating_sub(1);
    let total = table.last().copied().unwrap_or(0.0);
    if steps == 0 || !(total > 0.0) || distance <= 0.0 {
        return 0.0;
    }
    if distance >= total {
        return 1.0;
    }

    let upper = table.partition_point(|&length| length < distance).clamp(1, steps);
    let lower_length = table[upper - 1];
    let span = table[upper] - lower_length;
    let fraction = if span > 0.0 {
        (distance - lower_length) / span
    } else {
        0.0
    };
    ((upper - 1) as f64 + fraction) / steps as f64
}
