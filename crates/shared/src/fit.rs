//! Fit check between two cuboids.
//!
//! Extents are compared positionally (width to width, height to height,
//! depth to depth). No rotation or axis permutation is tried.

use serde::{Deserialize, Serialize};

use crate::{Axis, BoxDimensions};

pub const FITS_MESSAGE: &str = "The inside cuboid fits inside the bigger cuboid.";
pub const DOES_NOT_FIT_MESSAGE: &str = "The inside cuboid does NOT fit inside the bigger cuboid.";

/// Результат проверки вложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub fits: bool,
    pub message: String,
}

impl FitReport {
    fn from_verdict(fits: bool) -> Self {
        let message = if fits {
            FITS_MESSAGE
        } else {
            DOES_NOT_FIT_MESSAGE
        };
        Self {
            fits,
            message: message.to_string(),
        }
    }
}

/// `true` iff every extent of `inner` is `<=` the matching extent of `outer`.
pub fn fits(inner: &BoxDimensions, outer: &BoxDimensions) -> bool {
    inner.width <= outer.width && inner.height <= outer.height && inner.depth <= outer.depth
}

/// Evaluate the fit and produce the user-facing report.
pub fn evaluate_fit(inner: &BoxDimensions, outer: &BoxDimensions) -> FitReport {
    FitReport::from_verdict(fits(inner, outer))
}

/// Axes on which `inner` sticks out of `outer`. Empty iff [`fits`].
pub fn overflowing_axes(inner: &BoxDimensions, outer: &BoxDimensions) -> Vec<Axis> {
    Axis::ALL
        .into_iter()
        .filter(|axis| inner.extent(*axis) > outer.extent(*axis))
        .collect()
}

/// Room left on each axis (`outer - inner`); negative where it overflows.
pub fn clearance(inner: &BoxDimensions, outer: &BoxDimensions) -> [f64; 3] {
    [
        outer.width - inner.width,
        outer.height - inner.height,
        outer.depth - inner.depth,
    ]
}
