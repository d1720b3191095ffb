use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgb8,
    error::{WallpaperError, WallpaperResult},
};

/// Allowed distance between the weight sum and `1.0`.
///
/// Absorbs binary rounding (`[0.1; 10]` sums to `0.9999999999999999`) while still
/// rejecting lists that are short by a visible amount such as `0.999`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Ordered color stops plus optional per-segment length fractions ("slip").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Anchor colors, first to last along the gradient axis.
    pub stops: Vec<Rgb8>,
    /// One fraction per adjacent pair of stops; `None` means equal segments.
    #[serde(default, alias = "slip", skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
}

impl GradientSpec {
    /// Equal-length segments between `stops`.
    pub fn uniform(stops: impl Into<Vec<Rgb8>>) -> Self {
        Self {
            stops: stops.into(),
            weights: None,
        }
    }

    /// Segments sized by `weights` (must sum to 1.0).
    pub fn weighted(stops: impl Into<Vec<Rgb8>>, weights: impl Into<Vec<f64>>) -> Self {
        Self {
            stops: stops.into(),
            weights: Some(weights.into()),
        }
    }

    /// Number of segments (`stops - 1`, saturating at zero).
    pub fn segment_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Check stop count and weight shape before any pixel is touched.
    pub fn validate(&self) -> WallpaperResult<()> {
        if self.stops.len() < 2 {
            return Err(WallpaperError::invalid_argument(format!(
                "gradient needs at least 2 color stops, got {}",
                self.stops.len()
            )));
        }

        let Some(weights) = &self.weights else {
            return Ok(());
        };

        if weights.len() != self.segment_count() {
            return Err(WallpaperError::invalid_argument(format!(
                "slip needs one weight per segment: expected {}, got {}",
                self.segment_count(),
                weights.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(WallpaperError::invalid_argument(format!(
                "slip weights must be finite and >= 0, got {w}"
            )));
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WallpaperError::invalid_argument(format!(
                "slip must sum to 1.0 (got {sum})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/stops.rs"]
mod tests;
