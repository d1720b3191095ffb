//! One-dimensional color ramp: where each segment lives along the gradient axis and which
//! color each coordinate receives.
//!
//! Progress inside a segment is measured against the segment's *nominal* length
//! (`floor(total / segments)` or `floor(total * weight)`). The last segment is stretched to
//! the canvas edge to absorb rounding, so its progress can run past `1.0`; the resulting
//! channels are clamped to `0..=255`, and the very last coordinate is pinned to the final stop.

use crate::{
    foundation::core::Rgb8,
    gradient::stops::GradientSpec,
};

/// Pixel span between two consecutive stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// First coordinate painted by this segment.
    pub start: u32,
    /// One past the last coordinate painted by this segment.
    pub end: u32,
    /// Length used as the interpolation denominator (before edge correction).
    pub nominal_len: u32,
    /// Color at `start`.
    pub from: Rgb8,
    /// Color reached at `start + nominal_len`.
    pub to: Rgb8,
}

impl Segment {
    /// Interpolation progress at `pos`, measured against the nominal length.
    pub fn progress(&self, pos: u32) -> f64 {
        if self.nominal_len == 0 {
            return 1.0;
        }
        f64::from(pos - self.start) / f64::from(self.nominal_len)
    }

    /// Color painted at `pos`.
    pub fn color_at(&self, pos: u32) -> Rgb8 {
        lerp_rgb(self.from, self.to, self.progress(pos))
    }
}

/// Split `total` coordinates into one segment per adjacent stop pair.
///
/// `spec` must already be validated. Segments are contiguous, start at 0 and the last one
/// always ends at `total`.
pub fn plan_segments(total: u32, spec: &GradientSpec) -> Vec<Segment> {
    let count = spec.segment_count();
    if count == 0 {
        return Vec::new();
    }
    let uniform_len = total / count as u32;

    let mut segments = Vec::with_capacity(count);
    let mut start = 0u32;
    for (i, pair) in spec.stops.windows(2).enumerate() {
        let nominal_len = match &spec.weights {
            Some(weights) => (f64::from(total) * weights[i]).floor() as u32,
            None => uniform_len,
        };

        let mut end = start.saturating_add(nominal_len).min(total);
        if i + 1 == count {
            end = total;
        }

        segments.push(Segment {
            start,
            end,
            nominal_len,
            from: pair[0],
            to: pair[1],
        });
        start = end;
    }
    segments
}

/// Color for every coordinate `0..total` along the gradient axis.
pub fn build_ramp(total: u32, spec: &GradientSpec) -> Vec<Rgb8> {
    let segments = plan_segments(total, spec);
    let mut ramp = Vec::with_capacity(total as usize);
    for seg in &segments {
        ramp.extend((seg.start..seg.end).map(|pos| seg.color_at(pos)));
    }

    if let (Some(last_px), Some(last_stop)) = (ramp.last_mut(), spec.stops.last()) {
        *last_px = *last_stop;
    }
    ramp
}

/// Per-channel `c1 + (c2 - c1) * t`, truncated toward zero and clamped to a byte.
pub fn lerp_channel(c1: u8, c2: u8, t: f64) -> u8 {
    let c1 = f64::from(c1);
    let c2 = f64::from(c2);
    let v = (c1 + (c2 - c1) * t) as i32;
    v.clamp(0, 255) as u8
}

/// Channel-wise [`lerp_channel`].
pub fn lerp_rgb(a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
    Rgb8::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/ramp.rs"]
mod tests;
