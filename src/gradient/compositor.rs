use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Orientation, Rgb8},
    foundation::error::{WallpaperError, WallpaperResult},
    gradient::{ramp::build_ramp, stops::GradientSpec},
};

/// Mutable RGB8 pixel buffer, row-major and tightly packed.
pub type Canvas = image::RgbImage;

const CHANNELS: usize = 3;

/// Threading controls for the canvas fill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    /// Fill rows on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Pool size; `None` lets rayon pick.
    pub threads: Option<usize>,
}

/// Render a `width` x `height` canvas with a linear gradient along `orientation`.
///
/// Validation runs before the canvas is allocated, so an invalid request never yields a
/// partially painted buffer.
#[tracing::instrument(skip(spec, threading), fields(stops = spec.stops.len()))]
pub fn render_gradient(
    width: u32,
    height: u32,
    spec: &GradientSpec,
    orientation: Orientation,
    threading: &RenderThreading,
) -> WallpaperResult<Canvas> {
    if width == 0 || height == 0 {
        return Err(WallpaperError::invalid_argument(format!(
            "canvas must be at least 1x1, got {width}x{height}"
        )));
    }
    spec.validate()?;

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let total = orientation.extent(width, height);
    let ramp = build_ramp(total, spec);
    tracing::debug!(total, ramp_len = ramp.len(), "built gradient ramp");

    let mut canvas = Canvas::new(width, height);
    let stride = width as usize * CHANNELS;
    let data: &mut [u8] = &mut canvas;

    let fill = |(y, row): (usize, &mut [u8])| match orientation {
        Orientation::Horizontal => fill_row_from_ramp(row, &ramp),
        Orientation::Vertical => fill_row_solid(row, ramp[y]),
    };

    match pool {
        Some(pool) => pool.install(|| {
            data.par_chunks_exact_mut(stride).enumerate().for_each(fill);
        }),
        None => data.chunks_exact_mut(stride).enumerate().for_each(fill),
    }

    Ok(canvas)
}

fn fill_row_from_ramp(row: &mut [u8], ramp: &[Rgb8]) {
    for (px, c) in row.chunks_exact_mut(CHANNELS).zip(ramp) {
        px.copy_from_slice(&[c.r, c.g, c.b]);
    }
}

fn fill_row_solid(row: &mut [u8], c: Rgb8) {
    for px in row.chunks_exact_mut(CHANNELS) {
        px.copy_from_slice(&[c.r, c.g, c.b]);
    }
}

fn build_thread_pool(threads: Option<usize>) -> WallpaperResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(WallpaperError::invalid_argument(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        WallpaperError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/compositor.rs"]
mod tests;
