//! Gradient wallpaper rendering.
//!
//! A wallpaper is a multi-stop linear gradient filled across an RGB canvas, optionally
//! decorated with two blocks of text whose color (black or white) is picked from the pixels
//! underneath:
//!
//! - a caption in the top-left corner listing every stop as hex
//! - a signature anchored at the bottom-right corner
//!
//! The entry points are [`render_gradient`] for the bare background, [`TextOverlay`] for
//! contrast-aware text, and [`WallpaperConfig::render`] for the whole pipeline driven by a
//! JSON document.
//!
//! Rendering is deterministic: equal inputs (including the gradient group seed) produce
//! byte-identical canvases whether the fill runs sequentially or on a rayon pool.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod config;
mod foundation;
mod gradient;
mod overlay;
mod text;
mod wallpaper;

pub use crate::config::WallpaperConfig;
pub use crate::foundation::core::{BoxSize, Orientation, PixelPos, Rgb8};
pub use crate::foundation::error::{WallpaperError, WallpaperResult};
pub use crate::foundation::rng::Rng64;
pub use crate::gradient::compositor::{Canvas, RenderThreading, render_gradient};
pub use crate::gradient::groups::{
    BaseGradientGroup, GRADIENT_GROUPS, GradientGroup, RandomGradientGroup, SkyGradientGroup,
    gradient_group,
};
pub use crate::gradient::ramp::{Segment, build_ramp, lerp_channel, lerp_rgb, plan_segments};
pub use crate::gradient::stops::{GradientSpec, WEIGHT_SUM_TOLERANCE};
pub use crate::overlay::contrast::{
    find_best_text_color, luma_brightness, representative_background, simple_contrast,
};
pub use crate::overlay::text::{TextOverlay, TextSpec, inverted_anchor, sample_text_color};
pub use crate::text::bitmap::{ADVANCE, BitmapFont, GLYPH_HEIGHT, GLYPH_WIDTH, LINE_ADVANCE};
pub use crate::text::font::{BUILTIN_FONT, FontResolver, FontSpec, OutlineFace, ResolvedFont};
pub use crate::text::layout::{TextLayout, TextLayoutEngine, draw_layout, layout_size};
pub use crate::wallpaper::{
    DEFAULT_SIGNATURE, GradientWallpaper, WALLPAPER_GENERATORS, WallpaperGenerator,
    WallpaperRequest, WallpaperSettings, caption_text, wallpaper_generator,
};
