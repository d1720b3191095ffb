use std::{
    collections::hash_map::RandomState,
    fs::File,
    hash::{BuildHasher, Hasher},
    io::BufReader,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Orientation, Rgb8},
    foundation::error::{WallpaperError, WallpaperResult},
    gradient::{
        compositor::{Canvas, RenderThreading},
        groups::{GRADIENT_GROUPS, gradient_group},
        stops::GradientSpec,
    },
    wallpaper::{
        DEFAULT_SIGNATURE, WALLPAPER_GENERATORS, WallpaperRequest, WallpaperSettings,
        wallpaper_generator,
    },
};

/// JSON render request: canvas, colors, and text decoration in one flat document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WallpaperConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// `"H"` or `"V"`.
    #[serde(default)]
    pub orientation: Orientation,
    /// Generator name.
    #[serde(default = "default_generator")]
    pub generator: String,
    /// Gradient group used when `colors` is absent.
    #[serde(default = "default_group")]
    pub group: String,
    /// Seed for the gradient group; absent means a fresh seed per render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Explicit stops; overrides `group`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Rgb8>>,
    /// Segment weights, one per adjacent stop pair, summing to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slip: Option<Vec<f64>>,
    /// Font identifier for caption and signature.
    #[serde(default = "default_font")]
    pub font: String,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Extra directories searched for `font`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_dirs: Vec<PathBuf>,
    /// Distance of caption and signature from the canvas edges.
    #[serde(default = "default_margin")]
    pub margin: i32,
    /// Draw the stop-list caption.
    #[serde(default = "default_true")]
    pub caption: bool,
    /// Bottom-right signature; `null` disables it.
    #[serde(default = "default_signature")]
    pub signature: Option<String>,
    /// Canvas fill threading.
    #[serde(default)]
    pub threading: RenderThreading,
}

fn default_generator() -> String {
    WALLPAPER_GENERATORS[0].to_owned()
}

fn default_group() -> String {
    GRADIENT_GROUPS[0].to_owned()
}

fn default_font() -> String {
    WallpaperSettings::default().font
}

fn default_font_size() -> f32 {
    WallpaperSettings::default().font_size
}

fn default_margin() -> i32 {
    WallpaperSettings::default().margin
}

fn default_true() -> bool {
    true
}

fn default_signature() -> Option<String> {
    Some(DEFAULT_SIGNATURE.to_owned())
}

impl WallpaperConfig {
    /// Config with every optional field at its default.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::default(),
            generator: default_generator(),
            group: default_group(),
            seed: None,
            colors: None,
            slip: None,
            font: default_font(),
            font_size: default_font_size(),
            font_dirs: Vec::new(),
            margin: default_margin(),
            caption: true,
            signature: default_signature(),
            threading: RenderThreading::default(),
        }
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> WallpaperResult<Self> {
        serde_json::from_str(json).map_err(|e| WallpaperError::config(format!("parse config: {e}")))
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: &Path) -> WallpaperResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            WallpaperError::config(format!("parse config '{}': {e}", path.display()))
        })
    }

    /// Check everything that can be checked without rendering.
    pub fn validate(&self) -> WallpaperResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WallpaperError::invalid_argument(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(WallpaperError::invalid_argument(
                "font_size must be finite and > 0",
            ));
        }
        if !WALLPAPER_GENERATORS.contains(&self.generator.trim().to_ascii_lowercase().as_str()) {
            return Err(WallpaperError::invalid_argument(format!(
                "unknown generator \"{}\"",
                self.generator
            )));
        }
        self.gradient_spec()?.validate()
    }

    /// Copy with `seed` filled in, drawing a fresh one when it is absent.
    pub fn with_resolved_seed(&self) -> Self {
        let mut cfg = self.clone();
        if cfg.seed.is_none() {
            cfg.seed = Some(fresh_seed());
        }
        cfg
    }

    /// Stops (explicit or from the group) paired with the configured weights.
    ///
    /// Without a seed every call may pick different group colors; see
    /// [`WallpaperConfig::with_resolved_seed`].
    pub fn gradient_spec(&self) -> WallpaperResult<GradientSpec> {
        let stops = match &self.colors {
            Some(colors) => colors.clone(),
            None => {
                let seed = self.seed.unwrap_or_else(fresh_seed);
                gradient_group(&self.group, seed)?.gradient_colors()
            }
        };
        Ok(GradientSpec {
            stops,
            weights: self.slip.clone(),
        })
    }

    /// Text decoration settings.
    pub fn settings(&self) -> WallpaperSettings {
        WallpaperSettings {
            font: self.font.clone(),
            font_size: self.font_size,
            font_dirs: self.font_dirs.clone(),
            margin: self.margin,
            caption: self.caption,
            signature: self.signature.clone(),
            threading: self.threading.clone(),
        }
    }

    /// Canvas request for the configured generator.
    pub fn request(&self) -> WallpaperResult<WallpaperRequest> {
        Ok(WallpaperRequest {
            width: self.width,
            height: self.height,
            orientation: self.orientation,
            spec: self.gradient_spec()?,
        })
    }

    /// Validate, then render with the configured generator.
    ///
    /// An absent seed is resolved once up front, so validation and rendering see the same stops.
    pub fn render(&self) -> WallpaperResult<Canvas> {
        let cfg = self.with_resolved_seed();
        tracing::info!(seed = cfg.seed, group = %cfg.group, "rendering wallpaper");
        cfg.validate()?;
        let mut generator = wallpaper_generator(&cfg.generator, cfg.settings())?;
        generator.generate(&cfg.request()?)
    }
}

fn fresh_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    if let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) {
        hasher.write_u128(elapsed.as_nanos());
    }
    hasher.finish()
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
