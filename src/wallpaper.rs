//! Wallpaper generators: gradient background plus caption and signature text.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Orientation, PixelPos, Rgb8},
    foundation::error::{WallpaperError, WallpaperResult},
    gradient::{
        compositor::{Canvas, RenderThreading, render_gradient},
        stops::GradientSpec,
    },
    overlay::text::{TextOverlay, TextSpec},
    text::font::{FontResolver, FontSpec},
};

/// Names accepted by [`wallpaper_generator`].
pub const WALLPAPER_GENERATORS: &[&str] = &["gradient"];

/// Signature stamped in the bottom-right corner unless overridden.
pub const DEFAULT_SIGNATURE: &str = "My github: DoktorTa";

/// What to render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallpaperRequest {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Gradient axis.
    pub orientation: Orientation,
    /// Stops and optional segment weights.
    pub spec: GradientSpec,
}

/// Text decoration shared by generators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperSettings {
    /// Font identifier for caption and signature.
    pub font: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Extra directories searched for `font`, besides the system fonts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub font_dirs: Vec<PathBuf>,
    /// Distance of caption and signature from the canvas edges.
    pub margin: i32,
    /// Draw the stop-list caption in the top-left corner.
    pub caption: bool,
    /// Bottom-right signature; `None` skips it.
    pub signature: Option<String>,
    /// Canvas fill threading.
    pub threading: RenderThreading,
}

impl Default for WallpaperSettings {
    fn default() -> Self {
        Self {
            font: "consola.ttf".to_owned(),
            font_size: 28.0,
            font_dirs: Vec::new(),
            margin: 24,
            caption: true,
            signature: Some(DEFAULT_SIGNATURE.to_owned()),
            threading: RenderThreading::default(),
        }
    }
}

/// Something that turns a request into a finished canvas.
pub trait WallpaperGenerator {
    /// Stable name used on the command line and in config files.
    fn name(&self) -> &'static str;

    /// Render `request` into a new canvas.
    fn generate(&mut self, request: &WallpaperRequest) -> WallpaperResult<Canvas>;
}

/// Look up a generator by name.
pub fn wallpaper_generator(
    name: &str,
    settings: WallpaperSettings,
) -> WallpaperResult<Box<dyn WallpaperGenerator>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "gradient" => Ok(Box::new(GradientWallpaper::new(settings))),
        other => Err(WallpaperError::invalid_argument(format!(
            "unknown generator \"{other}\" (expected one of: {})",
            WALLPAPER_GENERATORS.join(", ")
        ))),
    }
}

/// Caption listing every stop as an upper-case hex line under a title.
pub fn caption_text(stops: &[Rgb8]) -> String {
    let hex: Vec<String> = stops.iter().map(|c| c.to_hex()).collect();
    format!("GRADIENT WALLPAPER \n\n{}", hex.join("\n"))
}

/// Linear gradient background with contrast-colored caption and signature.
pub struct GradientWallpaper {
    settings: WallpaperSettings,
    overlay: TextOverlay,
}

impl GradientWallpaper {
    /// Generator resolving fonts from the system font database and `settings.font_dirs`.
    pub fn new(settings: WallpaperSettings) -> Self {
        let fonts = settings
            .font_dirs
            .iter()
            .fold(FontResolver::new(), |fonts, dir| fonts.with_font_dir(dir.clone()));
        Self::with_fonts(settings, fonts)
    }

    /// Generator with a caller-configured font resolver; `settings.font_dirs` is not consulted.
    pub fn with_fonts(settings: WallpaperSettings, fonts: FontResolver) -> Self {
        Self {
            settings,
            overlay: TextOverlay::with_resolver(fonts),
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &WallpaperSettings {
        &self.settings
    }

    fn font(&self) -> FontSpec {
        FontSpec::new(self.settings.font.clone(), self.settings.font_size)
    }
}

impl WallpaperGenerator for GradientWallpaper {
    fn name(&self) -> &'static str {
        "gradient"
    }

    #[tracing::instrument(skip_all, fields(width = request.width, height = request.height))]
    fn generate(&mut self, request: &WallpaperRequest) -> WallpaperResult<Canvas> {
        let mut canvas = render_gradient(
            request.width,
            request.height,
            &request.spec,
            request.orientation,
            &self.settings.threading,
        )?;

        let margin = self.settings.margin;
        if self.settings.caption {
            let caption = TextSpec::new(
                caption_text(&request.spec.stops),
                self.font(),
                PixelPos::new(margin, margin),
            );
            self.overlay.overlay(&mut canvas, &caption);
        }

        if let Some(signature) = &self.settings.signature {
            let corner = PixelPos::new(
                to_i32(request.width).saturating_sub(margin),
                to_i32(request.height).saturating_sub(margin),
            );
            let signature = TextSpec::new(signature.clone(), self.font(), corner).inverted();
            self.overlay.overlay(&mut canvas, &signature);
        }

        Ok(canvas)
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../tests/unit/wallpaper.rs"]
mod tests;
