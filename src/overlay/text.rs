use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{BoxSize, PixelPos, Rgb8},
    gradient::compositor::Canvas,
    overlay::contrast::{find_best_text_color, representative_background},
    text::{
        bitmap::BitmapFont,
        font::{FontResolver, FontSpec, OutlineFace, ResolvedFont},
        layout::{TextLayout, TextLayoutEngine, draw_layout, layout_size},
    },
};

/// One block of text to stamp onto a canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    /// Content; `'\n'` starts a new line.
    pub text: String,
    /// Requested face and size.
    pub font: FontSpec,
    /// Top-left corner of the text box, or its bottom-right corner when `invert_location` is set.
    pub position: PixelPos,
    /// Anchor the box's bottom-right corner (minus a one pixel inset) at `position`.
    #[serde(default)]
    pub invert_location: bool,
    /// Fill color; `None` picks black or white from the background.
    #[serde(default)]
    pub color: Option<Rgb8>,
}

impl TextSpec {
    /// Auto-colored text anchored at its top-left corner.
    pub fn new(text: impl Into<String>, font: FontSpec, position: PixelPos) -> Self {
        Self {
            text: text.into(),
            font,
            position,
            invert_location: false,
            color: None,
        }
    }

    /// Anchor at the bottom-right corner instead.
    pub fn inverted(mut self) -> Self {
        self.invert_location = true;
        self
    }

    /// Use an explicit fill color.
    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = Some(color);
        self
    }
}

/// Top-left anchor that puts a `size` box's bottom-right corner one pixel inside `position`.
pub fn inverted_anchor(position: PixelPos, size: BoxSize) -> PixelPos {
    let w = i32::try_from(size.width).unwrap_or(i32::MAX);
    let h = i32::try_from(size.height).unwrap_or(i32::MAX);
    PixelPos::new(
        position.x.saturating_sub(w).saturating_sub(1),
        position.y.saturating_sub(h).saturating_sub(1),
    )
}

/// Text color for a box at `anchor`: samples the box's top-left and bottom-right corners
/// (clamped into the canvas) and picks black or white against their estimate.
pub fn sample_text_color(canvas: &Canvas, anchor: PixelPos, size: BoxSize) -> Rgb8 {
    let far = PixelPos::new(
        anchor
            .x
            .saturating_add(i32::try_from(size.width).unwrap_or(i32::MAX)),
        anchor
            .y
            .saturating_add(i32::try_from(size.height).unwrap_or(i32::MAX)),
    );
    let (Some(top_left), Some(bottom_right)) =
        (sample_clamped(canvas, anchor), sample_clamped(canvas, far))
    else {
        return Rgb8::BLACK;
    };
    find_best_text_color(representative_background(top_left, bottom_right))
}

fn sample_clamped(canvas: &Canvas, pos: PixelPos) -> Option<Rgb8> {
    let max_x = canvas.width().checked_sub(1)?;
    let max_y = canvas.height().checked_sub(1)?;
    let x = (pos.x.max(0) as u32).min(max_x);
    let y = (pos.y.max(0) as u32).min(max_y);
    Some(Rgb8::from(*canvas.get_pixel(x, y)))
}

enum PreparedText {
    Outline {
        layout: TextLayout,
        face: OutlineFace,
    },
    Bitmap(BitmapFont),
}

impl PreparedText {
    fn size(&self, text: &str) -> BoxSize {
        match self {
            Self::Outline { layout, .. } => layout_size(layout),
            Self::Bitmap(font) => font.measure(text),
        }
    }
}

/// Draws contrast-aware text onto rendered canvases, caching font lookups between calls.
#[derive(Default)]
pub struct TextOverlay {
    fonts: FontResolver,
    layout: TextLayoutEngine,
}

impl TextOverlay {
    /// Overlay resolving fonts from the system font database.
    pub fn new() -> Self {
        Self::with_resolver(FontResolver::new())
    }

    /// Overlay using a preconfigured resolver.
    pub fn with_resolver(fonts: FontResolver) -> Self {
        Self {
            fonts,
            layout: TextLayoutEngine::new(),
        }
    }

    /// Measure `spec`'s text box with the font it would be drawn in.
    pub fn measure(&mut self, spec: &TextSpec) -> BoxSize {
        self.prepare(spec).size(&spec.text)
    }

    /// Stamp `spec` onto `canvas` and hand the same canvas back.
    ///
    /// Font problems never fail the call: an unknown or unreadable face is replaced by the
    /// bundled bitmap font. The canvas must already hold its background, because the text
    /// color is sampled from it.
    #[tracing::instrument(skip_all, fields(position = ?spec.position, invert = spec.invert_location))]
    pub fn overlay<'c>(&mut self, canvas: &'c mut Canvas, spec: &TextSpec) -> &'c mut Canvas {
        let prepared = self.prepare(spec);
        let size = prepared.size(&spec.text);

        let anchor = if spec.invert_location {
            inverted_anchor(spec.position, size)
        } else {
            spec.position
        };

        let color = spec
            .color
            .unwrap_or_else(|| sample_text_color(canvas, anchor, size));
        tracing::debug!(?anchor, ?size, %color, "drawing text");

        match &prepared {
            PreparedText::Outline { layout, face } => {
                draw_layout(canvas, layout, face, anchor, size, color)
            }
            PreparedText::Bitmap(font) => font.draw(canvas, anchor, &spec.text, color),
        }
        canvas
    }

    fn prepare(&mut self, spec: &TextSpec) -> PreparedText {
        match self.fonts.resolve(&spec.font) {
            ResolvedFont::Bitmap(font) => PreparedText::Bitmap(font),
            ResolvedFont::Outline(face) => {
                match self.layout.layout_plain(&spec.text, &face, spec.font.size_px) {
                    Ok(layout) => PreparedText::Outline { layout, face },
                    Err(err) => {
                        tracing::debug!(font = %face.key, error = %err, "using bundled bitmap font");
                        PreparedText::Bitmap(BitmapFont::for_size(spec.font.size_px))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/text.rs"]
mod tests;
