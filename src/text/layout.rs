use std::{collections::HashMap, sync::Arc};

use crate::{
    foundation::core::{BoxSize, PixelPos, Rgb8},
    foundation::error::{WallpaperError, WallpaperResult},
    gradient::compositor::Canvas,
    text::font::OutlineFace,
};

/// Transparent margin around the text box in the glyph pixmap, for antialiased overhang.
const PIXMAP_PAD: u16 = 2;

/// Shaped, line-broken text ready to measure and rasterize.
pub type TextLayout = parley::Layout<()>;

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashMap<String, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Shape and lay out plain text (hard breaks on `'\n'`) with `face` at `size_px`.
    pub fn layout_plain(
        &mut self,
        text: &str,
        face: &OutlineFace,
        size_px: f32,
    ) -> WallpaperResult<TextLayout> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(WallpaperError::font("text size_px must be finite and > 0"));
        }

        let family_name = self.register(face)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: TextLayout = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    fn register(&mut self, face: &OutlineFace) -> WallpaperResult<String> {
        if let Some(name) = self.families.get(&face.key) {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(face.bytes.as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            WallpaperError::font(format!("no font families registered from '{}'", face.key))
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| WallpaperError::font("registered font family has no name"))?
            .to_string();
        self.families.insert(face.key.clone(), family_name.clone());
        Ok(family_name)
    }
}

/// Pixel box covering `layout`, rounded outward.
pub fn layout_size(layout: &TextLayout) -> BoxSize {
    BoxSize::new(
        layout.width().max(0.0).ceil() as u32,
        layout.height().max(0.0).ceil() as u32,
    )
}

/// Rasterize `layout` with `face` in `color` and composite it onto `canvas` with the layout's
/// top-left corner at `origin`. Pixels outside the canvas are dropped.
pub fn draw_layout(
    canvas: &mut Canvas,
    layout: &TextLayout,
    face: &OutlineFace,
    origin: PixelPos,
    size: BoxSize,
    color: Rgb8,
) {
    let width = pixmap_extent(size.width);
    let height = pixmap_extent(size.height);

    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
        0,
    );

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(PIXMAP_PAD),
        f64::from(PIXMAP_PAD),
    )));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, 255,
    ));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    let left = i64::from(origin.x) - i64::from(PIXMAP_PAD);
    let top = i64::from(origin.y) - i64::from(PIXMAP_PAD);
    composite_premul_over(canvas, pixmap.data_as_u8_slice(), usize::from(width), left, top);
}

fn pixmap_extent(box_extent: u32) -> u16 {
    let padded = box_extent.saturating_add(2 * u32::from(PIXMAP_PAD));
    u16::try_from(padded).unwrap_or(u16::MAX)
}

/// Source-over of premultiplied RGBA8 `src` (row-major, `src_width` wide) onto the opaque
/// RGB canvas, with the source's top-left pixel at (`left`, `top`).
pub(crate) fn composite_premul_over(
    canvas: &mut Canvas,
    src: &[u8],
    src_width: usize,
    left: i64,
    top: i64,
) {
    if src_width == 0 {
        return;
    }
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));

    for (row_idx, row) in src.chunks_exact(src_width * 4).enumerate() {
        let y = top + row_idx as i64;
        if y < 0 || y >= ch {
            continue;
        }
        for (col_idx, px) in row.chunks_exact(4).enumerate() {
            let x = left + col_idx as i64;
            let a = px[3];
            if a == 0 || x < 0 || x >= cw {
                continue;
            }
            let dst = canvas.get_pixel_mut(x as u32, y as u32);
            let inv = 255 - u16::from(a);
            for c in 0..3 {
                let blended = u16::from(px[c]) + mul_div255(u16::from(dst.0[c]), inv);
                dst.0[c] = blended.min(255) as u8;
            }
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
