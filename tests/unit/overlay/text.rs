use super::*;

fn overlay() -> TextOverlay {
    TextOverlay::with_resolver(FontResolver::without_system_fonts())
}

fn solid(w: u32, h: u32, c: Rgb8) -> Canvas {
    Canvas::from_pixel(w, h, c.into())
}

#[test]
fn inverted_anchor_insets_by_one_pixel() {
    let anchor = inverted_anchor(PixelPos::new(100, 100), BoxSize::new(40, 10));
    assert_eq!(anchor, PixelPos::new(59, 89));
}

#[test]
fn inverted_anchor_saturates() {
    let anchor = inverted_anchor(PixelPos::new(i32::MIN + 1, 0), BoxSize::new(u32::MAX, 0));
    assert_eq!(anchor, PixelPos::new(i32::MIN, -1));
}

#[test]
fn sampled_color_contrasts_with_background() {
    let size = BoxSize::new(4, 4);
    let black = solid(8, 8, Rgb8::BLACK);
    assert_eq!(sample_text_color(&black, PixelPos::new(1, 1), size), Rgb8::WHITE);
    let white = solid(8, 8, Rgb8::WHITE);
    assert_eq!(sample_text_color(&white, PixelPos::new(1, 1), size), Rgb8::BLACK);
}

#[test]
fn sampling_clamps_to_canvas_edges() {
    let mut canvas = solid(4, 4, Rgb8::WHITE);
    canvas.put_pixel(3, 3, Rgb8::BLACK.into());
    // Far corner (13, 13) reads the bottom-right pixel: tl=255, br=0 -> 382 -> black text.
    let c = sample_text_color(&canvas, PixelPos::new(-2, -2), BoxSize::new(15, 15));
    assert_eq!(c, Rgb8::BLACK);
}

#[test]
fn sampling_an_empty_canvas_defaults_to_black() {
    let canvas = Canvas::new(0, 0);
    let c = sample_text_color(&canvas, PixelPos::new(0, 0), BoxSize::new(1, 1));
    assert_eq!(c, Rgb8::BLACK);
}

#[test]
fn auto_color_draws_white_on_black() {
    let mut canvas = solid(16, 16, Rgb8::BLACK);
    let spec = TextSpec::new("I", FontSpec::builtin(9.0), PixelPos::new(1, 1));
    overlay().overlay(&mut canvas, &spec);
    assert_eq!(canvas.get_pixel(3, 1).0, [255, 255, 255]);
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn explicit_color_bypasses_sampling() {
    let mut canvas = solid(16, 16, Rgb8::BLACK);
    let spec = TextSpec::new("I", FontSpec::builtin(9.0), PixelPos::new(1, 1))
        .with_color(Rgb8::new(255, 0, 0));
    overlay().overlay(&mut canvas, &spec);
    assert_eq!(canvas.get_pixel(3, 1).0, [255, 0, 0]);
}

#[test]
fn inverted_text_sits_in_bottom_right_corner() {
    let mut canvas = solid(20, 20, Rgb8::WHITE);
    let spec = TextSpec::new("I", FontSpec::builtin(9.0), PixelPos::new(20, 20)).inverted();

    let mut ov = overlay();
    assert_eq!(ov.measure(&spec), BoxSize::new(5, 7));
    ov.overlay(&mut canvas, &spec);

    // Anchor (14, 12): top bar of 'I' spans x 15..=17 on row 12.
    assert_eq!(canvas.get_pixel(16, 12).0, [0, 0, 0]);
    assert_eq!(canvas.get_pixel(14, 12).0, [255, 255, 255]);
    // Bottom bar on row 18.
    assert_eq!(canvas.get_pixel(16, 18).0, [0, 0, 0]);
    assert_eq!(canvas.get_pixel(19, 19).0, [255, 255, 255]);
}

#[test]
fn overlay_returns_the_same_canvas() {
    let mut canvas = solid(8, 8, Rgb8::BLACK);
    let ptr = canvas.as_raw().as_ptr();
    let spec = TextSpec::new("x", FontSpec::builtin(9.0), PixelPos::new(0, 0));
    let mut ov = overlay();
    let out = ov.overlay(&mut canvas, &spec);
    assert_eq!(out.as_raw().as_ptr(), ptr);
}

#[test]
fn unreadable_font_falls_back_to_bitmap() {
    let dir = std::path::PathBuf::from("target").join("unit_overlay_font");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.ttf");
    std::fs::write(&path, b"\0\0\0\0 not a font").unwrap();

    let font = FontSpec::new(path.to_string_lossy().to_string(), 9.0);
    let spec = TextSpec::new("AB", font, PixelPos::new(0, 0));
    let mut ov = overlay();
    assert_eq!(ov.measure(&spec), BoxSize::new(11, 7));

    let mut canvas = solid(16, 16, Rgb8::BLACK);
    ov.overlay(&mut canvas, &spec);
    assert!(canvas.pixels().any(|p| p.0 == [255, 255, 255]));
}

#[test]
fn missing_font_falls_back_to_bitmap() {
    let spec = TextSpec::new(
        "AB",
        FontSpec::new("no-such-font-anywhere.ttf", 18.0),
        PixelPos::new(0, 0),
    );
    assert_eq!(overlay().measure(&spec), BoxSize::new(22, 14));
}

#[test]
fn text_outside_canvas_is_clipped() {
    let mut canvas = solid(8, 8, Rgb8::BLACK);
    let spec = TextSpec::new("WWWW\nWWWW", FontSpec::builtin(27.0), PixelPos::new(-4, 5));
    overlay().overlay(&mut canvas, &spec);
    assert_eq!(canvas.width(), 8);
}

fn tuffy_overlay() -> TextOverlay {
    TextOverlay::with_resolver(
        FontResolver::without_system_fonts().with_font_dir("tests/data/fonts"),
    )
}

#[test]
fn outline_signature_fits_its_inverted_box() {
    let corner = PixelPos::new(390, 110);
    let spec = TextSpec::new("My github: DoktorTa", FontSpec::new("Tuffy", 20.0), corner).inverted();

    let mut ov = tuffy_overlay();
    let size = ov.measure(&spec);
    // The bitmap fallback at 20px would be 226x14.
    assert_ne!(size, BitmapFont::for_size(20.0).measure(&spec.text));
    assert!(size.width > 0 && size.height > 0);

    let mut canvas = solid(400, 120, Rgb8::WHITE);
    ov.overlay(&mut canvas, &spec);

    let anchor = inverted_anchor(corner, size);
    let ink: Vec<(i32, i32)> = canvas
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 != [255, 255, 255])
        .map(|(x, y, _)| (x as i32, y as i32))
        .collect();
    assert!(ink.len() > 50, "only {} pixels inked", ink.len());
    for &(x, y) in &ink {
        assert!(x >= anchor.x - 2 && x <= corner.x, "x {x} outside box");
        assert!(y >= anchor.y - 2 && y <= corner.y, "y {y} outside box");
    }
}

#[test]
fn outline_caption_is_drawn_in_contrast_color() {
    let spec = TextSpec::new("0A141E", FontSpec::new("Tuffy.ttf", 20.0), PixelPos::new(4, 4));
    let mut canvas = solid(160, 40, Rgb8::BLACK);
    tuffy_overlay().overlay(&mut canvas, &spec);
    // White coverage over black leaves only grays.
    assert!(canvas.pixels().any(|p| p.0[0] > 128));
    assert!(canvas.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
}
