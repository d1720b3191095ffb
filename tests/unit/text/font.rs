use super::*;

#[test]
fn builtin_and_empty_names_select_bitmap_font() {
    let mut fonts = FontResolver::without_system_fonts();
    for name in ["builtin", "BUILTIN", "", "  "] {
        let resolved = fonts.resolve(&FontSpec::new(name, 28.0));
        assert!(matches!(resolved, ResolvedFont::Bitmap(f) if f.scale() == 3));
    }
}

#[test]
fn unknown_font_degrades_to_bitmap() {
    let mut fonts = FontResolver::without_system_fonts();
    let resolved = fonts.resolve(&FontSpec::new("definitely-not-a-font-name.ttf", 18.0));
    assert!(matches!(resolved, ResolvedFont::Bitmap(f) if f.scale() == 2));

    // Second lookup is served from the negative cache.
    let resolved = fonts.resolve(&FontSpec::new("definitely-not-a-font-name.ttf", 9.0));
    assert!(matches!(resolved, ResolvedFont::Bitmap(f) if f.scale() == 1));
}

#[test]
fn existing_path_is_read_verbatim() {
    let dir = std::path::PathBuf::from("target").join("unit_font_path");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("fake.ttf");
    std::fs::write(&path, b"not really a font").unwrap();

    let mut fonts = FontResolver::without_system_fonts();
    let name = path.to_string_lossy().to_string();
    match fonts.resolve(&FontSpec::new(name.clone(), 12.0)) {
        ResolvedFont::Outline(face) => {
            assert_eq!(face.key, name);
            assert_eq!(face.bytes.as_slice(), b"not really a font");
        }
        ResolvedFont::Bitmap(_) => panic!("expected the file to be read"),
    }
}

#[test]
fn font_spec_round_trips_through_json() {
    let spec = FontSpec::new("consola.ttf", 28.0);
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "consola.ttf", "size_px": 28.0 }));
    assert_eq!(serde_json::from_value::<FontSpec>(json).unwrap(), spec);
}
