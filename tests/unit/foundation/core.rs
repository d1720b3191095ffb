use super::*;
use serde_json::json;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#ff8000").unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!(Rgb8::parse_hex("0A0b0C").unwrap(), Rgb8::new(10, 11, 12));
    assert!(Rgb8::parse_hex("#fff").is_err());
    assert!(Rgb8::parse_hex("#gg0000").is_err());
}

#[test]
fn hex_output_is_upper_case_without_hash() {
    assert_eq!(Rgb8::new(10, 171, 255).to_hex(), "0AABFF");
    assert_eq!(Rgb8::new(10, 171, 255).to_string(), "#0AABFF");
}

#[test]
fn color_deserializes_from_string_or_array() {
    let c: Rgb8 = serde_json::from_value(json!("#102030")).unwrap();
    assert_eq!(c, Rgb8::new(16, 32, 48));

    let c: Rgb8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));

    assert!(serde_json::from_value::<Rgb8>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Rgb8>(json!([1, 2, 300])).is_err());
}

#[test]
fn orientation_names_and_extent() {
    assert_eq!("H".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
    assert!("diagonal".parse::<Orientation>().is_err());

    let o: Orientation = serde_json::from_value(json!("V")).unwrap();
    assert_eq!(o, Orientation::Vertical);
    assert_eq!(Orientation::Horizontal.extent(30, 20), 30);
    assert_eq!(Orientation::Vertical.extent(30, 20), 20);
}
