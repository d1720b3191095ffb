use super::*;

fn three_stops() -> Vec<Rgb8> {
    vec![
        Rgb8::new(255, 0, 0),
        Rgb8::new(0, 255, 0),
        Rgb8::new(0, 0, 255),
    ]
}

#[test]
fn single_stop_is_rejected() {
    let err = GradientSpec::uniform(vec![Rgb8::new(1, 2, 3)])
        .validate()
        .unwrap_err();
    assert!(matches!(err, WallpaperError::InvalidArgument(_)));
}

#[test]
fn empty_stops_are_rejected() {
    assert!(GradientSpec::default().validate().is_err());
}

#[test]
fn weight_count_must_match_segments() {
    let err = GradientSpec::weighted(three_stops(), vec![1.0])
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("one weight per segment"));
}

#[test]
fn weights_short_of_one_are_rejected() {
    let err = GradientSpec::weighted(three_stops(), vec![0.5, 0.499])
        .validate()
        .unwrap_err();
    assert!(matches!(err, WallpaperError::InvalidArgument(_)));
    assert!(err.to_string().contains("slip must sum to 1.0"));
}

#[test]
fn rounding_noise_in_weights_is_tolerated() {
    let stops: Vec<Rgb8> = (0..11).map(|i| Rgb8::new(i * 20, 0, 0)).collect();
    let spec = GradientSpec::weighted(stops, vec![0.1; 10]);
    spec.validate().unwrap();

    let third = 1.0 / 3.0;
    let stops = vec![Rgb8::BLACK, Rgb8::WHITE, Rgb8::BLACK, Rgb8::WHITE];
    GradientSpec::weighted(stops, vec![third, third, third])
        .validate()
        .unwrap();
}

#[test]
fn negative_or_nan_weights_are_rejected() {
    assert!(
        GradientSpec::weighted(three_stops(), vec![1.5, -0.5])
            .validate()
            .is_err()
    );
    assert!(
        GradientSpec::weighted(three_stops(), vec![f64::NAN, 1.0])
            .validate()
            .is_err()
    );
}

#[test]
fn slip_alias_deserializes() {
    let spec: GradientSpec = serde_json::from_value(serde_json::json!({
        "stops": ["#000000", "#ffffff"],
        "slip": [1.0]
    }))
    .unwrap();
    assert_eq!(spec.weights, Some(vec![1.0]));
    spec.validate().unwrap();
}
