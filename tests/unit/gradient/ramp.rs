use super::*;

fn gray(v: u8) -> Rgb8 {
    Rgb8::new(v, v, v)
}

#[test]
fn uniform_segments_stretch_last_to_edge() {
    let spec = GradientSpec::uniform(vec![gray(0), gray(80), gray(160), gray(240)]);
    let segs = plan_segments(100, &spec);
    let spans: Vec<_> = segs.iter().map(|s| (s.start, s.end, s.nominal_len)).collect();
    assert_eq!(spans, vec![(0, 33, 33), (33, 66, 33), (66, 100, 33)]);
}

#[test]
fn weighted_segments_use_floor_of_share() {
    let spec = GradientSpec::weighted(vec![gray(0), gray(100), gray(200)], vec![0.25, 0.75]);
    let segs = plan_segments(10, &spec);
    let spans: Vec<_> = segs.iter().map(|s| (s.start, s.end, s.nominal_len)).collect();
    // floor(2.5) = 2, floor(7.5) = 7; the last segment absorbs the lost pixel.
    assert_eq!(spans, vec![(0, 2, 2), (2, 10, 7)]);
}

#[test]
fn progress_uses_nominal_length_and_can_exceed_one() {
    let seg = Segment {
        start: 10,
        end: 20,
        nominal_len: 4,
        from: gray(0),
        to: gray(100),
    };
    assert_eq!(seg.progress(10), 0.0);
    assert_eq!(seg.progress(14), 1.0);
    assert_eq!(seg.progress(16), 1.5);
    assert_eq!(seg.color_at(16), gray(150));
}

#[test]
fn overshoot_is_clamped_to_byte_range() {
    assert_eq!(lerp_channel(200, 250, 1.5), 255);
    assert_eq!(lerp_channel(50, 10, 1.5), 0);
    assert_eq!(lerp_channel(0, 255, 0.99), 252);
    assert_eq!(lerp_channel(255, 0, 0.5), 127);
}

#[test]
fn widened_final_segment_overshoots_then_clamps() {
    // 29 px over 5 segments: nominal 5, last segment spans 20..29.
    let spec = GradientSpec::uniform(vec![
        gray(0),
        gray(0),
        gray(0),
        gray(0),
        gray(200),
        gray(250),
    ]);
    let ramp = build_ramp(29, &spec);
    assert_eq!(ramp.len(), 29);
    assert_eq!(ramp[25], gray(250));
    // progress 6/5 and 7/5 keep climbing past the stop until the byte ceiling.
    assert_eq!(ramp[26], gray(255));
    assert_eq!(ramp[27], gray(255));
    assert_eq!(ramp[28], gray(250));
}

#[test]
fn ramp_ends_exactly_on_last_stop() {
    let spec = GradientSpec::uniform(vec![gray(0), gray(255)]);
    let ramp = build_ramp(100, &spec);
    assert_eq!(ramp[0], gray(0));
    assert_eq!(ramp[98], gray(249));
    assert_eq!(ramp[99], gray(255));
}

#[test]
fn zero_length_segments_paint_their_target_color() {
    let spec = GradientSpec::uniform(vec![gray(0), gray(100), gray(200)]);
    let ramp = build_ramp(1, &spec);
    assert_eq!(ramp, vec![gray(200)]);
}
