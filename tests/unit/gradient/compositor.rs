use super::*;

fn bw() -> GradientSpec {
    GradientSpec::uniform(vec![Rgb8::BLACK, Rgb8::WHITE])
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let err = render_gradient(0, 10, &bw(), Orientation::Horizontal, &Default::default())
        .unwrap_err();
    assert!(matches!(err, WallpaperError::InvalidArgument(_)));
}

#[test]
fn horizontal_fill_paints_full_height_columns() {
    let canvas =
        render_gradient(16, 5, &bw(), Orientation::Horizontal, &Default::default()).unwrap();
    for x in 0..16 {
        let top = *canvas.get_pixel(x, 0);
        for y in 1..5 {
            assert_eq!(*canvas.get_pixel(x, y), top);
        }
    }
}

#[test]
fn vertical_fill_paints_full_width_rows() {
    let canvas = render_gradient(5, 16, &bw(), Orientation::Vertical, &Default::default()).unwrap();
    for y in 0..16 {
        let left = *canvas.get_pixel(0, y);
        for x in 1..5 {
            assert_eq!(*canvas.get_pixel(x, y), left);
        }
    }
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(canvas.get_pixel(4, 15).0, [255, 255, 255]);
}

#[test]
fn parallel_fill_matches_sequential() {
    let spec = GradientSpec::weighted(
        vec![
            Rgb8::new(255, 0, 0),
            Rgb8::new(0, 255, 0),
            Rgb8::new(0, 0, 255),
        ],
        vec![0.3, 0.7],
    );
    let threading = RenderThreading {
        parallel: true,
        threads: Some(2),
    };
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let a = render_gradient(37, 23, &spec, orientation, &Default::default()).unwrap();
        let b = render_gradient(37, 23, &spec, orientation, &threading).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}

#[test]
fn zero_threads_is_rejected() {
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
    };
    assert!(render_gradient(4, 4, &bw(), Orientation::Horizontal, &threading).is_err());
}
