use storegen::{
    Background, Canvas, Color, Graphic, IRect, OverlayOp, RectOp, ShapeOp, TextEngine, compose,
};

/// Route compose's tracing spans through the libtest-captured writer.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn solid_graphic(width: u32, height: u32, background: Color, ops: Vec<ShapeOp>) -> Graphic {
    Graphic {
        canvas: Canvas { width, height },
        background: Background::Solid(background),
        ops,
    }
}

fn rect_op(rect: IRect, fill: Color) -> ShapeOp {
    ShapeOp::Rect(RectOp {
        rect,
        fill,
        outline: None,
    })
}

#[test]
fn output_dimensions_match_the_canvas() {
    let mut fonts = TextEngine::new();
    for (w, h) in [(1, 1), (64, 48), (512, 512), (1024, 500)] {
        let frame = compose(&solid_graphic(w, h, Color::BLACK, vec![]), &mut fonts).unwrap();
        assert_eq!((frame.width, frame.height), (w, h));
        assert_eq!(frame.data.len(), (w * h * 4) as usize);
    }
}

#[test]
fn solid_background_fills_every_pixel_exactly() {
    let mut fonts = TextEngine::new();
    let bg = Color::rgb(204, 227, 255);
    let frame = compose(&solid_graphic(32, 32, bg, vec![]), &mut fonts).unwrap();
    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(frame.pixel(x, y), [204, 227, 255, 255], "pixel ({x},{y})");
        }
    }
}

#[test]
fn composition_is_deterministic() {
    init_tracing();
    let g = solid_graphic(
        64,
        64,
        Color::rgb(204, 227, 255),
        vec![
            rect_op(IRect::new(8, 8, 40, 40), Color::rgb(26, 35, 126)),
            rect_op(IRect::new(24, 24, 56, 56), Color::rgb(58, 102, 201)),
        ],
    );
    let mut fonts = TextEngine::new();
    let a = compose(&g, &mut fonts).unwrap();
    let b = compose(&g, &mut fonts).unwrap();
    assert_eq!(digest_u64(&a.data), digest_u64(&b.data));
}

#[test]
fn later_ops_paint_over_earlier_ones() {
    init_tracing();
    let first = Color::rgb(26, 35, 126);
    let second = Color::rgb(246, 223, 187);
    let g = solid_graphic(
        64,
        64,
        Color::WHITE,
        vec![
            rect_op(IRect::new(8, 8, 40, 40), first),
            rect_op(IRect::new(24, 24, 56, 56), second),
        ],
    );
    let mut fonts = TextEngine::new();
    let frame = compose(&g, &mut fonts).unwrap();

    // Overlap interior belongs to the later rect; non-overlap keeps the first.
    assert_eq!(frame.pixel(32, 32), [246, 223, 187, 255]);
    assert_eq!(frame.pixel(12, 12), [26, 35, 126, 255]);
    assert_eq!(frame.pixel(60, 60), [255, 255, 255, 255]);
}

#[test]
fn outlined_rect_shows_outline_at_the_edge_and_fill_inside() {
    let g = solid_graphic(
        64,
        64,
        Color::WHITE,
        vec![ShapeOp::Rect(RectOp {
            rect: IRect::new(10, 10, 50, 50),
            fill: Color::rgb(246, 223, 187),
            outline: Some(storegen::Outline {
                color: Color::rgb(212, 184, 150),
                width: 3,
            }),
        })],
    );
    let mut fonts = TextEngine::new();
    let frame = compose(&g, &mut fonts).unwrap();

    assert_eq!(frame.pixel(30, 11), [212, 184, 150, 255]);
    assert_eq!(frame.pixel(30, 30), [246, 223, 187, 255]);
}

#[test]
fn overlay_with_zero_alpha_is_a_pixel_exact_noop() {
    let base = solid_graphic(
        32,
        32,
        Color::rgb(204, 227, 255),
        vec![rect_op(IRect::new(4, 4, 28, 28), Color::rgb(26, 35, 126))],
    );
    let mut with_noop_overlay = base.clone();
    with_noop_overlay.ops.push(ShapeOp::Overlay(OverlayOp {
        rect: IRect::new(0, 0, 32, 32),
        color: Color::rgba(255, 255, 255, 0),
    }));

    let mut fonts = TextEngine::new();
    let a = compose(&base, &mut fonts).unwrap();
    let b = compose(&with_noop_overlay, &mut fonts).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn overlay_with_full_alpha_replaces_the_base() {
    let g = solid_graphic(
        32,
        32,
        Color::rgb(204, 227, 255),
        vec![ShapeOp::Overlay(OverlayOp {
            rect: IRect::new(8, 8, 24, 24),
            color: Color::rgba(255, 0, 0, 255),
        })],
    );
    let mut fonts = TextEngine::new();
    let frame = compose(&g, &mut fonts).unwrap();
    assert_eq!(frame.pixel(16, 16), [255, 0, 0, 255]);
    assert_eq!(frame.pixel(2, 2), [204, 227, 255, 255]);
}

#[test]
fn translucent_overlay_lightens_but_keeps_opacity() {
    let g = solid_graphic(
        32,
        32,
        Color::rgb(58, 102, 201),
        vec![ShapeOp::Overlay(OverlayOp {
            rect: IRect::new(0, 0, 32, 32),
            color: Color::rgba(255, 255, 255, 77),
        })],
    );
    let mut fonts = TextEngine::new();
    let frame = compose(&g, &mut fonts).unwrap();
    let px = frame.pixel(16, 16);
    assert_eq!(px[3], 255);
    assert!(px[0] > 58 && px[1] > 102 && px[2] > 201);
}

#[test]
fn gradient_background_hits_top_exactly_and_bottom_within_tolerance() {
    let g = Graphic {
        canvas: Canvas {
            width: 1024,
            height: 500,
        },
        background: Background::VerticalGradient {
            top: Color::rgb(230, 242, 255),
            bottom: Color::rgb(179, 212, 255),
        },
        ops: vec![],
    };
    let mut fonts = TextEngine::new();
    let frame = compose(&g, &mut fonts).unwrap();

    assert_eq!(frame.pixel(0, 0), [230, 242, 255, 255]);
    assert_eq!(frame.pixel(1023, 0), [230, 242, 255, 255]);

    let last = frame.pixel(512, 499);
    assert!((i32::from(last[0]) - 179).abs() <= 1);
    assert!((i32::from(last[1]) - 212).abs() <= 1);
    assert_eq!(last[2], 255);
}

#[test]
fn rejects_a_non_normalized_rect() {
    let g = solid_graphic(
        32,
        32,
        Color::WHITE,
        vec![rect_op(IRect::new(20, 0, 10, 10), Color::BLACK)],
    );
    let mut fonts = TextEngine::new();
    let err = compose(&g, &mut fonts).unwrap_err();
    assert!(matches!(err, storegen::StoregenError::Geometry(_)));
}

#[test]
fn rejects_a_zero_sized_canvas() {
    let g = solid_graphic(0, 32, Color::WHITE, vec![]);
    let mut fonts = TextEngine::new();
    assert!(compose(&g, &mut fonts).is_err());
}
