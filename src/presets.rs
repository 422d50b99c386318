//! Named artwork presets.
//!
//! Every pixel coordinate here traces back to one of the source assets: the
//! 108 dp launcher vector, the proportional icon redesign, or the
//! feature-graphic layout. The tables are kept as explicit structs so the
//! "which pixels come from which source" contract stays auditable. The two
//! icon variants are deliberately independent presets, not a merge.

use crate::{
    bricks::BrickGrid,
    color::Color,
    error::StoregenResult,
    geom::{IPoint, IRect},
    model::{
        Background, Canvas, Graphic, LineOp, Outline, OverlayOp, RectOp, ShapeOp, TextAnchor,
        TextOp,
    },
    scale::Projection,
};

const BOOK_COVER: Color = Color::rgb(0x1a, 0x23, 0x7e);
const BOOK_SPINE: Color = Color::rgb(0x0d, 0x47, 0xa1);
const BOOK_PAGES: Color = Color::rgb(0xf6, 0xdf, 0xbb);
const PAGE_LINES: Color = Color::rgb(0xb3, 0xd4, 0xff);
const CROSS_INK: Color = Color::rgb(0x3a, 0x66, 0xc9);
const ICON_BACKGROUND: Color = Color::rgb(0xcc, 0xe3, 0xff);
const MORTAR: Color = Color::rgb(0xd4, 0xb8, 0x96);

/// Which icon rendition to compose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconPreset {
    /// Faithful projection of the 108 dp launcher vector, highlight included.
    VectorExact,
    /// Proportional full-square redesign: no shadow, no overlay.
    Guidelines2025,
}

/// The launcher vector's coordinate table, authored against a 108 dp viewport.
#[derive(Clone, Copy, Debug)]
pub struct VectorIconTable {
    pub viewport: f64,
    pub book: [f64; 4],
    pub spine: [f64; 4],
    pub pages: [f64; 4],
    pub page_line_ys: [f64; 6],
    pub page_line_x: (f64, f64),
    pub page_line_width: f64,
    pub cross_v: [f64; 4],
    pub cross_h: [f64; 4],
    pub highlight: [f64; 4],
}

pub const VECTOR_ICON: VectorIconTable = VectorIconTable {
    viewport: 108.0,
    book: [32.0, 38.0, 76.0, 78.0],
    spine: [32.0, 38.0, 36.0, 78.0],
    pages: [34.0, 40.0, 74.0, 76.0],
    page_line_ys: [48.0, 52.0, 56.0, 60.0, 64.0, 68.0],
    page_line_x: (40.0, 68.0),
    page_line_width: 0.8,
    cross_v: [51.0, 44.0, 57.0, 72.0],
    cross_h: [44.0, 54.0, 64.0, 60.0],
    highlight: [51.0, 44.0, 54.0, 72.0],
};

/// Proportional layout of the redesigned icon, as fractions of the canvas
/// and book box.
#[derive(Clone, Copy, Debug)]
pub struct GuidelineIconLayout {
    pub book_width_frac: f64,
    pub book_height_frac: f64,
    pub spine_frac: f64,
    pub page_margin_frac: f64,
    pub line_margin_frac: f64,
    pub line_spacing_frac: f64,
    pub line_start_frac: f64,
    pub max_page_lines: u32,
    pub cross_top_frac: f64,
    pub cross_w_frac: f64,
    pub cross_v_frac: f64,
    pub cross_hw_frac: f64,
    pub cross_hh_frac: f64,
    pub cross_lift_frac: f64,
}

pub const GUIDELINE_ICON: GuidelineIconLayout = GuidelineIconLayout {
    book_width_frac: 0.65,
    book_height_frac: 0.60,
    spine_frac: 0.08,
    page_margin_frac: 0.04,
    line_margin_frac: 0.15,
    line_spacing_frac: 0.08,
    line_start_frac: 0.15,
    max_page_lines: 7,
    cross_top_frac: 0.08,
    cross_w_frac: 0.15,
    cross_v_frac: 0.55,
    cross_hw_frac: 0.40,
    cross_hh_frac: 0.12,
    cross_lift_frac: 0.05,
};

/// Feature-graphic copy. Defaults carry the shipped wording.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FeatureGraphicSpec {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_source: Option<String>,
}

impl Default for FeatureGraphicSpec {
    fn default() -> Self {
        Self {
            title: "BibelVers".to_string(),
            subtitle: "Täglicher Bibelvers & Kotel Stream".to_string(),
            features: vec![
                "✓ Täglicher Bibelvers".to_string(),
                "✓ Kotel Livestreams".to_string(),
                "✓ Keine Werbung oder Tracker".to_string(),
                "✓ Kostenlos".to_string(),
            ],
            font_source: None,
        }
    }
}

/// Latin cross centered on a point: vertical beam through the center,
/// horizontal beam a quarter of the way down the vertical one.
#[derive(Clone, Copy, Debug)]
struct CrossMotif {
    center: IPoint,
    beam_w: i32,
    v_height: i32,
    h_width: i32,
    h_height: i32,
    color: Color,
}

impl CrossMotif {
    fn ops(&self) -> [ShapeOp; 2] {
        let cx = self.center.x;
        let v_top = self.center.y - self.v_height / 2;
        let h_top = v_top + (f64::from(self.v_height) * 0.25) as i32;

        let vertical = IRect::new(
            cx - self.beam_w / 2,
            v_top,
            cx + self.beam_w / 2,
            self.center.y + self.v_height / 2,
        );
        let horizontal = IRect::new(
            cx - self.h_width / 2,
            h_top,
            cx + self.h_width / 2,
            h_top + self.h_height,
        );

        [
            ShapeOp::Rect(RectOp {
                rect: vertical,
                fill: self.color,
                outline: None,
            }),
            ShapeOp::Rect(RectOp {
                rect: horizontal,
                fill: self.color,
                outline: None,
            }),
        ]
    }
}

/// Compose the icon graphic for the given preset and square size.
pub fn icon(preset: IconPreset, size: u32) -> StoregenResult<Graphic> {
    match preset {
        IconPreset::VectorExact => icon_vector_exact(size),
        IconPreset::Guidelines2025 => icon_guidelines(size),
    }
}

fn icon_vector_exact(size: u32) -> StoregenResult<Graphic> {
    let t = VECTOR_ICON;
    let p = Projection::new(size, t.viewport)?;
    let rect = |c: [f64; 4]| p.rect(c[0], c[1], c[2], c[3]);

    let mut ops = vec![
        ShapeOp::Rect(RectOp {
            rect: rect(t.book),
            fill: BOOK_COVER,
            outline: None,
        }),
        ShapeOp::Rect(RectOp {
            rect: rect(t.spine),
            fill: BOOK_SPINE,
            outline: None,
        }),
        ShapeOp::Rect(RectOp {
            rect: rect(t.pages),
            fill: BOOK_PAGES,
            outline: None,
        }),
    ];

    let line_width = p.px(t.page_line_width).max(1);
    for y_dp in t.page_line_ys {
        let y = p.px(y_dp);
        ops.push(ShapeOp::Line(LineOp {
            from: IPoint::new(p.px(t.page_line_x.0), y),
            to: IPoint::new(p.px(t.page_line_x.1), y),
            color: PAGE_LINES,
            width: line_width,
        }));
    }

    ops.push(ShapeOp::Rect(RectOp {
        rect: rect(t.cross_v),
        fill: CROSS_INK,
        outline: None,
    }));
    ops.push(ShapeOp::Rect(RectOp {
        rect: rect(t.cross_h),
        fill: CROSS_INK,
        outline: None,
    }));

    // 30% white sheen on the left half of the vertical beam.
    ops.push(ShapeOp::Overlay(OverlayOp {
        rect: rect(t.highlight),
        color: Color::rgba(255, 255, 255, 77),
    }));

    Ok(Graphic {
        canvas: Canvas {
            width: size,
            height: size,
        },
        background: Background::Solid(ICON_BACKGROUND),
        ops,
    })
}

fn icon_guidelines(size: u32) -> StoregenResult<Graphic> {
    let l = GUIDELINE_ICON;
    let frac = |base: i32, f: f64| (f64::from(base) * f) as i32;

    let size_i = size as i32;
    let center = size_i / 2;
    let book_w = frac(size_i, l.book_width_frac);
    let book_h = frac(size_i, l.book_height_frac);

    let book = IRect::new(
        center - book_w / 2,
        center - book_h / 2,
        center - book_w / 2 + book_w,
        center - book_h / 2 + book_h,
    );
    let spine = IRect::new(book.x0, book.y0, book.x0 + frac(book_w, l.spine_frac), book.y1);

    let margin = frac(book_w, l.page_margin_frac);
    let pages = IRect::new(
        book.x0 + margin,
        book.y0 + margin,
        book.x1 - margin,
        book.y1 - margin,
    );

    let mut ops = vec![
        ShapeOp::Rect(RectOp {
            rect: book,
            fill: BOOK_COVER,
            outline: None,
        }),
        ShapeOp::Rect(RectOp {
            rect: spine,
            fill: BOOK_SPINE,
            outline: None,
        }),
        ShapeOp::Rect(RectOp {
            rect: pages,
            fill: BOOK_PAGES,
            outline: None,
        }),
    ];

    let line_margin = frac(book_w, l.line_margin_frac);
    let line_x0 = pages.x0 + line_margin;
    let line_x1 = pages.x1 - line_margin;
    let line_spacing = frac(book_h, l.line_spacing_frac);
    let line_start_y = pages.y0 + frac(book_h, l.line_start_frac);
    for i in 0..l.max_page_lines as i32 {
        let y = line_start_y + i * line_spacing;
        if y >= pages.y1 - line_margin {
            break;
        }
        ops.push(ShapeOp::Line(LineOp {
            from: IPoint::new(line_x0, y),
            to: IPoint::new(line_x1, y),
            color: PAGE_LINES,
            width: 3,
        }));
    }

    let cross_w = frac(book_w, l.cross_w_frac);
    let cross_v_h = frac(book_h, l.cross_v_frac);
    let cross_h_w = frac(book_w, l.cross_hw_frac);
    let cross_h_h = frac(book_h, l.cross_hh_frac);

    let v_y0 = pages.y0 + frac(book_h, l.cross_top_frac);
    ops.push(ShapeOp::Rect(RectOp {
        rect: IRect::new(
            center - cross_w / 2,
            v_y0,
            center - cross_w / 2 + cross_w,
            v_y0 + cross_v_h,
        ),
        fill: CROSS_INK,
        outline: None,
    }));

    let h_y0 = center - cross_h_h / 2 - frac(book_h, l.cross_lift_frac);
    ops.push(ShapeOp::Rect(RectOp {
        rect: IRect::new(
            center - cross_h_w / 2,
            h_y0,
            center - cross_h_w / 2 + cross_h_w,
            h_y0 + cross_h_h,
        ),
        fill: CROSS_INK,
        outline: None,
    }));

    Ok(Graphic {
        canvas: Canvas {
            width: size,
            height: size,
        },
        background: Background::Solid(ICON_BACKGROUND),
        ops,
    })
}

/// Feature-graphic canvas constants.
pub const FEATURE_WIDTH: u32 = 1024;
pub const FEATURE_HEIGHT: u32 = 500;
pub const FEATURE_GRADIENT_TOP: Color = Color::rgb(230, 242, 255);
pub const FEATURE_GRADIENT_BOTTOM: Color = Color::rgb(179, 212, 255);

/// Compose the 1024x500 promotional feature graphic.
pub fn feature_graphic(spec: &FeatureGraphicSpec) -> StoregenResult<Graphic> {
    let width = FEATURE_WIDTH as i32;
    let height = FEATURE_HEIGHT as i32;
    let center_x = width / 2;

    let mut ops = Vec::new();
    let text = |x: i32, y: i32, content: &str, size_px: f32, color: Color, anchor: TextAnchor| {
        ShapeOp::Text(TextOp {
            x,
            y,
            content: content.to_string(),
            size_px,
            color,
            anchor,
            font_source: spec.font_source.clone(),
        })
    };

    // Title with a 3 px drop shadow, then the subtitle.
    ops.push(text(
        center_x + 3,
        53,
        &spec.title,
        72.0,
        BOOK_COVER,
        TextAnchor::Center,
    ));
    ops.push(text(
        center_x,
        50,
        &spec.title,
        72.0,
        CROSS_INK,
        TextAnchor::Center,
    ));
    ops.push(text(
        center_x,
        140,
        &spec.subtitle,
        36.0,
        BOOK_COVER,
        TextAnchor::Center,
    ));

    // Book with cross at the lower left.
    let book_size = 180;
    let book = IRect::new(80, height - book_size - 60, 80 + book_size, height - 60);
    ops.push(ShapeOp::Rect(RectOp {
        rect: book,
        fill: BOOK_COVER,
        outline: Some(Outline {
            color: BOOK_SPINE,
            width: 3,
        }),
    }));

    let margin = (f64::from(book_size) * 0.05) as i32;
    ops.push(ShapeOp::Rect(RectOp {
        rect: IRect::new(
            book.x0 + margin,
            book.y0 + margin,
            book.x1 - margin,
            book.y1 - margin,
        ),
        fill: BOOK_PAGES,
        outline: None,
    }));

    let book_cross = CrossMotif {
        center: IPoint::new(book.x0 + book_size / 2, book.y0 + book_size / 2),
        beam_w: (f64::from(book_size) * 0.12) as i32,
        v_height: (f64::from(book_size) * 0.50) as i32,
        h_width: (f64::from(book_size) * 0.35) as i32,
        h_height: (f64::from(book_size) * 0.10) as i32,
        color: CROSS_INK,
    };
    ops.extend(book_cross.ops());

    // Running-bond wall at the lower right, white cross on top.
    let wall = IRect::new(width - 320, height - 200, width - 320 + 300, height - 200 + 180);
    let grid = BrickGrid {
        region: wall,
        brick_w: 60,
        brick_h: 30,
    };
    let mortar_gap = 2;
    for brick in grid.tiles()? {
        ops.push(ShapeOp::Rect(RectOp {
            rect: IRect::new(
                brick.rect.x0,
                brick.rect.y0,
                brick.rect.x1 - mortar_gap,
                brick.rect.y1 - mortar_gap,
            ),
            fill: BOOK_PAGES,
            outline: Some(Outline {
                color: MORTAR,
                width: 1,
            }),
        }));
    }

    let wall_cross = CrossMotif {
        center: IPoint::new(wall.x0 + wall.width() / 2, wall.y0 + wall.height() / 2),
        beam_w: 15,
        v_height: 100,
        h_width: 70,
        h_height: 15,
        color: Color::WHITE,
    };
    ops.extend(wall_cross.ops());

    // Feature bullets between the book and the wall.
    let mut feature_y = book.y0 - 40;
    let feature_x = book.x1 + 40;
    for feature in &spec.features {
        ops.push(text(
            feature_x,
            feature_y,
            feature,
            28.0,
            BOOK_COVER,
            TextAnchor::Start,
        ));
        feature_y += 40;
    }

    Ok(Graphic {
        canvas: Canvas {
            width: FEATURE_WIDTH,
            height: FEATURE_HEIGHT,
        },
        background: Background::VerticalGradient {
            top: FEATURE_GRADIENT_TOP,
            bottom: FEATURE_GRADIENT_BOTTOM,
        },
        ops,
    })
}
