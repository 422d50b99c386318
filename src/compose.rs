use crate::{
    blend,
    color::Color,
    error::{StoregenError, StoregenResult},
    model::{Background, Canvas, Graphic, LineOp, OverlayOp, RectOp, ShapeOp, TextAnchor, TextOp},
    text::TextEngine,
};

/// A fully composed frame in row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRgba {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Compose a graphic into a frame: paint the background, then apply every
/// shape op strictly in order. Consecutive opaque ops render through one
/// scene pass; each overlay op becomes its own composite pass onto the
/// accumulated base.
#[tracing::instrument(skip(graphic, fonts), fields(
    width = graphic.canvas.width,
    height = graphic.canvas.height,
    ops = graphic.ops.len(),
))]
pub fn compose(graphic: &Graphic, fonts: &mut TextEngine) -> StoregenResult<FrameRgba> {
    graphic.validate()?;

    let width_u16: u16 = graphic
        .canvas
        .width
        .try_into()
        .map_err(|_| StoregenError::render("canvas width exceeds u16"))?;
    let height_u16: u16 = graphic
        .canvas
        .height
        .try_into()
        .map_err(|_| StoregenError::render("canvas height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    paint_background(&mut pixmap, graphic.canvas, graphic.background);

    let passes = compile_passes(&graphic.ops);
    tracing::debug!(passes = passes.len(), "compiled op list");

    for pass in &passes {
        match pass {
            Pass::Scene(ops) => {
                let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
                for op in ops {
                    match op {
                        ShapeOp::Rect(r) => draw_rect(&mut ctx, r),
                        ShapeOp::Line(l) => draw_line(&mut ctx, l),
                        ShapeOp::Text(t) => draw_text(&mut ctx, t, fonts)?,
                        ShapeOp::Overlay(_) => unreachable!("overlays get their own pass"),
                    }
                }
                ctx.flush();
                // render_to_pixmap replaces the destination buffer, so the
                // scene goes onto a transparent scratch layer and is
                // composited over the accumulated base.
                let mut layer = vello_cpu::Pixmap::new(width_u16, height_u16);
                ctx.render_to_pixmap(&mut layer);
                blend::over_in_place(
                    pixmap.data_as_u8_slice_mut(),
                    layer.data_as_u8_slice(),
                    1.0,
                )?;
            }
            Pass::Overlay(overlay) => {
                apply_overlay(&mut pixmap, width_u16, height_u16, overlay)?;
            }
        }
    }

    Ok(FrameRgba {
        width: graphic.canvas.width,
        height: graphic.canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

enum Pass<'a> {
    Scene(Vec<&'a ShapeOp>),
    Overlay(&'a OverlayOp),
}

fn compile_passes(ops: &[ShapeOp]) -> Vec<Pass<'_>> {
    let mut passes = Vec::new();
    let mut scene: Vec<&ShapeOp> = Vec::new();

    for op in ops {
        match op {
            ShapeOp::Overlay(overlay) => {
                if !scene.is_empty() {
                    passes.push(Pass::Scene(std::mem::take(&mut scene)));
                }
                passes.push(Pass::Overlay(overlay));
            }
            other => scene.push(other),
        }
    }
    if !scene.is_empty() {
        passes.push(Pass::Scene(scene));
    }
    passes
}

fn paint_background(pixmap: &mut vello_cpu::Pixmap, canvas: Canvas, background: Background) {
    let data = pixmap.data_as_u8_slice_mut();
    match background {
        Background::Solid(color) => {
            let px = color.premul();
            for chunk in data.chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
        Background::VerticalGradient { top, bottom } => {
            let row_bytes = canvas.width as usize * 4;
            for (y, row) in data.chunks_exact_mut(row_bytes).enumerate() {
                let px = gradient_row(top, bottom, y as u32, canvas.height).premul();
                for chunk in row.chunks_exact_mut(4) {
                    chunk.copy_from_slice(&px);
                }
            }
        }
    }
}

/// Row color of the vertical gradient. Channels interpolate linearly and
/// truncate toward zero, so row 0 is exactly `top` and the last row sits one
/// truncation step short of `bottom`.
fn gradient_row(top: Color, bottom: Color, y: u32, height: u32) -> Color {
    let t = f64::from(y) / f64::from(height);
    let mix = |a: u8, b: u8| -> u8 { (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8 };
    Color::rgba(
        mix(top.r, bottom.r),
        mix(top.g, bottom.g),
        mix(top.b, bottom.b),
        mix(top.a, bottom.a),
    )
}

fn set_solid_paint(ctx: &mut vello_cpu::RenderContext, color: Color) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
}

fn draw_rect(ctx: &mut vello_cpu::RenderContext, op: &RectOp) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    set_solid_paint(ctx, op.fill);
    ctx.fill_rect(&rect_to_cpu(op.rect.to_kurbo()));

    if let Some(outline) = op.outline {
        set_solid_paint(ctx, outline.color);
        let w = f64::from(outline.width);
        let r = op.rect.to_kurbo();
        // Four edge strips drawn just inside the rect boundary.
        let strips = [
            kurbo::Rect::new(r.x0, r.y0, r.x1, r.y0 + w),
            kurbo::Rect::new(r.x0, r.y1 - w, r.x1, r.y1),
            kurbo::Rect::new(r.x0, r.y0, r.x0 + w, r.y1),
            kurbo::Rect::new(r.x1 - w, r.y0, r.x1, r.y1),
        ];
        for strip in strips {
            ctx.fill_rect(&rect_to_cpu(strip));
        }
    }
}

fn draw_line(ctx: &mut vello_cpu::RenderContext, op: &LineOp) {
    let p0 = op.from.to_kurbo();
    let p1 = op.to.to_kurbo();
    let d = p1 - p0;
    let len = d.hypot();
    if len == 0.0 {
        return;
    }

    // Quad centered on the segment, half the stroke width to each side.
    let n = kurbo::Vec2::new(-d.y / len, d.x / len) * (f64::from(op.width) / 2.0);
    let mut path = kurbo::BezPath::new();
    path.move_to(p0 + n);
    path.line_to(p1 + n);
    path.line_to(p1 - n);
    path.line_to(p0 - n);
    path.close_path();

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    set_solid_paint(ctx, op.color);
    ctx.fill_path(&bezpath_to_cpu(&path));
}

fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    op: &TextOp,
    fonts: &mut TextEngine,
) -> StoregenResult<()> {
    let prepared = fonts.layout(op)?;

    let x = match op.anchor {
        TextAnchor::Start => f64::from(op.x),
        TextAnchor::Center => f64::from(op.x) - f64::from(prepared.layout.width()) / 2.0,
    };
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, f64::from(op.y))));

    let font_bytes = prepared.font_bytes.as_ref().clone();
    let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);

    for line in prepared.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    Ok(())
}

fn apply_overlay(
    pixmap: &mut vello_cpu::Pixmap,
    width: u16,
    height: u16,
    overlay: &OverlayOp,
) -> StoregenResult<()> {
    let mut layer = vello_cpu::Pixmap::new(width, height);

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    set_solid_paint(&mut ctx, overlay.color);
    ctx.fill_rect(&rect_to_cpu(overlay.rect.to_kurbo()));
    ctx.flush();
    ctx.render_to_pixmap(&mut layer);

    blend::over_in_place(
        pixmap.data_as_u8_slice_mut(),
        layer.data_as_u8_slice(),
        1.0,
    )
}

fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
