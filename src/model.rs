use crate::{
    color::Color,
    error::{StoregenError, StoregenResult},
    geom::{IPoint, IRect},
};

/// A complete declarative graphic: canvas, background, and an ordered list of
/// shape operations painted strictly in sequence (painter's algorithm).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Graphic {
    pub canvas: Canvas,
    pub background: Background,
    pub ops: Vec<ShapeOp>,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Background {
    Solid(Color),
    /// Per-row linear gradient. Row 0 is exactly `top`; channel values step
    /// toward `bottom` with truncating integer arithmetic.
    VerticalGradient { top: Color, bottom: Color },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ShapeOp {
    Rect(RectOp),
    Line(LineOp),
    Text(TextOp),
    /// The single non-opaque pass: drawn on a transparent layer of canvas
    /// size, then source-over composited onto the base.
    Overlay(OverlayOp),
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct RectOp {
    pub rect: IRect,
    pub fill: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Outline {
    pub color: Color,
    pub width: i32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct LineOp {
    pub from: IPoint,
    pub to: IPoint,
    pub color: Color,
    pub width: i32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextOp {
    pub x: i32,
    pub y: i32,
    pub content: String,
    pub size_px: f32,
    pub color: Color,
    #[serde(default)]
    pub anchor: TextAnchor,
    /// Explicit font file; falls back to the engine's candidate list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_source: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAnchor {
    /// `x` is the left edge of the laid-out text.
    #[default]
    Start,
    /// `x` is the midline; the composer centers the measured layout on it.
    Center,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct OverlayOp {
    pub rect: IRect,
    pub color: Color,
}

impl Graphic {
    pub fn validate(&self) -> StoregenResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StoregenError::validation("canvas width/height must be > 0"));
        }

        for (i, op) in self.ops.iter().enumerate() {
            let check = |r: &IRect| {
                r.validate()
                    .map_err(|e| StoregenError::geometry(format!("op {i}: {e}")))
            };
            match op {
                ShapeOp::Rect(r) => {
                    check(&r.rect)?;
                    if let Some(outline) = &r.outline
                        && outline.width <= 0
                    {
                        return Err(StoregenError::validation(format!(
                            "op {i}: outline width must be > 0"
                        )));
                    }
                }
                ShapeOp::Overlay(o) => check(&o.rect)?,
                ShapeOp::Line(l) => {
                    if l.width <= 0 {
                        return Err(StoregenError::validation(format!(
                            "op {i}: line width must be > 0"
                        )));
                    }
                }
                ShapeOp::Text(t) => {
                    if !t.size_px.is_finite() || t.size_px <= 0.0 {
                        return Err(StoregenError::validation(format!(
                            "op {i}: text size_px must be finite and > 0"
                        )));
                    }
                    if t.content.is_empty() {
                        return Err(StoregenError::validation(format!(
                            "op {i}: text content must be non-empty"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
