#![forbid(unsafe_code)]

pub mod blend;
pub mod bricks;
pub mod color;
pub mod compose;
pub mod encode;
pub mod error;
pub mod geom;
pub mod model;
pub mod presets;
pub mod scale;
pub mod text;

pub use blend::{over, over_in_place};
pub use bricks::{Brick, BrickGrid};
pub use color::Color;
pub use compose::{FrameRgba, compose};
pub use encode::write_png;
pub use error::{StoregenError, StoregenResult};
pub use geom::{IPoint, IRect};
pub use model::{
    Background, Canvas, Graphic, LineOp, Outline, OverlayOp, RectOp, ShapeOp, TextAnchor, TextOp,
};
pub use presets::{FeatureGraphicSpec, IconPreset, feature_graphic, icon};
pub use scale::Projection;
pub use text::{PreparedText, TextEngine};
