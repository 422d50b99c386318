use crate::{
    error::{StoregenError, StoregenResult},
    geom::IRect,
};

/// Running-bond (masonry) tiling of a rectangular region.
///
/// Rows step down by `brick_h`; every odd row is shifted left by half a brick
/// so vertical joints never line up. Edge tiles are emitted even when they
/// start before the region's left edge or run past its right edge; the canvas
/// clips them when drawn.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BrickGrid {
    pub region: IRect,
    pub brick_w: i32,
    pub brick_h: i32,
}

/// One emitted tile: the full cell rect plus its row/column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brick {
    pub rect: IRect,
    pub row: i32,
    pub col: i32,
}

impl BrickGrid {
    pub fn validate(&self) -> StoregenResult<()> {
        self.region.validate()?;
        if self.brick_w <= 0 || self.brick_h <= 0 {
            return Err(StoregenError::geometry("brick size must be > 0"));
        }
        Ok(())
    }

    /// Emit tiles top-to-bottom, left-to-right.
    pub fn tiles(&self) -> StoregenResult<Vec<Brick>> {
        self.validate()?;

        let IRect { x0, y0, x1, .. } = self.region;
        let width = self.region.width();
        let height = self.region.height();

        let mut out = Vec::new();
        let mut row = 0;
        while row * self.brick_h < height {
            let y = y0 + row * self.brick_h;
            let offset = if row % 2 == 1 { self.brick_w / 2 } else { 0 };

            // One extra column so the shifted rows still cover the right edge.
            let cols = (width + self.brick_w) / self.brick_w;
            for col in 0..cols {
                let x = x0 + col * self.brick_w - offset;
                if x >= x1 || x < x0 - self.brick_w {
                    continue;
                }
                out.push(Brick {
                    rect: IRect::new(x, y, x + self.brick_w, y + self.brick_h),
                    row,
                    col,
                });
            }
            row += 1;
        }
        Ok(out)
    }
}
