use crate::error::{StoregenError, StoregenResult};

/// Axis-aligned rectangle with inclusive corner coordinates, as authored in
/// the source coordinate tables (`x1`/`y1` are the far corner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IRect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x0 + self.width() / 2, self.y0 + self.height() / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Rejects non-normalized corners. Callers validate up front so a bad
    /// table fails loudly instead of silently clipping to nothing.
    pub fn validate(&self) -> StoregenResult<()> {
        if self.x0 > self.x1 || self.y0 > self.y1 {
            return Err(StoregenError::geometry(format!(
                "rect ({},{})-({},{}) is not normalized",
                self.x0, self.y0, self.x1, self.y1
            )));
        }
        Ok(())
    }

    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_kurbo(&self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_normalized() {
        assert!(IRect::new(0, 0, 10, 10).validate().is_ok());
        assert!(IRect::new(5, 5, 5, 5).validate().is_ok());
    }

    #[test]
    fn validate_rejects_flipped_corners() {
        assert!(IRect::new(10, 0, 0, 10).validate().is_err());
        assert!(IRect::new(0, 10, 10, 0).validate().is_err());
    }

    #[test]
    fn center_matches_integer_division() {
        let r = IRect::new(80, 260, 260, 440);
        assert_eq!(r.center(), (170, 350));
    }
}
