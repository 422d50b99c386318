use crate::{
    error::{StoregenError, StoregenResult},
    geom::IRect,
};

/// Projects coordinates authored against a reference viewport onto a target
/// pixel size.
///
/// Rounding policy: every projected value is truncated toward zero. One rule
/// applied everywhere keeps adjacent shapes agreeing on shared edges, so a
/// rescale cannot open 1-px seams between them.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    scale: f64,
}

impl Projection {
    pub fn new(target_px: u32, viewport: f64) -> StoregenResult<Self> {
        if target_px == 0 {
            return Err(StoregenError::validation("projection target must be > 0"));
        }
        if !viewport.is_finite() || viewport <= 0.0 {
            return Err(StoregenError::validation(
                "projection viewport must be finite and > 0",
            ));
        }
        Ok(Self {
            scale: f64::from(target_px) / viewport,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn px(&self, v: f64) -> i32 {
        (v * self.scale) as i32
    }

    pub fn rect(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> IRect {
        IRect::new(self.px(x0), self.px(y0), self.px(x1), self.px(y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_target_equals_viewport() {
        let p = Projection::new(108, 108.0).unwrap();
        assert_eq!(p.px(32.0), 32);
        assert_eq!(p.px(76.0), 76);
    }

    #[test]
    fn truncates_toward_zero() {
        // 512 / 108 = 4.7407..; 32 dp lands at 151.7 and truncates to 151.
        let p = Projection::new(512, 108.0).unwrap();
        assert_eq!(p.px(32.0), 151);
        assert_eq!(p.px(38.0), 180);
        assert_eq!(p.px(76.0), 360);
    }

    #[test]
    fn is_order_preserving() {
        let p = Projection::new(512, 108.0).unwrap();
        let mut prev = p.px(0.0);
        for i in 1..=108 {
            let cur = p.px(f64::from(i));
            assert!(cur >= prev, "scaled({i}) regressed");
            prev = cur;
        }
    }

    #[test]
    fn projected_viewport_stays_in_bounds() {
        let p = Projection::new(512, 108.0).unwrap();
        let r = p.rect(0.0, 0.0, 108.0, 108.0);
        assert!(r.x0 >= 0 && r.y0 >= 0);
        assert!(r.x1 <= 512 && r.y1 <= 512);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(Projection::new(0, 108.0).is_err());
        assert!(Projection::new(512, 0.0).is_err());
        assert!(Projection::new(512, f64::NAN).is_err());
    }
}
