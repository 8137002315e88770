use crate::{Point, ScreenPoint};

/// Maps host screen coordinates into the local coordinate space of the receiving component.
///
/// `origin` is the screen position of the local origin, `scale` the number of screen pixels per
/// local unit. With `y_up`, local y grows upwards while screen y grows downwards.
///
/// `scale` must not be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSpace {
    pub origin: ScreenPoint,
    pub scale: f64,
    pub y_up: bool,
}

impl Default for LocalSpace {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LocalSpace {
    pub const IDENTITY: Self = Self {
        origin: ScreenPoint::new(0.0, 0.0),
        scale: 1.0,
        y_up: false,
    };

    pub fn new(origin: ScreenPoint, scale: f64, y_up: bool) -> Self {
        Self {
            origin,
            scale,
            y_up,
        }
    }

    pub fn to_local(&self, screen: ScreenPoint) -> Point {
        let d = (screen - self.origin) / self.scale;
        Point::new(d.x, if self.y_up { -d.y } else { d.y })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use euclid::point2;

    use super::*;

    #[test]
    fn identity_passes_through() {
        let p = LocalSpace::default().to_local(point2(10.0, 20.0));
        assert_eq!(p, Point::new(10.0, 20.0));
    }

    #[test]
    fn offset_scaled_and_flipped() {
        let space = LocalSpace::new(point2(100.0, 200.0), 2.0, true);
        let local = space.to_local(point2(110.0, 180.0));
        assert_relative_eq!(local.x, 5.0);
        assert_relative_eq!(local.y, 10.0);
    }

    #[test]
    fn y_down_keeps_screen_orientation() {
        let space = LocalSpace::new(point2(-50.0, 0.0), 0.5, false);
        let local = space.to_local(point2(0.0, 30.0));
        assert_relative_eq!(local.x, 100.0);
        assert_relative_eq!(local.y, 60.0);
    }
}
