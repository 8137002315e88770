use derive_more::{Add, From, Into, Neg, Sub};

/// A point in the local coordinate space of the component receiving pointer input.
#[derive(Debug, Copy, Clone, PartialEq, Default, Add, Sub, Neg, From, Into)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Differences between two local points, e.g. the delta between two drag samples.
pub type Vector = Point;

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.squared_length().sqrt()
    }

    pub fn squared_length(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        (*self - other).squared_length()
    }

    pub fn scaled(&self, scaling: f64) -> Self {
        Self::new(self.x * scaling, self.y * scaling)
    }
}
