//! Geometry primitives for pointer input: local space points and the mapping from screen
//! coordinates into them.

mod local_space;
mod point;

pub use local_space::*;
pub use point::*;

/// The unit of raw host coordinates (physical window pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpace;

pub type ScreenPoint = euclid::Point2D<f64, ScreenSpace>;
