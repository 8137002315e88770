use std::time::Instant;

use grasp_geometry::ScreenPoint;

use crate::PointerId;

/// Raw pointer input as delivered by the host, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pointer: PointerId,
        pos: ScreenPoint,
        time: Instant,
    },
    Drag {
        pointer: PointerId,
        pos: ScreenPoint,
        time: Instant,
    },
    PointerUp {
        pointer: PointerId,
        pos: ScreenPoint,
        time: Instant,
    },
    FrameTick(Instant),
}

impl InputEvent {
    pub fn pointer(&self) -> Option<PointerId> {
        use InputEvent::*;
        match *self {
            PointerDown { pointer, .. } | Drag { pointer, .. } | PointerUp { pointer, .. } => {
                Some(pointer)
            }
            FrameTick(_) => None,
        }
    }
}
