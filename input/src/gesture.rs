use grasp_geometry::{Point, Vector};

use crate::PointerType;

/// How a single pointer press was qualified before it got released or started to drag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    Plain,
    LongPress,
    DoubleClick,
    DoubleClickLongPress,
}

impl Variant {
    pub fn select(double_click: bool, long_press: bool) -> Self {
        match (double_click, long_press) {
            (false, false) => Variant::Plain,
            (false, true) => Variant::LongPress,
            (true, false) => Variant::DoubleClick,
            (true, true) => Variant::DoubleClickLongPress,
        }
    }
}

/// The listener channels. Every [`Gesture`] is delivered on exactly one of them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Channel {
    Click,
    DoubleClick,
    LongPress,
    /// A long press following a double click.
    LongPress2,
    LongPressClick,
    DoubleLongPressClick,
    DragStart,
    Dragging,
    DragEnd,
    LongPressDragStart,
    LongPressDragging,
    LongPressDragEnd,
    DoubleClickDragStart,
    DoubleClickDragging,
    DoubleClickDragEnd,
    DoubleClickLongPressDragStart,
    DoubleClickLongPressDragging,
    DoubleClickLongPressDragEnd,
    MultiTouchBegin,
    MultiTouchDrag,
    MultiTouchEnd,
}

/// A recognized gesture. Positions are in local space.
#[derive(Clone, PartialEq, Debug)]
pub enum Gesture {
    /// A press got released without dragging. `pos` is where it went down.
    Click {
        variant: Variant,
        pos: Point,
        pointer: PointerType,
    },
    /// A press was held long enough. `after_double_click` selects [`Channel::LongPress2`].
    LongPress {
        after_double_click: bool,
        pos: Point,
        pointer: PointerType,
    },
    DragStart {
        variant: Variant,
        from: Point,
        pointer: PointerType,
    },
    /// `delta` is relative to the previous drag sample.
    Dragging {
        variant: Variant,
        from: Point,
        delta: Vector,
        pointer: PointerType,
    },
    DragEnd {
        variant: Variant,
        from: Point,
        to: Point,
        pointer: PointerType,
    },
    MultiTouchBegin {
        from: [Point; 2],
    },
    MultiTouchDrag {
        from: [Point; 2],
        to: [Point; 2],
    },
    MultiTouchEnd {
        from: [Point; 2],
        to: [Point; 2],
    },
}

impl Gesture {
    pub fn channel(&self) -> Channel {
        use Channel as C;
        use Variant as V;
        match *self {
            Gesture::Click { variant, .. } => match variant {
                V::Plain => C::Click,
                V::LongPress => C::LongPressClick,
                V::DoubleClick => C::DoubleClick,
                V::DoubleClickLongPress => C::DoubleLongPressClick,
            },
            Gesture::LongPress {
                after_double_click, ..
            } => {
                if after_double_click {
                    C::LongPress2
                } else {
                    C::LongPress
                }
            }
            Gesture::DragStart { variant, .. } => match variant {
                V::Plain => C::DragStart,
                V::LongPress => C::LongPressDragStart,
                V::DoubleClick => C::DoubleClickDragStart,
                V::DoubleClickLongPress => C::DoubleClickLongPressDragStart,
            },
            Gesture::Dragging { variant, .. } => match variant {
                V::Plain => C::Dragging,
                V::LongPress => C::LongPressDragging,
                V::DoubleClick => C::DoubleClickDragging,
                V::DoubleClickLongPress => C::DoubleClickLongPressDragging,
            },
            Gesture::DragEnd { variant, .. } => match variant {
                V::Plain => C::DragEnd,
                V::LongPress => C::LongPressDragEnd,
                V::DoubleClick => C::DoubleClickDragEnd,
                V::DoubleClickLongPress => C::DoubleClickLongPressDragEnd,
            },
            Gesture::MultiTouchBegin { .. } => C::MultiTouchBegin,
            Gesture::MultiTouchDrag { .. } => C::MultiTouchDrag,
            Gesture::MultiTouchEnd { .. } => C::MultiTouchEnd,
        }
    }

    /// The pointer type of single pointer gestures. `None` for multi-touch gestures.
    pub fn pointer(&self) -> Option<PointerType> {
        match *self {
            Gesture::Click { pointer, .. }
            | Gesture::LongPress { pointer, .. }
            | Gesture::DragStart { pointer, .. }
            | Gesture::Dragging { pointer, .. }
            | Gesture::DragEnd { pointer, .. } => Some(pointer),
            Gesture::MultiTouchBegin { .. }
            | Gesture::MultiTouchDrag { .. }
            | Gesture::MultiTouchEnd { .. } => None,
        }
    }
}
