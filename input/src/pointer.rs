use derive_more::{From, Into};

/// Identifies one pointer stream: a mouse button or a touch contact.
///
/// Negative ids are reserved for mouse buttons, touch contacts use ids `>= 0`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From, Into)]
pub struct PointerId(i64);

impl PointerId {
    pub const LEFT: Self = Self(-1);
    pub const RIGHT: Self = Self(-2);
    pub const MIDDLE: Self = Self(-3);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The pointer id of a touch contact.
    ///
    /// `None` if the host's touch id does not fit into the non-negative id range.
    pub fn touch(id: u64) -> Option<Self> {
        i64::try_from(id).ok().map(Self)
    }

    pub fn is_mouse_button(self) -> bool {
        self.0 < 0
    }

    /// The pointer type of a press of this pointer alone, without any left + right combination.
    pub fn pointer_type(self) -> PointerType {
        match self {
            Self::RIGHT => PointerType::Right,
            id if id.is_mouse_button() => PointerType::Left,
            _ => PointerType::Touch,
        }
    }
}

/// The kind of pointer that caused a gesture.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PointerType {
    Left,
    Right,
    /// Both mouse buttons pressed together, treated as one logical pointer.
    LeftAndRight,
    Touch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_ids() {
        assert_eq!(PointerId::LEFT.pointer_type(), PointerType::Left);
        assert_eq!(PointerId::RIGHT.pointer_type(), PointerType::Right);
        assert_eq!(PointerId::MIDDLE.pointer_type(), PointerType::Left);
        assert_eq!(PointerId::new(0).pointer_type(), PointerType::Touch);
        assert_eq!(PointerId::new(7).pointer_type(), PointerType::Touch);
    }

    #[test]
    fn touch_ids_are_never_mouse_buttons() {
        assert!(!PointerId::touch(0).unwrap().is_mouse_button());
        assert!(PointerId::touch(u64::MAX).is_none());
        assert!(PointerId::LEFT.is_mouse_button());
    }
}
