use std::time::{Duration, Instant};

use grasp_geometry::Point;

use crate::{GestureConfig, PointerId, PointerType, Variant};

/// An external classification key that replaces spatial distance for double-click pairing, for
/// example the index of the grid cell a pointer went down on.
pub type GroupId = u32;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum LongPressState {
    #[default]
    Idle,
    /// The press can not become a long press anymore.
    Disabled,
    Fired,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DoubleClickState {
    #[default]
    None,
    Pending,
    /// Both mouse buttons went down together.
    CombinedLeftRight,
}

impl DoubleClickState {
    pub fn is_set(self) -> bool {
        self != Self::None
    }
}

/// Everything tracked about one pointer. Kept across down / up cycles.
#[derive(Clone, Debug, Default)]
pub struct PointerState {
    pub active: bool,
    pub group: Option<GroupId>,
    pub down_position: Point,
    pub previous_position: Point,
    /// `None` until the pointer went down the first time.
    pub down_time: Option<Instant>,
    pub long_press: LongPressState,
    pub dragging: bool,
    pub double_click: DoubleClickState,
}

impl PointerState {
    /// Starts a new press.
    pub fn press(
        &mut self,
        pos: Point,
        now: Instant,
        group: Option<GroupId>,
        double_click: DoubleClickState,
    ) {
        self.active = true;
        self.group = group;
        self.down_position = pos;
        self.previous_position = pos;
        self.down_time = Some(now);
        self.long_press = LongPressState::Idle;
        self.dragging = false;
        self.double_click = double_click;
    }

    /// Records a drag sample and returns the delta to the previous one.
    ///
    /// The first sample of a press resolves a pending long press.
    pub fn drag_to(&mut self, pos: Point) -> Point {
        let delta = pos - self.previous_position;
        self.previous_position = pos;
        self.dragging = true;
        self.disable_long_press();
        delta
    }

    pub fn disable_long_press(&mut self) {
        if self.long_press == LongPressState::Idle {
            self.long_press = LongPressState::Disabled;
        }
    }

    /// Moves the down position to the latest sample. Used when a multi-touch pair forms.
    pub fn reanchor(&mut self) {
        self.down_position = self.previous_position;
        self.disable_long_press();
    }

    pub fn pointer_type(&self, id: PointerId) -> PointerType {
        if self.double_click == DoubleClickState::CombinedLeftRight {
            PointerType::LeftAndRight
        } else {
            id.pointer_type()
        }
    }

    /// The gesture variant the current press resolves to.
    pub fn variant(&self) -> Variant {
        Variant::select(
            self.double_click.is_set(),
            self.long_press == LongPressState::Fired,
        )
    }

    /// `true` if a new press at `pos` and `now` forms a double click with this pointer's last
    /// press.
    ///
    /// Pointers that are dragging or are already part of a double click never match.
    pub fn pairs_double_click(
        &self,
        pos: Point,
        now: Instant,
        group: Option<GroupId>,
        config: &GestureConfig,
    ) -> bool {
        if self.dragging || self.double_click.is_set() {
            return false;
        }
        let Some(down_time) = self.down_time else {
            return false;
        };
        if now.saturating_duration_since(down_time) > config.double_click_interval() {
            return false;
        }
        match group {
            Some(group) => self.group == Some(group),
            None => {
                let threshold = config.double_click_threshold();
                threshold > 0.0 && self.down_position.distance_squared(pos) <= threshold * threshold
            }
        }
    }

    /// `true` if this press has been held long enough to become a long press at `now`.
    pub fn long_press_due(&self, now: Instant, long_press_start: Duration) -> bool {
        self.active
            && self.long_press == LongPressState::Idle
            && !self.dragging
            && self
                .down_time
                .is_some_and(|t| now.saturating_duration_since(t) > long_press_start)
    }
}
