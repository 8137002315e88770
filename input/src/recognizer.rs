//! The gesture recognizer.
//!
//! Single pointer presses are classified as clicks, double clicks, long presses and drags.
//! As soon as two touches are active at the same time, they form a multi-touch pair and single
//! pointer gestures are suppressed for both of them until the pair dissolves. Mouse buttons never
//! pair, they always stay single pointers.
//!
//! There are no timers. Long presses are detected in [`GestureRecognizer::tick`], which the host
//! is expected to call once per frame, and all time windows are evaluated against the
//! timestamps passed in.
use std::time::Instant;

use grasp_geometry::{LocalSpace, Point};
use log::{debug, trace};

use crate::{
    Dispatcher, DoubleClickState, Gesture, GestureConfig, GroupId, InputEvent, LongPressState,
    Pair, PointerId, PointerState, SlotTable,
};

type Locator = Box<dyn Fn(Point) -> Option<GroupId>>;

#[derive(Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    local_space: LocalSpace,
    slots: SlotTable,
    dispatcher: Dispatcher,
    locator: Option<Locator>,
}

impl std::fmt::Debug for GestureRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("config", &self.config)
            .field("local_space", &self.local_space)
            .field("slots", &self.slots)
            .field("dispatcher", &self.dispatcher)
            .field("locator", &self.locator.is_some())
            .finish()
    }
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn set_local_space(&mut self, local_space: LocalSpace) {
        self.local_space = local_space;
    }

    /// Installs a function that classifies a down position into a group. Two presses in the same
    /// group form a double click regardless of their distance. When the locator returns `None`,
    /// the double click distance threshold applies.
    pub fn set_locator(&mut self, locator: impl Fn(Point) -> Option<GroupId> + 'static) {
        self.locator = Some(Box::new(locator));
    }

    /// Register listeners here.
    pub fn dispatcher(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    pub fn pointer(&self, id: PointerId) -> Option<&PointerState> {
        self.slots.get(id)
    }

    /// Feeds a host event. Screen positions are mapped into local space first.
    pub fn handle(&mut self, event: &InputEvent) {
        let local_space = self.local_space;
        let to_local = |pos| local_space.to_local(pos);
        match *event {
            InputEvent::PointerDown { pointer, pos, time } => {
                self.on_pointer_down(pointer, to_local(pos), time)
            }
            InputEvent::Drag { pointer, pos, .. } => self.on_drag(pointer, to_local(pos)),
            InputEvent::PointerUp { pointer, pos, .. } => self.on_pointer_up(pointer, to_local(pos)),
            InputEvent::FrameTick(time) => self.tick(time),
        }
    }

    pub fn on_pointer_down(&mut self, id: PointerId, pos: Point, now: Instant) {
        let group = self.locator.as_ref().and_then(|locate| locate(pos));
        let double_click = self.double_click_at(id, pos, now, group);
        self.slots.resolve(id).press(pos, now, group, double_click);
        trace!("{id:?} down at {pos:?} ({double_click:?}, group: {group:?})");

        if let Some(pair) = self.slots.pair_of(id) {
            for member in [pair.0, pair.1] {
                if let Some(state) = self.slots.get_mut(member) {
                    state.double_click = DoubleClickState::None;
                }
            }
            self.begin_multi_touch(pair);
        }
    }

    pub fn on_drag(&mut self, id: PointerId, pos: Point) {
        let Some(state) = self.slots.active_mut(id) else {
            trace!("Ignoring drag of {id:?}, it is not pressed");
            return;
        };
        let first_drag = !state.dragging;
        let delta = state.drag_to(pos);
        let variant = state.variant();
        let from = state.down_position;
        let pointer = state.pointer_type(id);

        if let Some(pair) = self.slots.pair_of(id) {
            // Both members stay dragging after the pair dissolves: a surviving touch continues
            // with `Dragging` and ends with `DragEnd`, without a `DragStart` of its own.
            for member in [pair.0, pair.1] {
                if let Some(state) = self.slots.get_mut(member) {
                    state.dragging = true;
                    state.disable_long_press();
                }
            }
            if let Some((from, to)) = self.slots.pair_positions(pair) {
                self.dispatcher
                    .dispatch(&Gesture::MultiTouchDrag { from, to });
            }
            return;
        }

        if first_drag {
            self.dispatcher.dispatch(&Gesture::DragStart {
                variant,
                from,
                pointer,
            });
        }
        self.dispatcher.dispatch(&Gesture::Dragging {
            variant,
            from,
            delta,
            pointer,
        });
    }

    pub fn on_pointer_up(&mut self, id: PointerId, pos: Point) {
        let Some(state) = self.slots.get(id).filter(|s| s.active) else {
            trace!("Ignoring release of {id:?}, it is not pressed");
            return;
        };
        let pointer = state.pointer_type(id);

        let paired = self.slots.pair_of(id);
        if let Some(pair) = paired
            && let Some((from, to)) = self.slots.pair_positions(pair)
        {
            self.dispatcher.dispatch(&Gesture::MultiTouchEnd { from, to });
        }

        let state = self.slots.resolve(id);
        state.active = false;
        let combined = state.double_click == DoubleClickState::CombinedLeftRight;
        let variant = state.variant();
        let from = state.down_position;
        let dragging = state.dragging;
        trace!("{id:?} up at {pos:?}");

        if combined {
            // Releasing one button of a left + right combination releases both.
            for (other, state) in self.slots.iter_mut() {
                if other != id
                    && state.active
                    && state.double_click == DoubleClickState::CombinedLeftRight
                {
                    trace!("{other:?} released with {id:?}");
                    state.active = false;
                }
            }
        }

        if paired.is_some() {
            if let Some(pair) = self.slots.pair() {
                self.begin_multi_touch(pair);
            }
            return;
        }

        let gesture = if dragging {
            Gesture::DragEnd {
                variant,
                from,
                to: pos,
                pointer,
            }
        } else {
            Gesture::Click {
                variant,
                pos: from,
                pointer,
            }
        };
        self.dispatcher.dispatch(&gesture);
    }

    /// Detects long presses. Call once per frame.
    ///
    /// Only a single active pointer can become a long press.
    pub fn tick(&mut self, now: Instant) {
        let long_press_start = self.config.long_press_start();
        let Some((id, state)) = self.slots.single_active() else {
            return;
        };
        if !state.long_press_due(now, long_press_start) {
            return;
        }
        state.long_press = LongPressState::Fired;
        let gesture = Gesture::LongPress {
            after_double_click: state.double_click.is_set(),
            pos: state.down_position,
            pointer: state.pointer_type(id),
        };
        self.dispatcher.dispatch(&gesture);
    }

    /// Decides if a new press of `id` forms a double click with a previous press.
    ///
    /// A still active mouse button matching the press of another mouse button turns both into a
    /// left + right combination, which takes precedence over a regular double click.
    fn double_click_at(
        &mut self,
        id: PointerId,
        pos: Point,
        now: Instant,
        group: Option<GroupId>,
    ) -> DoubleClickState {
        let config = &self.config;
        let mut result = DoubleClickState::None;
        for (candidate_id, candidate) in self.slots.iter_mut() {
            if candidate_id == id && candidate.active {
                continue;
            }
            if !candidate.pairs_double_click(pos, now, group, config) {
                continue;
            }
            if candidate.active {
                if candidate_id.is_mouse_button() && id.is_mouse_button() {
                    candidate.double_click = DoubleClickState::CombinedLeftRight;
                    result = DoubleClickState::CombinedLeftRight;
                }
            } else if result == DoubleClickState::None {
                result = DoubleClickState::Pending;
            }
        }
        result
    }

    /// Starts a multi-touch session at the latest positions of both members.
    fn begin_multi_touch(&mut self, pair: Pair) {
        for member in [pair.0, pair.1] {
            if let Some(state) = self.slots.get_mut(member) {
                state.reanchor();
            }
        }
        if let Some((from, _)) = self.slots.pair_positions(pair) {
            debug!("Multi-touch begins with {:?} and {:?}", pair.0, pair.1);
            self.dispatcher
                .dispatch(&Gesture::MultiTouchBegin { from });
        }
    }
}
