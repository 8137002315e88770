//! The table of all pointers ever seen.
//!
//! Slots are created lazily and never removed, so the historical state of a released pointer
//! stays around for double-click pairing. Iteration is in ascending id order, mouse buttons
//! first.
use std::collections::BTreeMap;

use grasp_geometry::Point;
use itertools::Itertools;

use crate::{PointerId, PointerState};

#[derive(Debug, Default)]
pub struct SlotTable {
    slots: BTreeMap<PointerId, PointerState>,
}

/// The two pointers of a multi-touch session, in id order.
pub type Pair = (PointerId, PointerId);

impl SlotTable {
    /// Returns the slot of `id`, creating it if it's the first time `id` is seen.
    pub fn resolve(&mut self, id: PointerId) -> &mut PointerState {
        self.slots.entry(id).or_default()
    }

    pub fn get(&self, id: PointerId) -> Option<&PointerState> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: PointerId) -> Option<&mut PointerState> {
        self.slots.get_mut(&id)
    }

    /// Returns the slot of `id` only if it's currently pressed.
    pub fn active_mut(&mut self, id: PointerId) -> Option<&mut PointerState> {
        self.get_mut(id).filter(|s| s.active)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointerId, &PointerState)> {
        self.slots.iter().map(|(id, s)| (*id, s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PointerId, &mut PointerState)> {
        self.slots.iter_mut().map(|(id, s)| (*id, s))
    }

    /// The only active pointer, `None` if there are zero or more than one.
    pub fn single_active(&mut self) -> Option<(PointerId, &mut PointerState)> {
        self.iter_mut().filter(|(_, s)| s.active).exactly_one().ok()
    }

    /// The current multi-touch pair: the first two active touches. Mouse buttons never pair.
    pub fn pair(&self) -> Option<Pair> {
        self.iter()
            .filter(|(id, s)| s.active && !id.is_mouse_button())
            .map(|(id, _)| id)
            .next_tuple()
    }

    /// The pair `id` is a member of.
    pub fn pair_of(&self, id: PointerId) -> Option<Pair> {
        self.pair().filter(|(a, b)| *a == id || *b == id)
    }

    /// Down and latest positions of both pair members.
    pub fn pair_positions(&self, (a, b): Pair) -> Option<([Point; 2], [Point; 2])> {
        let (a, b) = (self.get(a)?, self.get(b)?);
        Some((
            [a.down_position, b.down_position],
            [a.previous_position, b.previous_position],
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::DoubleClickState;

    fn press(table: &mut SlotTable, id: i64) {
        table
            .resolve(PointerId::new(id))
            .press(Point::ZERO, Instant::now(), None, DoubleClickState::None);
    }

    #[test]
    fn slots_persist_across_cycles() {
        let mut table = SlotTable::default();
        for _ in 0..3 {
            press(&mut table, -1);
            table.resolve(PointerId::LEFT).active = false;
        }
        press(&mut table, 0);
        assert_eq!(table.len(), 2);
        assert!(table.get(PointerId::LEFT).unwrap().down_time.is_some());
    }

    #[test]
    fn mouse_buttons_and_touches_do_not_alias() {
        let mut table = SlotTable::default();
        press(&mut table, -3);
        press(&mut table, -2);
        press(&mut table, -1);
        press(&mut table, 0);
        press(&mut table, 1);
        press(&mut table, 1_000_000);
        assert_eq!(table.len(), 6);
        assert!(table.iter().all(|(_, s)| s.active));
    }

    #[test]
    fn pair_is_first_two_active() {
        let mut table = SlotTable::default();
        press(&mut table, 3);
        assert_eq!(table.pair(), None);
        assert!(table.single_active().is_some());

        press(&mut table, 1);
        press(&mut table, 2);
        assert_eq!(table.pair(), Some((PointerId::new(1), PointerId::new(2))));
        assert_eq!(table.pair_of(PointerId::new(3)), None);
        assert!(table.single_active().is_none());

        table.resolve(PointerId::new(1)).active = false;
        assert_eq!(table.pair(), Some((PointerId::new(2), PointerId::new(3))));
    }

    #[test]
    fn mouse_buttons_never_pair() {
        let mut table = SlotTable::default();
        press(&mut table, -2);
        press(&mut table, -1);
        assert_eq!(table.pair(), None);
        table.resolve(PointerId::LEFT).double_click = DoubleClickState::CombinedLeftRight;
        table.resolve(PointerId::RIGHT).double_click = DoubleClickState::CombinedLeftRight;
        assert_eq!(table.pair(), None);

        press(&mut table, 4);
        assert_eq!(table.pair(), None);
        assert_eq!(table.pair_of(PointerId::LEFT), None);

        press(&mut table, 7);
        assert_eq!(table.pair(), Some((PointerId::new(4), PointerId::new(7))));
    }
}
