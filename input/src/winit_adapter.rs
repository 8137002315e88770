//! Translates winit window events into pointer streams.
//!
//! Mouse buttons become the reserved negative pointer ids, touch contacts keep their ids. winit
//! reports cursor motion independently of buttons, so a motion becomes a drag of every button
//! currently held.
use std::time::Instant;

use euclid::point2;
use grasp_geometry::ScreenPoint;
use log::warn;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::{InputEvent, PointerId};

#[derive(Debug, Default)]
pub struct WinitPointerSource {
    cursor: Option<ScreenPoint>,
    /// Mouse buttons currently held, in press order.
    pressed: Vec<PointerId>,
}

impl WinitPointerSource {
    pub fn translate(&mut self, event: &WindowEvent, time: Instant) -> Vec<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(point2(position.x, position.y), time)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(*state, *button, time).into_iter().collect()
            }
            WindowEvent::Touch(touch) => self
                .touch(
                    touch.phase,
                    touch.id,
                    point2(touch.location.x, touch.location.y),
                    time,
                )
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn cursor_moved(&mut self, pos: ScreenPoint, time: Instant) -> Vec<InputEvent> {
        if self.cursor == Some(pos) {
            return Vec::new();
        }
        self.cursor = Some(pos);
        self.pressed
            .iter()
            .map(|&pointer| InputEvent::Drag { pointer, pos, time })
            .collect()
    }

    pub fn mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
        time: Instant,
    ) -> Option<InputEvent> {
        let pointer = mouse_pointer(button)?;
        let Some(pos) = self.cursor else {
            warn!("Ignoring {button:?} {state:?}, no cursor position received yet");
            return None;
        };
        match state {
            ElementState::Pressed => {
                if !self.pressed.contains(&pointer) {
                    self.pressed.push(pointer);
                }
                Some(InputEvent::PointerDown { pointer, pos, time })
            }
            ElementState::Released => {
                self.pressed.retain(|p| *p != pointer);
                Some(InputEvent::PointerUp { pointer, pos, time })
            }
        }
    }

    pub fn touch(
        &self,
        phase: TouchPhase,
        id: u64,
        pos: ScreenPoint,
        time: Instant,
    ) -> Option<InputEvent> {
        let Some(pointer) = PointerId::touch(id) else {
            warn!("Ignoring touch with out of range id {id}");
            return None;
        };
        Some(match phase {
            TouchPhase::Started => InputEvent::PointerDown { pointer, pos, time },
            TouchPhase::Moved => InputEvent::Drag { pointer, pos, time },
            TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::PointerUp { pointer, pos, time },
        })
    }
}

fn mouse_pointer(button: MouseButton) -> Option<PointerId> {
    match button {
        MouseButton::Left => Some(PointerId::LEFT),
        MouseButton::Right => Some(PointerId::RIGHT),
        MouseButton::Middle => Some(PointerId::MIDDLE),
        _ => None,
    }
}
