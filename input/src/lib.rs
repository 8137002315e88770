//! Multi-pointer gesture recognition.
//!
//! Raw pointer streams (one per mouse button or touch contact) go in, classified gestures come
//! out through listener channels: clicks, double clicks, long presses, drags and their
//! combinations, and two pointer multi-touch sessions.
mod config;
mod dispatcher;
mod external_event;
mod gesture;
mod pointer;
mod pointer_state;
mod recognizer;
mod slot_table;
mod winit_adapter;

pub use config::*;
pub use dispatcher::*;
pub use external_event::*;
pub use gesture::*;
pub use pointer::*;
pub use pointer_state::*;
pub use recognizer::*;
pub use slot_table::*;
pub use winit_adapter::*;
