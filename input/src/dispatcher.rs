//! Listener registry.
//!
//! Listeners are isolated from each other: an error or a panic of one listener is logged and
//! delivery continues with the next one.
use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use anyhow::{Result, anyhow};
use log::{debug, error};

use crate::{Channel, Gesture};

type Listener = Box<dyn FnMut(&Gesture) -> Result<()>>;

#[derive(Default)]
pub struct Dispatcher {
    /// `None` listens on all channels.
    listeners: Vec<(Option<Channel>, Listener)>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Dispatcher {
    pub fn on(&mut self, channel: Channel, mut listener: impl FnMut(&Gesture) + 'static) {
        self.try_on(channel, move |g| {
            listener(g);
            Ok(())
        })
    }

    pub fn try_on(
        &mut self,
        channel: Channel,
        listener: impl FnMut(&Gesture) -> Result<()> + 'static,
    ) {
        self.listeners.push((Some(channel), Box::new(listener)));
    }

    pub fn on_any(&mut self, mut listener: impl FnMut(&Gesture) + 'static) {
        self.try_on_any(move |g| {
            listener(g);
            Ok(())
        })
    }

    pub fn try_on_any(&mut self, listener: impl FnMut(&Gesture) -> Result<()> + 'static) {
        self.listeners.push((None, Box::new(listener)));
    }

    pub fn dispatch(&mut self, gesture: &Gesture) {
        let channel = gesture.channel();
        debug!("{channel:?}: {gesture:?}");

        for (filter, listener) in &mut self.listeners {
            if filter.is_some_and(|c| c != channel) {
                continue;
            }
            let result = panic::catch_unwind(AssertUnwindSafe(|| listener(gesture)))
                .unwrap_or_else(|payload| {
                    Err(anyhow!("Listener panicked: {}", panic_message(&*payload)))
                });
            if let Err(e) = result {
                error!("Listener on {channel:?} failed: {e:?}");
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string payload>"
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use anyhow::bail;
    use grasp_geometry::Point;

    use super::*;
    use crate::{PointerType, Variant};

    fn click() -> Gesture {
        Gesture::Click {
            variant: Variant::Plain,
            pos: Point::new(10.0, 10.0),
            pointer: PointerType::Left,
        }
    }

    #[test]
    fn delivers_to_matching_channels_only() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::default();

        let r = received.clone();
        dispatcher.on(Channel::Click, move |_| r.borrow_mut().push("click"));
        let r = received.clone();
        dispatcher.on(Channel::DoubleClick, move |_| r.borrow_mut().push("double"));
        let r = received.clone();
        dispatcher.on_any(move |_| r.borrow_mut().push("any"));

        dispatcher.dispatch(&click());
        assert_eq!(*received.borrow(), ["click", "any"]);
    }

    #[test]
    fn failing_listeners_do_not_stop_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut dispatcher = Dispatcher::default();

        dispatcher.try_on(Channel::Click, |_| bail!("listener failed"));
        dispatcher.on(Channel::Click, |_| panic!("listener panicked"));
        let c = count.clone();
        dispatcher.on(Channel::Click, move |_| *c.borrow_mut() += 1);

        dispatcher.dispatch(&click());
        dispatcher.dispatch(&click());
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn panic_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42), "<non-string payload>");
    }
}
