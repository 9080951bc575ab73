//! Owned handles for everything the page schedules on the browser: event
//! listeners, the animation-frame loop and deferred recomputes. Dropping a
//! handle cancels it, so a component's effect cleanup only has to drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Delays for a staggered sequence: `first_ms`, then every `step_ms`.
pub fn stagger_delays(count: usize, first_ms: u32, step_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| first_ms + i * step_ms).collect()
}

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Calls `tick` once per display frame until dropped.
pub struct FrameLoop {
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let frame_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        // Weak so the closure doesn't keep itself alive after the loop is dropped.
        let next = Rc::downgrade(&callback);
        let next_id = frame_id.clone();
        let loop_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            tick();
            if let Some(callback) = next.upgrade() {
                if let Some(callback) = callback.borrow().as_ref() {
                    next_id.set(
                        loop_window
                            .request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }
        }) as Box<dyn FnMut()>));

        let first = callback.borrow().as_ref().and_then(|callback| {
            window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
        });
        frame_id.set(first);

        Some(FrameLoop { frame_id, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Runs `recompute` once after `initial_delay_ms`, then again whenever the
/// viewport is resized. A burst of resize events within `debounce_ms`
/// collapses into one call.
pub struct RecomputeTriggers {
    _initial: Timeout,
    _resize: Option<Listener>,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

impl RecomputeTriggers {
    pub fn new<F>(initial_delay_ms: u32, debounce_ms: u32, recompute: F) -> Self
    where
        F: Fn() + 'static,
    {
        let recompute = Rc::new(recompute);

        let initial = {
            let recompute = recompute.clone();
            Timeout::new(initial_delay_ms, move || recompute())
        };

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let resize = web_sys::window().and_then(|window| {
            let pending = pending.clone();
            Listener::new(&window, "resize", move |_| {
                let recompute = recompute.clone();
                // Replacing the previous timeout drops it, which cancels it.
                *pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || recompute()));
            })
        });

        RecomputeTriggers {
            _initial: initial,
            _resize: resize,
            _pending: pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_starts_at_first_delay() {
        assert_eq!(stagger_delays(4, 500, 200), vec![500, 700, 900, 1100]);
    }

    #[test]
    fn stagger_of_nothing_is_empty() {
        assert!(stagger_delays(0, 500, 200).is_empty());
    }
}
