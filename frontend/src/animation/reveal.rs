use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_SELECTOR: &str = ".scroll-reveal";
pub const REVEAL_THRESHOLD: f64 = 0.1;
const SLOT_ATTR: &str = "data-reveal-slot";

/// Hidden/visible state for a fixed set of reveal slots. A slot goes
/// visible once and stays that way.
#[derive(Debug, Default)]
pub struct RevealTracker {
    visible: Vec<bool>,
}

impl RevealTracker {
    pub fn new(slots: usize) -> Self {
        RevealTracker {
            visible: vec![false; slots],
        }
    }

    /// Records an intersection report for `slot`. Returns `true` only for
    /// the report that makes the slot visible.
    pub fn observe(&mut self, slot: usize, is_intersecting: bool) -> bool {
        match self.visible.get_mut(slot) {
            Some(visible) if is_intersecting && !*visible => {
                *visible = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, slot: usize) -> bool {
        self.visible.get(slot).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }
}

/// Browser side of the reveal controller. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    _tracker: Rc<RefCell<RevealTracker>>,
}

impl RevealObserver {
    pub fn attach(selector: &str, threshold: f64) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let nodes = document.query_selector_all(selector).ok()?;
        let tracker = Rc::new(RefCell::new(RevealTracker::new(nodes.length() as usize)));

        let callback_tracker = tracker.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(slot) = target
                    .get_attribute(SLOT_ATTR)
                    .and_then(|slot| slot.parse::<usize>().ok())
                else {
                    continue;
                };
                if callback_tracker.borrow_mut().observe(slot, entry.is_intersecting()) {
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let _ = element.set_attribute(SLOT_ATTR, &index.to_string());
            observer.observe(&element);
        }
        log::debug!("Watching {} reveal elements", tracker.borrow().len());

        Some(RevealObserver {
            observer,
            _callback: callback,
            _tracker: tracker,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveals every `.scroll-reveal` element on the page the first time 10% of
/// it scrolls into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let observer = RevealObserver::attach(REVEAL_SELECTOR, REVEAL_THRESHOLD);
            move || drop(observer)
        },
        (),
    );
}
