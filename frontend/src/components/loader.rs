use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::animation::scheduler::Listener;

const FADE_DELAY_MS: u32 = 100;
const FADE_DURATION_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Debug)]
enum LoaderPhase {
    Shown,
    Fading,
    Gone,
}

/// Full-screen splash that fades out once the window has finished loading.
#[function_component]
pub fn Loader() -> Html {
    let phase = use_state(|| LoaderPhase::Shown);

    {
        let phase = phase.setter();
        use_effect_with_deps(
            move |_| {
                let timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
                let start_fade = {
                    let timers = timers.clone();
                    move || {
                        let fade = phase.clone();
                        let hide = phase.clone();
                        let mut timers = timers.borrow_mut();
                        timers.push(Timeout::new(FADE_DELAY_MS, move || fade.set(LoaderPhase::Fading)));
                        timers.push(Timeout::new(FADE_DELAY_MS + FADE_DURATION_MS, move || {
                            hide.set(LoaderPhase::Gone)
                        }));
                    }
                };

                let window = web_sys::window();
                let already_loaded = window
                    .as_ref()
                    .and_then(|w| w.document())
                    .map(|d| d.ready_state() == "complete")
                    .unwrap_or(true);

                let load_listener = if already_loaded {
                    start_fade();
                    None
                } else {
                    let mut start_fade = Some(start_fade);
                    window.as_ref().and_then(|w| {
                        Listener::new(w, "load", move |_| {
                            if let Some(start) = start_fade.take() {
                                start();
                            }
                        })
                    })
                };

                move || {
                    drop(load_listener);
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    if *phase == LoaderPhase::Gone {
        return html! {};
    }

    let style = if *phase == LoaderPhase::Fading { "opacity: 0;" } else { "" };

    html! {
        <div id="loader" style={style}>
            <div class="loader-logo">{"TRIVEX"}</div>
        </div>
    }
}
