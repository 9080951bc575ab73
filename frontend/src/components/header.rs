use yew::prelude::*;
use web_sys::MouseEvent;

use crate::animation::scheduler::Listener;

const SCROLLED_THRESHOLD: f64 = 50.0;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#portfolio", "Portfolio"),
    ("#about", "About"),
    ("#synergy", "Synergy"),
    ("#insights", "Insights"),
];

#[function_component]
pub fn Header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().and_then(|window| {
                let scroll_window = window.clone();
                Listener::new(&window, "scroll", move |_| {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                })
            });

            move || drop(listener)
        }, ());
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    // Links still navigate to their anchor; only the overlay closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let close_button = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    html! {
        <>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background-color: rgba(17, 24, 39, 0.8);
                    backdrop-filter: blur(4px);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-links a:hover,
                .mobile-menu a:hover {
                    color: #22D3EE;
                }
                .nav-cta {
                    background: #06B6D4;
                    color: #111827 !important;
                    font-weight: 700;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #FFFFFF;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    background: rgba(17, 24, 39, 0.95);
                    z-index: 50;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    font-size: 1.5rem;
                }
                .mobile-menu .close-button {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: none;
                    border: none;
                    color: #FFFFFF;
                    font-size: 2rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
            <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <nav class="nav-content">
                    <a href="#" class="nav-logo">{"TRIVEX"}</a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href}>{*label}</a>
                        }) }
                        <a href="#contact" class="nav-cta">{"Partner With Us"}</a>
                    </div>
                    <button class="burger-menu" onclick={open_menu} aria-label="Open menu">
                        <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7"></path>
                        </svg>
                    </button>
                </nav>
            </header>
            if *menu_open {
                <div class="mobile-menu">
                    <button class="close-button" onclick={close_button} aria-label="Close menu">{"×"}</button>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>{"Partner With Us"}</a>
                </div>
            }
        </>
    }
}
