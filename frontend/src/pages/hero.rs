use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::animation::particles::{
    pointer_offset, Camera, ParticleField, FIELD_EXTENT, PARTICLE_COUNT,
};
use crate::animation::scheduler::{stagger_delays, FrameLoop, Listener};

const HERO_TEXT_FIRST_MS: u32 = 500;
const HERO_TEXT_STEP_MS: u32 = 200;
const HERO_TEXT_COUNT: usize = 4;
const PARTICLE_COLOR: &str = "#00FFFF";

/// Everything the particle background holds on to while mounted. Dropping
/// it stops the frame loop and detaches the listeners.
struct ParticleScene {
    _frame_loop: Option<FrameLoop>,
    _pointer: Option<Listener>,
    _resize: Option<Listener>,
}

// Sizes the canvas backing store to the container in device pixels and
// returns the new aspect ratio.
fn fit_canvas(container: &HtmlElement, canvas: &HtmlCanvasElement, pixel_ratio: f64) -> Option<f64> {
    let width = container.client_width() as f64;
    let height = container.client_height() as f64;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    canvas.set_width((width * pixel_ratio) as u32);
    canvas.set_height((height * pixel_ratio) as u32);
    Some(width / height)
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField, camera: &Camera, width: f64, height: f64) {
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style(&JsValue::from_str(PARTICLE_COLOR));
    for point in field.world_positions() {
        if let Some(p) = camera.project(point, width, height) {
            context.fill_rect(p.x, p.y, p.size, p.size);
        }
    }
}

impl ParticleScene {
    fn mount(container: HtmlElement, canvas: HtmlCanvasElement) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let pixel_ratio = window.device_pixel_ratio();
        let camera = Rc::new(RefCell::new(Camera::new(1.0)));
        if let Some(aspect) = fit_canvas(&container, &canvas, pixel_ratio) {
            camera.borrow_mut().set_aspect(aspect);
        }

        let resize = {
            let camera = camera.clone();
            let canvas = canvas.clone();
            let resize_window = window.clone();
            Listener::new(&window, "resize", move |_| {
                if let Some(aspect) =
                    fit_canvas(&container, &canvas, resize_window.device_pixel_ratio())
                {
                    camera.borrow_mut().set_aspect(aspect);
                }
            })
        };

        let pointer = Rc::new(Cell::new((0.0, 0.0)));
        let pointer_listener = {
            let pointer = pointer.clone();
            let pointer_window = window.clone();
            Listener::new(&document, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let width = pointer_window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = pointer_window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                pointer.set(pointer_offset(
                    event.client_x() as f64,
                    event.client_y() as f64,
                    width,
                    height,
                ));
            })
        };

        let mut field = ParticleField::scatter(PARTICLE_COUNT, FIELD_EXTENT, &mut rand::thread_rng());
        let frame_loop = FrameLoop::start(move || {
            field.step();
            let mut camera = camera.borrow_mut();
            camera.follow(pointer.get());
            draw(&context, &field, &camera, canvas.width() as f64, canvas.height() as f64);
        });
        log::info!("Particle background started with {} points", PARTICLE_COUNT);

        Some(ParticleScene {
            _frame_loop: frame_loop,
            _pointer: pointer_listener,
            _resize: resize,
        })
    }
}

#[function_component]
pub fn ParticleBackground() -> Html {
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            let scene = match (
                container_ref.cast::<HtmlElement>(),
                canvas_ref.cast::<HtmlCanvasElement>(),
            ) {
                (Some(container), Some(canvas)) => ParticleScene::mount(container, canvas),
                _ => None,
            };
            move || drop(scene)
        }, ());
    }

    html! {
        <div ref={container_ref} class="hero-canvas">
            <canvas ref={canvas_ref}></canvas>
        </div>
    }
}

fn hero_text_class(index: usize, revealed: usize, extra: Option<&'static str>) -> Classes {
    classes!("hero-text", extra, (index < revealed).then(|| "visible"))
}

#[function_component]
pub fn HeroSection() -> Html {
    let revealed = use_state(|| 0usize);

    {
        let revealed = revealed.setter();
        use_effect_with_deps(move |_| {
            let timers: Vec<Timeout> = stagger_delays(HERO_TEXT_COUNT, HERO_TEXT_FIRST_MS, HERO_TEXT_STEP_MS)
                .into_iter()
                .enumerate()
                .map(|(index, delay)| {
                    let revealed = revealed.clone();
                    Timeout::new(delay, move || revealed.set(index + 1))
                })
                .collect();
            move || drop(timers)
        }, ());
    }

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                .hero {
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                }
                .hero-canvas {
                    position: absolute;
                    inset: 0;
                }
                .hero-canvas canvas {
                    width: 100%;
                    height: 100%;
                    display: block;
                }
                .hero-content {
                    text-align: center;
                    z-index: 10;
                    padding: 0 1rem;
                }
                .hero-content h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0 0 1rem;
                }
                .hero-subtitle {
                    max-width: 48rem;
                    margin: 2rem auto 0;
                    font-size: 1.25rem;
                    color: #D1D5DB;
                }
                .hero-cta {
                    display: inline-block;
                    margin-top: 3rem;
                    border: 1px solid #22D3EE;
                    color: #22D3EE;
                    font-weight: 700;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    font-size: 1.125rem;
                    transition: all 0.3s ease;
                }
                .hero-cta:hover {
                    background: #22D3EE;
                    color: #111827;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #9CA3AF;
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }
                "#}
            </style>
            <ParticleBackground />
            <div class="hero-content hero-text-container">
                <h1>
                    <span class={hero_text_class(0, *revealed, None)}>{"From Silicon to Software—"}</span>
                    <span class={hero_text_class(1, *revealed, Some("accent-cyan"))}>{"We Engineer Synergy."}</span>
                </h1>
                <p class={hero_text_class(2, *revealed, Some("hero-subtitle"))}>
                    {"Trivex develops futuristic platforms that fuse hardware and software into unified ecosystems, driving innovation and empowering human potential."}
                </p>
                <div class={hero_text_class(3, *revealed, None)}>
                    <a href="#portfolio" class="hero-cta">{"Explore Our Ecosystem"}</a>
                </div>
            </div>
            <div class="scroll-indicator">
                <svg width="32" height="32" fill="none" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" viewBox="0 0 24 24">
                    <path d="M19 14l-7 7m0 0l-7-7m7 7V3"></path>
                </svg>
            </div>
        </section>
    }
}
