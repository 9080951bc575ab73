use std::collections::HashMap;

use yew::prelude::*;
use web_sys::Element;

use crate::animation::scheduler::RecomputeTriggers;
use crate::synergy_layout::{compute_lines, Line, Rect, INDUSTRY_NODES, TECH_NODES};

const INITIAL_LAYOUT_DELAY_MS: u32 = 100;
const RESIZE_DEBOUNCE_MS: u32 = 50;

fn measure(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn node_style(x: &str, y: &str) -> String {
    format!("left: {}; top: {};", x, y)
}

#[function_component]
pub fn SynergyMapSection() -> Html {
    let container_ref = use_node_ref();
    let node_refs = use_memo(
        |_| {
            TECH_NODES
                .iter()
                .map(|node| node.id)
                .chain(INDUSTRY_NODES.iter().map(|node| node.id))
                .map(|id| (id, NodeRef::default()))
                .collect::<HashMap<&'static str, NodeRef>>()
        },
        (),
    );
    let lines = use_state(Vec::<Line>::new);

    {
        let container_ref = container_ref.clone();
        let node_refs = node_refs.clone();
        let lines = lines.setter();
        use_effect_with_deps(move |_| {
            let triggers = RecomputeTriggers::new(INITIAL_LAYOUT_DELAY_MS, RESIZE_DEBOUNCE_MS, move || {
                let Some(container) = container_ref.cast::<Element>() else {
                    return;
                };
                let computed = compute_lines(&INDUSTRY_NODES, &measure(&container), |id| {
                    node_refs
                        .get(id)
                        .and_then(|node_ref| node_ref.cast::<Element>())
                        .map(|element| measure(&element))
                });
                log::debug!("Synergy map laid out {} lines", computed.len());
                lines.set(computed);
            });
            move || drop(triggers)
        }, ());
    }

    let node_ref = |id: &str| node_refs.get(id).cloned().unwrap_or_default();

    html! {
        <section id="synergy" class="section">
            <style>
                {r#"
                .synergy-map {
                    margin: 4rem auto 0;
                    position: relative;
                    height: 600px;
                    width: 100%;
                    max-width: 56rem;
                }
                .synergy-map svg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }
                .synergy-map-node {
                    position: absolute;
                    transform: translate(-50%, -50%);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .synergy-map-node.tech {
                    background-color: #1F2937;
                    border: 1px solid rgba(0, 255, 255, 0.2);
                    border-radius: 0.5rem;
                    padding: 1rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                }
                .synergy-map-node.tech:hover {
                    background-color: #374151;
                    transform: translate(-50%, -50%) scale(1.05);
                }
                .synergy-map-node.industry {
                    color: #22D3EE;
                    font-weight: 700;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                }
                @media (max-width: 768px) {
                    .synergy-map-node.tech { padding: 0.75rem; font-size: 0.875rem; }
                    .synergy-map-node.industry { font-size: 1.125rem; }
                }
                "#}
            </style>
            <div class="container">
                <div class="section-heading scroll-reveal">
                    <h2>{"The Trivex Synergy Map"}</h2>
                    <p>{"Our platforms are not isolated products. They are designed to interconnect, creating novel solutions across diverse industries."}</p>
                </div>
                <div ref={container_ref} class="synergy-map scroll-reveal">
                    <svg>
                        { for lines.iter().map(|line| html! {
                            <line
                                key={line.key.clone()}
                                x1={line.x1.to_string()}
                                y1={line.y1.to_string()}
                                x2={line.x2.to_string()}
                                y2={line.y2.to_string()}
                                class="synergy-map-line"
                            />
                        }) }
                    </svg>
                    { for TECH_NODES.iter().map(|node| html! {
                        <div key={node.id} ref={node_ref(node.id)} class="synergy-map-node tech" style={node_style(node.x, node.y)}>
                            {node.id}
                        </div>
                    }) }
                    { for INDUSTRY_NODES.iter().map(|node| html! {
                        <div key={node.id} ref={node_ref(node.id)} class="synergy-map-node industry" style={node_style(node.x, node.y)}>
                            {node.id}
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
