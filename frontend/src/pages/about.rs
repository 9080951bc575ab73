use yew::prelude::*;
use gloo_timers::callback::Interval;

pub const TECH_STACK: [&str; 10] = [
    "Rust",
    "Flutter",
    "TensorFlow",
    "WebRTC",
    "MQTT",
    "Blockchain",
    "Yocto",
    "SDR",
    "TinyML",
    "Kubernetes",
];

const TICKER_INTERVAL_MS: u32 = 3000;

pub fn next_ticker_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[function_component]
pub fn TechStackTicker() -> Html {
    let index = use_state(|| 0usize);

    {
        let setter = index.setter();
        use_effect_with_deps(move |_| {
            let mut current = 0;
            let interval = Interval::new(TICKER_INTERVAL_MS, move || {
                current = next_ticker_index(current, TECH_STACK.len());
                setter.set(current);
            });
            move || drop(interval)
        }, ());
    }

    html! {
        <div class="tech-ticker border-accent">
            <p>{TECH_STACK.get(*index).copied().unwrap_or_default()}</p>
        </div>
    }
}

#[function_component]
pub fn AboutSection() -> Html {
    html! {
        <section id="about" class="section section--tinted">
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr 1fr; }
                }
                .about-grid h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .about-lead {
                    font-size: 1.125rem;
                    color: #D1D5DB;
                    margin-bottom: 2rem;
                }
                .about-feature {
                    display: flex;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .about-feature svg {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #22D3EE;
                    margin: 0.25rem 1rem 0 0;
                    flex-shrink: 0;
                }
                .about-feature h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0;
                }
                .about-feature p {
                    color: #9CA3AF;
                    margin: 0.25rem 0 0;
                }
                .tech-ticker {
                    height: 24rem;
                    border-radius: 0.75rem;
                    background-color: #111827;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .tech-ticker p {
                    color: #22D3EE;
                    font-size: 2.25rem;
                    font-family: monospace;
                    text-align: center;
                    transition: opacity 0.5s ease;
                }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <div class="scroll-reveal">
                        <h2>{"We build the backbone of tomorrow's technology."}</h2>
                        <p class="about-lead">
                            {"Trivex was founded on the principle that the most profound innovations emerge from the seamless integration of hardware and software. We are a collective of engineers, scientists, and designers dedicated to solving complex, multi-disciplinary challenges."}
                        </p>
                        <div class="about-feature">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M12 6V3m0 18v-3"></path>
                            </svg>
                            <div>
                                <h4>{"Synergy Engineering"}</h4>
                                <p>{"Our design philosophy centers on creating systems where the whole is greater than the sum of its parts."}</p>
                            </div>
                        </div>
                        <div class="about-feature">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6V4m0 2a2 2 0 100 4m0-4a2 2 0 110 4m-6 8a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4m6 6v10m6-2a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4"></path>
                            </svg>
                            <div>
                                <h4>{"Human-Centered Systems"}</h4>
                                <p>{"Technology should be an extension of human capability, designed with intent, ethics, and usability at its core."}</p>
                            </div>
                        </div>
                    </div>
                    <div class="scroll-reveal" style="transition-delay: 200ms;">
                        <TechStackTicker />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_wraps_after_last_technology() {
        assert_eq!(next_ticker_index(0, TECH_STACK.len()), 1);
        assert_eq!(next_ticker_index(9, TECH_STACK.len()), 0);
    }

    #[test]
    fn empty_ticker_stays_at_zero() {
        assert_eq!(next_ticker_index(3, 0), 0);
    }
}
