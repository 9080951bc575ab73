use yew::prelude::*;

use crate::animation::scheduler::stagger_delays;

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "CoreOS",
        description: "The secure, real-time operating system for mission-critical embedded systems.",
        tech: "Rust, Yocto, MQTT, WebRTC",
    },
    Project {
        title: "NeuronEdge",
        description: "A decentralized AI computing framework for neural processing at the edge.",
        tech: "TensorFlow Lite, Flutter, gRPC",
    },
    Project {
        title: "Starlinker",
        description: "Low-latency mesh network protocol for resilient space-to-ground communications.",
        tech: "SDR, Blockchain, Custom RF",
    },
    Project {
        title: "Pulse",
        description: "Biometric authentication and health monitoring platform for next-gen wearables.",
        tech: "TinyML, BLE, Secure Enclave",
    },
    Project {
        title: "Tamonjo",
        description: "An IoT platform unifying device management, data pipelines, and digital twins.",
        tech: "Kafka, K8s, Grafana, Digital Twin",
    },
];

const CARD_STEP_MS: u32 = 100;
const MORE_CARD_DELAY_MS: u32 = 500;

pub fn transition_delay(ms: u32) -> String {
    format!("transition-delay: {}ms;", ms)
}

#[function_component]
pub fn PortfolioSection() -> Html {
    let delays = stagger_delays(PROJECTS.len(), 0, CARD_STEP_MS);

    html! {
        <section id="portfolio" class="section">
            <style>
                {r#"
                .project-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .project-card p {
                    color: #9CA3AF;
                    margin: 0.5rem 0 1rem;
                }
                .project-card .project-tech {
                    font-size: 0.875rem;
                    font-family: monospace;
                    color: #6B7280;
                    margin: 0;
                }
                .project-card a {
                    color: #22D3EE;
                    font-weight: 700;
                }
                .project-card a:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
            <div class="container">
                <div class="section-heading scroll-reveal">
                    <h2>{"Innovation Portfolio"}</h2>
                    <p>{"Our core platforms, designed to create seamless interaction between the digital and physical worlds."}</p>
                </div>
                <div class="card-grid">
                    { for PROJECTS.iter().zip(delays).map(|(project, delay)| html! {
                        <div key={project.title} class="project-card border-accent scroll-reveal" style={transition_delay(delay)}>
                            <h3 class="accent-cyan">{project.title}</h3>
                            <p>{project.description}</p>
                            <p class="project-tech">{format!("Tech: {}", project.tech)}</p>
                        </div>
                    }) }
                    <div class="project-card border-accent scroll-reveal" style={transition_delay(MORE_CARD_DELAY_MS)}>
                        <h3>{"And more..."}</h3>
                        <p>{"Explore our R&D labs for early-stage concepts in advanced materials and quantum computing."}</p>
                        <a href="#insights">{"Visit Trivex Labs"}</a>
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
    fn cards_step_by_one_hundred_ms() {
        let delays = stagger_delays(PROJECTS.len(), 0, CARD_STEP_MS);
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
        assert_eq!(transition_delay(delays[3]), "transition-delay: 300ms;");
    }

    #[test]
    fn project_titles_match_synergy_map_nodes() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        let nodes: Vec<&str> = crate::synergy_layout::TECH_NODES.iter().map(|n| n.id).collect();
        assert_eq!(titles, nodes);
    }
}
