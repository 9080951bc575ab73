use yew::prelude::*;

use crate::animation::scheduler::stagger_delays;
use crate::pages::portfolio::transition_delay;

pub struct Article {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ARTICLES: [Article; 3] = [
    Article {
        category: "DEEP DIVE",
        title: "The Future is Embedded: Why Rust is Our Choice for CoreOS",
        description: "An in-depth look at the memory safety and performance benefits that make Rust the ideal language for mission-critical systems.",
    },
    Article {
        category: "TRIVEX LABS",
        title: "Concept: Liquid Crystal Neural Networks",
        description: "Exploring the potential of novel materials for ultra-low-power, analog computing hardware.",
    },
    Article {
        category: "PERSPECTIVE",
        title: "Beyond The Hype: Real-World Blockchain for Secure Comms",
        description: "How Starlinker leverages a lightweight distributed ledger for immutable, auditable message verification.",
    },
];

const ARTICLE_STEP_MS: u32 = 150;

#[function_component]
pub fn InsightsSection() -> Html {
    let delays = stagger_delays(ARTICLES.len(), 0, ARTICLE_STEP_MS);

    html! {
        <section id="insights" class="section section--tinted">
            <style>
                {r#"
                .article-card {
                    display: block;
                    background-color: #111827;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    border: 1px solid transparent;
                    transition: border-color 0.3s ease;
                }
                .article-card:hover {
                    border-color: rgba(0, 255, 255, 0.2);
                }
                .article-category {
                    font-size: 0.875rem;
                    color: #6B7280;
                    margin: 0 0 0.5rem;
                }
                .article-card h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .article-card p.article-summary {
                    color: #9CA3AF;
                    margin: 0;
                }
                "#}
            </style>
            <div class="container">
                <div class="section-heading scroll-reveal">
                    <h2>{"Thought Hub & Insights"}</h2>
                    <p>{"Exploring the frontiers of technology, from our engineers and researchers to you."}</p>
                </div>
                <div class="card-grid">
                    { for ARTICLES.iter().zip(delays).map(|(article, delay)| html! {
                        <a key={article.title} href="#" class="article-card scroll-reveal" style={transition_delay(delay)}>
                            <p class="article-category">{article.category}</p>
                            <h4>{article.title}</h4>
                            <p class="article-summary">{article.description}</p>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles_step_by_one_hundred_fifty_ms() {
        assert_eq!(stagger_delays(ARTICLES.len(), 0, ARTICLE_STEP_MS), vec![0, 150, 300]);
    }
}
