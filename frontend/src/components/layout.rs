use yew::prelude::*;
use web_sys::{Document, Element};

use crate::components::{footer::Footer, header::Header, loader::Loader};

pub const PAGE_TITLE: &str = "Trivex | From Silicon to Software—We Engineer Synergy.";
const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;600;700&display=swap";

const GLOBAL_STYLES: &str = r#"
  body {
    margin: 0;
    background-color: #030712;
    color: #FFFFFF;
    font-family: 'Space Grotesk', sans-serif;
  }
  a { color: inherit; text-decoration: none; }
  .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
  .section { padding: 5rem 0; }
  .section--tinted { background-color: rgba(17, 24, 39, 0.5); }
  .section-heading { text-align: center; margin-bottom: 4rem; }
  .section-heading h2 { font-size: 2.5rem; font-weight: 700; margin: 0; }
  .section-heading p { font-size: 1.125rem; color: #9CA3AF; margin: 1rem auto 0; max-width: 42rem; }
  .accent-cyan { color: #00FFFF; }
  .border-accent { border: 1px solid rgba(0, 255, 255, 0.2); }
  .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
  .hero-text-container {
    transform-style: preserve-3d;
  }
  .hero-text {
    display: block;
    transform: translateZ(20px) scale(0.9);
    opacity: 0;
    transition: transform 1s cubic-bezier(0.19, 1, 0.22, 1), opacity 1s cubic-bezier(0.19, 1, 0.22, 1);
  }
  .hero-text.visible {
    transform: translateZ(0) scale(1);
    opacity: 1;
  }
  .scroll-reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
  }
  .scroll-reveal.visible {
    opacity: 1;
    transform: translateY(0);
  }
  .synergy-map-line {
    stroke: rgba(0, 255, 255, 0.3);
    stroke-width: 1;
    transition: stroke 0.3s ease;
  }
  .synergy-map-line:hover {
    stroke: #00FFFF;
    stroke-width: 2;
  }
  .project-card {
    background-color: #111827;
    border-radius: 0.75rem;
    padding: 2rem;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
  }
  .project-card:hover {
    transform: translateY(-10px);
    box-shadow: 0 20px 25px -5px rgba(0, 255, 255, 0.1), 0 10px 10px -5px rgba(0, 255, 255, 0.04);
  }
  #loader {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background-color: #030712;
    display: flex;
    justify-content: center;
    align-items: center;
    z-index: 9999;
    transition: opacity 0.5s ease-out;
  }
  .loader-logo {
    font-size: 2rem;
    font-weight: 700;
    color: #FFFFFF;
    position: relative;
  }
  .loader-logo::after {
    content: '_';
    animation: blink 1s infinite;
    position: absolute;
  }
  @keyframes blink {
    50% { opacity: 0; }
  }
"#;

/// Nodes the layout adds to `<head>`. Whatever this holds is removed again
/// by [`HeadInjections::remove`]; nodes that already existed are never
/// recorded, so they survive unmount.
#[derive(Default)]
pub struct HeadInjections {
    nodes: Vec<Element>,
}

impl HeadInjections {
    pub fn install(document: &Document) -> Self {
        let mut injections = HeadInjections::default();
        let Some(head) = document.head() else {
            return injections;
        };

        document.set_title(PAGE_TITLE);

        if let Ok(style) = document.create_element("style") {
            style.set_text_content(Some(GLOBAL_STYLES));
            injections.append(&head, style);
        }

        let has_viewport = document
            .query_selector(r#"meta[name="viewport"]"#)
            .ok()
            .flatten()
            .is_some();
        if !has_viewport {
            if let Ok(meta) = document.create_element("meta") {
                let _ = meta.set_attribute("name", "viewport");
                let _ = meta.set_attribute("content", "width=device-width, initial-scale=1.0");
                injections.append(&head, meta);
            }
        }

        let links: [&[(&str, &str)]; 3] = [
            &[("rel", "preconnect"), ("href", "https://fonts.googleapis.com")],
            &[("rel", "preconnect"), ("href", "https://fonts.gstatic.com"), ("crossorigin", "true")],
            &[("rel", "stylesheet"), ("href", FONT_STYLESHEET)],
        ];
        for attributes in links {
            if let Ok(link) = document.create_element("link") {
                for (name, value) in attributes {
                    let _ = link.set_attribute(name, value);
                }
                injections.append(&head, link);
            }
        }

        injections
    }

    fn append(&mut self, head: &Element, node: Element) {
        if head.append_child(&node).is_ok() {
            self.nodes.push(node);
        }
    }

    pub fn remove(self) {
        for node in self.nodes {
            node.remove();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component]
pub fn Layout(props: &LayoutProps) -> Html {
    use_effect_with_deps(
        |_| {
            let injections = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| HeadInjections::install(&document));
            move || {
                if let Some(injections) = injections {
                    injections.remove();
                }
            }
        },
        (),
    );

    html! {
        <div class="antialiased">
            <Loader />
            <Header />
            <main>{ for props.children.iter() }</main>
            <Footer />
        </div>
    }
}
