//! Geometry for the synergy map: which nodes exist, where they are first
//! placed, and how the connector lines between them are derived from the
//! rectangles the browser actually laid out.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechNode {
    pub id: &'static str,
    pub x: &'static str,
    pub y: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndustryNode {
    pub id: &'static str,
    pub connects: &'static [&'static str],
    pub x: &'static str,
    pub y: &'static str,
}

pub const TECH_NODES: [TechNode; 5] = [
    TechNode { id: "CoreOS", x: "20%", y: "20%" },
    TechNode { id: "NeuronEdge", x: "80%", y: "20%" },
    TechNode { id: "Starlinker", x: "10%", y: "50%" },
    TechNode { id: "Pulse", x: "90%", y: "50%" },
    TechNode { id: "Tamonjo", x: "50%", y: "80%" },
];

pub const INDUSTRY_NODES: [IndustryNode; 5] = [
    IndustryNode { id: "Space", connects: &["Starlinker", "CoreOS"], x: "50%", y: "5%" },
    IndustryNode { id: "Wearables", connects: &["Pulse", "NeuronEdge"], x: "95%", y: "80%" },
    IndustryNode { id: "Safety", connects: &["CoreOS", "Pulse", "Tamonjo"], x: "5%", y: "80%" },
    IndustryNode { id: "Logistics", connects: &["Tamonjo", "CoreOS", "Starlinker"], x: "30%", y: "50%" },
    IndustryNode { id: "Accessibility", connects: &["NeuronEdge", "Pulse"], x: "70%", y: "50%" },
];

/// A bounding box in viewport pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    /// Centre of `self` in the coordinate space of `container`.
    pub fn center_within(&self, container: &Rect) -> (f64, f64) {
        (
            self.left + self.width / 2.0 - container.left,
            self.top + self.height / 2.0 - container.top,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub key: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

pub fn line_key(industry_id: &str, tech_id: &str) -> String {
    format!("{}-{}", industry_id, tech_id)
}

/// Computes one line per `(industry, technology)` connection, in industry
/// order then connection order. `measure` returns `None` for nodes that are
/// not mounted; their lines are skipped.
pub fn compute_lines<F>(industries: &[IndustryNode], container: &Rect, measure: F) -> Vec<Line>
where
    F: Fn(&str) -> Option<Rect>,
{
    let mut lines = Vec::new();

    for industry in industries {
        let Some(from) = measure(industry.id) else {
            continue;
        };
        let (x1, y1) = from.center_within(container);

        let mut seen = HashSet::new();
        for &tech_id in industry.connects {
            if !seen.insert(tech_id) {
                continue;
            }
            if let Some(to) = measure(tech_id) {
                let (x2, y2) = to.center_within(container);
                lines.push(Line {
                    key: line_key(industry.id, tech_id),
                    x1,
                    y1,
                    x2,
                    y2,
                });
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const CONTAINER: Rect = Rect { left: 100.0, top: 50.0, width: 800.0, height: 600.0 };

    // Lays every node out where its percentage hint says, 40x20 px each.
    fn placed_layout() -> HashMap<&'static str, Rect> {
        let pct = |s: &str| s.trim_end_matches('%').parse::<f64>().unwrap() / 100.0;
        let mut rects = HashMap::new();
        let nodes = TECH_NODES
            .iter()
            .map(|n| (n.id, n.x, n.y))
            .chain(INDUSTRY_NODES.iter().map(|n| (n.id, n.x, n.y)));
        for (id, x, y) in nodes {
            let cx = CONTAINER.left + pct(x) * CONTAINER.width;
            let cy = CONTAINER.top + pct(y) * CONTAINER.height;
            rects.insert(id, Rect::new(cx - 20.0, cy - 10.0, 40.0, 20.0));
        }
        rects
    }

    #[test]
    fn one_line_per_connection_with_no_duplicates() {
        let rects = placed_layout();
        let lines = compute_lines(&INDUSTRY_NODES, &CONTAINER, |id| rects.get(id).copied());

        let expected: Vec<String> = INDUSTRY_NODES
            .iter()
            .flat_map(|i| i.connects.iter().map(move |t| line_key(i.id, t)))
            .collect();
        let keys: Vec<String> = lines.iter().map(|l| l.key.clone()).collect();
        assert_eq!(keys, expected);
        assert_eq!(keys.len(), 12);

        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn endpoints_are_node_centres_relative_to_container() {
        let rects = placed_layout();
        let lines = compute_lines(&INDUSTRY_NODES[..1], &CONTAINER, |id| rects.get(id).copied());

        // Space (50%, 5%) -> Starlinker (10%, 50%)
        assert_eq!(lines[0].key, "Space-Starlinker");
        assert!((lines[0].x1 - 400.0).abs() < 1e-9);
        assert!((lines[0].y1 - 30.0).abs() < 1e-9);
        assert!((lines[0].x2 - 80.0).abs() < 1e-9);
        assert!((lines[0].y2 - 300.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_technology_is_skipped() {
        const ORBIT: [IndustryNode; 1] = [IndustryNode {
            id: "Orbit",
            connects: &["Starlinker", "Warpdrive", "CoreOS"],
            x: "50%",
            y: "50%",
        }];
        let mut rects = placed_layout();
        rects.insert("Orbit", Rect::new(480.0, 340.0, 40.0, 20.0));

        let lines = compute_lines(&ORBIT, &CONTAINER, |id| rects.get(id).copied());

        let keys: Vec<&str> = lines.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, ["Orbit-Starlinker", "Orbit-CoreOS"]);
    }

    #[test]
    fn unmounted_industry_drops_all_its_lines() {
        let mut rects = placed_layout();
        rects.remove("Safety");

        let lines = compute_lines(&INDUSTRY_NODES, &CONTAINER, |id| rects.get(id).copied());

        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| !l.key.starts_with("Safety-")));
    }

    #[test]
    fn repeated_connection_yields_one_line() {
        const ECHO: [IndustryNode; 1] = [IndustryNode {
            id: "Echo",
            connects: &["Pulse", "Pulse"],
            x: "0%",
            y: "0%",
        }];
        let mut rects = placed_layout();
        rects.insert("Echo", Rect::new(100.0, 50.0, 10.0, 10.0));

        let lines = compute_lines(&ECHO, &CONTAINER, |id| rects.get(id).copied());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn nothing_mounted_means_no_lines() {
        let lines = compute_lines(&INDUSTRY_NODES, &CONTAINER, |_| None);
        assert!(lines.is_empty());
    }

    #[test]
    fn node_ids_are_unique_and_connections_resolve() {
        let tech: HashSet<&str> = TECH_NODES.iter().map(|n| n.id).collect();
        let industry: HashSet<&str> = INDUSTRY_NODES.iter().map(|n| n.id).collect();
        assert_eq!(tech.len(), TECH_NODES.len());
        assert_eq!(industry.len(), INDUSTRY_NODES.len());
        for node in INDUSTRY_NODES {
            assert!(node.connects.iter().all(|t| tech.contains(t)), "{}", node.id);
        }
    }
}
