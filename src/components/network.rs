use std::f64::consts::PI;

use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config::{NODE_CENTER, NODE_RADIUS};

pub struct Tool {
    pub name: &'static str,
    pub color: &'static str,
}

pub const TOOLS: [Tool; 12] = [
    Tool { name: "Slack", color: "#E01E5A" },
    Tool { name: "Jira", color: "#0052CC" },
    Tool { name: "GitHub", color: "#24292E" },
    Tool { name: "Salesforce", color: "#00A1E0" },
    Tool { name: "Notion", color: "#000000" },
    Tool { name: "Gmail", color: "#EA4335" },
    Tool { name: "Calendar", color: "#4285F4" },
    Tool { name: "Drive", color: "#0F9D58" },
    Tool { name: "Teams", color: "#6264A7" },
    Tool { name: "Zoom", color: "#2D8CFF" },
    Tool { name: "Asana", color: "#F06A6A" },
    Tool { name: "Figma", color: "#F24E1E" },
];

/// Evenly spaced points on a circle, starting at angle zero (to the right of
/// the center) and going clockwise in screen coordinates.
pub fn circle_layout(count: usize, radius: f64, center: (f64, f64)) -> Vec<(f64, f64)> {
    (0..count)
        .map(|index| {
            let angle = index as f64 / count as f64 * 2.0 * PI;
            (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
        })
        .collect()
}

pub fn node_label(name: &str) -> String {
    name.chars().take(2).collect()
}

struct Jitter {
    float_secs: f64,
    pulse_secs: f64,
}

#[function_component(NetworkNodes)]
pub fn network_nodes() -> Html {
    // Random per mount so nodes drift out of phase
    let jitter = use_memo(
        |_| {
            TOOLS
                .iter()
                .map(|_| Jitter {
                    float_secs: 3.0 + Math::random() * 2.0,
                    pulse_secs: 2.0 + Math::random(),
                })
                .collect::<Vec<_>>()
        },
        (),
    );
    let points = circle_layout(TOOLS.len(), NODE_RADIUS, NODE_CENTER);
    let (cx, cy) = NODE_CENTER;

    html! {
        <div id="toolNodes" class="tool-nodes">
            <style>
                {r#"
                    .tool-nodes { position: relative; width: 500px; height: 500px; }
                    .tool-nodes svg {
                        position: absolute; top: 0; left: 0;
                        width: 100%; height: 100%;
                        pointer-events: none;
                    }
                    .tool-node {
                        position: absolute;
                        width: 50px; height: 50px;
                        border-radius: 12px;
                        display: flex; align-items: center; justify-content: center;
                        color: white;
                        font-size: 0.75rem; font-weight: 600;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        transform: translate(-50%, -50%);
                    }
                    @keyframes float {
                        0%, 100% { transform: translate(-50%, -50%) translateY(0px); }
                        50% { transform: translate(-50%, -50%) translateY(-10px); }
                    }
                    @keyframes pulse-line {
                        0%, 100% { opacity: 0.2; }
                        50% { opacity: 0.6; }
                    }
                "#}
            </style>
            <svg>
                {
                    points.iter().zip(jitter.iter()).enumerate().map(|(index, (&(x, y), jitter))| html! {
                        <line
                            x1={cx.to_string()} y1={cy.to_string()}
                            x2={x.to_string()} y2={y.to_string()}
                            stroke="rgba(59, 130, 246, 0.2)"
                            stroke-width="2"
                            style={format!(
                                "animation: pulse-line {}s ease-in-out infinite; animation-delay: {:.1}s;",
                                jitter.pulse_secs, index as f64 * 0.1
                            )}
                        />
                    }).collect::<Html>()
                }
            </svg>
            {
                TOOLS.iter().zip(points.iter()).zip(jitter.iter()).enumerate().map(|(index, ((tool, &(x, y)), jitter))| html! {
                    <div
                        class="tool-node"
                        title={tool.name}
                        style={format!(
                            "left: {}px; top: {}px; background-color: {}; animation: float {}s ease-in-out infinite; animation-delay: {:.1}s;",
                            x, y, tool.color, jitter.float_secs, index as f64 * 0.1
                        )}
                    >
                        {node_label(tool.name)}
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn twelve_tools_around_the_hub() {
        let points = circle_layout(TOOLS.len(), NODE_RADIUS, NODE_CENTER);
        assert_eq!(points.len(), 12);
        assert!(close(points[0], (450.0, 250.0)));
        assert!(close(points[3], (250.0, 450.0)));
        assert!(close(points[6], (50.0, 250.0)));
        assert!(close(points[9], (250.0, 50.0)));
    }

    #[test]
    fn every_node_sits_on_the_circle() {
        for (x, y) in circle_layout(7, 120.0, (0.0, 0.0)) {
            assert!(((x * x + y * y).sqrt() - 120.0).abs() < 1e-9);
        }
    }

    #[test]
    fn labels_use_first_two_letters() {
        assert_eq!(node_label("Salesforce"), "Sa");
        assert_eq!(node_label("X"), "X");
    }
}
