use crate::{
    foundation::core::{Millis, Transform2D, Vec2},
    foundation::error::KeepsakeResult,
    scene::particles::Sparkle,
    scene::screen::{HEART_BUTTON_ID, Screen, SectionId},
};

/// Fully evaluated visual state of the screen at one timestamp.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Evaluated timestamp on the mount clock.
    pub time: Millis,
    /// Visible nodes in painter's order.
    pub nodes: Vec<EvaluatedNode>,
}

/// One visible node, resolved for rendering by any shell.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedNode {
    /// Stable node identifier, e.g. `hero/sparkle/3`.
    pub id: String,
    /// Owning section.
    pub section: SectionId,
    /// Paint layer within the section (backgrounds under particles under
    /// content).
    pub z: i32,
    /// Final opacity in `[0, 1]`.
    pub opacity: f64,
    /// Resolved transform.
    pub transform: Transform2D,
    /// What the node is, for shells that draw.
    pub kind: NodeKind,
}

/// Node payload kinds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum NodeKind {
    Background,
    Sparkle { size: f64 },
    Heart { size: f64 },
    Text,
    Photo { index: usize },
    Dot { index: usize, active: bool },
    Control,
}

const Z_BACKGROUND: i32 = 0;
const Z_PARTICLES: i32 = 10;
const Z_CONTENT: i32 = 20;

const DOT_INACTIVE_OPACITY: f64 = 0.4;

/// Stateless evaluator from screen model to frame.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(screen))]
    pub fn eval_frame(screen: &Screen, at: Millis) -> KeepsakeResult<EvaluatedFrame> {
        let mut nodes_with_key: Vec<(NodeKey, EvaluatedNode)> = Vec::new();

        for section in SectionId::ALL {
            nodes_with_key.push(keyed(EvaluatedNode {
                id: format!("{}/bg", section_slug(section)),
                section,
                z: Z_BACKGROUND,
                opacity: 1.0,
                transform: Transform2D::default(),
                kind: NodeKind::Background,
            }));
        }

        for sparkle in screen.hero_sparkles() {
            nodes_with_key.push(keyed(sparkle_node(SectionId::Hero, sparkle, at)?));
        }
        for sparkle in screen.surprise_sparkles() {
            nodes_with_key.push(keyed(sparkle_node(SectionId::Surprise, sparkle, at)?));
        }

        for heart in screen.hero_hearts() {
            let frame = heart.sample(at)?;
            let center = Vec2::new(heart.size / 2.0, heart.size / 2.0);
            nodes_with_key.push(keyed(EvaluatedNode {
                id: format!("hero/heart/{}", heart.id),
                section: SectionId::Hero,
                z: Z_PARTICLES,
                opacity: frame.opacity.clamp(0.0, 1.0),
                transform: Transform2D {
                    translate: Vec2::new(heart.x, frame.rise_y),
                    rotation_rad: frame.sway_deg.to_radians(),
                    scale: Vec2::new(1.0, 1.0),
                    anchor: center,
                },
                kind: NodeKind::Heart { size: heart.size },
            }));
        }

        for element in screen.elements() {
            let frame = element.entrance.sample(at)?;
            let mut transform = Transform2D {
                translate: frame.offset,
                ..Transform2D::default()
            };
            // The pulsing heart breathes underneath its own entrance.
            let is_pulse_target = element.id == HEART_BUTTON_ID;
            if is_pulse_target {
                let s = screen.pulse().scale_at(at)?;
                transform.scale = Vec2::new(s, s);
            }
            nodes_with_key.push(keyed(EvaluatedNode {
                id: element.id.clone(),
                section: element.section,
                z: Z_CONTENT,
                opacity: frame.opacity.clamp(0.0, 1.0),
                transform,
                kind: if is_pulse_target {
                    NodeKind::Control
                } else {
                    NodeKind::Text
                },
            }));
        }

        for index in 0..screen.content().photos.len() {
            nodes_with_key.push(keyed(EvaluatedNode {
                id: format!("gallery/photo/{index}"),
                section: SectionId::Gallery,
                z: Z_CONTENT,
                opacity: 1.0,
                transform: Transform2D::default(),
                kind: NodeKind::Photo { index },
            }));
            let active = index == screen.active_photo();
            nodes_with_key.push(keyed(EvaluatedNode {
                id: format!("gallery/dot/{index}"),
                section: SectionId::Gallery,
                z: Z_CONTENT,
                opacity: if active { 1.0 } else { DOT_INACTIVE_OPACITY },
                transform: Transform2D::default(),
                kind: NodeKind::Dot { index, active },
            }));
        }

        if let Some(frame) = screen.reveal_frame(at)? {
            nodes_with_key.push(keyed(EvaluatedNode {
                id: "surprise/reveal".to_owned(),
                section: SectionId::Surprise,
                z: Z_CONTENT,
                opacity: frame.opacity.clamp(0.0, 1.0),
                transform: Transform2D {
                    translate: frame.offset,
                    ..Transform2D::default()
                },
                kind: NodeKind::Text,
            }));
        }

        nodes_with_key.sort_by(|a, b| a.0.cmp(&b.0));
        let nodes = nodes_with_key.into_iter().map(|(_, n)| n).collect();

        Ok(EvaluatedFrame { time: at, nodes })
    }
}

type NodeKey = (usize, i32, String);

fn keyed(node: EvaluatedNode) -> (NodeKey, EvaluatedNode) {
    ((node.section.index(), node.z, node.id.clone()), node)
}

fn sparkle_node(section: SectionId, sparkle: &Sparkle, at: Millis) -> KeepsakeResult<EvaluatedNode> {
    let frame = sparkle.sample(at)?;
    let center = Vec2::new(sparkle.size / 2.0, sparkle.size / 2.0);
    Ok(EvaluatedNode {
        id: format!("{}/sparkle/{}", section_slug(section), sparkle.id),
        section,
        z: Z_PARTICLES,
        opacity: frame.opacity.clamp(0.0, 1.0),
        transform: Transform2D {
            translate: Vec2::new(sparkle.x, sparkle.y + frame.drift_y),
            rotation_rad: 0.0,
            scale: Vec2::new(frame.scale, frame.scale),
            anchor: center,
        },
        kind: NodeKind::Sparkle { size: sparkle.size },
    })
}

fn section_slug(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "hero",
        SectionId::Gallery => "gallery",
        SectionId::About => "about",
        SectionId::Letter => "letter",
        SectionId::Surprise => "surprise",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
