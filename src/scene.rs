//! Renderer-facing snapshot of the game
//!
//! Turns a [`SimulationState`] into the rectangles and text a renderer draws.
//! Nothing here touches pixels; a drawing backend walks the [`Scene`] once
//! per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Hitbox, SimulationState};
use crate::tuning::Tuning;

/// What a shape in the scene represents (backends pick colors from this)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Actor,
    GroundHazard,
    AerialHazard,
}

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub rect: Hitbox,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub screen_size: Vec2,
    /// Ground line from x = 0 to the screen width
    pub ground_y: f32,
    /// Actor first, then the ground hazards, then the aerial hazard
    pub shapes: Vec<Shape>,
    /// Score readout, e.g. `"Score: 12"`
    pub score_text: String,
}

impl Scene {
    pub fn capture(state: &SimulationState, tuning: &Tuning) -> Self {
        let mut shapes = Vec::with_capacity(4);
        shapes.push(Shape {
            kind: ShapeKind::Actor,
            rect: state.actor_hitbox(tuning),
        });
        for rect in state.ground_hazard_hitboxes(tuning) {
            shapes.push(Shape {
                kind: ShapeKind::GroundHazard,
                rect,
            });
        }
        shapes.push(Shape {
            kind: ShapeKind::AerialHazard,
            rect: state.aerial_hazard_hitbox(tuning),
        });

        Self {
            screen_size: Vec2::new(tuning.screen_width, tuning.screen_height),
            ground_y: tuning.ground_y,
            shapes,
            score_text: format!("Score: {}", state.score.trunc() as u64),
        }
    }

    /// Shapes of one kind
    pub fn shapes_of(&self, kind: ShapeKind) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.kind == kind)
    }

    /// Shapes at least partly inside the screen
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        let screen = Hitbox::new(Vec2::ZERO, self.screen_size);
        self.shapes.iter().filter(move |s| s.rect.overlaps(&screen))
    }
}
