//! Entity shapes.
//!
//! A shape is a plain struct of component fields. New shapes are made by
//! picking a different combination of existing components; systems never
//! need to change for that.

use serde::{Deserialize, Serialize};

use super::components::{Graphic, Patrol, Position, Stats};

/// Static scenery. It always has a graphic, and it is always exactly one
/// alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub position: Position,
    pub graphic: Graphic,
}

/// Something that may walk, may be drawn and may have hit points, in any
/// combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub position: Position,
    #[serde(default)]
    pub patrol: Option<Patrol>,
    #[serde(default)]
    pub graphic: Option<Graphic>,
    #[serde(default)]
    pub stats: Option<Stats>,
}

impl Actor {
    /// Names of the optional components this actor carries.
    pub fn capabilities(&self) -> Vec<&'static str> {
        let mut caps = Vec::new();
        if self.patrol.is_some() {
            caps.push("patrol");
        }
        if self.graphic.is_some() {
            caps.push("graphic");
        }
        if self.stats.is_some() {
            caps.push("stats");
        }
        caps
    }
}
