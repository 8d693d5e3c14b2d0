//! Component definitions.
//!
//! Each component is one capability. Entity shapes hold them as plain
//! fields, mandatory or optional; systems take them one by one.

use serde::{Deserialize, Serialize};

/// A 2D world position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// A position at `(x, y)`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move towards `target` by at most `max_step`, never past it.
    ///
    /// A step that is not positive moves nothing. Returns `true` if the
    /// target was reached.
    pub fn step_towards(&mut self, target: &Position, max_step: f32) -> bool {
        if max_step.is_nan() || max_step <= 0.0 {
            return *self == *target;
        }
        let distance = self.distance_to(target);
        if distance <= max_step {
            *self = *target;
            return true;
        }
        let ratio = max_step / distance;
        self.x += (target.x - self.x) * ratio;
        self.y += (target.y - self.y) * ratio;
        false
    }

    /// Whether neither coordinate is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A looping walk through a list of waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    pub waypoints: Vec<Position>,
    /// Index of the waypoint currently being walked to.
    #[serde(default)]
    pub next: usize,
    /// Distance covered per update.
    pub speed: f32,
}

impl Patrol {
    /// A patrol heading for the first waypoint.
    #[must_use]
    pub fn new(waypoints: Vec<Position>, speed: f32) -> Self {
        Self {
            waypoints,
            next: 0,
            speed,
        }
    }

    /// The waypoint currently being walked to.
    #[must_use]
    pub fn target(&self) -> Option<&Position> {
        self.waypoints.get(self.next)
    }

    /// Move on to the following waypoint, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.next = (self.next + 1) % self.waypoints.len();
        }
    }
}

/// A 3D mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub mesh: String,
}

/// A camera-facing sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billboard {
    pub sprite: String,
}

/// How an entity is drawn: exactly one of the alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Graphic {
    Model(Model),
    Billboard(Billboard),
}

impl Graphic {
    /// A mesh graphic.
    pub fn model(mesh: impl Into<String>) -> Self {
        Self::Model(Model { mesh: mesh.into() })
    }

    /// A sprite graphic.
    pub fn billboard(sprite: impl Into<String>) -> Self {
        Self::Billboard(Billboard {
            sprite: sprite.into(),
        })
    }
}

/// Hit points with passive regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health: f32,
    pub max_health: f32,
    /// Health regained per update while alive.
    #[serde(default)]
    pub regen: f32,
}

impl Stats {
    /// Full health, no regeneration.
    #[must_use]
    pub fn full(max_health: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            regen: 0.0,
        }
    }

    /// Set the health regained per update.
    #[must_use]
    pub fn with_regen(mut self, regen: f32) -> Self {
        self.regen = regen;
        self
    }

    /// Alive while health is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Apply damage, clamping to zero.
    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_towards_moves_by_at_most_max_step() {
        let mut pos = Position::ORIGIN;
        let reached = pos.step_towards(&Position::new(10.0, 0.0), 4.0);

        assert!(!reached);
        assert_eq!(pos, Position::new(4.0, 0.0));
    }

    #[test]
    fn step_towards_snaps_onto_close_targets() {
        let mut pos = Position::new(1.0, 1.0);
        let target = Position::new(1.0, 2.0);

        assert!(pos.step_towards(&target, 5.0));
        assert_eq!(pos, target);
    }

    #[test]
    fn non_positive_steps_never_move() {
        let target = Position::new(4.0, 0.0);
        for step in [-1.0, 0.0, f32::NAN] {
            let mut pos = Position::ORIGIN;

            assert!(!pos.step_towards(&target, step));
            assert_eq!(pos, Position::ORIGIN);
        }

        let mut pos = target;
        assert!(pos.step_towards(&target, 0.0));
    }

    #[test]
    fn patrol_advance_wraps() {
        let mut patrol = Patrol::new(vec![Position::ORIGIN, Position::new(1.0, 0.0)], 1.0);
        patrol.advance();
        assert_eq!(patrol.next, 1);
        patrol.advance();
        assert_eq!(patrol.next, 0);
    }

    #[test]
    fn empty_patrol_has_no_target() {
        let mut patrol = Patrol::new(Vec::new(), 1.0);
        patrol.advance();
        assert_eq!(patrol.target(), None);
    }

    #[test]
    fn stats_damage_clamps_at_zero() {
        let mut stats = Stats::full(10.0);
        stats.damage(25.0);
        assert_eq!(stats.health, 0.0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn graphic_serializes_as_tagged_alternative() {
        let json = serde_json::to_string(&Graphic::billboard("tree.png")).unwrap();
        assert_eq!(json, r#"{"billboard":{"sprite":"tree.png"}}"#);

        let back: Graphic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Graphic::billboard("tree.png"));
    }
}
