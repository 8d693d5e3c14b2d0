//! Builders for entity shapes.
//!
//! `build()` checks every component at once and reports all problems
//! together. A prop without a graphic, or an actor without a position, is
//! never produced.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

use super::components::{Graphic, Patrol, Position, Stats};
use super::error::{BuildError, ComponentError};
use super::shapes::{Actor, Prop};

type Check = Validation<(), NonEmptyVec<ComponentError>>;

fn check_position(position: Option<&Position>) -> Check {
    match position {
        None => Validation::fail(ComponentError::MissingPosition),
        Some(p) if !p.is_finite() => {
            Validation::fail(ComponentError::NonFinitePosition { x: p.x, y: p.y })
        }
        Some(_) => Validation::success(()),
    }
}

fn check_patrol(patrol: &Patrol) -> Vec<Check> {
    let mut checks = Vec::new();
    if patrol.waypoints.is_empty() {
        checks.push(Validation::fail(ComponentError::EmptyPatrol));
    } else if patrol.next >= patrol.waypoints.len() {
        checks.push(Validation::fail(ComponentError::PatrolIndexOutOfRange {
            next: patrol.next,
            len: patrol.waypoints.len(),
        }));
    }
    if patrol.speed.is_nan() || patrol.speed <= 0.0 {
        checks.push(Validation::fail(ComponentError::NonPositiveSpeed {
            speed: patrol.speed,
        }));
    }
    checks
}

fn check_stats(stats: &Stats) -> Check {
    if stats.max_health > 0.0 && (0.0..=stats.max_health).contains(&stats.health) {
        Validation::success(())
    } else {
        Validation::fail(ComponentError::InvalidStats {
            health: stats.health,
            max_health: stats.max_health,
        })
    }
}

/// Collapse accumulated checks into a single result.
fn finish(checks: Vec<Check>) -> Result<(), BuildError> {
    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(BuildError::Invalid(errors.iter().cloned().collect())),
    }
}

/// Builder for [`Prop`].
///
/// # Example
///
/// ```rust
/// use statecraft::entity::{Graphic, PropBuilder};
///
/// let prop = PropBuilder::new().at(1.0, 2.0).billboard("tree.png").build().unwrap();
/// assert_eq!(prop.graphic, Graphic::billboard("tree.png"));
///
/// assert!(PropBuilder::new().at(0.0, 0.0).build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropBuilder {
    position: Option<Position>,
    graphic: Option<Graphic>,
}

impl PropBuilder {
    /// An empty builder; both components still need setting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position (required).
    pub fn at(self, x: f32, y: f32) -> Self {
        self.position(Position::new(x, y))
    }

    /// Set the position from an existing value.
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the graphic (required). A later call replaces an earlier one.
    pub fn graphic(mut self, graphic: Graphic) -> Self {
        self.graphic = Some(graphic);
        self
    }

    /// Draw the prop as a mesh.
    pub fn model(self, mesh: impl Into<String>) -> Self {
        self.graphic(Graphic::model(mesh))
    }

    /// Draw the prop as a sprite.
    pub fn billboard(self, sprite: impl Into<String>) -> Self {
        self.graphic(Graphic::billboard(sprite))
    }

    /// Check every component and produce the prop, or every problem found.
    pub fn build(self) -> Result<Prop, BuildError> {
        let graphic_check: Check = if self.graphic.is_some() {
            Validation::success(())
        } else {
            Validation::fail(ComponentError::MissingGraphic)
        };
        finish(vec![check_position(self.position.as_ref()), graphic_check])?;

        match (self.position, self.graphic) {
            (Some(position), Some(graphic)) => Ok(Prop { position, graphic }),
            _ => Err(BuildError::Invalid(vec![ComponentError::MissingGraphic])),
        }
    }
}

/// Builder for [`Actor`].
///
/// Only the position is required; every other component is optional and
/// checked only when given.
///
/// # Example
///
/// ```rust
/// use statecraft::entity::{ActorBuilder, Position, Stats};
///
/// let actor = ActorBuilder::new()
///     .at(0.0, 0.0)
///     .patrol(vec![Position::new(4.0, 0.0)], 1.0)
///     .stats(Stats::full(20.0))
///     .build()
///     .unwrap();
///
/// assert!(actor.patrol.is_some());
/// assert!(actor.graphic.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActorBuilder {
    position: Option<Position>,
    patrol: Option<Patrol>,
    graphic: Option<Graphic>,
    stats: Option<Stats>,
}

impl ActorBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position (required).
    pub fn at(self, x: f32, y: f32) -> Self {
        self.position(Position::new(x, y))
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Give the actor a patrol starting at its first waypoint.
    pub fn patrol(self, waypoints: Vec<Position>, speed: f32) -> Self {
        self.with_patrol(Patrol::new(waypoints, speed))
    }

    /// Give the actor a fully specified patrol.
    pub fn with_patrol(mut self, patrol: Patrol) -> Self {
        self.patrol = Some(patrol);
        self
    }

    /// Set the graphic. A later call replaces an earlier one.
    pub fn graphic(mut self, graphic: Graphic) -> Self {
        self.graphic = Some(graphic);
        self
    }

    pub fn model(self, mesh: impl Into<String>) -> Self {
        self.graphic(Graphic::model(mesh))
    }

    pub fn billboard(self, sprite: impl Into<String>) -> Self {
        self.graphic(Graphic::billboard(sprite))
    }

    /// Give the actor hit points.
    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Check the position and every optional component that was given.
    pub fn build(self) -> Result<Actor, BuildError> {
        let mut checks = vec![check_position(self.position.as_ref())];
        if let Some(patrol) = &self.patrol {
            checks.extend(check_patrol(patrol));
        }
        if let Some(stats) = &self.stats {
            checks.push(check_stats(stats));
        }
        finish(checks)?;

        let position = self
            .position
            .ok_or(BuildError::Invalid(vec![ComponentError::MissingPosition]))?;
        Ok(Actor {
            position,
            patrol: self.patrol,
            graphic: self.graphic,
            stats: self.stats,
        })
    }
}
