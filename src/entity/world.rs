//! Entity collections and the loop that drives systems over them.

use tracing::debug;

use super::shapes::{Actor, Prop};
use super::systems::{render_graphic, Systems};
use crate::surface::Surface;

/// Summary of one pass over every collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1 for the first pass.
    pub tick: u64,
    pub props: usize,
    pub actors: usize,
    /// Total number of system calls made during the pass.
    pub systems_run: usize,
}

/// Owns every entity, grouped by shape.
///
/// Entities are destroyed by removing them from their collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub props: Vec<Prop>,
    pub actors: Vec<Actor>,
    ticks: u64,
}

impl World {
    /// An empty world that has not ticked yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop, returning its index.
    pub fn spawn_prop(&mut self, prop: Prop) -> usize {
        self.props.push(prop);
        self.props.len() - 1
    }

    /// Add an actor, returning its index.
    pub fn spawn_actor(&mut self, actor: Actor) -> usize {
        self.actors.push(actor);
        self.actors.len() - 1
    }

    /// Remove a prop. Later props shift down one index.
    pub fn despawn_prop(&mut self, index: usize) -> Option<Prop> {
        (index < self.props.len()).then(|| self.props.remove(index))
    }

    /// Remove an actor. Later actors shift down one index.
    pub fn despawn_actor(&mut self, index: usize) -> Option<Actor> {
        (index < self.actors.len()).then(|| self.actors.remove(index))
    }

    /// Number of passes run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run every relevant system once for every entity.
    ///
    /// Mandatory components are always handed to their system. Optional ones
    /// are checked first and skipped when absent. Within an actor the patrol
    /// runs before rendering, so the drawn position is the updated one.
    pub fn tick<S: Systems + ?Sized>(
        &mut self,
        systems: &mut S,
        surface: &mut dyn Surface,
    ) -> TickReport {
        self.ticks += 1;
        let mut systems_run = 0;

        for prop in &self.props {
            render_graphic(&prop.position, &prop.graphic, systems, surface);
            systems_run += 1;
        }

        for actor in &mut self.actors {
            if let Some(patrol) = actor.patrol.as_mut() {
                systems.update_patrol(&mut actor.position, patrol);
                systems_run += 1;
            }
            if let Some(stats) = actor.stats.as_mut() {
                systems.update_character_stats(stats);
                systems_run += 1;
            }
            if let Some(graphic) = &actor.graphic {
                render_graphic(&actor.position, graphic, systems, surface);
                systems_run += 1;
            }
        }

        let report = TickReport {
            tick: self.ticks,
            props: self.props.len(),
            actors: self.actors.len(),
            systems_run,
        };
        debug!(
            tick = report.tick,
            props = report.props,
            actors = report.actors,
            systems_run = report.systems_run,
            "world tick"
        );
        report
    }
}
