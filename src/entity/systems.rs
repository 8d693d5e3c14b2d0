//! Systems: one unit of behaviour over the components it names.
//!
//! Every system takes only the components it works on, never a whole
//! entity, so any shape that carries those components can use it.

use tracing::trace;

use super::components::{Billboard, Graphic, Model, Patrol, Position, Stats};
use crate::surface::Surface;

/// Walk `position` towards the patrol's current waypoint, moving on to the
/// next waypoint once it is reached.
pub fn update_patrol(position: &mut Position, patrol: &mut Patrol) {
    let Some(target) = patrol.target().copied() else {
        return;
    };
    if position.step_towards(&target, patrol.speed) {
        patrol.advance();
    }
}

/// Draw a mesh at the entity's position.
pub fn render_model(position: &Position, model: &Model, surface: &mut dyn Surface) {
    surface.write_line(&format!(
        "model {} at ({:.1}, {:.1})",
        model.mesh, position.x, position.y
    ));
}

/// Draw a sprite at the entity's position.
pub fn render_billboard(position: &Position, billboard: &Billboard, surface: &mut dyn Surface) {
    surface.write_line(&format!(
        "billboard {} at ({:.1}, {:.1})",
        billboard.sprite, position.x, position.y
    ));
}

/// Regenerate health, capped at the maximum. The dead stay dead.
pub fn update_character_stats(stats: &mut Stats) {
    if !stats.is_alive() {
        return;
    }
    stats.health = (stats.health + stats.regen).min(stats.max_health);
}

/// The set of systems a world tick dispatches to.
///
/// Every method defaults to the matching free function above.
/// [`StandardSystems`] uses the defaults as they are; tests and hosts
/// override individual methods to observe or replace a system.
pub trait Systems {
    fn update_patrol(&mut self, position: &mut Position, patrol: &mut Patrol) {
        trace!(next = patrol.next, "update_patrol");
        update_patrol(position, patrol);
    }

    fn render_model(&mut self, position: &Position, model: &Model, surface: &mut dyn Surface) {
        trace!(mesh = %model.mesh, "render_model");
        render_model(position, model, surface);
    }

    fn render_billboard(
        &mut self,
        position: &Position,
        billboard: &Billboard,
        surface: &mut dyn Surface,
    ) {
        trace!(sprite = %billboard.sprite, "render_billboard");
        render_billboard(position, billboard, surface);
    }

    fn update_character_stats(&mut self, stats: &mut Stats) {
        trace!(health = stats.health, "update_character_stats");
        update_character_stats(stats);
    }
}

/// The stock systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSystems;

impl Systems for StandardSystems {}

/// Send a graphic to the one render system for its alternative.
pub fn render_graphic<S: Systems + ?Sized>(
    position: &Position,
    graphic: &Graphic,
    systems: &mut S,
    surface: &mut dyn Surface,
) {
    match graphic {
        Graphic::Model(model) => systems.render_model(position, model, surface),
        Graphic::Billboard(billboard) => systems.render_billboard(position, billboard, surface),
    }
}
