//! Entity-component records.
//!
//! An entity is a plain struct: a mandatory position plus independent
//! optional components, and a closed alternative where a capability comes
//! in exactly one of several forms. Systems are free functions over the
//! components they name, and [`World::tick`] drives them, checking for each
//! optional component before handing it over.
//!
//! # Example
//!
//! ```rust
//! use statecraft::entity::{ActorBuilder, Position, PropBuilder, StandardSystems, World};
//! use statecraft::surface::Transcript;
//!
//! let mut world = World::new();
//! world.spawn_prop(PropBuilder::new().at(2.0, 0.0).model("barrel.mesh").build().unwrap());
//! world.spawn_actor(
//!     ActorBuilder::new()
//!         .at(0.0, 0.0)
//!         .patrol(vec![Position::new(0.0, 5.0)], 1.0)
//!         .billboard("guard.png")
//!         .build()
//!         .unwrap(),
//! );
//!
//! let mut out = Transcript::new();
//! let report = world.tick(&mut StandardSystems, &mut out);
//!
//! assert_eq!(report.systems_run, 3);
//! assert_eq!(out.lines()[1], "billboard guard.png at (0.0, 1.0)");
//! ```

mod builder;
mod components;
mod error;
mod scene;
mod shapes;
mod systems;
mod world;

pub use builder::{ActorBuilder, PropBuilder};
pub use components::{Billboard, Graphic, Model, Patrol, Position, Stats};
pub use error::{BuildError, ComponentError, SceneError};
pub use scene::{load_scene, ActorSpec, PropSpec, SceneSpec};
pub use shapes::{Actor, Prop};
pub use systems::{
    render_billboard, render_graphic, render_model, update_character_stats, update_patrol,
    StandardSystems, Systems,
};
pub use world::{TickReport, World};
