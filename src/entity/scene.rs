//! Scene descriptions.
//!
//! A scene is plain JSON listing the entities of a world. Every entry goes
//! through the same builders as code-built entities, so a scene can never
//! produce an entity a builder would refuse.
//!
//! ```json
//! {
//!   "props": [
//!     { "position": { "x": 1.0, "y": 2.0 }, "graphic": { "model": { "mesh": "well.mesh" } } }
//!   ],
//!   "actors": [
//!     {
//!       "position": { "x": 0.0, "y": 0.0 },
//!       "patrol": { "waypoints": [{ "x": 4.0, "y": 0.0 }], "speed": 1.0 },
//!       "stats": { "health": 10.0, "max_health": 10.0 }
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::builder::{ActorBuilder, PropBuilder};
use super::components::{Graphic, Patrol, Position, Stats};
use super::error::SceneError;
use super::world::World;

/// One prop entry. Fields are optional here so that a missing one is
/// reported by the builder, with the entry's index, rather than by the
/// parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub graphic: Option<Graphic>,
}

/// One actor entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorSpec {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub patrol: Option<Patrol>,
    #[serde(default)]
    pub graphic: Option<Graphic>,
    #[serde(default)]
    pub stats: Option<Stats>,
}

/// A whole scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    #[serde(default)]
    pub props: Vec<PropSpec>,
    #[serde(default)]
    pub actors: Vec<ActorSpec>,
}

impl SceneSpec {
    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        serde_json::from_str(text).map_err(|e| {
            warn!(error = %e, "scene parse failed");
            SceneError::from(e)
        })
    }

    /// Build every entry into a fresh world.
    ///
    /// Stops at the first rejected entry; the error carries every problem
    /// found in that entry.
    pub fn build(self) -> Result<World, SceneError> {
        let mut world = World::new();

        for (index, spec) in self.props.into_iter().enumerate() {
            let mut builder = PropBuilder::new();
            if let Some(position) = spec.position {
                builder = builder.position(position);
            }
            if let Some(graphic) = spec.graphic {
                builder = builder.graphic(graphic);
            }
            let prop = builder
                .build()
                .map_err(|source| SceneError::Prop { index, source })?;
            world.spawn_prop(prop);
        }

        for (index, spec) in self.actors.into_iter().enumerate() {
            let mut builder = ActorBuilder::new();
            if let Some(position) = spec.position {
                builder = builder.position(position);
            }
            if let Some(patrol) = spec.patrol {
                builder = builder.with_patrol(patrol);
            }
            if let Some(graphic) = spec.graphic {
                builder = builder.graphic(graphic);
            }
            if let Some(stats) = spec.stats {
                builder = builder.stats(stats);
            }
            let actor = builder
                .build()
                .map_err(|source| SceneError::Actor { index, source })?;
            world.spawn_actor(actor);
        }

        debug!(
            props = world.props.len(),
            actors = world.actors.len(),
            "scene built"
        );
        Ok(world)
    }
}

/// Parse and build a scene in one go.
pub fn load_scene(text: &str) -> Result<World, SceneError> {
    SceneSpec::from_json(text)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::error::ComponentError;

    const VILLAGE: &str = r#"{
        "props": [
            { "position": { "x": 1.0, "y": 2.0 }, "graphic": { "model": { "mesh": "well.mesh" } } },
            { "position": { "x": 3.0, "y": 0.0 }, "graphic": { "billboard": { "sprite": "tree.png" } } }
        ],
        "actors": [
            {
                "position": { "x": 0.0, "y": 0.0 },
                "patrol": { "waypoints": [{ "x": 4.0, "y": 0.0 }], "speed": 1.0 },
                "stats": { "health": 10.0, "max_health": 10.0 }
            },
            { "position": { "x": 9.0, "y": 9.0 } }
        ]
    }"#;

    #[test]
    fn loads_a_valid_scene() {
        let world = load_scene(VILLAGE).unwrap();

        assert_eq!(world.props.len(), 2);
        assert_eq!(world.actors.len(), 2);
        assert_eq!(world.props[1].graphic, Graphic::billboard("tree.png"));
        assert_eq!(world.actors[0].capabilities(), ["patrol", "stats"]);
        assert!(world.actors[1].capabilities().is_empty());
    }

    #[test]
    fn prop_without_graphic_is_rejected_by_index() {
        let text = r#"{ "props": [
            { "position": { "x": 0.0, "y": 0.0 }, "graphic": { "model": { "mesh": "a" } } },
            { "position": { "x": 1.0, "y": 1.0 } }
        ] }"#;

        let err = load_scene(text).unwrap_err();

        match err {
            SceneError::Prop { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source.problems(), [ComponentError::MissingGraphic]);
            }
            other => panic!("Expected prop error, got {other:?}"),
        }
    }

    #[test]
    fn graphic_with_both_alternatives_fails_to_parse() {
        let text = r#"{ "props": [ {
            "position": { "x": 0.0, "y": 0.0 },
            "graphic": { "model": { "mesh": "a" }, "billboard": { "sprite": "b" } }
        } ] }"#;

        assert!(matches!(load_scene(text), Err(SceneError::Parse(_))));
    }

    #[test]
    fn invalid_actor_names_its_index() {
        let text = r#"{ "actors": [
            { "position": { "x": 0.0, "y": 0.0 }, "patrol": { "waypoints": [], "speed": 1.0 } }
        ] }"#;

        let err = load_scene(text).unwrap_err();

        assert!(matches!(err, SceneError::Actor { index: 0, .. }));
        assert_eq!(
            err.to_string(),
            "Actor 0 rejected: Invalid entity: Patrol has no waypoints"
        );
    }

    #[test]
    fn patrol_index_past_the_last_waypoint_is_rejected() {
        let text = r#"{ "actors": [ {
            "position": { "x": 0.0, "y": 0.0 },
            "patrol": { "waypoints": [{ "x": 4.0, "y": 0.0 }], "next": 7, "speed": 1.0 }
        } ] }"#;

        let err = load_scene(text).unwrap_err();

        match err {
            SceneError::Actor { index, source } => {
                assert_eq!(index, 0);
                assert_eq!(
                    source.problems(),
                    [ComponentError::PatrolIndexOutOfRange { next: 7, len: 1 }]
                );
            }
            other => panic!("Expected actor error, got {other:?}"),
        }
    }

    #[test]
    fn empty_document_is_an_empty_world() {
        let world = load_scene("{}").unwrap();
        assert_eq!(world, World::new());
    }
}
