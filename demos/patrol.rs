//! Patrol
//!
//! Loads a small scene and runs a few world ticks. The guard walks its
//! route, the villager only has hit points, and the props are drawn as
//! whichever graphic they were given.
//!
//! Run with: cargo run --example patrol

use statecraft::entity::{load_scene, StandardSystems};
use statecraft::surface::Transcript;
use tracing_subscriber::EnvFilter;

const SCENE: &str = r#"{
    "props": [
        { "position": { "x": 2.0, "y": 2.0 }, "graphic": { "model": { "mesh": "well.mesh" } } },
        { "position": { "x": 6.0, "y": 1.0 }, "graphic": { "billboard": { "sprite": "tree.png" } } }
    ],
    "actors": [
        {
            "position": { "x": 0.0, "y": 0.0 },
            "patrol": {
                "waypoints": [{ "x": 3.0, "y": 0.0 }, { "x": 3.0, "y": 3.0 }, { "x": 0.0, "y": 0.0 }],
                "speed": 1.5
            },
            "graphic": { "model": { "mesh": "guard.mesh" } }
        },
        {
            "position": { "x": 5.0, "y": 5.0 },
            "stats": { "health": 3.0, "max_health": 10.0, "regen": 2.0 }
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("statecraft=debug".parse()?))
        .init();

    let mut world = load_scene(SCENE)?;
    let mut screen = Transcript::new();

    for _ in 0..4 {
        let report = world.tick(&mut StandardSystems, &mut screen);
        println!("tick {} ({} system calls)", report.tick, report.systems_run);
        for line in screen.take() {
            println!("  | {line}");
        }
    }

    if let Some(stats) = world.actors[1].stats {
        println!("villager health: {}/{}", stats.health, stats.max_health);
    }
    Ok(())
}
