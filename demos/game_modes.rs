//! Game Modes
//!
//! Overworld, battle and a pause that wraps whichever mode it interrupted.
//! Pausing twice nests one pause inside another; resuming unwinds them one
//! level at a time.
//!
//! Run with: cargo run --example game_modes

use statecraft::modes::{GameMode, ModeEvent};
use statecraft::surface::Transcript;
use statecraft::Current;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("statecraft=info".parse()?))
        .init();

    let mut mode = Current::new(GameMode::default());
    let mut screen = Transcript::new();

    let script = [
        ModeEvent::Update,
        ModeEvent::Update,
        ModeEvent::Encounter("cave bat".to_string()),
        ModeEvent::Update,
        ModeEvent::Pause,
        ModeEvent::Pause,
        ModeEvent::Draw,
        ModeEvent::Update,
        ModeEvent::Resume,
        ModeEvent::Resume,
        ModeEvent::Draw,
        ModeEvent::Victory,
        ModeEvent::Draw,
    ];

    for event in &script {
        mode.fire(event, &mut screen);
        if mode.get().is_paused() {
            println!("(paused, {} deep)", mode.get().depth());
        }
        for line in screen.take() {
            println!("  | {line}");
        }
    }

    println!("ended in {:?}", mode.get());
    Ok(())
}
