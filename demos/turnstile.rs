//! Turnstile
//!
//! The smallest transition-returning state: two variants, two events,
//! every pair defined.
//!
//! Run with: cargo run --example turnstile

use statecraft::surface::TraceSurface;
use statecraft::turnstile::{Turnstile, TurnstileEvent};
use statecraft::{Current, State};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("statecraft=debug".parse()?))
        .init();

    let mut gate = Current::new(Turnstile::default());
    let mut surface = TraceSurface;

    gate.fire_all(
        &[
            TurnstileEvent::Push,
            TurnstileEvent::Coin,
            TurnstileEvent::Coin,
            TurnstileEvent::Push,
        ],
        &mut surface,
    );

    println!("final state: {}", gate.get().name());
    println!(
        "{} events, {} state changes",
        gate.history().len(),
        gate.history().changes()
    );
    Ok(())
}
