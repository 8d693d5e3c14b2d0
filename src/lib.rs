//! Statecraft: transition-returning states and optional-component entities
//!
//! Two small game-programming patterns, kept independent of each other.
//!
//! # Core Concepts
//!
//! - **States**: a closed enum whose event methods each return the next
//!   state. The caller keeps the one current value and overwrites it after
//!   every event; there is no manager and no transition table.
//! - **Suspension**: a pause mode owns the mode it interrupted and hands it
//!   back unchanged on resume. Pauses nest.
//! - **Entities**: plain structs of components, some optional, one a closed
//!   alternative. Systems take only the components they use, and a world
//!   tick dispatches them by checking which components are present.
//!
//! # Example
//!
//! ```rust
//! use statecraft::modes::GameMode;
//! use statecraft::surface::Transcript;
//! use statecraft::turnstile::Turnstile;
//!
//! let mut out = Transcript::new();
//!
//! let gate = Turnstile::Locked.coin(&mut out).push(&mut out);
//! assert_eq!(gate, Turnstile::Locked);
//!
//! let mode = GameMode::overworld().encounter("slime").pause();
//! let mode = mode.draw(&mut out).resume();
//! assert_eq!(mode, GameMode::battle("slime"));
//! ```

pub mod core;
pub mod entity;
pub mod modes;
pub mod surface;
pub mod turnstile;

// Re-export commonly used types
pub use self::core::{Current, React, State, StateHistory, StateTransition};
pub use surface::{Surface, Transcript};
