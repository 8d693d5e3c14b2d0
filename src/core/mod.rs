//! Core types for transition-returning states.
//!
//! This module contains the pure part of the pattern:
//! - State values via the `State` trait
//! - The event capability set via the `React` trait
//! - Immutable history of answered events
//! - `Current`, the holder a hosting loop keeps its state in
//!
//! Transition logic lives only in each state's own `react`; nothing in
//! here decides where a machine goes next.

mod current;
mod history;
mod macros;
mod react;
mod state;

pub use current::Current;
pub use history::{StateHistory, StateTransition};
pub use react::React;
pub use state::State;
