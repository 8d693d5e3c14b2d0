//! Core State trait for transition-returning states.
//!
//! Every state value in this crate implements this trait, which provides
//! pure methods for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state values.
///
/// A state is a plain value: the caller holds the one "current" value and
/// replaces it with whatever the last event returned. All methods here are
/// pure.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into the transition log
/// - `PartialEq`: states are compared to tell a transition from a no-op
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states can be logged and inspected as data
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert!(!Door::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// The machines in this crate are cyclic, so the default
    /// implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
