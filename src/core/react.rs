//! The event capability set shared by every transition-returning state.

use super::state::State;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A state that answers every event by returning its successor.
///
/// `react` consumes the current value and hands back the next one. Handing
/// back the input unchanged means "no transition". There is no error path:
/// every variant must answer every event, and an exhaustive `match` over the
/// closed enum is what guarantees it.
///
/// The only side effects a reaction may have are writes to `surface`.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{React, State};
/// use statecraft::surface::{Surface, Transcript};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     On,
///     Off,
/// }
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// enum Switch {
///     Flip,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
/// }
///
/// impl React for Lamp {
///     type Event = Switch;
///
///     fn react(self, event: &Switch, surface: &mut dyn Surface) -> Self {
///         match (self, event) {
///             (Self::On, Switch::Flip) => {
///                 surface.write_line("click, dark");
///                 Self::Off
///             }
///             (Self::Off, Switch::Flip) => {
///                 surface.write_line("click, light");
///                 Self::On
///             }
///         }
///     }
/// }
///
/// let mut out = Transcript::new();
/// let lamp = Lamp::Off.react(&Switch::Flip, &mut out);
/// assert_eq!(lamp, Lamp::On);
/// assert_eq!(out.last(), Some("click, light"));
/// ```
pub trait React: State {
    /// The closed set of events this machine answers.
    type Event: Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync;

    /// Answer `event`, returning the state that replaces `self`.
    fn react(self, event: &Self::Event, surface: &mut dyn Surface) -> Self;

    /// Short name of `event` for the transition log.
    ///
    /// The default is the event's `Debug` rendering.
    fn event_name(event: &Self::Event) -> String {
        format!("{event:?}")
    }
}
