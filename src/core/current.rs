//! Holder for the one current state of a hosting loop.

use super::history::{StateHistory, StateTransition};
use super::react::React;
use crate::surface::Surface;
use chrono::Utc;
use tracing::{debug, info};

/// The current state value plus a log of the events it answered.
///
/// `Current` carries no transition logic. Each call to [`Current::fire`]
/// hands the held value to its own `react` and overwrites it with the result,
/// which is all a hosting loop has to do between events.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Current;
/// use statecraft::surface::Transcript;
/// use statecraft::turnstile::{Turnstile, TurnstileEvent};
///
/// let mut gate = Current::new(Turnstile::Locked);
/// let mut out = Transcript::new();
///
/// gate.fire(&TurnstileEvent::Coin, &mut out);
/// assert_eq!(gate.get(), &Turnstile::Unlocked);
/// assert_eq!(gate.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Current<S: React> {
    state: S,
    history: StateHistory<S>,
}

impl<S: React> Current<S> {
    /// Start holding `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            history: StateHistory::new(),
        }
    }

    /// Get the current state (pure)
    pub fn get(&self) -> &S {
        &self.state
    }

    /// Give up the held value.
    pub fn into_inner(self) -> S {
        self.state
    }

    /// Get the event log (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Feed one event to the current state and keep whatever it returns.
    pub fn fire(&mut self, event: &S::Event, surface: &mut dyn Surface) -> &S {
        let from = self.state.clone();
        let next = from.clone().react(event, surface);
        let event_name = S::event_name(event);

        if next == from {
            debug!(state = from.name(), event = %event_name, "no transition");
        } else {
            info!(
                from = from.name(),
                to = next.name(),
                event = %event_name,
                "state changed"
            );
        }

        self.history = self.history.record(StateTransition {
            from,
            event: event_name,
            to: next.clone(),
            timestamp: Utc::now(),
        });
        self.state = next;
        &self.state
    }

    /// Feed a sequence of events in order.
    pub fn fire_all<'a, I>(&mut self, events: I, surface: &mut dyn Surface) -> &S
    where
        I: IntoIterator<Item = &'a S::Event>,
        S::Event: 'a,
    {
        for event in events {
            self.fire(event, surface);
        }
        &self.state
    }
}
