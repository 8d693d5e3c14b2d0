//! State transition history tracking.
//!
//! Provides immutable tracking of the values a current state took over time.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single event answered by a state.
///
/// `from == to` when the event caused no transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Gate {
///     Shut,
///     Ajar,
/// }
///
/// impl State for Gate {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shut => "Shut",
///             Self::Ajar => "Ajar",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Gate::Shut,
///     event: "Open".to_string(),
///     to: Gate::Ajar,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state that answered the event
    pub from: S,
    /// Name of the event that was answered
    pub event: String,
    /// The state that was returned
    pub to: S,
    /// When the event was answered
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the returned state differs from the answering one.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of answered events.
///
/// History is immutable - `record` returns a new history with the entry
/// appended and leaves `self` untouched.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Dawn,
///     Noon,
///     Dusk,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Dawn => "Dawn",
///             Self::Noon => "Noon",
///             Self::Dusk => "Dusk",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Dawn,
///         event: "Advance".to_string(),
///         to: Phase::Noon,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Phase::Noon,
///         event: "Advance".to_string(),
///         to: Phase::Dusk,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Dawn, &Phase::Noon, &Phase::Dusk]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first entry, then the `to` state of
    /// every entry. No-op entries repeat the same state.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last entry.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of entries where the state actually changed.
    pub fn changes(&self) -> usize {
        self.transitions.iter().filter(|t| t.changed()).count()
    }

    /// Get all entries in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of entries recorded.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no entries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Walking,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Walking => "Walking",
                Self::Running => "Running",
            }
        }
    }

    fn entry(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition {
            from,
            event: "Step".to_string(),
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(entry(TestState::Idle, TestState::Walking));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(entry(TestState::Idle, TestState::Walking))
            .record(entry(TestState::Walking, TestState::Running));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Idle);
        assert_eq!(path[1], &TestState::Walking);
        assert_eq!(path[2], &TestState::Running);
    }

    #[test]
    fn changes_skips_no_op_entries() {
        let history = StateHistory::new()
            .record(entry(TestState::Idle, TestState::Idle))
            .record(entry(TestState::Idle, TestState::Walking))
            .record(entry(TestState::Walking, TestState::Walking));

        assert_eq!(history.len(), 3);
        assert_eq!(history.changes(), 1);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new().record(StateTransition {
            from: TestState::Idle,
            event: "Step".to_string(),
            to: TestState::Walking,
            timestamp: start,
        });

        let history = history.record(StateTransition {
            from: TestState::Walking,
            event: "Step".to_string(),
            to: TestState::Running,
            timestamp: start + chrono::Duration::milliseconds(10),
        });

        assert_eq!(
            history.duration(),
            Some(std::time::Duration::from_millis(10))
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(entry(TestState::Idle, TestState::Walking));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(deserialized.transitions()[0].event, "Step");
    }
}
