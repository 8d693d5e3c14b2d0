//! Top-level game modes with suspend and resume.
//!
//! The overworld and battle modes are ordinary states. `Pause` is built by
//! wrapping whatever mode was current, and resuming hands that exact value
//! back. Because the wrapper owns the wrapped mode through a `Box`, a pause
//! can itself be paused, to any depth, and the chain can never loop back on
//! itself.
//!
//! Drawing a pause is a call-through: the suspended mode draws first, then
//! the pause menu is drawn over it. The suspended mode never finds out it is
//! being wrapped.
//!
//! Dropping, comparing and drawing walk a pause chain in a loop, so chains
//! of any length are safe. `Clone`, `Debug` and serde are derived and
//! recurse once per level; serde_json also refuses input nested deeper than
//! 128 levels.

use std::mem;

use crate::core::{React, State};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// The mode the game is currently in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameMode {
    /// Free roaming. `steps` counts updates since the mode was entered.
    Overworld { steps: u32 },
    /// A fight against `foe`. `round` counts updates since it started.
    Battle { foe: String, round: u32 },
    /// Everything frozen; `suspended` is the mode to go back to.
    Pause { suspended: Box<GameMode> },
}

/// Events a game mode answers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeEvent {
    /// One simulation step.
    Update,
    /// Render the current frame.
    Draw,
    /// A foe shows up.
    Encounter(String),
    /// The current foe is defeated.
    Victory,
    /// The pause button is pressed.
    Pause,
    /// The resume option is picked.
    Resume,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::overworld()
    }
}

impl Drop for GameMode {
    fn drop(&mut self) {
        let Self::Pause { suspended } = self else {
            return;
        };
        // Detach each level before it is dropped so every drop is shallow.
        let mut rest = mem::take(suspended.as_mut());
        while let Self::Pause { suspended } = &mut rest {
            let inner = mem::take(suspended.as_mut());
            rest = inner;
        }
    }
}

impl PartialEq for GameMode {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            match (left, right) {
                (Self::Pause { suspended: a }, Self::Pause { suspended: b }) => {
                    left = a;
                    right = b;
                }
                (Self::Overworld { steps: a }, Self::Overworld { steps: b }) => return a == b,
                (
                    Self::Battle { foe: a, round: x },
                    Self::Battle { foe: b, round: y },
                ) => return a == b && x == y,
                _ => return false,
            }
        }
    }
}

impl Eq for GameMode {}

impl GameMode {
    /// A fresh overworld with no steps taken.
    pub fn overworld() -> Self {
        Self::Overworld { steps: 0 }
    }

    /// A battle against `foe`, at round zero.
    pub fn battle(foe: impl Into<String>) -> Self {
        Self::Battle {
            foe: foe.into(),
            round: 0,
        }
    }

    /// Wrap `suspended` in a pause.
    pub fn paused(suspended: GameMode) -> Self {
        Self::Pause {
            suspended: Box::new(suspended),
        }
    }

    /// How many pause wrappers sit on top of the innermost mode.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut mode = self;
        while let Self::Pause { suspended } = mode {
            depth += 1;
            mode = suspended;
        }
        depth
    }

    /// The mode at the bottom of any pause chain.
    pub fn innermost(&self) -> &GameMode {
        let mut mode = self;
        while let Self::Pause { suspended } = mode {
            mode = suspended;
        }
        mode
    }

    /// Whether this mode is a pause wrapper.
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Pause { .. })
    }

    /// Advance the active mode by one step. A pause freezes everything
    /// beneath it.
    pub fn update(mut self) -> Self {
        match &mut self {
            Self::Overworld { steps } => *steps = steps.saturating_add(1),
            Self::Battle { round, .. } => *round = round.saturating_add(1),
            Self::Pause { .. } => {}
        }
        self
    }

    /// Render the frame, bottom layer first.
    pub fn draw(self, surface: &mut dyn Surface) -> Self {
        self.render(surface);
        self
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self.innermost() {
            Self::Overworld { steps } => {
                surface.write_line(&format!("overworld: walked {steps} steps"));
            }
            Self::Battle { foe, round } => {
                surface.write_line(&format!("battle: {foe}, round {round}"));
            }
            // never the innermost
            Self::Pause { .. } => {}
        }
        for _ in 0..self.depth() {
            surface.write_line("pause menu");
        }
    }

    /// Start a battle against `foe`. Only the overworld can be interrupted.
    pub fn encounter(self, foe: impl Into<String>) -> Self {
        match self {
            Self::Overworld { .. } => Self::battle(foe),
            Self::Battle { .. } | Self::Pause { .. } => self,
        }
    }

    /// End the current battle and return to a fresh overworld.
    pub fn victory(self) -> Self {
        match self {
            Self::Battle { .. } => Self::overworld(),
            Self::Overworld { .. } | Self::Pause { .. } => self,
        }
    }

    /// Suspend the current mode, whatever it is.
    pub fn pause(self) -> Self {
        Self::paused(self)
    }

    /// Leave one level of pause, handing back exactly the suspended mode.
    pub fn resume(mut self) -> Self {
        if let Self::Pause { suspended } = &mut self {
            return mem::take(suspended.as_mut());
        }
        self
    }
}

impl State for GameMode {
    fn name(&self) -> &str {
        match self {
            Self::Overworld { .. } => "Overworld",
            Self::Battle { .. } => "Battle",
            Self::Pause { .. } => "Pause",
        }
    }
}

impl React for GameMode {
    type Event = ModeEvent;

    fn react(self, event: &ModeEvent, surface: &mut dyn Surface) -> Self {
        match event {
            ModeEvent::Update => self.update(),
            ModeEvent::Draw => self.draw(surface),
            ModeEvent::Encounter(foe) => self.encounter(foe.clone()),
            ModeEvent::Victory => self.victory(),
            ModeEvent::Pause => self.pause(),
            ModeEvent::Resume => self.resume(),
        }
    }

    fn event_name(event: &ModeEvent) -> String {
        match event {
            ModeEvent::Encounter(_) => "Encounter".to_string(),
            other => format!("{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Current;
    use crate::surface::Transcript;

    #[test]
    fn pause_resume_round_trip_returns_same_value() {
        let before = GameMode::Battle {
            foe: "slime".to_string(),
            round: 4,
        };

        let after = before.clone().pause().resume();

        assert_eq!(after, before);
    }

    #[test]
    fn nested_pause_unwinds_one_level_at_a_time() {
        let base = GameMode::Overworld { steps: 7 };
        let once = base.clone().pause();
        let twice = once.clone().pause();

        assert_eq!(twice.depth(), 2);
        assert_eq!(twice.innermost(), &base);

        let unwound = twice.resume();
        assert_eq!(unwound, once);
        assert_eq!(unwound.depth(), 1);
        assert_eq!(unwound.resume(), base);
    }

    #[test]
    fn triple_pause_preserves_the_innermost_mode() {
        let base = GameMode::battle("dragon");
        let deep = base.clone().pause().pause().pause();

        assert_eq!(deep.depth(), 3);
        assert_eq!(deep.resume().resume().resume(), base);
    }

    #[test]
    fn very_deep_pause_chains_unwind_without_recursion() {
        const LEVELS: usize = 100_000;
        let build = || {
            let mut mode = GameMode::battle("lich");
            for _ in 0..LEVELS {
                mode = mode.pause();
            }
            mode
        };
        let deep = build();

        assert_eq!(deep.depth(), LEVELS);
        assert_eq!(deep.innermost(), &GameMode::battle("lich"));
        assert!(deep == build());
        assert!(deep != GameMode::battle("lich").pause());

        let mut out = Transcript::new();
        let deep = deep.draw(&mut out);
        assert_eq!(out.len(), LEVELS + 1);
        assert_eq!(out.lines()[0], "battle: lich, round 0");

        let shallower = deep.resume();
        assert_eq!(shallower.depth(), LEVELS - 1);
        assert!(shallower.is_paused());
        drop(shallower);
    }

    #[test]
    fn only_pause_wrappers_report_paused() {
        assert!(!GameMode::overworld().is_paused());
        assert!(!GameMode::battle("crab").is_paused());
        assert!(GameMode::overworld().pause().is_paused());
        assert!(!GameMode::overworld().pause().resume().is_paused());
    }

    #[test]
    fn update_is_frozen_while_paused() {
        let paused = GameMode::Overworld { steps: 2 }.pause();

        let updated = paused.clone().update().update();

        assert_eq!(updated, paused);
        assert_eq!(updated.resume(), GameMode::Overworld { steps: 2 });
    }

    #[test]
    fn update_advances_active_modes() {
        assert_eq!(
            GameMode::overworld().update().update(),
            GameMode::Overworld { steps: 2 }
        );
        assert_eq!(
            GameMode::battle("bat").update(),
            GameMode::Battle {
                foe: "bat".to_string(),
                round: 1
            }
        );
    }

    #[test]
    fn pause_draws_through_to_suspended_mode() {
        let mut out = Transcript::new();

        GameMode::battle("goblin").pause().draw(&mut out);

        assert_eq!(out.lines(), ["battle: goblin, round 0", "pause menu"]);
    }

    #[test]
    fn nested_pause_draws_every_layer_bottom_up() {
        let mut out = Transcript::new();

        GameMode::overworld().pause().pause().draw(&mut out);

        assert_eq!(
            out.lines(),
            ["overworld: walked 0 steps", "pause menu", "pause menu"]
        );
    }

    #[test]
    fn encounter_and_victory_cycle_through_battle() {
        let mode = GameMode::overworld().update().encounter("wolf");
        assert_eq!(mode, GameMode::battle("wolf"));

        // a second foe does not interrupt a fight in progress
        let mode = mode.encounter("bear");
        assert_eq!(mode, GameMode::battle("wolf"));

        assert_eq!(mode.victory(), GameMode::overworld());
    }

    #[test]
    fn events_ignored_by_a_mode_return_it_unchanged() {
        let paused = GameMode::battle("imp").pause();
        assert_eq!(paused.clone().encounter("orc"), paused);
        assert_eq!(paused.clone().victory(), paused);
        assert_eq!(GameMode::overworld().victory(), GameMode::overworld());
        assert_eq!(GameMode::overworld().resume(), GameMode::overworld());
    }

    #[test]
    fn hosted_session_logs_named_events() {
        let mut mode = Current::new(GameMode::default());
        let mut out = Transcript::new();

        mode.fire_all(
            &[
                ModeEvent::Update,
                ModeEvent::Encounter("rat".to_string()),
                ModeEvent::Pause,
                ModeEvent::Draw,
                ModeEvent::Resume,
                ModeEvent::Victory,
            ],
            &mut out,
        );

        assert_eq!(mode.get(), &GameMode::overworld());
        let events: Vec<&str> = mode
            .history()
            .transitions()
            .iter()
            .map(|t| t.event.as_str())
            .collect();
        assert_eq!(
            events,
            ["Update", "Encounter", "Pause", "Draw", "Resume", "Victory"]
        );
        assert_eq!(out.len(), 2);
    }
}
