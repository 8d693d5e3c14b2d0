//! Coin-operated turnstile.
//!
//! Two states and two events. Every pair is defined, so the machine never
//! fails; pushing a locked turnstile or feeding coins to an unlocked one just
//! leaves it where it is.

use crate::core::React;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

crate::state_enum! {
    /// Whether the turnstile arm is free to turn.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum Turnstile {
        #[default]
        Locked,
        Unlocked,
    }
}

/// Events a turnstile answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnstileEvent {
    Coin,
    Push,
}

impl Turnstile {
    /// A coin is inserted.
    pub fn coin(self, surface: &mut dyn Surface) -> Self {
        match self {
            Self::Locked => {
                surface.write_line("The turnstile unlocks.");
                Self::Unlocked
            }
            Self::Unlocked => {
                surface.write_line("The coin falls into a return tray.");
                self
            }
        }
    }

    /// Someone pushes the arm.
    pub fn push(self, surface: &mut dyn Surface) -> Self {
        match self {
            Self::Locked => {
                surface.write_line("The turnstile refuses to budge.");
                self
            }
            Self::Unlocked => {
                surface.write_line("The turnstile locks behind you.");
                Self::Locked
            }
        }
    }
}

impl React for Turnstile {
    type Event = TurnstileEvent;

    fn react(self, event: &TurnstileEvent, surface: &mut dyn Surface) -> Self {
        match event {
            TurnstileEvent::Coin => self.coin(surface),
            TurnstileEvent::Push => self.push(surface),
        }
    }
}
