//! Typing effect for the hero headline.
//!
//! The typewriter is driven by ticks. Each tick returns how long to wait
//! before the next one, so the view only needs a timer.

use serde::{Deserialize, Serialize};

/// Delay between typed characters.
pub const TYPE_DELAY_MS: u32 = 50;
/// Delay between deleted characters.
pub const DELETE_DELAY_MS: u32 = 30;
/// Pause on a fully typed string.
pub const HOLD_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Cycles through strings, typing and deleting one character per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typewriter {
    strings: Vec<String>,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    /// Index of the string being typed or deleted.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The visible prefix of the current string.
    pub fn text(&self) -> &str {
        let Some(current) = self.strings.get(self.index) else {
            return "";
        };
        match current.char_indices().nth(self.visible) {
            Some((end, _)) => &current[..end],
            None => current,
        }
    }

    /// Delay before the next tick.
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => TYPE_DELAY_MS,
            Phase::Holding => HOLD_MS,
            Phase::Deleting => DELETE_DELAY_MS,
        }
    }

    /// Advance one step and return the delay before the next tick.
    pub fn tick(&mut self) -> u32 {
        let Some(current) = self.strings.get(self.index) else {
            return self.delay_ms();
        };
        let len = current.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                if self.visible > 0 {
                    self.visible -= 1;
                } else {
                    self.index = (self.index + 1) % self.strings.len();
                    self.phase = Phase::Typing;
                }
            }
        }

        self.delay_ms()
    }
}
