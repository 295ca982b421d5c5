//! Top-level mode switch between the two screens.

/// Which screen the card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Question,
    Success,
}

/// The "has the user accepted?" flag. Only ever goes false → true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFlow {
    accepted: bool,
}

impl CardFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip to accepted. Returns `true` only for the call that flipped it.
    pub fn accept(&mut self) -> bool {
        let flipped = !self.accepted;
        self.accepted = true;
        flipped
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn screen(&self) -> Screen {
        if self.accepted {
            Screen::Success
        } else {
            Screen::Question
        }
    }
}
