//! Staged reveal of the success screen.
//!
//! A pure timer-driven state machine: three fire-once timers raise the stage
//! to 1, 2 and 3. No input, and the stage never goes back down.

use std::time::Duration;

use crate::config::CardConfig;
use crate::timer::TimerQueue;

/// How much of the success screen is disclosed, `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RevealStage(u8);

impl RevealStage {
    pub const HIDDEN: RevealStage = RevealStage(0);
    pub const FINAL: RevealStage = RevealStage(3);

    /// Clamps anything above the final stage.
    pub fn new(stage: u8) -> Self {
        Self(stage.min(Self::FINAL.0))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_final(&self) -> bool {
        *self == Self::FINAL
    }
}

/// Default `(deadline, stage)` table.
pub const REVEAL_SCHEDULE: [(Duration, RevealStage); 3] = [
    (Duration::from_millis(300), RevealStage(1)),
    (Duration::from_millis(1200), RevealStage(2)),
    (Duration::from_millis(2200), RevealStage(3)),
];

/// Content blocks of the success screen, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealBlock {
    /// "you said yes" / "Finally."
    Announcement,
    /// "I've been waiting to hear that" / "for so long"
    Longing,
    /// "You & Me" / "starting now" and the closing heart
    Together,
}

impl RevealBlock {
    pub const ALL: [RevealBlock; 3] = [
        RevealBlock::Announcement,
        RevealBlock::Longing,
        RevealBlock::Together,
    ];

    pub fn unlocked_at(&self) -> RevealStage {
        match self {
            RevealBlock::Announcement => RevealStage(1),
            RevealBlock::Longing => RevealStage(2),
            RevealBlock::Together => RevealStage(3),
        }
    }
}

pub struct RevealSequencer {
    schedule: [(Duration, RevealStage); 3],
    stage: RevealStage,
    timers: TimerQueue<RevealStage>,
}

impl RevealSequencer {
    /// Arm the default schedule.
    pub fn mount() -> Self {
        Self::with_schedule(REVEAL_SCHEDULE)
    }

    /// Arm the schedule described by `config.reveal_ms`.
    pub fn from_config(config: &CardConfig) -> Self {
        let [first, second, third] = config.reveal_deadlines();
        Self::with_schedule([
            (first, RevealStage::new(1)),
            (second, RevealStage::new(2)),
            (third, RevealStage::new(3)),
        ])
    }

    pub fn with_schedule(schedule: [(Duration, RevealStage); 3]) -> Self {
        let mut timers = TimerQueue::new();
        for (deadline, stage) in schedule {
            timers.schedule(deadline, stage);
        }
        Self {
            schedule,
            stage: RevealStage::HIDDEN,
            timers,
        }
    }

    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    pub fn is_unlocked(&self, block: RevealBlock) -> bool {
        self.stage >= block.unlocked_at()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Stage the timeline reaches after `elapsed`, ignoring timer state.
    pub fn stage_at(&self, elapsed: Duration) -> RevealStage {
        self.schedule
            .iter()
            .filter(|(deadline, _)| *deadline <= elapsed)
            .map(|(_, stage)| *stage)
            .max()
            .unwrap_or(RevealStage::HIDDEN)
    }

    /// Fire due timers. Returns the stage afterwards.
    pub fn advance(&mut self, now: Duration) -> RevealStage {
        while let Some(stage) = self.timers.pop_due(now) {
            if stage > self.stage {
                self.stage = stage;
                tracing::debug!(stage = stage.get(), ?now, "reveal stage reached");
                if stage.is_final() {
                    tracing::info!("reveal complete");
                }
            }
        }
        self.stage
    }

    /// Cancel pending stages; the screen is going away.
    pub fn teardown(&mut self) {
        self.timers.clear();
    }
}
