//! Per-screen interaction state of the question screen.
//!
//! Mutation goes through [`QuestionController`](crate::question::QuestionController);
//! this module only keeps the invariants:
//!
//! - `rejection_count` never exceeds [`LAST_MESSAGE_INDEX`]
//! - at most `max_spawned` (≤ 5) spawned options ever exist
//! - spawned options are append-only; dismissal hides, never deletes
//! - every dismissed id belongs to a spawned option

use std::collections::HashSet;

use rand::Rng;
use ulid::Ulid;

use crate::behavior::BehaviorKind;
use crate::geometry::{random_offset, Bounds, Offset};
use crate::messages::{self, Hint, LAST_MESSAGE_INDEX};

/// Growth of the positive option per rejection.
pub const ACCEPT_SCALE_STEP: f64 = 0.12;

/// Stable identity of a spawned option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(pub Ulid);

impl OptionId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for OptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "opt_{}", self.0)
    }
}

/// An extra negative option created by [`BehaviorKind::Multiply`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedOption {
    pub id: OptionId,
    pub offset: Offset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    rejection_count: u32,
    negative_offset: Offset,
    current_behavior: BehaviorKind,
    is_transitioning: bool,
    spawned: Vec<SpawnedOption>,
    dismissed: HashSet<OptionId>,
    show_burst: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejection_count(&self) -> u32 {
        self.rejection_count
    }

    pub fn negative_offset(&self) -> Offset {
        self.negative_offset
    }

    pub fn current_behavior(&self) -> BehaviorKind {
        self.current_behavior
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Every spawned option, dismissed ones included, in creation order.
    pub fn spawned(&self) -> &[SpawnedOption] {
        &self.spawned
    }

    pub fn dismissed(&self) -> &HashSet<OptionId> {
        &self.dismissed
    }

    pub fn is_dismissed(&self, id: &OptionId) -> bool {
        self.dismissed.contains(id)
    }

    /// Spawned options still on screen.
    pub fn visible_spawned(&self) -> impl Iterator<Item = &SpawnedOption> {
        self.spawned
            .iter()
            .filter(|option| !self.dismissed.contains(&option.id))
    }

    pub fn show_burst(&self) -> bool {
        self.show_burst
    }

    pub fn message_index(&self) -> usize {
        messages::message_index(self.rejection_count)
    }

    pub fn message(&self) -> &'static str {
        messages::message_for(self.rejection_count)
    }

    pub fn hint(&self) -> Hint {
        Hint::for_rejections(self.rejection_count)
    }

    pub fn shows_affirmation(&self) -> bool {
        messages::shows_affirmation(self.rejection_count)
    }

    /// Scale of the positive option. Deliberately unclamped.
    pub fn accept_scale(&self) -> f64 {
        1.0 + f64::from(self.rejection_count) * ACCEPT_SCALE_STEP
    }

    /// Animation class for the negative option, only while in flight.
    pub fn animation_class(&self) -> Option<&'static str> {
        if self.is_transitioning {
            self.current_behavior.animation_class()
        } else {
            None
        }
    }

    pub(crate) fn begin_transition(&mut self, behavior: BehaviorKind) {
        self.is_transitioning = true;
        self.current_behavior = behavior;
    }

    pub(crate) fn record_rejection(&mut self) -> u32 {
        let ceiling = LAST_MESSAGE_INDEX as u32;
        self.rejection_count = (self.rejection_count + 1).min(ceiling);
        self.rejection_count
    }

    pub(crate) fn move_negative(&mut self, offset: Offset) {
        self.negative_offset = offset;
    }

    /// Append up to `batch` options without ever exceeding `cap`.
    ///
    /// Returns how many were added.
    pub(crate) fn spawn_options<R: Rng>(
        &mut self,
        rng: &mut R,
        bounds: Option<Bounds>,
        batch: usize,
        cap: usize,
    ) -> usize {
        if self.spawned.len() >= cap {
            return 0;
        }
        let count = batch.min(cap - self.spawned.len());
        for _ in 0..count {
            self.spawned.push(SpawnedOption {
                id: OptionId::new(),
                offset: random_offset(rng, bounds),
            });
        }
        count
    }

    /// Hide a spawned option. Unknown ids are refused.
    pub(crate) fn dismiss(&mut self, id: OptionId) -> bool {
        if !self.spawned.iter().any(|option| option.id == id) {
            return false;
        }
        self.dismissed.insert(id);
        true
    }

    pub(crate) fn set_burst(&mut self, visible: bool) {
        self.show_burst = visible;
    }

    pub(crate) fn settle(&mut self) {
        self.is_transitioning = false;
        self.show_burst = false;
    }
}
