//! Question screen controller.
//!
//! Owns the [`InteractionState`], the intro/question [`Phase`] and every timer
//! the screen schedules. Callers pass the elapsed time since the screen
//! mounted into each operation and call [`QuestionController::advance`] once
//! [`QuestionController::next_deadline`] has passed.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use rand::{rngs::StdRng, SeedableRng};
//! use sweetheart_core::{Bounds, CardConfig, Phase, QuestionController};
//!
//! let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(1));
//! assert_eq!(question.phase(), Phase::Intro);
//!
//! let bounds = Some(Bounds::new(700.0, 900.0));
//! question.advance(Duration::from_millis(2500), bounds);
//! assert_eq!(question.phase(), Phase::Question);
//!
//! question.trigger_negative(Duration::from_millis(3000), bounds);
//! assert_eq!(question.state().message(), "Are you sure?");
//! ```

use std::time::Duration;

use rand::Rng;

use crate::behavior::{BehaviorKind, Reposition};
use crate::config::CardConfig;
use crate::geometry::{random_offset, Bounds};
use crate::interaction::{InteractionState, OptionId};
use crate::timer::{TimerId, TimerQueue};

/// What the question screen is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The "Hey you..." greeting
    Intro,
    /// The question with both options
    Question,
}

/// Timers owned by the question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionTimer {
    EndIntro,
    /// Clears the re-entrancy guard and the burst
    Settle,
    FloatReposition,
    /// Hides the burst shown for a dismissed spawned option
    HideBurst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The negative option isn't on screen yet
    Intro,
    /// A previous trigger is still in flight
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Applied {
        behavior: BehaviorKind,
        rejection_count: u32,
        /// Options spawned by this trigger (only ever non-zero for multiply)
        spawned: usize,
    },
    Ignored(IgnoreReason),
}

impl TriggerOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TriggerOutcome::Applied { .. })
    }
}

/// Emitted when the positive option is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptance {
    pub rejection_count: u32,
}

pub struct QuestionController<R> {
    config: CardConfig,
    rng: R,
    phase: Phase,
    state: InteractionState,
    timers: TimerQueue<QuestionTimer>,
    /// Reposition still owed to the last float
    pending_float: Option<TimerId>,
}

impl<R: Rng> QuestionController<R> {
    /// Fresh controller for a newly mounted question screen.
    ///
    /// Starts in [`Phase::Intro`] with the intro timer armed.
    pub fn mount(config: CardConfig, rng: R) -> Self {
        let mut timers = TimerQueue::new();
        timers.schedule(config.intro(), QuestionTimer::EndIntro);

        Self {
            config,
            rng,
            phase: Phase::Intro,
            state: InteractionState::new(),
            timers,
            pending_float: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Pointer-enter or activation of the negative option.
    ///
    /// Triggers arriving while a previous one is in flight are dropped.
    pub fn trigger_negative(&mut self, now: Duration, bounds: Option<Bounds>) -> TriggerOutcome {
        if self.phase == Phase::Intro {
            return TriggerOutcome::Ignored(IgnoreReason::Intro);
        }
        if self.state.is_transitioning() {
            tracing::trace!(?now, "negative trigger dropped while in flight");
            return TriggerOutcome::Ignored(IgnoreReason::Transitioning);
        }

        let behavior = BehaviorKind::pick(&mut self.rng);
        self.state.begin_transition(behavior);

        // Only a trigger that moves the option supersedes a pending float.
        if behavior.reposition() != Reposition::Stay {
            if let Some(id) = self.pending_float.take() {
                self.timers.cancel(id);
            }
        }

        let mut spawned = 0;
        match behavior.reposition() {
            Reposition::Immediate => {
                if behavior == BehaviorKind::Multiply {
                    spawned = self.state.spawn_options(
                        &mut self.rng,
                        bounds,
                        self.config.spawn_batch,
                        self.config.max_spawned,
                    );
                }
                let offset = random_offset(&mut self.rng, bounds);
                self.state.move_negative(offset);
            }
            Reposition::Deferred => {
                let id = self.timers.schedule(
                    now + self.config.float_delay(),
                    QuestionTimer::FloatReposition,
                );
                self.pending_float = Some(id);
            }
            Reposition::Stay => {}
        }

        let rejection_count = self.state.record_rejection();
        self.state.set_burst(true);
        self.timers
            .schedule(now + self.config.settle(), QuestionTimer::Settle);

        tracing::debug!(
            %behavior,
            rejection_count,
            spawned,
            total_spawned = self.state.spawned().len(),
            "negative trigger applied"
        );

        TriggerOutcome::Applied {
            behavior,
            rejection_count,
            spawned,
        }
    }

    /// Neutralize a spawned option. Returns `false` for unknown ids.
    pub fn dismiss_spawned(&mut self, now: Duration, id: OptionId) -> bool {
        if !self.state.dismiss(id) {
            tracing::trace!(%id, "dismissal of unknown option refused");
            return false;
        }
        self.state.set_burst(true);
        self.timers
            .schedule(now + self.config.dismiss_burst(), QuestionTimer::HideBurst);
        tracing::debug!(%id, "spawned option dismissed");
        true
    }

    /// Fire every timer due at `now`, in deadline order. Returns how many fired.
    pub fn advance(&mut self, now: Duration, bounds: Option<Bounds>) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            tracing::trace!(?timer, ?now, "question timer fired");
            match timer {
                QuestionTimer::EndIntro => self.phase = Phase::Question,
                QuestionTimer::Settle => self.state.settle(),
                QuestionTimer::FloatReposition => {
                    self.pending_float = None;
                    let offset = random_offset(&mut self.rng, bounds);
                    self.state.move_negative(offset);
                }
                QuestionTimer::HideBurst => self.state.set_burst(false),
            }
            fired += 1;
        }
        fired
    }

    /// Activation of the positive option. Cancels all pending timers.
    pub fn accept(&mut self) -> Acceptance {
        self.teardown();
        let rejection_count = self.state.rejection_count();
        tracing::info!(rejection_count, "question accepted");
        Acceptance { rejection_count }
    }

    /// Cancel every pending timer; the screen is going away.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.pending_float = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Offset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn bounds() -> Option<Bounds> {
        Some(Bounds::new(700.0, 900.0))
    }

    fn ready(seed: u64) -> QuestionController<StdRng> {
        let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(seed));
        question.advance(ms(2500), bounds());
        question
    }

    #[test]
    fn test_intro_ends_once() {
        let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(0));
        assert_eq!(question.phase(), Phase::Intro);
        assert_eq!(question.next_deadline(), Some(ms(2500)));

        assert_eq!(question.advance(ms(2499), bounds()), 0);
        assert_eq!(question.phase(), Phase::Intro);

        assert_eq!(question.advance(ms(2500), bounds()), 1);
        assert_eq!(question.phase(), Phase::Question);
        assert_eq!(question.advance(ms(9000), bounds()), 0);
    }

    #[test]
    fn test_trigger_ignored_during_intro() {
        let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(0));
        let outcome = question.trigger_negative(ms(100), bounds());
        assert_eq!(outcome, TriggerOutcome::Ignored(IgnoreReason::Intro));
        assert_eq!(question.state().rejection_count(), 0);
    }

    #[test]
    fn test_guard_window() {
        let mut question = ready(5);

        assert!(question.trigger_negative(ms(3000), bounds()).is_applied());
        assert!(question.state().is_transitioning());
        assert!(question.state().show_burst());

        let snapshot = question.state().clone();
        assert_eq!(
            question.trigger_negative(ms(3200), bounds()),
            TriggerOutcome::Ignored(IgnoreReason::Transitioning)
        );
        assert_eq!(question.state(), &snapshot);

        question.advance(ms(3500), bounds());
        assert!(!question.state().is_transitioning());
        assert!(!question.state().show_burst());
        assert!(question.trigger_negative(ms(3500), bounds()).is_applied());
        assert_eq!(question.state().rejection_count(), 2);
    }

    /// First trigger at 3000ms draws float, second at 3500ms satisfies `second`.
    fn float_then(second: impl Fn(BehaviorKind) -> bool) -> QuestionController<StdRng> {
        (0..5000)
            .map(ready)
            .find_map(|mut q| {
                if !matches!(
                    q.trigger_negative(ms(3000), bounds()),
                    TriggerOutcome::Applied { behavior: BehaviorKind::Float, .. }
                ) {
                    return None;
                }
                q.advance(ms(3500), bounds());
                match q.trigger_negative(ms(3500), bounds()) {
                    TriggerOutcome::Applied { behavior, .. } if second(behavior) => Some(q),
                    _ => None,
                }
            })
            .expect("some seed draws the pair")
    }

    #[test]
    fn test_stale_float_cancelled_by_moving_trigger() {
        let mut question = float_then(|kind| kind.reposition() != Reposition::Stay);

        // The older float must not land on top of the newer position.
        let after_second = question.state().negative_offset();
        question.advance(ms(3800), bounds());
        assert_eq!(question.state().negative_offset(), after_second);
    }

    #[test]
    fn test_float_survives_trigger_that_stays() {
        let mut question = float_then(|kind| kind.reposition() == Reposition::Stay);
        assert_eq!(question.state().negative_offset(), Offset::ZERO);

        question.advance(ms(3799), bounds());
        assert_eq!(question.state().negative_offset(), Offset::ZERO);
        question.advance(ms(3800), bounds());
        assert_ne!(question.state().negative_offset(), Offset::ZERO);
    }

    #[test]
    fn test_float_lands_later() {
        let mut question = (0..500)
            .map(ready)
            .find_map(|mut q| {
                match q.trigger_negative(ms(3000), bounds()) {
                    TriggerOutcome::Applied { behavior: BehaviorKind::Float, .. } => Some(q),
                    _ => None,
                }
            })
            .expect("some seed draws float first");

        question.advance(ms(3799), bounds());
        assert_eq!(question.state().negative_offset(), Offset::ZERO);
        question.advance(ms(3800), bounds());
        assert_ne!(question.state().negative_offset(), Offset::ZERO);
    }

    #[test]
    fn test_dismiss_shows_burst_briefly() {
        let mut question = ready(9);
        let mut now = 3000;
        while question.state().spawned().is_empty() {
            question.trigger_negative(ms(now), bounds());
            now += 500;
            question.advance(ms(now), bounds());
        }

        let id = question.state().spawned()[0].id;
        assert!(question.dismiss_spawned(ms(now), id));
        assert!(question.state().show_burst());
        question.advance(ms(now + 500), bounds());
        assert!(!question.state().show_burst());
        assert_eq!(question.state().visible_spawned().count(), question.state().spawned().len() - 1);
    }

    #[test]
    fn test_accept_cancels_timers() {
        let mut question = ready(2);
        question.trigger_negative(ms(3000), bounds());
        assert!(question.pending_timers() > 0);

        let acceptance = question.accept();
        assert_eq!(acceptance.rejection_count, 1);
        assert_eq!(question.pending_timers(), 0);
        assert_eq!(question.next_deadline(), None);
    }

    #[test]
    fn test_unmeasured_bounds() {
        let mut question = ready(4);
        for step in 0..20u64 {
            let now = 3000 + step * 1000;
            question.trigger_negative(ms(now), None);
            question.advance(ms(now + 500), None);
            question.advance(ms(now + 900), None);
        }
        assert_eq!(question.state().negative_offset(), Offset::ZERO);
        assert!(question.state().spawned().iter().all(|o| o.offset == Offset::ZERO));
    }
}
