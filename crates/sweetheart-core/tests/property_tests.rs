//! Property-based tests for the question and reveal state machines
//!
//! Uses proptest to drive random event sequences through the controllers
//! and check the invariants after every step.

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sweetheart_core::messages::{self, MESSAGES};
use sweetheart_core::{Bounds, CardConfig, QuestionController, RevealSequencer};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Events the question screen can receive
#[derive(Debug, Clone)]
enum QuestionOp {
    /// Wait this many ms, then fire due timers
    Wait(u64),
    Trigger,
    /// Dismiss the spawned option at this index (modulo the spawned count)
    Dismiss(usize),
}

fn question_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<QuestionOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..1500u64).prop_map(QuestionOp::Wait),
            3 => Just(QuestionOp::Trigger),
            1 => (0..10usize).prop_map(QuestionOp::Dismiss),
        ],
        0..max_ops,
    )
}

fn bounds_strategy() -> impl Strategy<Value = Option<Bounds>> {
    prop_oneof![
        1 => Just(None),
        4 => (0.0..2000.0f64, 0.0..2000.0f64).prop_map(|(w, h)| Some(Bounds::new(w, h))),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The shown message is always in range and follows the clamped count
    #[test]
    fn message_index_clamped(count in any::<u32>()) {
        let index = messages::message_index(count);
        prop_assert!(index < MESSAGES.len());
        prop_assert_eq!(index, (count as usize).min(19));
    }

    /// Invariants hold after every event of any event sequence
    #[test]
    fn invariants_hold(
        seed in any::<u64>(),
        bounds in bounds_strategy(),
        ops in question_ops_strategy(120),
    ) {
        let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(seed));
        let mut now = Duration::ZERO;
        let mut last_count = 0;

        for op in ops {
            match op {
                QuestionOp::Wait(delta) => {
                    now += Duration::from_millis(delta);
                    question.advance(now, bounds);
                }
                QuestionOp::Trigger => {
                    let before = question.state().clone();
                    let outcome = question.trigger_negative(now, bounds);
                    if before.is_transitioning() {
                        prop_assert!(!outcome.is_applied());
                        prop_assert_eq!(question.state(), &before);
                    }
                }
                QuestionOp::Dismiss(index) => {
                    let spawned = question.state().spawned();
                    if !spawned.is_empty() {
                        let id = spawned[index % spawned.len()].id;
                        prop_assert!(question.dismiss_spawned(now, id));
                    }
                }
            }

            let state = question.state();
            prop_assert!(state.spawned().len() <= 5);
            prop_assert!(state.rejection_count() <= 19);
            prop_assert!(state.rejection_count() >= last_count);
            last_count = state.rejection_count();

            let ids: HashSet<_> = state.spawned().iter().map(|o| o.id).collect();
            prop_assert_eq!(ids.len(), state.spawned().len());
            prop_assert!(state.dismissed().iter().all(|id| ids.contains(id)));

            let expected_scale = 1.0 + f64::from(state.rejection_count()) * 0.12;
            prop_assert_eq!(state.accept_scale(), expected_scale);

            if let Some(bounds) = bounds {
                prop_assert!(bounds.contains(state.negative_offset()));
            }
        }
    }

    /// `n` well-spaced triggers leave the count at min(n, 19)
    #[test]
    fn spaced_triggers_count(seed in any::<u64>(), n in 1u32..40) {
        let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(seed));
        let mut now = Duration::from_millis(2500);
        question.advance(now, None);

        for _ in 0..n {
            prop_assert!(question.trigger_negative(now, None).is_applied());
            now += Duration::from_millis(500);
            question.advance(now, None);
        }
        prop_assert_eq!(question.state().rejection_count(), n.min(19));
    }

    /// Reveal stage never decreases and matches the schedule at every sample
    #[test]
    fn reveal_monotonic(mut samples in prop::collection::vec(0..5000u64, 1..50)) {
        samples.sort_unstable();
        let mut reveal = RevealSequencer::mount();
        let mut previous = reveal.stage();

        for t in samples {
            let elapsed = Duration::from_millis(t);
            let stage = reveal.advance(elapsed);
            prop_assert!(stage >= previous);
            prop_assert_eq!(stage, reveal.stage_at(elapsed));

            let expected = match t {
                0..=299 => 0,
                300..=1199 => 1,
                1200..=2199 => 2,
                _ => 3,
            };
            prop_assert_eq!(stage.get(), expected);
            previous = stage;
        }
    }
}
