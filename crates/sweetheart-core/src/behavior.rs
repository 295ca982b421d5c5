//! Evasive behaviors of the negative option.
//!
//! Every accepted trigger picks one [`BehaviorKind`] from [`BEHAVIOR_WEIGHTS`].

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The evasive variant applied on a negative trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorKind {
    /// Dart to a new random position
    #[default]
    Run,
    Shrink,
    Spin,
    /// Spawn extra copies, then run
    Multiply,
    Shake,
    Rainbow,
    Jelly,
    /// Drift away, reappear elsewhere after a delay
    Float,
    /// Jump to a new position with no transition
    Teleport,
}

/// How a behavior moves the negative option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reposition {
    /// Move right away
    Immediate,
    /// Move once the float delay has elapsed
    Deferred,
    /// Stay put, only the animation differs
    Stay,
}

/// Sampling weights. `Run` is three times as likely as any other kind.
pub const BEHAVIOR_WEIGHTS: [(BehaviorKind, u32); 9] = [
    (BehaviorKind::Run, 3),
    (BehaviorKind::Shrink, 1),
    (BehaviorKind::Spin, 1),
    (BehaviorKind::Multiply, 1),
    (BehaviorKind::Shake, 1),
    (BehaviorKind::Rainbow, 1),
    (BehaviorKind::Jelly, 1),
    (BehaviorKind::Float, 1),
    (BehaviorKind::Teleport, 1),
];

/// Pick an entry from a weighted table.
///
/// Zero-weight entries are never picked. Returns `None` if every weight is zero.
pub fn pick_weighted<T: Copy, R: Rng>(table: &[(T, u32)], rng: &mut R) -> Option<T> {
    let total: u32 = table.iter().map(|(_, weight)| weight).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.random_range(0..total);
    for (item, weight) in table {
        if roll < *weight {
            return Some(*item);
        }
        roll -= weight;
    }
    None
}

impl BehaviorKind {
    /// Sample a kind from [`BEHAVIOR_WEIGHTS`].
    pub fn pick<R: Rng>(rng: &mut R) -> Self {
        pick_weighted(&BEHAVIOR_WEIGHTS, rng).unwrap_or_default()
    }

    pub fn reposition(&self) -> Reposition {
        match self {
            BehaviorKind::Run | BehaviorKind::Teleport | BehaviorKind::Multiply => {
                Reposition::Immediate
            }
            BehaviorKind::Float => Reposition::Deferred,
            BehaviorKind::Shrink
            | BehaviorKind::Spin
            | BehaviorKind::Shake
            | BehaviorKind::Rainbow
            | BehaviorKind::Jelly => Reposition::Stay,
        }
    }

    /// CSS animation class played while the trigger is in flight.
    pub fn animation_class(&self) -> Option<&'static str> {
        match self {
            BehaviorKind::Shake => Some("animate-shake"),
            BehaviorKind::Spin => Some("animate-spin-away"),
            BehaviorKind::Shrink => Some("animate-shrink"),
            BehaviorKind::Rainbow => Some("animate-rainbow"),
            BehaviorKind::Jelly => Some("animate-jelly"),
            BehaviorKind::Float => Some("animate-float-away"),
            BehaviorKind::Run | BehaviorKind::Multiply | BehaviorKind::Teleport => None,
        }
    }

    /// Teleport snaps into place; everything else springs.
    pub fn is_instant(&self) -> bool {
        matches!(self, BehaviorKind::Teleport)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorKind::Run => "run",
            BehaviorKind::Shrink => "shrink",
            BehaviorKind::Spin => "spin",
            BehaviorKind::Multiply => "multiply",
            BehaviorKind::Shake => "shake",
            BehaviorKind::Rainbow => "rainbow",
            BehaviorKind::Jelly => "jelly",
            BehaviorKind::Float => "float",
            BehaviorKind::Teleport => "teleport",
        }
    }
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_weights_total() {
        let total: u32 = BEHAVIOR_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 11);
    }

    #[test]
    fn test_pick_weighted_skips_zero_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = [("never", 0), ("always", 4)];
        for _ in 0..100 {
            assert_eq!(pick_weighted(&table, &mut rng), Some("always"));
        }
    }

    #[test]
    fn test_pick_weighted_all_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = [("a", 0), ("b", 0)];
        assert_eq!(pick_weighted(&table, &mut rng), None);
    }

    #[test]
    fn test_run_is_favoured() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<BehaviorKind, u32> = HashMap::new();
        for _ in 0..11_000 {
            *counts.entry(BehaviorKind::pick(&mut rng)).or_default() += 1;
        }

        // Every kind shows up, and run lands near 3/11 of the draws.
        assert_eq!(counts.len(), 9);
        let run = counts[&BehaviorKind::Run];
        assert!((2_600..=3_400).contains(&run), "run drawn {} times", run);
        for (kind, count) in &counts {
            if *kind != BehaviorKind::Run {
                assert!(*count < run, "{} drawn {} times", kind, count);
            }
        }
    }

    #[test]
    fn test_reposition_table() {
        assert_eq!(BehaviorKind::Run.reposition(), Reposition::Immediate);
        assert_eq!(BehaviorKind::Teleport.reposition(), Reposition::Immediate);
        assert_eq!(BehaviorKind::Multiply.reposition(), Reposition::Immediate);
        assert_eq!(BehaviorKind::Float.reposition(), Reposition::Deferred);
        for kind in [
            BehaviorKind::Shrink,
            BehaviorKind::Spin,
            BehaviorKind::Shake,
            BehaviorKind::Rainbow,
            BehaviorKind::Jelly,
        ] {
            assert_eq!(kind.reposition(), Reposition::Stay);
        }
    }

    #[test]
    fn test_animation_classes() {
        assert_eq!(BehaviorKind::Shake.animation_class(), Some("animate-shake"));
        assert_eq!(BehaviorKind::Float.animation_class(), Some("animate-float-away"));
        assert_eq!(BehaviorKind::Run.animation_class(), None);
        assert!(BehaviorKind::Teleport.is_instant());
        assert!(!BehaviorKind::Run.is_instant());
    }
}
