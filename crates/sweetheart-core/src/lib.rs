//! Sweetheart Core Library
//!
//! State machines behind the "Will you be mine?" card.
//!
//! ## Overview
//!
//! The card has two screens. The question screen greets the user, asks the
//! question, and makes the "No" option increasingly hard to pick: it runs,
//! spins, multiplies and floats away while the "Yes" option keeps growing.
//! The success screen reveals its content in timed stages.
//!
//! Both screens are modelled as synchronous state machines driven by the
//! elapsed time since their screen mounted. They own their timers in a
//! [`TimerQueue`], so dropping a machine cancels everything it scheduled.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use rand::{rngs::StdRng, SeedableRng};
//! use sweetheart_core::{CardConfig, CardFlow, QuestionController, RevealSequencer, Screen};
//!
//! let mut flow = CardFlow::new();
//! let mut question = QuestionController::mount(CardConfig::default(), StdRng::seed_from_u64(7));
//! question.advance(Duration::from_millis(2500), None);
//! question.trigger_negative(Duration::from_millis(2600), None);
//!
//! question.accept();
//! flow.accept();
//! assert_eq!(flow.screen(), Screen::Success);
//!
//! let mut reveal = RevealSequencer::mount();
//! assert_eq!(reveal.advance(Duration::from_millis(2200)).get(), 3);
//! ```

pub mod behavior;
pub mod card;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod messages;
pub mod question;
pub mod reveal;
pub mod timer;

// Re-exports
pub use behavior::{BehaviorKind, Reposition, BEHAVIOR_WEIGHTS};
pub use card::{CardFlow, Screen};
pub use config::CardConfig;
pub use error::{CardError, CardResult};
pub use geometry::{Bounds, Offset};
pub use interaction::{InteractionState, OptionId, SpawnedOption};
pub use messages::Hint;
pub use question::{Acceptance, IgnoreReason, Phase, QuestionController, TriggerOutcome};
pub use reveal::{RevealBlock, RevealSequencer, RevealStage, REVEAL_SCHEDULE};
pub use timer::{TimerId, TimerQueue};
