//! Sweetheart UI Components
//!
//! Dioxus components shared by both screens of the card:
//! - **Button**: the positive, negative and stray options
//! - **FloatingHearts**: ambient layer behind the question screen
//! - **Sparkles**: one-shot burst shown after each trigger
//! - **Confetti**: celebration layer on the success screen
//!
//! The overlays are pure presentation. Each one rolls its own random
//! particles once when it mounts and never reads card state.

pub mod components;

pub use components::*;
