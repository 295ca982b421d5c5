//! Reusable UI components.
//!
//! Class names refer to the global style sheet shipped by the desktop app.

mod button;
mod confetti;
mod floating_hearts;
mod sparkles;

pub use button::*;
pub use confetti::*;
pub use floating_hearts::*;
pub use sparkles::*;
