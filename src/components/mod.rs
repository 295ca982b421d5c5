//! Question screen pieces that aren't generic enough for sweetheart-ui.

mod intro_greeting;
mod stray_options;

pub use intro_greeting::IntroGreeting;
pub use stray_options::StrayOptions;
