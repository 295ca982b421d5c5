//! Visual theme: palette constants and the global style sheet.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
