//! Color constants
//!
//! Blush-and-rose palette. The style sheet mirrors these as CSS custom
//! properties; only values Rust needs directly are listed here.

/// Window background before the webview paints (`--blush`)
pub const BACKGROUND_RGBA: (u8, u8, u8, u8) = (255, 241, 243, 255);
