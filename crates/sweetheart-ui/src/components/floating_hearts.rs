//! Floating Hearts Background
//!
//! Hearts drifting up from below the window, behind the question screen.

use dioxus::prelude::*;
use rand::Rng;

/// Number of hearts in the layer
pub const HEART_COUNT: usize = 20;

/// Symbols a heart can be drawn with
pub const HEART_SYMBOLS: [&str; 6] = ["♥", "♡", "❤", "💕", "💗", "💖"];

/// One floating heart
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub id: usize,
    /// Horizontal position, percent of the window width
    pub left: f64,
    /// Animation delay in seconds
    pub delay: f64,
    /// Animation duration in seconds
    pub duration: f64,
    /// Font size in px
    pub size: f64,
    pub symbol: &'static str,
}

/// Roll `count` hearts.
pub fn roll_hearts<R: Rng>(rng: &mut R, count: usize) -> Vec<Heart> {
    (0..count)
        .map(|id| Heart {
            id,
            left: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..8.0),
            duration: rng.random_range(4.0..10.0),
            size: rng.random_range(14.0..42.0),
            symbol: HEART_SYMBOLS[rng.random_range(0..HEART_SYMBOLS.len())],
        })
        .collect()
}

/// Ambient heart layer
///
/// Mounted behind the question screen for its whole lifetime.
#[component]
pub fn FloatingHearts() -> Element {
    let hearts = use_hook(|| roll_hearts(&mut rand::rng(), HEART_COUNT));

    rsx! {
        div { class: "floating-hearts", "aria-hidden": "true",
            for heart in hearts.iter() {
                div {
                    key: "{heart.id}",
                    class: "floating-heart",
                    style: "left: {heart.left}%; animation-delay: {heart.delay}s; animation-duration: {heart.duration}s; font-size: {heart.size}px;",
                    "{heart.symbol}"
                }
            }
        }
    }
}
