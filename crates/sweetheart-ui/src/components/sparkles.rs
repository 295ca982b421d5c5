//! Sparkle burst, shown for a moment after each evasive move.

use dioxus::prelude::*;
use rand::Rng;

pub const SPARKLE_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub id: usize,
    /// Percent of the window
    pub x: f64,
    pub y: f64,
    /// Font size in px
    pub size: f64,
    /// Seconds
    pub delay: f64,
}

pub fn roll_sparkles<R: Rng>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|id| Sparkle {
            id,
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: rng.random_range(8.0..24.0),
            delay: rng.random_range(0.0..0.5),
        })
        .collect()
}

/// Burst layer. Mount it while the burst flag is set; each mount rolls
/// a fresh burst.
#[component]
pub fn Sparkles() -> Element {
    let sparkles = use_hook(|| roll_sparkles(&mut rand::rng(), SPARKLE_COUNT));

    rsx! {
        div { class: "sparkles", "aria-hidden": "true",
            for sparkle in sparkles.iter() {
                div {
                    key: "{sparkle.id}",
                    class: "sparkle",
                    style: "left: {sparkle.x}%; top: {sparkle.y}%; font-size: {sparkle.size}px; animation-delay: {sparkle.delay}s;",
                    "✦"
                }
            }
        }
    }
}
