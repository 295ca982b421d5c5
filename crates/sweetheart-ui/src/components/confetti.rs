//! Confetti Celebration
//!
//! Pastel dots rising across the success screen.

use dioxus::prelude::*;
use rand::Rng;

pub const CONFETTI_COUNT: usize = 30;

/// Blush, rose and peach tones
pub const CONFETTI_COLORS: [&str; 5] = [
    "hsl(350, 60%, 75%)",
    "hsl(340, 50%, 80%)",
    "hsl(30, 60%, 80%)",
    "hsl(350, 40%, 85%)",
    "hsl(20, 50%, 85%)",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    /// Percent of the window width
    pub left: f64,
    /// Seconds
    pub delay: f64,
    pub color: &'static str,
    /// Diameter in px
    pub size: f64,
}

pub fn roll_confetti<R: Rng>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|id| ConfettiPiece {
            id,
            left: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..0.8),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            size: rng.random_range(4.0..8.0),
        })
        .collect()
}

/// Celebration layer, mounted for the whole success screen.
#[component]
pub fn Confetti() -> Element {
    let pieces = use_hook(|| roll_confetti(&mut rand::rng(), CONFETTI_COUNT));

    rsx! {
        div { class: "confetti", "aria-hidden": "true",
            for piece in pieces.iter() {
                div {
                    key: "{piece.id}",
                    class: "confetti-piece",
                    style: "left: {piece.left}%; animation-delay: {piece.delay}s; background-color: {piece.color}; width: {piece.size}px; height: {piece.size}px;",
                }
            }
        }
    }
}
