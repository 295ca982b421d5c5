//! Success page - shown once the user says yes.
//!
//! Content is disclosed in three timed stages by a [`RevealSequencer`].

use std::time::Instant;

use dioxus::prelude::*;
use sweetheart_core::{RevealBlock, RevealSequencer};
use sweetheart_ui::Confetti;

use crate::context::use_card_config;

/// Success page component.
#[component]
pub fn SuccessPage() -> Element {
    let config = use_card_config();
    let mounted_at = use_hook(Instant::now);
    let mut reveal = use_signal(|| RevealSequencer::from_config(&config.peek()));

    // Walk the schedule. The task is owned by this page, so it stops if the
    // page goes away before the last stage.
    use_effect(move || {
        spawn(async move {
            while let Some(deadline) = reveal.peek().next_deadline() {
                let elapsed = mounted_at.elapsed();
                if deadline > elapsed {
                    tokio::time::sleep(deadline - elapsed).await;
                }
                reveal.write().advance(mounted_at.elapsed());
            }
        });
    });

    let (announcement, longing, together) = {
        let reveal = reveal.read();
        (
            reveal.is_unlocked(RevealBlock::Announcement),
            reveal.is_unlocked(RevealBlock::Longing),
            reveal.is_unlocked(RevealBlock::Together),
        )
    };

    rsx! {
        main { class: "screen success",
            Confetti {}

            div { class: "glow-orbs", "aria-hidden": "true",
                div { class: "glow-orb glow-orb-primary" }
                div { class: "glow-orb glow-orb-accent" }
            }

            div { class: "success-content",
                if announcement {
                    div { class: "animate-fade-in-up",
                        p { class: "success-kicker", "you said yes" }
                        h1 { class: "success-title", "Finally." }
                    }
                }

                if longing {
                    div {
                        class: "success-longing animate-fade-in-up",
                        style: "animation-delay: 0.2s;",
                        p { class: "success-line", "I've been waiting to hear that" }
                        p { class: "success-line-script", "for so long" }
                    }
                }

                if together {
                    div {
                        class: "success-together animate-zoom-in",
                        style: "animation-delay: 0.3s;",
                        div { class: "divider" }
                        p { class: "together-title", "You & Me" }
                        p { class: "together-subtitle", "starting now" }
                        div { class: "divider" }
                    }
                    div {
                        class: "animate-fade-in-up",
                        style: "animation-delay: 0.8s;",
                        span { class: "closing-heart animate-pulse-love", "♥" }
                    }
                }
            }
        }
    }
}
