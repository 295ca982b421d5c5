//! Intro greeting shown before the question.

use dioxus::prelude::*;
use sweetheart_core::messages::{INTRO_GREETING, INTRO_LEAD};
use sweetheart_ui::FloatingHearts;

/// "Hey you... I have something to ask you ♥"
#[component]
pub fn IntroGreeting() -> Element {
    rsx! {
        main { class: "screen intro",
            FloatingHearts {}

            div { class: "intro-content",
                p { class: "intro-greeting animate-fade-in-up", "{INTRO_GREETING}" }
                h1 {
                    class: "intro-lead animate-fade-in-up",
                    style: "animation-delay: 0.5s;",
                    "{INTRO_LEAD}"
                }
                span {
                    class: "intro-heart animate-heartbeat",
                    style: "animation-delay: 1s;",
                    "♥"
                }
            }
        }
    }
}
