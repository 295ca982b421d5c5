//! Question page - "Will you be mine?"
//!
//! Shows the intro greeting, then the question with a growing "Yes" and a
//! "No" that refuses to be picked. All state lives in a
//! [`QuestionController`]; this page feeds it pointer events and elapsed
//! time and renders what it says.

use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sweetheart_core::messages::{ACCEPT_LABEL, AFFIRMATION, QUESTION_SUBTITLE, QUESTION_TITLE};
use sweetheart_core::{Bounds, OptionId, Phase, QuestionController};
use sweetheart_ui::{Button, ButtonVariant, FloatingHearts, Sparkles};

use crate::components::{IntroGreeting, StrayOptions};
use crate::context::{get_rng_seed, use_card_config, use_card_flow};

/// Spring used for every move except teleport
const SPRING_TRANSITION: &str = "transform 0.3s cubic-bezier(0.68, -0.55, 0.265, 1.55)";

/// Measure the container the options move within.
async fn measure(element: Rc<MountedData>) -> Option<Bounds> {
    match element.get_client_rect().await {
        Ok(rect) => Some(Bounds::new(rect.size.width, rect.size.height)),
        Err(e) => {
            tracing::debug!("container not measurable yet: {:?}", e);
            None
        }
    }
}

/// Question page component.
#[component]
pub fn QuestionPage() -> Element {
    let config = use_card_config();
    let mut flow = use_card_flow();
    let mounted_at = use_hook(Instant::now);
    let mut controller = use_signal(|| {
        QuestionController::mount(config.peek().clone(), StdRng::seed_from_u64(get_rng_seed()))
    });
    let mut bounds: Signal<Option<Bounds>> = use_signal(|| None);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Sleep until the controller's next deadline and fire it, until nothing
    // is pending. Tasks belong to this page, so unmounting cancels them.
    let mut pump_timers = move || {
        spawn(async move {
            while let Some(deadline) = controller.peek().next_deadline() {
                let elapsed = mounted_at.elapsed();
                if deadline > elapsed {
                    tokio::time::sleep(deadline - elapsed).await;
                }
                let now = mounted_at.elapsed();
                let due = controller
                    .peek()
                    .next_deadline()
                    .is_some_and(|deadline| deadline <= now);
                if due {
                    let current_bounds = *bounds.peek();
                    controller.write().advance(now, current_bounds);
                }
            }
        });
    };

    let mut remeasure = move || {
        if let Some(element) = container.peek().clone() {
            spawn(async move {
                if let Some(measured) = measure(element).await {
                    bounds.set(Some(measured));
                }
            });
        }
    };

    // Arm the intro timer
    use_effect(move || {
        pump_timers();
    });

    let mut flee = move || {
        let now = mounted_at.elapsed();
        let current_bounds = *bounds.peek();
        let outcome = controller.write().trigger_negative(now, current_bounds);
        if outcome.is_applied() {
            pump_timers();
            remeasure();
        }
    };

    let mut dismiss = move |id: OptionId| {
        let now = mounted_at.elapsed();
        if controller.write().dismiss_spawned(now, id) {
            pump_timers();
        }
    };

    let accept = move |_: ()| {
        let acceptance = controller.write().accept();
        if flow.write().accept() {
            tracing::info!(
                rejections = acceptance.rejection_count,
                after = ?mounted_at.elapsed(),
                "card accepted"
            );
        }
    };

    let question = controller.read();
    if question.phase() == Phase::Intro {
        return rsx! {
            IntroGreeting {}
        };
    }

    let state = question.state();
    let message = state.message();
    let hint = state.hint().text();
    let affirmation = state.shows_affirmation();
    let show_burst = state.show_burst();
    let strays: Vec<(OptionId, String)> = state
        .visible_spawned()
        .map(|option| (option.id, option.offset.to_translate()))
        .collect();

    let accept_style = format!(
        "transform: scale({}); transition: {};",
        state.accept_scale(),
        SPRING_TRANSITION
    );
    let decline_transition = if state.current_behavior().is_instant() {
        "none"
    } else {
        SPRING_TRANSITION
    };
    let decline_style = format!(
        "transform: {}; transition: {};",
        state.negative_offset().to_translate(),
        decline_transition
    );
    let decline_class = state.animation_class().unwrap_or_default();
    drop(question);

    rsx! {
        main {
            class: "screen question",
            onmounted: move |event: MountedEvent| {
                let element = event.data();
                container.set(Some(element.clone()));
                spawn(async move {
                    bounds.set(measure(element).await);
                });
            },

            FloatingHearts {}
            if show_burst {
                Sparkles {}
            }

            header { class: "question-header",
                h1 { class: "question-title animate-heartbeat", "{QUESTION_TITLE}" }
                p { class: "question-subtitle animate-fade-in-up", "{QUESTION_SUBTITLE}" }
            }

            div { class: "options",
                Button {
                    variant: ButtonVariant::Accept,
                    class: "animate-zoom-in".to_string(),
                    style: accept_style,
                    onclick: accept,
                    "{ACCEPT_LABEL}"
                }
                Button {
                    variant: ButtonVariant::Decline,
                    class: decline_class.to_string(),
                    style: decline_style,
                    onclick: move |_| flee(),
                    onmouseenter: move |_| flee(),
                    "{message}"
                }
            }

            StrayOptions {
                strays: strays,
                on_dismiss: move |id: OptionId| dismiss(id),
            }

            {hint.map(|text| rsx! {
                p { class: "hint animate-slide-in-bottom", "{text}" }
            })}

            if affirmation {
                div { class: "affirmation animate-fade-in-up",
                    p { class: "animate-pulse-love", "{AFFIRMATION}" }
                }
            }
        }
    }
}
