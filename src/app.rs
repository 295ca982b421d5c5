use dioxus::prelude::*;
use sweetheart_core::{CardConfig, CardFlow, Screen};

use crate::context::get_card_config;
use crate::pages::{QuestionPage, SuccessPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card context, then shows the question
/// screen until the user says yes and the success screen afterwards.
#[component]
pub fn App() -> Element {
    let config: Signal<CardConfig> = use_signal(get_card_config);
    let flow: Signal<CardFlow> = use_signal(CardFlow::new);

    use_context_provider(|| config);
    use_context_provider(|| flow);

    rsx! {
        style { {GLOBAL_STYLES} }
        if flow().screen() == Screen::Question {
            QuestionPage {}
        } else {
            SuccessPage {}
        }
    }
}
