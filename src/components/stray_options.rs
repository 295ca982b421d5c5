//! Stray Options
//!
//! The "No way!" copies left behind by multiply. Dismissed copies are
//! filtered out by the caller; the rest dismiss themselves on hover or click.

use dioxus::prelude::*;
use sweetheart_core::messages::STRAY_LABEL;
use sweetheart_core::OptionId;
use sweetheart_ui::{Button, ButtonVariant};

#[derive(Clone, PartialEq, Props)]
pub struct StrayOptionsProps {
    /// Visible strays with their CSS translate value
    pub strays: Vec<(OptionId, String)>,
    pub on_dismiss: EventHandler<OptionId>,
}

#[component]
pub fn StrayOptions(props: StrayOptionsProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        for (id, translate) in props.strays.iter().cloned() {
            Button {
                key: "{id}",
                variant: ButtonVariant::Stray,
                class: "animate-zoom-in".to_string(),
                style: format!("top: 50%; left: 50%; transform: {};", translate),
                onclick: move |_| on_dismiss.call(id),
                onmouseenter: move |_| on_dismiss.call(id),
                "{STRAY_LABEL}"
            }
        }
    }
}
