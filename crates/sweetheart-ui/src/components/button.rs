//! Button Components
//!
//! The three option styles of the card:
//! - Accept: the filled "Yes" button that grows with every rejection
//! - Decline: the outlined "No" button that runs away
//! - Stray: the small "No way!" copies spawned by multiply

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled, glowing primary option
    #[default]
    Accept,
    /// Outlined, muted option
    Decline,
    /// Smaller, fainter spawned copy of Decline
    Stray,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Accept => "btn-accept",
            ButtonVariant::Decline => "btn-decline",
            ButtonVariant::Stray => "btn-stray",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Pointer-enter handler
    #[props(default)]
    pub onmouseenter: Option<EventHandler<()>>,
    /// Additional CSS classes
    #[props(default)]
    pub class: String,
    /// Inline style (transform, transition)
    #[props(default)]
    pub style: String,
}

/// Builds the class attribute from a variant and extra classes.
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), extra)
    }
}

/// Styled option button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Decline,
///         onclick: move |_| flee(),
///         onmouseenter: move |_| flee(),
///         style: "transform: translate(40px, -12px);",
///         "Are you sure?"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, &props.class);
    let style = props.style.clone();
    let onclick = props.onclick;
    let onmouseenter = props.onmouseenter;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            style: "{style}",
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            onmouseenter: move |_| {
                if let Some(handler) = onmouseenter {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
