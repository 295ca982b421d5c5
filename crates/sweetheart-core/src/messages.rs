//! Fixed copy shown on the card.

/// Label of the negative option, escalating with each rejection.
pub const MESSAGES: [&str; 20] = [
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Last chance!",
    "Surely not?",
    "You might regret this!",
    "Give it another thought!",
    "Are you certain?",
    "This could be a mistake!",
    "Have a heart!",
    "Don't be so cold!",
    "Change your mind?",
    "Please? 🥺",
    "Pretty please?",
    "I'll be sad...",
    "You're breaking my heart!",
    "Okay fine... just kidding!",
    "Catch me if you can!",
    "Nope, try again!",
];

/// Highest valid message index; also the rejection count ceiling.
pub const LAST_MESSAGE_INDEX: usize = MESSAGES.len() - 1;

pub const INTRO_GREETING: &str = "Hey you...";
pub const INTRO_LEAD: &str = "I have something to ask you";
pub const QUESTION_TITLE: &str = "Will you be mine?";
pub const QUESTION_SUBTITLE: &str = "♥ Please say yes ♥";
pub const ACCEPT_LABEL: &str = "Yes! ♥";
pub const STRAY_LABEL: &str = "No way!";
pub const AFFIRMATION: &str = "You know you want to say yes! ♥";

/// Rejections above which [`AFFIRMATION`] is shown.
pub const AFFIRMATION_THRESHOLD: u32 = 10;

pub fn message_index(rejections: u32) -> usize {
    (rejections as usize).min(LAST_MESSAGE_INDEX)
}

pub fn message_for(rejections: u32) -> &'static str {
    MESSAGES[message_index(rejections)]
}

pub fn shows_affirmation(rejections: u32) -> bool {
    rejections > AFFIRMATION_THRESHOLD
}

/// Hint line under the buttons, getting blunter as rejections pile up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hint {
    None,
    Mild,
    Medium,
    Strong,
}

impl Hint {
    pub fn for_rejections(rejections: u32) -> Self {
        match rejections {
            n if n > 8 => Hint::Strong,
            n if n > 5 => Hint::Medium,
            n if n > 2 => Hint::Mild,
            _ => Hint::None,
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            Hint::None => None,
            Hint::Mild => Some("Hint: The 'No' button is a bit shy... 😊"),
            Hint::Medium => Some("The No button really doesn't want to be clicked! 😄"),
            Hint::Strong => Some("Just say YES already! 💕"),
        }
    }
}
