//! Card context provider for Sweetheart.
//!
//! Provides the startup config and the top-level flow flag to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let config = use_signal(get_card_config);
//! use_context_provider(|| config);
//!
//! // In child components
//! let config = use_card_config();
//! ```

use dioxus::prelude::*;
use sweetheart_core::{CardConfig, CardFlow};

/// Get the config resolved from the command line.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// Get the seed for the behavior RNG.
pub fn get_rng_seed() -> u64 {
    crate::get_rng_seed()
}

/// Hook to access the card config from context.
pub fn use_card_config() -> Signal<CardConfig> {
    use_context::<Signal<CardConfig>>()
}

/// Hook to access the top-level accepted flag.
///
/// Only ever flips false → true; see [`CardFlow::accept`].
pub fn use_card_flow() -> Signal<CardFlow> {
    use_context::<Signal<CardFlow>>()
}
