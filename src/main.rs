#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sweetheart_core::CardConfig;
use tracing_subscriber::EnvFilter;

/// Config resolved at startup, read by the app through `context`
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Seed for the behavior RNG, set at startup
static RNG_SEED: OnceLock<u64> = OnceLock::new();

/// Get the card config (loaded file or defaults)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the behavior RNG seed
pub fn get_rng_seed() -> u64 {
    *RNG_SEED.get_or_init(rand::random)
}

/// Default config location: `<config dir>/sweetheart/card.json`
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sweetheart")
        .join("card.json")
}

fn load_config(path: &Path) -> anyhow::Result<CardConfig> {
    CardConfig::from_json_file(path)
        .with_context(|| format!("failed to load card config from {}", path.display()))
}

/// Sweetheart - a yes/no card that won't take no for an answer
#[derive(Parser, Debug)]
#[command(name = "sweetheart-desktop")]
#[command(about = "Sweetheart - ask the question, dodge the no")]
struct Args {
    /// JSON timing config (defaults to <config dir>/sweetheart/card.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the evasive behavior RNG (replays a session)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "Will you be mine?")]
    title: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,sweetheart=debug,sweetheart_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    // An explicit path must load; the default path is only used if it exists
    let config = match args.config {
        Some(ref path) => load_config(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config(&path)
            } else {
                Ok(CardConfig::default())
            }
        }
    };
    let config = config.unwrap_or_else(|e| {
        tracing::warn!("{:#}, using defaults", e);
        CardConfig::default()
    });
    let _ = CARD_CONFIG.set(config);

    let seed = args.seed.unwrap_or_else(rand::random);
    let _ = RNG_SEED.set(seed);

    tracing::info!(seed, "Starting '{}' ({}x{})", args.title, args.width, args.height);

    let (r, g, b, a) = theme::colors::BACKGROUND_RGBA;
    let config = Config::new()
        .with_background_color((r, g, b, a))
        .with_window(
            WindowBuilder::new()
                .with_title(&args.title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["sweetheart-desktop"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert_eq!(args.width, 700.0);
        assert_eq!(args.height, 900.0);
        assert_eq!(args.title, "Will you be mine?");
    }

    #[test]
    fn args_overrides() {
        let args = Args::try_parse_from([
            "sweetheart-desktop",
            "--seed",
            "42",
            "-c",
            "card.json",
            "--width",
            "480",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.config, Some(PathBuf::from("card.json")));
        assert_eq!(args.width, 480.0);
    }

    #[test]
    fn default_config_lives_under_sweetheart() {
        let path = default_config_path();
        assert!(path.ends_with("sweetheart/card.json"));
    }

    #[test]
    fn load_config_reports_path() {
        let err = load_config(Path::new("/nonexistent/sweetheart.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/sweetheart.json"));
    }
}
