//! Timing and capacity knobs for the card.
//!
//! Everything has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! { "intro_ms": 1500, "reveal_ms": [200, 900, 1800] }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Hard ceiling on spawned "No way!" copies.
pub const MAX_SPAWNED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// How long the intro greeting stays up
    pub intro_ms: u64,
    /// Guard window and burst duration after a negative trigger
    pub settle_ms: u64,
    /// Delay before a floating option reappears elsewhere
    pub float_delay_ms: u64,
    /// Burst duration after dismissing a spawned option
    pub dismiss_burst_ms: u64,
    /// Deadlines for reveal stages 1, 2 and 3
    pub reveal_ms: [u64; 3],
    /// Cap on spawned options
    pub max_spawned: usize,
    /// Copies spawned per multiply
    pub spawn_batch: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            intro_ms: 2500,
            settle_ms: 500,
            float_delay_ms: 800,
            dismiss_burst_ms: 500,
            reveal_ms: [300, 1200, 2200],
            max_spawned: MAX_SPAWNED_LIMIT,
            spawn_batch: 2,
        }
    }
}

impl CardConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> CardResult<Self> {
        let config: CardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.settle_ms == 0 {
            return Err(CardError::InvalidConfig(
                "settle_ms must be positive".to_string(),
            ));
        }
        if !self.reveal_ms.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(CardError::InvalidConfig(format!(
                "reveal_ms must be strictly increasing, got {:?}",
                self.reveal_ms
            )));
        }
        if self.spawn_batch == 0 {
            return Err(CardError::InvalidConfig(
                "spawn_batch must be at least 1".to_string(),
            ));
        }
        if self.max_spawned == 0 || self.max_spawned > MAX_SPAWNED_LIMIT {
            return Err(CardError::InvalidConfig(format!(
                "max_spawned must be between 1 and {}, got {}",
                MAX_SPAWNED_LIMIT, self.max_spawned
            )));
        }
        Ok(())
    }

    pub fn intro(&self) -> Duration {
        Duration::from_millis(self.intro_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn float_delay(&self) -> Duration {
        Duration::from_millis(self.float_delay_ms)
    }

    pub fn dismiss_burst(&self) -> Duration {
        Duration::from_millis(self.dismiss_burst_ms)
    }

    pub fn reveal_deadlines(&self) -> [Duration; 3] {
        self.reveal_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = CardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.intro(), Duration::from_millis(2500));
        assert_eq!(
            config.reveal_deadlines(),
            [
                Duration::from_millis(300),
                Duration::from_millis(1200),
                Duration::from_millis(2200)
            ]
        );
    }

    #[test]
    fn test_empty_object_is_defaults() {
        let config = CardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = CardConfig::from_json_str(r#"{ "intro_ms": 1000 }"#).unwrap();
        assert_eq!(config.intro_ms, 1000);
        assert_eq!(config.settle_ms, 500);
    }

    #[test]
    fn test_rejects_unordered_reveal() {
        let err = CardConfig::from_json_str(r#"{ "reveal_ms": [300, 300, 2200] }"#).unwrap_err();
        assert!(matches!(err, CardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_spawn_cap_above_limit() {
        let err = CardConfig::from_json_str(r#"{ "max_spawned": 6 }"#).unwrap_err();
        assert!(matches!(err, CardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_settle() {
        let config = CardConfig {
            settle_ms: 0,
            ..CardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_json() {
        let err = CardConfig::from_json_str("{ intro_ms: }").unwrap_err();
        assert!(matches!(err, CardError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "float_delay_ms": 650 }}"#).unwrap();

        let config = CardConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.float_delay(), Duration::from_millis(650));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CardConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }
}
