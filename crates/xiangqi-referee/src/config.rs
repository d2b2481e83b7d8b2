use std::path::Path;

use serde::{Deserialize, Serialize};
use xiangqi_core::Color;

use crate::referee::RefereeError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Which side the oracle plays and how many rejected replies are tolerated
/// in one turn before it is aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefereeConfig {
    pub oracle_color: Color,
    pub max_attempts: u32,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            oracle_color: Color::Black,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RefereeConfig {
    pub fn from_json(text: &str) -> Result<Self, RefereeError> {
        let config: Self =
            serde_json::from_str(text).map_err(|err| RefereeError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, RefereeError> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| RefereeError::Config(format!("{}: {err}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), RefereeError> {
        if self.max_attempts == 0 {
            return Err(RefereeError::Config(
                "maxAttempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RefereeConfig::from_json(r#"{ "oracleColor": "red" }"#).unwrap();
        assert_eq!(config.oracle_color, Color::Red);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(RefereeConfig::from_json("{}").unwrap(), RefereeConfig::default());
    }

    #[test]
    fn rejects_zero_attempts_and_bad_json() {
        assert!(matches!(
            RefereeConfig::from_json(r#"{ "maxAttempts": 0 }"#),
            Err(RefereeError::Config(_))
        ));
        assert!(matches!(
            RefereeConfig::from_json(r#"{ "oracleColor": "green" }"#),
            Err(RefereeError::Config(_))
        ));
    }
}
