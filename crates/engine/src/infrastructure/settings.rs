//! Engine settings loaded from the environment.
//!
//! Variables are read from the process environment after loading
//! `.env.local` and `.env` from the repository root, if present:
//!
//! - `DICECALC_RNG_SEED` - seed for reproducible simulated rolls
//! - `DICECALC_ENUMERATION_WARN_THRESHOLD` - outcome count above which an
//!   exact calculation logs a warning before enumerating

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RNG_SEED_VAR: &str = "DICECALC_RNG_SEED";
pub const ENUMERATION_WARN_THRESHOLD_VAR: &str = "DICECALC_ENUMERATION_WARN_THRESHOLD";

fn default_enumeration_warn_threshold() -> u64 {
    10_000_000
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Seed for simulated rolls; `None` uses the thread RNG
    #[serde(default)]
    pub rng_seed: Option<u64>,

    #[serde(default = "default_enumeration_warn_threshold")]
    pub enumeration_warn_threshold: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rng_seed: None,
            enumeration_warn_threshold: default_enumeration_warn_threshold(),
        }
    }
}

impl EngineSettings {
    /// Load settings from dotenv files and the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(seed) = read_u64(&lookup, RNG_SEED_VAR)? {
            settings.rng_seed = Some(seed);
        }
        if let Some(threshold) = read_u64(&lookup, ENUMERATION_WARN_THRESHOLD_VAR)? {
            settings.enumeration_warn_threshold = threshold;
        }

        Ok(settings)
    }
}

fn read_u64<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(SettingsError::InvalidValue { key, value: raw }),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = EngineSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.rng_seed, None);
        assert_eq!(settings.enumeration_warn_threshold, 10_000_000);
    }

    #[test]
    fn test_reads_seed_and_threshold() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (RNG_SEED_VAR, " 1234 "),
            (ENUMERATION_WARN_THRESHOLD_VAR, "500"),
        ]))
        .unwrap();
        assert_eq!(settings.rng_seed, Some(1234));
        assert_eq!(settings.enumeration_warn_threshold, 500);
    }

    #[test]
    fn test_blank_value_keeps_default() {
        let settings = EngineSettings::from_lookup(lookup(&[(RNG_SEED_VAR, "  ")])).unwrap();
        assert_eq!(settings.rng_seed, None);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = EngineSettings::from_lookup(lookup(&[(RNG_SEED_VAR, "abc")])).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidValue {
                key: RNG_SEED_VAR,
                value: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid value for DICECALC_RNG_SEED: 'abc'");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let settings: EngineSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, EngineSettings::default());

        let settings: EngineSettings = serde_json::from_str(r#"{"rng_seed":7}"#).unwrap();
        assert_eq!(settings.rng_seed, Some(7));
    }
}
