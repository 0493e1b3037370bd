//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::RandomPort,
    random::{SeededRandom, SystemRandom},
    settings::{EngineSettings, SettingsError},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the settings it was built from and all use cases.
pub struct App {
    pub settings: EngineSettings,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub roll: Arc<use_cases::RollDice>,
    pub probability: Arc<use_cases::CalculateProbability>,
}

impl App {
    /// Compose the application, choosing the random source from settings.
    pub fn new(settings: EngineSettings) -> Self {
        let random: Arc<dyn RandomPort> = match settings.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };
        Self::with_random(settings, random)
    }

    /// Compose the application around an explicit random source.
    pub fn with_random(settings: EngineSettings, random: Arc<dyn RandomPort>) -> Self {
        let use_cases = UseCases {
            roll: Arc::new(use_cases::RollDice::new(random)),
            probability: Arc::new(use_cases::CalculateProbability::new(
                settings.enumeration_warn_threshold,
            )),
        };

        Self {
            settings,
            use_cases,
        }
    }

    /// Load settings from the environment and compose the application.
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = EngineSettings::from_env()?;
        Ok(Self::new(settings))
    }
}
