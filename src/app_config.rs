use crate::domain::Geofence;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    geofence: Geofence,
    movement: Movement,
    retry: Retry,
    fixtures: Fixtures,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GEOFENCE").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }

    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    pub fn retry(&self) -> &Retry {
        &self.retry
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }
}

#[derive(Debug, Deserialize)]
pub struct Movement {
    steps: u32,
    #[serde(with = "humantime_serde")]
    step_delay: Duration,
    #[serde(with = "humantime_serde")]
    settle_delay: Duration,
}

impl Movement {
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Wait after each location update so the device can pick it up.
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}

#[derive(Debug, Deserialize)]
pub struct Retry {
    base_ms: u64,
    max_delay_ms: u64,
    max_attempts: usize,
}

impl Retry {
    pub fn base_ms(&self) -> u64 {
        self.base_ms
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Total attempts for a location update, the first one included.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

#[derive(Debug, Deserialize)]
pub struct Fixtures {
    path: String,
}

impl Fixtures {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("unable to load configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        use crate::fixtures::named_locations::{DEFAULT_RADIUS_M, GEOFENCE_CENTER};

        AppConfigBuilder {
            config: AppConfig {
                geofence: Geofence::new(GEOFENCE_CENTER, DEFAULT_RADIUS_M),
                movement: Movement {
                    steps: 5,
                    step_delay: Duration::from_secs(1),
                    settle_delay: Duration::from_millis(500),
                },
                retry: Retry {
                    base_ms: 100,
                    max_delay_ms: 200,
                    max_attempts: 1,
                },
                fixtures: Fixtures {
                    path: "testdata/locations.json".to_string(),
                },
            },
        }
    }

    pub fn radius_m(mut self, radius_m: f64) -> Self {
        self.config.geofence = Geofence::new(self.config.geofence.center().clone(), radius_m);
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.config.movement.steps = steps;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.retry.max_attempts = max_attempts;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
