use crate::app_config::AppConfig;
use crate::device::{LocationError, LocationSetter};
use crate::domain::{GeoLocation, Geofence};
use crate::fixtures::{LocationFixture, Transition};
use crate::movement::{MovementError, interpolate};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, instrument, warn};

/// Drives a device through geofence scenarios. Each scenario gets its own service, so parallel
/// runs never share a device.
#[derive(Debug)]
pub struct GeofenceService {
    setter: Arc<dyn LocationSetter>,
    geofence: Geofence,
    pacing: Pacing,
}

#[derive(Clone, Debug)]
pub struct Pacing {
    pub steps: u32,
    pub step_delay: Duration,
    pub settle_delay: Duration,
    pub retry_base_ms: u64,
    pub retry_max_delay: Duration,
    pub max_attempts: usize,
}

impl Pacing {
    pub fn from_config(config: &AppConfig) -> Self {
        Pacing {
            steps: config.movement().steps(),
            step_delay: config.movement().step_delay(),
            settle_delay: config.movement().settle_delay(),
            retry_base_ms: config.retry().base_ms(),
            retry_max_delay: config.retry().max_delay(),
            max_attempts: config.retry().max_attempts(),
        }
    }
}

/// Where a device stands relative to the geofence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeofenceStatus {
    pub inside: bool,
    pub distance_from_center: f64,
}

impl GeofenceStatus {
    pub fn is_outside(&self) -> bool {
        !self.inside
    }
}

/// The result of checking one fixture against the geofence.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureOutcome {
    pub name: String,
    pub status: GeofenceStatus,
    pub expected_inside: bool,
}

impl FixtureOutcome {
    pub fn matches_expectation(&self) -> bool {
        self.status.inside == self.expected_inside
    }
}

impl GeofenceService {
    pub fn new(setter: Arc<dyn LocationSetter>, geofence: Geofence, pacing: Pacing) -> Self {
        GeofenceService { setter, geofence, pacing }
    }

    pub fn from_config(setter: Arc<dyn LocationSetter>, config: &AppConfig) -> Self {
        GeofenceService::new(setter, config.geofence().clone(), Pacing::from_config(config))
    }

    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }

    pub fn radius(&self) -> f64 {
        self.geofence.radius_m()
    }

    pub fn status_of(&self, location: &GeoLocation) -> GeofenceStatus {
        GeofenceStatus {
            inside: self.geofence.contains(location),
            distance_from_center: self.geofence.distance_from_center(location),
        }
    }

    pub fn verify_inside(&self, location: &GeoLocation) -> bool {
        self.geofence.contains(location)
    }

    pub fn verify_outside(&self, location: &GeoLocation) -> bool {
        !self.verify_inside(location)
    }

    /// Compares each fixture's expectation with the actual containment. Nothing is sent to the device.
    pub fn evaluate_fixtures(&self, fixtures: &[LocationFixture]) -> Vec<FixtureOutcome> {
        fixtures
            .iter()
            .map(|fixture| {
                let outcome = FixtureOutcome {
                    name: fixture.name().to_owned(),
                    status: self.status_of(fixture.location()),
                    expected_inside: fixture.expected_inside(),
                };

                if outcome.matches_expectation() {
                    info!(
                        inside = outcome.status.inside,
                        "✅ {} is {:.2}m from the center",
                        outcome.name,
                        outcome.status.distance_from_center
                    );
                } else {
                    warn!(
                        inside = outcome.status.inside,
                        expected_inside = outcome.expected_inside,
                        "❌ {} is {:.2}m from the center",
                        outcome.name,
                        outcome.status.distance_from_center
                    );
                }
                outcome
            })
            .collect()
    }

    /// Moves the device to `location` and reports where it stands.
    #[instrument(skip_all, fields(location = %location))]
    pub async fn place_device_at(&self, location: &GeoLocation) -> Result<GeofenceStatus, ServiceError> {
        self.set_location(location).await?;

        let status = self.status_of(location);
        info!(
            inside = status.inside,
            "📍 Device at {} is {:.2}m from the center",
            location,
            status.distance_from_center
        );
        Ok(status)
    }

    pub async fn simulate_entry(&self, outside: &GeoLocation) -> Result<GeofenceStatus, ServiceError> {
        info!("🚶 Simulating geofence entry from outside to center");
        let center = self.geofence.center().clone();
        self.simulate_movement(outside, &center).await
    }

    pub async fn simulate_exit(&self, outside: &GeoLocation) -> Result<GeofenceStatus, ServiceError> {
        info!("🚶 Simulating geofence exit from center to outside");
        let center = self.geofence.center().clone();
        self.simulate_movement(&center, outside).await
    }

    pub async fn simulate_transition(&self, transition: &Transition) -> Result<GeofenceStatus, ServiceError> {
        info!("🚶 Simulating '{}'", transition.description());
        self.simulate_movement(transition.from(), transition.to()).await
    }

    pub async fn simulate_movement(&self, from: &GeoLocation, to: &GeoLocation) -> Result<GeofenceStatus, ServiceError> {
        self.simulate_movement_with(from, to, self.pacing.steps, self.pacing.step_delay).await
    }

    /// Applies every location of the movement plan in order, pausing `step_delay` after each one.
    /// Returns the status at the final location.
    #[instrument(skip_all, fields(from = %from, to = %to, steps = steps))]
    pub async fn simulate_movement_with(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        steps: u32,
        step_delay: Duration,
    ) -> Result<GeofenceStatus, ServiceError> {
        let plan = interpolate(from, to, steps)?;
        info!("🚶 Simulating movement from {} to {} in {} steps...", from, to, steps);

        for location in plan {
            self.set_location(&location).await?;
            debug!(inside = self.geofence.contains(&location), "🚶 {}", location);
            sleep(step_delay).await;
        }

        info!("🚶 Simulating movement... OK");
        Ok(self.status_of(to))
    }

    async fn set_location(&self, location: &GeoLocation) -> Result<(), ServiceError> {
        let strategy = ExponentialBackoff::from_millis(self.pacing.retry_base_ms)
            .factor(2)
            .max_delay(self.pacing.retry_max_delay)
            .map(jitter)
            .take(self.pacing.max_attempts.saturating_sub(1));

        Retry::spawn(strategy, move || async move {
            self.setter.set_location(location).await.map_err(|e| {
                warn!(setter = self.setter.id(), "⚠️ Unable to set location {}: {}", location, e);
                e
            })
        })
        .await?;

        sleep(self.pacing.settle_delay).await;
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Movement(#[from] MovementError),
    #[error(transparent)]
    Location(#[from] LocationError),
}
