use crate::device::{LocationError, LocationSetter};
use crate::domain::GeoLocation;
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::{info, instrument};

/// A dry-run device: every location is logged and remembered instead of being sent to a session.
#[derive(Debug, Default)]
pub struct LoggingLocationSetter {
    applied: Mutex<Vec<GeoLocation>>,
}

pub const SETTER_ID: &str = "logging";

impl LoggingLocationSetter {
    pub fn new() -> Self {
        LoggingLocationSetter::default()
    }

    /// Locations applied so far, in order.
    pub fn applied(&self) -> Vec<GeoLocation> {
        self.applied.lock().map(|applied| applied.clone()).unwrap_or_default()
    }

    pub fn current(&self) -> Option<GeoLocation> {
        self.applied.lock().ok().and_then(|applied| applied.last().cloned())
    }
}

#[async_trait]
impl LocationSetter for LoggingLocationSetter {
    fn id(&self) -> &'static str {
        SETTER_ID
    }

    #[instrument(fields(setter = self.id()), skip_all)]
    async fn set_location(&self, location: &GeoLocation) -> Result<(), LocationError> {
        let mut applied = self
            .applied
            .lock()
            .map_err(|e| LocationError::SessionNotReady(e.to_string()))?;
        applied.push(location.clone());

        info!(altitude = ?location.altitude(), "📍 Location set to {}", location);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::named_locations::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn records_locations_in_order() -> Result<(), LocationError> {
        let setter = LoggingLocationSetter::new();

        setter.set_location(&GEOFENCE_CENTER).await?;
        setter.set_location(&OUTSIDE_150M).await?;

        assert_eq!(setter.applied(), vec![GEOFENCE_CENTER, OUTSIDE_150M]);
        assert_eq!(setter.current(), Some(OUTSIDE_150M));
        Ok(())
    }

    #[test]
    fn starts_without_a_location() {
        assert_eq!(LoggingLocationSetter::new().current(), None);
    }
}
