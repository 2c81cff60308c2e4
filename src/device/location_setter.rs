use crate::domain::GeoLocation;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Applies a location to a running device session.
#[async_trait]
pub trait LocationSetter: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    async fn set_location(&self, location: &GeoLocation) -> Result<(), LocationError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("device session is not ready: {0}")]
    SessionNotReady(String),
}
