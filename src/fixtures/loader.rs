use crate::fixtures::LocationFixture;
use crate::fixtures::named_locations::test_locations;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Loads location fixtures from a JSON array. A missing file falls back to the built-in
/// San Francisco table, a file that is present but unreadable is an error.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_location_fixtures(path: impl AsRef<Path>) -> Result<Vec<LocationFixture>, FixtureError> {
    let path = path.as_ref();
    info!("📁 Loading location fixtures...");

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("⚠️ '{}' not found, using the built-in test locations", path.display());
            return Ok(test_locations());
        }
        Err(err) => {
            return Err(FixtureError::Io {
                source: err,
                path: path.to_path_buf(),
            });
        }
    };

    let fixtures = parse_location_fixtures(&content).map_err(|e| FixtureError::Json {
        source: e,
        path: path.to_path_buf(),
    })?;

    info!("📁 Loading location fixtures... OK, {} loaded", fixtures.len());
    Ok(fixtures)
}

pub fn parse_location_fixtures(json: &str) -> Result<Vec<LocationFixture>, serde_json::Error> {
    serde_json::from_str::<Vec<LocationFixture>>(json)
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid fixture file '{}': {}", path.display(), source)]
    Json { source: serde_json::Error, path: PathBuf },
}
