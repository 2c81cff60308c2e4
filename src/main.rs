use geofence::app_config::AppConfig;
use geofence::device::LoggingLocationSetter;
use geofence::fixtures::load_location_fixtures;
use geofence::fixtures::named_locations::transitions;
use geofence::geofence_service::{FixtureOutcome, GeofenceService};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        radius_m = config.geofence().radius_m(),
        "✅  Loaded configuration, geofence centered at {}",
        config.geofence().center()
    );

    let fixtures = load_location_fixtures(config.fixtures().path()).await?;
    info!("✅  Loaded {} location fixtures", fixtures.len());

    let setter = Arc::new(LoggingLocationSetter::new());
    let service = GeofenceService::from_config(setter.clone(), &config);

    let outcomes = service.evaluate_fixtures(&fixtures);
    let mismatches = outcomes.iter().filter(|outcome| !outcome.matches_expectation()).collect::<Vec<&FixtureOutcome>>();

    for transition in transitions() {
        let status = service.simulate_transition(&transition).await?;
        info!(
            inside = status.inside,
            "✅  '{}' ended {:.2}m from the center",
            transition.description(),
            status.distance_from_center
        );
    }
    info!("✅  Applied {} locations to the dry-run device", setter.applied().len());

    if !mismatches.is_empty() {
        for outcome in &mismatches {
            warn!("❌ '{}' expected inside: {}, was inside: {}", outcome.name, outcome.expected_inside, outcome.status.inside);
        }
        return Err(format!("{} of {} fixtures did not match their expectation", mismatches.len(), outcomes.len()).into());
    }

    info!("🔥 {} checked {} fixtures, all as expected", env!("CARGO_PKG_NAME"), outcomes.len());
    Ok(())
}
