//! Locations around the San Francisco test geofence (100 m radius).

use crate::domain::GeoLocation;
use crate::fixtures::{LocationFixture, Transition};

pub const GEOFENCE_CENTER: GeoLocation = GeoLocation::named(37.7749, -122.4194, "Geofence Center (SF)");
pub const INSIDE_50M: GeoLocation = GeoLocation::named(37.7753, -122.4194, "Inside 50m");
pub const ON_BOUNDARY_100M: GeoLocation = GeoLocation::named(37.77579, -122.4194, "On Boundary 100m");
pub const OUTSIDE_150M: GeoLocation = GeoLocation::named(37.7763, -122.4194, "Outside 150m");
pub const OUTSIDE_200M: GeoLocation = GeoLocation::named(37.7767, -122.4194, "Outside 200m");
pub const NEW_YORK: GeoLocation = GeoLocation::named(40.7128, -74.0060, "New York");

pub const DEFAULT_RADIUS_M: f64 = 100.0;

pub fn test_locations() -> Vec<LocationFixture> {
    vec![
        LocationFixture::new(GEOFENCE_CENTER, "Center", true),
        LocationFixture::new(INSIDE_50M, "Inside 50m", true),
        LocationFixture::new(ON_BOUNDARY_100M, "On Boundary", true),
        LocationFixture::new(OUTSIDE_150M, "Outside 150m", false),
        LocationFixture::new(OUTSIDE_200M, "Outside 200m", false),
    ]
}

pub fn transitions() -> Vec<Transition> {
    vec![
        Transition::new(OUTSIDE_150M, GEOFENCE_CENTER, "Entry from outside"),
        Transition::new(GEOFENCE_CENTER, OUTSIDE_150M, "Exit to 150m"),
        Transition::new(INSIDE_50M, OUTSIDE_200M, "Exit to 200m"),
    ]
}
