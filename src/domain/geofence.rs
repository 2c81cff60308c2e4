use crate::domain::GeoLocation;
use crate::engine;
use serde::Deserialize;

/// A circular region around `center`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Geofence {
    center: GeoLocation,
    radius_m: f64,
}

impl Geofence {
    pub fn new(center: GeoLocation, radius_m: f64) -> Self {
        Geofence { center, radius_m }
    }

    pub fn center(&self) -> &GeoLocation {
        &self.center
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn distance_from_center(&self, point: &GeoLocation) -> f64 {
        engine::distance(point, &self.center)
    }

    pub fn contains(&self, point: &GeoLocation) -> bool {
        engine::is_within_radius(point, &self.center, self.radius_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::named_locations::*;
    use serde_json::json;

    #[test]
    fn contains_delegates_to_the_radius_check() {
        let geofence = Geofence::new(GEOFENCE_CENTER, 100.0);

        assert!(geofence.contains(&INSIDE_50M));
        assert!(geofence.contains(&ON_BOUNDARY_100M));
        assert!(!geofence.contains(&OUTSIDE_150M));
        assert!(geofence.distance_from_center(&OUTSIDE_200M) > 200.0);
    }

    #[test]
    fn deserializes_center_and_radius() {
        let geofence = serde_json::from_value::<Geofence>(json!({
            "center": { "latitude": 37.7749, "longitude": -122.4194 },
            "radius_m": 150.0
        }))
        .unwrap();

        assert_eq!(geofence, Geofence::new(GeoLocation::new(37.7749, -122.4194), 150.0));
    }
}
