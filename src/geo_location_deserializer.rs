use crate::domain::GeoLocation;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Locations read from configuration or fixture files are range-checked here. Values built in
/// code go straight to the engine unchecked.
impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            altitude_m: Option<f64>,
            name: Option<String>,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid location latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid location longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(GeoLocation::new(inner.latitude, inner.longitude).with_optional_parts(inner.altitude_m, inner.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_bare_location() {
        let location = serde_json::from_value::<GeoLocation>(json!({ "latitude": 51.86, "longitude": 4.358 })).unwrap();

        assert_eq!(location, GeoLocation::new(51.86, 4.358));
        assert_eq!(location.altitude(), None);
        assert_eq!(location.name(), None);
    }

    #[test]
    fn deserializes_altitude_and_name() {
        let location = serde_json::from_value::<GeoLocation>(json!({
            "latitude": 37.7749,
            "longitude": -122.4194,
            "altitude_m": 16.0,
            "name": "Geofence Center (SF)"
        }))
        .unwrap();

        assert_eq!(location.altitude(), Some(16.0));
        assert_eq!(location.name(), Some("Geofence Center (SF)"));
    }

    #[rstest]
    #[case::latitude_too_high(90.5, 0.0, "latitude: 90.5")]
    #[case::latitude_too_low(-91.0, 0.0, "latitude: -91")]
    #[case::longitude_too_high(0.0, 180.1, "longitude: 180.1")]
    #[case::longitude_too_low(0.0, -200.0, "longitude: -200")]
    fn rejects_out_of_range_coordinates(#[case] latitude: f64, #[case] longitude: f64, #[case] message: &str) {
        let result = serde_json::from_value::<GeoLocation>(json!({ "latitude": latitude, "longitude": longitude }));

        let err = result.unwrap_err().to_string();
        assert!(err.contains(message), "unexpected error: {}", err);
    }

    #[test]
    fn requires_both_coordinates() {
        let result = serde_json::from_value::<GeoLocation>(json!({ "latitude": 1.0 }));
        assert!(result.is_err());
    }
}
