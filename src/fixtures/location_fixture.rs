use crate::domain::GeoLocation;
use serde::{Deserialize, Deserializer};

/// A location together with the containment result a test expects for it.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationFixture {
    location: GeoLocation,
    name: String,
    expected_inside: bool,
}

impl LocationFixture {
    pub fn new(location: GeoLocation, name: impl Into<String>, expected_inside: bool) -> Self {
        LocationFixture {
            location,
            name: name.into(),
            expected_inside,
        }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected_inside(&self) -> bool {
        self.expected_inside
    }
}

impl<'de> Deserialize<'de> for LocationFixture {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Inner {
            #[serde(flatten)]
            location: GeoLocation,
            expected_inside: bool,
        }

        let inner = Inner::deserialize(deserializer)?;
        let name = inner.location.name().unwrap_or("unnamed").to_owned();
        Ok(LocationFixture::new(inner.location, name, inner.expected_inside))
    }
}

/// A movement between two locations that crosses the geofence boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    from: GeoLocation,
    to: GeoLocation,
    description: String,
}

impl Transition {
    pub fn new(from: GeoLocation, to: GeoLocation, description: impl Into<String>) -> Self {
        Transition {
            from,
            to,
            description: description.into(),
        }
    }

    pub fn from(&self) -> &GeoLocation {
        &self.from
    }

    pub fn to(&self) -> &GeoLocation {
        &self.to
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
