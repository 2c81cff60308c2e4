use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A point on the earth's surface. Equality and hashing only look at the coordinates,
/// the name is a label for logging.
#[derive(Clone, Debug)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>, // In meters
    name: Option<Cow<'static, str>>,
}

impl GeoLocation {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation {
            latitude,
            longitude,
            altitude: None,
            name: None,
        }
    }

    pub const fn named(latitude: f64, longitude: f64, name: &'static str) -> Self {
        GeoLocation {
            latitude,
            longitude,
            altitude: None,
            name: Some(Cow::Borrowed(name)),
        }
    }

    pub fn with_name(self, name: impl Into<Cow<'static, str>>) -> Self {
        GeoLocation {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn with_altitude(self, altitude: f64) -> Self {
        GeoLocation {
            altitude: Some(altitude),
            ..self
        }
    }

    pub(crate) fn with_optional_parts(self, altitude: Option<f64>, name: Option<String>) -> Self {
        GeoLocation {
            altitude,
            name: name.map(Cow::Owned),
            ..self
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Great-circle distance to `other` in meters, see [`crate::engine::distance`].
    pub fn distance_to(&self, other: &GeoLocation) -> f64 {
        crate::engine::distance(self, other)
    }

    /// Whether this location lies inside the circle around `center`, boundary included.
    pub fn is_within_radius(&self, center: &GeoLocation, radius_m: f64) -> bool {
        crate::engine::is_within_radius(self, center, radius_m)
    }

    pub fn offset(&self, north_m: f64, east_m: f64) -> GeoLocation {
        crate::engine::offset(self, north_m, east_m)
    }
}

impl PartialEq for GeoLocation {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.latitude) == OrderedFloat(other.latitude) && OrderedFloat(self.longitude) == OrderedFloat(other.longitude)
    }
}

impl Eq for GeoLocation {}

impl Hash for GeoLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.latitude).hash(state);
        OrderedFloat(self.longitude).hash(state);
    }
}

impl Display for GeoLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({:.6}, {:.6})", name, self.latitude, self.longitude),
            None => write!(f, "({:.6}, {:.6})", self.latitude, self.longitude),
        }
    }
}
