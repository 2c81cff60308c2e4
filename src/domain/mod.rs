mod geo_location;
mod geofence;

pub use geo_location::GeoLocation;
pub use geofence::Geofence;
