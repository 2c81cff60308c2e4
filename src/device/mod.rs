mod location_setter;
mod logging_location_setter;

pub use location_setter::{LocationError, LocationSetter};
pub use logging_location_setter::LoggingLocationSetter;
