use crate::domain::GeoLocation;
use crate::engine::EARTH_RADIUS_M;

/// Moves `origin` by a planar offset in meters using the equirectangular approximation.
/// Accuracy drops towards the poles as the longitude scale factor approaches zero.
pub fn offset(origin: &GeoLocation, north_m: f64, east_m: f64) -> GeoLocation {
    let delta_lat = north_m / EARTH_RADIUS_M;
    let delta_lon = east_m / (EARTH_RADIUS_M * origin.latitude().to_radians().cos());

    let moved = GeoLocation::new(
        origin.latitude() + delta_lat.to_degrees(),
        origin.longitude() + delta_lon.to_degrees(),
    );

    match origin.name() {
        Some(name) => moved.with_name(format!("{} (offset)", name)),
        None => moved,
    }
}
