use crate::domain::GeoLocation;

/// Mean earth radius. Treating the earth as a sphere keeps the error well below 0.5% for the
/// distances geofence tests work with.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Relative slack on the radius comparison so a point constructed on the boundary with [`offset`]
/// is not pushed outside by rounding in the degree round trip. Scaled by the radius, so a negative
/// radius stays negative and contains nothing.
///
/// [`offset`]: crate::engine::offset
pub const BOUNDARY_TOLERANCE: f64 = 1e-8;

/// Great-circle distance in meters using the Haversine formula. Altitude is ignored.
pub fn distance(a: &GeoLocation, b: &GeoLocation) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lon = (delta_lon / 2.0).sin();
    // Rounding can push h just above 1 for antipodal points
    let h = (sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lon * sin_lon).min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Whether `point` lies within `radius_m` of `center`. The boundary counts as inside.
pub fn is_within_radius(point: &GeoLocation, center: &GeoLocation, radius_m: f64) -> bool {
    distance(point, center) <= radius_m + radius_m.abs() * BOUNDARY_TOLERANCE
}
