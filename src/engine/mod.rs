mod distance;
mod offset;

pub use distance::{BOUNDARY_TOLERANCE, EARTH_RADIUS_M, distance, is_within_radius};
pub use offset::offset;
