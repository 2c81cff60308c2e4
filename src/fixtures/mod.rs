mod loader;
mod location_fixture;
pub mod named_locations;

pub use loader::{FixtureError, load_location_fixtures, parse_location_fixtures};
pub use location_fixture::{LocationFixture, Transition};
