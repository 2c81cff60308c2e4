mod interpolate;

pub use interpolate::{MovementError, MovementPlan, interpolate};
