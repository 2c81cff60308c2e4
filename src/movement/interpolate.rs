use crate::domain::GeoLocation;
use std::iter::FusedIterator;
use thiserror::Error;

/// Plans a straight movement from `from` to `to` in `steps` equal increments of latitude and
/// longitude. The plan yields `steps + 1` locations, both endpoints included.
pub fn interpolate(from: &GeoLocation, to: &GeoLocation, steps: u32) -> Result<MovementPlan, MovementError> {
    if steps < 1 {
        return Err(MovementError::InvalidArgument(format!("steps must be at least 1, got {}", steps)));
    }

    Ok(MovementPlan {
        from: from.clone(),
        to: to.clone(),
        steps,
        next: 0,
        end: u64::from(steps) + 1,
    })
}

/// Lazily produced locations of a movement. Cloning a plan restarts from the clone's position,
/// and calling [`interpolate`] again always reproduces the same sequence.
#[derive(Clone, Debug)]
pub struct MovementPlan {
    from: GeoLocation,
    to: GeoLocation,
    steps: u32,
    next: u64,
    end: u64,
}

impl MovementPlan {
    pub fn origin(&self) -> &GeoLocation {
        &self.from
    }

    pub fn destination(&self) -> &GeoLocation {
        &self.to
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// The location at step `index`, or `None` past the end of the plan.
    pub fn location_at(&self, index: u64) -> Option<GeoLocation> {
        let steps = u64::from(self.steps);
        if index > steps {
            return None;
        }

        let (latitude, longitude) = if index == 0 {
            (self.from.latitude(), self.from.longitude())
        } else if index == steps {
            (self.to.latitude(), self.to.longitude())
        } else {
            let fraction = |start: f64, end: f64| start + (end - start) * index as f64 / steps as f64;
            (
                fraction(self.from.latitude(), self.to.latitude()),
                fraction(self.from.longitude(), self.to.longitude()),
            )
        };

        Some(GeoLocation::new(latitude, longitude).with_name(format!("Step {}", index)))
    }
}

impl Iterator for MovementPlan {
    type Item = GeoLocation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let location = self.location_at(self.next);
        self.next += 1;
        location
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for MovementPlan {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        self.location_at(self.end)
    }
}

impl ExactSizeIterator for MovementPlan {}

impl FusedIterator for MovementPlan {}

#[derive(Error, Debug, PartialEq)]
pub enum MovementError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::named_locations::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yields_steps_plus_one_locations() -> Result<(), MovementError> {
        let plan = interpolate(&OUTSIDE_150M, &GEOFENCE_CENTER, 5)?;

        assert_eq!(plan.len(), 6);
        assert_eq!(plan.count(), 6);
        Ok(())
    }

    #[test]
    fn starts_and_ends_at_the_exact_endpoints() -> Result<(), MovementError> {
        let a = GeoLocation::new(37.7763, -122.4194);
        let b = GeoLocation::new(37.7749, -122.4194);
        let locations = interpolate(&a, &b, 5)?.collect::<Vec<_>>();

        assert_eq!(locations[0].latitude(), a.latitude());
        assert_eq!(locations[0].longitude(), a.longitude());
        assert_eq!(locations[5].latitude(), b.latitude());
        assert_eq!(locations[5].longitude(), b.longitude());
        Ok(())
    }

    #[test]
    fn is_deterministic() -> Result<(), MovementError> {
        let first = interpolate(&INSIDE_50M, &NEW_YORK, 5)?.collect::<Vec<_>>();
        let second = interpolate(&INSIDE_50M, &NEW_YORK, 5)?.collect::<Vec<_>>();

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn cloned_plans_restart_independently() -> Result<(), MovementError> {
        let mut plan = interpolate(&GEOFENCE_CENTER, &OUTSIDE_200M, 4)?;
        let fresh = plan.clone();
        plan.next();

        assert_eq!(plan.len(), 4);
        assert_eq!(fresh.len(), 5);
        assert_eq!(fresh.collect::<Vec<_>>()[0], GEOFENCE_CENTER);
        Ok(())
    }

    #[test]
    fn midpoint_of_a_longitude_run_is_exact() -> Result<(), MovementError> {
        let locations = interpolate(&GeoLocation::new(0.0, 0.0), &GeoLocation::new(0.0, 10.0), 10)?.collect::<Vec<_>>();

        assert_eq!(locations[5].latitude(), 0.0);
        assert_eq!(locations[5].longitude(), 5.0);
        Ok(())
    }

    #[test]
    fn intermediate_locations_are_named_by_step() -> Result<(), MovementError> {
        let names = interpolate(&GEOFENCE_CENTER, &OUTSIDE_150M, 2)?
            .map(|location| location.name().map(str::to_owned))
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            vec![Some("Step 0".to_string()), Some("Step 1".to_string()), Some("Step 2".to_string())]
        );
        Ok(())
    }

    #[test]
    fn interpolated_locations_have_no_altitude() -> Result<(), MovementError> {
        let from = GeoLocation::new(0.0, 0.0).with_altitude(10.0);
        let to = GeoLocation::new(1.0, 1.0).with_altitude(20.0);

        assert!(interpolate(&from, &to, 3)?.all(|location| location.altitude().is_none()));
        Ok(())
    }

    #[test]
    fn can_be_walked_backwards() -> Result<(), MovementError> {
        let forward = interpolate(&GEOFENCE_CENTER, &OUTSIDE_150M, 5)?.collect::<Vec<_>>();
        let mut backward = interpolate(&GEOFENCE_CENTER, &OUTSIDE_150M, 5)?.rev().collect::<Vec<_>>();
        backward.reverse();

        assert_eq!(forward, backward);
        Ok(())
    }

    #[test]
    fn single_step_yields_only_the_endpoints() -> Result<(), MovementError> {
        let locations = interpolate(&GEOFENCE_CENTER, &NEW_YORK, 1)?.collect::<Vec<_>>();

        assert_eq!(locations, vec![GEOFENCE_CENTER, NEW_YORK]);
        Ok(())
    }

    #[test]
    fn location_at_is_none_past_the_end() -> Result<(), MovementError> {
        let plan = interpolate(&GEOFENCE_CENTER, &NEW_YORK, 3)?;

        assert!(plan.location_at(3).is_some());
        assert!(plan.location_at(4).is_none());
        Ok(())
    }

    #[test]
    fn keeps_its_endpoints_and_step_count() -> Result<(), MovementError> {
        let mut plan = interpolate(&OUTSIDE_150M, &GEOFENCE_CENTER, 5)?;
        plan.by_ref().take(3).for_each(drop);

        assert_eq!(plan.origin(), &OUTSIDE_150M);
        assert_eq!(plan.origin().name(), Some("Outside 150m"));
        assert_eq!(plan.destination(), &GEOFENCE_CENTER);
        assert_eq!(plan.steps(), 5);
        Ok(())
    }

    #[test]
    fn zero_steps_is_rejected() {
        let result = interpolate(&GEOFENCE_CENTER, &OUTSIDE_150M, 0);

        assert!(matches!(result, Err(MovementError::InvalidArgument(_))));
    }
}
