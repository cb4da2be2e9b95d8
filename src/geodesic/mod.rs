//! Geodesic distances and bearings on the ellipsoid.
//!
//! The two capabilities needed by the simplifier are expressed as the traits
//! [`DistanceCalculator`] and [`BearingCalculator`]. The ellipsoidal
//! implementations are [`Vincenty`](vincenty::Vincenty) and
//! [`EllipsoidalBearing`](bearing::EllipsoidalBearing), both following
//! [Vincenty (1975)](crate::Bibliography::Vin75).

pub mod bearing;
pub mod vincenty;

use crate::internal::*;

/// Anything that can tell the distance, in meters, between two coordinates.
pub trait DistanceCalculator {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error>;
}

/// Anything that can tell the direction, in degrees clockwise from true north
/// and within [0, 360), from one coordinate toward another.
pub trait BearingCalculator {
    /// The direction of departure from `from` toward `to`.
    fn initial_bearing(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error>;

    /// The direction of travel upon arrival at `to`: the initial bearing of the
    /// reverse problem, turned half a revolution.
    fn final_bearing(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error> {
        let reverse = self.initial_bearing(to, from)?;
        Ok(angular::normalize_bearing(reverse + 180.))
    }
}

impl<T: DistanceCalculator + ?Sized> DistanceCalculator for &T {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error> {
        (**self).distance(from, to)
    }
}

impl<T: BearingCalculator + ?Sized> BearingCalculator for &T {
    fn initial_bearing(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error> {
        (**self).initial_bearing(from, to)
    }

    fn final_bearing(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error> {
        (**self).final_bearing(from, to)
    }
}

// ----- Convergence policy --------------------------------------------------------

/// Stop criteria for the iterative solvers: iteration stops when an update
/// changes the iterated angle by less than `tolerance` radians, and fails
/// with [`Error::ConvergenceFailure`] after `max_iterations` updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for Convergence {
    fn default() -> Convergence {
        Convergence {
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

impl Convergence {
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Convergence, Error> {
        if !tolerance.is_finite() || tolerance <= 0. {
            return Err(Error::InvalidArgument(format!(
                "convergence tolerance must be positive, got {tolerance}"
            )));
        }
        if max_iterations == 0 {
            return Err(Error::InvalidArgument(
                "at least one iteration is needed".to_string(),
            ));
        }
        Ok(Convergence {
            tolerance,
            max_iterations,
        })
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

// ----- Free functions ------------------------------------------------------------

/// Geodesic distance in meters between two coordinates on `ellps`,
/// using the default [`Convergence`] policy.
pub fn distance(from: &Coordinate, to: &Coordinate, ellps: &Ellipsoid) -> Result<f64, Error> {
    Vincenty::new(*ellps).distance(from, to)
}

/// Initial bearing, in degrees within [0, 360), from `from` toward `to` on `ellps`.
pub fn initial_bearing(
    from: &Coordinate,
    to: &Coordinate,
    ellps: &Ellipsoid,
) -> Result<f64, Error> {
    EllipsoidalBearing::new(*ellps).initial_bearing(from, to)
}

/// Final bearing, in degrees within [0, 360), upon arrival at `to` from `from` on `ellps`.
pub fn final_bearing(from: &Coordinate, to: &Coordinate, ellps: &Ellipsoid) -> Result<f64, Error> {
    EllipsoidalBearing::new(*ellps).final_bearing(from, to)
}

// ----- Tests ---------------------------------------------------------------------
