use super::vincenty::AuxiliarySphere;
use super::*;

/// Bearings on the ellipsoid.
///
/// Each call iterates its own way to the longitude difference, λ, on the
/// auxiliary sphere, exactly as the distance computation in
/// [`Vincenty`] does, and evaluates the azimuth of departure from that.
/// Nothing is cached between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EllipsoidalBearing {
    ellps: Ellipsoid,
    convergence: Convergence,
}

impl EllipsoidalBearing {
    #[must_use]
    pub fn new(ellps: Ellipsoid) -> EllipsoidalBearing {
        EllipsoidalBearing {
            ellps,
            convergence: Convergence::default(),
        }
    }

    #[must_use]
    pub fn with_convergence(self, convergence: Convergence) -> EllipsoidalBearing {
        EllipsoidalBearing {
            convergence,
            ..self
        }
    }

    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellps
    }
}

impl BearingCalculator for EllipsoidalBearing {
    fn initial_bearing(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error> {
        let Some(aux) = AuxiliarySphere::solve(&self.ellps, &self.convergence, from, to)? else {
            return Err(Error::DegenerateInput(format!(
                "no direction between coincident points ({}, {})",
                from.latitude(),
                from.longitude()
            )));
        };
        let bearing = angular::normalize_bearing(aux.forward_azimuth().to_degrees());
        trace!("Initial bearing: {bearing}° after {} iterations", aux.iterations);
        Ok(bearing)
    }
}

// ----- Tests ---------------------------------------------------------------------
