mod constants;
mod latitudes;

use crate::Error;

/// An ellipsoid of revolution, given by its semimajor axis, *a*, and its
/// flattening, *f*. All other shape and size descriptors are derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid {
            a: 6_378_137.0,
            f: 1. / 298.257_223_563,
        }
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid. The semimajor axis must be positive, and the
    /// flattening must be in [0, 1).
    pub fn new(semimajor_axis: f64, flattening: f64) -> Result<Ellipsoid, Error> {
        if !semimajor_axis.is_finite() || semimajor_axis <= 0. {
            return Err(Error::InvalidArgument(format!(
                "semimajor axis must be positive, got {semimajor_axis}"
            )));
        }
        if !flattening.is_finite() || !(0. ..1.).contains(&flattening) {
            return Err(Error::InvalidArgument(format!(
                "flattening must be in [0, 1), got {flattening}"
            )));
        }
        Ok(Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        })
    }

    /// Ellipsoid from its semimajor and semiminor axes, *0 < b <= a*.
    pub fn from_axes(semimajor_axis: f64, semiminor_axis: f64) -> Result<Ellipsoid, Error> {
        if !semiminor_axis.is_finite() || semiminor_axis <= 0. || semiminor_axis > semimajor_axis
        {
            return Err(Error::InvalidArgument(format!(
                "semiminor axis must be in (0, {semimajor_axis}], got {semiminor_axis}"
            )));
        }
        Ellipsoid::new(
            semimajor_axis,
            (semimajor_axis - semiminor_axis) / semimajor_axis,
        )
    }

    /// Ellipsoid from its semimajor axis and inverse flattening.
    /// EPSG convention: zero inverse flattening indicates zero flattening.
    pub fn from_inverse_flattening(
        semimajor_axis: f64,
        inverse_flattening: f64,
    ) -> Result<Ellipsoid, Error> {
        if inverse_flattening == 0. {
            return Ellipsoid::new(semimajor_axis, 0.);
        }
        if !inverse_flattening.is_finite() || inverse_flattening <= 1. {
            return Err(Error::InvalidArgument(format!(
                "inverse flattening must exceed 1, got {inverse_flattening}"
            )));
        }
        Ellipsoid::new(semimajor_axis, 1. / inverse_flattening)
    }

    /// Predefined ellipsoid; built-in, or given as a string formatted
    /// (a, rf) tuple, e.g. "6378137, 298.25"
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        if let Some(&(_, a, rf, _)) = constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name)
        {
            return Ellipsoid::from_inverse_flattening(a, rf);
        }

        // Remove optional parenthesis
        let trimmed = name.trim();
        let trimmed = trimmed
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(trimmed);

        // The "semimajor, reciprocal-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = trimmed.split(',').collect::<Vec<_>>();
        if a_and_rf.len() == 2_usize {
            if let (Ok(a), Ok(rf)) = (
                a_and_rf[0].trim().parse::<f64>(),
                a_and_rf[1].trim().parse::<f64>(),
            ) {
                return Ellipsoid::from_inverse_flattening(a, rf);
            }
        }

        Err(Error::UnknownEllipsoid(String::from(name)))
    }

    /// Names and descriptions of the built-in ellipsoids
    pub fn builtins() -> impl Iterator<Item = (&'static str, &'static str)> {
        constants::ELLIPSOID_LIST
            .iter()
            .map(|&(name, _, _, description)| (name, description))
    }
}

impl Ellipsoid {
    // ----- Size ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The inverse flattening, *1/f*. Infinite for a sphere.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        1. / self.f
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }
}

// ----- Tests ---------------------------------------------------------------------
