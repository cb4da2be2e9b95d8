use crate::Error;
use std::str::FromStr;

/// A geographical position: latitude and longitude, in degrees.
///
/// Immutable once constructed. The constructor rejects non-finite and out of
/// range input, so any `Coordinate` in circulation is within
/// [-90, 90] × [-180, 180]. The ellipsoid is not part of the coordinate: it is
/// bound to the solvers operating on it.
#[derive(Debug, Default, PartialEq, PartialOrd, Copy, Clone)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// A coordinate from latitude and longitude in degrees.
    ///
    /// ```rust
    /// use geoline::Coordinate;
    /// let cph = Coordinate::new(55.676, 12.568)?;
    /// assert_eq!(cph.latitude(), 55.676);
    /// assert!(Coordinate::new(91., 0.).is_err());
    /// # Ok::<(), geoline::Error>(())
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Coordinate, Error> {
        if !latitude.is_finite() || !(-90. ..=90.).contains(&latitude) {
            return Err(Error::InvalidArgument(format!(
                "latitude must be in [-90, 90], got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180. ..=180.).contains(&longitude) {
            return Err(Error::InvalidArgument(format!(
                "longitude must be in [-180, 180], got {longitude}"
            )));
        }
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude and longitude, converted to radians
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// Parse "lat lon" or "lat, lon" (degrees)
impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Coordinate, Error> {
        let elements = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|e| !e.is_empty())
            .collect::<Vec<_>>();
        if elements.len() != 2 {
            return Err(Error::InvalidArgument(format!(
                "expected 'latitude longitude', got '{s}'"
            )));
        }
        let mut values = [0.; 2];
        for (value, element) in values.iter_mut().zip(elements) {
            *value = element
                .parse::<f64>()
                .map_err(|_| Error::InvalidArgument(format!("not a number: '{element}'")))?;
        }
        Coordinate::new(values[0], values[1])
    }
}

// ----- Tests ---------------------------------------------------------------------
