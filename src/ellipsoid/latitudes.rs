use super::*;

// ----- Latitudes -------------------------------------------------------------
impl Ellipsoid {
    /// Geographic latitude, 𝜙, to reduced latitude, 𝛽 = atan((1 - f) tan 𝜙).
    /// Both in radians.
    #[must_use]
    pub fn latitude_geographic_to_reduced(&self, latitude: f64) -> f64 {
        latitude.tan().atan2(1. / (1. - self.f))
    }

    /// Reduced latitude, 𝛽, to geographic latitude, 𝜙
    #[must_use]
    pub fn latitude_reduced_to_geographic(&self, latitude: f64) -> f64 {
        latitude.tan().atan2(1. - self.f)
    }
}

// ----- Tests ---------------------------------------------------------------------
