use std::f64::consts::PI;

/// normalize arbitrary angles to [-π, π):
pub fn normalize_symmetric(angle: f64) -> f64 {
    let angle = (angle + PI).rem_euclid(2.0 * PI);
    angle - PI
}

/// Normalize an angle given in degrees to the compass range [0, 360).
pub fn normalize_bearing(degrees: f64) -> f64 {
    let bearing = degrees.rem_euclid(360.);
    // Tiny negative input rounds up to exactly 360
    if bearing >= 360. {
        return 0.;
    }
    bearing
}

/// The acute angle, in degrees and within [0, 180], between two headings.
/// Taken as the smaller of the two directed differences modulo 360.
pub fn bearing_deviation(first: f64, second: f64) -> f64 {
    let clockwise = (second - first).rem_euclid(360.);
    let counterclockwise = (first - second).rem_euclid(360.);
    clockwise.min(counterclockwise)
}

// ----- Tests ---------------------------------------------------------------------
