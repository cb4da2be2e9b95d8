//! Bearing and distance guided simplification of polylines and polygons.
//!
//! A single greedy pass from the first to the last point. A point is
//! retained when it lies more than `distance_limit` meters from the last
//! retained point, or when the path turns by more than `bearing_angle`
//! degrees there, and the turn is spread over enough distance to matter.
//! Small absolute drift needs twice the turn to justify retention.

use crate::internal::*;

/// Below this combined length (meters) of the two segments meeting at a
/// point, only a turn of twice the bearing angle retains the point.
const SHORT_TURN: f64 = 5.;

/// Below this length (meters), a turn of the bearing angle is not enough.
const LONG_TURN: f64 = 10.;

/// The two thresholds of the simplifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    bearing_angle: f64,
    distance_limit: f64,
}

impl Tolerances {
    /// `bearing_angle` in degrees, finite and non-negative.
    /// `distance_limit` in meters, finite and positive.
    pub fn new(bearing_angle: f64, distance_limit: f64) -> Result<Tolerances, Error> {
        if !bearing_angle.is_finite() || bearing_angle < 0. {
            return Err(Error::InvalidArgument(format!(
                "bearing angle must be a non-negative number of degrees, got {bearing_angle}"
            )));
        }
        if !distance_limit.is_finite() || distance_limit <= 0. {
            return Err(Error::InvalidArgument(format!(
                "distance limit must be a positive number of meters, got {distance_limit}"
            )));
        }
        Ok(Tolerances {
            bearing_angle,
            distance_limit,
        })
    }

    #[must_use]
    pub fn bearing_angle(&self) -> f64 {
        self.bearing_angle
    }

    #[must_use]
    pub fn distance_limit(&self) -> f64 {
        self.distance_limit
    }

    fn short_turn(&self) -> f64 {
        SHORT_TURN.min(self.distance_limit / 3.)
    }

    fn long_turn(&self) -> f64 {
        LONG_TURN.min(self.distance_limit / 3.)
    }
}

/// Simplification driven by a distance and a bearing calculator. The
/// default uses [`Vincenty`] and [`EllipsoidalBearing`] on the default
/// ellipsoid.
///
/// ```rust
/// use geoline::prelude::*;
/// let line = Geometry::Polyline(vec![
///     Coordinate::new(55.0000, 12.)?,
///     Coordinate::new(55.0005, 12.)?,
///     Coordinate::new(55.0010, 12.)?,
/// ]);
/// let simplifier = Simplifier::with_ellipsoid(Ellipsoid::named("GRS80")?);
/// let simplified = simplifier.simplify(&line, 5., 1000.)?;
/// assert_eq!(simplified.len(), 2);
/// # Ok::<(), geoline::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Simplifier<D = Vincenty, B = EllipsoidalBearing> {
    distance: D,
    bearing: B,
}

impl Default for Simplifier {
    fn default() -> Simplifier {
        Simplifier::with_ellipsoid(Ellipsoid::default())
    }
}

impl Simplifier {
    /// The ellipsoidal calculators, both bound to `ellps`
    #[must_use]
    pub fn with_ellipsoid(ellps: Ellipsoid) -> Simplifier {
        Simplifier::new(Vincenty::new(ellps), EllipsoidalBearing::new(ellps))
    }
}

impl<D: DistanceCalculator, B: BearingCalculator> Simplifier<D, B> {
    #[must_use]
    pub fn new(distance: D, bearing: B) -> Simplifier<D, B> {
        Simplifier { distance, bearing }
    }

    /// Simplify a polyline or polygon, returning a new geometry of the same
    /// kind. `bearing_angle` in degrees, `distance_limit` in meters.
    /// Points are rejected with [`Error::InvalidArgument`].
    pub fn simplify(
        &self,
        geometry: &Geometry,
        bearing_angle: f64,
        distance_limit: f64,
    ) -> Result<Geometry, Error> {
        let tolerances = Tolerances::new(bearing_angle, distance_limit)?;
        self.simplify_with(geometry, &tolerances)
    }

    /// As [`simplify`](Simplifier::simplify), with pre-validated tolerances
    pub fn simplify_with(
        &self,
        geometry: &Geometry,
        tolerances: &Tolerances,
    ) -> Result<Geometry, Error> {
        let points = match geometry {
            Geometry::Polyline(points) => self.simplify_points(points, false, tolerances)?,
            Geometry::Polygon(points) => self.simplify_points(points, true, tolerances)?,
            Geometry::Point(_) => {
                return Err(Error::InvalidArgument(
                    "only polylines and polygons can be simplified".to_string(),
                ))
            }
        };

        let simplified = match geometry.kind() {
            GeometryKind::Polyline => Geometry::Polyline(points),
            GeometryKind::Polygon => Geometry::Polygon(points),
            GeometryKind::Point => {
                return Err(Error::InvariantViolation(
                    "point geometry reached the simplifier output".to_string(),
                ))
            }
        };
        if simplified.kind() != geometry.kind() || simplified.len() > geometry.len() {
            return Err(Error::InvariantViolation(format!(
                "{:?} of {} points simplified into {:?} of {} points",
                geometry.kind(),
                geometry.len(),
                simplified.kind(),
                simplified.len()
            )));
        }
        Ok(simplified)
    }

    // The greedy pass proper. `closed` tells whether the points form a ring
    fn simplify_points(
        &self,
        points: &[Coordinate],
        closed: bool,
        tolerances: &Tolerances,
    ) -> Result<Vec<Coordinate>, Error> {
        let n = points.len();
        if n < 3 || (closed && n == 3) {
            return Ok(points.to_vec());
        }

        let mut retained = Vec::with_capacity(n);
        retained.push(points[0]);
        let mut last = 0;

        for i in 1..n {
            // Endpoint preservation
            if i == n - 1 {
                retained.push(points[i]);
                break;
            }

            // Hard bound on the drift from the last retained point
            let from_last = self.distance.distance(&points[last], &points[i])?;
            if from_last > tolerances.distance_limit {
                retained.push(points[i]);
                last = i;
                continue;
            }

            let (previous, current, next) = (&points[i - 1], &points[i], &points[i + 1]);
            let old_segment_length = self.distance.distance(previous, current)?;
            let new_segment_length = self.distance.distance(current, next)?;

            // A segment of zero length has no direction, hence does not turn the path
            let deviation = if old_segment_length == 0. || new_segment_length == 0. {
                0.
            } else {
                let incoming = self.bearing.initial_bearing(previous, current)?;
                let outgoing = self.bearing.initial_bearing(current, next)?;
                angular::bearing_deviation(incoming, outgoing)
            };

            let distance_both = old_segment_length + new_segment_length;
            let distance_from_last = from_last + new_segment_length;
            let angle = tolerances.bearing_angle;

            let sharp_turn = distance_both > tolerances.short_turn() && deviation > 2. * angle;
            let turn = distance_both > tolerances.long_turn() && deviation > angle;
            let drifting_turn = distance_from_last > tolerances.long_turn() && deviation > angle;

            if sharp_turn || turn || drifting_turn {
                trace!("Retaining point {i}: deviation {deviation}°");
                retained.push(points[i]);
                last = i;
            }
        }

        debug!(
            "Simplified {} {} points into {}",
            n,
            if closed { "ring" } else { "path" },
            retained.len()
        );
        Ok(retained)
    }
}

/// Simplify `geometry` on the default ellipsoid. See [`Simplifier`].
pub fn simplify(
    geometry: &Geometry,
    bearing_angle: f64,
    distance_limit: f64,
) -> Result<Geometry, Error> {
    Simplifier::with_ellipsoid(Ellipsoid::default()).simplify(
        geometry,
        bearing_angle,
        distance_limit,
    )
}

// ----- Tests ---------------------------------------------------------------------
