use super::*;

/// Geodesic distances on the ellipsoid by the algorithm of Vincenty
/// ([1975](crate::Bibliography::Vin75)), with updates by the same author
/// ([1976](crate::Bibliography::Vin76)).
///
/// The Vincenty algorithm is relatively simple to implement, but for
/// near-antipodal cases, it suffers from lack of convergence. In that case,
/// [`Error::ConvergenceFailure`] is returned: the result is never silently
/// approximated. Karney ([2013](crate::Bibliography::Kar13)) presented an
/// algorithm which converges everywhere.
///
/// # Examples
///
/// ```rust
/// // Compute the distance between Copenhagen and Paris
/// use geoline::prelude::*;
/// let ellps = Ellipsoid::named("WGS84")?;
/// let cph = Coordinate::new(55., 12.)?;
/// let par = Coordinate::new(49., 2.)?;
/// let d = Vincenty::new(ellps).distance(&cph, &par)?;
/// assert!((d - 956_066.231_958).abs() < 1e-5);
/// # Ok::<(), geoline::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vincenty {
    ellps: Ellipsoid,
    convergence: Convergence,
}

/// Everything the inverse problem tells about the geodesic between two points.
/// Bearings are `None` for coincident points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// Meters along the geodesic
    pub distance: f64,
    /// Degrees, direction of departure
    pub initial_bearing: Option<f64>,
    /// Degrees, direction of travel upon arrival
    pub final_bearing: Option<f64>,
    /// Number of updates of λ needed to converge
    pub iterations: usize,
}

impl Vincenty {
    #[must_use]
    pub fn new(ellps: Ellipsoid) -> Vincenty {
        Vincenty {
            ellps,
            convergence: Convergence::default(),
        }
    }

    #[must_use]
    pub fn with_convergence(self, convergence: Convergence) -> Vincenty {
        Vincenty {
            convergence,
            ..self
        }
    }

    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellps
    }

    /// The inverse geodetic problem: distance and bearings between two points.
    #[allow(non_snake_case)] // allow math-like notation
    pub fn inverse(&self, from: &Coordinate, to: &Coordinate) -> Result<InverseSolution, Error> {
        let Some(aux) = AuxiliarySphere::solve(&self.ellps, &self.convergence, from, to)? else {
            return Ok(InverseSolution {
                distance: 0.,
                initial_bearing: None,
                final_bearing: None,
                iterations: 0,
            });
        };

        // A and B according to Vincenty's update (1976)
        let us = aux.aacos2 * self.ellps.second_eccentricity_squared();
        let t = (1. + us).sqrt();
        let k1 = (t - 1.) / (t + 1.);
        let A = (1. + k1 * k1 / 4.) / (1. - k1);
        let B = k1 * (1. - 3. * k1 * k1 / 8.);

        // The difference between the dist on the aux sphere and on the ellipsoid.
        let ssmx2cos = aux.ssmx2cos;
        let t1 = -1. + 2. * ssmx2cos * ssmx2cos;
        let t2 = -3. + 4. * aux.sssin * aux.sssin;
        let t3 = -3. + 4. * ssmx2cos * ssmx2cos;
        let dss =
            B * aux.sssin * (ssmx2cos + B / 4. * (aux.sscos * t1 - B / 6. * ssmx2cos * t2 * t3));

        let s = self.ellps.semiminor_axis() * A * (aux.ss - dss);
        trace!("Vincenty inverse: {s} m after {} iterations", aux.iterations);

        Ok(InverseSolution {
            distance: s,
            initial_bearing: Some(angular::normalize_bearing(
                aux.forward_azimuth().to_degrees(),
            )),
            final_bearing: Some(angular::normalize_bearing(aux.return_azimuth().to_degrees())),
            iterations: aux.iterations,
        })
    }

    /// The direct geodetic problem: The destination reached when travelling
    /// `distance` meters from `from`, initially heading `bearing` degrees.
    /// Returns the destination and the final bearing (degrees) there.
    #[allow(non_snake_case)]
    pub fn destination(
        &self,
        from: &Coordinate,
        bearing: f64,
        distance: f64,
    ) -> Result<(Coordinate, f64), Error> {
        if !bearing.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "bearing must be finite, got {bearing}"
            )));
        }
        if !distance.is_finite() || distance < 0. {
            return Err(Error::InvalidArgument(format!(
                "distance must be non-negative, got {distance}"
            )));
        }

        let f = self.ellps.flattening();
        let (B1, L1) = from.to_radians();
        let azimuth = bearing.to_radians();

        // The latitude of P1 projected onto the auxiliary sphere
        let U1 = self.ellps.latitude_geographic_to_reduced(B1);
        let U1cos = U1.cos();
        let U1sin = U1.sin();

        // σ_1, here ss1, is the angular distance on the aux sphere from P1 to equator
        let azicos = azimuth.cos();
        let azisin = azimuth.sin();
        let ss1 = U1.tan().atan2(azicos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = U1cos * azisin;
        let aacos2 = 1. - aasin * aasin;

        // A and B according to Vincenty's update (1976)
        let us = aacos2 * self.ellps.second_eccentricity_squared();
        let t = (1. + us).sqrt();
        let k1 = (t - 1.) / (t + 1.);
        let A = (1. + k1 * k1 / 4.) / (1. - k1);
        let B = k1 * (1. - 3. * k1 * k1 / 8.);

        // Initial estimate for σ, the angular distance on the auxiliary sphere
        let b = self.ellps.semiminor_axis();
        let mut ss = distance / (b * A);
        let mut t1 = 0.;
        let mut ssmx2cos = 0.;
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.convergence.max_iterations() {
            iterations += 1;

            // 2σ_m, where σ_m is the latitude of the midpoint on the aux sphere
            let ssmx2 = 2. * ss1 + ss;

            // dσ = dss: The correction term for σ
            ssmx2cos = ssmx2.cos();
            let ssmx2cos2 = ssmx2cos * ssmx2cos;
            t1 = -1. + 2. * ssmx2cos2;
            let t2 = -3. + 4. * ssmx2cos2;
            let sssin = ss.sin();
            let sscos = ss.cos();
            let t3 = -3. + 4. * sssin * sssin;
            let dss = B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3));

            let prevss = ss;
            ss = distance / (b * A) + dss;

            // Stop criterion: Last update of σ made little difference
            if (prevss - ss).abs() < self.convergence.tolerance() {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!("Vincenty direct: no convergence after {iterations} iterations");
            return Err(Error::ConvergenceFailure { iterations });
        }

        // B2: Latitude of destination
        let sssin = ss.sin();
        let sscos = ss.cos();
        let t4 = U1cos * azicos * sssin;
        let t5 = U1cos * azicos * sscos;
        let B2 = (U1sin * sscos + t4).atan2((1. - f) * aasin.hypot(U1sin * sssin - t5));

        // L2: Longitude of destination
        let ll = (sssin * azisin).atan2(U1cos * sscos - U1sin * sssin * azicos);
        let C = (4. + f * (4. - 3. * aacos2)) * f * aacos2 / 16.;
        let L = ll - (1. - C) * f * aasin * (ss + C * sssin * (ssmx2cos + C * sscos * t1));
        let L2 = angular::normalize_symmetric(L1 + L);

        // Return azimuth
        let aa2 = aasin.atan2(U1cos * sscos * azicos - U1sin * sssin);

        let destination = Coordinate::new(
            B2.to_degrees().clamp(-90., 90.),
            L2.to_degrees().clamp(-180., 180.),
        )?;
        Ok((destination, angular::normalize_bearing(aa2.to_degrees())))
    }
}

impl DistanceCalculator for Vincenty {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, Error> {
        Ok(self.inverse(from, to)?.distance)
    }
}

// ----- The auxiliary sphere ------------------------------------------------------

/// The converged state of the λ-iteration of the inverse problem.
/// Variable naming follows the (ASCII-fied) notation of Vincenty:
/// `ss` is σ, `aa` is α, `ll` is λ, `ssmx2` is 2σₘ.
#[derive(Debug)]
pub(crate) struct AuxiliarySphere {
    pub u1sin: f64,
    pub u1cos: f64,
    pub u2sin: f64,
    pub u2cos: f64,
    pub llsin: f64,
    pub llcos: f64,
    pub ss: f64,
    pub sssin: f64,
    pub sscos: f64,
    pub aacos2: f64,
    pub ssmx2cos: f64,
    pub iterations: usize,
}

impl AuxiliarySphere {
    /// Iterate λ, the longitude difference on the auxiliary sphere, until it
    /// settles. `None` if the points coincide.
    #[allow(non_snake_case)]
    pub(crate) fn solve(
        ellps: &Ellipsoid,
        convergence: &Convergence,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<Option<AuxiliarySphere>, Error> {
        let f = ellps.flattening();
        let (B1, L1) = from.to_radians();
        let (B2, L2) = to.to_radians();
        let L = angular::normalize_symmetric(L2 - L1);

        // Identical points, or the same pole reached along different meridians
        if B1 == B2 && (L.abs() < 1e-15 || from.latitude().abs() == 90.) {
            return Ok(None);
        }

        let U1 = ellps.latitude_geographic_to_reduced(B1);
        let U2 = ellps.latitude_geographic_to_reduced(B2);
        let (U1sin, U1cos) = U1.sin_cos();
        let (U2sin, U2cos) = U2.sin_cos();

        // Initial estimate for λ, the longitude on the auxiliary sphere
        let mut ll = L;

        for i in 1..=convergence.max_iterations() {
            // σ, the angular separation between the points
            let (llsin, llcos) = ll.sin_cos();
            let t1 = U2cos * llsin;
            let t2 = U1cos * U2sin - U1sin * U2cos * llcos;
            let sssin = t1.hypot(t2);
            let sscos = U1sin * U2sin + U1cos * U2cos * llcos;
            let ss = sssin.atan2(sscos);

            // α, the forward azimuth of the geodesic at equator
            let aasin = U1cos * U2cos * llsin / sssin;
            let aacos2 = 1. - aasin * aasin;

            // cosine of 2 times σ_m, the angular separation from the midpoint to the equator.
            // Along the equator, cos²α vanishes, and so does the term
            let ssmx2cos = if aacos2 == 0. {
                0.
            } else {
                sscos - 2. * U1sin * U2sin / aacos2
            };
            let C = (4. + f * (4. - 3. * aacos2)) * f * aacos2 / 16.;
            let ll_next = L
                + (1. - C)
                    * f
                    * aasin
                    * (ss + C * sssin * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));

            // σ = 0 for distinct points means antipodal: no hope
            if !ll_next.is_finite() {
                warn!("Vincenty inverse: degenerate iteration at step {i}");
                return Err(Error::ConvergenceFailure { iterations: i });
            }

            let dl = (ll - ll_next).abs();
            ll = ll_next;
            if dl < convergence.tolerance() {
                let (llsin, llcos) = ll.sin_cos();
                return Ok(Some(AuxiliarySphere {
                    u1sin: U1sin,
                    u1cos: U1cos,
                    u2sin: U2sin,
                    u2cos: U2cos,
                    llsin,
                    llcos,
                    ss,
                    sssin,
                    sscos,
                    aacos2,
                    ssmx2cos,
                    iterations: i,
                }));
            }
        }

        warn!(
            "Vincenty inverse: no convergence after {} iterations",
            convergence.max_iterations()
        );
        Err(Error::ConvergenceFailure {
            iterations: convergence.max_iterations(),
        })
    }

    /// Azimuth of departure, radians
    pub(crate) fn forward_azimuth(&self) -> f64 {
        (self.u2cos * self.llsin)
            .atan2(self.u1cos * self.u2sin - self.u1sin * self.u2cos * self.llcos)
    }

    /// Azimuth of arrival, radians
    pub(crate) fn return_azimuth(&self) -> f64 {
        (self.u1cos * self.llsin)
            .atan2(-self.u1sin * self.u2cos + self.u1cos * self.u2sin * self.llcos)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn geodesics() -> Result<(), Error> {
        let vincenty = Vincenty::new(Ellipsoid::named("WGS84")?);

        // Hawaii: Mauna Kea -- Haleakala
        let p1 = Coordinate::new(19.820664, -155.468066)?;
        let p2 = Coordinate::new(20.709722, -156.253333)?;
        let d = vincenty.inverse(&p1, &p2)?;
        assert_float_eq!(d.distance, 128_130.850, abs <= 1e-3);
        assert!(d.iterations > 0);
        assert_float_eq!(vincenty.distance(&p2, &p1)?, d.distance, abs <= 1e-6);

        // Copenhagen (Denmark)--Paris (France)
        let p1 = Coordinate::new(55., 12.)?;
        let p2 = Coordinate::new(49., 2.)?;
        let d = vincenty.inverse(&p1, &p2)?;
        assert_float_eq!(d.distance, 956_066.231_958, abs <= 1e-5);
        assert_eq!(d.initial_bearing.map(|b| (b * 1e6).round()), Some(229_845_940.));

        // Along the equator, a quarter of the way around
        let p1 = Coordinate::new(0., 0.)?;
        let p2 = Coordinate::new(0., 90.)?;
        let d = vincenty.inverse(&p1, &p2)?;
        assert_float_eq!(d.distance, 10_018_754.171_390, abs <= 1e-5);
        assert_eq!(d.initial_bearing, Some(90.));

        // Across the antimeridian, the short way
        let p1 = Coordinate::new(10., 179.9)?;
        let p2 = Coordinate::new(10., -179.9)?;
        assert_float_eq!(vincenty.distance(&p1, &p2)?, 21_927.872_476, abs <= 1e-5);
        Ok(())
    }

    #[test]
    fn coincident_points() -> Result<(), Error> {
        let vincenty = Vincenty::default();
        let p = Coordinate::new(55., 12.)?;
        let d = vincenty.inverse(&p, &p)?;
        assert_eq!(d.distance, 0.);
        assert_eq!(d.iterations, 0);
        assert_eq!(d.initial_bearing, None);

        // The pole is the pole, whatever the longitude
        let n1 = Coordinate::new(90., 0.)?;
        let n2 = Coordinate::new(90., 50.)?;
        assert_eq!(vincenty.distance(&n1, &n2)?, 0.);

        // 180 and -180 is the same meridian
        let e = Coordinate::new(10., 180.)?;
        let w = Coordinate::new(10., -180.)?;
        assert_eq!(vincenty.distance(&e, &w)?, 0.);
        Ok(())
    }

    #[test]
    fn antipodal() -> Result<(), Error> {
        let vincenty = Vincenty::default();
        let p1 = Coordinate::new(0., 0.)?;
        let p2 = Coordinate::new(0.5, 179.7)?;
        assert_eq!(
            vincenty.distance(&p1, &p2),
            Err(Error::ConvergenceFailure { iterations: 200 })
        );

        // The iteration cap is policy
        let impatient = vincenty.with_convergence(Convergence::new(1e-12, 10)?);
        assert_eq!(
            impatient.distance(&p1, &p2),
            Err(Error::ConvergenceFailure { iterations: 10 })
        );

        let p2 = Coordinate::new(0., 180.)?;
        assert!(matches!(
            vincenty.distance(&p1, &p2),
            Err(Error::ConvergenceFailure { .. })
        ));
        Ok(())
    }

    #[test]
    fn direct_and_inverse() -> Result<(), Error> {
        let vincenty = Vincenty::new(Ellipsoid::named("GRS80")?);

        // Copenhagen (Denmark)--Biskra (Algeria)
        let p1 = Coordinate::new(55., 12.)?;
        let p2 = Coordinate::new(34., 7.)?;
        let d = vincenty.inverse(&p1, &p2)?;
        assert_float_eq!(d.distance, 2_365_723.367_715, abs <= 1e-4);

        let (b, arrival) = vincenty.destination(&p1, d.initial_bearing.unwrap(), d.distance)?;
        assert_float_eq!(b.latitude(), 34., abs <= 1e-9);
        assert_float_eq!(b.longitude(), 7., abs <= 1e-9);
        assert_float_eq!(arrival, d.final_bearing.unwrap(), abs <= 1e-9);

        // Going nowhere
        let (b, _) = vincenty.destination(&p1, 45., 0.)?;
        assert_float_eq!(b.latitude(), 55., abs <= 1e-12);
        assert_float_eq!(b.longitude(), 12., abs <= 1e-12);

        // Due east across the antimeridian, along the equator
        let p = Coordinate::new(0., 179.9)?;
        let (b, arrival) = vincenty.destination(&p, 90., 22_263.898)?;
        assert_float_eq!(b.latitude(), 0., abs <= 1e-12);
        assert_float_eq!(b.longitude(), -179.9, abs <= 1e-6);
        assert_float_eq!(arrival, 90., abs <= 1e-9);

        assert!(matches!(
            vincenty.destination(&p1, 45., -1.),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            vincenty.destination(&p1, f64::NAN, 1.),
            Err(Error::InvalidArgument(_))
        ));
        Ok(())
    }
}
