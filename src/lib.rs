//! *Geodesics on the ellipsoid, and what to do with them*.
//!
//! Distances and bearings between points on an ellipsoid of revolution are
//! computed by the nested equations of [Vincenty](crate::Bibliography::Vin75),
//! iterating on the auxiliary sphere until the longitude difference settles.
//!
//! On top of that sits a single-pass simplifier for polylines and polygons,
//! which drops points as long as neither the distance to the last retained
//! point, nor the change of heading, grows beyond user given limits.
//!
//! ```rust
//! use geoline::prelude::*;
//! let ellps = Ellipsoid::named("WGS84")?;
//! let a = Coordinate::new(19.820664, -155.468066)?;
//! let b = Coordinate::new(20.709722, -156.253333)?;
//! let d = geoline::distance(&a, &b, &ellps)?;
//! assert!((d - 128_130.850).abs() < 1e-3);
//! # Ok::<(), geoline::Error>(())
//! ```

mod coordinate;
mod ellipsoid;
mod geodesic;
mod geometry;
mod math;
mod simplify;

pub use coordinate::Coordinate;
pub use ellipsoid::Ellipsoid;
pub use geodesic::bearing::EllipsoidalBearing;
pub use geodesic::vincenty::InverseSolution;
pub use geodesic::vincenty::Vincenty;
pub use geodesic::BearingCalculator;
pub use geodesic::Convergence;
pub use geodesic::DistanceCalculator;
pub use geodesic::{distance, final_bearing, initial_bearing};
pub use geometry::Geometry;
pub use geometry::GeometryKind;
pub use simplify::simplify;
pub use simplify::Simplifier;
pub use simplify::Tolerances;

/// Preamble for users of the crate
pub mod prelude {
    pub use crate::BearingCalculator;
    pub use crate::Convergence;
    pub use crate::Coordinate;
    pub use crate::DistanceCalculator;
    pub use crate::Ellipsoid;
    pub use crate::EllipsoidalBearing;
    pub use crate::Error;
    pub use crate::Geometry;
    pub use crate::GeometryKind;
    pub use crate::Simplifier;
    pub use crate::Tolerances;
    pub use crate::Vincenty;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use log::{debug, trace, warn};

    pub use crate::math::angular;
    pub use crate::prelude::*;
}

use thiserror::Error;

/// The single error type of the crate. Nothing is retried internally:
/// all errors surface at the point of detection.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown ellipsoid: {0}")]
    UnknownEllipsoid(String),

    #[error("no convergence after {iterations} iterations (near-antipodal points?)")]
    ConvergenceFailure { iterations: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// T. Vincenty (1975) Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// T. Vincenty (1976). Correspondence. Survey Review. 23(180): 294.
    Vin76,

    /// Charles F.F. Karney (2013) Algorithms for geodesics. Journal of Geodesy 87, 43–55.
    /// [DOI](https://doi.org/10.1007/s00190-012-0578-z)
    Kar13,
}
