use crate::Coordinate;

/// The kind of a [`Geometry`], without its points
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GeometryKind {
    Point,
    Polyline,
    Polygon,
}

/// An ordered collection of coordinates. Ordering is significant: it
/// defines the path. A `Polyline` is open, a `Polygon` is a ring, i.e.
/// semantically closed, whether or not the first point is repeated at the end.
#[derive(Debug, PartialEq, Clone)]
pub enum Geometry {
    Point(Coordinate),
    Polyline(Vec<Coordinate>),
    Polygon(Vec<Coordinate>),
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Polyline(_) => GeometryKind::Polyline,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Read-only view of the points, in order
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        match self {
            Geometry::Point(point) => std::slice::from_ref(point),
            Geometry::Polyline(points) | Geometry::Polygon(points) => points,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.kind() == GeometryKind::Polygon
    }
}

// ----- Tests ---------------------------------------------------------------------
