use float_eq::assert_float_eq;
use geoline::prelude::*;

// Points `step` meters apart along the geodesic leaving `start` in direction `bearing`
fn geodesic_path(
    start: Coordinate,
    bearing: f64,
    step: f64,
    count: usize,
) -> Result<Vec<Coordinate>, Error> {
    let vincenty = Vincenty::default();
    let mut points = vec![start];
    let mut heading = bearing;
    while points.len() < count {
        let (next, arrival) = vincenty.destination(&points[points.len() - 1], heading, step)?;
        points.push(next);
        heading = arrival;
    }
    Ok(points)
}

// A square ring of roughly 1 km sides at the equator, 5 points per side, closed
fn square() -> Result<Vec<Coordinate>, Error> {
    let corners = [(0., 0.), (0., 0.009), (0.009, 0.009), (0.009, 0.), (0., 0.)];
    let mut ring = Vec::new();
    for side in corners.windows(2) {
        let ((lat0, lon0), (lat1, lon1)) = (side[0], side[1]);
        for j in 0..5 {
            let t = j as f64 / 5.;
            ring.push(Coordinate::new(
                lat0 + (lat1 - lat0) * t,
                lon0 + (lon1 - lon0) * t,
            )?);
        }
    }
    ring.push(Coordinate::new(0., 0.)?);
    Ok(ring)
}

#[test]
fn distance_properties() -> Result<(), Error> {
    let ellps = Ellipsoid::default();

    let a = Coordinate::new(19.820664, -155.468066)?;
    let b = Coordinate::new(20.709722, -156.253333)?;
    assert_float_eq!(geoline::distance(&a, &b, &ellps)?, 128_130.850, abs <= 1e-3);

    let places = [
        (55.676, 12.568),
        (-33.868, 151.209),
        (64.181, -51.694),
        (0., 0.),
        (-89.5, 45.),
        (89.9, -179.9),
        (19.820664, -155.468066),
    ];
    for &(lat1, lon1) in &places {
        let p = Coordinate::new(lat1, lon1)?;
        assert_eq!(geoline::distance(&p, &p, &ellps)?, 0.);
        for &(lat2, lon2) in &places {
            let q = Coordinate::new(lat2, lon2)?;
            let there = geoline::distance(&p, &q, &ellps)?;
            let back = geoline::distance(&q, &p, &ellps)?;
            assert!(there >= 0.);
            assert_float_eq!(there, back, abs <= 1e-6);
        }
    }
    Ok(())
}

#[test]
fn bearing_properties() -> Result<(), Error> {
    let ellps = Ellipsoid::named("GRS80")?;
    let pairs = [
        ((55., 12.), (49., 2.)),
        ((19.820664, -155.468066), (20.709722, -156.253333)),
        ((-33.868, 151.209), (-36.848, 174.763)),
        ((10., 179.9), (10., -179.9)),
        ((0., 0.), (0., -90.)),
    ];
    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let a = Coordinate::new(lat1, lon1)?;
        let b = Coordinate::new(lat2, lon2)?;
        let initial = geoline::initial_bearing(&a, &b, &ellps)?;
        let arrival = geoline::final_bearing(&a, &b, &ellps)?;
        let reverse = geoline::initial_bearing(&b, &a, &ellps)?;
        for bearing in [initial, arrival, reverse] {
            assert!((0. ..360.).contains(&bearing));
        }
        assert_float_eq!(arrival, (reverse + 180.) % 360., abs <= 1e-9);
    }
    Ok(())
}

#[test]
fn straight_line_reduces_to_endpoints() -> Result<(), Error> {
    let start = Coordinate::new(10., 20.)?;
    let points = geodesic_path(start, 37., 100., 10)?;
    let line = Geometry::Polyline(points.clone());

    let simplified = geoline::simplify(&line, 5., 1000.)?;
    assert_eq!(simplified, Geometry::Polyline(vec![points[0], points[9]]));

    // Idempotence
    assert_eq!(geoline::simplify(&simplified, 5., 1000.)?, simplified);
    Ok(())
}

#[test]
fn right_angle_is_retained() -> Result<(), Error> {
    let vincenty = Vincenty::default();
    let p0 = Coordinate::new(45., 7.)?;
    let (p1, _) = vincenty.destination(&p0, 0., 500.)?;
    let (p2, _) = vincenty.destination(&p1, 90., 500.)?;
    let path = Geometry::Polyline(vec![p0, p1, p2]);

    let simplified = geoline::simplify(&path, 10., 1000.)?;
    assert_eq!(simplified, path);
    assert_eq!(geoline::simplify(&simplified, 10., 1000.)?, simplified);
    Ok(())
}

#[test]
fn endpoints_survive() -> Result<(), Error> {
    let simplifier = Simplifier::with_ellipsoid(Ellipsoid::named("GRS80")?);
    let start = Coordinate::new(-41.3, 174.8)?;
    let points = geodesic_path(start, 300., 75., 30)?;

    for (angle, limit) in [(1., 100.), (5., 1000.), (20., 1e6)] {
        for geometry in [
            Geometry::Polyline(points.clone()),
            Geometry::Polygon(points.clone()),
        ] {
            let simplified = simplifier.simplify(&geometry, angle, limit)?;
            assert_eq!(simplified.kind(), geometry.kind());
            assert!(simplified.len() >= 2 && simplified.len() <= geometry.len());
            assert_eq!(simplified.points()[0], points[0]);
            assert_eq!(simplified.points()[simplified.len() - 1], points[29]);
        }
    }
    Ok(())
}

#[test]
fn polygon_keeps_its_corners() -> Result<(), Error> {
    let ring = square()?;
    assert_eq!(ring.len(), 21);
    let polygon = Geometry::Polygon(ring.clone());

    let simplified = geoline::simplify(&polygon, 5., 5000.)?;
    let corners = vec![ring[0], ring[5], ring[10], ring[15], ring[20]];
    assert_eq!(simplified, Geometry::Polygon(corners));
    assert_eq!(geoline::simplify(&simplified, 5., 5000.)?, simplified);

    // A tighter distance limit retains intermediate points as well
    let tighter = geoline::simplify(&polygon, 5., 300.)?;
    assert!(tighter.len() > simplified.len());
    assert_eq!(geoline::simplify(&tighter, 5., 300.)?, tighter);
    Ok(())
}

#[test]
fn smaller_distance_limit_never_drops_more() -> Result<(), Error> {
    let start = Coordinate::new(10., 20.)?;
    let points = geodesic_path(start, 0., 50., 41)?;
    let line = Geometry::Polyline(points);

    let mut previous = 0;
    for limit in [5000., 1000., 500., 120., 60.] {
        let count = geoline::simplify(&line, 5., limit)?.len();
        assert!(count >= previous, "{count} points at {limit} m");
        previous = count;
    }
    assert_eq!(geoline::simplify(&line, 5., 5000.)?.len(), 2);
    assert_eq!(previous, 21);
    Ok(())
}

#[test]
fn small_inputs_are_copied() -> Result<(), Error> {
    let a = Coordinate::new(55., 12.)?;
    let b = Coordinate::new(55., 13.)?;
    let c = Coordinate::new(56., 13.)?;

    for geometry in [
        Geometry::Polyline(vec![]),
        Geometry::Polyline(vec![a]),
        Geometry::Polyline(vec![a, b]),
        Geometry::Polygon(vec![a, b, c]),
    ] {
        assert_eq!(geoline::simplify(&geometry, 5., 10.)?, geometry);
    }
    Ok(())
}

#[test]
fn errors_surface() -> Result<(), Error> {
    let line = Geometry::Polyline(vec![
        Coordinate::new(0., 0.)?,
        Coordinate::new(0.5, 179.7)?,
        Coordinate::new(0.6, 179.7)?,
    ]);
    assert!(matches!(
        geoline::simplify(&line, 5., 1000.),
        Err(Error::ConvergenceFailure { .. })
    ));
    assert!(matches!(
        geoline::simplify(&line, 5., -1.),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        geoline::simplify(&Geometry::Point(Coordinate::new(0., 0.)?), 5., 1.),
        Err(Error::InvalidArgument(_))
    ));
    Ok(())
}
