//! GSIM: Geodesics and SIMplification from the command line.
use anyhow::Context;
use clap::{Parser, Subcommand};
use geoline::prelude::*;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "gsim")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Ellipsoid: a built-in name, or "semimajor axis, inverse flattening"
    #[clap(long, default_value = "WGS84", global = true)]
    ellps: String,

    /// Stop iterating when the update is smaller than this (radians)
    #[clap(long, default_value_t = 1e-12, global = true)]
    tolerance: f64,

    /// Give up iterating after this many updates
    #[clap(long, default_value_t = 200, global = true)]
    max_iterations: usize,

    /// Number of decimals in the output
    #[clap(long, default_value_t = 9, global = true)]
    decimals: usize,

    /// List the built-in ellipsoids and exit
    #[clap(long)]
    list_ellipsoids: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Geodesic distance, in meters, between two "lat,lon" points
    Distance {
        #[clap(allow_hyphen_values = true)]
        from: Coordinate,
        #[clap(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Initial and final bearing, in degrees, from one "lat,lon" point to another
    Bearing {
        #[clap(allow_hyphen_values = true)]
        from: Coordinate,
        #[clap(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Destination and final bearing, travelling from a "lat,lon" point
    Destination {
        #[clap(allow_hyphen_values = true)]
        from: Coordinate,
        /// Initial bearing, degrees
        #[clap(allow_negative_numbers = true)]
        bearing: f64,
        /// Distance, meters
        distance: f64,
    },

    /// Simplify a path given as one "lat lon" pair per line
    Simplify {
        /// Bearing deviation threshold, degrees
        #[clap(short = 'a', long)]
        bearing_angle: f64,

        /// Distance threshold, meters
        #[clap(short = 'd', long)]
        distance_limit: f64,

        /// Treat the points as a polygon ring
        #[clap(short, long)]
        closed: bool,

        /// The files to operate on (stdin if none)
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{:#?}", options);

    if options.list_ellipsoids {
        for (name, description) in Ellipsoid::builtins() {
            println!("{name:<10} {description}");
        }
        return Ok(());
    }

    let ellps = Ellipsoid::named(&options.ellps)?;
    let convergence = Convergence::new(options.tolerance, options.max_iterations)?;
    let vincenty = Vincenty::new(ellps).with_convergence(convergence);
    let bearing = EllipsoidalBearing::new(ellps).with_convergence(convergence);
    let decimals = options.decimals;

    let Some(command) = options.command else {
        anyhow::bail!("no command given (try --help)");
    };

    match command {
        Command::Distance { from, to } => {
            let solution = vincenty.inverse(&from, &to)?;
            info!("converged after {} iterations", solution.iterations);
            println!("{:.decimals$}", solution.distance);
        }

        Command::Bearing { from, to } => {
            let initial = bearing.initial_bearing(&from, &to)?;
            let arrival = bearing.final_bearing(&from, &to)?;
            println!("{initial:.decimals$} {arrival:.decimals$}");
        }

        Command::Destination {
            from,
            bearing,
            distance,
        } => {
            let (to, arrival) = vincenty.destination(&from, bearing, distance)?;
            println!(
                "{:.decimals$} {:.decimals$} {arrival:.decimals$}",
                to.latitude(),
                to.longitude()
            );
        }

        Command::Simplify {
            bearing_angle,
            distance_limit,
            closed,
            files,
        } => {
            let points = read_coordinates(&files)?;
            let geometry = if closed {
                Geometry::Polygon(points)
            } else {
                Geometry::Polyline(points)
            };
            let simplifier = Simplifier::new(vincenty, bearing);
            let simplified = simplifier.simplify(&geometry, bearing_angle, distance_limit)?;
            info!(
                "{} points in, {} points out",
                geometry.len(),
                simplified.len()
            );
            for point in simplified.points() {
                println!(
                    "{:.decimals$} {:.decimals$}",
                    point.latitude(),
                    point.longitude()
                );
            }
        }
    }
    Ok(())
}

/// Read coordinates from the files given, or from stdin if none
fn read_coordinates(files: &[PathBuf]) -> Result<Vec<Coordinate>, anyhow::Error> {
    let mut coordinates = Vec::new();
    if files.is_empty() {
        let stdin = std::io::stdin();
        parse_lines(stdin.lock(), "<stdin>", &mut coordinates)?;
    }
    for path in files {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        parse_lines(
            BufReader::new(file),
            &path.display().to_string(),
            &mut coordinates,
        )?;
    }
    Ok(coordinates)
}

/// One "lat lon" pair per line. Blank lines and '#'-comments are skipped
fn parse_lines(
    reader: impl BufRead,
    source: &str,
    coordinates: &mut Vec<Coordinate>,
) -> Result<(), anyhow::Error> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("cannot read {source}"))?;
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let coordinate = line
            .parse::<Coordinate>()
            .with_context(|| format!("{source}, line {}", index + 1))?;
        coordinates.push(coordinate);
    }
    Ok(())
}
