use std::{env, str::FromStr};

use anyhow::{bail, Context, Result};
use geoplane::{GeoPoint, ParseCoord, PlanarPoint};
use tracing::{debug, warn, Level};

const USAGE: &str = "\
Usage: geoplane <command> <args>

Commands:
  distance <lat,lng> <lat,lng>           Great circle distance in meters
  planar-distance <x,y> <x,y>            Distance between planar points in meters
  to-planar <lat,lng> <center lat,lng>   Project a point onto the plane at center
  to-geo <x,y> <center lat,lng>          Convert a planar point back to lat/lng

Coordinates are two numbers separated by a comma or by quoted whitespace.
Set GEOPLANE_LOG to error, warn, info, debug or trace to control logging.";

fn init_logging() {
    let level = env::var("GEOPLANE_LOG")
        .ok()
        .and_then(|value| Level::from_str(&value).ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_arg<T: ParseCoord>(args: &[String], index: usize, name: &str) -> Result<T> {
    let value = args
        .get(index)
        .with_context(|| format!("missing argument <{name}>\n\n{USAGE}"))?;

    T::parse_coord(value).with_context(|| format!("invalid <{name}> \"{value}\""))
}

/// Whether a transform around `center` produced a result that can't be trusted.
/// At a pole `cos(latitude)` is only ~6e-17, so longitudes come out huge but finite.
#[allow(clippy::float_cmp)]
fn unreliable_near_pole(center: &GeoPoint, values: &[f64]) -> bool {
    center.latitude.abs() == 90. || values.iter().any(|v| !v.is_finite())
}

fn warn_near_pole(center: &GeoPoint, values: &[f64]) {
    if unreliable_near_pole(center, values) {
        warn!(%center, "result is not meaningful, the center is on or too close to a pole");
    }
}

fn run(args: &[String]) -> Result<String> {
    let Some(command) = args.first() else {
        return Ok(USAGE.to_string());
    };

    if args.len() > 3 {
        bail!("too many arguments for `{command}`\n\n{USAGE}");
    }

    let output = match command.as_str() {
        "distance" => {
            let from: GeoPoint = parse_arg(args, 1, "lat,lng")?;
            let to: GeoPoint = parse_arg(args, 2, "lat,lng")?;
            debug!(%from, %to, "spherical distance");

            let distance = from.spherical_distance(&to);
            ryu::Buffer::new().format(distance).to_string()
        }
        "planar-distance" => {
            let from: PlanarPoint = parse_arg(args, 1, "x,y")?;
            let to: PlanarPoint = parse_arg(args, 2, "x,y")?;
            debug!(%from, %to, "cartesian distance");

            let distance = from.distance(&to);
            ryu::Buffer::new().format(distance).to_string()
        }
        "to-planar" => {
            let latlng: GeoPoint = parse_arg(args, 1, "lat,lng")?;
            let center: GeoPoint = parse_arg(args, 2, "center lat,lng")?;
            debug!(%latlng, %center, "projecting onto plane");

            let point = latlng.to_planar(&center);
            warn_near_pole(&center, &[point.x, point.y]);
            point.to_string()
        }
        "to-geo" => {
            let point: PlanarPoint = parse_arg(args, 1, "x,y")?;
            let center: GeoPoint = parse_arg(args, 2, "center lat,lng")?;
            debug!(%point, %center, "converting to lat/lng");

            let latlng = point.to_geo(&center);
            warn_near_pole(&center, &[latlng.latitude, latlng.longitude]);
            latlng.to_string()
        }
        "help" | "-h" | "--help" => USAGE.to_string(),
        other => bail!("unknown command `{other}`\n\n{USAGE}"),
    };

    debug!(%output, "done");
    Ok(output)
}

fn main() -> Result<()> {
    init_logging();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let output = run(&args)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_command_prints_usage() {
        assert_eq!(run(&[]).unwrap(), USAGE);
        assert_eq!(run(&args(&["help"])).unwrap(), USAGE);
    }

    #[test]
    fn planar_distance() {
        assert_eq!(run(&args(&["planar-distance", "1,1", "4,-3"])).unwrap(), "5.0");
    }

    #[test]
    fn projection_of_center_is_origin() {
        assert_eq!(run(&args(&["to-planar", "25,25", "25,25"])).unwrap(), "0.0 0.0");
        assert_eq!(run(&args(&["to-geo", "0,0", "25,25"])).unwrap(), "25.0 25.0");
    }

    #[test]
    fn distance_parses_both_points() {
        let output = run(&args(&["distance", "34.0522,-118.2437", "40.7128, -74.0059"])).unwrap();
        let distance: f64 = output.parse().unwrap();
        assert!((distance - 3.944e6).abs() / 3.944e6 < 0.01);
    }

    #[test]
    fn pole_centers_are_flagged() {
        let north_pole = GeoPoint::new(90.0, 0.0);
        let south_pole = GeoPoint::new(-90.0, 0.0);
        let latlng = PlanarPoint::new(1000.0, 0.0).to_geo(&north_pole);

        // Finite output, still flagged because of the center
        assert!(latlng.longitude.is_finite());
        assert!(unreliable_near_pole(&north_pole, &[latlng.latitude, latlng.longitude]));
        assert!(unreliable_near_pole(&south_pole, &[0.0, 0.0]));

        let center = GeoPoint::new(25.0, 25.0);
        assert!(!unreliable_near_pole(&center, &[35.0, 15.0]));
        assert!(unreliable_near_pole(&center, &[f64::NAN, 15.0]));
        assert!(unreliable_near_pole(&center, &[35.0, f64::INFINITY]));
    }

    #[test]
    fn pole_center_still_prints_result() {
        let output = run(&args(&["to-geo", "1000,0", "90,0"])).unwrap();
        let (lat, lng) = output.split_once(' ').unwrap();

        assert_eq!(lat, "90.0");
        assert!(lng.parse::<f64>().unwrap().abs() > 1e9);
        assert!(run(&args(&["to-planar", "89,10", "-90,0"])).is_ok());
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(run(&args(&["distance", "34.0522,-118.2437"])).is_err());
        assert!(run(&args(&["distance", "95,0", "0,0"])).is_err());
        assert!(run(&args(&["to-geo", "0,0", "25,25", "extra"])).is_err());
        assert!(run(&args(&["teleport"])).is_err());
    }
}
