use crate::utils::error::{GisError, Result};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// WGS84 semi-major axis, the sphere radius used by web mercator.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// An (x, y) pair in some CRS: (longitude, latitude) degrees for WGS84,
/// metres for spherical mercator. Axis order follows the wire convention of
/// the map layer.
pub type Coordinate = (f64, f64);

/// The two reference systems this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crs {
    /// Geographic WGS84, EPSG:4326.
    Wgs84,
    /// Spherical (web) mercator, EPSG:3857.
    WebMercator,
}

impl Crs {
    pub fn epsg_code(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "EPSG:4326",
            Crs::WebMercator => "EPSG:3857",
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.epsg_code())
    }
}

impl FromStr for Crs {
    type Err = GisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EPSG:4326" => Ok(Crs::Wgs84),
            "EPSG:3857" => Ok(Crs::WebMercator),
            other => Err(GisError::UnknownCrsError {
                code: other.to_string(),
            }),
        }
    }
}

/// From WGS84 (lon, lat) degrees to spherical-mercator metres.
///
/// No input-range validation: latitudes beyond the poles produce NaN y
/// (`ln` of a negative tangent), and exactly +/-90 yields a finite but
/// absurdly large y since pi/2 is not representable in f64.
pub fn to_projected((lon, lat): Coordinate) -> Coordinate {
    let x = lon.to_radians() * EARTH_RADIUS_M;
    let y = EARTH_RADIUS_M * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

/// From spherical-mercator metres back to WGS84 (lon, lat) degrees.
pub fn to_geographic((x, y): Coordinate) -> Coordinate {
    let lon = (x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS_M).exp().atan() - PI / 2.0).to_degrees();
    (lon, lat)
}

/// General transform between the supported systems. Same-CRS transforms are
/// the identity.
pub fn transform(coord: Coordinate, source: Crs, target: Crs) -> Coordinate {
    match (source, target) {
        (Crs::Wgs84, Crs::WebMercator) => to_projected(coord),
        (Crs::WebMercator, Crs::Wgs84) => to_geographic(coord),
        _ => coord,
    }
}
