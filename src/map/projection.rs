//! WGS84 to Web-Mercator (EPSG:3857) projection.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

/// Earth radius used by EPSG:3857, in metres.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the width of the projected world, in metres.
pub const HALF_EXTENT: f64 = std::f64::consts::PI * EARTH_RADIUS;

/// Project longitude/latitude in degrees to EPSG:3857 metres.
///
/// Latitudes at or beyond the poles clamp to the edge of the square world.
pub fn from_lon_lat(lon: f64, lat: f64) -> [f64; 2] {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (std::f64::consts::PI * (lat + 90.0) / 360.0).tan().ln();
    let y = if y.is_nan() { -HALF_EXTENT } else { y.clamp(-HALF_EXTENT, HALF_EXTENT) };
    [x, y]
}
