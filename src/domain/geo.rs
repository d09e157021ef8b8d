// Geographic primitives used to scope live-traffic queries
use serde::Serialize;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Rectangular lat/lon region in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Query parameters in the order the live-state API documents them.
    pub fn query_params(&self) -> [(&'static str, f64); 4] {
        [
            ("lamin", self.lat_min),
            ("lomin", self.lon_min),
            ("lamax", self.lat_max),
            ("lomax", self.lon_max),
        ]
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }
}

/// Box enclosing a circle of `radius_km` around `center`.
///
/// The longitude delta is scaled by `1 / cos(latitude)`, so it grows without
/// bound near the poles. No clamping is applied and NaN inputs yield NaN edges.
pub fn compute_bounding_box(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let d_lat = radius_km / EARTH_RADIUS_KM;
    let d_lon = radius_km / (EARTH_RADIUS_KM * center.latitude.to_radians().cos());

    let d_lat_deg = d_lat.to_degrees();
    let d_lon_deg = d_lon.to_degrees();

    BoundingBox {
        lat_min: center.latitude - d_lat_deg,
        lat_max: center.latitude + d_lat_deg,
        lon_min: center.longitude - d_lon_deg,
        lon_max: center.longitude + d_lon_deg,
    }
}
