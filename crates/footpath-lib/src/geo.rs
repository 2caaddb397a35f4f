use serde::{Deserialize, Serialize};

/// Identifier of a map node.
pub type NodeId = i64;

/// Mean earth radius in statute miles.
const EARTH_RADIUS_MILES: f64 = 3963.1;

/// Mean earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6378.1;

/// Unit used for great-circle distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        }
    }
}

/// A map node: identifier plus latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self { id, lat, lon }
    }

    /// Great-circle distance to `other` in miles.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_in(other, DistanceUnit::Miles)
    }

    /// Great-circle distance to `other` in the requested unit.
    pub fn distance_in(&self, other: &Self, unit: DistanceUnit) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon, unit)
    }
}

/// Haversine great-circle distance between two latitude/longitude pairs given
/// in degrees.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    unit.earth_radius() * c
}

/// Haversine distance in miles.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine(lat1, lon1, lat2, lon2, DistanceUnit::Miles)
}
