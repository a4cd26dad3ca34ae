// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

#![deny(warnings)]

mod directions;
mod err;
mod unit;

pub use crate::directions::{
    EncodedPolyline, Route, RouteLeg, Step, TravelMode,
};
pub use crate::err::{Error, ErrorKind};
pub use crate::unit::{Distance, Duration, Fare};

use serde_derive::{Deserialize, Serialize};

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

/// Rectangular area delimited by its south-west and north-east corners.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Bound {
    #[serde(rename = "southwest")]
    south_west: Option<Coordinate>,
    #[serde(rename = "northeast")]
    north_east: Option<Coordinate>,
}

impl Bound {
    pub fn has_south_west(&self) -> bool {self.south_west.is_some()}

    pub fn south_west(&self) -> Option<Coordinate> {self.south_west}

    pub fn set_south_west(&mut self, corner: Option<Coordinate>) {
        self.south_west = corner;
    }

    pub fn has_north_east(&self) -> bool {self.north_east.is_some()}

    pub fn north_east(&self) -> Option<Coordinate> {self.north_east}

    pub fn set_north_east(&mut self, corner: Option<Coordinate>) {
        self.north_east = corner;
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, Coordinate};

    #[test]
    fn bound_starts_empty() {
        let bound = Bound::default();
        assert!(!bound.has_south_west());
        assert_eq!(bound.south_west(), None);
        assert!(!bound.has_north_east());
        assert_eq!(bound.north_east(), None);
    }

    #[test]
    fn bound_corners_reset() {
        let corner = Coordinate {latitude: 48.85, longitude: 2.35};
        let mut bound = Bound::default();
        bound.set_south_west(Some(corner));
        assert!(bound.has_south_west());
        assert_eq!(bound.south_west(), Some(corner));
        bound.set_south_west(None);
        assert!(!bound.has_south_west());
        assert_eq!(bound.south_west(), None);
    }

    #[test]
    fn coordinate_uses_wire_names() {
        let json = r#"{"lat": 38.5, "lng": -120.2}"#;
        let coord: Coordinate = serde_json::from_str(json).unwrap();
        assert_eq!(coord, Coordinate {latitude: 38.5, longitude: -120.2});
        let back = serde_json::to_value(&coord).unwrap();
        assert_eq!(back["lat"], 38.5);
        assert_eq!(back["lng"], -120.2);
    }
}
