// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Coordinate, Error, ErrorKind};
use serde_derive::{Deserialize, Serialize};

const PRECISION: f64 = 1e5;

/// Path compressed with the service's 5-bit chunk encoding.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EncodedPolyline {
    points: Option<String>,
}

impl EncodedPolyline {
    pub fn new<S: Into<String>>(points: S) -> Self {
        EncodedPolyline {points: Some(points.into())}
    }

    pub fn has_points(&self) -> bool {self.points.is_some()}

    pub fn points(&self) -> Option<&str> {self.points.as_deref()}

    pub fn set_points(&mut self, points: Option<String>) {
        self.points = points;
    }

    /// Expands the encoded string into coordinates, in path order.
    ///
    /// An absent string decodes to no coordinates.
    pub fn decode(&self) -> Result<Vec<Coordinate>, Error> {
        let points = match &self.points {
            Some(points) => points.as_str(),
            None => return Ok(Vec::new()),
        };
        let mut bytes = points.bytes();
        let mut coords = Vec::new();
        let mut lat = 0i64;
        let mut lng = 0i64;
        loop {
            let delta_lat = match next_delta(&mut bytes) {
                Some(delta) => delta?,
                None => break,
            };
            let delta_lng = next_delta(&mut bytes)
                .unwrap_or_else(|| Err(Error::new(ErrorKind::InvalidPolyline,
                    "Latitude without matching longitude")))?;
            lat += delta_lat;
            lng += delta_lng;
            coords.push(Coordinate {
                latitude: lat as f64 / PRECISION,
                longitude: lng as f64 / PRECISION,
            });
        }
        Ok(coords)
    }

    /// Encodes coordinates at the standard 1e-5 precision.
    pub fn encode(points: &[Coordinate]) -> Self {
        let mut encoded = String::new();
        let mut prev_lat = 0i64;
        let mut prev_lng = 0i64;
        for point in points {
            let lat = (point.latitude * PRECISION).round() as i64;
            let lng = (point.longitude * PRECISION).round() as i64;
            push_delta(&mut encoded, lat - prev_lat);
            push_delta(&mut encoded, lng - prev_lng);
            prev_lat = lat;
            prev_lng = lng;
        }
        EncodedPolyline::new(encoded)
    }
}

fn next_delta<I>(bytes: &mut I) -> Option<Result<i64, Error>>
where
    I: Iterator<Item = u8>,
{
    let mut value = 0i64;
    let mut shift = 0;
    loop {
        let byte = match bytes.next() {
            Some(byte) => byte,
            None if shift == 0 => return None,
            None => return Some(Err(Error::new(ErrorKind::InvalidPolyline,
                "Truncated chunk"))),
        };
        if byte < 63 || byte > 126 {
            return Some(Err(Error::new(ErrorKind::InvalidPolyline,
                format!("Byte {} outside encoding alphabet", byte))));
        }
        // 12 chunks already cover an i64 delta; more cannot be well-formed.
        if shift >= 60 {
            return Some(Err(Error::new(ErrorKind::InvalidPolyline,
                "Chunk too long")));
        }
        let chunk = i64::from(byte - 63);
        value |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk & 0x20 == 0 {
            break;
        }
    }
    let delta = if value & 1 != 0 {!(value >> 1)} else {value >> 1};
    Some(Ok(delta))
}

fn push_delta(encoded: &mut String, delta: i64) {
    let mut value = if delta < 0 {!(delta << 1)} else {delta << 1};
    while value >= 0x20 {
        encoded.push(((0x20 | (value & 0x1f)) as u8 + 63) as char);
        value >>= 5;
    }
    encoded.push((value as u8 + 63) as char);
}

#[cfg(test)]
mod tests {
    use super::EncodedPolyline;
    use crate::{Coordinate, ErrorKind};

    // Reference vector from the encoding format documentation.
    const ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn reference_points() -> Vec<Coordinate> {
        vec![
            Coordinate {latitude: 38.5, longitude: -120.2},
            Coordinate {latitude: 40.7, longitude: -120.95},
            Coordinate {latitude: 43.252, longitude: -126.453},
        ]
    }

    #[test]
    fn points_reset() {
        let mut polyline = EncodedPolyline::default();
        assert!(!polyline.has_points());
        assert_eq!(polyline.points(), None);
        polyline.set_points(Some(ENCODED.to_string()));
        assert!(polyline.has_points());
        assert_eq!(polyline.points(), Some(ENCODED));
        polyline.set_points(None);
        assert!(!polyline.has_points());
        assert_eq!(polyline.points(), None);
    }

    #[test]
    fn decodes_reference_vector() {
        let polyline = EncodedPolyline::new(ENCODED);
        assert_eq!(polyline.decode().unwrap(), reference_points());
    }

    #[test]
    fn encodes_reference_vector() {
        let polyline = EncodedPolyline::encode(&reference_points());
        assert_eq!(polyline.points(), Some(ENCODED));
    }

    #[test]
    fn absent_points_decode_to_nothing() {
        let polyline = EncodedPolyline::default();
        assert_eq!(polyline.decode().unwrap(), vec![]);
    }

    #[test]
    fn empty_string_decodes_to_nothing() {
        let polyline = EncodedPolyline::new("");
        assert_eq!(polyline.decode().unwrap(), vec![]);
    }

    #[test]
    fn truncated_chunk_is_rejected() {
        // The continuation bit of the last chunk is set.
        let polyline = EncodedPolyline::new("_p~iF~ps|U_");
        let err = polyline.decode().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::InvalidPolyline);
    }

    #[test]
    fn dangling_latitude_is_rejected() {
        let polyline = EncodedPolyline::new("_p~iF");
        let err = polyline.decode().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::InvalidPolyline);
    }

    #[test]
    fn overlong_chunk_is_rejected() {
        // 14 bytes with the continuation bit set never end a chunk.
        let polyline = EncodedPolyline::new("aaaaaaaaaaaaaa");
        let err = polyline.decode().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::InvalidPolyline);
    }

    #[test]
    fn out_of_alphabet_byte_is_rejected() {
        let polyline = EncodedPolyline::new("_p~iF~ps|U\n");
        let err = polyline.decode().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::InvalidPolyline);
    }

    #[test]
    fn zigzag_survives_negative_deltas() {
        let points = vec![
            Coordinate {latitude: -0.00001, longitude: 0.00001},
            Coordinate {latitude: 0.00001, longitude: -0.00001},
        ];
        let polyline = EncodedPolyline::encode(&points);
        assert_eq!(polyline.decode().unwrap(), points);
    }
}
