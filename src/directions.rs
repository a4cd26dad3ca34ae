// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

mod leg;
mod polyline;
mod route;
mod step;

pub use self::leg::RouteLeg;
pub use self::polyline::EncodedPolyline;
pub use self::route::Route;
pub use self::step::Step;

use crate::{Error, ErrorKind};
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, self};
use std::str::FromStr;

/// Means of transportation for a route or a step.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    Bicycling,
    Driving,
    Transit,
    Walking,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Bicycling => "BICYCLING",
            TravelMode::Driving => "DRIVING",
            TravelMode::Transit => "TRANSIT",
            TravelMode::Walking => "WALKING",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "BICYCLING" => Ok(TravelMode::Bicycling),
            "DRIVING" => Ok(TravelMode::Driving),
            "TRANSIT" => Ok(TravelMode::Transit),
            "WALKING" => Ok(TravelMode::Walking),
            _ => Err(Error::new(ErrorKind::UnknownTravelMode,
                format!("Unsupported mode: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelMode;
    use crate::ErrorKind;

    #[test]
    fn travel_mode_parses_wire_names() {
        assert_eq!("DRIVING".parse::<TravelMode>().unwrap(),
            TravelMode::Driving);
        assert_eq!("TRANSIT".parse::<TravelMode>().unwrap(),
            TravelMode::Transit);
    }

    #[test]
    fn travel_mode_rejects_unknown_names() {
        let err = "FLYING".parse::<TravelMode>().unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::UnknownTravelMode);
    }

    #[test]
    fn travel_mode_displays_wire_name() {
        assert_eq!(TravelMode::Walking.to_string(), "WALKING");
    }

    #[test]
    fn travel_mode_serde_matches_wire() {
        let mode: TravelMode = serde_json::from_str(r#""BICYCLING""#)
            .unwrap();
        assert_eq!(mode, TravelMode::Bicycling);
        assert_eq!(serde_json::to_string(&mode).unwrap(), r#""BICYCLING""#);
    }
}
