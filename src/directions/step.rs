// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::directions::{EncodedPolyline, TravelMode};
use crate::unit::{Distance, Duration};
use crate::Coordinate;
use serde_derive::{Deserialize, Serialize};

/// One atomic maneuver within a route leg.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Step {
    distance: Option<Distance>,
    duration: Option<Duration>,
    end_location: Option<Coordinate>,
    #[serde(rename = "html_instructions")]
    instructions: Option<String>,
    polyline: Option<EncodedPolyline>,
    start_location: Option<Coordinate>,
    travel_mode: Option<TravelMode>,
}

impl Step {
    pub fn has_distance(&self) -> bool {self.distance.is_some()}

    pub fn distance(&self) -> Option<&Distance> {self.distance.as_ref()}

    pub fn set_distance(&mut self, distance: Option<Distance>) {
        self.distance = distance;
    }

    pub fn has_duration(&self) -> bool {self.duration.is_some()}

    pub fn duration(&self) -> Option<&Duration> {self.duration.as_ref()}

    pub fn set_duration(&mut self, duration: Option<Duration>) {
        self.duration = duration;
    }

    pub fn has_end_location(&self) -> bool {self.end_location.is_some()}

    pub fn end_location(&self) -> Option<Coordinate> {self.end_location}

    pub fn set_end_location(&mut self, location: Option<Coordinate>) {
        self.end_location = location;
    }

    pub fn has_instructions(&self) -> bool {self.instructions.is_some()}

    pub fn instructions(&self) -> Option<&str> {self.instructions.as_deref()}

    pub fn set_instructions(&mut self, instructions: Option<String>) {
        self.instructions = instructions;
    }

    pub fn has_polyline(&self) -> bool {self.polyline.is_some()}

    pub fn polyline(&self) -> Option<&EncodedPolyline> {
        self.polyline.as_ref()
    }

    pub fn set_polyline(&mut self, polyline: Option<EncodedPolyline>) {
        self.polyline = polyline;
    }

    pub fn has_start_location(&self) -> bool {self.start_location.is_some()}

    pub fn start_location(&self) -> Option<Coordinate> {self.start_location}

    pub fn set_start_location(&mut self, location: Option<Coordinate>) {
        self.start_location = location;
    }

    pub fn has_travel_mode(&self) -> bool {self.travel_mode.is_some()}

    pub fn travel_mode(&self) -> Option<TravelMode> {self.travel_mode}

    pub fn set_travel_mode(&mut self, mode: Option<TravelMode>) {
        self.travel_mode = mode;
    }
}
