// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::directions::Step;
use crate::unit::{Distance, Duration};
use crate::Coordinate;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// One origin-to-destination segment of a computed route.
///
/// Steps are held behind shared handles; membership and removal match a
/// given step instance, never a structurally equal one.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RouteLeg {
    duration: Option<Duration>,
    duration_in_traffic: Option<Duration>,
    distance: Option<Distance>,
    end_address: Option<String>,
    end_location: Option<Coordinate>,
    start_address: Option<String>,
    start_location: Option<Coordinate>,
    #[serde(default)]
    steps: Vec<Rc<Step>>,
    #[serde(default)]
    via_waypoints: HashMap<String, Value>,
}

impl RouteLeg {
    pub fn has_duration(&self) -> bool {self.duration.is_some()}

    pub fn duration(&self) -> Option<&Duration> {self.duration.as_ref()}

    pub fn set_duration(&mut self, duration: Option<Duration>) {
        self.duration = duration;
    }

    pub fn has_duration_in_traffic(&self) -> bool {
        self.duration_in_traffic.is_some()
    }

    pub fn duration_in_traffic(&self) -> Option<&Duration> {
        self.duration_in_traffic.as_ref()
    }

    pub fn set_duration_in_traffic(&mut self, duration: Option<Duration>) {
        self.duration_in_traffic = duration;
    }

    pub fn has_distance(&self) -> bool {self.distance.is_some()}

    pub fn distance(&self) -> Option<&Distance> {self.distance.as_ref()}

    pub fn set_distance(&mut self, distance: Option<Distance>) {
        self.distance = distance;
    }

    pub fn has_end_address(&self) -> bool {self.end_address.is_some()}

    pub fn end_address(&self) -> Option<&str> {self.end_address.as_deref()}

    pub fn set_end_address(&mut self, address: Option<String>) {
        self.end_address = address;
    }

    pub fn has_end_location(&self) -> bool {self.end_location.is_some()}

    pub fn end_location(&self) -> Option<Coordinate> {self.end_location}

    pub fn set_end_location(&mut self, location: Option<Coordinate>) {
        self.end_location = location;
    }

    pub fn has_start_address(&self) -> bool {self.start_address.is_some()}

    pub fn start_address(&self) -> Option<&str> {
        self.start_address.as_deref()
    }

    pub fn set_start_address(&mut self, address: Option<String>) {
        self.start_address = address;
    }

    pub fn has_start_location(&self) -> bool {self.start_location.is_some()}

    pub fn start_location(&self) -> Option<Coordinate> {self.start_location}

    pub fn set_start_location(&mut self, location: Option<Coordinate>) {
        self.start_location = location;
    }

    pub fn has_steps(&self) -> bool {!self.steps.is_empty()}

    pub fn has_step(&self, step: &Rc<Step>) -> bool {
        self.steps.iter().any(|s| Rc::ptr_eq(s, step))
    }

    pub fn steps(&self) -> &[Rc<Step>] {&self.steps}

    /// Replaces the whole sequence, discarding prior steps.
    pub fn set_steps(&mut self, steps: Vec<Rc<Step>>) {
        self.steps = steps;
    }

    /// Appends after the existing steps, preserving both orders.
    pub fn add_steps<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = Rc<Step>>,
    {
        self.steps.extend(steps);
    }

    pub fn add_step(&mut self, step: Rc<Step>) {
        self.steps.push(step);
    }

    /// Removes the step matching by instance; no-op if absent.
    pub fn remove_step(&mut self, step: &Rc<Step>) {
        self.steps.retain(|s| !Rc::ptr_eq(s, step));
    }

    pub fn has_via_waypoints(&self) -> bool {!self.via_waypoints.is_empty()}

    pub fn via_waypoints(&self) -> &HashMap<String, Value> {
        &self.via_waypoints
    }

    pub fn set_via_waypoints(&mut self, waypoints: HashMap<String, Value>) {
        self.via_waypoints = waypoints;
    }
}
