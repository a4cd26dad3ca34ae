// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::directions::{EncodedPolyline, RouteLeg};
use crate::unit::Fare;
use crate::Bound;
use serde_derive::{Deserialize, Serialize};
use std::rc::Rc;

/// One computed route, made of consecutive legs.
///
/// Legs follow the same shared-handle contract as the steps of a leg.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Route {
    #[serde(rename = "bounds")]
    bound: Option<Bound>,
    #[serde(default)]
    copyrights: Vec<String>,
    fare: Option<Fare>,
    #[serde(default)]
    legs: Vec<Rc<RouteLeg>>,
    overview_polyline: Option<EncodedPolyline>,
    summary: Option<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default, rename = "waypoint_order")]
    waypoint_orders: Vec<usize>,
}

impl Route {
    pub fn has_bound(&self) -> bool {self.bound.is_some()}

    pub fn bound(&self) -> Option<&Bound> {self.bound.as_ref()}

    pub fn set_bound(&mut self, bound: Option<Bound>) {
        self.bound = bound;
    }

    pub fn has_fare(&self) -> bool {self.fare.is_some()}

    pub fn fare(&self) -> Option<&Fare> {self.fare.as_ref()}

    pub fn set_fare(&mut self, fare: Option<Fare>) {
        self.fare = fare;
    }

    pub fn has_overview_polyline(&self) -> bool {
        self.overview_polyline.is_some()
    }

    pub fn overview_polyline(&self) -> Option<&EncodedPolyline> {
        self.overview_polyline.as_ref()
    }

    pub fn set_overview_polyline(&mut self,
        polyline: Option<EncodedPolyline>)
    {
        self.overview_polyline = polyline;
    }

    pub fn has_summary(&self) -> bool {self.summary.is_some()}

    pub fn summary(&self) -> Option<&str> {self.summary.as_deref()}

    pub fn set_summary(&mut self, summary: Option<String>) {
        self.summary = summary;
    }

    pub fn has_legs(&self) -> bool {!self.legs.is_empty()}

    pub fn has_leg(&self, leg: &Rc<RouteLeg>) -> bool {
        self.legs.iter().any(|l| Rc::ptr_eq(l, leg))
    }

    pub fn legs(&self) -> &[Rc<RouteLeg>] {&self.legs}

    pub fn set_legs(&mut self, legs: Vec<Rc<RouteLeg>>) {
        self.legs = legs;
    }

    pub fn add_legs<I>(&mut self, legs: I)
    where
        I: IntoIterator<Item = Rc<RouteLeg>>,
    {
        self.legs.extend(legs);
    }

    pub fn add_leg(&mut self, leg: Rc<RouteLeg>) {
        self.legs.push(leg);
    }

    pub fn remove_leg(&mut self, leg: &Rc<RouteLeg>) {
        self.legs.retain(|l| !Rc::ptr_eq(l, leg));
    }

    pub fn has_copyrights(&self) -> bool {!self.copyrights.is_empty()}

    pub fn copyrights(&self) -> &[String] {&self.copyrights}

    pub fn set_copyrights(&mut self, copyrights: Vec<String>) {
        self.copyrights = copyrights;
    }

    pub fn add_copyright(&mut self, copyright: String) {
        self.copyrights.push(copyright);
    }

    pub fn has_warnings(&self) -> bool {!self.warnings.is_empty()}

    pub fn warnings(&self) -> &[String] {&self.warnings}

    pub fn set_warnings(&mut self, warnings: Vec<String>) {
        self.warnings = warnings;
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn has_waypoint_orders(&self) -> bool {
        !self.waypoint_orders.is_empty()
    }

    pub fn waypoint_orders(&self) -> &[usize] {&self.waypoint_orders}

    pub fn set_waypoint_orders(&mut self, orders: Vec<usize>) {
        self.waypoint_orders = orders;
    }

    pub fn add_waypoint_order(&mut self, order: usize) {
        self.waypoint_orders.push(order);
    }
}
