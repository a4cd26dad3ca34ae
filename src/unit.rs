// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use serde_derive::{Deserialize, Serialize};

/// Length of a leg or step: meters plus the service's display text.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Distance {
    text: Option<String>,
    value: Option<f64>,
}

impl Distance {
    pub fn has_text(&self) -> bool {self.text.is_some()}

    pub fn text(&self) -> Option<&str> {self.text.as_deref()}

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn has_value(&self) -> bool {self.value.is_some()}

    pub fn value(&self) -> Option<f64> {self.value}

    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
    }
}

/// Travel time of a leg or step: seconds plus the service's display text.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Duration {
    text: Option<String>,
    value: Option<f64>,
}

impl Duration {
    pub fn has_text(&self) -> bool {self.text.is_some()}

    pub fn text(&self) -> Option<&str> {self.text.as_deref()}

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn has_value(&self) -> bool {self.value.is_some()}

    pub fn value(&self) -> Option<f64> {self.value}

    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
    }
}

/// Transit fare for a whole route.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Fare {
    currency: Option<String>,
    text: Option<String>,
    value: Option<f64>,
}

impl Fare {
    pub fn has_currency(&self) -> bool {self.currency.is_some()}

    pub fn currency(&self) -> Option<&str> {self.currency.as_deref()}

    pub fn set_currency(&mut self, currency: Option<String>) {
        self.currency = currency;
    }

    pub fn has_text(&self) -> bool {self.text.is_some()}

    pub fn text(&self) -> Option<&str> {self.text.as_deref()}

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn has_value(&self) -> bool {self.value.is_some()}

    pub fn value(&self) -> Option<f64> {self.value}

    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
    }
}
