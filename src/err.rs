// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use std::error::Error as StdError;
use std::fmt::{Display, self};

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new<E>(kind: ErrorKind, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let cause = Some(cause.into());
        Error {kind, cause}
    }

    pub fn kind(&self) -> &ErrorKind {&self.kind}
}

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    InvalidPolyline,
    UnknownTravelMode,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidPolyline => f.write_str("Invalid polyline"),
            ErrorKind::UnknownTravelMode =>
                f.write_str("Unknown travel mode"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|e| &**e as &dyn StdError)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {kind, cause: None}
    }
}
