// Copyright 2026 The Chaos Engine Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::{error, fmt, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError, // will never be produced
    NoAnchors,
    NoTrackPoint,
    NamesExhausted,
    BadFactor,
    Generic,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            NoAnchors => "no_anchors",
            NoTrackPoint => "no_track_point",
            NamesExhausted => "names_exhausted",
            BadFactor => "bad_factor",
            Generic => "generic",
        };

        write!(f, "{name}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Registry,
    Simulation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Registry => "RegistryError",
            ErrorKind::Simulation => "SimulationError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[macro_export]
macro_rules! registry_err {
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Registry, ErrorCode::$code, Some($str)))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Registry, ErrorCode::$code, None))
    }};
}

#[macro_export]
macro_rules! sim_err {
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(
            ErrorKind::Simulation,
            ErrorCode::$code,
            Some($str),
        ))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Simulation, ErrorCode::$code, None))
    }};
}

#[test]
fn test_error_display() {
    let err = Error::new(
        ErrorKind::Simulation,
        ErrorCode::NoTrackPoint,
        Some("tick before start".to_owned()),
    );
    assert_eq!(
        "SimulationError{no_track_point: tick before start}",
        format!("{err}")
    );

    let err = Error::new(ErrorKind::Registry, ErrorCode::NamesExhausted, None);
    assert_eq!("RegistryError{names_exhausted}", format!("{err}"));
}

#[test]
fn test_err_macros() {
    let result: Result<()> = sim_err!(NoAnchors);
    let err = result.unwrap_err();
    assert_eq!(ErrorKind::Simulation, err.kind);
    assert_eq!(ErrorCode::NoAnchors, err.code);
    assert_eq!(None, err.get_details());

    let result: Result<()> = registry_err!(NamesExhausted, "702 anchors".to_owned());
    let err = result.unwrap_err();
    assert_eq!(ErrorKind::Registry, err.kind);
    assert_eq!(Some("702 anchors".to_owned()), err.get_details());
}
