// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors used by the `Board` and its geometry helpers.

use std::{
    fmt::{self, Debug},
    panic::Location,
};

use thiserror::Error;

use crate::board::Coordinate;

/// Broad category of a contract violation.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An argument was outside the domain accepted by the operation, e.g. a zero board
    /// dimension, a negative index or an empty random range.
    #[error("invalid argument")]
    InvalidArgument,
    /// A coordinate or index did not lie on the board.
    #[error("out of bounds")]
    OutOfBounds,
}

impl ErrorKind {
    /// Stable code identifying this kind of error.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "E_INVALID_ARGUMENT",
            ErrorKind::OutOfBounds => "E_OUT_OF_BOUNDS",
        }
    }
}

/// Error raised when a precondition of a board or geometry operation is violated.
///
/// These errors indicate a bug in the caller rather than a normal game outcome: a
/// vessel that does not fit or a cell that was already struck are reported through
/// ordinary return values instead.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("{kind} [{code}] in {subsystem}: {detail}")]
pub struct Error {
    kind: ErrorKind,
    code: &'static str,
    subsystem: &'static str,
    detail: String,
    origin: &'static Location<'static>,
}

impl Error {
    /// Construct an error of the given kind. The origin is the location of the caller.
    #[track_caller]
    pub(crate) fn new(kind: ErrorKind, subsystem: &'static str, detail: String) -> Self {
        Self {
            kind,
            code: kind.code(),
            subsystem,
            detail,
            origin: Location::caller(),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error.
    #[track_caller]
    pub(crate) fn invalid_argument(subsystem: &'static str, detail: String) -> Self {
        Self::new(ErrorKind::InvalidArgument, subsystem, detail)
    }

    /// Shorthand for an [`ErrorKind::OutOfBounds`] error.
    #[track_caller]
    pub(crate) fn out_of_bounds(subsystem: &'static str, detail: String) -> Self {
        Self::new(ErrorKind::OutOfBounds, subsystem, detail)
    }

    /// Attribute the error to a different subsystem, keeping its original origin.
    pub(crate) fn in_subsystem(mut self, subsystem: &'static str) -> Self {
        self.subsystem = subsystem;
        self
    }

    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable code for the error.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Name of the part of the library that raised the error.
    pub fn subsystem(&self) -> &'static str {
        self.subsystem
    }

    /// Human readable description of the offending values.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Source location where the error was raised.
    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self, self.origin)
    }
}

/// Reason why a vessel could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Some part of the vessel's footprint would lie off the board.
    #[error("the vessel does not fit on the board at the requested position")]
    OutOfBounds,
    /// The footprint overlaps a vessel that was already placed. Carries the first
    /// conflicting cell.
    #[error("the requested position overlaps another vessel at {0}")]
    AlreadyOccupied(Coordinate),
}
