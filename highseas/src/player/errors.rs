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
use thiserror::Error;

use crate::{board, vessels::VesselKind};

/// Error returned when a player's board cannot be set up.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// The board could not be built.
    #[error("could not create board: {0}")]
    Board(#[from] board::Error),

    /// There was no room left for a vessel. The board is too small for the fleet.
    #[error("board too small for this fleet: no room for a {kind} after placing {placed} vessels")]
    FleetDoesNotFit {
        /// The vessel that could not be placed.
        kind: VesselKind,
        /// How many vessels, taken largest first, were placed before running out of
        /// room. They are removed again before the error is returned.
        placed: usize,
    },
}
