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
//! Core rules for a two-player naval combat game in the style of Battleship.
//!
//! Each [`Player`] owns a [`Board`]: a flat, row-major grid of cells plus the list of
//! [`Vessel`]s placed on it. Vessels come in six fixed rectangular [`VesselKind`]s and
//! can be placed explicitly with [`Board::place_vessel_at`] or by a randomized search
//! with [`Board::place_vessel_randomly`]. Strikes are resolved with
//! [`Board::receive_attack`].
//!
//! Ordinary game outcomes (a vessel that does not fit, a cell that was already struck)
//! are plain return values. Contract violations, such as a zero sized board or a
//! negative cell index, are reported as [`board::Error`].
//!
//! The library does no printing. [`Board::iter_rows`] exposes everything needed to
//! draw a board.
//!
//! ```
//! use highseas::{Board, Coordinate, Orientation, StrikeResult, VesselKind};
//!
//! let mut board = Board::seeded(10, 10, 7)?;
//! assert!(board.place_vessel_at(Coordinate::new(0, 0), VesselKind::Gunboat, Orientation::Horizontal));
//! assert!(board.place_vessel_randomly(VesselKind::Carrier));
//! assert_eq!(board.receive_attack(Coordinate::new(0, 0)), StrikeResult::Destroyed);
//! assert_eq!(board.count_surviving_vessels(), 1);
//! # Ok::<(), highseas::board::Error>(())
//! ```

pub mod board;
pub mod config;
pub mod player;
pub mod vessels;

pub use crate::{
    board::{Board, Coordinate, Orientation, StrikeMark, StrikeResult},
    config::{Fleet, BOARD_SIZE},
    player::{Player, SetupError},
    vessels::{Vessel, VesselId, VesselKind},
};
