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
//! Defines the types that make up the grid: the flat arena of cells owned by a board.

use std::ops::{Index, IndexMut};

use crate::{
    board::{BoardDimensions, Coordinate},
    vessels::VesselId,
};

/// Marker recording whether a strike was made on a cell and how it turned out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StrikeMark {
    /// No strike has been made.
    Unmarked,
    /// The strike found open water.
    Miss,
    /// The strike hit a vessel.
    Hit,
}

impl StrikeMark {
    /// Returns true if any strike was recorded.
    pub fn is_marked(self) -> bool {
        self != StrikeMark::Unmarked
    }
}

impl Default for StrikeMark {
    fn default() -> Self {
        StrikeMark::Unmarked
    }
}

/// A single cell in the player's grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Cell {
    /// The vessel that occupies this cell, if any.
    pub(crate) vessel: Option<VesselId>,

    /// Strike received from the opponent on this cell.
    pub(crate) received: StrikeMark,

    /// Strike this player launched at the same position on the opponent's board.
    pub(crate) launched: StrikeMark,
}

impl Cell {
    /// The vessel that occupies this cell, if any.
    pub fn vessel(&self) -> Option<VesselId> {
        self.vessel
    }

    /// Strike received on this cell.
    pub fn received(&self) -> StrikeMark {
        self.received
    }

    /// Strike launched at this position on the opponent's board.
    pub fn launched(&self) -> StrikeMark {
        self.launched
    }
}

/// Cells of a board stored row-major in a single allocation.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: BoardDimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new(dim: BoardDimensions) -> Self {
        let cells = vec![Cell::default(); dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.dim.try_index(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.dim
            .try_index(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.cells[idx]
    }
}
