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
//! Coordinate algebra for rectangular boards: converting between coordinates and flat
//! cell indexes, and computing the rectangle a vessel covers.
use std::convert::TryFrom;

use enumflags2::BitFlags;

use crate::{
    board::{Coordinate, Error},
    vessels::VesselKind,
};

const SUBSYSTEM: &str = "geometry";

/// Placement orientation of a vessel's long axis.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// The long axis runs along a row.
    Horizontal = 0b01,
    /// The long axis runs down a column.
    Vertical = 0b10,
}

impl Orientation {
    /// Get the other orientation.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Dimensions of a rectangular board. `rows` is the board's length and `cols` its width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardDimensions {
    rows: usize,
    cols: usize,
}

impl BoardDimensions {
    /// Create new [`BoardDimensions`]. Fails with
    /// [`InvalidArgument`][crate::board::ErrorKind::InvalidArgument] if either dimension
    /// is zero or the cell count would overflow.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::invalid_argument(
                SUBSYSTEM,
                format!("board dimensions must be nonzero, got {}x{}", rows, cols),
            ));
        }
        let fits = rows
            .checked_mul(cols)
            .filter(|&total| isize::try_from(total).is_ok())
            .is_some();
        if !fits {
            return Err(Error::invalid_argument(
                SUBSYSTEM,
                format!("board dimensions too large: {}x{}", rows, cols),
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows on the board.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns on the board.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.try_index(coord).is_some()
    }

    /// Convert a coordinate to its row-major cell index, or `None` if it is off the board.
    #[inline]
    pub fn try_index(&self, coord: Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(coord.col).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    /// Convert a coordinate to its row-major cell index.
    /// Fails with [`OutOfBounds`][crate::board::ErrorKind::OutOfBounds] if the
    /// coordinate is off the board.
    pub fn to_index(&self, coord: Coordinate) -> Result<usize, Error> {
        self.try_index(coord).ok_or_else(|| {
            Error::out_of_bounds(
                SUBSYSTEM,
                format!("{} is outside a {}x{} board", coord, self.rows, self.cols),
            )
        })
    }

    /// Convert a row-major cell index back into a coordinate.
    /// Fails with [`InvalidArgument`][crate::board::ErrorKind::InvalidArgument] for a
    /// negative index and with [`OutOfBounds`][crate::board::ErrorKind::OutOfBounds]
    /// for an index past the last cell.
    pub fn to_coordinate(&self, index: isize) -> Result<Coordinate, Error> {
        if index < 0 {
            return Err(Error::invalid_argument(
                SUBSYSTEM,
                format!("cell index must not be negative, got {}", index),
            ));
        }
        let idx = index as usize;
        if idx >= self.total_size() {
            return Err(Error::out_of_bounds(
                SUBSYSTEM,
                format!("cell index {} exceeds {} cells", idx, self.total_size()),
            ));
        }
        Ok(self.coordinate_of(idx))
    }

    /// Coordinate of an index already known to be on the board.
    pub(crate) fn coordinate_of(&self, idx: usize) -> Coordinate {
        debug_assert!(idx < self.total_size());
        // Dimensions are checked on construction so both parts fit in an isize.
        Coordinate::new((idx / self.cols) as isize, (idx % self.cols) as isize)
    }

    /// Get the row-major indexes of every cell covered by `rect`.
    /// Fails with [`OutOfBounds`][crate::board::ErrorKind::OutOfBounds] if the top left
    /// corner, or any other covered cell, is off the board. Callers that only want a
    /// yes/no answer should check [`BorderRect::fits`] first.
    pub fn footprint_cells(&self, rect: &BorderRect) -> Result<Vec<usize>, Error> {
        self.to_index(rect.top_left())?;
        self.to_index(rect.bottom_right())?;
        let mut cells = Vec::with_capacity(rect.area().min(self.total_size()));
        for row in rect.top_row..rect.bottom_row {
            for col in rect.top_col..rect.bottom_col {
                cells.push(self.to_index(Coordinate::new(row, col))?);
            }
        }
        Ok(cells)
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols as isize;
        (0..self.rows as isize).map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }
}

/// Rectangle covered by a vessel footprint. The bottom row and column are exclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BorderRect {
    /// First row covered.
    pub top_row: isize,
    /// First column covered.
    pub top_col: isize,
    /// One past the last row covered.
    pub bottom_row: isize,
    /// One past the last column covered.
    pub bottom_col: isize,
}

impl BorderRect {
    /// Compute the rectangle covered by a vessel of `kind` anchored at `anchor`.
    ///
    /// A horizontal vessel spans `width` rows and `length` columns, a vertical one spans
    /// `length` rows and `width` columns.
    pub fn footprint(anchor: Coordinate, kind: VesselKind, orientation: Orientation) -> Self {
        let (length, width) = kind.dimensions();
        let (rows, cols) = match orientation {
            Orientation::Horizontal => (width, length),
            Orientation::Vertical => (length, width),
        };
        Self {
            top_row: anchor.row,
            top_col: anchor.col,
            bottom_row: anchor.row.saturating_add(rows as isize),
            bottom_col: anchor.col.saturating_add(cols as isize),
        }
    }

    /// The anchor of the rectangle.
    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.top_row, self.top_col)
    }

    /// The last cell covered by the rectangle.
    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.bottom_row.saturating_sub(1), self.bottom_col.saturating_sub(1))
    }

    /// Number of cells covered, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        let rows = self.bottom_row.saturating_sub(self.top_row).max(0) as usize;
        let cols = self.bottom_col.saturating_sub(self.top_col).max(0) as usize;
        rows.saturating_mul(cols)
    }

    /// Returns true if both corners of the rectangle lie on the board.
    pub fn fits(&self, dim: &BoardDimensions) -> bool {
        dim.contains(self.top_left()) && dim.contains(self.bottom_right())
    }
}

/// Compute the rectangle covered by a vessel. See [`BorderRect::footprint`].
pub fn footprint_rect(anchor: Coordinate, kind: VesselKind, orientation: Orientation) -> BorderRect {
    BorderRect::footprint(anchor, kind, orientation)
}
