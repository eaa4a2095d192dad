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
//! Placement validation and the randomized search for open positions.
use enumflags2::BitFlags;
use log::trace;
use rand::Rng;

use crate::{
    board::{grid::Grid, BorderRect, CannotPlaceReason, Coordinate, Error, Orientation},
    vessels::VesselKind,
};

/// Cells a vessel would cover if placed. Produced by a successful placement check.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Footprint {
    rect: BorderRect,
    cells: Vec<usize>,
}

impl Footprint {
    /// Rectangle covered by the vessel.
    pub fn rect(&self) -> &BorderRect {
        &self.rect
    }

    /// Row-major indexes of the covered cells.
    pub fn indexes(&self) -> &[usize] {
        &self.cells
    }

    /// Number of covered cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, every vessel covers at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Pick a number in `[start, end)`.
/// Fails with [`InvalidArgument`][crate::board::ErrorKind::InvalidArgument] if the range
/// is empty.
pub fn random_in_range<R: Rng>(rng: &mut R, start: usize, end: usize) -> Result<usize, Error> {
    if start >= end {
        return Err(Error::invalid_argument(
            "random",
            format!("empty range [{}, {})", start, end),
        ));
    }
    Ok(rng.gen_range(start, end))
}

/// Pick one of the allowed orientations uniformly. Returns `None` if none are allowed.
pub(super) fn random_orientation<R: Rng>(
    rng: &mut R,
    allowed: BitFlags<Orientation>,
) -> Option<Orientation> {
    let horizontal = allowed.contains(Orientation::Horizontal);
    let vertical = allowed.contains(Orientation::Vertical);
    match (horizontal, vertical) {
        (true, true) if rng.gen() => Some(Orientation::Horizontal),
        (true, true) => Some(Orientation::Vertical),
        (true, false) => Some(Orientation::Horizontal),
        (false, true) => Some(Orientation::Vertical),
        (false, false) => None,
    }
}

/// Check whether a vessel of `kind` can be anchored at `anchor`. Does not modify the
/// grid.
pub(super) fn check_placement(
    grid: &Grid,
    anchor: Coordinate,
    kind: VesselKind,
    orientation: Orientation,
) -> Result<Footprint, CannotPlaceReason> {
    let rect = BorderRect::footprint(anchor, kind, orientation);
    if !rect.fits(&grid.dim) {
        return Err(CannotPlaceReason::OutOfBounds);
    }
    // Both corners are on the board, so every covered cell is too.
    let cells = grid
        .dim
        .footprint_cells(&rect)
        .map_err(|_| CannotPlaceReason::OutOfBounds)?;
    if let Some(&idx) = cells.iter().find(|&&idx| grid[idx].vessel.is_some()) {
        return Err(CannotPlaceReason::AlreadyOccupied(
            grid.dim.coordinate_of(idx),
        ));
    }
    Ok(Footprint { rect, cells })
}

/// Scan the grid once, circularly, starting from a random cell, and return the first
/// unoccupied anchor where the vessel fits in the given orientation.
pub(super) fn find_open_position<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    kind: VesselKind,
    orientation: Orientation,
) -> Option<Coordinate> {
    let total = grid.dim.total_size();
    let start = random_in_range(rng, 0, total).ok()?;
    (0..total)
        .map(|step| (start + step) % total)
        .filter(|&idx| grid[idx].vessel.is_none())
        .map(|idx| grid.dim.coordinate_of(idx))
        .find(|&anchor| match check_placement(grid, anchor, kind, orientation) {
            Ok(_) => true,
            Err(reason) => {
                trace!("{} {:?} rejected at {}: {}", kind, orientation, anchor, reason);
                false
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::board::{BoardDimensions, ErrorKind};

    #[test]
    fn random_in_range_rejects_empty_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = random_in_range(&mut rng, 5, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.subsystem(), "random");
        assert!(random_in_range(&mut rng, 6, 2).is_err());
        for _ in 0..100 {
            let n = random_in_range(&mut rng, 3, 8).unwrap();
            assert!(n >= 3 && n < 8);
        }
    }

    #[test]
    fn random_orientation_respects_allowed_set() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            assert_eq!(
                random_orientation(&mut rng, Orientation::Vertical.into()),
                Some(Orientation::Vertical)
            );
            assert_eq!(
                random_orientation(&mut rng, Orientation::Horizontal.into()),
                Some(Orientation::Horizontal)
            );
        }
        assert_eq!(random_orientation(&mut rng, BitFlags::empty()), None);

        let picks: Vec<_> = (0..64)
            .filter_map(|_| random_orientation(&mut rng, BitFlags::all()))
            .collect();
        assert!(picks.contains(&Orientation::Horizontal));
        assert!(picks.contains(&Orientation::Vertical));
    }

    #[test]
    fn scan_finds_the_only_open_slot() {
        let mut grid = Grid::new(BoardDimensions::new(3, 3).unwrap());
        // Fill everything except the bottom row.
        for idx in 0..6 {
            grid[idx].vessel = Some(crate::vessels::VesselId(0));
        }
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(
                find_open_position(&grid, &mut rng, VesselKind::Frigate, Orientation::Horizontal),
                Some(Coordinate::new(2, 0))
            );
        }
        assert_eq!(
            find_open_position(&grid, &mut rng, VesselKind::Frigate, Orientation::Vertical),
            None
        );
    }

    #[test]
    fn check_reports_first_conflict() {
        let mut grid = Grid::new(BoardDimensions::new(5, 5).unwrap());
        grid[7].vessel = Some(crate::vessels::VesselId(0));
        grid[8].vessel = Some(crate::vessels::VesselId(0));
        assert_eq!(
            check_placement(&grid, Coordinate::new(1, 0), VesselKind::Submarine, Orientation::Horizontal),
            Err(CannotPlaceReason::OutOfBounds)
        );
        assert_eq!(
            check_placement(&grid, Coordinate::new(1, 0), VesselKind::Frigate, Orientation::Horizontal),
            Err(CannotPlaceReason::AlreadyOccupied(Coordinate::new(1, 2)))
        );
        let footprint =
            check_placement(&grid, Coordinate::new(2, 0), VesselKind::Destroyer, Orientation::Horizontal)
                .unwrap();
        assert_eq!(footprint.indexes(), &[10, 11, 12, 13, 15, 16, 17, 18]);
        assert_eq!(footprint.len(), 8);
    }
}
