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
//! Types that make up the game board.

use enumflags2::BitFlags;
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::vessels::{Vessel, VesselId, VesselKind};

use self::grid::Grid;
pub use self::{
    common::Coordinate,
    errors::{CannotPlaceReason, Error, ErrorKind},
    geometry::{footprint_rect, BoardDimensions, BorderRect, Orientation},
    grid::{Cell, StrikeMark},
    placement::{random_in_range, Footprint},
};

pub mod common;
mod errors;
mod geometry;
mod grid;
mod placement;

/// Outcome of a strike against a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StrikeResult {
    /// The coordinate was not on the board.
    Invalid,
    /// The cell had already been struck. Nothing changed.
    AlreadyStruck,
    /// The strike found open water.
    Miss,
    /// The strike damaged a vessel that is still afloat.
    Hit,
    /// The strike used up the last of a vessel's integrity.
    Destroyed,
}

impl StrikeResult {
    /// Returns true if the strike damaged a vessel.
    pub fn is_hit(self) -> bool {
        match self {
            StrikeResult::Hit | StrikeResult::Destroyed => true,
            StrikeResult::Invalid | StrikeResult::AlreadyStruck | StrikeResult::Miss => false,
        }
    }

    /// The marker the attacker records for this outcome on their own board.
    pub fn launched_mark(self) -> StrikeMark {
        if self.is_hit() {
            StrikeMark::Hit
        } else {
            StrikeMark::Miss
        }
    }
}

/// Reference to a particular cell in the grid, carrying what a presentation layer needs
/// to draw it.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// The cell itself.
    cell: &'a Cell,

    /// The vessel that occupies this cell, if any.
    vessel: Option<&'a Vessel>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The id of the vessel occupying this cell, if any.
    pub fn vessel_id(&self) -> Option<VesselId> {
        self.cell.vessel
    }

    /// The vessel occupying this cell, if any.
    pub fn vessel(&self) -> Option<&'a Vessel> {
        self.vessel
    }

    /// Two letter code of the occupying vessel, if any.
    pub fn vessel_code(&self) -> Option<&'static str> {
        self.vessel.map(|vessel| vessel.kind().code())
    }

    /// Whether the occupying vessel, if any, has been destroyed.
    pub fn vessel_destroyed(&self) -> bool {
        self.vessel.map_or(false, Vessel::is_destroyed)
    }

    /// Whether the opponent has struck this cell.
    pub fn struck(&self) -> bool {
        self.cell.received.is_marked()
    }

    /// Strike received on this cell.
    pub fn received(&self) -> StrikeMark {
        self.cell.received
    }

    /// Strike this player launched at the same position on the opponent's board.
    pub fn launched(&self) -> StrikeMark {
        self.cell.launched
    }
}

/// A single player's board: the grid of cells, the vessels placed on it and the random
/// source used for placement.
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    /// Grid of cells occupied by vessels.
    grid: Grid,

    /// Vessels in the order they were placed. Cells refer to these by index.
    vessels: Vec<Vessel>,

    /// Random source, seeded once when the board is built.
    rng: R,
}

impl Board<StdRng> {
    /// Create an empty board seeded from system entropy.
    /// Fails with [`ErrorKind::InvalidArgument`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    /// Create an empty board whose placement search is reproducible from `seed`.
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, Error> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Board<R> {
    /// Create an empty board that draws from the given random source.
    pub fn with_rng(rows: usize, cols: usize, rng: R) -> Result<Self, Error> {
        let dim = BoardDimensions::new(rows, cols).map_err(|err| err.in_subsystem("board"))?;
        debug!("created {}x{} board", rows, cols);
        Ok(Self {
            grid: Grid::new(dim),
            vessels: Vec::new(),
            rng,
        })
    }

    /// Get the [`BoardDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &BoardDimensions {
        &self.grid.dim
    }

    /// All vessels placed on this board, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Get the vessel with the given id if it exists.
    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.index())
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(coord).map(|cell| self.cell_ref(coord, cell))
    }

    fn cell_ref<'a>(&'a self, coord: Coordinate, cell: &'a Cell) -> CellRef<'a> {
        CellRef {
            coord,
            cell,
            vessel: cell.vessel.and_then(|id| self.vessels.get(id.index())),
        }
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over a single row.
    pub fn iter_rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a>>> {
        let cols = self.grid.dim.cols();
        self.grid.cells.chunks(cols).enumerate().map(move |(row, cells)| {
            cells.iter().enumerate().map(move |(col, cell)| {
                self.cell_ref(Coordinate::new(row as isize, col as isize), cell)
            })
        })
    }

    /// Check if a vessel could be placed at the given position, without placing it.
    /// On success returns the cells it would cover.
    pub fn check_placement(
        &self,
        anchor: Coordinate,
        kind: VesselKind,
        orientation: Orientation,
    ) -> Result<Footprint, CannotPlaceReason> {
        placement::check_placement(&self.grid, anchor, kind, orientation)
    }

    /// Place a new vessel of `kind` with its top left corner at `anchor`. Returns false,
    /// leaving the board unchanged, if the vessel would leave the board or overlap
    /// another vessel.
    pub fn place_vessel_at(
        &mut self,
        anchor: Coordinate,
        kind: VesselKind,
        orientation: Orientation,
    ) -> bool {
        let footprint = match self.check_placement(anchor, kind, orientation) {
            Ok(footprint) => footprint,
            Err(reason) => {
                debug!("cannot place {} at {}: {}", kind, anchor, reason);
                return false;
            }
        };
        let id = VesselId(self.vessels.len());
        self.vessels.push(Vessel::new(kind));
        for &idx in footprint.indexes() {
            self.grid[idx].vessel = Some(id);
        }
        debug!("placed {} #{} at {} {:?}", kind, id.index(), anchor, orientation);
        true
    }

    /// Find an anchor where a vessel of `kind` would fit in the given orientation. The
    /// search starts at a random cell and wraps around the board once.
    pub fn find_open_position(&mut self, kind: VesselKind, orientation: Orientation) -> Option<Coordinate> {
        placement::find_open_position(&self.grid, &mut self.rng, kind, orientation)
    }

    /// Place a vessel of `kind` at a random open position with a random orientation. If
    /// it fits nowhere in the chosen orientation, the other one is tried. Returns false
    /// only if the vessel fits nowhere on the board.
    pub fn place_vessel_randomly(&mut self, kind: VesselKind) -> bool {
        self.place_vessel_randomly_in(kind, BitFlags::all())
    }

    /// Like [`Board::place_vessel_randomly`], but only considers the given orientations.
    pub fn place_vessel_randomly_in<B: Into<BitFlags<Orientation>>>(
        &mut self,
        kind: VesselKind,
        orientations: B,
    ) -> bool {
        let mut remaining = orientations.into();
        let mut orientation = match placement::random_orientation(&mut self.rng, remaining) {
            Some(orientation) => orientation,
            None => return false,
        };
        loop {
            remaining.remove(orientation);
            if let Some(anchor) = self.find_open_position(kind, orientation) {
                return self.place_vessel_at(anchor, kind, orientation);
            }
            debug!("no room for {} {:?}", kind, orientation);
            orientation = orientation.opposite();
            if !remaining.contains(orientation) {
                warn!("no open position for {} on this board", kind);
                return false;
            }
        }
    }

    /// Resolve an incoming strike on the given cell.
    pub fn receive_attack(&mut self, coord: Coordinate) -> StrikeResult {
        let cell = match self.grid.get_mut(coord) {
            None => return StrikeResult::Invalid,
            Some(cell) if cell.received.is_marked() => return StrikeResult::AlreadyStruck,
            Some(cell) => cell,
        };
        let result = match cell.vessel {
            None => {
                cell.received = StrikeMark::Miss;
                StrikeResult::Miss
            }
            Some(id) => {
                cell.received = StrikeMark::Hit;
                // Every id stored in a cell refers to a vessel that was pushed first.
                let remaining = self.vessels.get_mut(id.index()).map(|v| v.apply_hit(1));
                if remaining == Some(0) {
                    StrikeResult::Destroyed
                } else {
                    StrikeResult::Hit
                }
            }
        };
        debug!("strike at {}: {:?}", coord, result);
        result
    }

    /// Record on this board the outcome of a strike this player launched at the
    /// opponent. A hit marker is never replaced by a miss. Returns false if the
    /// coordinate is not on this board.
    pub fn record_launched_attack(&mut self, coord: Coordinate, result: StrikeResult) -> bool {
        match self.grid.get_mut(coord) {
            Some(cell) => {
                if cell.launched != StrikeMark::Hit {
                    cell.launched = result.launched_mark();
                }
                true
            }
            None => false,
        }
    }

    /// Remove every vessel placed after the first `len`, clearing the cells they covered.
    pub(crate) fn truncate_vessels(&mut self, len: usize) {
        if len >= self.vessels.len() {
            return;
        }
        for cell in self.grid.cells.iter_mut() {
            if cell.vessel.map_or(false, |id| id.index() >= len) {
                cell.vessel = None;
            }
        }
        self.vessels.truncate(len);
        debug!("rolled back to {} vessels", len);
    }

    /// Number of vessels that have not been destroyed.
    pub fn count_surviving_vessels(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_destroyed()).count()
    }

    /// Returns true while at least one vessel is afloat.
    pub fn has_surviving_vessels(&self) -> bool {
        self.vessels.iter().any(|v| !v.is_destroyed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: usize, cols: usize) -> Board {
        Board::seeded(rows, cols, 0x5eed).unwrap()
    }

    #[test]
    fn rejects_degenerate_boards() {
        let err = Board::new(0, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.subsystem(), "board");
        assert_eq!(Board::new(5, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn gunboat_scenario() {
        let mut b = board(10, 10);
        let origin = Coordinate::new(0, 0);
        assert!(b.place_vessel_at(origin, VesselKind::Gunboat, Orientation::Horizontal));
        assert!(!b.place_vessel_at(origin, VesselKind::Gunboat, Orientation::Horizontal));
        assert_eq!(b.vessels().len(), 1);
        assert_eq!(b.receive_attack(origin), StrikeResult::Destroyed);
        assert_eq!(b.receive_attack(origin), StrikeResult::AlreadyStruck);
        assert_eq!(b.count_surviving_vessels(), 0);
        assert!(!b.has_surviving_vessels());
    }

    #[test]
    fn stamps_vessel_id_on_footprint() {
        let mut b = board(10, 10);
        assert!(b.place_vessel_at(Coordinate::new(1, 2), VesselKind::Destroyer, Orientation::Vertical));
        assert!(b.place_vessel_at(Coordinate::new(0, 0), VesselKind::Frigate, Orientation::Horizontal));
        let occupied: Vec<_> = b
            .iter_rows()
            .flatten()
            .filter_map(|cell| cell.vessel_id().map(|id| (cell.coord(), id.index())))
            .collect();
        assert_eq!(occupied.len(), 8 + 3);
        for (coord, id) in occupied {
            if id == 0 {
                assert!(coord.row >= 1 && coord.row < 5 && coord.col >= 2 && coord.col < 4);
            } else {
                assert_eq!(coord.row, 0);
                assert!(coord.col < 3);
            }
        }
        assert_eq!(b.cell(Coordinate::new(4, 3)).unwrap().vessel_code(), Some("DE"));
        assert_eq!(b.cell(Coordinate::new(5, 3)).unwrap().vessel_code(), None);
        assert!(b.cell(Coordinate::new(10, 0)).is_none());
    }

    #[test]
    fn overlap_leaves_board_unchanged() {
        let mut b = board(10, 10);
        assert!(b.place_vessel_at(Coordinate::new(2, 2), VesselKind::Frigate, Orientation::Vertical));
        assert_eq!(
            b.check_placement(Coordinate::new(3, 0), VesselKind::Frigate, Orientation::Horizontal),
            Err(CannotPlaceReason::AlreadyOccupied(Coordinate::new(3, 2)))
        );
        assert!(!b.place_vessel_at(Coordinate::new(3, 0), VesselKind::Frigate, Orientation::Horizontal));
        assert_eq!(b.vessels().len(), 1);
        assert_eq!(b.cell(Coordinate::new(3, 0)).unwrap().vessel_id(), None);
        assert_eq!(b.cell(Coordinate::new(3, 1)).unwrap().vessel_id(), None);
    }

    #[test]
    fn hits_escalate_to_destroyed() {
        let mut b = board(10, 10);
        assert!(b.place_vessel_at(Coordinate::new(5, 5), VesselKind::Cruiser, Orientation::Horizontal));
        assert_eq!(b.receive_attack(Coordinate::new(5, 5)), StrikeResult::Hit);
        assert_eq!(b.vessels()[0].integrity(), 1);
        assert_eq!(b.receive_attack(Coordinate::new(5, 5)), StrikeResult::AlreadyStruck);
        assert_eq!(b.vessels()[0].integrity(), 1);
        assert_eq!(b.receive_attack(Coordinate::new(4, 5)), StrikeResult::Miss);
        assert_eq!(b.receive_attack(Coordinate::new(5, 6)), StrikeResult::Destroyed);
        assert!(b.cell(Coordinate::new(5, 6)).unwrap().vessel_destroyed());
        assert_eq!(b.cell(Coordinate::new(4, 5)).unwrap().received(), StrikeMark::Miss);
    }

    #[test]
    fn invalid_strikes_do_not_mutate() {
        let mut b = board(4, 4);
        assert_eq!(b.receive_attack(Coordinate::new(-1, 0)), StrikeResult::Invalid);
        assert_eq!(b.receive_attack(Coordinate::new(0, 4)), StrikeResult::Invalid);
        assert!(b.iter_rows().flatten().all(|cell| !cell.struck()));
    }

    #[test]
    fn carrier_never_fits_small_board() {
        let mut b = board(2, 2);
        for row in -1..3 {
            for col in -1..3 {
                for &o in &[Orientation::Horizontal, Orientation::Vertical] {
                    assert!(!b.place_vessel_at(Coordinate::new(row, col), VesselKind::Carrier, o));
                }
            }
        }
        assert!(!b.place_vessel_randomly(VesselKind::Carrier));
        assert_eq!(b.count_surviving_vessels(), 0);
    }

    #[test]
    fn random_placement_falls_back_to_other_orientation() {
        // A 1x6 strip only has room for a horizontal submarine.
        let mut b = board(1, 6);
        assert!(b.place_vessel_randomly(VesselKind::Submarine));
        assert_eq!(b.count_surviving_vessels(), 1);
        assert!(b.iter_rows().flatten().all(|cell| cell.vessel_id().is_some()));

        let mut b = board(6, 1);
        assert!(!b.place_vessel_randomly_in(VesselKind::Submarine, Orientation::Horizontal));
        assert!(b.place_vessel_randomly_in(VesselKind::Submarine, Orientation::Vertical));
        assert!(!b.place_vessel_randomly_in(VesselKind::Gunboat, BitFlags::empty()));
    }

    #[test]
    fn launched_marks_collapse_and_never_downgrade() {
        let mut b = board(10, 10);
        let c = Coordinate::new(3, 3);
        assert!(b.record_launched_attack(c, StrikeResult::Destroyed));
        assert_eq!(b.cell(c).unwrap().launched(), StrikeMark::Hit);
        assert!(b.record_launched_attack(c, StrikeResult::AlreadyStruck));
        assert_eq!(b.cell(c).unwrap().launched(), StrikeMark::Hit);

        let d = Coordinate::new(0, 9);
        assert!(b.record_launched_attack(d, StrikeResult::Invalid));
        assert_eq!(b.cell(d).unwrap().launched(), StrikeMark::Miss);
        assert!(b.record_launched_attack(d, StrikeResult::Hit));
        assert_eq!(b.cell(d).unwrap().launched(), StrikeMark::Hit);

        assert!(!b.record_launched_attack(Coordinate::new(10, 10), StrikeResult::Miss));
        // The launched overlay never touches the received marks.
        assert!(b.iter_rows().flatten().all(|cell| !cell.struck()));
    }

    #[test]
    fn truncate_clears_later_vessels() {
        let mut b = board(4, 4);
        assert!(b.place_vessel_at(Coordinate::new(0, 0), VesselKind::Frigate, Orientation::Horizontal));
        assert!(b.place_vessel_at(Coordinate::new(1, 0), VesselKind::Destroyer, Orientation::Horizontal));
        b.truncate_vessels(1);
        assert_eq!(b.vessels().len(), 1);
        let occupied = b.iter_rows().flatten().filter(|cell| cell.vessel_id().is_some()).count();
        assert_eq!(occupied, 3);
        assert!(b.place_vessel_at(Coordinate::new(2, 0), VesselKind::Destroyer, Orientation::Horizontal));
        b.truncate_vessels(5);
        assert_eq!(b.vessels().len(), 2);
    }

    #[test]
    fn same_seed_same_layout() {
        let layout = |seed| {
            let mut b = Board::seeded(10, 10, seed).unwrap();
            for &kind in VesselKind::ALL.iter().rev() {
                assert!(b.place_vessel_randomly(kind));
            }
            b.iter_rows()
                .flatten()
                .map(|cell| cell.vessel_id())
                .collect::<Vec<_>>()
        };
        assert_eq!(layout(42), layout(42));
    }
}
