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
//! A player owns one board and fires at an opponent's board.
use std::cmp::Reverse;

use log::debug;
use rand::{rngs::StdRng, Rng};

use crate::{
    board::{Board, Coordinate, StrikeResult},
    vessels::VesselKind,
};

pub use self::errors::SetupError;

mod errors;

/// One side of the game.
#[derive(Debug, Clone)]
pub struct Player<R = StdRng> {
    board: Board<R>,
}

impl Player<StdRng> {
    /// Create a player with an empty `rows` by `cols` board seeded from system entropy.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SetupError> {
        Ok(Self::from_board(Board::new(rows, cols)?))
    }

    /// Create a player whose random placements are reproducible from `seed`.
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, SetupError> {
        Ok(Self::from_board(Board::seeded(rows, cols, seed)?))
    }
}

impl<R: Rng> Player<R> {
    /// Create a player whose board draws from the given random source.
    pub fn with_rng(rows: usize, cols: usize, rng: R) -> Result<Self, SetupError> {
        Ok(Self::from_board(Board::with_rng(rows, cols, rng)?))
    }

    /// Create a player that takes ownership of an existing board.
    pub fn from_board(board: Board<R>) -> Self {
        Self { board }
    }

    /// This player's board.
    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    /// Randomly place every vessel in `fleet` and return the number placed.
    ///
    /// Vessels are placed largest first, not in the order given, so the `placed` count
    /// of [`SetupError::FleetDoesNotFit`] follows that order. Setup is all
    /// or nothing: if any vessel fits nowhere, the vessels placed by this call are
    /// removed again and the board is left as it was.
    pub fn setup_board<I>(&mut self, fleet: I) -> Result<usize, SetupError>
    where
        I: IntoIterator<Item = VesselKind>,
    {
        let mut kinds: Vec<_> = fleet.into_iter().collect();
        kinds.sort_by_key(|kind| Reverse(kind.area()));
        let existing = self.board.vessels().len();
        let mut placed = 0;
        for kind in kinds {
            if !self.board.place_vessel_randomly(kind) {
                self.board.truncate_vessels(existing);
                return Err(SetupError::FleetDoesNotFit { kind, placed });
            }
            placed += 1;
        }
        debug!("placed {} vessels", placed);
        Ok(placed)
    }

    /// Randomly place `count` vessels of `kind`.
    pub fn add_vessels(&mut self, kind: VesselKind, count: usize) -> Result<usize, SetupError> {
        self.setup_board(std::iter::repeat(kind).take(count))
    }

    /// Fire at `coord` on the opponent's board and record the outcome on this
    /// player's tracking overlay.
    pub fn launch_attack<O: Rng>(&mut self, opponent: &mut Player<O>, coord: Coordinate) -> StrikeResult {
        let result = opponent.receive_attack(coord);
        self.board.record_launched_attack(coord, result);
        result
    }

    /// Resolve a strike from the opponent on this player's board.
    pub fn receive_attack(&mut self, coord: Coordinate) -> StrikeResult {
        self.board.receive_attack(coord)
    }

    /// Returns true while this player has at least one vessel afloat.
    pub fn has_vessels(&self) -> bool {
        self.board.has_surviving_vessels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        board::{ErrorKind, Orientation, StrikeMark},
        config::{Fleet, BOARD_SIZE},
    };

    #[test]
    fn degenerate_board_aborts_setup() {
        match Player::new(0, BOARD_SIZE) {
            Err(SetupError::Board(err)) => assert_eq!(err.kind(), ErrorKind::InvalidArgument),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn standard_fleet_fits_default_board() {
        let mut player = Player::seeded(BOARD_SIZE, BOARD_SIZE, 17).unwrap();
        let fleet = Fleet::standard();
        assert_eq!(player.setup_board(&fleet).unwrap(), fleet.total());
        assert_eq!(player.board().count_surviving_vessels(), fleet.total());
        assert!(player.has_vessels());
    }

    #[test]
    fn oversized_fleet_is_reported() {
        let mut player = Player::seeded(3, 3, 1).unwrap();
        let err = player
            .setup_board(vec![VesselKind::Frigate, VesselKind::Carrier])
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::FleetDoesNotFit {
                kind: VesselKind::Carrier,
                placed: 0,
            }
        );
        assert_eq!(player.board().count_surviving_vessels(), 0);

        let err = player
            .setup_board(vec![VesselKind::Gunboat, VesselKind::Destroyer])
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::FleetDoesNotFit {
                kind: VesselKind::Destroyer,
                placed: 0,
            }
        );
        assert_eq!(player.setup_board(vec![VesselKind::Frigate, VesselKind::Gunboat]), Ok(2));
    }

    #[test]
    fn failed_setup_leaves_board_unchanged() {
        let mut player = Player::seeded(3, 3, 5).unwrap();
        assert_eq!(player.add_vessels(VesselKind::Gunboat, 1), Ok(1));
        let before: Vec<_> = player
            .board()
            .iter_rows()
            .flatten()
            .map(|cell| cell.vessel_id())
            .collect();

        let err = player
            .setup_board(vec![
                VesselKind::Frigate,
                VesselKind::Frigate,
                VesselKind::Frigate,
                VesselKind::Gunboat,
            ])
            .unwrap_err();
        match err {
            SetupError::FleetDoesNotFit { placed, .. } => assert!(placed < 4),
            other => panic!("unexpected {:?}", other),
        }
        let after: Vec<_> = player
            .board()
            .iter_rows()
            .flatten()
            .map(|cell| cell.vessel_id())
            .collect();
        assert_eq!(before, after);
        assert_eq!(player.board().vessels().len(), 1);

        // A smaller fleet still fits after the rollback.
        assert_eq!(
            player.setup_board(vec![VesselKind::Frigate, VesselKind::Frigate]),
            Ok(2)
        );
    }

    #[test]
    fn add_vessels_places_count() {
        let mut player = Player::seeded(4, 4, 9).unwrap();
        assert_eq!(player.add_vessels(VesselKind::Gunboat, 16).unwrap(), 16);
        assert_eq!(
            player.add_vessels(VesselKind::Gunboat, 1),
            Err(SetupError::FleetDoesNotFit {
                kind: VesselKind::Gunboat,
                placed: 0,
            })
        );
    }

    #[test]
    fn attack_updates_both_boards() {
        let mut attacker = Player::seeded(5, 5, 2).unwrap();
        let mut board = Board::seeded(5, 5, 3).unwrap();
        assert!(board.place_vessel_at(Coordinate::new(0, 0), VesselKind::Cruiser, Orientation::Vertical));
        let mut defender = Player::from_board(board);

        let target = Coordinate::new(1, 0);
        assert_eq!(attacker.launch_attack(&mut defender, target), StrikeResult::Hit);
        assert_eq!(attacker.board().cell(target).unwrap().launched(), StrikeMark::Hit);
        assert_eq!(attacker.board().cell(target).unwrap().received(), StrikeMark::Unmarked);
        assert_eq!(defender.board().cell(target).unwrap().received(), StrikeMark::Hit);

        let miss = Coordinate::new(4, 4);
        assert_eq!(attacker.launch_attack(&mut defender, miss), StrikeResult::Miss);
        assert_eq!(attacker.board().cell(miss).unwrap().launched(), StrikeMark::Miss);

        assert_eq!(
            attacker.launch_attack(&mut defender, Coordinate::new(0, 0)),
            StrikeResult::Destroyed
        );
        assert!(!defender.has_vessels());
        assert_eq!(
            attacker.launch_attack(&mut defender, Coordinate::new(7, 7)),
            StrikeResult::Invalid
        );
    }
}
