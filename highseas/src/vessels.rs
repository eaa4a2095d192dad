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
//! Vessels and the fixed table of vessel kinds.
pub use self::kind::VesselKind;

mod kind;

/// Index of a vessel in a single board's vessel list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct VesselId(pub(crate) usize);

impl VesselId {
    /// Position of the vessel in [`Board::vessels`][crate::board::Board::vessels].
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single vessel placed on a board, tracking how much more damage it can take.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// Kind of vessel.
    kind: VesselKind,

    /// Remaining hit points. Zero means the vessel is destroyed.
    integrity: u32,
}

impl Vessel {
    /// Construct an undamaged vessel of the given kind. Its integrity is the number of
    /// cells it covers.
    pub fn new(kind: VesselKind) -> Self {
        Self {
            kind,
            integrity: Self::initial_integrity_of(kind),
        }
    }

    fn initial_integrity_of(kind: VesselKind) -> u32 {
        // The largest vessel covers 14 cells.
        kind.area() as u32
    }

    /// Kind of this vessel.
    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    /// Remaining integrity.
    pub fn integrity(&self) -> u32 {
        self.integrity
    }

    /// Integrity the vessel had before it took any damage.
    pub fn initial_integrity(&self) -> u32 {
        Self::initial_integrity_of(self.kind)
    }

    /// Apply `amount` points of damage and return the remaining integrity, which never
    /// drops below zero.
    pub fn apply_hit(&mut self, amount: u32) -> u32 {
        self.integrity = self.integrity.saturating_sub(amount);
        self.integrity
    }

    /// Returns true once the vessel's integrity has been exhausted.
    pub fn is_destroyed(&self) -> bool {
        self.integrity == 0
    }
}
