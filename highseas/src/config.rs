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
//! Default board size and fleet composition.
use std::iter;

use crate::vessels::VesselKind;

/// Side length of the default square board.
pub const BOARD_SIZE: usize = 10;

/// Ordered list of vessel kinds and how many of each a player deploys.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fleet {
    entries: Vec<(VesselKind, usize)>,
}

impl Fleet {
    /// An empty fleet.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The standard fleet: one carrier, three cruisers, three destroyers, two frigates
    /// and two submarines.
    pub fn standard() -> Self {
        Self::new()
            .with(VesselKind::Carrier, 1)
            .with(VesselKind::Cruiser, 3)
            .with(VesselKind::Destroyer, 3)
            .with(VesselKind::Frigate, 2)
            .with(VesselKind::Submarine, 2)
    }

    /// Add `count` vessels of `kind` to the fleet.
    pub fn with(mut self, kind: VesselKind, count: usize) -> Self {
        self.add(kind, count);
        self
    }

    /// Add `count` vessels of `kind` to the fleet.
    pub fn add(&mut self, kind: VesselKind, count: usize) {
        if count > 0 {
            self.entries.push((kind, count));
        }
    }

    /// The `(kind, count)` entries in the order they were added.
    pub fn entries(&self) -> &[(VesselKind, usize)] {
        &self.entries
    }

    /// Iterate every vessel of the fleet, one item per vessel.
    pub fn iter(&self) -> impl '_ + Iterator<Item = VesselKind> {
        self.entries
            .iter()
            .flat_map(|&(kind, count)| iter::repeat(kind).take(count))
    }

    /// Total number of vessels.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Total number of cells the fleet covers.
    pub fn area(&self) -> usize {
        self.iter().map(VesselKind::area).sum()
    }
}

impl Default for Fleet {
    /// The [standard][Fleet::standard] fleet.
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = VesselKind;
    type IntoIter = Box<dyn 'a + Iterator<Item = VesselKind>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet() {
        let fleet = Fleet::default();
        assert_eq!(fleet.total(), 11);
        assert_eq!(fleet.area(), 14 + 3 * 2 + 3 * 8 + 2 * 3 + 2 * 6);
        assert_eq!(fleet.iter().next(), Some(VesselKind::Carrier));
        assert_eq!(
            fleet.iter().filter(|&k| k == VesselKind::Cruiser).count(),
            3
        );
    }

    #[test]
    fn zero_counts_are_dropped() {
        let fleet = Fleet::new()
            .with(VesselKind::Gunboat, 0)
            .with(VesselKind::Frigate, 2);
        assert_eq!(fleet.entries(), &[(VesselKind::Frigate, 2)]);
        assert_eq!((&fleet).into_iter().count(), 2);
    }
}
