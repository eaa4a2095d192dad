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
use std::fmt;

/// The kinds of vessel available in the game. Each kind has a fixed rectangular size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VesselKind {
    /// Gunboat: 1x1.
    Gunboat,
    /// Cruiser: 2x1.
    Cruiser,
    /// Frigate: 3x1.
    Frigate,
    /// Destroyer: 4x2.
    Destroyer,
    /// Submarine: 6x1.
    Submarine,
    /// Carrier: 7x2.
    Carrier,
}

impl VesselKind {
    /// Every vessel kind, smallest first.
    pub const ALL: &'static [VesselKind] = &[
        VesselKind::Gunboat,
        VesselKind::Cruiser,
        VesselKind::Frigate,
        VesselKind::Destroyer,
        VesselKind::Submarine,
        VesselKind::Carrier,
    ];

    /// Get the `(length, width)` of this kind of vessel.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            VesselKind::Gunboat => (1, 1),
            VesselKind::Cruiser => (2, 1),
            VesselKind::Frigate => (3, 1),
            VesselKind::Destroyer => (4, 2),
            VesselKind::Submarine => (6, 1),
            VesselKind::Carrier => (7, 2),
        }
    }

    /// Length of the vessel along its long axis.
    pub fn length(self) -> usize {
        self.dimensions().0
    }

    /// Width of the vessel across its long axis.
    pub fn width(self) -> usize {
        self.dimensions().1
    }

    /// Number of cells covered by this kind of vessel.
    pub fn area(self) -> usize {
        let (length, width) = self.dimensions();
        length * width
    }

    /// Two letter code for this kind, used when drawing a board.
    pub fn code(self) -> &'static str {
        match self {
            VesselKind::Gunboat => "GB",
            VesselKind::Cruiser => "CR",
            VesselKind::Frigate => "FR",
            VesselKind::Destroyer => "DE",
            VesselKind::Submarine => "SM",
            VesselKind::Carrier => "CA",
        }
    }

    /// Full name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            VesselKind::Gunboat => "Gunboat",
            VesselKind::Cruiser => "Cruiser",
            VesselKind::Frigate => "Frigate",
            VesselKind::Destroyer => "Destroyer",
            VesselKind::Submarine => "Submarine",
            VesselKind::Carrier => "Carrier",
        }
    }
}

impl fmt::Display for VesselKind {
    /// Writes the full name of the kind, honoring padding.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
