// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tile adjacency priority table.
//!
//! For every tile, the other eight tiles ranked by how naturally a finger
//! already resting there extends to it. The default ranking puts short,
//! inward moves first, then downward diagonals, then gradually steeper
//! upward moves, and breaks left/right ties toward the right.

use serde::{Deserialize, Serialize};

use crate::error::HandingError;
use crate::model::Tile;

/// Neighbors ranked per tile
pub type Neighbors = [Tile; Tile::COUNT - 1];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct AdjacencyTable {
    entries: [Neighbors; Tile::COUNT],
}

const fn t(index: usize) -> Tile {
    Tile::ALL[index]
}

const DEFAULT_ENTRIES: [Neighbors; Tile::COUNT] = [
    [t(1), t(3), t(4), t(2), t(6), t(5), t(7), t(8)],
    [t(2), t(0), t(4), t(5), t(3), t(7), t(8), t(6)],
    [t(1), t(5), t(4), t(0), t(8), t(3), t(7), t(6)],
    [t(4), t(6), t(0), t(7), t(1), t(5), t(8), t(2)],
    [t(5), t(3), t(7), t(1), t(8), t(6), t(2), t(0)],
    [t(4), t(8), t(2), t(7), t(1), t(3), t(6), t(0)],
    [t(7), t(3), t(4), t(8), t(0), t(1), t(5), t(2)],
    [t(8), t(6), t(4), t(5), t(3), t(1), t(2), t(0)],
    [t(7), t(5), t(4), t(6), t(2), t(3), t(1), t(0)],
];

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES,
        }
    }
}

impl AdjacencyTable {
    /// Build a table, checking every entry ranks exactly the other eight tiles
    pub fn new(entries: [Neighbors; Tile::COUNT]) -> Result<Self, HandingError> {
        for (index, neighbors) in entries.iter().enumerate() {
            let origin = Tile::ALL[index];
            let mut seen = [false; Tile::COUNT];
            for tile in neighbors {
                if *tile == origin {
                    return Err(HandingError::InvalidConfig(format!(
                        "adjacency entry for tile {} lists itself",
                        index
                    )));
                }
                if std::mem::replace(&mut seen[tile.index()], true) {
                    return Err(HandingError::InvalidConfig(format!(
                        "adjacency entry for tile {} lists tile {} twice",
                        index,
                        tile.index()
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Ranked neighbors of `tile`, most preferred first
    pub fn neighbors(&self, tile: Tile) -> &Neighbors {
        &self.entries[tile.index()]
    }
}

impl TryFrom<Vec<Vec<Tile>>> for AdjacencyTable {
    type Error = HandingError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        if rows.len() != Tile::COUNT {
            return Err(HandingError::InvalidConfig(format!(
                "adjacency table needs {} entries, found {}",
                Tile::COUNT,
                rows.len()
            )));
        }
        let mut entries = DEFAULT_ENTRIES;
        for (index, row) in rows.into_iter().enumerate() {
            entries[index] = Neighbors::try_from(row).map_err(|row| {
                HandingError::InvalidConfig(format!(
                    "adjacency entry for tile {} needs {} neighbors, found {}",
                    index,
                    Tile::COUNT - 1,
                    row.len()
                ))
            })?;
        }
        Self::new(entries)
    }
}

impl From<AdjacencyTable> for Vec<Vec<Tile>> {
    fn from(table: AdjacencyTable) -> Self {
        table.entries.iter().map(|row| row.to_vec()).collect()
    }
}
