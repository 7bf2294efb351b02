// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The 3x3 tile grid.
//!
//! Tiles are numbered row-major from the top left:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HandingError;

/// Grid column, which decides the default hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Center,
    Right,
}

/// Grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

/// One of the nine tiles of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tile {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Tile {
    /// Number of tiles on the grid
    pub const COUNT: usize = 9;

    /// All tiles in index order
    pub const ALL: [Tile; Tile::COUNT] = [
        Tile::TopLeft,
        Tile::TopCenter,
        Tile::TopRight,
        Tile::MiddleLeft,
        Tile::MiddleCenter,
        Tile::MiddleRight,
        Tile::BottomLeft,
        Tile::BottomCenter,
        Tile::BottomRight,
    ];

    /// Build a tile from its grid index (0-8)
    pub fn from_index(index: i64) -> Result<Self, HandingError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Tile::ALL.get(i).copied())
            .ok_or(HandingError::InvalidTile(index))
    }

    /// Grid index (0-8)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn column(self) -> Column {
        match self.index() % 3 {
            0 => Column::Left,
            1 => Column::Center,
            _ => Column::Right,
        }
    }

    pub fn row(self) -> Row {
        match self.index() / 3 {
            0 => Row::Top,
            1 => Row::Middle,
            _ => Row::Bottom,
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = HandingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tile::from_index(value as i64)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile as u8
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tile::TopLeft => "TL",
            Tile::TopCenter => "TC",
            Tile::TopRight => "TR",
            Tile::MiddleLeft => "ML",
            Tile::MiddleCenter => "MC",
            Tile::MiddleRight => "MR",
            Tile::BottomLeft => "BL",
            Tile::BottomCenter => "BC",
            Tile::BottomRight => "BR",
        };
        write!(f, "{}", name)
    }
}
