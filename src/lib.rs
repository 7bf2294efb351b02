// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hand and finger assignment for 3x3 tile-grid rhythm charts.
//!
//! Notes are grouped into chords, split into segments at long rests, and
//! handed segment by segment: the first chord of a segment by its columns,
//! the rest by feeding the previous chord's fingers forward. Every note comes
//! back with the same tile and time, painted with its hand's color.
//!
//! ```
//! use handing::{assign_handing, Hand, HandingConfig, Note, Tile};
//!
//! let notes = vec![
//!     Note::beat(Tile::MiddleLeft, 0),
//!     Note::beat(Tile::MiddleCenter, 120),
//! ];
//! let parsed = assign_handing(notes, &HandingConfig::default())?;
//! let hands: Vec<Hand> = parsed.map.fnotes().map(|f| f.hand()).collect();
//! assert_eq!(hands, vec![Hand::Left, Hand::Left]);
//! # Ok::<(), handing::HandingError>(())
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod handing;
pub mod model;

pub use config::{AdjacencyTable, HandingConfig};
pub use error::{CursorDirection, HandingError};
pub use handing::{HandingParser, HandingStats, ParsedHanding};
pub use model::{
    Chord, Color, Column, Digit, Finger, FingerChord, FingerMap, FingerNote, Hand, Map, Millis,
    Note, NoteMeta, NoteType, Row, Tile,
};

/// Hand a list of notes with the given configuration.
///
/// Notes may be in any order; they come back grouped by time.
pub fn assign_handing(
    notes: Vec<Note>,
    config: &HandingConfig,
) -> Result<ParsedHanding, HandingError> {
    HandingParser::new(config.clone()).parse_notes(notes)
}
