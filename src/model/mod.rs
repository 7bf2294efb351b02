// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chart data model.
//!
//! This module provides the value types the handing pass works on:
//! - Tiles of the 3x3 grid with their rows and columns
//! - Hands and fingers
//! - Notes, finger-annotated notes, and their colors
//! - Chords and chart-level chord sequences

pub mod chord;
pub mod finger;
pub mod map;
pub mod note;
pub mod tile;

pub use chord::{build_chords, Chord, FingerChord};
pub use finger::{Digit, Finger, Hand, EITHER_HUE, LEFT_HUE, RIGHT_HUE};
pub use map::{FingerMap, Map};
pub use note::{Color, FingerNote, Note, NoteMeta, NoteType};
pub use tile::{Column, Row, Tile};

/// Time in milliseconds from the start of the chart
pub type Millis = i64;
