// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Context-free handing for the first chord of a segment.
//!
//! Side columns go to their own hand. Center notes follow the rest of the
//! chord, preferring the right hand when both hands are present, and stay
//! ambiguous only when the whole chord is in the center column.

use tracing::debug;

use crate::error::Result;
use crate::model::{Chord, Column, Finger, FingerChord, FingerNote, Hand};

/// Hand a note gets from its column alone
pub fn column_hand(column: Column) -> Hand {
    match column {
        Column::Left => Hand::Left,
        Column::Right => Hand::Right,
        Column::Center => Hand::Either,
    }
}

/// Assign hands to `chord` without looking at any other chord
pub fn default_handing(chord: &Chord) -> Result<FingerChord> {
    let mut fnotes: Vec<FingerNote> = chord
        .notes()
        .iter()
        .map(|note| FingerNote::new(note.clone(), Finger::any(column_hand(note.column()))))
        .collect();

    let resolved = if fnotes.iter().any(|f| f.hand() == Hand::Right) {
        Hand::Right
    } else if fnotes.iter().any(|f| f.hand() == Hand::Left) {
        Hand::Left
    } else {
        debug!(time = chord.time(), notes = chord.len(), "center-only chord left ambiguous");
        Hand::Either
    };

    for fnote in fnotes.iter_mut().filter(|f| f.hand() == Hand::Either) {
        fnote.set_finger(fnote.finger().on_hand(resolved));
    }

    FingerChord::new(fnotes)
}
