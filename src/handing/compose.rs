// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reassembling handed segments into one chart.

use crate::error::Result;
use crate::model::{FingerChord, FingerMap, FingerNote, Note};

/// Join per-segment chords, in segment order, into a finger map
pub fn compose<I>(segments: I) -> Result<FingerMap>
where
    I: IntoIterator<Item = Vec<FingerChord>>,
{
    FingerMap::new(segments.into_iter().flatten().collect())
}

/// Flat, time-ordered notes carrying their new colors, ready for a writer
pub fn flatten(map: FingerMap) -> Vec<FingerNote> {
    map.into_fnotes()
}

/// Plain notes with the handing colors applied
pub fn colored_notes(map: FingerMap) -> Vec<Note> {
    flatten(map).into_iter().map(FingerNote::into_note).collect()
}
