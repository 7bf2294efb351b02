// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords: notes that share one timestamp.
//!
//! Single notes are single-note chords. Both chord types refuse to be built
//! empty or from notes at different times.

use crate::error::{HandingError, Result};

use super::finger::Hand;
use super::note::{FingerNote, Note};
use super::Millis;

fn common_time<I>(kind: &'static str, mut times: I) -> Result<Millis>
where
    I: Iterator<Item = Millis>,
{
    let expected = times.next().ok_or(HandingError::EmptyChord { kind })?;
    for found in times {
        if found != expected {
            return Err(HandingError::MismatchedTimes {
                kind,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Simultaneous notes
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    notes: Vec<Note>,
    time: Millis,
}

impl Chord {
    pub fn new(notes: Vec<Note>) -> Result<Self> {
        let time = common_time("Chord", notes.iter().map(Note::time))?;
        Ok(Self { notes, time })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn time(&self) -> Millis {
        self.time
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Simultaneous notes with fingers assigned
#[derive(Debug, Clone, PartialEq)]
pub struct FingerChord {
    fnotes: Vec<FingerNote>,
    time: Millis,
}

impl FingerChord {
    pub fn new(fnotes: Vec<FingerNote>) -> Result<Self> {
        let time = common_time("FingerChord", fnotes.iter().map(|f| f.note().time()))?;
        Ok(Self { fnotes, time })
    }

    pub fn fnotes(&self) -> &[FingerNote] {
        &self.fnotes
    }

    pub fn time(&self) -> Millis {
        self.time
    }

    pub fn len(&self) -> usize {
        self.fnotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fnotes.is_empty()
    }

    /// Whether any note in the chord is played by `hand`
    pub fn uses_hand(&self, hand: Hand) -> bool {
        self.fnotes.iter().any(|f| f.hand() == hand)
    }

    pub fn into_fnotes(self) -> Vec<FingerNote> {
        self.fnotes
    }
}

/// Group notes into chords of equal time.
///
/// Notes are sorted stably by time first, so input order within a timestamp
/// is kept.
pub fn build_chords(mut notes: Vec<Note>) -> Result<Vec<Chord>> {
    notes.sort_by_key(Note::time);

    let mut chords: Vec<Chord> = Vec::new();
    let mut group: Vec<Note> = Vec::new();
    for note in notes {
        if group.last().is_some_and(|last| last.time() != note.time()) {
            chords.push(Chord::new(std::mem::take(&mut group))?);
        }
        group.push(note);
    }
    if !group.is_empty() {
        chords.push(Chord::new(group)?);
    }
    Ok(chords)
}
