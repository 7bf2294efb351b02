// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chart-level containers: time-ordered chord sequences.

use crate::error::{HandingError, Result};

use super::chord::{build_chords, Chord, FingerChord};
use super::note::{FingerNote, Note};
use super::Millis;

fn check_ascending<I>(kind: &'static str, times: I) -> Result<()>
where
    I: IntoIterator<Item = Millis>,
{
    let mut previous: Option<Millis> = None;
    for next in times {
        if let Some(previous) = previous {
            if next <= previous {
                return Err(HandingError::Unordered {
                    kind,
                    previous,
                    next,
                });
            }
        }
        previous = Some(next);
    }
    Ok(())
}

/// A chart as a sequence of chords in strictly ascending time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    chords: Vec<Chord>,
}

impl Map {
    pub fn new(chords: Vec<Chord>) -> Result<Self> {
        check_ascending("Map", chords.iter().map(Chord::time))?;
        Ok(Self { chords })
    }

    /// Group loose notes into chords and build a map from them
    pub fn from_notes(notes: Vec<Note>) -> Result<Self> {
        Self::new(build_chords(notes)?)
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Total number of notes across all chords
    pub fn note_count(&self) -> usize {
        self.chords.iter().map(Chord::len).sum()
    }
}

/// A handed chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FingerMap {
    fchords: Vec<FingerChord>,
}

impl FingerMap {
    pub fn new(fchords: Vec<FingerChord>) -> Result<Self> {
        check_ascending("FingerMap", fchords.iter().map(FingerChord::time))?;
        Ok(Self { fchords })
    }

    pub fn fchords(&self) -> &[FingerChord] {
        &self.fchords
    }

    pub fn is_empty(&self) -> bool {
        self.fchords.is_empty()
    }

    /// All finger notes in time order
    pub fn fnotes(&self) -> impl Iterator<Item = &FingerNote> {
        self.fchords.iter().flat_map(|c| c.fnotes().iter())
    }

    pub fn note_count(&self) -> usize {
        self.fchords.iter().map(FingerChord::len).sum()
    }

    /// Flatten into finger notes in time order
    pub fn into_fnotes(self) -> Vec<FingerNote> {
        self.fchords
            .into_iter()
            .flat_map(FingerChord::into_fnotes)
            .collect()
    }
}
