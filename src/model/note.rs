// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notes and finger-annotated notes.
//!
//! A [`Note`] has a fixed identity (tile, time, type, hold length) and a
//! color annotation that is the only thing the handing pass changes.
//! Chart metadata the core does not understand rides along in [`NoteMeta`].

use serde_json::Value;

use super::finger::{Finger, Hand};
use super::tile::{Column, Row, Tile};
use super::Millis;

/// Kind of keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteType {
    /// Tap, released immediately
    Beat,
    /// Held for `hold_length` milliseconds
    Hold,
}

impl NoteType {
    /// Decode the chart's numeric note type (0 = beat, 1 = hold)
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(NoteType::Beat),
            1 => Some(NoteType::Hold),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            NoteType::Beat => 0,
            NoteType::Hold => 1,
        }
    }
}

/// Hue/saturation/brightness, each clamped to 0-255 on write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    hue: u8,
    sat: u8,
    bri: u8,
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl Color {
    pub fn new(hue: i32, sat: i32, bri: i32) -> Self {
        Self {
            hue: clamp_channel(hue),
            sat: clamp_channel(sat),
            bri: clamp_channel(bri),
        }
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn sat(&self) -> u8 {
        self.sat
    }

    pub fn bri(&self) -> u8 {
        self.bri
    }

    pub fn set_hue(&mut self, hue: i32) {
        self.hue = clamp_channel(hue);
    }

    pub fn set_sat(&mut self, sat: i32) {
        self.sat = clamp_channel(sat);
    }

    pub fn set_bri(&mut self, bri: i32) {
        self.bri = clamp_channel(bri);
    }
}

/// Chart fields carried through the handing pass untouched.
///
/// Values are kept exactly as the chart spelled them (integer, float or
/// null) so they are written back the same way. `Null` means the note did
/// not come from a chart file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteMeta {
    pub bpm: Value,
    pub offset: Value,
    pub transition_in: Value,
    pub transition_out: Value,
    /// Note time in the chart's own unit (beats)
    pub source_time: Value,
    /// Hold length in the chart's own unit (beats)
    pub source_hold_length: Value,
}

/// One timed keypress on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    tile: Tile,
    time: Millis,
    note_type: NoteType,
    hold_length: Millis,
    color: Color,
    meta: NoteMeta,
}

impl Note {
    /// Create a note with default color and empty metadata
    pub fn new(tile: Tile, time: Millis, note_type: NoteType, hold_length: Millis) -> Self {
        Self {
            tile,
            time,
            note_type,
            hold_length,
            color: Color::default(),
            meta: NoteMeta::default(),
        }
    }

    /// Shorthand for a tap note
    pub fn beat(tile: Tile, time: Millis) -> Self {
        Self::new(tile, time, NoteType::Beat, 0)
    }

    /// Shorthand for a held note
    pub fn hold(tile: Tile, time: Millis, hold_length: Millis) -> Self {
        Self::new(tile, time, NoteType::Hold, hold_length)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_meta(mut self, meta: NoteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn time(&self) -> Millis {
        self.time
    }

    pub fn note_type(&self) -> NoteType {
        self.note_type
    }

    pub fn hold_length(&self) -> Millis {
        self.hold_length
    }

    pub fn column(&self) -> Column {
        self.tile.column()
    }

    pub fn row(&self) -> Row {
        self.tile.row()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn meta(&self) -> &NoteMeta {
        &self.meta
    }

    pub fn set_hue(&mut self, hue: i32) {
        self.color.set_hue(hue);
    }

    pub fn set_sat(&mut self, sat: i32) {
        self.color.set_sat(sat);
    }

    pub fn set_bri(&mut self, bri: i32) {
        self.color.set_bri(bri);
    }
}

/// A note with the finger that plays it.
///
/// Building one paints the note with its hand's color, so the color and the
/// finger can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerNote {
    note: Note,
    finger: Finger,
}

impl FingerNote {
    pub fn new(mut note: Note, finger: Finger) -> Self {
        note.color = finger.hand().color();
        Self { note, finger }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn finger(&self) -> Finger {
        self.finger
    }

    pub fn hand(&self) -> Hand {
        self.finger.hand()
    }

    /// Reassign the finger and repaint
    pub(crate) fn set_finger(&mut self, finger: Finger) {
        self.finger = finger;
        self.note.color = finger.hand().color();
    }

    pub fn into_note(self) -> Note {
        self.note
    }
}
