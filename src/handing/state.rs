// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pressed-finger bookkeeping.
//!
//! [`FingerState`] has one slot per tile. A slot holds the finger currently
//! down on that tile until the release rules clear it: taps release at the
//! next chord, holds release once they have been held for their full
//! length.

use crate::model::{Finger, Hand, Millis, Note, NoteType, Tile};

/// A finger that is down on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressedFinger {
    pub finger: Finger,
    pub press_time: Millis,
    pub note_type: NoteType,
    pub hold_length: Millis,
    pub time_held: Millis,
}

impl PressedFinger {
    /// Press `finger` for `note`
    pub fn press(finger: Finger, note: &Note) -> Self {
        Self {
            finger,
            press_time: note.time(),
            note_type: note.note_type(),
            hold_length: note.hold_length(),
            time_held: 0,
        }
    }

    pub fn hand(&self) -> Hand {
        self.finger.hand()
    }

    /// When the finger comes up, if it behaves as charted
    pub fn release_time(&self) -> Millis {
        match self.note_type {
            NoteType::Beat => self.press_time,
            NoteType::Hold => self.press_time + self.hold_length,
        }
    }
}

/// A finger cleared by a release pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    pub tile: Tile,
    pub finger: Finger,
    pub released_at: Millis,
}

/// Nine pressed-finger slots, one per tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState {
    slots: [Option<PressedFinger>; Tile::COUNT],
}

impl FingerState {
    /// All slots empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tile: Tile) -> Option<&PressedFinger> {
        self.slots[tile.index()].as_ref()
    }

    pub fn slots(&self) -> &[Option<PressedFinger>; Tile::COUNT] {
        &self.slots
    }

    /// Occupied tiles with their fingers, in tile order
    pub fn pressed(&self) -> impl Iterator<Item = (Tile, &PressedFinger)> {
        Tile::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(tile, slot)| slot.as_ref().map(|p| (*tile, p)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of fingers of `hand` that are down
    pub fn count_hand(&self, hand: Hand) -> usize {
        self.pressed().filter(|(_, p)| p.hand() == hand).count()
    }

    /// Occupy a tile, replacing whatever was there
    pub fn press(&mut self, tile: Tile, pressed: PressedFinger) -> Option<PressedFinger> {
        self.slots[tile.index()].replace(pressed)
    }

    /// Age every pressed finger by `elapsed` ms and clear the ones that are
    /// done.
    ///
    /// Taps always clear. Holds accumulate `elapsed` into `time_held` and
    /// clear once `time_held >= hold_length`.
    pub fn release(&mut self, elapsed: Millis) -> Vec<Released> {
        let mut released = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(pressed) = slot.as_mut() else {
                continue;
            };
            let done = match pressed.note_type {
                NoteType::Beat => true,
                NoteType::Hold => {
                    pressed.time_held += elapsed;
                    pressed.time_held >= pressed.hold_length
                }
            };
            if done {
                released.push(Released {
                    tile: Tile::ALL[index],
                    finger: pressed.finger,
                    released_at: pressed.release_time(),
                });
                *slot = None;
            }
        }
        released
    }
}
