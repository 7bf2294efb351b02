// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Feed-forward finger propagation over one segment.
//!
//! [`FeedForward`] is a cursor over a segment's chords. The first chord is
//! handed by [`default_handing`]; every later chord is handed from the
//! fingers of the chord before it and the fingers still held down.
//!
//! For each new note the tile's adjacency entry is walked in priority order
//! and the first neighbor with an admissible finger lends its hand. A hand is
//! admissible when it
//! - can reach the note's column (a hand never crosses to the far column),
//! - has fewer than `max_fingers_per_hand` fingers busy,
//! - is not barred by an overload on the note's own tile.
//!
//! A same-tile re-hit slower than `min_overload_time` is a jack and keeps the
//! finger that played it. A faster one is an overload and bars that hand for
//! the note. Notes with no admissible neighbor fall back to their column hand.
//!
//! Every step pushes the state it started from, so [`FeedForward::prev_chord`]
//! can undo it. Nothing in the crate searches over alternatives yet; the
//! history is there for a constrained search layered on top.

use tracing::{debug, trace};

use crate::config::HandingConfig;
use crate::error::{CursorDirection, HandingError, Result};
use crate::model::{Chord, Column, Finger, FingerChord, FingerNote, Hand, Millis, Note, Tile};

use super::default::default_handing;
use super::state::{FingerState, PressedFinger};

/// Cursor position within a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    BeforeFirst,
    At(usize),
    AfterLast,
}

/// Counters for one segment's run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedForwardStats {
    /// Chords handed by the default assigner
    pub default_chords: usize,
    /// Chords handed from the previous chord
    pub propagated_chords: usize,
    /// Same-tile re-hits that kept their finger
    pub jacks: usize,
    /// Same-tile re-hits too fast for one finger
    pub overloads: usize,
    /// Notes handed by column because no neighbor was admissible
    pub fallbacks: usize,
    /// Notes left ambiguous
    pub unresolved: usize,
}

/// What the cursor saved before a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub state: FingerState,
    pub stats: FeedForwardStats,
}

/// A finger the new chord can extend from
#[derive(Debug, Clone, Copy)]
struct Anchor {
    finger: Finger,
    press_time: Millis,
    held: bool,
    /// Released just now but still inside the grace window
    lingering: bool,
}

/// Busy fingers per hand while a chord is being assigned
#[derive(Debug, Clone, Copy, Default)]
struct HandLoad {
    right: usize,
    left: usize,
}

impl HandLoad {
    fn get(&self, hand: Hand) -> usize {
        match hand {
            Hand::Right => self.right,
            Hand::Left => self.left,
            Hand::Either => 0,
        }
    }

    fn add(&mut self, hand: Hand) {
        match hand {
            Hand::Right => self.right += 1,
            Hand::Left => self.left += 1,
            Hand::Either => {}
        }
    }

    fn remove(&mut self, hand: Hand) {
        match hand {
            Hand::Right => self.right = self.right.saturating_sub(1),
            Hand::Left => self.left = self.left.saturating_sub(1),
            Hand::Either => {}
        }
    }
}

fn reaches(hand: Hand, column: Column) -> bool {
    !matches!(
        (hand, column),
        (Hand::Right, Column::Left) | (Hand::Left, Column::Right) | (Hand::Either, _)
    )
}

/// Stateful cursor that hands one segment chord by chord
pub struct FeedForward<'a> {
    chords: &'a [Chord],
    config: &'a HandingConfig,
    cursor: Cursor,
    state: FingerState,
    history: Vec<Snapshot>,
    assigned: Vec<FingerChord>,
    stats: FeedForwardStats,
}

impl<'a> FeedForward<'a> {
    /// Start before the first chord with no fingers down
    pub fn new(chords: &'a [Chord], config: &'a HandingConfig) -> Self {
        Self {
            chords,
            config,
            cursor: Cursor::BeforeFirst,
            state: FingerState::new(),
            history: Vec::new(),
            assigned: Vec::new(),
            stats: FeedForwardStats::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Fingers down after the current chord
    pub fn state(&self) -> &FingerState {
        &self.state
    }

    /// Saved states, oldest first
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Chords handed so far
    pub fn assigned(&self) -> &[FingerChord] {
        &self.assigned
    }

    pub fn stats(&self) -> FeedForwardStats {
        self.stats
    }

    /// The chord at the cursor, if the cursor is on one
    pub fn current(&self) -> Option<&FingerChord> {
        match self.cursor {
            Cursor::At(_) => self.assigned.last(),
            _ => None,
        }
    }

    /// Move to the next chord and hand it.
    ///
    /// Returns `None` when the cursor steps past the last chord, and fails
    /// if it is already there.
    pub fn next_chord(&mut self) -> Result<Option<&FingerChord>> {
        let next = match self.cursor {
            Cursor::BeforeFirst => 0,
            Cursor::At(i) => i + 1,
            Cursor::AfterLast => {
                return Err(HandingError::CursorBounds {
                    direction: CursorDirection::Forward,
                    len: self.chords.len(),
                })
            }
        };

        self.history.push(Snapshot {
            state: self.state,
            stats: self.stats,
        });

        if next >= self.chords.len() {
            self.cursor = Cursor::AfterLast;
            return Ok(None);
        }

        let fchord = if next == 0 {
            self.first_chord()?
        } else {
            self.step(next)?
        };
        self.assigned.push(fchord);
        self.cursor = Cursor::At(next);
        Ok(self.assigned.last())
    }

    /// Undo the last step, restoring the finger state it started from
    pub fn prev_chord(&mut self) -> Result<()> {
        let previous = match self.cursor {
            Cursor::BeforeFirst => {
                return Err(HandingError::CursorBounds {
                    direction: CursorDirection::Backward,
                    len: self.chords.len(),
                })
            }
            Cursor::At(0) => Cursor::BeforeFirst,
            Cursor::At(i) => Cursor::At(i - 1),
            Cursor::AfterLast => match self.chords.len() {
                0 => Cursor::BeforeFirst,
                len => Cursor::At(len - 1),
            },
        };

        if let Some(snapshot) = self.history.pop() {
            self.state = snapshot.state;
            self.stats = snapshot.stats;
        }
        if matches!(self.cursor, Cursor::At(_)) {
            self.assigned.pop();
        }
        self.cursor = previous;
        Ok(())
    }

    /// Walk the whole segment and return its handed chords
    pub fn run(mut self) -> Result<(Vec<FingerChord>, FeedForwardStats)> {
        while self.next_chord()?.is_some() {}
        Ok((self.assigned, self.stats))
    }

    fn first_chord(&mut self) -> Result<FingerChord> {
        let fchord = default_handing(&self.chords[0])?;
        for fnote in fchord.fnotes() {
            self.press(fnote);
        }
        self.stats.default_chords += 1;
        if fchord.uses_hand(Hand::Either) {
            self.stats.unresolved += 1;
        }
        Ok(fchord)
    }

    fn step(&mut self, index: usize) -> Result<FingerChord> {
        let chords = self.chords;
        let chord = &chords[index];
        let now = chord.time();
        let elapsed = now - chords[index - 1].time();

        // Anchors come from the previous chord and anything still held,
        // so they are collected before the release pass clears slots.
        let mut anchors: [Option<Anchor>; Tile::COUNT] = [None; Tile::COUNT];
        if let Some(previous) = self.assigned.last() {
            for fnote in previous.fnotes() {
                anchors[fnote.note().tile().index()] = Some(Anchor {
                    finger: fnote.finger(),
                    press_time: previous.time(),
                    held: false,
                    lingering: false,
                });
            }
        }

        let released = self.state.release(elapsed);

        let mut load = HandLoad::default();
        for (tile, pressed) in self.state.pressed() {
            load.add(pressed.hand());
            anchors[tile.index()] = Some(Anchor {
                finger: pressed.finger,
                press_time: pressed.press_time,
                held: true,
                lingering: false,
            });
        }
        for lingering in released
            .iter()
            .filter(|r| now - r.released_at < self.config.release_time)
        {
            load.add(lingering.finger.hand());
            if let Some(anchor) = anchors[lingering.tile.index()].as_mut() {
                anchor.lingering = anchor.finger == lingering.finger;
            }
        }

        trace!(
            time = now,
            notes = chord.len(),
            held = self.state.pressed().count(),
            released = released.len(),
            "feed-forward step"
        );

        let mut fnotes = Vec::with_capacity(chord.len());
        for note in chord.notes() {
            let finger = self.choose_finger(note, &anchors, &mut load);
            load.add(finger.hand());
            let fnote = FingerNote::new(note.clone(), finger);
            self.press(&fnote);
            fnotes.push(fnote);
        }

        self.stats.propagated_chords += 1;
        let fchord = FingerChord::new(fnotes)?;
        if fchord.uses_hand(Hand::Either) {
            self.stats.unresolved += 1;
        }
        Ok(fchord)
    }

    fn choose_finger(
        &mut self,
        note: &Note,
        anchors: &[Option<Anchor>; Tile::COUNT],
        load: &mut HandLoad,
    ) -> Finger {
        let now = note.time();
        let tile = note.tile();
        let column = note.column();
        let max = self.config.max_fingers_per_hand;
        let mut barred: Option<Hand> = None;

        if let Some(same) = &anchors[tile.index()] {
            let hand = same.finger.hand();
            let gap = now - same.press_time;
            if same.held || gap < self.config.min_overload_time {
                debug!(time = now, %tile, gap, %hand, "overload on re-hit");
                self.stats.overloads += 1;
                barred = Some(hand);
            } else if hand.is_resolved() {
                // A lingering finger is the one being reused, not a busy one
                let own = usize::from(same.lingering);
                if load.get(hand).saturating_sub(own) < max {
                    if same.lingering {
                        load.remove(hand);
                    }
                    self.stats.jacks += 1;
                    return same.finger;
                }
            }
        }

        let admissible =
            |hand: Hand| reaches(hand, column) && barred != Some(hand) && load.get(hand) < max;

        for neighbor in self.config.adjacency.neighbors(tile) {
            let Some(anchor) = &anchors[neighbor.index()] else {
                continue;
            };
            let hand = anchor.finger.hand();
            if admissible(hand) {
                return if anchor.held {
                    Finger::any(hand)
                } else {
                    anchor.finger
                };
            }
        }

        self.stats.fallbacks += 1;
        let preferred = match column {
            Column::Left => Hand::Left,
            Column::Right => Hand::Right,
            Column::Center if load.get(Hand::Left) < load.get(Hand::Right) => Hand::Left,
            Column::Center => Hand::Right,
        };
        let hand = [preferred, preferred.other()]
            .into_iter()
            .find(|&h| barred != Some(h) && load.get(h) < max)
            .unwrap_or(Hand::Either);
        debug!(time = now, %tile, %hand, "no admissible neighbor, handed by column");
        Finger::any(hand)
    }

    fn press(&mut self, fnote: &FingerNote) {
        let note = fnote.note();
        self.state
            .press(note.tile(), PressedFinger::press(fnote.finger(), note));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(notes: Vec<Note>) -> Chord {
        Chord::new(notes).unwrap()
    }

    fn single(tile: Tile, time: Millis) -> Chord {
        chord(vec![Note::beat(tile, time)])
    }

    fn hands(chords: &[FingerChord]) -> Vec<Vec<Hand>> {
        chords
            .iter()
            .map(|c| c.fnotes().iter().map(FingerNote::hand).collect())
            .collect()
    }

    #[test]
    fn test_cursor_walk() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::MiddleLeft, 0), single(Tile::MiddleCenter, 100)];
        let mut ff = FeedForward::new(&chords, &config);
        assert_eq!(ff.cursor(), Cursor::BeforeFirst);
        assert!(ff.current().is_none());

        assert!(ff.next_chord().unwrap().is_some());
        assert_eq!(ff.cursor(), Cursor::At(0));
        assert!(ff.next_chord().unwrap().is_some());
        assert_eq!(ff.cursor(), Cursor::At(1));
        assert!(ff.next_chord().unwrap().is_none());
        assert_eq!(ff.cursor(), Cursor::AfterLast);

        assert_eq!(
            ff.next_chord().unwrap_err(),
            HandingError::CursorBounds {
                direction: CursorDirection::Forward,
                len: 2
            }
        );
    }

    #[test]
    fn test_prev_before_first_fails() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::TopLeft, 0)];
        let mut ff = FeedForward::new(&chords, &config);
        assert_eq!(
            ff.prev_chord().unwrap_err(),
            HandingError::CursorBounds {
                direction: CursorDirection::Backward,
                len: 1
            }
        );
    }

    #[test]
    fn test_prev_restores_state() {
        let config = HandingConfig::default();
        let chords = vec![
            chord(vec![Note::hold(Tile::BottomRight, 0, 500)]),
            single(Tile::TopLeft, 100),
            single(Tile::TopCenter, 200),
        ];
        let mut ff = FeedForward::new(&chords, &config);
        ff.next_chord().unwrap();
        ff.next_chord().unwrap();
        let after_second = *ff.state();
        ff.next_chord().unwrap();
        assert_eq!(ff.history().len(), 3);
        assert_ne!(*ff.state(), after_second);

        ff.prev_chord().unwrap();
        assert_eq!(ff.cursor(), Cursor::At(1));
        assert_eq!(*ff.state(), after_second);
        assert_eq!(ff.assigned().len(), 2);

        // Stepping forward again gives the same result
        let again = ff.next_chord().unwrap().cloned().unwrap();
        assert_eq!(again.time(), 200);

        ff.prev_chord().unwrap();
        ff.prev_chord().unwrap();
        ff.prev_chord().unwrap();
        assert_eq!(ff.cursor(), Cursor::BeforeFirst);
        assert!(ff.state().is_empty());
        assert!(ff.assigned().is_empty());
        assert!(ff.history().is_empty());
    }

    #[test]
    fn test_prev_from_after_last() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::TopLeft, 0)];
        let mut ff = FeedForward::new(&chords, &config);
        ff.next_chord().unwrap();
        assert!(ff.next_chord().unwrap().is_none());
        ff.prev_chord().unwrap();
        assert_eq!(ff.cursor(), Cursor::At(0));
        assert_eq!(ff.assigned().len(), 1);
        assert_eq!(ff.current().map(|c| c.time()), Some(0));
    }

    #[test]
    fn test_first_chord_uses_default_handing() {
        let config = HandingConfig::default();
        let chords = vec![chord(vec![
            Note::beat(Tile::TopLeft, 0),
            Note::beat(Tile::TopCenter, 0),
        ])];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Left, Hand::Left]]);
        assert_eq!(stats.default_chords, 1);
        assert_eq!(stats.propagated_chords, 0);
    }

    #[test]
    fn test_center_note_follows_neighbor_hand() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::TopLeft, 0), single(Tile::TopCenter, 120)];
        let (out, _) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Left], vec![Hand::Left]]);
    }

    #[test]
    fn test_side_note_never_crosses_by_extension() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::TopLeft, 0), single(Tile::TopRight, 120)];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Left], vec![Hand::Right]]);
        assert_eq!(stats.fallbacks, 1);
    }

    #[test]
    fn test_jack_keeps_finger() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::MiddleCenter, 0), single(Tile::MiddleCenter, 100)];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        // Lone center note stays ambiguous, and a jack keeps whatever played it
        // only when that hand is known; otherwise it falls back to the right hand.
        assert_eq!(hands(&out), vec![vec![Hand::Either], vec![Hand::Right]]);
        assert_eq!(stats.unresolved, 1);

        let chords = vec![single(Tile::MiddleLeft, 0), single(Tile::MiddleLeft, 100)];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Left], vec![Hand::Left]]);
        assert_eq!(stats.jacks, 1);
        assert_eq!(stats.overloads, 0);
    }

    #[test]
    fn test_overload_alternates_hands() {
        let config = HandingConfig::default();
        let chords = vec![single(Tile::MiddleLeft, 0), single(Tile::MiddleLeft, 60)];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Left], vec![Hand::Right]]);
        assert_eq!(stats.overloads, 1);
        assert_eq!(stats.fallbacks, 1);
    }

    #[test]
    fn test_held_finger_counts_against_hand() {
        let config = HandingConfig {
            max_fingers_per_hand: 1,
            ..Default::default()
        };
        let chords = vec![
            single(Tile::MiddleLeft, 0),
            chord(vec![Note::hold(Tile::MiddleRight, 100, 200)]),
            single(Tile::TopCenter, 250),
        ];
        let mut ff = FeedForward::new(&chords, &config);
        ff.next_chord().unwrap();
        ff.next_chord().unwrap();
        let third = ff.next_chord().unwrap().cloned().unwrap();

        let held = ff.state().get(Tile::MiddleRight).copied().unwrap();
        assert_eq!(held.time_held, 150);
        assert_eq!(held.finger.hand(), Hand::Right);
        // The right hand is full, so the center note goes left
        assert_eq!(third.fnotes()[0].hand(), Hand::Left);
    }

    #[test]
    fn test_extends_from_held_finger() {
        let config = HandingConfig::default();
        let chords = vec![
            chord(vec![Note::hold(Tile::MiddleRight, 0, 400)]),
            single(Tile::MiddleCenter, 150),
        ];
        let (out, _) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Right], vec![Hand::Right]]);
    }

    #[test]
    fn test_capacity_splits_wide_chord() {
        let config = HandingConfig::default();
        let chords = vec![
            single(Tile::MiddleRight, 0),
            chord(vec![
                Note::beat(Tile::TopCenter, 200),
                Note::beat(Tile::MiddleCenter, 200),
                Note::beat(Tile::BottomCenter, 200),
            ]),
        ];
        let (out, _) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(
            hands(&out)[1],
            vec![Hand::Right, Hand::Right, Hand::Left]
        );
    }

    #[test]
    fn test_release_grace_keeps_fast_taps_busy() {
        let config = HandingConfig {
            max_fingers_per_hand: 1,
            ..Default::default()
        };
        // Tap 30 ms later is inside the release grace, so the right hand is
        // still busy and the center note goes left.
        let chords = vec![single(Tile::MiddleRight, 0), single(Tile::MiddleCenter, 30)];
        let (out, _) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out)[1], vec![Hand::Left]);

        let chords = vec![single(Tile::MiddleRight, 0), single(Tile::MiddleCenter, 60)];
        let (out, _) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out)[1], vec![Hand::Right]);
    }

    #[test]
    fn test_jack_inside_release_grace() {
        let config = HandingConfig {
            release_time: 100,
            min_overload_time: 80,
            max_fingers_per_hand: 1,
            ..Default::default()
        };
        // The lingering finger on the re-hit tile is the one being reused
        let chords = vec![single(Tile::MiddleLeft, 0), single(Tile::MiddleLeft, 90)];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out), vec![vec![Hand::Left], vec![Hand::Left]]);
        assert_eq!(out[1].fnotes()[0].finger(), out[0].fnotes()[0].finger());
        assert_eq!(stats.jacks, 1);
        assert_eq!(stats.overloads, 0);
        assert_eq!(stats.fallbacks, 0);
    }

    #[test]
    fn test_jack_inside_release_grace_counts_once() {
        let config = HandingConfig {
            release_time: 100,
            min_overload_time: 80,
            ..Default::default()
        };
        // After the jack the left hand holds one finger, leaving room for
        // the second note of the chord.
        let chords = vec![
            single(Tile::MiddleLeft, 0),
            chord(vec![
                Note::beat(Tile::MiddleLeft, 90),
                Note::beat(Tile::BottomLeft, 90),
            ]),
        ];
        let (out, stats) = FeedForward::new(&chords, &config).run().unwrap();
        assert_eq!(hands(&out)[1], vec![Hand::Left, Hand::Left]);
        assert_eq!(stats.jacks, 1);
        assert_eq!(stats.fallbacks, 0);
    }
}
