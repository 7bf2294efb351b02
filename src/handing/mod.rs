// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hand assignment for a whole chart.
//!
//! This module provides the handing pipeline:
//! - Segmenting the chord sequence at long rests
//! - Default handing for the first chord of each segment
//! - Feed-forward finger propagation through the rest of a segment
//! - Composing the handed segments back into one chart
//!
//! A run is a pure function of the chart and the configuration. It either
//! hands every note or fails as a whole.

pub mod compose;
pub mod default;
pub mod feedforward;
pub mod segment;
pub mod state;

pub use compose::{colored_notes, compose, flatten};
pub use default::{column_hand, default_handing};
pub use feedforward::{Cursor, FeedForward, FeedForwardStats, Snapshot};
pub use segment::split_segments;
pub use state::{FingerState, PressedFinger, Released};

use std::fmt;

use tracing::{debug, info};

use crate::config::HandingConfig;
use crate::error::Result;
use crate::model::{FingerMap, Hand, Map, Note};

/// Summary of one handing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandingStats {
    pub notes: usize,
    pub chords: usize,
    pub segments: usize,
    pub right_notes: usize,
    pub left_notes: usize,
    pub either_notes: usize,
    /// Totals across all segments
    pub feed_forward: FeedForwardStats,
}

impl HandingStats {
    fn absorb(&mut self, segment: &FeedForwardStats) {
        let total = &mut self.feed_forward;
        total.default_chords += segment.default_chords;
        total.propagated_chords += segment.propagated_chords;
        total.jacks += segment.jacks;
        total.overloads += segment.overloads;
        total.fallbacks += segment.fallbacks;
        total.unresolved += segment.unresolved;
    }

    fn count_hands(&mut self, map: &FingerMap) {
        for fnote in map.fnotes() {
            match fnote.hand() {
                Hand::Right => self.right_notes += 1,
                Hand::Left => self.left_notes += 1,
                Hand::Either => self.either_notes += 1,
            }
        }
    }
}

impl fmt::Display for HandingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} notes in {} chords across {} segments",
            self.notes, self.chords, self.segments
        )?;
        writeln!(
            f,
            "hands: {} right, {} left, {} either",
            self.right_notes, self.left_notes, self.either_notes
        )?;
        let ff = &self.feed_forward;
        write!(
            f,
            "jacks: {}, overloads: {}, column fallbacks: {}, ambiguous chords: {}",
            ff.jacks, ff.overloads, ff.fallbacks, ff.unresolved
        )
    }
}

/// Output of a handing run
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHanding {
    pub map: FingerMap,
    pub stats: HandingStats,
}

/// Runs the full handing pipeline with one configuration
#[derive(Debug, Clone, Default)]
pub struct HandingParser {
    config: HandingConfig,
}

impl HandingParser {
    pub fn new(config: HandingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HandingConfig {
        &self.config
    }

    /// Hand every chord of `map`.
    ///
    /// Fails with [`HandingError::InvalidConfig`] before touching the map if
    /// the configuration does not validate.
    ///
    /// [`HandingError::InvalidConfig`]: crate::error::HandingError::InvalidConfig
    pub fn parse(&self, map: &Map) -> Result<ParsedHanding> {
        self.config.validate()?;
        let segments = split_segments(map.chords(), self.config.default_threshold);
        let mut stats = HandingStats {
            notes: map.note_count(),
            chords: map.chords().len(),
            segments: segments.len(),
            ..Default::default()
        };

        let mut handed = Vec::with_capacity(segments.len());
        for (index, segment) in segments.into_iter().enumerate() {
            let (fchords, segment_stats) = FeedForward::new(segment, &self.config).run()?;
            debug!(
                segment = index,
                start = segment[0].time(),
                chords = segment.len(),
                fallbacks = segment_stats.fallbacks,
                "segment handed"
            );
            stats.absorb(&segment_stats);
            handed.push(fchords);
        }

        let map = compose(handed)?;
        stats.count_hands(&map);
        info!(
            notes = stats.notes,
            segments = stats.segments,
            right = stats.right_notes,
            left = stats.left_notes,
            either = stats.either_notes,
            "handing complete"
        );
        Ok(ParsedHanding { map, stats })
    }

    /// Group loose notes into chords and hand them
    pub fn parse_notes(&self, notes: Vec<Note>) -> Result<ParsedHanding> {
        self.parse(&Map::from_notes(notes)?)
    }
}
