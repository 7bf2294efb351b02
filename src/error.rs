// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the handing core.
//!
//! Every variant here is fatal for the chart being processed: a run either
//! completes over the whole chart or returns one of these. The only
//! non-fatal condition, an all-center chord that cannot be resolved to a
//! hand, is reported through [`HandingStats`](crate::handing::HandingStats)
//! instead.

use std::fmt;

use thiserror::Error;

use crate::model::Millis;

/// Direction a cursor was moved in when it left its segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDirection {
    /// `next_chord` called after the last chord
    Forward,
    /// `prev_chord` called before the first chord
    Backward,
}

impl fmt::Display for CursorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorDirection::Forward => write!(f, "forward"),
            CursorDirection::Backward => write!(f, "backward"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandingError {
    /// A chord-like container was built from zero notes.
    ///
    /// # Example
    /// ```
    /// # use handing::HandingError;
    /// let err = HandingError::EmptyChord { kind: "Chord" };
    /// assert_eq!(err.to_string(), "Cannot build Chord from zero notes");
    /// ```
    #[error("Cannot build {kind} from zero notes")]
    EmptyChord { kind: &'static str },

    /// Notes grouped into one chord do not share a timestamp.
    ///
    /// Unreachable with sorted input; signals a defect in the grouping step.
    #[error("{kind} notes are not simultaneous: expected {expected} ms, found {found} ms")]
    MismatchedTimes {
        kind: &'static str,
        expected: Millis,
        found: Millis,
    },

    /// Chords handed to a map are not in strictly ascending time order.
    #[error("{kind} chords out of order: {previous} ms followed by {next} ms")]
    Unordered {
        kind: &'static str,
        previous: Millis,
        next: Millis,
    },

    /// The feed-forward cursor was moved outside its segment.
    #[error("Cursor moved {direction} out of a {len}-chord segment")]
    CursorBounds {
        direction: CursorDirection,
        len: usize,
    },

    /// A tile index outside the 3x3 grid.
    #[error("Invalid tile index {0} (expected 0-8)")]
    InvalidTile(i64),

    /// Configuration failed validation.
    ///
    /// # Example
    /// ```
    /// # use handing::HandingError;
    /// let err = HandingError::InvalidConfig("max_fingers_per_hand must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: max_fingers_per_hand must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HandingError {
    /// Whether this error came from building chords or maps
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            HandingError::EmptyChord { .. }
                | HandingError::MismatchedTimes { .. }
                | HandingError::Unordered { .. }
        )
    }
}

/// Result alias for the handing core
pub type Result<T> = std::result::Result<T, HandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HandingError::MismatchedTimes {
            kind: "FingerChord",
            expected: 100,
            found: 120,
        };
        assert_eq!(
            err.to_string(),
            "FingerChord notes are not simultaneous: expected 100 ms, found 120 ms"
        );

        let err = HandingError::CursorBounds {
            direction: CursorDirection::Forward,
            len: 3,
        };
        assert_eq!(err.to_string(), "Cursor moved forward out of a 3-chord segment");
    }

    #[test]
    fn test_construction_classification() {
        assert!(HandingError::EmptyChord { kind: "Chord" }.is_construction());
        assert!(HandingError::Unordered {
            kind: "Map",
            previous: 10,
            next: 5
        }
        .is_construction());
        assert!(!HandingError::InvalidTile(9).is_construction());
        assert!(!HandingError::CursorBounds {
            direction: CursorDirection::Backward,
            len: 1
        }
        .is_construction());
    }
}
