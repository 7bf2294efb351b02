// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Splitting a chord sequence at long rests.

use crate::model::{Chord, Millis};

/// Split `chords` wherever the gap to the previous chord is at least
/// `threshold` ms.
///
/// Segments borrow from `chords`, are never empty, and cover the input in
/// order. Empty input has no segments.
pub fn split_segments(chords: &[Chord], threshold: Millis) -> Vec<&[Chord]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for i in 1..chords.len() {
        if chords[i].time() - chords[i - 1].time() >= threshold {
            segments.push(&chords[start..i]);
            start = i;
        }
    }
    if start < chords.len() {
        segments.push(&chords[start..]);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Tile};

    fn chords_at(times: &[Millis]) -> Vec<Chord> {
        times
            .iter()
            .map(|&time| Chord::new(vec![Note::beat(Tile::MiddleCenter, time)]).unwrap())
            .collect()
    }

    fn segment_times(segments: &[&[Chord]]) -> Vec<Vec<Millis>> {
        segments
            .iter()
            .map(|s| s.iter().map(Chord::time).collect())
            .collect()
    }

    #[test]
    fn test_no_split_below_threshold() {
        let chords = chords_at(&[0, 100, 200, 549]);
        let segments = split_segments(&chords, 350);
        assert_eq!(segment_times(&segments), vec![vec![0, 100, 200, 549]]);
    }

    #[test]
    fn test_split_at_threshold() {
        let chords = chords_at(&[0, 100, 450, 500, 1500]);
        let segments = split_segments(&chords, 350);
        assert_eq!(
            segment_times(&segments),
            vec![vec![0, 100], vec![450, 500], vec![1500]]
        );
    }

    #[test]
    fn test_segments_cover_input() {
        let chords = chords_at(&[0, 400, 800, 900, 1300, 1310]);
        let segments = split_segments(&chords, 350);
        let total: usize = segments.iter().map(|s| s.len()).sum();
        assert_eq!(total, chords.len());
        assert!(segments.iter().all(|s| !s.is_empty()));
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_single_and_empty() {
        let chords = chords_at(&[42]);
        assert_eq!(split_segments(&chords, 350).len(), 1);
        assert!(split_segments(&[], 350).is_empty());
    }
}
