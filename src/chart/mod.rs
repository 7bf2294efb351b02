// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chart file loading and saving.
//!
//! Charts are JSON arrays of positional note rows. Only the fields the
//! handing pass needs are read; the rest of the layout is written back with
//! the values the editor expects.
//!
//! | index | field                    |
//! |-------|--------------------------|
//! | 0     | tile (0-8)               |
//! | 1     | time in beats            |
//! | 5     | type (0 beat, 1 hold)    |
//! | 6     | hold length in beats     |
//! | 9     | bpm                      |
//! | 10    | offset                   |
//! | 11    | hue                      |
//! | 13    | transition in            |
//! | 14    | transition out           |
//! | 16    | saturation               |
//! | 17    | brightness               |

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{json, Value};

use crate::model::{Color, Millis, Note, NoteMeta, NoteType, Tile};

/// Milliseconds per chart beat
pub const MS_PER_BEAT: f64 = 500.0;

/// Number of fields in a note row
pub const ROW_LEN: usize = 18;

mod field {
    pub const TILE: usize = 0;
    pub const TIME: usize = 1;
    pub const TYPE: usize = 5;
    pub const HOLD_LENGTH: usize = 6;
    pub const BPM: usize = 9;
    pub const OFFSET: usize = 10;
    pub const HUE: usize = 11;
    pub const TRANSITION_IN: usize = 13;
    pub const TRANSITION_OUT: usize = 14;
    pub const SAT: usize = 16;
    pub const BRI: usize = 17;
}

/// Convert chart beats to milliseconds
pub fn beats_to_ms(beats: f64) -> Millis {
    (beats * MS_PER_BEAT).round() as Millis
}

/// Convert milliseconds to chart beats
pub fn ms_to_beats(ms: Millis) -> f64 {
    ms as f64 / MS_PER_BEAT
}

fn number(row: &[Value], index: usize) -> Result<f64> {
    row.get(index)
        .ok_or_else(|| anyhow!("missing field {}", index))?
        .as_f64()
        .ok_or_else(|| anyhow!("field {} is not a number", index))
}

/// Whole-number field such as a tile or type code
fn code(row: &[Value], index: usize) -> Result<i64> {
    let value = number(row, index)?;
    if value.fract() != 0.0 {
        bail!("field {} is not a whole number: {}", index, value);
    }
    Ok(value as i64)
}

/// Optional numeric field, 0 when absent or null
fn number_or_zero(row: &[Value], index: usize) -> f64 {
    row.get(index).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Field carried through as written, null when absent
fn raw(row: &[Value], index: usize) -> Value {
    row.get(index).cloned().unwrap_or(Value::Null)
}

fn parse_row(row: &[Value]) -> Result<Note> {
    let tile = Tile::from_index(code(row, field::TILE)?)?;
    let time = number(row, field::TIME)?;
    let type_code = code(row, field::TYPE)?;
    let note_type =
        NoteType::from_code(type_code).ok_or_else(|| anyhow!("unknown note type {}", type_code))?;
    let hold_length = number_or_zero(row, field::HOLD_LENGTH);

    let color = Color::new(
        number_or_zero(row, field::HUE).round() as i32,
        number_or_zero(row, field::SAT).round() as i32,
        number_or_zero(row, field::BRI).round() as i32,
    );
    let meta = NoteMeta {
        bpm: raw(row, field::BPM),
        offset: raw(row, field::OFFSET),
        transition_in: raw(row, field::TRANSITION_IN),
        transition_out: raw(row, field::TRANSITION_OUT),
        source_time: raw(row, field::TIME),
        source_hold_length: raw(row, field::HOLD_LENGTH),
    };

    Ok(Note::new(
        tile,
        beats_to_ms(time),
        note_type,
        beats_to_ms(hold_length),
    )
    .with_color(color)
    .with_meta(meta))
}

/// Parse chart JSON into notes, in file order
pub fn parse_chart(text: &str) -> Result<Vec<Note>> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_str(text).context("Chart is not a JSON array of note rows")?;
    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_row(row).with_context(|| format!("Invalid note row {}", i)))
        .collect()
}

/// Load notes from a chart file
pub fn load_chart<P: AsRef<Path>>(path: P) -> Result<Vec<Note>> {
    let text = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read chart file: {:?}", path.as_ref()))?;
    parse_chart(&text).with_context(|| format!("Failed to parse chart file: {:?}", path.as_ref()))
}

/// The chart's own spelling when there is one, else beats derived from ms
fn beats_or(source: &Value, ms: Millis) -> Value {
    if source.is_null() {
        json!(ms_to_beats(ms))
    } else {
        source.clone()
    }
}

fn note_row(note: &Note) -> Value {
    let meta = note.meta();
    let color = note.color();
    json!([
        note.tile().index(),
        beats_or(&meta.source_time, note.time()),
        false,
        0,
        false,
        note.note_type().code(),
        beats_or(&meta.source_hold_length, note.hold_length()),
        0,
        0,
        meta.bpm,
        meta.offset,
        color.hue(),
        null,
        meta.transition_in,
        meta.transition_out,
        true,
        color.sat(),
        color.bri()
    ])
}

/// Serialize notes as pretty-printed chart JSON
pub fn chart_to_json<'a, I>(notes: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Note>,
{
    let rows: Vec<Value> = notes.into_iter().map(note_row).collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize chart")
}

/// Write notes to a chart file
pub fn save_chart<'a, P, I>(path: P, notes: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Note>,
{
    let text = chart_to_json(notes)?;
    fs::write(path.as_ref(), text)
        .with_context(|| format!("Failed to write chart file: {:?}", path.as_ref()))
}
