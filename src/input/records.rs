//! Line records of the whitespace-delimited input files.
//!
//! Every file is one record per line, no header. Fields past the ones a
//! record needs are ignored; a blank line is a record with no fields and
//! therefore malformed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;
use std::str::SplitWhitespace;

use crate::model::NodeId;
use crate::{Error, Result};

// ============================================================================
// Record errors
// ============================================================================

/// Why a single line could not be applied.
///
/// Always surfaces wrapped in [`Error::Corrupt`], which adds the file name,
/// line number and line text.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` = {value:?} is not an integer: {source}")]
    BadInteger {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("field `{field}` = {value:?} is not a number: {source}")]
    BadFloat {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("link weight {0} is not a finite number")]
    NonFiniteWeight(f64),

    #[error("Zero in link list: {from}-{to}! Renumber files and start again")]
    ZeroInLinkList { from: u32, to: u32 },

    #[error("node {id} is beyond the node capacity of {max}")]
    NodeCapacity { id: NodeId, max: usize },

    #[error("more than {max} links")]
    LinkCapacity { max: usize },

    #[error("node {0} is not part of the network")]
    UnknownNode(NodeId),
}

// ============================================================================
// Field cursor
// ============================================================================

/// Named, positional access to the fields of one line.
pub struct Fields<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { words: line.split_whitespace() }
    }

    pub fn next_str(&mut self, field: &'static str) -> std::result::Result<&'a str, RecordError> {
        self.words.next().ok_or(RecordError::MissingField(field))
    }

    pub fn next_u32(&mut self, field: &'static str) -> std::result::Result<u32, RecordError> {
        let value = self.next_str(field)?;
        value.parse().map_err(|source| RecordError::BadInteger {
            field,
            value: value.to_string(),
            source,
        })
    }

    pub fn next_i64(&mut self, field: &'static str) -> std::result::Result<i64, RecordError> {
        let value = self.next_str(field)?;
        value.parse().map_err(|source| RecordError::BadInteger {
            field,
            value: value.to_string(),
            source,
        })
    }

    pub fn next_f64(&mut self, field: &'static str) -> std::result::Result<f64, RecordError> {
        let value = self.next_str(field)?;
        value.parse().map_err(|source| RecordError::BadFloat {
            field,
            value: value.to_string(),
            source,
        })
    }
}

// ============================================================================
// Record trait + concrete records
// ============================================================================

/// One parsed line of an input file.
pub trait Record: Sized {
    fn parse(line: &str) -> std::result::Result<Self, RecordError>;
}

/// `from_id to_id weight` — shared by the work and play link files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Record for LinkRecord {
    fn parse(line: &str) -> std::result::Result<Self, RecordError> {
        let mut fields = Fields::new(line);
        let from = fields.next_u32("from_id")?;
        let to = fields.next_u32("to_id")?;
        let weight = fields.next_f64("weight")?;

        if from == 0 || to == 0 {
            return Err(RecordError::ZeroInLinkList { from, to });
        }

        Ok(Self { from: NodeId(from), to: NodeId(to), weight })
    }
}

/// `node_id size` — play-size override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaySizeRecord {
    pub node: NodeId,
    pub size: i64,
}

impl Record for PlaySizeRecord {
    fn parse(line: &str) -> std::result::Result<Self, RecordError> {
        let mut fields = Fields::new(line);
        let node = NodeId(fields.next_u32("node_id")?);
        let size = fields.next_i64("size")?;
        Ok(Self { node, size })
    }
}

/// `node_id x y` — ward coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRecord {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Record for PositionRecord {
    fn parse(line: &str) -> std::result::Result<Self, RecordError> {
        let mut fields = Fields::new(line);
        let node = NodeId(fields.next_u32("node_id")?);
        let x = fields.next_f64("x")?;
        let y = fields.next_f64("y")?;
        Ok(Self { node, x, y })
    }
}

// ============================================================================
// Readers
// ============================================================================

/// Parse every line of `path` as `R` and hand it to `apply`.
///
/// The file is closed before returning on every path. Returns the number
/// of records applied.
pub fn for_each_record<R, F>(path: &Path, apply: F) -> Result<usize>
where
    R: Record,
    F: FnMut(R) -> std::result::Result<(), RecordError>,
{
    let file = File::open(path).map_err(|source| Error::File {
        file: path.display().to_string(),
        source,
    })?;
    for_each_record_in(BufReader::new(file), &path.display().to_string(), apply)
}

/// Same as [`for_each_record`] over an already-open reader. `name` is only
/// used in error messages.
pub fn for_each_record_in<B, R, F>(reader: B, name: &str, mut apply: F) -> Result<usize>
where
    B: BufRead,
    R: Record,
    F: FnMut(R) -> std::result::Result<(), RecordError>,
{
    let mut count = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::File { file: name.to_string(), source })?;
        R::parse(&line)
            .and_then(&mut apply)
            .map_err(|source| Error::Corrupt {
                file: name.to_string(),
                line_no: i + 1,
                line: line.clone(),
                source,
            })?;
        count += 1;
    }
    Ok(count)
}
