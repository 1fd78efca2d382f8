//! The "done" file: the seed handed to the simulation's seeding helper.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::records::RecordError;
use crate::{Error, Result};

/// Read the seed from the first line of `path`.
///
/// Only the first line is consulted and it must hold exactly one number.
/// Returns a one-element list so callers can treat it like a seed set.
pub fn read_done_file(path: &Path) -> Result<Vec<f64>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| Error::File { file: name.clone(), source })?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| Error::File { file: name.clone(), source })?;

    let value = line.trim();
    let seed: f64 = value.parse().map_err(|source| Error::Corrupt {
        file: name.clone(),
        line_no: 1,
        line: line.clone(),
        source: RecordError::BadFloat { field: "seed", value: value.to_string(), source },
    })?;

    debug!(file = %name, seed, "Read seed");
    Ok(vec![seed])
}
