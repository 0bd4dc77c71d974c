use crate::error::{GenerateError, Result, WeightLineError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered category weights read from a hits frequency file.
///
/// Line order is the category id (0-based). The total is computed once,
/// with overflow reported instead of wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    values: Vec<u64>,
    total: u64,
}

impl Weights {
    /// Build from in-memory values. Used by tests and callers that already
    /// hold the distribution.
    pub fn from_vec(values: Vec<u64>) -> Result<Self> {
        Self::build(values, "<memory>")
    }

    /// Read and parse a weight file, one non-negative integer per line.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GenerateError::io(path, e))?;
        let source_name = path.display().to_string();
        Self::parse(BufReader::new(file), &source_name)
    }

    /// Parse weights from any buffered reader. `source_name` only appears in
    /// diagnostics.
    pub fn parse<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut values = Vec::new();
        for (i, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| GenerateError::io(source_name, e))?;
            let weight = parse_line(&bytes).map_err(|source| GenerateError::InputFormat {
                source_name: source_name.to_string(),
                line: i + 1,
                value: String::from_utf8_lossy(&bytes).trim_end_matches('\r').to_string(),
                source,
            })?;
            values.push(weight);
        }
        Self::build(values, source_name)
    }

    fn build(values: Vec<u64>, source_name: &str) -> Result<Self> {
        if values.is_empty() {
            return Err(GenerateError::EmptyWeights {
                source_name: source_name.to_string(),
            });
        }

        let mut total: u64 = 0;
        for (i, &w) in values.iter().enumerate() {
            total = total
                .checked_add(w)
                .ok_or_else(|| GenerateError::WeightOverflow {
                    source_name: source_name.to_string(),
                    line: i + 1,
                })?;
        }

        tracing::debug!(source = source_name, categories = values.len(), total, "weights loaded");
        Ok(Self { values, total })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }
}

/// One weight, with surrounding ASCII whitespace (including `\r`) ignored.
fn parse_line(bytes: &[u8]) -> std::result::Result<u64, WeightLineError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.trim_matches(|c: char| c.is_ascii_whitespace()).parse::<u64>()?)
}
