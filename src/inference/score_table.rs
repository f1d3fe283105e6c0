//! Classifier backed by precomputed scores keyed by image file name
//!
//! Each record is an image file name followed by its scores in taxonomy
//! order, separated by whitespace and/or commas:
//!
//! ```text
//! # image        melanoma bcc  scc  ak   nevus sk
//! mole_01.png    0.02     0.01 0.01 0.03 0.90  0.03
//! spot_07.jpg,   0.81,    0.05,0.04,0.04,0.03, 0.03
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::inference::classifier::{Classifier, ClassifierInput};
use crate::inference::preprocessing::input_shape;
use crate::io::error::{AnalysisError, Result, classification_error, file_system_error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Score records loaded from a file
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    origin: PathBuf,
    scores: HashMap<String, Vec<f64>>,
}

impl ScoreTable {
    /// Read and parse a score table file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains a malformed record
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read score table", e))?;
        Self::parse(&text, path)
    }

    /// Parse score table text; `origin` is used in error messages
    ///
    /// A later record for the same image replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a record has no scores or a score is not a finite number
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mut scores = HashMap::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty());

            let parse_error = |reason: String| AnalysisError::ScoreTableParse {
                path: origin.to_path_buf(),
                line: index + 1,
                reason,
            };

            let Some(name) = fields.next() else {
                continue;
            };

            let values = fields
                .map(|field| {
                    field
                        .parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .ok_or_else(|| parse_error(format!("'{field}' is not a finite score")))
                })
                .collect::<Result<Vec<f64>>>()?;

            if values.is_empty() {
                return Err(parse_error(format!("no scores recorded for '{name}'")));
            }

            scores.insert(name.to_string(), values);
        }

        Ok(Self {
            origin: origin.to_path_buf(),
            scores,
        })
    }

    /// File the table was loaded from
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Number of image records
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores recorded for an image file name
    pub fn scores_for(&self, file_name: &str) -> Option<&[f64]> {
        self.scores.get(file_name).map(Vec::as_slice)
    }
}

impl Classifier for ScoreTable {
    fn classify(&mut self, input: &ClassifierInput<'_>) -> Result<Vec<f64>> {
        if input.tensor.dim() != input_shape() {
            return Err(classification_error(
                input.source,
                &format!(
                    "input tensor has shape {:?}, expected {:?}",
                    input.tensor.dim(),
                    input_shape()
                ),
            ));
        }

        let file_name = input
            .source
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        self.scores_for(&file_name)
            .map(<[f64]>::to_vec)
            .ok_or_else(|| {
                classification_error(
                    input.source,
                    &format!("no scores recorded in '{}'", self.origin.display()),
                )
            })
    }
}
