//! Streaming example readers
//!
//! Line-oriented text format, one example per line:
//!
//! label1 label2 1:0.5 3:1.2
//!
//! Tokens containing `:` are 1-based `index:value` feature pairs collected
//! into a single named vector representation; everything before them is a
//! classification label. A blank line or the end of file terminates the
//! stream.

use crate::core::error::{KernelKitError, Result};
use crate::core::types::Label;
use crate::data::example::{Example, SimpleExample};
use crate::data::representation::{Representation, SparseVector};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Sequential source of parsed examples.
///
/// Dataset-population helpers and example selectors depend only on this
/// pair of operations; the concrete text format lives in the implementor.
pub trait ExampleReader {
    /// Whether there is at least another example to read
    fn has_next(&self) -> bool;

    /// Returns the next example; `Exhausted` when the stream is done
    fn read_next(&mut self) -> Result<Example>;
}

/// A buffered file reader producing one example per line, with one-row
/// lookahead so exhaustion is known before reading.
pub struct DatasetReader {
    input: BufReader<File>,
    next_row: Option<String>,
    line_number: usize,
    path: PathBuf,
    representation_name: String,
}

impl DatasetReader {
    /// Opens `path`, parsing feature pairs into a vector representation
    /// named `representation_name`
    pub fn new<P: AsRef<Path>, S: Into<String>>(path: P, representation_name: S) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut reader = Self {
            input: BufReader::new(File::open(&path)?),
            next_row: None,
            line_number: 0,
            path,
            representation_name: representation_name.into(),
        };
        reader.advance_row()?;
        Ok(reader)
    }

    /// Reopens the file so that the next example is the first one again
    pub fn restart_reading(&mut self) -> Result<()> {
        self.input = BufReader::new(File::open(&self.path)?);
        self.next_row = None;
        self.line_number = 0;
        self.advance_row()
    }

    fn advance_row(&mut self) -> Result<()> {
        let mut row = String::new();
        let bytes = self.input.read_line(&mut row)?;
        self.line_number += 1;
        // A blank row terminates the stream, as does EOF
        if bytes == 0 || row.trim().is_empty() {
            self.next_row = None;
        } else {
            self.next_row = Some(row.trim_end().to_string());
        }
        Ok(())
    }

    fn parse_line(&self, line: &str) -> Result<Example> {
        let mut example = SimpleExample::new();
        let mut indices = Vec::new();
        let mut values = Vec::new();

        for token in line.split_whitespace() {
            match token.split_once(':') {
                Some((index, value)) => {
                    let index: usize = index.parse().map_err(|_| {
                        self.parse_error(format!("invalid feature index: {index}"))
                    })?;
                    if index == 0 {
                        return Err(self.parse_error("feature indices are 1-based".to_string()));
                    }
                    let value: f64 = value.parse().map_err(|_| {
                        self.parse_error(format!("invalid feature value: {value}"))
                    })?;
                    indices.push(index - 1);
                    values.push(value);
                }
                None => example.add_label(Label::new(token)),
            }
        }

        example.add_representation(
            self.representation_name.clone(),
            Representation::Vector(SparseVector::new(indices, values)),
        );
        Ok(example.into())
    }

    fn parse_error(&self, message: String) -> KernelKitError {
        KernelKitError::Parse(format!(
            "{}:{}: {}",
            self.path.display(),
            self.line_number,
            message
        ))
    }
}

impl ExampleReader for DatasetReader {
    fn has_next(&self) -> bool {
        self.next_row.is_some()
    }

    fn read_next(&mut self) -> Result<Example> {
        let row = self.next_row.take().ok_or_else(|| {
            KernelKitError::Exhausted("there is no example left to read".to_string())
        })?;
        let example = self.parse_line(&row)?;
        self.advance_row()?;
        Ok(example)
    }
}
