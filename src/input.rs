//! Interactive acquisition of the three layout inputs.

use std::io::{BufRead, Write};
use std::num::ParseIntError;
use thiserror::Error;
use tracing::debug;

use crate::geometry::LogoInputs;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid {field} '{value}': expected an integer")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unexpected end of input while reading {field}")]
    Eof { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Inputs that are already known before prompting (CLI flags or config)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialInputs {
    pub angle: Option<i64>,
    pub size: Option<i64>,
    pub length: Option<i64>,
}

/// Prompts on `output` and reads lines from `input` for every value
/// missing in `known`, in the order angle, size, length.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn resolve(&mut self, known: PartialInputs) -> Result<LogoInputs, InputError> {
        let angle = self.value("angle", known.angle)?;
        let size = self.value("size", known.size)?;
        let length = self.value("length", known.length)?;
        Ok(LogoInputs::new(angle, size, length))
    }

    fn value(&mut self, field: &'static str, known: Option<i64>) -> Result<i64, InputError> {
        if let Some(v) = known {
            debug!("{} = {} (preset)", field, v);
            return Ok(v);
        }
        let v = self.prompt(field)?;
        debug!("{} = {} (prompt)", field, v);
        Ok(v)
    }

    fn prompt(&mut self, field: &'static str) -> Result<i64, InputError> {
        write!(self.output, "{}: ", field)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof { field });
        }
        parse_value(field, &line)
    }
}

fn parse_value(field: &'static str, raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|source| InputError::Parse {
        field,
        value: trimmed.to_string(),
        source,
    })
}
