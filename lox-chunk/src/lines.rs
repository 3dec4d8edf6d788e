//! # Line Table
//!
//! Run-length encoded source lines, one logical entry per instruction byte.
//!
//! Adjacent instruction bytes almost always share a line, so the table keeps
//! one [`LineRun`] per maximal run of equal lines instead of one integer per
//! byte. Runs are only ever appended: a new run starts when the line changes,
//! and a run ends where the next one starts (or at [`LineTable::len`]).
//!
//! ```text
//! bytes:  [C][0][C][1][R]
//! lines:  123 123 124 124 123
//! runs:   {123 @0} {124 @2} {123 @4}
//! ```

use crate::buffer::GrowableBuffer;
use crate::config::{Config, ConfigError};
use crate::Line;
use serde::{Deserialize, Serialize};
use std::iter;

/// A run of consecutive instruction bytes sharing one source line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRun {
    /// Source line of every byte in the run
    pub line: Line,
    /// Offset of the first instruction byte in the run
    pub start: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineTable {
    runs: GrowableBuffer<LineRun>,
    len: usize,
}

impl LineTable {
    pub const fn new() -> Self {
        Self {
            runs: GrowableBuffer::new(),
            len: 0,
        }
    }

    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        Ok(Self {
            runs: GrowableBuffer::with_config(config)?,
            len: 0,
        })
    }

    /// Record `line` for the next instruction byte
    pub fn push(&mut self, line: Line) {
        let extends_run = matches!(self.runs.last(), Some(run) if run.line == line);
        if !extends_run {
            self.runs.push(LineRun {
                line,
                start: self.len,
            });
        }
        self.len += 1;
    }

    /// Number of instruction bytes covered
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source line of the instruction byte at `offset`
    pub fn line_for(&self, offset: usize) -> Option<Line> {
        if offset >= self.len {
            return None;
        }
        let runs = self.runs.as_slice();
        // First run always starts at 0, so the partition point is >= 1
        let idx = runs.partition_point(|run| run.start <= offset);
        runs.get(idx.checked_sub(1)?).map(|run| run.line)
    }

    pub fn runs(&self) -> &[LineRun] {
        self.runs.as_slice()
    }

    /// Expanded per-byte line sequence
    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        let runs = self.runs.as_slice();
        runs.iter().enumerate().flat_map(move |(i, run)| {
            let end = runs.get(i + 1).map_or(self.len, |next| next.start);
            iter::repeat(run.line).take(end - run.start)
        })
    }

    pub fn to_vec(&self) -> Vec<Line> {
        self.iter().collect()
    }

    /// Release storage. Freeing an empty table is a no-op.
    pub fn free(&mut self) {
        self.runs.free();
        self.len = 0;
    }
}
