//! # Bytecode Chunk
//!
//! Instruction bytes, their source lines, and the constant pool.
//!
//! Invariant: `code.len() == lines.len()` after every operation. Each write
//! appends one instruction byte together with its line; multi-byte
//! instructions record the same line for every byte.
//!
//! Chunks only grow. [`Chunk::free`] releases everything and leaves a chunk
//! indistinguishable from [`Chunk::new`].

use crate::buffer::GrowableBuffer;
use crate::config::Config;
use crate::encoding;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::lines::LineTable;
use crate::opcode::OpCode;
use crate::value::Value;
use crate::Line;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chunk {
    code: GrowableBuffer<u8>,
    lines: LineTable,
    constants: GrowableBuffer<Value>,
}

impl Chunk {
    /// Create an empty chunk
    pub const fn new() -> Self {
        Self {
            code: GrowableBuffer::new(),
            lines: LineTable::new(),
            constants: GrowableBuffer::new(),
        }
    }

    /// Create an empty chunk whose buffers grow by `config`
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            code: GrowableBuffer::with_config(config)?,
            lines: LineTable::with_config(config)?,
            constants: GrowableBuffer::with_config(config)?,
        })
    }

    // ========================================================================
    // Writing
    // ========================================================================

    /// Append one instruction byte at `line`. Returns its offset.
    pub fn write(&mut self, byte: u8, line: Line) -> usize {
        self.lines.push(line);
        self.code.push(byte)
    }

    /// Append a bare opcode at `line`. Returns its offset.
    pub fn write_opcode(&mut self, opcode: OpCode, line: Line) -> usize {
        self.write(opcode.to_u8(), line)
    }

    /// Append a complete instruction, every byte at `line`.
    /// Returns the offset of its opcode byte.
    pub fn write_instruction(&mut self, instruction: &Instruction, line: Line) -> usize {
        let offset = self.code.len();
        for &byte in instruction.encode().iter() {
            self.write(byte, line);
        }
        offset
    }

    /// Append `value` to the constant pool and return its index.
    ///
    /// Constants are never deduplicated: every call returns a fresh index.
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value)
    }

    /// Add `value` as a constant and emit the load for it.
    ///
    /// Indices up to 255 use `CONSTANT` (2 bytes); larger ones use
    /// `CONSTANT_LONG` (4 bytes). Returns the constant index.
    ///
    /// Fails with [`ChunkError::ConstantPoolOverflow`] once the pool has
    /// [`encoding::MAX_CONSTANTS`] entries. The chunk is left untouched on
    /// failure.
    ///
    /// [`ChunkError::ConstantPoolOverflow`]: crate::ChunkError::ConstantPoolOverflow
    pub fn write_constant(&mut self, value: Value, line: Line) -> Result<usize> {
        let index = self.constants.len();
        let load = Instruction::load_constant(index).map_err(|err| {
            tracing::warn!(index, line, "constant pool exhausted");
            err
        })?;
        if !encoding::fits_short(index) {
            tracing::trace!(index, line, "emitting long constant load");
        }

        self.add_constant(value);
        self.write_instruction(&load, line);
        Ok(index)
    }

    /// Release all storage. Calling this on an empty chunk is a no-op.
    pub fn free(&mut self) {
        self.code.free();
        self.lines.free();
        self.constants.free();
    }

    // ========================================================================
    // Reading
    // ========================================================================

    /// Number of instruction bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    #[inline]
    pub fn code(&self) -> &[u8] {
        self.code.as_slice()
    }

    #[inline]
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }

    /// Source line of the instruction byte at `offset`
    #[inline]
    pub fn line_for(&self, offset: usize) -> Option<Line> {
        self.lines.line_for(offset)
    }

    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    pub fn constants(&self) -> &[Value] {
        self.constants.as_slice()
    }

    #[inline]
    pub fn constant(&self, index: usize) -> Option<Value> {
        self.constants.get(index).copied()
    }

    pub fn constant_count(&self) -> usize {
        self.constants.len()
    }

    /// Decode the instruction whose opcode byte is at `offset`
    pub fn instruction_at(&self, offset: usize) -> Result<Instruction> {
        Instruction::decode(self.code(), offset)
    }

    /// Walk the instruction stream from offset 0
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            code: self.code(),
            offset: 0,
            failed: false,
        }
    }
}

/// Iterator over `(offset, instruction)` pairs of a chunk.
///
/// Yields the first decode error and then stops.
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    code: &'a [u8],
    offset: usize,
    failed: bool,
}

impl Iterator for Instructions<'_> {
    type Item = Result<(usize, Instruction)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.code.len() {
            return None;
        }
        let offset = self.offset;
        match Instruction::decode(self.code, offset) {
            Ok(instr) => {
                self.offset += instr.encoded_len();
                Some(Ok((offset, instr)))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Instructions<'_> {}
