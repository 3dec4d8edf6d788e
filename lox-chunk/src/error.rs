//! # Error Types for Lox Chunks

use crate::config::ConfigError;
use crate::opcode::OpCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Emission errors
    #[error("Constant pool overflow: index {index} exceeds the 24-bit operand range (max {max})")]
    ConstantPoolOverflow { index: usize, max: usize },

    // Decoding errors
    #[error("Unknown opcode {byte:#04x} at offset {offset}")]
    UnknownOpcode { offset: usize, byte: u8 },

    #[error("Truncated {opcode} at offset {offset}: expected {expected} operand bytes, found {found}")]
    TruncatedInstruction {
        offset: usize,
        opcode: OpCode,
        expected: usize,
        found: usize,
    },

    #[error("Offset {offset} out of bounds (code length {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },
}

impl ChunkError {
    /// Check if this error was raised while reading an instruction stream
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ChunkError::UnknownOpcode { .. }
                | ChunkError::TruncatedInstruction { .. }
                | ChunkError::OffsetOutOfBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChunkError>;
