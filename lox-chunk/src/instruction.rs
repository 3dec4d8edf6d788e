//! Decoded instructions
//!
//! [`Instruction`] is the typed view of one encoded instruction. Raw bytes
//! only exist on either side of [`Instruction::encode`] and
//! [`Instruction::decode`].

use crate::encoding::{self, LONG_INDEX_MAX, MAX_INSTRUCTION_LEN};
use crate::error::{ChunkError, Result};
use crate::opcode::OpCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// CONSTANT: push constants[index]
    Constant { index: u8 },

    /// CONSTANT_LONG: push constants[index], index in 24 bits
    ConstantLong { index: u32 },

    /// RETURN
    Return,
}

impl Instruction {
    /// Load of constant `index`, using the short form whenever it fits
    pub fn load_constant(index: usize) -> Result<Self> {
        if let Ok(short) = u8::try_from(index) {
            return Ok(Instruction::Constant { index: short });
        }
        if !encoding::fits_long(index) {
            return Err(ChunkError::ConstantPoolOverflow {
                index,
                max: LONG_INDEX_MAX,
            });
        }
        // fits_long bounds index to 24 bits
        Ok(Instruction::ConstantLong { index: index as u32 })
    }

    pub fn opcode(&self) -> OpCode {
        match self {
            Instruction::Constant { .. } => OpCode::Constant,
            Instruction::ConstantLong { .. } => OpCode::ConstantLong,
            Instruction::Return => OpCode::Return,
        }
    }

    /// Encoded size in bytes
    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.opcode().instruction_len()
    }

    /// Pool index referenced by a constant load
    pub fn constant_index(&self) -> Option<usize> {
        match *self {
            Instruction::Constant { index } => Some(index as usize),
            Instruction::ConstantLong { index } => Some(index as usize),
            Instruction::Return => None,
        }
    }

    pub fn encode(&self) -> EncodedInstruction {
        let mut bytes = [0u8; MAX_INSTRUCTION_LEN];
        bytes[0] = self.opcode().to_u8();
        match *self {
            Instruction::Constant { index } => bytes[1] = index,
            Instruction::ConstantLong { index } => {
                bytes[1..4].copy_from_slice(&encoding::encode_u24(index));
            }
            Instruction::Return => {}
        }
        EncodedInstruction {
            bytes,
            len: self.encoded_len() as u8,
        }
    }

    /// Decode the instruction starting at `code[offset]`
    pub fn decode(code: &[u8], offset: usize) -> Result<Self> {
        let byte = *code.get(offset).ok_or(ChunkError::OffsetOutOfBounds {
            offset,
            len: code.len(),
        })?;
        let opcode = OpCode::from_u8(byte).ok_or(ChunkError::UnknownOpcode { offset, byte })?;

        let operands = &code[offset + 1..];
        let expected = opcode.operand_len();
        if operands.len() < expected {
            return Err(ChunkError::TruncatedInstruction {
                offset,
                opcode,
                expected,
                found: operands.len(),
            });
        }

        Ok(match opcode {
            OpCode::Constant => Instruction::Constant { index: operands[0] },
            OpCode::ConstantLong => Instruction::ConstantLong {
                index: encoding::decode_u24([operands[0], operands[1], operands[2]]),
            },
            OpCode::Return => Instruction::Return,
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.constant_index() {
            Some(index) => write!(f, "{} {}", self.opcode(), index),
            None => write!(f, "{}", self.opcode()),
        }
    }
}

/// Encoded bytes of one instruction, kept on the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedInstruction {
    bytes: [u8; MAX_INSTRUCTION_LEN],
    len: u8,
}

impl Deref for EncodedInstruction {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}
