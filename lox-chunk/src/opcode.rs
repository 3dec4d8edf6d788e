//! # OpCode Definitions
//!
//! Every instruction starts with a single opcode byte, followed by a fixed
//! number of operand bytes determined by the opcode:
//!
//! | OpCode          | Byte | Operands                           |
//! |-----------------|------|------------------------------------|
//! | `CONSTANT`      | 0x00 | 1 byte pool index                  |
//! | `CONSTANT_LONG` | 0x01 | 3 byte pool index, big-endian      |
//! | `RETURN`        | 0x02 | none                               |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCode {
    /// CONSTANT: push constants[index], index < 256
    Constant = 0x00,
    /// CONSTANT_LONG: push constants[index], index < 2^24
    ConstantLong = 0x01,
    /// RETURN: end of instruction sequence
    Return = 0x02,
}

impl OpCode {
    /// All opcodes in byte order
    pub const ALL: [OpCode; 3] = [OpCode::Constant, OpCode::ConstantLong, OpCode::Return];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(OpCode::Constant),
            0x01 => Some(OpCode::ConstantLong),
            0x02 => Some(OpCode::Return),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode
    #[inline]
    pub const fn operand_len(self) -> usize {
        match self {
            OpCode::Constant => 1,
            OpCode::ConstantLong => 3,
            OpCode::Return => 0,
        }
    }

    /// Total encoded size (opcode + operands)
    #[inline]
    pub const fn instruction_len(self) -> usize {
        1 + self.operand_len()
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpCode::Constant => "CONSTANT",
            OpCode::ConstantLong => "CONSTANT_LONG",
            OpCode::Return => "RETURN",
        }
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op.to_u8()
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
