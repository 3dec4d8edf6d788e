//! # Lox Bytecode Chunks
//!
//! In-memory representation of compiled bytecode for a stack-based VM.
//!
//! A [`Chunk`] couples three append-only sequences:
//! - the instruction stream (raw bytes)
//! - a run-length encoded line table (one source line per instruction byte)
//! - the constant pool ([`Value`]s addressed by insertion index)
//!
//! ## Instruction Encoding
//!
//! ```text
//! CONSTANT       [0x00][index:8]                  2 bytes
//! CONSTANT_LONG  [0x01][index:24, big-endian]     4 bytes
//! RETURN         [0x02]                           1 byte
//! ```
//!
//! A compiler writes into a chunk; an interpreter or disassembler only reads.
//!
//! ## Example
//!
//! ```rust
//! use lox_chunk::{Chunk, OpCode, Value};
//!
//! let mut chunk = Chunk::new();
//! chunk.write_constant(Value::new(1.2), 123).unwrap();
//! chunk.write_constant(Value::new(1.234), 124).unwrap();
//! chunk.write_opcode(OpCode::Return, 123);
//!
//! assert_eq!(chunk.code(), &[0x00, 0, 0x00, 1, 0x02]);
//! assert_eq!(chunk.line_for(3), Some(124));
//! ```

pub mod config;
pub mod error;
pub mod value;
pub mod buffer;
pub mod lines;
pub mod opcode;
pub mod encoding;
pub mod instruction;
pub mod chunk;

pub use config::{Config, ConfigError};
pub use error::{ChunkError, Result};
pub use value::Value;
pub use buffer::GrowableBuffer;
pub use lines::{LineRun, LineTable};
pub use opcode::OpCode;
pub use instruction::{EncodedInstruction, Instruction};
pub use chunk::{Chunk, Instructions};

/// Source line number attached to every instruction byte
pub type Line = u32;
