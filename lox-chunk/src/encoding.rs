//! # Operand Encoding Constants and Helpers
//!
//! Constant loads pick their operand width from the pool index:
//!
//! ```text
//! CONSTANT:      [opcode:8][index:8]
//! CONSTANT_LONG: [opcode:8][index[23:16]][index[15:8]][index[7:0]]
//! ```

// ============================================================================
// Operand Ranges
// ============================================================================

/// Largest index encodable by `CONSTANT`
pub const SHORT_INDEX_MAX: usize = 0xFF;

/// Mask for a 24-bit operand
pub const U24_MASK: u32 = 0xFF_FFFF;

/// Largest index encodable by `CONSTANT_LONG`
pub const LONG_INDEX_MAX: usize = U24_MASK as usize;

/// Maximum number of addressable constants in one chunk (2^24)
pub const MAX_CONSTANTS: usize = LONG_INDEX_MAX + 1;

/// Operand width of `CONSTANT_LONG`
pub const LONG_OPERAND_BYTES: usize = 3;

/// Largest encoded instruction (`CONSTANT_LONG`)
pub const MAX_INSTRUCTION_LEN: usize = 1 + LONG_OPERAND_BYTES;

// ============================================================================
// Range Checks
// ============================================================================

/// Check if `index` fits the one-byte `CONSTANT` operand
#[inline]
pub const fn fits_short(index: usize) -> bool {
    index <= SHORT_INDEX_MAX
}

/// Check if `index` fits the three-byte `CONSTANT_LONG` operand
#[inline]
pub const fn fits_long(index: usize) -> bool {
    index <= LONG_INDEX_MAX
}

// ============================================================================
// 24-bit Big-Endian Operands
// ============================================================================

/// Encode the low 24 bits of `value`, most significant byte first
#[inline]
pub const fn encode_u24(value: u32) -> [u8; 3] {
    let value = value & U24_MASK;
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

/// Decode a big-endian 24-bit operand
#[inline]
pub const fn decode_u24(bytes: [u8; 3]) -> u32 {
    ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32)
}
