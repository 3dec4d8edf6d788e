//! Stress tests for chunks
//!
//! Large pools, long streams, and the 24-bit index ceiling.
//! `test_pool_ceiling` fills a full 2^24 entry pool (128 MiB of values).

use lox_chunk::encoding::{LONG_INDEX_MAX, MAX_CONSTANTS};
use lox_chunk::{Chunk, ChunkError, Instruction, OpCode, Value};
use proptest::prelude::*;

// ============================================================================
// Large Chunks
// ============================================================================

#[test]
fn test_70000_constant_loads() {
    let mut chunk = Chunk::new();
    for i in 0..70_000usize {
        let index = chunk.write_constant(Value::new(i as f64), (i / 100) as u32 + 1).unwrap();
        assert_eq!(index, i);
    }

    // 256 short loads, the rest long
    assert_eq!(chunk.len(), 256 * 2 + (70_000 - 256) * 4);
    assert_eq!(chunk.lines().len(), chunk.len());
    assert_eq!(chunk.constant_count(), 70_000);

    let mut count = 0;
    for (n, entry) in chunk.instructions().enumerate() {
        let (offset, instr) = entry.unwrap();
        assert_eq!(instr.constant_index(), Some(n));
        assert_eq!(chunk.line_for(offset), Some((n / 100) as u32 + 1));
        count += 1;
    }
    assert_eq!(count, 70_000);

    // One run per distinct line
    assert_eq!(chunk.lines().runs().len(), 700);
}

#[test]
fn test_many_line_changes() {
    let mut chunk = Chunk::new();
    for i in 0..10_000u32 {
        chunk.write_opcode(OpCode::Return, i + 1);
    }
    assert_eq!(chunk.lines().runs().len(), 10_000);
    assert_eq!(chunk.line_for(0), Some(1));
    assert_eq!(chunk.line_for(9_999), Some(10_000));
    assert!(chunk
        .instructions()
        .all(|entry| matches!(entry, Ok((_, Instruction::Return)))));
}

#[test]
fn test_pool_ceiling() {
    let mut chunk = Chunk::new();
    for _ in 0..MAX_CONSTANTS - 1 {
        chunk.add_constant(Value::new(0.0));
    }

    // Last addressable index still encodes
    assert_eq!(chunk.write_constant(Value::new(1.0), 1).unwrap(), LONG_INDEX_MAX);
    let len = chunk.len();
    assert_eq!(&chunk.code()[len - 4..], &[0x01, 0xFF, 0xFF, 0xFF]);

    // One more is rejected and the chunk is unchanged
    let err = chunk.write_constant(Value::new(2.0), 1).unwrap_err();
    assert_eq!(
        err,
        ChunkError::ConstantPoolOverflow {
            index: MAX_CONSTANTS,
            max: LONG_INDEX_MAX,
        }
    );
    assert_eq!(chunk.len(), len);
    assert_eq!(chunk.constant_count(), MAX_CONSTANTS);
}

// ============================================================================
// Randomized Producers
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Byte(u8, u32),
    Constant(f64, u32),
    Return(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), 1u32..50).prop_map(|(b, l)| Op::Byte(b, l)),
        (-1e6f64..1e6, 1u32..50).prop_map(|(v, l)| Op::Constant(v, l)),
        (1u32..50).prop_map(Op::Return),
    ]
}

proptest! {
    #[test]
    fn prop_lines_track_code(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut chunk = Chunk::new();
        let mut expected_lines = Vec::new();
        let mut expected_constants = Vec::new();

        for op in &ops {
            match *op {
                Op::Byte(byte, line) => {
                    chunk.write(byte, line);
                    expected_lines.push(line);
                }
                Op::Constant(v, line) => {
                    let index = chunk.write_constant(Value::new(v), line).unwrap();
                    prop_assert_eq!(index, expected_constants.len());
                    expected_constants.push(Value::new(v));
                    let width = if index < 256 { 2 } else { 4 };
                    expected_lines.extend(std::iter::repeat(line).take(width));
                }
                Op::Return(line) => {
                    chunk.write_opcode(OpCode::Return, line);
                    expected_lines.push(line);
                }
            }
        }

        prop_assert_eq!(chunk.len(), expected_lines.len());
        prop_assert_eq!(chunk.lines().to_vec(), expected_lines);
        prop_assert_eq!(chunk.constants(), expected_constants.as_slice());
    }
}
