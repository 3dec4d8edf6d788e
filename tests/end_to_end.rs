//! End-to-end chunk scenarios
//!
//! A producer writes instructions and constants; a consumer walks the
//! stream back using only the read API.

use lox_chunk::{Chunk, ChunkError, Config, Instruction, LineRun, OpCode, Value};

/// What a disassembler would need: offset, line, instruction, constant
fn listing(chunk: &Chunk) -> Vec<(usize, u32, String)> {
    chunk
        .instructions()
        .map(|entry| {
            let (offset, instr) = entry.unwrap();
            let line = chunk.line_for(offset).unwrap();
            let text = match instr.constant_index() {
                Some(index) => format!("{} '{}'", instr, chunk.constant(index).unwrap()),
                None => instr.to_string(),
            };
            (offset, line, text)
        })
        .collect()
}

#[test]
fn test_two_constants_and_return() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(1.2), 123).unwrap();
    chunk.write_constant(Value::new(1.234), 124).unwrap();
    chunk.write(OpCode::Return.to_u8(), 123);

    assert_eq!(
        chunk.code(),
        &[
            OpCode::Constant.to_u8(),
            0,
            OpCode::Constant.to_u8(),
            1,
            OpCode::Return.to_u8(),
        ]
    );
    assert_eq!(chunk.lines().to_vec(), vec![123, 123, 124, 124, 123]);
    assert_eq!(chunk.constants(), &[Value::new(1.2), Value::new(1.234)]);

    assert_eq!(
        listing(&chunk),
        vec![
            (0, 123, "CONSTANT 0 '1.2'".to_string()),
            (2, 124, "CONSTANT 1 '1.234'".to_string()),
            (4, 123, "RETURN".to_string()),
        ]
    );
}

#[test]
fn test_long_constant_after_300_adds() {
    let mut chunk = Chunk::new();
    for i in 0..300 {
        assert_eq!(chunk.add_constant(Value::new(i as f64)), i);
    }

    let index = chunk.write_constant(Value::new(300.5), 1).unwrap();
    assert_eq!(index, 300);
    assert_eq!(
        chunk.code(),
        &[OpCode::ConstantLong.to_u8(), 0x00, 0x01, 0x2C]
    );
    assert_eq!(chunk.lines().to_vec(), vec![1, 1, 1, 1]);
    assert_eq!(chunk.lines().runs(), &[LineRun { line: 1, start: 0 }]);

    assert_eq!(
        chunk.instruction_at(0).unwrap(),
        Instruction::ConstantLong { index: 300 }
    );
    assert_eq!(chunk.constant(300), Some(Value::new(300.5)));
}

#[test]
fn test_free_then_reuse_matches_fresh_chunk() {
    let mut chunk = Chunk::new();
    for i in 0..40 {
        chunk.write_constant(Value::new(i as f64), i).unwrap();
    }
    chunk.write_opcode(OpCode::Return, 41);

    chunk.free();
    let fresh = Chunk::new();
    assert_eq!(chunk, fresh);
    assert_eq!(chunk.len(), 0);
    assert_eq!(chunk.lines().len(), 0);
    assert_eq!(chunk.constant_count(), 0);
    assert_eq!(chunk.line_for(0), None);
    assert_eq!(chunk.constant(0), None);

    // Freeing twice is harmless
    chunk.free();
    assert_eq!(chunk, fresh);
}

#[test]
fn test_mixed_stream_roundtrips_through_decoder() {
    let mut chunk = Chunk::new();
    for i in 0..258 {
        chunk.add_constant(Value::new(i as f64));
    }
    let program = [
        (Instruction::Constant { index: 3 }, 10),
        (Instruction::ConstantLong { index: 257 }, 10),
        (Instruction::Constant { index: 255 }, 11),
        (Instruction::Return, 12),
    ];
    for (instr, line) in &program {
        chunk.write_instruction(instr, *line);
    }

    let decoded: Vec<Instruction> = chunk
        .instructions()
        .map(|entry| entry.map(|(_, instr)| instr))
        .collect::<Result<_, ChunkError>>()
        .unwrap();
    let expected: Vec<Instruction> = program.iter().map(|(instr, _)| *instr).collect();
    assert_eq!(decoded, expected);

    assert_eq!(chunk.lines().to_vec(), vec![10, 10, 10, 10, 10, 10, 11, 11, 12]);
    assert_eq!(chunk.lines().runs().len(), 3);
}

#[test]
fn test_custom_growth_policy_is_invisible_to_readers() {
    let mut small = Chunk::with_config(Config::new(1, 2).unwrap()).unwrap();
    let mut default = Chunk::new();

    for i in 0..100u32 {
        small.write_constant(Value::new(f64::from(i)), i / 10).unwrap();
        default.write_constant(Value::new(f64::from(i)), i / 10).unwrap();
    }

    assert_eq!(small, default);
}
