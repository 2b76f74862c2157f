//! Loader instruction sequence
//!
//! ```text
//! move  r16, $pc              ; r16 = address of this code
//! addi  r16, r16, <code len>  ; r16 = address of the blob id after the code
//! move  r17, $sp              ; r17 = where the blob will be loaded
//! bsiz  r18, r16              ; r18 = blob size
//! ldc   r16, $zero, r18, 1    ; push the blob onto the stack
//! ; with a configurable section:
//! addi  r16, r16, 32          ; skip the blob id
//! lw    r18, r16, 0           ; r18 = configurable section length
//! addi  r16, r16, 8           ; skip the length word
//! ldc   r16, $zero, r18, 2    ; push the configurable section
//! ; always:
//! sub   r17, r17, $is         ; jmp adds $is back
//! divi  r17, r17, 4           ; jmp multiplies by the instruction size
//! jmp   r17
//! ```

use crate::error::{LoaderError, Result};
use fuelwire_spec::{Imm06, Imm12, Instruction, RegId, BLOB_ID_SIZE, INSTRUCTION_SIZE, WORD_SIZE};

/// Holds the address of the data embedded after the loader code
pub const REG_ADDRESS_OF_DATA_AFTER_CODE: RegId = RegId::new(0x10);

/// Holds the address the blob is loaded to, and finally the jump target
pub const REG_START_OF_LOADED_CODE: RegId = RegId::new(0x11);

/// Scratch: blob size, then configurable section length
pub const REG_GENERAL_USE: RegId = RegId::new(0x12);

/// Jump targets are 16-bit operands
pub const MAX_INSTRUCTIONS: usize = u16::MAX as usize;

/// LDC mode: load a blob by id
const LDC_MODE_BLOB: u64 = 1;

/// LDC mode: load bytes from memory
const LDC_MODE_MEMORY: u64 = 2;

fn imm12(value: usize) -> Result<Imm12> {
    Ok(Imm12::new_checked(value as u64)?)
}

fn imm06(value: u64) -> Result<Imm06> {
    Ok(Imm06::new_checked(value)?)
}

fn build(has_configurable_section: bool, code_len: usize) -> Result<Vec<Instruction>> {
    let data = REG_ADDRESS_OF_DATA_AFTER_CODE;
    let start = REG_START_OF_LOADED_CODE;
    let scratch = REG_GENERAL_USE;

    let mut instructions = vec![
        Instruction::Move { dst: data, src: RegId::PC },
        Instruction::Addi { dst: data, lhs: data, rhs: imm12(code_len)? },
        Instruction::Move { dst: start, src: RegId::SP },
        Instruction::Bsiz { dst: scratch, blob_id_ptr: data },
        Instruction::Ldc {
            src_addr: data,
            offset: RegId::ZERO,
            len: scratch,
            mode: imm06(LDC_MODE_BLOB)?,
        },
    ];

    if has_configurable_section {
        instructions.extend([
            Instruction::Addi { dst: data, lhs: data, rhs: imm12(BLOB_ID_SIZE)? },
            Instruction::Lw { dst: scratch, addr: data, offset: Imm12::ZERO },
            Instruction::Addi { dst: data, lhs: data, rhs: imm12(WORD_SIZE)? },
            Instruction::Ldc {
                src_addr: data,
                offset: RegId::ZERO,
                len: scratch,
                mode: imm06(LDC_MODE_MEMORY)?,
            },
        ]);
    }

    instructions.extend([
        Instruction::Sub { dst: start, lhs: start, rhs: RegId::IS },
        Instruction::Divi { dst: start, lhs: start, rhs: imm12(INSTRUCTION_SIZE)? },
        Instruction::Jmp { abs_target: start },
    ]);

    Ok(instructions)
}

/// Build the loader code.
///
/// The second instruction needs the code's own length, so the sequence is built
/// once to count it and again with the real length.
pub fn loader_instructions(has_configurable_section: bool) -> Result<Vec<Instruction>> {
    let count = build(has_configurable_section, 0)?.len();
    if count > MAX_INSTRUCTIONS {
        return Err(LoaderError::InstructionOverflow { count });
    }
    build(has_configurable_section, count * INSTRUCTION_SIZE)
}
