//! Typed instructions for the loader subset of the Fuel VM instruction set.
//!
//! ## Instruction Formats
//! - MOVE, BSIZ:  [opcode:8][ra:6][rb:6][unused:12]
//! - SUB:         [opcode:8][ra:6][rb:6][rc:6][unused:6]
//! - LDC:         [opcode:8][ra:6][rb:6][rc:6][imm06:6]
//! - ADDI, DIVI, LW: [opcode:8][ra:6][rb:6][imm12:12]
//! - JMP:         [opcode:8][ra:6][unused:18]

use crate::encoding::*;
use crate::error::{Result, SpecError};
use crate::opcode::Opcode;
use crate::register::RegId;
use crate::INSTRUCTION_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 6-bit immediate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Imm06(u8);

impl Imm06 {
    pub const BITS: u32 = 6;
    pub const MAX: Self = Self(IMM06_MASK as u8);

    pub fn new_checked(value: u64) -> Result<Self> {
        if value <= IMM06_MASK as u64 {
            Ok(Self(value as u8))
        } else {
            Err(SpecError::ImmediateOverflow { value, bits: Self::BITS })
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

/// 12-bit immediate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Imm12(u16);

impl Imm12 {
    pub const BITS: u32 = 12;
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(IMM12_MASK as u16);

    pub fn new_checked(value: u64) -> Result<Self> {
        if value <= IMM12_MASK as u64 {
            Ok(Self(value as u16))
        } else {
            Err(SpecError::ImmediateOverflow { value, bits: Self::BITS })
        }
    }

    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

/// Loader instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// MOVE: dst = src
    Move { dst: RegId, src: RegId },

    /// SUB: dst = lhs - rhs
    Sub { dst: RegId, lhs: RegId, rhs: RegId },

    /// LDC: load `len` bytes of code identified at `src_addr`, starting at `offset`.
    /// Mode 0 = contract, 1 = blob, 2 = memory following the loaded code.
    Ldc { src_addr: RegId, offset: RegId, len: RegId, mode: Imm06 },

    /// JMP: jump to `$is + abs_target * 4`
    Jmp { abs_target: RegId },

    /// ADDI: dst = lhs + rhs
    Addi { dst: RegId, lhs: RegId, rhs: Imm12 },

    /// DIVI: dst = lhs / rhs
    Divi { dst: RegId, lhs: RegId, rhs: Imm12 },

    /// LW: dst = word at addr + offset * 8
    Lw { dst: RegId, addr: RegId, offset: Imm12 },

    /// BSIZ: dst = size of the blob whose id is stored at blob_id_ptr
    Bsiz { dst: RegId, blob_id_ptr: RegId },
}

fn reg(r: RegId) -> u32 {
    r.to_u8() as u32
}

fn reg_at(value: u32) -> RegId {
    RegId::new(value as u8)
}

impl Instruction {
    pub const SIZE: usize = INSTRUCTION_SIZE;

    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Move { .. } => Opcode::Move,
            Instruction::Sub { .. } => Opcode::Sub,
            Instruction::Ldc { .. } => Opcode::Ldc,
            Instruction::Jmp { .. } => Opcode::Jmp,
            Instruction::Addi { .. } => Opcode::Addi,
            Instruction::Divi { .. } => Opcode::Divi,
            Instruction::Lw { .. } => Opcode::Lw,
            Instruction::Bsiz { .. } => Opcode::Bsiz,
        }
    }

    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Encode to an instruction word
    pub fn to_u32(&self) -> u32 {
        let op = self.opcode();
        match *self {
            Instruction::Move { dst, src } => encode_rr(op, reg(dst), reg(src)),
            Instruction::Bsiz { dst, blob_id_ptr } => encode_rr(op, reg(dst), reg(blob_id_ptr)),
            Instruction::Sub { dst, lhs, rhs } => encode_rrr(op, reg(dst), reg(lhs), reg(rhs)),
            Instruction::Ldc { src_addr, offset, len, mode } => {
                encode_rrri06(op, reg(src_addr), reg(offset), reg(len), mode.to_u8() as u32)
            }
            Instruction::Jmp { abs_target } => encode_r(op, reg(abs_target)),
            Instruction::Addi { dst, lhs, rhs } | Instruction::Divi { dst, lhs, rhs } => {
                encode_rri12(op, reg(dst), reg(lhs), rhs.to_u16() as u32)
            }
            Instruction::Lw { dst, addr, offset } => {
                encode_rri12(op, reg(dst), reg(addr), offset.to_u16() as u32)
            }
        }
    }

    /// Encode to the 4 bytes the VM reads (big-endian word)
    #[inline]
    pub fn to_bytes(&self) -> [u8; INSTRUCTION_SIZE] {
        self.to_u32().to_be_bytes()
    }

    /// Decode an instruction word
    pub fn from_u32(word: u32) -> Result<Self> {
        let opcode = Opcode::try_from_u8(extract_opcode(word) as u8)?;
        let ra = reg_at(extract_ra(word));
        let rb = reg_at(extract_rb(word));
        let rc = reg_at(extract_rc(word));
        // Fields come straight out of their masks, so the checked constructors cannot fail.
        let imm12 = Imm12(extract_imm12(word) as u16);
        let imm06 = Imm06(extract_imm06(word) as u8);

        let instruction = match opcode {
            Opcode::Move => Instruction::Move { dst: ra, src: rb },
            Opcode::Sub => Instruction::Sub { dst: ra, lhs: rb, rhs: rc },
            Opcode::Ldc => Instruction::Ldc { src_addr: ra, offset: rb, len: rc, mode: imm06 },
            Opcode::Jmp => Instruction::Jmp { abs_target: ra },
            Opcode::Addi => Instruction::Addi { dst: ra, lhs: rb, rhs: imm12 },
            Opcode::Divi => Instruction::Divi { dst: ra, lhs: rb, rhs: imm12 },
            Opcode::Lw => Instruction::Lw { dst: ra, addr: rb, offset: imm12 },
            Opcode::Bsiz => Instruction::Bsiz { dst: ra, blob_id_ptr: rb },
        };
        Ok(instruction)
    }

    /// Decode 4 big-endian bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let word: [u8; INSTRUCTION_SIZE] =
            bytes.try_into().map_err(|_| SpecError::InvalidLength {
                expected: INSTRUCTION_SIZE,
                found: bytes.len(),
            })?;
        Self::from_u32(u32::from_be_bytes(word))
    }

    /// Decode a run of instructions; `bytes` must be a whole number of words
    pub fn decode_all(bytes: &[u8]) -> Result<Vec<Self>> {
        if bytes.len() % INSTRUCTION_SIZE != 0 {
            return Err(SpecError::InvalidLength {
                expected: bytes.len().next_multiple_of(INSTRUCTION_SIZE),
                found: bytes.len(),
            });
        }
        bytes.chunks_exact(INSTRUCTION_SIZE).map(Self::from_bytes).collect()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match self {
            Instruction::Move { dst, src } => write!(f, "{m} {dst} {src}"),
            Instruction::Bsiz { dst, blob_id_ptr } => write!(f, "{m} {dst} {blob_id_ptr}"),
            Instruction::Sub { dst, lhs, rhs } => write!(f, "{m} {dst} {lhs} {rhs}"),
            Instruction::Ldc { src_addr, offset, len, mode } => {
                write!(f, "{m} {src_addr} {offset} {len} {}", mode.to_u8())
            }
            Instruction::Jmp { abs_target } => write!(f, "{m} {abs_target}"),
            Instruction::Addi { dst, lhs, rhs } | Instruction::Divi { dst, lhs, rhs } => {
                write!(f, "{m} {dst} {lhs} {}", rhs.to_u16())
            }
            Instruction::Lw { dst, addr, offset } => {
                write!(f, "{m} {dst} {addr} {}", offset.to_u16())
            }
        }
    }
}
