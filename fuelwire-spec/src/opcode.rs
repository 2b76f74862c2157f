//! # Opcode Definitions
//!
//! Opcode values for the Fuel VM instructions that loader bytecode is built from.
//! Opcodes occupy the most significant byte of an instruction word.
//!
//! ## Opcode Families
//! - 0x10-0x21: register arithmetic (MOVE, SUB)
//! - 0x32: contract/blob code loading (LDC)
//! - 0x4A: absolute jump (JMP)
//! - 0x50-0x5D: immediate arithmetic and memory (ADDI, DIVI, LW)
//! - 0xBA: blob queries (BSIZ)

use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction opcode (8 bits)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// MOVE: dst = src
    Move = 0x1A,
    /// SUB: dst = lhs - rhs
    Sub = 0x20,
    /// LDC: copy code of a contract or blob onto the stack, or data after the call frame
    Ldc = 0x32,
    /// JMP: $pc = $is + target * 4
    Jmp = 0x4A,
    /// ADDI: dst = lhs + imm12
    Addi = 0x50,
    /// DIVI: dst = lhs / imm12
    Divi = 0x52,
    /// LW: dst = mem[addr + offset * 8] (one word)
    Lw = 0x5D,
    /// BSIZ: dst = size of the blob whose id is stored at blob_id_ptr
    Bsiz = 0xBA,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: u32 = 8;

    pub const ALL: [Opcode; 8] = [
        Opcode::Move,
        Opcode::Sub,
        Opcode::Ldc,
        Opcode::Jmp,
        Opcode::Addi,
        Opcode::Divi,
        Opcode::Lw,
        Opcode::Bsiz,
    ];

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x1A => Some(Opcode::Move),
            0x20 => Some(Opcode::Sub),
            0x32 => Some(Opcode::Ldc),
            0x4A => Some(Opcode::Jmp),
            0x50 => Some(Opcode::Addi),
            0x52 => Some(Opcode::Divi),
            0x5D => Some(Opcode::Lw),
            0xBA => Some(Opcode::Bsiz),
            _ => None,
        }
    }

    pub fn try_from_u8(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(SpecError::InvalidOpcode(value))
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Move => "move",
            Opcode::Sub => "sub",
            Opcode::Ldc => "ldc",
            Opcode::Jmp => "jmp",
            Opcode::Addi => "addi",
            Opcode::Divi => "divi",
            Opcode::Lw => "lw",
            Opcode::Bsiz => "bsiz",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        for opcode in Opcode::ALL {
            assert_eq!(Opcode::from_u8(opcode.to_u8()), Some(opcode));
        }
    }

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::Move.to_u8(), 0x1A);
        assert_eq!(Opcode::Ldc.to_u8(), 0x32);
        assert_eq!(Opcode::Jmp.to_u8(), 0x4A);
        assert_eq!(Opcode::Bsiz.to_u8(), 0xBA);
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(Opcode::from_u8(0x00), None);
        assert_eq!(Opcode::try_from_u8(0xFF), Err(SpecError::InvalidOpcode(0xFF)));
    }
}
