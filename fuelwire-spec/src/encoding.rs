//! # Instruction Encoding Constants and Helpers
//!
//! Centralized constants and helper functions for packing instruction words.
//!
//! ## Instruction Format (32-bit, stored big-endian)
//!
//! ```text
//! RRRR:    [opcode:8][ra:6][rb:6][rc:6][rd:6]
//! RRRI06:  [opcode:8][ra:6][rb:6][rc:6][imm:6]
//! RRI12:   [opcode:8][ra:6][rb:6][imm:12]
//! ```
//!
//! Operand slots that an instruction does not use are zero.

use crate::Opcode;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 24-31 (8 bits)
pub const OPCODE_SHIFT: u32 = 24;

/// Register A field: bits 18-23
pub const RA_SHIFT: u32 = 18;

/// Register B field: bits 12-17
pub const RB_SHIFT: u32 = 12;

/// Register C field: bits 6-11
pub const RC_SHIFT: u32 = 6;

/// Register D field: bits 0-5
pub const RD_SHIFT: u32 = 0;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (8 bits)
pub const OPCODE_MASK: u32 = 0xFF;

/// Register field mask (6 bits)
pub const REGISTER_MASK: u32 = 0x3F;

/// 6-bit immediate mask
pub const IMM06_MASK: u32 = 0x3F;

/// 12-bit immediate mask
pub const IMM12_MASK: u32 = 0xFFF;

// ============================================================================
// Field Extraction Functions
// ============================================================================

#[inline]
pub const fn extract_opcode(inst: u32) -> u32 {
    (inst >> OPCODE_SHIFT) & OPCODE_MASK
}

#[inline]
pub const fn extract_ra(inst: u32) -> u32 {
    (inst >> RA_SHIFT) & REGISTER_MASK
}

#[inline]
pub const fn extract_rb(inst: u32) -> u32 {
    (inst >> RB_SHIFT) & REGISTER_MASK
}

#[inline]
pub const fn extract_rc(inst: u32) -> u32 {
    (inst >> RC_SHIFT) & REGISTER_MASK
}

#[inline]
pub const fn extract_rd(inst: u32) -> u32 {
    (inst >> RD_SHIFT) & REGISTER_MASK
}

#[inline]
pub const fn extract_imm06(inst: u32) -> u32 {
    inst & IMM06_MASK
}

#[inline]
pub const fn extract_imm12(inst: u32) -> u32 {
    inst & IMM12_MASK
}

// ============================================================================
// Instruction Encoding Functions
// ============================================================================

#[inline]
pub const fn encode_r(opcode: Opcode, ra: u32) -> u32 {
    ((opcode.to_u8() as u32) << OPCODE_SHIFT) | ((ra & REGISTER_MASK) << RA_SHIFT)
}

#[inline]
pub const fn encode_rr(opcode: Opcode, ra: u32, rb: u32) -> u32 {
    encode_r(opcode, ra) | ((rb & REGISTER_MASK) << RB_SHIFT)
}

#[inline]
pub const fn encode_rrr(opcode: Opcode, ra: u32, rb: u32, rc: u32) -> u32 {
    encode_rr(opcode, ra, rb) | ((rc & REGISTER_MASK) << RC_SHIFT)
}

#[inline]
pub const fn encode_rrri06(opcode: Opcode, ra: u32, rb: u32, rc: u32, imm: u32) -> u32 {
    encode_rrr(opcode, ra, rb, rc) | (imm & IMM06_MASK)
}

#[inline]
pub const fn encode_rri12(opcode: Opcode, ra: u32, rb: u32, imm: u32) -> u32 {
    encode_rr(opcode, ra, rb) | (imm & IMM12_MASK)
}
