//! Register ids for the Fuel VM (64 registers, 6-bit ids)

use crate::encoding::REGISTER_MASK;
use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 64;

/// Register id (0x00-0x3F). Ids below [`RegId::WRITABLE`] are reserved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegId(u8);

impl RegId {
    pub const ZERO: Self = Self(0x00); // zero - hardwired to 0
    pub const ONE: Self = Self(0x01); // one  - hardwired to 1
    pub const OF: Self = Self(0x02); // overflow / underflow
    pub const PC: Self = Self(0x03); // program counter
    pub const SSP: Self = Self(0x04); // stack start pointer
    pub const SP: Self = Self(0x05); // stack pointer
    pub const FP: Self = Self(0x06); // frame pointer
    pub const HP: Self = Self(0x07); // heap pointer
    pub const ERR: Self = Self(0x08); // error codes
    pub const GGAS: Self = Self(0x09); // global gas
    pub const CGAS: Self = Self(0x0A); // context gas
    pub const BAL: Self = Self(0x0B); // received balance
    pub const IS: Self = Self(0x0C); // instruction start
    pub const RET: Self = Self(0x0D); // return value
    pub const RETL: Self = Self(0x0E); // return length
    pub const FLAG: Self = Self(0x0F); // flags
    pub const WRITABLE: Self = Self(0x10);

    /// Build a register id, truncating to 6 bits
    #[inline]
    pub const fn new(id: u8) -> Self {
        Self(id & REGISTER_MASK as u8)
    }

    #[inline]
    pub fn new_checked(id: u8) -> Result<Self> {
        if (id as usize) < NUM_REGISTERS {
            Ok(Self(id))
        } else {
            Err(SpecError::InvalidRegister(id))
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_reserved(self) -> bool {
        self < Self::WRITABLE
    }

    /// Assembly name of a reserved register
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0x00 => "zero",
            0x01 => "one",
            0x02 => "of",
            0x03 => "pc",
            0x04 => "ssp",
            0x05 => "sp",
            0x06 => "fp",
            0x07 => "hp",
            0x08 => "err",
            0x09 => "ggas",
            0x0A => "cgas",
            0x0B => "bal",
            0x0C => "is",
            0x0D => "ret",
            0x0E => "retl",
            0x0F => "flag",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "${name}"),
            None => write!(f, "$r{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_truncates() {
        assert_eq!(RegId::new(0x43), RegId::new(0x03));
        assert_eq!(RegId::new(0x43), RegId::PC);
    }

    #[test]
    fn test_new_checked() {
        assert_eq!(RegId::new_checked(0x3F).unwrap().to_u8(), 0x3F);
        assert_eq!(RegId::new_checked(64), Err(SpecError::InvalidRegister(64)));
    }

    #[test]
    fn test_display() {
        assert_eq!(RegId::PC.to_string(), "$pc");
        assert_eq!(RegId::IS.to_string(), "$is");
        assert_eq!(RegId::new(0x11).to_string(), "$r17");
        assert!(RegId::SP.is_reserved());
        assert!(!RegId::WRITABLE.is_reserved());
    }
}
