//! # Fuel ABI Value Coders
//!
//! Canonical binary encoding of typed values. Every coder implements [`Coder`]
//! and is dispatched by its declared ABI type name.
//!
//! ## Example
//!
//! ```rust
//! use fuelwire_abi::{BigNumberCoder, BnInput, Coder};
//! use num_bigint::BigUint;
//!
//! let coder = BigNumberCoder::u64();
//! let bytes = coder.encode(&BnInput::from(1000u64)).unwrap();
//! assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0x03, 0xE8]);
//!
//! let (value, next) = coder.decode(&bytes, 0).unwrap();
//! assert_eq!(value, BigUint::from(1000u32));
//! assert_eq!(next, 8);
//! ```

pub mod coder;
pub mod coders;
pub mod error;
pub mod input;

pub use coder::{Coder, EncodedLength};
pub use coders::{B256Coder, BigNumberCoder, BigNumberType};
pub use error::{AbiError, Result};
pub use input::{BnInput, ValueError};
