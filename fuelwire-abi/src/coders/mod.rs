//! Concrete coders, one per ABI type family

pub mod b256;
pub mod big_number;

pub use b256::B256Coder;
pub use big_number::{BigNumberCoder, BigNumberType};
