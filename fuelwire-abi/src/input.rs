//! Caller-supplied integer inputs for the big-number coder

use fuelwire_spec::MAX_SAFE_INTEGER;
use num_bigint::BigUint;
use num_traits::Num;
use thiserror::Error;

/// An integer as handed to [`BigNumberCoder::encode`](crate::BigNumberCoder).
///
/// `Number` carries a host float (typically a JSON number) and is the only
/// representation that can already have lost precision before it reaches the coder.
#[derive(Clone, Debug, PartialEq)]
pub enum BnInput {
    Number(f64),
    Integer(i128),
    /// Decimal digits, or hex digits behind a `0x` prefix
    Text(String),
    Big(BigUint),
}

/// Why an input cannot be represented as an unsigned integer of the target width
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("value is negative")]
    Negative,

    #[error("value is not an integer")]
    NotInteger,

    #[error("number value is too large. Number can only safely handle up to 53 bits.")]
    UnsafeNumber,

    #[error("cannot parse {0:?} as an integer")]
    Unparseable(String),

    #[error("value needs {bits} bits but the type holds {width}")]
    Overflow { bits: u64, width: u32 },
}

impl BnInput {
    /// Convert to an unsigned big integer, rejecting negative and lossy inputs
    pub fn to_biguint(&self) -> Result<BigUint, ValueError> {
        match self {
            BnInput::Number(n) => number_to_biguint(*n),
            BnInput::Integer(i) => {
                if *i < 0 {
                    Err(ValueError::Negative)
                } else {
                    Ok(BigUint::from(i.unsigned_abs()))
                }
            }
            BnInput::Text(text) => parse_text(text),
            BnInput::Big(value) => Ok(value.clone()),
        }
    }
}

fn number_to_biguint(n: f64) -> Result<BigUint, ValueError> {
    if !n.is_finite() {
        return Err(ValueError::NotInteger);
    }
    if n < 0.0 {
        return Err(ValueError::Negative);
    }
    if n.fract() != 0.0 {
        return Err(ValueError::NotInteger);
    }
    if n > MAX_SAFE_INTEGER as f64 {
        return Err(ValueError::UnsafeNumber);
    }
    Ok(BigUint::from(n as u64))
}

fn parse_text(text: &str) -> Result<BigUint, ValueError> {
    if text.starts_with('-') {
        return Err(ValueError::Negative);
    }
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    // `from_str_radix` alone would let `_` separators and a leading `+` through
    let well_formed = match radix {
        16 => digits.chars().all(|c| c.is_ascii_hexdigit()),
        _ => digits.chars().all(|c| c.is_ascii_digit()),
    };
    if digits.is_empty() || !well_formed {
        return Err(ValueError::Unparseable(text.to_string()));
    }
    BigUint::from_str_radix(digits, radix).map_err(|_| ValueError::Unparseable(text.to_string()))
}

impl From<f64> for BnInput {
    fn from(value: f64) -> Self {
        BnInput::Number(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BnInput {
                fn from(value: $ty) -> Self {
                    BnInput::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128);

impl From<u128> for BnInput {
    fn from(value: u128) -> Self {
        BnInput::Big(BigUint::from(value))
    }
}

impl From<&str> for BnInput {
    fn from(value: &str) -> Self {
        BnInput::Text(value.to_string())
    }
}

impl From<String> for BnInput {
    fn from(value: String) -> Self {
        BnInput::Text(value)
    }
}

impl From<BigUint> for BnInput {
    fn from(value: BigUint) -> Self {
        BnInput::Big(value)
    }
}

impl From<&BigUint> for BnInput {
    fn from(value: &BigUint) -> Self {
        BnInput::Big(value.clone())
    }
}
