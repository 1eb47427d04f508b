use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::engine::errors::MarshalError;

/// Exact fixed-point value: `unscaled / 10^scale`.
///
/// Up to 38 significant digits fit in the i128 mantissa, which covers every
/// precision the engine can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: i128,
    precision: u8,
    scale: u8,
}

impl Decimal {
    pub fn new(unscaled: i128, precision: u8, scale: u8) -> Self {
        Self {
            unscaled,
            precision,
            scale,
        }
    }

    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn to_big_decimal(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.unscaled), self.scale as i64)
    }

    /// Converts into `rust_decimal`, which holds a 96-bit mantissa and at
    /// most 28 fractional digits. Values beyond that fail instead of rounding.
    pub fn to_fixed(&self) -> Result<rust_decimal::Decimal, MarshalError> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.unscaled, self.scale as u32)
            .map_err(|_| MarshalError::overflow(self, "rust_decimal::Decimal"))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if self.unscaled < 0 {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() <= scale {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        } else {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        }
    }
}
