//! Runtime constant values stored in a chunk's constant pool

use serde::{Deserialize, Serialize};
use std::fmt;

/// A constant value (double-precision number)
///
/// Values are copied into the constant pool, which owns them from then on.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(f64);

impl Value {
    #[inline]
    pub const fn new(number: f64) -> Self {
        Self(number)
    }

    #[inline]
    pub const fn as_f64(self) -> f64 {
        self.0
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self(number)
    }
}

impl From<Value> for f64 {
    fn from(value: Value) -> Self {
        value.0
    }
}

/// Significant digits printed for a value
const PRECISION: i32 = 6;

impl fmt::Display for Value {
    // %g: six significant digits, exponent form outside 1e-4..1e6,
    // trailing zeros dropped
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            return f.write_str("nan");
        }
        if n.is_infinite() {
            return f.write_str(if n < 0.0 { "-inf" } else { "inf" });
        }

        // Round to the target precision first; the exponent comes from the rounded form
        let sci = format!("{:.*e}", (PRECISION - 1) as usize, n);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        if exp < -4 || exp >= PRECISION {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, n);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
