use std::convert::TryFrom;
use std::fmt::{Debug, Display, LowerExp};
use std::hash::Hash;

/// Numeric element accepted by the statistics and threshold functions.
///
/// `Key` is the hashable identity used for frequency counting. Integers are
/// their own key; floats hash by bit pattern with `-0.0` folded onto `0.0`.
pub trait Numeric: Copy + PartialOrd + Display + Debug {
    type Key: Hash + Eq;

    fn to_f64(self) -> f64;

    fn key(self) -> Self::Key;

    /// Exact integer value, if this is an integer that fits in `i128`.
    fn to_i128(self) -> Option<i128> {
        None
    }

    /// Decimal text. Floats always carry a fraction or an exponent.
    fn canonical_text(self) -> String {
        self.to_string()
    }

    /// Strictly greater than `threshold`. Integer pairs compare exactly,
    /// anything involving a float compares as `f64`.
    fn exceeds<U: Numeric>(self, threshold: U) -> bool {
        match (self.to_i128(), threshold.to_i128()) {
            (Some(value), Some(threshold)) => value > threshold,
            _ => self.to_f64() > threshold.to_f64(),
        }
    }
}

macro_rules! impl_numeric_int {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                type Key = $ty;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn key(self) -> Self::Key {
                    self
                }

                fn to_i128(self) -> Option<i128> {
                    i128::try_from(self).ok()
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Shortest round-trip digits, in exponent form below `1e-4` and from `1e16`
/// up (`1e+16`, `2.5e-07`), otherwise positional with at least one fraction
/// digit (`15.0`).
fn float_text<F>(value: F) -> String
where
    F: Display + LowerExp,
{
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        // inf, -inf, NaN
        None => return value.to_string().to_ascii_lowercase(),
    };

    if exponent < -4 || exponent >= 16 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let mut text = value.to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }
        text
    }
}

impl Numeric for f64 {
    type Key = u64;

    fn to_f64(self) -> f64 {
        self
    }

    fn key(self) -> Self::Key {
        if self == 0.0 {
            0f64.to_bits()
        } else {
            self.to_bits()
        }
    }

    fn canonical_text(self) -> String {
        float_text(self)
    }
}

impl Numeric for f32 {
    type Key = u32;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn key(self) -> Self::Key {
        if self == 0.0 {
            0f32.to_bits()
        } else {
            self.to_bits()
        }
    }

    fn canonical_text(self) -> String {
        float_text(self)
    }
}
