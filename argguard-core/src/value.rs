//! Operand values for the numeric checks
//!
//! The comparison checks accept arguments of independently chosen types:
//! any built-in integer width, either float width, a [`Duration`], even a
//! reference to one of these. [`ArgValue`] is the tagged form those
//! arguments collapse into, and [`ArgValue::to_f64`] is the one place
//! where they are coerced into the `f64` comparison domain.
//!
//! Text and boolean operands are representable - a call site can hand them
//! to a comparison and it will compile - but coercion rejects them with an
//! error naming the kind. That rejection is a misuse failure, distinct
//! from an out-of-order comparison (see [`crate::errors`]).

use core::time::Duration;

use crate::errors::{GuardError, GuardResult};

/// An argument of unknown kind, as handed to the numeric checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgValue<'a> {
    /// Signed integer of any built-in width
    Signed(i64),
    /// Unsigned integer of any built-in width
    Unsigned(u64),
    /// Floating-point value
    Float(f64),
    /// Elapsed time, compared in seconds
    Duration(Duration),
    /// Text; representable but rejected by coercion
    Text(&'a str),
    /// Boolean; representable but rejected by coercion
    Bool(bool),
}

impl ArgValue<'_> {
    /// Convert into the `f64` comparison domain.
    ///
    /// Every numeric kind converts, durations convert to seconds. Text
    /// and boolean operands return [`GuardError::NotCoercible`] naming
    /// the offending kind.
    pub fn to_f64(self) -> GuardResult<f64> {
        match self {
            Self::Signed(v) => Ok(v as f64),
            Self::Unsigned(v) => Ok(v as f64),
            Self::Float(v) => Ok(v),
            Self::Duration(v) => Ok(v.as_secs_f64()),
            Self::Text(_) => Err(GuardError::NotCoercible { type_name: "str" }),
            Self::Bool(_) => Err(GuardError::NotCoercible { type_name: "bool" }),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for ArgValue<'_> {
            fn from(value: $ty) -> Self {
                Self::Signed(value as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for ArgValue<'_> {
            fn from(value: $ty) -> Self {
                Self::Unsigned(value as u64)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

// 128-bit operands exceed the i64/u64 variants; they go straight to the
// comparison domain.
impl From<i128> for ArgValue<'_> {
    fn from(value: i128) -> Self {
        Self::Float(value as f64)
    }
}

impl From<u128> for ArgValue<'_> {
    fn from(value: u128) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f32> for ArgValue<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Duration> for ArgValue<'_> {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<bool> for ArgValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a str> for ArgValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

#[cfg(feature = "std")]
impl<'a> From<&'a String> for ArgValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

// Reference operands dereference one level to whatever they point at.
macro_rules! impl_from_ref {
    ($($ty:ty),*) => {$(
        impl From<&$ty> for ArgValue<'_> {
            fn from(value: &$ty) -> Self {
                (*value).into()
            }
        }
    )*};
}

impl_from_ref!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Duration, bool
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds_coerce() {
        assert_eq!(ArgValue::from(-3i8).to_f64().unwrap(), -3.0);
        assert_eq!(ArgValue::from(42u64).to_f64().unwrap(), 42.0);
        assert_eq!(ArgValue::from(2.5f32).to_f64().unwrap(), 2.5);
        assert_eq!(ArgValue::from(10u128).to_f64().unwrap(), 10.0);
    }

    #[test]
    fn durations_coerce_to_seconds() {
        let value = ArgValue::from(Duration::from_millis(1500));
        assert_eq!(value.to_f64().unwrap(), 1.5);
    }

    #[test]
    fn references_dereference() {
        assert_eq!(ArgValue::from(&7i32), ArgValue::Signed(7));
        assert_eq!(ArgValue::from(&2.5f64), ArgValue::Float(2.5));
    }

    #[test]
    fn text_is_rejected() {
        let err = ArgValue::from("abc").to_f64().unwrap_err();
        assert!(matches!(err, GuardError::NotCoercible { type_name: "str" }));
    }

    #[test]
    fn booleans_are_rejected() {
        let err = ArgValue::from(true).to_f64().unwrap_err();
        assert!(matches!(err, GuardError::NotCoercible { type_name: "bool" }));
    }
}
