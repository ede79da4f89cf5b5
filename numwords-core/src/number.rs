//! Input value type for conversion

use crate::error::{Error, Result};

/// A numeric input value
///
/// Callers may pass any unsigned integer primitive or a float; floats are
/// accepted so that non-integer input can be rejected with a typed error
/// rather than at the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact non-negative integer
    Integer(u64),
    /// A real value, validated at tokenization time
    Real(f64),
}

impl Number {
    /// Extract the exact integer value
    ///
    /// `Real` values must be finite, non-negative, and carry no fractional
    /// part; anything else fails with [`Error::NotAnInteger`].
    pub fn as_integer(self) -> Result<u64> {
        match self {
            Number::Integer(value) => Ok(value),
            Number::Real(value) => {
                if value.is_finite()
                    && value >= 0.0
                    && value.fract() == 0.0
                    && value <= u64::MAX as f64
                {
                    Ok(value as u64)
                } else {
                    Err(Error::NotAnInteger(value))
                }
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                Number::Integer(value as u64)
            }
        })*
    };
}

impl_from_int!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Real(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_passes_through() {
        assert_eq!(Number::from(42u32).as_integer().unwrap(), 42);
        assert_eq!(Number::from(0u8).as_integer().unwrap(), 0);
    }

    #[test]
    fn integral_real_is_accepted() {
        assert_eq!(Number::from(1000.0f64).as_integer().unwrap(), 1000);
    }

    #[test]
    fn fractional_real_is_rejected() {
        assert_eq!(
            Number::from(1.5f64).as_integer(),
            Err(Error::NotAnInteger(1.5))
        );
    }

    #[test]
    fn negative_and_non_finite_reals_are_rejected() {
        assert!(Number::from(-3.0f64).as_integer().is_err());
        assert!(Number::from(f64::NAN).as_integer().is_err());
        assert!(Number::from(f64::INFINITY).as_integer().is_err());
    }
}
