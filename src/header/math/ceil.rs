//! Ceiling, ANSI/ISO 9899-1990 §7.5.6.1.
//!
//! The value is computed by splitting `x` with `modf`: both parts carry the
//! sign of `x`, so only a positive fractional remainder bumps the integral
//! part up by one. Negative inputs truncate toward zero, which is already
//! the ceiling.

use crate::{
    error::{Errno, Result},
    header::errno::EDOM,
};

/// Treatment of NaN and infinite arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FpMode {
    /// NaN is a domain error; infinities are returned unchanged.
    Ieee,
    /// No checks. NaN and infinities pass through the split untouched.
    Lenient,
}

impl FpMode {
    /// Mode used by the C entry points, selected by the `ieee_fp` feature.
    #[cfg(feature = "ieee_fp")]
    pub const BUILD: FpMode = FpMode::Ieee;
    #[cfg(not(feature = "ieee_fp"))]
    pub const BUILD: FpMode = FpMode::Lenient;
}

impl Default for FpMode {
    fn default() -> Self {
        Self::BUILD
    }
}

/// Floating point types that can be split into integral and fractional parts.
pub trait Split: Copy + PartialOrd + core::ops::Add<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    /// `(fractional, integral)`, both with the sign of `self`.
    fn modf(self) -> (Self, Self);
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
}

impl Split for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn modf(self) -> (Self, Self) {
        libm::modf(self)
    }
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

impl Split for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn modf(self) -> (Self, Self) {
        libm::modff(self)
    }
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

/// Smallest integral value not less than `x`.
///
/// In [`FpMode::Ieee`] a NaN argument yields `Err(Errno(EDOM))` and an
/// infinite one is returned as is. [`FpMode::Lenient`] never fails.
pub fn ceil_in<T: Split>(x: T, mode: FpMode) -> Result<T> {
    if mode == FpMode::Ieee {
        if x.is_nan() {
            return Err(Errno(EDOM));
        }
        if x.is_infinite() {
            return Ok(x);
        }
    }

    let (frac, int) = x.modf();
    Ok(if frac > T::ZERO { int + T::ONE } else { int })
}

pub fn ceil_with(x: f64, mode: FpMode) -> Result<f64> {
    ceil_in(x, mode)
}

pub fn ceilf_with(x: f32, mode: FpMode) -> Result<f32> {
    ceil_in(x, mode)
}

/// [`ceil_with`] in [`FpMode::Ieee`].
pub fn ceil_checked(x: f64) -> Result<f64> {
    ceil_in(x, FpMode::Ieee)
}

/// [`ceil_with`] in [`FpMode::Lenient`]: NaN comes back as NaN, no error.
pub fn ceil_lenient(x: f64) -> f64 {
    // Lenient mode has no failure path.
    ceil_in(x, FpMode::Lenient).unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(a: f64, b: f64) -> bool {
        a.to_bits() == b.to_bits()
    }

    #[test]
    fn halves() {
        assert_eq!(ceil_checked(1.5), Ok(2.0));
        assert_eq!(ceil_checked(-1.5), Ok(-1.0));
        assert_eq!(ceil_checked(0.5), Ok(1.0));
        assert_eq!(ceil_checked(2.000001), Ok(3.0));
        assert_eq!(ceil_checked(-2.999999), Ok(-2.0));
    }

    #[test]
    fn zeros_keep_sign() {
        assert!(same(ceil_checked(0.0).unwrap(), 0.0));
        assert!(same(ceil_checked(-0.0).unwrap(), -0.0));
        assert!(same(ceil_checked(-0.5).unwrap(), -0.0));
        assert!(same(ceil_checked(-f64::MIN_POSITIVE).unwrap(), -0.0));
        assert_eq!(ceil_checked(f64::MIN_POSITIVE), Ok(1.0));
    }

    #[test]
    fn integral_inputs_unchanged() {
        for x in [1.0, -1.0, 42.0, -1e15, 4503599627370496.0, f64::MAX, f64::MIN] {
            assert_eq!(ceil_checked(x), Ok(x), "{x}");
        }
    }

    #[test]
    fn just_below_two_pow_52() {
        let x = 4503599627370495.5;
        assert_eq!(ceil_checked(x), Ok(4503599627370496.0));
        assert_eq!(ceil_checked(-x), Ok(-4503599627370495.0));
    }

    #[test]
    fn ieee_nan_is_domain_error() {
        assert_eq!(ceil_checked(f64::NAN), Err(Errno(EDOM)));
        assert_eq!(ceilf_with(f32::NAN, FpMode::Ieee), Err(Errno(EDOM)));
    }

    #[test]
    fn ieee_infinities_pass() {
        assert_eq!(ceil_checked(f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(ceil_checked(f64::NEG_INFINITY), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn lenient_never_fails() {
        assert!(ceil_with(f64::NAN, FpMode::Lenient).unwrap().is_nan());
        assert!(ceil_lenient(f64::NAN).is_nan());
        assert_eq!(ceil_lenient(f64::INFINITY), f64::INFINITY);
        assert_eq!(ceil_lenient(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(ceil_lenient(-1.5), -1.0);
    }

    #[test]
    fn single_precision() {
        assert_eq!(ceilf_with(1.25, FpMode::Ieee), Ok(2.0));
        assert_eq!(ceilf_with(-1.25, FpMode::Ieee), Ok(-1.0));
        assert_eq!(ceilf_with(8388607.5, FpMode::Ieee), Ok(8388608.0));
        assert_eq!(ceilf_with(f32::INFINITY, FpMode::Lenient), Ok(f32::INFINITY));
    }

    #[test]
    fn build_mode_follows_feature() {
        assert_eq!(FpMode::default(), FpMode::BUILD);
        assert_eq!(FpMode::BUILD == FpMode::Ieee, cfg!(feature = "ieee_fp"));
    }
}
