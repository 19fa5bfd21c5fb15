//! math.h implementation, following
//! http://pubs.opengroup.org/onlinepubs/7908799/xsh/math.h.html

use core::num::FpCategory;

use crate::{
    error::ResultExt,
    platform::types::{c_double, c_float, c_int},
};

pub use self::ceil::{ceil_checked, ceil_in, ceil_lenient, ceil_with, ceilf_with, FpMode, Split};

mod ceil;

pub const HUGE_VAL: c_double = c_double::INFINITY;
pub const HUGE_VALF: c_float = c_float::INFINITY;

pub const INFINITY: c_float = c_float::INFINITY;
pub const NAN: c_float = c_float::NAN;

pub const FP_INFINITE: c_int = 0;
pub const FP_NAN: c_int = 1;
pub const FP_NORMAL: c_int = 2;
pub const FP_SUBNORMAL: c_int = 3;
pub const FP_ZERO: c_int = 4;

pub const MATH_ERRNO: c_int = 1;
pub const MATH_ERREXCEPT: c_int = 2;
// Domain errors are reported through errno only.
#[allow(non_upper_case_globals)]
pub const math_errhandling: c_int = MATH_ERRNO;

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn ceil(x: c_double) -> c_double {
    trace_expr!(ceil_with(x, FpMode::BUILD).or_errno(x), "ceil({})", x)
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn ceilf(x: c_float) -> c_float {
    trace_expr!(ceilf_with(x, FpMode::BUILD).or_errno(x), "ceilf({})", x)
}

/// Store the integral part of `x` in `*iptr` (when non-null) and return the
/// fractional part.
#[cfg_attr(feature = "c_symbols", no_mangle)]
pub unsafe extern "C" fn modf(x: c_double, iptr: *mut c_double) -> c_double {
    let (frac, int) = libm::modf(x);
    if let Some(iptr) = unsafe { iptr.as_mut() } {
        *iptr = int;
    }
    frac
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub unsafe extern "C" fn modff(x: c_float, iptr: *mut c_float) -> c_float {
    let (frac, int) = libm::modff(x);
    if let Some(iptr) = unsafe { iptr.as_mut() } {
        *iptr = int;
    }
    frac
}

fn fp_category(category: FpCategory) -> c_int {
    match category {
        FpCategory::Infinite => FP_INFINITE,
        FpCategory::Nan => FP_NAN,
        FpCategory::Normal => FP_NORMAL,
        FpCategory::Subnormal => FP_SUBNORMAL,
        FpCategory::Zero => FP_ZERO,
    }
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __fpclassify(x: c_double) -> c_int {
    fp_category(x.classify())
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __fpclassifyf(x: c_float) -> c_int {
    fp_category(x.classify())
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __isnan(x: c_double) -> c_int {
    x.is_nan() as c_int
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __isnanf(x: c_float) -> c_int {
    x.is_nan() as c_int
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __isinf(x: c_double) -> c_int {
    x.is_infinite() as c_int
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __isinff(x: c_float) -> c_int {
    x.is_infinite() as c_int
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __isfinite(x: c_double) -> c_int {
    x.is_finite() as c_int
}

#[cfg_attr(feature = "c_symbols", no_mangle)]
pub extern "C" fn __isfinitef(x: c_float) -> c_int {
    x.is_finite() as c_int
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        header::errno::{EDOM, ERANGE},
        platform::ERRNO,
    };
    use core::ptr;

    #[test]
    fn ceil_finite_leaves_errno() {
        ERRNO.set(ERANGE);
        assert_eq!(ceil(1.5), 2.0);
        assert_eq!(ceil(-1.5), -1.0);
        assert_eq!(ceil(0.0), 0.0);
        assert_eq!(ceilf(2.5), 3.0);
        assert_eq!(ERRNO.get(), ERANGE);
        ERRNO.set(0);
    }

    #[cfg(feature = "ieee_fp")]
    #[test]
    fn ceil_nan_sets_edom() {
        ERRNO.set(0);
        assert!(ceil(f64::NAN).is_nan());
        assert_eq!(ERRNO.get(), EDOM);

        ERRNO.set(0);
        assert!(ceilf(f32::NAN).is_nan());
        assert_eq!(ERRNO.get(), EDOM);
        ERRNO.set(0);
    }

    #[cfg(not(feature = "ieee_fp"))]
    #[test]
    fn ceil_nan_without_ieee_checks() {
        ERRNO.set(0);
        assert!(ceil(f64::NAN).is_nan());
        assert_eq!(ERRNO.get(), 0);
    }

    #[test]
    fn ceil_infinity_no_error() {
        ERRNO.set(0);
        assert_eq!(ceil(f64::INFINITY), f64::INFINITY);
        assert_eq!(ceil(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(ceilf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert_eq!(ERRNO.get(), 0);
    }

    #[test]
    fn modf_splits() {
        let mut int = 0.0;
        let frac = unsafe { modf(-3.75, &mut int) };
        assert_eq!(frac, -0.75);
        assert_eq!(int, -3.0);

        let mut intf = 0.0f32;
        let fracf = unsafe { modff(2.5, &mut intf) };
        assert_eq!(fracf, 0.5);
        assert_eq!(intf, 2.0);

        assert_eq!(unsafe { modf(1.25, ptr::null_mut()) }, 0.25);
    }

    #[test]
    fn classify() {
        assert_eq!(__fpclassify(f64::NAN), FP_NAN);
        assert_eq!(__fpclassify(f64::INFINITY), FP_INFINITE);
        assert_eq!(__fpclassify(1.0), FP_NORMAL);
        assert_eq!(__fpclassify(f64::MIN_POSITIVE / 2.0), FP_SUBNORMAL);
        assert_eq!(__fpclassify(-0.0), FP_ZERO);
        assert_eq!(__fpclassifyf(f32::NAN), FP_NAN);

        assert_eq!(__isnan(f64::NAN), 1);
        assert_eq!(__isnanf(1.0), 0);
        assert_eq!(__isinf(f64::NEG_INFINITY), 1);
        assert_eq!(__isinff(f32::MAX), 0);
        assert_eq!(__isfinite(f64::MAX), 1);
        assert_eq!(__isfinitef(f32::INFINITY), 0);
    }
}
