//! ANSI C math routines.
//!
//! Rust callers use the `Result`-returning functions in [`header::math`],
//! which report a domain error as [`error::Errno`] and touch no shared
//! state. The `extern "C"` entry points keep the C convention: they return a
//! value and report errors through the calling thread's errno.

#![allow(non_camel_case_types)]

#[macro_use]
mod macros;

pub mod error;
pub mod header;
pub mod platform;

pub use crate::{
    error::{Errno, ResultExt},
    header::math::{ceil_checked, ceil_lenient, ceil_with, ceilf_with, FpMode},
};
