//! C header implementations.

pub mod errno;
pub mod math;
