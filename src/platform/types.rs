// C scalar types used at the ABI boundary.

pub type c_int = i32;
pub type c_float = f32;
pub type c_double = f64;

pub type float_t = c_float;
pub type double_t = c_double;
