use crate::{header::errno::STR_ERROR, platform::types::c_int};

/// Positive error codes (EDOM, not -EDOM).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Errno(pub c_int);

pub type Result<T, E = Errno> = core::result::Result<T, E>;

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match usize::try_from(self.0).ok().and_then(|i| STR_ERROR.get(i)) {
            Some(desc) => write!(f, "{desc}"),
            None => write!(f, "unknown error ({})", self.0),
        }
    }
}

impl std::error::Error for Errno {}

/// Bridges a `Result` to the C convention of a plain return value plus errno.
pub trait ResultExt<T> {
    /// On error, store the code in the calling thread's errno and return
    /// `fallback` instead.
    fn or_errno(self, fallback: T) -> T;
}

impl<T> ResultExt<T> for Result<T, Errno> {
    fn or_errno(self, fallback: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(Errno(errno)) => {
                crate::platform::ERRNO.set(errno);
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{header::errno::EDOM, platform::ERRNO};

    #[test]
    fn display() {
        assert_eq!(Errno(EDOM).to_string(), "Numerical argument out of domain");
        assert_eq!(Errno(4096).to_string(), "unknown error (4096)");
    }

    #[test]
    fn or_errno_sets_errno_on_error() {
        ERRNO.set(0);
        let ok: Result<f64> = Ok(2.0);
        assert_eq!(ok.or_errno(-1.0), 2.0);
        assert_eq!(ERRNO.get(), 0);

        let err: Result<f64> = Err(Errno(EDOM));
        assert_eq!(err.or_errno(-1.0), -1.0);
        assert_eq!(ERRNO.get(), EDOM);
        ERRNO.set(0);
    }
}
