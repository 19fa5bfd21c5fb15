#[macro_export]
#[cfg(feature = "no_trace")]
macro_rules! trace_expr {
    ($expr:expr, $($arg:tt)*) => {
        $expr
    };
}

/// Evaluate `$expr`, logging the call and its result along with any errno it
/// set. A call that leaves errno at zero restores the caller's previous value.
#[macro_export]
#[cfg(not(feature = "no_trace"))]
macro_rules! trace_expr {
    ($expr:expr, $($arg:tt)*) => ({
        use $crate::header::errno::strerror;
        use $crate::platform;

        log::trace!("{}", format_args!($($arg)*));

        let trace_old_errno = platform::ERRNO.get();
        platform::ERRNO.set(0);

        let ret = $expr;

        let trace_errno = platform::ERRNO.get();
        if trace_errno == 0 {
            platform::ERRNO.set(trace_old_errno);
        }

        log::trace!(
            "{} = {} ({}, {})",
            format_args!($($arg)*),
            ret,
            trace_errno,
            strerror(trace_errno)
        );

        ret
    });
}
