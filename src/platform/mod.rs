use core::{cell::Cell, fmt};
use std::io::{self, Write};

use self::types::*;

pub mod logger;
pub mod types;

std::thread_local! {
    static ERRNO_CELL: Cell<c_int> = const { Cell::new(0) };
}

/// Handle to the calling thread's errno.
///
/// Every thread sees its own value, so a write from one thread is never
/// observed by another.
pub struct ThreadErrno(());

impl ThreadErrno {
    pub fn get(&self) -> c_int {
        ERRNO_CELL.with(Cell::get)
    }

    pub fn set(&self, value: c_int) {
        ERRNO_CELL.with(|cell| cell.set(value));
    }

    /// Address of this thread's errno, valid for the lifetime of the thread.
    pub fn as_ptr(&self) -> *mut c_int {
        ERRNO_CELL.with(Cell::as_ptr)
    }
}

pub static ERRNO: ThreadErrno = ThreadErrno(());

/// Unbuffered writer to one of the standard streams (1 = stdout, 2 = stderr).
pub struct FileWriter(pub c_int);

impl FileWriter {
    pub fn new(fd: c_int) -> Self {
        Self(fd)
    }

    pub fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.0 {
            1 => io::stdout().lock().write_all(buf),
            2 => io::stderr().lock().write_all(buf),
            fd => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("no writer for fd {fd}"),
            )),
        }
    }
}

impl fmt::Write for FileWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
