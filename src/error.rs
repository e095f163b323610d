use std::io;

/// Pool error type
#[derive(Debug)]
pub enum ErrorKind {
    /// I/O error spawning a worker thread
    Io(io::Error),
    /// Pool was started with a thread count of zero
    ZeroThreads,
}

impl From<io::Error> for ErrorKind {
    fn from(err: io::Error) -> ErrorKind {
        ErrorKind::Io(err)
    }
}

/// A specialized `Result` type for pool operations.
pub type Result<T> = std::result::Result<T, ErrorKind>;
