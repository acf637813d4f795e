use std::{error::Error, fmt, io};

/// Failure to obtain random bytes from a [`crate::random_source::RandomSource`].
#[derive(Debug)]
pub enum SourceError {
    /// A fixed byte sequence ran out before the request could be served.
    Exhausted { requested: usize, available: usize },
    /// The source answered with a payload of the wrong size.
    WrongLength { requested: usize, received: usize },
    /// A hex string could not be decoded into bytes.
    InvalidHex(String),
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Exhausted {
                requested,
                available,
            } => write!(
                f,
                "byte source exhausted: requested {requested} bytes, {available} available"
            ),
            SourceError::WrongLength {
                requested,
                received,
            } => write!(
                f,
                "byte source returned {received} bytes, expected {requested}"
            ),
            SourceError::InvalidHex(input) => write!(f, "invalid hex byte string: {input:?}"),
            SourceError::Io(err) => write!(f, "byte source i/o error: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

#[derive(Debug)]
pub enum DrawError {
    /// Zero balls, a zero maximum number, or more balls than numbers.
    InvalidDrawSpec { balls: u64, max_number: u64 },
    /// The byte source failed. Fatal for the draw; never retried.
    RandomSourceFailure(SourceError),
    /// An internal consistency check failed. This indicates a logic defect.
    ArithmeticInvariantViolation(&'static str),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::InvalidDrawSpec { balls, max_number } => write!(
                f,
                "invalid draw: cannot draw {balls} balls from numbers 1..={max_number}"
            ),
            DrawError::RandomSourceFailure(err) => write!(f, "random source failure: {err}"),
            DrawError::ArithmeticInvariantViolation(what) => {
                write!(f, "arithmetic invariant violated: {what}")
            }
        }
    }
}

impl Error for DrawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DrawError::RandomSourceFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SourceError> for DrawError {
    fn from(err: SourceError) -> Self {
        DrawError::RandomSourceFailure(err)
    }
}
