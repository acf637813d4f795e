use std::fmt;

use crate::error::DrawError;

/// How many balls are drawn, and the highest number on a ball, e.g. `6 of 59`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawSpec {
    balls: u64,
    max_number: u64,
}

impl DrawSpec {
    /// Returns [`DrawError::InvalidDrawSpec`] unless `1 <= balls <= max_number`.
    pub fn new(balls: u64, max_number: u64) -> Result<Self, DrawError> {
        if balls == 0 || max_number == 0 || balls > max_number {
            return Err(DrawError::InvalidDrawSpec { balls, max_number });
        }
        Ok(Self { balls, max_number })
    }

    pub fn balls(&self) -> u64 {
        self.balls
    }

    pub fn max_number(&self) -> u64 {
        self.max_number
    }
}

impl fmt::Display for DrawSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.balls, self.max_number)
    }
}
