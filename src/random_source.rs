use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::error::SourceError;

/// Supplies the raw random bytes a draw consumes.
pub trait RandomSource {
    /// Return exactly `count` bytes, or fail. Callers never retry.
    fn fetch_bytes(&mut self, count: usize) -> Result<Vec<u8>, SourceError>;

    /// Short label shown next to the bytes in progress output.
    fn name(&self) -> &str;
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn fetch_bytes(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_bytes(count)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Bytes from the operating system's entropy pool.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn fetch_bytes(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        let mut bytes = vec![0u8; count];
        self.rng.try_fill_bytes(&mut bytes).map_err(|err| {
            SourceError::Io(std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;
        Ok(bytes)
    }

    fn name(&self) -> &str {
        "entropy"
    }
}

/// Reproducible bytes from a seeded generator.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn fetch_bytes(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        let mut bytes = vec![0u8; count];
        self.rng.fill_bytes(&mut bytes);
        Ok(bytes)
    }

    fn name(&self) -> &str {
        "seeded"
    }
}

/// A fixed byte sequence, handed out from the front.
#[derive(Clone, Debug)]
pub struct FixedBytes {
    bytes: Vec<u8>,
    offset: usize,
}

impl FixedBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Parse a hex string such as `"7f 00 a3"` or `"7f00a3"`.
    pub fn from_hex(input: &str) -> Result<Self, SourceError> {
        parse_hex(input).map(Self::new)
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }
}

impl RandomSource for FixedBytes {
    fn fetch_bytes(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        if count > self.remaining() {
            return Err(SourceError::Exhausted {
                requested: count,
                available: self.remaining(),
            });
        }
        let bytes = self.bytes[self.offset..self.offset + count].to_vec();
        self.offset += count;
        Ok(bytes)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Decode hex digits into bytes. Whitespace and `:` separators are ignored.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, SourceError> {
    let digits: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(SourceError::InvalidHex(input.to_string()));
    }
    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| SourceError::InvalidHex(input.to_string()))
        })
        .collect()
}
