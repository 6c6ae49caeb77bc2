use super::{alphabet, Encoding, BITCOIN, CHUNK_DIGITS, RADIX};
use num_bigint::BigUint;
use num_traits::Zero;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    /// `index` counts from the first character after the padding prefix.
    InvalidCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => {
                write!(f, "{}", alphabet::DecodeError::InvalidCharacter { character: *character, index: *index })
            }
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

impl Encoding {
    fn decode_digits(&self, digits: &[u8]) -> Result<BigUint, Error> {
        let mut value = BigUint::zero();
        for (chunk_index, chunk) in digits.chunks(CHUNK_DIGITS).enumerate() {
            let mut accumulator = 0u64;
            for (offset, &character) in chunk.iter().enumerate() {
                let digit = self.alphabet.decode(character, chunk_index * CHUNK_DIGITS + offset)?;
                accumulator = accumulator * RADIX + digit as u64;
            }
            value = value * RADIX.pow(chunk.len() as u32) + accumulator;
        }
        Ok(value)
    }

    /// Decodes `input`, turning each leading padding character back into a zero byte.
    ///
    /// Without padding, leading zero bytes of the original input cannot be recovered.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let zeros = self.padding_len(input);
        let value = self.decode_digits(&input[zeros..])?;
        let mut output = vec![0u8; zeros];
        if !value.is_zero() {
            output.extend_from_slice(&value.to_bytes_be());
        }
        Ok(output)
    }

    /// Writes the decoding of `input` to the start of `output` and returns its length.
    ///
    /// A buffer of `input.len()` bytes is always large enough.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let decoded = self.decode(input)?;
        let output = output.as_mut().get_mut(..decoded.len()).ok_or(Error::BufferTooSmall)?;
        output.copy_from_slice(&decoded);
        Ok(decoded.len())
    }

    /// Decodes `input` into a `u64`, skipping the padding prefix.
    ///
    /// Values that do not fit in 64 bits wrap around.
    pub fn decode_uint(&self, input: impl AsRef<[u8]>) -> Result<u64, Error> {
        let input = input.as_ref();
        let digits = &input[self.padding_len(input)..];
        let mut value = 0u64;
        for (index, &character) in digits.iter().enumerate() {
            let digit = self.alphabet.decode(character, index)?;
            value = value.wrapping_mul(RADIX).wrapping_add(digit as u64);
        }
        Ok(value)
    }

    /// Decodes the magnitude carried by `input`, skipping the padding prefix.
    pub fn decode_big_uint(&self, input: impl AsRef<[u8]>) -> Result<BigUint, Error> {
        let input = input.as_ref();
        self.decode_digits(&input[self.padding_len(input)..])
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    BITCOIN.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    BITCOIN.decode_into(input, output)
}

pub fn decode_uint(input: impl AsRef<[u8]>) -> Result<u64, Error> {
    BITCOIN.decode_uint(input)
}
