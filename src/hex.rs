use crate::base_common::Alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: u8, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid hex character {:?} at index {}", character as char, index)
            }
            Error::OddLength => write!(f, "Odd number of hex digits"),
        }
    }
}

const ALPHABET: Alphabet<16> = match Alphabet::new(b"0123456789abcdef") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

fn nibble(input: &[u8], index: usize) -> Result<u8, Error> {
    let character = input[index];
    ALPHABET
        .decode(character.to_ascii_lowercase(), index)
        .map_err(|_| Error::InvalidHexCharacter { character, index })
}

/// Decodes upper or lower case hex.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    if input.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    (0..input.len())
        .step_by(2)
        .map(|index| -> Result<u8, Error> { Ok(nibble(input, index)? << 4 | nibble(input, index + 1)?) })
        .collect()
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for &byte in input {
        output.push(ALPHABET.encode((byte >> 4) as usize) as char);
        output.push(ALPHABET.encode((byte & 0x0F) as usize) as char);
    }
    output
}
