use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize, expected: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    NonAsciiPadding { character: u8 },
    PaddingIsDigit { character: char, digit: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length, expected } => {
                write!(f, "Alphabet has {} characters ({} expected)", length, expected)
            }
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
            Self::NonAsciiPadding { character } => write!(f, "Non-ascii padding character {:#04x}", character),
            Self::PaddingIsDigit { character, digit } => {
                write!(f, "Padding character '{}' is digit {} of the alphabet", character, digit)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => {
                if character.is_ascii_graphic() {
                    write!(f, "Invalid character '{}' at index {}", *character as char, index)
                } else {
                    write!(f, "Invalid character {:#04x} at index {}", character, index)
                }
            }
        }
    }
}

/// An ordered set of `N` distinct ascii symbols, digit `d` being written as the `d`-th symbol.
///
/// The inverse table covers every byte value so that decoding never has to range-check its input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 256],
}

impl<const N: usize> Alphabet<N> {
    pub const fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        self.value(character)
            .ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub const fn value(&self, character: u8) -> Option<u8> {
        self.decode[character as usize]
    }

    pub const fn new(characters: &[u8]) -> Result<Self, Error> {
        if characters.len() != N {
            return Err(Error::InvalidLength {
                length: characters.len(),
                expected: N,
            });
        }

        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.encode
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: `new` rejects every non-ascii character.
        unsafe { std::str::from_utf8_unchecked(&self.encode) }
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}
