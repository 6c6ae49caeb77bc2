pub mod decode;
pub mod encode;

pub use crate::base_common::{alphabet, Alphabet};
pub use decode::{decode, decode_into, decode_uint};
pub use encode::{encode, encode_into, encode_uint};

pub const BITCOIN_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const RIPPLE_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";
pub const FLICKR_ALPHABET: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

const RADIX: u64 = 58;

/// Number of base-58 digits packed into one `u64` limb, and `RADIX.pow(CHUNK_DIGITS)`.
const CHUNK_DIGITS: usize = 10;
const CHUNK_RADIX: u64 = 430_804_206_899_405_824;

const LOG2_RADIX: f64 = 5.857980995127572;

/// A base-58 scheme: a 58-symbol alphabet plus an optional character standing for each leading zero byte.
///
/// Encodings are immutable. `with_padding` derives a new value and leaves the original untouched.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Encoding {
    alphabet: Alphabet<58>,
    padding: Option<u8>,
}

impl Encoding {
    /// Builds a padded encoding whose padding character is the alphabet's digit zero.
    pub const fn new(alphabet: &str) -> Result<Self, alphabet::Error> {
        match Alphabet::new(alphabet.as_bytes()) {
            Ok(alphabet) => Ok(Self {
                padding: Some(alphabet.encode(0)),
                alphabet,
            }),
            Err(error) => Err(error),
        }
    }

    /// Returns a copy of this encoding using `padding` for leading zero bytes, or no padding at all for `None`.
    ///
    /// The padding character may be digit zero or a character outside the alphabet. Any other digit would be
    /// mistaken for padding when decoding.
    pub const fn with_padding(&self, padding: Option<u8>) -> Result<Self, alphabet::Error> {
        if let Some(character) = padding {
            if character >= 128 {
                return Err(alphabet::Error::NonAsciiPadding { character });
            }
            if let Some(digit) = self.alphabet.value(character) {
                if digit != 0 {
                    return Err(alphabet::Error::PaddingIsDigit {
                        character: character as char,
                        digit: digit as usize,
                    });
                }
            }
        }
        Ok(Self {
            alphabet: self.alphabet,
            padding,
        })
    }

    pub const fn alphabet(&self) -> &Alphabet<58> {
        &self.alphabet
    }

    pub const fn padding(&self) -> Option<u8> {
        self.padding
    }

    pub fn by_name(name: &str) -> Option<&'static Encoding> {
        ENCODINGS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, encoding)| *encoding)
    }

    fn padding_len(&self, input: &[u8]) -> usize {
        match self.padding {
            Some(padding) => input.iter().take_while(|&&character| character == padding).count(),
            None => 0,
        }
    }
}

const fn predefined(alphabet: &str, padded: bool) -> Encoding {
    let encoding = match Encoding::new(alphabet) {
        Ok(encoding) => encoding,
        Err(_) => panic!("Could not build alphabet"),
    };
    if padded {
        return encoding;
    }
    match encoding.with_padding(None) {
        Ok(encoding) => encoding,
        Err(_) => panic!("Could not remove padding"),
    }
}

/// Bitcoin alphabet, one `1` per leading zero byte.
pub static BITCOIN: Encoding = predefined(BITCOIN_ALPHABET, true);

/// Bitcoin alphabet without padding.
pub static RAW_BITCOIN: Encoding = predefined(BITCOIN_ALPHABET, false);

/// Ripple alphabet without padding.
pub static RIPPLE: Encoding = predefined(RIPPLE_ALPHABET, false);

/// Flickr alphabet without padding.
pub static FLICKR: Encoding = predefined(FLICKR_ALPHABET, false);

pub static ENCODINGS: [(&str, &Encoding); 4] = [
    ("bitcoin", &BITCOIN),
    ("raw-bitcoin", &RAW_BITCOIN),
    ("ripple", &RIPPLE),
    ("flickr", &FLICKR),
];

/// Upper bound on the encoded length of `n` input bytes, padding included.
pub fn encoded_len(n: usize) -> usize {
    (n as f64 * 8.0 / LOG2_RADIX).ceil() as usize
}

/// Estimated number of bytes carried by `n` base-58 digits.
///
/// Padded zero bytes decode one per character, so this underestimates inputs with a long pad prefix.
pub fn decoded_len(n: usize) -> usize {
    (n as f64 * LOG2_RADIX / 8.0).floor() as usize
}

/// Exact number of digits `encode_uint(value)` produces.
pub const fn encoded_uint_len(mut value: u64) -> usize {
    let mut len = 0;
    while value > 0 {
        value /= RADIX;
        len += 1;
    }
    len
}
