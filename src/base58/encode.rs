use super::{encoded_len, encoded_uint_len, Encoding, BITCOIN, CHUNK_DIGITS, CHUNK_RADIX, RADIX};
use num_bigint::BigUint;
use num_integer::Integer;
use std::{error, fmt, iter};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

fn into_string(output: Vec<u8>) -> String {
    // SAFETY: alphabets and padding characters are ascii.
    unsafe { String::from_utf8_unchecked(output) }
}

impl Encoding {
    // Digits are pushed least significant first; callers reverse.
    fn push_uint(&self, mut value: u64, output: &mut Vec<u8>) {
        while value > 0 {
            output.push(self.alphabet.encode((value % RADIX) as usize));
            value /= RADIX;
        }
    }

    fn push_big_uint(&self, value: &BigUint, output: &mut Vec<u8>) {
        let radix = BigUint::from(CHUNK_RADIX);
        let mut value = value.clone();
        while value.bits() > 64 {
            let (quotient, remainder) = value.div_rem(&radix);
            let mut chunk = remainder.iter_u64_digits().next().unwrap_or(0);
            // more significant digits follow, so inner zeros are written out
            for _ in 0..CHUNK_DIGITS {
                output.push(self.alphabet.encode((chunk % RADIX) as usize));
                chunk /= RADIX;
            }
            value = quotient;
        }
        self.push_uint(value.iter_u64_digits().next().unwrap_or(0), output);
    }

    fn encode_reversed(&self, input: &[u8]) -> Vec<u8> {
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let mut output = Vec::with_capacity(encoded_len(input.len()));
        self.push_big_uint(&BigUint::from_bytes_be(&input[zeros..]), &mut output);
        if let Some(padding) = self.padding {
            output.extend(iter::repeat(padding).take(zeros));
        }
        output
    }

    /// Encodes `input`, writing one padding character per leading zero byte when padding is enabled.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = self.encode_reversed(input.as_ref());
        output.reverse();
        into_string(output)
    }

    /// Writes the encoding of `input` to the start of `output` and returns its length.
    ///
    /// A buffer of `encoded_len(input.len())` bytes is always large enough.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let digits = self.encode_reversed(input.as_ref());
        let output = output.as_mut().get_mut(..digits.len()).ok_or(Error::BufferTooSmall)?;
        for (value, &digit) in output.iter_mut().zip(digits.iter().rev()) {
            *value = digit;
        }
        Ok(digits.len())
    }

    /// Encodes `value` without going through a big integer. Padding never applies.
    pub fn encode_uint(&self, value: u64) -> String {
        let mut output = Vec::with_capacity(encoded_uint_len(value));
        self.push_uint(value, &mut output);
        output.reverse();
        into_string(output)
    }

    /// Encodes the magnitude of `value`. Padding never applies.
    pub fn encode_big_uint(&self, value: &BigUint) -> String {
        let mut output = Vec::with_capacity(encoded_len(((value.bits() + 7) / 8) as usize));
        self.push_big_uint(value, &mut output);
        output.reverse();
        into_string(output)
    }
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    BITCOIN.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    BITCOIN.encode_into(input, output)
}

pub fn encode_uint(value: u64) -> String {
    BITCOIN.encode_uint(value)
}

#[cfg(test)]
mod tests {
    use super::super::{encoded_len, Encoding, BITCOIN, FLICKR, RAW_BITCOIN, RIPPLE};
    use super::Error;
    use num_bigint::BigUint;

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode("a"), "2g");
        assert_eq!(super::encode("bbb"), "a3gV");
        assert_eq!(super::encode("ccc"), "aPEr");
        assert_eq!(super::encode("this is a test"), "jo91waLQA1NNeBmZKUF");
        assert_eq!(super::encode("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            super::encode([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(super::encode([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(
            super::encode([0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
            "EJDM8drfXA6uyA"
        );
        assert_eq!(super::encode([0x10, 0xc8, 0x51, 0x1e,]), "Rt5zm");
        assert_eq!(super::encode([0xff; 32]), "JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG");
        assert_eq!(
            super::encode([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,]),
            "1111111111"
        );
    }

    #[test]
    fn padding() {
        assert_eq!(BITCOIN.encode([0x00, 0x00, 0x01]), "112");
        assert_eq!(RAW_BITCOIN.encode([0x00, 0x00, 0x01]), "2");
        assert_eq!(RAW_BITCOIN.encode([0x00, 0x00]), "");
        assert_eq!(BITCOIN.encode([0x00, 0xff]), "15Q");
        assert_eq!(RIPPLE.encode([0x00, 0xff]), "nQ");

        let dotted = RAW_BITCOIN.with_padding(Some(b'.')).unwrap();
        assert_eq!(dotted.encode([0x00, 0x00, 0x00, 0x01]), "...2");
        assert_eq!(dotted.encode([0x00]), ".");
    }

    #[test]
    fn exact_length() {
        let inputs: [&[u8]; 6] = [b"", b"\x00", b"\x00\x00\x00\xff\xff", b"this is a test", &[0xff; 32], &[0x00; 7]];
        for input in inputs {
            let zeros = input.iter().take_while(|&&value| value == 0).count();
            let digits = RAW_BITCOIN.encode(input).len();
            assert_eq!(RAW_BITCOIN.encode_big_uint(&BigUint::from_bytes_be(input)).len(), digits);
            assert_eq!(BITCOIN.encode(input).len(), zeros + digits);
            assert!(BITCOIN.encode(input).len() <= encoded_len(input.len()));
        }
    }

    fn translate(text: &str, from: &Encoding, to: &Encoding) -> String {
        text.bytes()
            .map(|c| to.alphabet().encode(from.alphabet().value(c).unwrap() as usize) as char)
            .collect()
    }

    #[test]
    fn flickr_translates_digits() {
        let inputs: [&[u8]; 3] = [b"Hello World", b"this is a test", &[0xff; 32]];
        for input in inputs {
            assert_eq!(FLICKR.encode(input), translate(&RAW_BITCOIN.encode(input), &RAW_BITCOIN, &FLICKR));
        }
        assert_eq!(FLICKR.encode("Hello World"), "iXf12sRWto45bmC");
        assert_eq!(translate("J", &RAW_BITCOIN, &FLICKR), "i");
    }

    #[test]
    fn ripple_translates_digits() {
        let inputs: [&[u8]; 3] = [b"Hello World", b"this is a test", &[0xff; 32]];
        for input in inputs {
            assert_eq!(RIPPLE.encode(input), translate(&RAW_BITCOIN.encode(input), &RAW_BITCOIN, &RIPPLE));
        }
        assert_eq!(RIPPLE.encode("Hello World"), "JxErpTiA7PhnBMd");
    }

    #[test]
    fn encode_uint() {
        assert_eq!(super::encode_uint(0), "");
        assert_eq!(super::encode_uint(57), "z");
        assert_eq!(super::encode_uint(58), "21");
        assert_eq!(super::encode_uint(3364), "211");
        assert_eq!(super::encode_uint(1 << 32), "7YXq9H");
        assert_eq!(super::encode_uint(u64::MAX), "jpXCZedGfVQ");
    }

    #[test]
    fn encode_uint_matches_big_uint() {
        let values = [0, 1, 57, 58, 3364, 1 << 32, 0x00ff_ffff_ffff_ffff, u64::MAX - 1, u64::MAX];
        for value in values {
            assert_eq!(BITCOIN.encode_uint(value), BITCOIN.encode_big_uint(&BigUint::from(value)));
            assert_eq!(BITCOIN.encode_uint(value), RAW_BITCOIN.encode(value.to_be_bytes()));
        }
    }

    #[test]
    fn encode_big_uint() {
        assert_eq!(BITCOIN.encode_big_uint(&BigUint::from(0u8)), "");
        assert_eq!(BITCOIN.encode_big_uint(&(BigUint::from(u64::MAX) + 1u8)), "jpXCZedGfVR");
        assert_eq!(
            BITCOIN.encode_big_uint(&BigUint::from_bytes_be(b"this is a test")),
            "jo91waLQA1NNeBmZKUF"
        );
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 20];
        assert_eq!(super::encode_into("this is a test", &mut output), Ok(19));
        assert_eq!(&output[..19], b"jo91waLQA1NNeBmZKUF");

        let mut output = [0u8; 18];
        assert_eq!(super::encode_into("this is a test", &mut output), Err(Error::BufferTooSmall));

        let mut output = vec![0u8; encoded_len(3)];
        assert_eq!(super::encode_into([0x00, 0x00, 0x00], &mut output), Ok(3));
        assert_eq!(&output[..3], b"111");
    }
}
