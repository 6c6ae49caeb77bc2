use crate::{
    base58::{Encoding, ENCODINGS},
    hex, Configuration, Error,
};

pub const USAGE: &str = "Usage: base58-codec [--encoding bitcoin|raw-bitcoin|ripple|flickr] COMMAND [ARGUMENT]

Commands:
    encodings           list the predefined encodings
    encode HEX          encode hex bytes
    decode TEXT         decode to hex bytes
    encode-uint VALUE   encode a decimal unsigned 64-bit integer
    decode-uint TEXT    decode to a decimal unsigned 64-bit integer";

#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    Encodings,
    Encode(Vec<u8>),
    Decode(String),
    EncodeUint(u64),
    DecodeUint(String),
}

#[derive(Debug, Eq, PartialEq)]
pub struct Invocation {
    pub encoding: &'static Encoding,
    pub command: Command,
}

fn resolve_encoding(name: &str) -> Result<&'static Encoding, Error> {
    Encoding::by_name(name).ok_or_else(|| Error::new(format!(r#"Unknown encoding "{}""#, name)))
}

/// Parses the arguments following the program name.
pub fn parse(arguments: &[String], configuration: &Configuration) -> Result<Invocation, Error> {
    let (encoding, rest) = match arguments {
        [flag, name, rest @ ..] if flag == "--encoding" => (resolve_encoding(name)?, rest),
        rest => (configuration.default_encoding(), rest),
    };
    let command = match rest {
        [command] if command == "encodings" => Command::Encodings,
        [command, argument] => match command.as_str() {
            "encode" => Command::Encode(hex::decode(argument)?),
            "decode" => Command::Decode(argument.clone()),
            "encode-uint" => Command::EncodeUint(
                argument
                    .parse()
                    .map_err(|_| Error::new(format!(r#"Invalid unsigned integer "{}""#, argument)))?,
            ),
            "decode-uint" => Command::DecodeUint(argument.clone()),
            _ => return Err(Error::new(USAGE)),
        },
        _ => return Err(Error::new(USAGE)),
    };
    Ok(Invocation { encoding, command })
}

pub fn run(invocation: &Invocation) -> Result<String, Error> {
    let encoding = invocation.encoding;
    let output = match &invocation.command {
        Command::Encodings => ENCODINGS
            .iter()
            .map(|(name, encoding)| {
                let padding = encoding.padding().map(char::from).unwrap_or('-');
                format!("{}\t{}\t{}", name, encoding.alphabet().as_str(), padding)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Encode(input) => encoding.encode(input),
        Command::Decode(text) => hex::encode(encoding.decode(text)?),
        Command::EncodeUint(value) => encoding.encode_uint(*value),
        Command::DecodeUint(text) => encoding.decode_uint(text)?.to_string(),
    };
    Ok(output)
}
