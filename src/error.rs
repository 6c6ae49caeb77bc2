use std::{error, fmt};

/// A message reported to the command line user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<crate::base58::decode::Error> for Error {
    fn from(error: crate::base58::decode::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<crate::hex::Error> for Error {
    fn from(error: crate::hex::Error) -> Self {
        Self::new(error.to_string())
    }
}
