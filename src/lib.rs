//! Base-58 codec over configurable alphabets, with a command line front end over the predefined encodings.

pub mod base58;
pub mod base_common;
pub mod chronometer;
pub mod cli;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;

pub use self::{
    base58::{Encoding, BITCOIN, FLICKR, RAW_BITCOIN, RIPPLE},
    chronometer::Chronometer,
    configuration::Configuration,
    error::Error,
    logger::Logger,
};
