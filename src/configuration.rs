use crate::base58::Encoding;
use std::env;

#[derive(Debug, Clone)]
pub struct Configuration {
    default_encoding_name: String,
    default_encoding: &'static Encoding,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

impl Configuration {
    /// Reads the configuration from the process environment.
    pub fn new() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let default_encoding_name = var(&lookup, "BASE58_ENCODING", Some(String::from("bitcoin")))?;
        let default_encoding = Encoding::by_name(&default_encoding_name)
            .ok_or_else(|| format!("Invalid BASE58_ENCODING {}", default_encoding_name))?;
        Ok(Self {
            default_encoding_name,
            default_encoding,
        })
    }

    pub fn default_encoding_name(&self) -> &str {
        &self.default_encoding_name
    }

    pub fn default_encoding(&self) -> &'static Encoding {
        self.default_encoding
    }
}
