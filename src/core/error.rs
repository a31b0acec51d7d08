/*!
Error handling for the cipher suite.

Every error here is caller-recoverable. Ciphers validate their key and
input before doing any work, so an error never comes with a partial result.
*/

use thiserror::Error;

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cipher operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key cannot be used with the selected cipher
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Digraph ciphertext does not split into whole pairs
    #[error("Malformed ciphertext: expected an even number of letters, found {letters}")]
    MalformedCiphertext {
        /// Number of letters left after sanitizing the ciphertext
        letters: usize,
    },

    /// No cipher is registered under the requested name
    #[error("Unknown cipher algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The configuration combines options that do not apply together
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error was caused by the key rather than the text
    pub fn is_key_error(&self) -> bool {
        matches!(self, Error::InvalidKey(_))
    }
}

/// Convert a string to an Error::InvalidKey
pub fn invalid_key<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::InvalidKey(msg.into()))
}

/// Convert a string to an Error::InvalidConfig
pub fn config_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::InvalidConfig(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = Error::InvalidKey("Key for Caesar Cipher must be an integer".into());
        assert_eq!(
            err.to_string(),
            "Invalid key: Key for Caesar Cipher must be an integer"
        );
    }

    #[test]
    fn test_display_malformed_ciphertext() {
        let err = Error::MalformedCiphertext { letters: 7 };
        assert_eq!(
            err.to_string(),
            "Malformed ciphertext: expected an even number of letters, found 7"
        );
    }

    #[test]
    fn test_helpers() {
        let key: Result<()> = invalid_key("empty");
        assert_eq!(key, Err(Error::InvalidKey("empty".into())));
        assert!(key.unwrap_err().is_key_error());

        let config: Result<()> = config_err("nope");
        assert!(matches!(config, Err(Error::InvalidConfig(_))));
    }
}
