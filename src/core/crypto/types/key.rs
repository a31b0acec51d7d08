/*!
Cipher keys.

The presentation layer hands over whatever the user typed, or a number.
Each cipher decides how to interpret it.
*/

use std::borrow::Cow;
use std::fmt;

use crate::core::error::{Error, Result};

/// Key supplied to a cipher: free text or an integer
///
/// Integers up to 32 bits convert with `From`. Wider integers go through
/// `TryFrom` and fail with `InvalidKey` outside the `i64` range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CipherKey {
    /// Key as typed
    Text(String),
    /// Numeric key
    Number(i64),
}

impl CipherKey {
    /// Key as text; numbers are rendered in decimal
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CipherKey::Text(text) => Cow::Borrowed(text.as_str()),
            CipherKey::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Check if the key is empty text
    pub fn is_empty(&self) -> bool {
        matches!(self, CipherKey::Text(text) if text.is_empty())
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Text(text) => f.write_str(text),
            CipherKey::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CipherKey {
    fn from(key: &str) -> Self {
        CipherKey::Text(key.to_string())
    }
}

impl From<String> for CipherKey {
    fn from(key: String) -> Self {
        CipherKey::Text(key)
    }
}

impl From<&String> for CipherKey {
    fn from(key: &String) -> Self {
        CipherKey::Text(key.clone())
    }
}

impl From<char> for CipherKey {
    fn from(key: char) -> Self {
        CipherKey::Text(key.to_string())
    }
}

impl From<&CipherKey> for CipherKey {
    fn from(key: &CipherKey) -> Self {
        key.clone()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CipherKey {
                fn from(key: $t) -> Self {
                    CipherKey::Number(i64::from(key))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers become keys only when they fit in an i64
macro_rules! impl_try_from_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for CipherKey {
                type Error = Error;

                fn try_from(key: $t) -> Result<Self> {
                    i64::try_from(key)
                        .map(CipherKey::Number)
                        .map_err(|_| {
                            Error::InvalidKey(format!("Key {} does not fit in an i64", key))
                        })
                }
            }
        )*
    };
}

impl_try_from_integer!(u64, usize, i128, u128, isize);
