// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt;
use std::str;

use crate::{Error, Result};

/// Identifies a text encoding for [`read_string()`][crate::Buffer::read_string] and
/// [`write_string()`][crate::Buffer::write_string].
///
/// Charsets are stateless - a `Charset` value is just a name for a pair of conversion
/// rules between text and byte sequences.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Charset {
    /// UTF-8, the variable-width Unicode encoding.
    Utf8,

    /// US-ASCII; only byte values below `0x80` are valid.
    Ascii,

    /// ISO-8859-1, mapping each byte to the Unicode code point of the same value.
    Latin1,
}

impl Charset {
    /// Decodes a byte sequence into text under this charset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the bytes are not valid under this charset. Invalid
    /// input is never substituted with a replacement character.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => match str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_owned()),
                Err(_) => Err(Error::Decode { charset: self }),
            },
            Self::Ascii => {
                // ASCII is a strict subset of UTF-8, so the checked conversion cannot fail here.
                if bytes.is_ascii() {
                    match str::from_utf8(bytes) {
                        Ok(text) => Ok(text.to_owned()),
                        Err(_) => Err(Error::Decode { charset: self }),
                    }
                } else {
                    Err(Error::Decode { charset: self })
                }
            }
            // Every byte value is a valid ISO-8859-1 character.
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Encodes text into a byte sequence under this charset.
    ///
    /// UTF-8 encoding borrows the input without copying; the single-byte charsets
    /// produce a new byte sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the text contains a character that cannot be
    /// represented in this charset.
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>> {
        match self {
            Self::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            Self::Ascii => {
                if text.is_ascii() {
                    Ok(Cow::Borrowed(text.as_bytes()))
                } else {
                    Err(Error::Decode { charset: self })
                }
            }
            Self::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());

                for ch in text.chars() {
                    let code_point = u32::from(ch);

                    if code_point > 0xFF {
                        return Err(Error::Decode { charset: self });
                    }

                    #[expect(clippy::cast_possible_truncation, reason = "guarded by the range check above")]
                    bytes.push(code_point as u8);
                }

                Ok(Cow::Owned(bytes))
            }
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        })
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_round_trip() {
        let encoded = Charset::Utf8.encode("héllo").unwrap();
        assert_eq!(Charset::Utf8.decode(&encoded).unwrap(), "héllo");
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        let e = Charset::Utf8.decode(&[0xFF, 0xFE]).unwrap_err();
        assert_eq!(
            e,
            Error::Decode {
                charset: Charset::Utf8
            }
        );
    }

    #[test]
    fn ascii_accepts_seven_bit_bytes_only() {
        assert_eq!(Charset::Ascii.decode(b"hello").unwrap(), "hello");
        assert!(Charset::Ascii.decode(&[b'h', 0x80]).is_err());
    }

    #[test]
    fn ascii_rejects_non_ascii_text() {
        assert!(Charset::Ascii.encode("héllo").is_err());
    }

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        assert_eq!(Charset::Latin1.decode(&[0x68, 0xE9]).unwrap(), "hé");

        let encoded = Charset::Latin1.encode("hé").unwrap();
        assert_eq!(&*encoded, &[0x68, 0xE9]);
    }

    #[test]
    fn latin1_rejects_wide_characters() {
        assert!(Charset::Latin1.encode("日").is_err());
    }

    #[test]
    fn utf8_encode_borrows_without_copying() {
        let encoded = Charset::Utf8.encode("hello").unwrap();
        assert!(matches!(encoded, Cow::Borrowed(_)));
    }

    #[test]
    fn display_names() {
        assert_eq!(Charset::Utf8.to_string(), "UTF-8");
        assert_eq!(Charset::Ascii.to_string(), "US-ASCII");
        assert_eq!(Charset::Latin1.to_string(), "ISO-8859-1");
    }
}
