// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Text conversion layered on the sequential cursor operations.

use crate::{Buffer, Charset, Error, Result};

impl Buffer {
    /// Consumes exactly `length` bytes at the cursor and decodes them under `charset`.
    ///
    /// Decoding happens before the cursor moves, so a decode failure leaves the
    /// position unchanged just like a bounds failure does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if fewer than `length` unread bytes remain,
    /// [`Error::Decode`] if the bytes are invalid under `charset`, or
    /// [`Error::StaleHandle`] if the buffer has been released.
    pub fn read_string(&mut self, length: usize, charset: Charset) -> Result<String> {
        let storage = self.storage.as_ref().ok_or(Error::StaleHandle)?;

        let available = self.limit - self.position;

        if length > available {
            return Err(Error::OutOfRange {
                requested: length,
                available,
            });
        }

        let text = charset.decode(&storage.as_slice()[self.position..self.position + length])?;

        self.position += length;
        Ok(text)
    }

    /// Encodes `text` under `charset` and writes the bytes at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the text cannot be represented in `charset`,
    /// and otherwise fails exactly as [`write_slice()`][Self::write_slice] would:
    /// [`Error::OutOfRange`] without room for the encoded bytes, or
    /// [`Error::StaleHandle`] after release. Nothing is written on failure.
    pub fn write_string(&mut self, text: &str, charset: Charset) -> Result<()> {
        let bytes = charset.encode(text)?;

        self.write_slice(&bytes)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use crate::mem::AllocationZone;
    use crate::{Buffer, ByteOrder, Charset, Error};

    #[test]
    fn utf8_round_trip() {
        let mut buf = Buffer::allocate(16, &AllocationZone::Heap, ByteOrder::BigEndian);

        buf.write_string("hello", Charset::Utf8).unwrap();
        buf.reset_for_read();

        assert_eq!(buf.read_string(5, Charset::Utf8).unwrap(), "hello");
    }

    #[test]
    fn multi_byte_utf8_round_trip() {
        let mut buf = Buffer::allocate(16, &AllocationZone::Heap, ByteOrder::BigEndian);

        // "héllo" encodes to six bytes: the é takes two.
        buf.write_string("héllo", Charset::Utf8).unwrap();
        assert_eq!(buf.position(), 6);

        buf.reset_for_read();
        assert_eq!(buf.read_string(6, Charset::Utf8).unwrap(), "héllo");
    }

    #[test]
    fn latin1_round_trip() {
        let mut buf = Buffer::allocate(8, &AllocationZone::Heap, ByteOrder::BigEndian);

        buf.write_string("héllo", Charset::Latin1).unwrap();
        assert_eq!(buf.position(), 5);

        buf.reset_for_read();
        assert_eq!(buf.read_string(5, Charset::Latin1).unwrap(), "héllo");
    }

    #[test]
    fn decode_failure_leaves_the_cursor_in_place() {
        let mut buf = Buffer::wrap(vec![0xFF, 0xFE, 0xFD], ByteOrder::BigEndian);

        let e = buf.read_string(3, Charset::Utf8).unwrap_err();

        assert_eq!(
            e,
            Error::Decode {
                charset: Charset::Utf8
            }
        );
        assert_eq!(buf.position(), 0);

        // The same bytes decode fine under a charset that accepts them.
        assert_eq!(buf.read_string(3, Charset::Latin1).unwrap(), "ÿþý");
    }

    #[test]
    fn read_string_bounds_failure_matches_read_byte_array() {
        let mut buf = Buffer::wrap(vec![b'h', b'i'], ByteOrder::BigEndian);

        let e = buf.read_string(3, Charset::Utf8).unwrap_err();

        assert_eq!(
            e,
            Error::OutOfRange {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn write_string_without_room_writes_nothing() {
        let mut buf = Buffer::allocate(3, &AllocationZone::Heap, ByteOrder::BigEndian);

        assert!(buf.write_string("hello", Charset::Utf8).is_err());
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn write_string_with_unrepresentable_text_is_error() {
        let mut buf = Buffer::allocate(8, &AllocationZone::Heap, ByteOrder::BigEndian);

        assert!(buf.write_string("héllo", Charset::Ascii).is_err());
        assert_eq!(buf.position(), 0);
    }
}
