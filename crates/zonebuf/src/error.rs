// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

use crate::Charset;

/// Any error that may arise from operations on a [`Buffer`][crate::Buffer].
///
/// Every operation fails fast: an error is reported to the immediate caller before any
/// state is mutated. There is no implicit recovery, retry, clamping, or truncation - a
/// failed operation leaves the buffer exactly as it was.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An index, length, position, or limit violated the bounds of the buffer.
    ///
    /// `requested` is the offending index or byte count; `available` is the bound it
    /// violated (the exclusive upper bound for indexes, the remaining byte count for
    /// transfers).
    #[error("out of range: requested {requested}, available {available}")]
    OutOfRange {
        /// The offending index or byte count.
        requested: usize,

        /// The bound that was violated.
        available: usize,
    },

    /// Bytes could not be decoded under the requested charset, or text could not be
    /// represented in it.
    ///
    /// Invalid input is always surfaced as an error; it is never silently substituted
    /// with a replacement character.
    #[error("bytes are not valid {charset} data")]
    Decode {
        /// The charset the conversion was attempted under.
        charset: Charset,
    },

    /// The buffer's backing storage has already been released.
    ///
    /// Once [`release()`][crate::Buffer::release] has run, operations that would touch
    /// the storage fail with this error rather than touching freed memory.
    #[error("buffer storage has already been released")]
    StaleHandle,
}

/// A specialized `Result` for buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    #[test]
    fn thread_safe_type() {
        assert_impl_all!(Error: Send, Sync);
    }

    #[test]
    fn display_output_names_the_bounds() {
        let e = Error::OutOfRange {
            requested: 12,
            available: 4,
        };

        assert_eq!(e.to_string(), "out of range: requested 12, available 4");
    }

    #[test]
    fn display_output_names_the_charset() {
        let e = Error::Decode {
            charset: Charset::Utf8,
        };

        assert_eq!(e.to_string(), "bytes are not valid UTF-8 data");
    }
}
