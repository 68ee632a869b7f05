// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// The order in which the bytes of a multi-byte numeric value are laid out in memory.
///
/// A buffer's byte order is fixed at construction and governs every typed numeric
/// read and write for the buffer's lifetime.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    /// The most significant byte is placed first.
    ///
    /// This is the conventional network byte order.
    #[default]
    BigEndian,

    /// The least significant byte is placed first.
    LittleEndian,
}
