// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Fixed-capacity byte buffers with cursor-based access and pluggable allocation zones.
//!
//! A [`Buffer`] is a contiguous byte region of fixed capacity with two cursors layered
//! on top: `position`, where the next sequential operation happens, and `limit`, the
//! exclusive bound for valid reads. The invariant `0 <= position <= limit <= capacity`
//! holds at all times, and every operation is bounds-checked before any byte moves.
//!
//! Higher-level codec and protocol code builds wire formats on this contract: the
//! buffer itself defines no format, but its typed numeric operations honor a per-buffer
//! [`ByteOrder`] so real formats can be composed from them.
//!
//! # Producing and consuming bytes
//!
//! Buffers are created write-ready. Fill one with the `write_*` family, call
//! [`reset_for_read()`][Buffer::reset_for_read] to rewind the cursor, and consume the
//! contents with the matching `read_*` family:
//!
//! ```
//! use zonebuf::{AllocationZone, Buffer, ByteOrder, Charset};
//!
//! # fn main() -> zonebuf::Result<()> {
//! let mut buf = Buffer::allocate(32, &AllocationZone::Heap, ByteOrder::BigEndian);
//!
//! buf.write_u16(0xCAFE)?;
//! buf.write_string("hello", Charset::Utf8)?;
//!
//! buf.reset_for_read();
//!
//! assert_eq!(buf.read_u16()?, 0xCAFE);
//! assert_eq!(buf.read_string(5, Charset::Utf8)?, "hello");
//! # Ok(())
//! # }
//! ```
//!
//! An existing byte sequence can be adopted without copying via
//! [`Buffer::wrap()`], and the unread span of a buffer can be carved into an
//! independently cursored buffer via [`Buffer::slice()`].
//!
//! # Allocation zones
//!
//! The backing storage strategy is selected at construction by an
//! [`AllocationZone`]: general heap memory, a native-interop-friendly aligned
//! region, a region suitable for cross-thread sharing, or a caller-supplied
//! [`BufferFactory`]. There is one buffer type regardless of zone - only
//! construction-time behavior differs.
//!
//! ```
//! use zonebuf::{AllocationZone, Buffer, ByteOrder};
//!
//! let buf = Buffer::allocate(4096, &AllocationZone::Direct, ByteOrder::LittleEndian);
//!
//! assert_eq!(buf.capacity(), 4096);
//! ```
//!
//! # Ownership and resource management
//!
//! A buffer has a single logical owner; every cursor-mutating call takes `&mut self`,
//! so the contract's single-owner model is enforced by the borrow checker rather than
//! by locks. Backing storage is returned deterministically by
//! [`Buffer::release()`] or on drop, and storage-touching operations on a released
//! buffer fail with [`Error::StaleHandle`] instead of touching freed memory.
//!
//! # Failure model
//!
//! Every operation completes or fails immediately and deterministically: out-of-bounds
//! requests fail with [`Error::OutOfRange`] before any byte is transferred, text that
//! does not fit a charset fails with [`Error::Decode`], and no operation ever clamps,
//! truncates, or retries.

mod buffer;
mod charset;
mod error;
mod order;
mod read;
mod text;
mod write;

pub mod mem;

pub use buffer::Buffer;
pub use charset::Charset;
pub use error::{Error, Result};
pub use mem::{AllocationZone, BufferFactory, CallbackFactory};
pub use order::ByteOrder;

#[cfg(test)]
mod testing;
