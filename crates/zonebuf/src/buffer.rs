// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use tracing::{Level, event};

use crate::mem::{AllocationZone, Storage};
use crate::{ByteOrder, Error, Result};

/// A fixed-capacity byte buffer with cursor-based sequential access layered on
/// random-access indexing.
///
/// A buffer owns a contiguous storage region of fixed `capacity` and carries two
/// mutable cursors: `position`, the index of the next sequential operation, and
/// `limit`, the exclusive upper bound for valid read positions. The invariant
/// `0 <= position <= limit <= capacity` holds at all times.
///
/// Buffers are created write-ready (`limit == capacity`, `position == 0`) by
/// [`allocate()`][Self::allocate] or [`wrap()`][Self::wrap]. Sequential reads are
/// bounded by `limit`, sequential writes by `capacity`; when a write advances
/// `position` past the current `limit`, the limit is raised to match so the cursor
/// invariant is preserved.
///
/// # Ownership
///
/// A buffer has a single logical owner. Every cursor-mutating operation takes
/// `&mut self`, so concurrent mutation is unrepresentable without external
/// synchronization, matching the single-owner contract.
///
/// # Resource management
///
/// The backing storage is returned deterministically by [`release()`][Self::release]
/// or when the buffer is dropped, whichever comes first. Operations that would touch
/// storage after release fail with [`Error::StaleHandle`].
///
/// # Example
///
/// ```
/// use zonebuf::{AllocationZone, Buffer, ByteOrder};
///
/// # fn main() -> zonebuf::Result<()> {
/// let mut buf = Buffer::allocate(8, &AllocationZone::Heap, ByteOrder::BigEndian);
///
/// buf.write_u32(0x0102_0304)?;
/// buf.reset_for_read();
///
/// assert_eq!(buf.read_u32()?, 0x0102_0304);
/// # Ok(())
/// # }
/// ```
pub struct Buffer {
    /// `None` once the buffer has been released.
    pub(crate) storage: Option<Storage>,

    pub(crate) position: usize,

    pub(crate) limit: usize,

    pub(crate) capacity: usize,

    pub(crate) order: ByteOrder,
}

impl Buffer {
    /// Allocates a new zero-filled buffer backed per the chosen zone, with
    /// `capacity == limit == size` and `position == 0`.
    ///
    /// # Panics
    ///
    /// May panic if the operating system runs out of memory.
    #[must_use]
    pub fn allocate(size: usize, zone: &AllocationZone, order: ByteOrder) -> Self {
        let storage = match zone {
            AllocationZone::Heap => Storage::heap(size),
            // Both zones select a native region; they differ only in intent. A genuinely
            // inter-process mapping is the business of a Custom factory.
            AllocationZone::Direct | AllocationZone::SharedMemory => Storage::native(size),
            AllocationZone::Custom(factory) => return factory.allocate(size, order),
        };

        event!(
            Level::TRACE,
            message = "buffer allocated",
            capacity = size,
            zone = ?zone,
            order = ?order,
        );

        Self {
            storage: Some(storage),
            position: 0,
            limit: size,
            capacity: size,
            order,
        }
    }

    /// Adopts an existing byte sequence as a heap-backed buffer, without copying
    /// the bytes.
    ///
    /// The new buffer has `capacity == limit == bytes.len()` and `position == 0`,
    /// ready to re-read or overwrite the adopted contents.
    #[must_use]
    pub fn wrap(bytes: Vec<u8>, order: ByteOrder) -> Self {
        let capacity = bytes.len();

        Self {
            storage: Some(Storage::Heap(bytes.into_boxed_slice())),
            position: 0,
            limit: capacity,
            capacity,
            order,
        }
    }

    /// The fixed total byte size of the buffer's storage.
    ///
    /// Constant for the buffer's lifetime, including after release.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The exclusive upper bound on valid positions for the current read phase.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Sets the limit to `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `n` exceeds the capacity, or if the current
    /// position is greater than `n` - reposition explicitly before shrinking the
    /// limit below the cursor.
    pub fn set_limit(&mut self, n: usize) -> Result<()> {
        if n > self.capacity {
            return Err(Error::OutOfRange {
                requested: n,
                available: self.capacity,
            });
        }

        if self.position > n {
            return Err(Error::OutOfRange {
                requested: n,
                available: self.position,
            });
        }

        self.limit = n;
        Ok(())
    }

    /// The cursor index of the next sequential operation.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `n` exceeds the limit.
    pub fn set_position(&mut self, n: usize) -> Result<()> {
        if n > self.limit {
            return Err(Error::OutOfRange {
                requested: n,
                available: self.limit,
            });
        }

        self.position = n;
        Ok(())
    }

    /// Prepares the buffer to re-consume previously written bytes: `position`
    /// becomes 0, the limit is unchanged.
    ///
    /// Idempotent - calling this twice in a row is equivalent to calling it once.
    pub fn reset_for_read(&mut self) {
        self.position = 0;
    }

    /// Prepares the buffer for a fresh fill: `position` becomes 0 and the limit is
    /// restored to the capacity.
    pub fn reset_for_write(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
    }

    /// The number of unread bytes between the cursor and the limit.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Whether any unread bytes remain between the cursor and the limit.
    #[inline]
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// The byte order governing the buffer's multi-byte numeric operations.
    ///
    /// Fixed at construction for the buffer's lifetime.
    #[inline]
    #[must_use]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the byte at `index` without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the limit, or
    /// [`Error::StaleHandle`] if the buffer has been released.
    pub fn get(&self, index: usize) -> Result<u8> {
        let storage = self.storage.as_ref().ok_or(Error::StaleHandle)?;

        if index >= self.limit {
            return Err(Error::OutOfRange {
                requested: index,
                available: self.limit,
            });
        }

        Ok(storage.as_slice()[index])
    }

    /// Stores a byte at `index` without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity, or
    /// [`Error::StaleHandle`] if the buffer has been released.
    pub fn set(&mut self, index: usize, value: u8) -> Result<()> {
        let Some(storage) = self.storage.as_mut() else {
            return Err(Error::StaleHandle);
        };

        if index >= self.capacity {
            return Err(Error::OutOfRange {
                requested: index,
                available: self.capacity,
            });
        }

        storage.as_mut_slice()[index] = value;
        Ok(())
    }

    /// Derives an independently cursored buffer over the caller's unread span
    /// `[position, limit)`.
    ///
    /// The new buffer has its own cursor state: `position == 0` and
    /// `limit == capacity == remaining()`, with the same byte order. The bytes are
    /// copied - parent and slice never alias storage, so writes to one are never
    /// observed through the other.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleHandle`] if the buffer has been released.
    pub fn slice(&self) -> Result<Self> {
        let storage = self.storage.as_ref().ok_or(Error::StaleHandle)?;

        let span = &storage.as_slice()[self.position..self.limit];

        Ok(Self::wrap(span.to_vec(), self.order))
    }

    /// Copies the source buffer's unread span (`limit - position` bytes) into this
    /// buffer at the current cursor, advancing only this buffer's position.
    ///
    /// The source is read by index and deliberately *not* consumed - its position is
    /// unchanged afterwards. Taking the source by shared reference makes that
    /// asymmetry structural.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if this buffer lacks room for the span, or
    /// [`Error::StaleHandle`] if either buffer has been released. Nothing is
    /// transferred on failure.
    pub fn write_buffer(&mut self, source: &Self) -> Result<()> {
        let source_storage = source.storage.as_ref().ok_or(Error::StaleHandle)?;

        let span = &source_storage.as_slice()[source.position..source.limit];

        self.write_slice(span)
    }

    /// Releases the backing storage, returning it to the allocator deterministically.
    ///
    /// Idempotent - releasing an already released buffer does nothing. Subsequent
    /// storage-touching operations fail with [`Error::StaleHandle`]; the pure state
    /// accessors ([`capacity()`][Self::capacity], [`limit()`][Self::limit],
    /// [`position()`][Self::position]) stay readable as they never touch storage.
    ///
    /// Dropping the buffer releases implicitly; call this to return native or shared
    /// resources ahead of scope exit.
    pub fn release(&mut self) {
        if self.storage.take().is_some() {
            event!(Level::TRACE, message = "buffer released", capacity = self.capacity);
        }
    }

    /// Whether the backing storage has been released.
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.storage.is_none()
    }
}

impl fmt::Debug for Buffer {
    #[cfg_attr(test, mutants::skip)] // We have no API contract for this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("capacity", &self.capacity)
            .field("order", &self.order)
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}
