// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the sequential mutation methods for ease of maintenance.

use num_traits::ToBytes;

use crate::{Buffer, ByteOrder, Error, Result};

impl Buffer {
    /// Writes a single byte at the cursor, advancing the position by 1.
    ///
    /// Sequential writes are bounded by the capacity; if the advanced position passes
    /// the current limit, the limit is raised to match it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the cursor has reached the capacity, or
    /// [`Error::StaleHandle`] if the buffer has been released. The position is
    /// unchanged on failure.
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_slice(&[value])
    }

    /// Writes a slice of bytes at the cursor, advancing the position by its length.
    ///
    /// The transfer is all-or-nothing: either every byte of `src` is written, or the
    /// buffer is untouched. If the advanced position passes the current limit, the
    /// limit is raised to match it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if fewer than `src.len()` bytes of capacity
    /// remain past the cursor, or [`Error::StaleHandle`] if the buffer has been
    /// released.
    pub fn write_slice(&mut self, src: &[u8]) -> Result<()> {
        let Some(storage) = self.storage.as_mut() else {
            return Err(Error::StaleHandle);
        };

        let available = self.capacity - self.position;

        if src.len() > available {
            return Err(Error::OutOfRange {
                requested: src.len(),
                available,
            });
        }

        storage.as_mut_slice()[self.position..self.position + src.len()].copy_from_slice(src);
        self.position += src.len();

        // Keep the cursor invariant ordered when a write runs past the limit.
        if self.position > self.limit {
            self.limit = self.position;
        }

        Ok(())
    }

    /// Writes a number of type `T` encoded per the buffer's byte order.
    ///
    /// The operation is atomic relative to the cursor: on failure no byte is written
    /// and the position is unchanged - partial numeric writes cannot occur.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if fewer than `size_of::<T>()` bytes of capacity
    /// remain past the cursor, or [`Error::StaleHandle`] if the buffer has been
    /// released.
    pub fn write_num<T: ToBytes>(&mut self, value: T) -> Result<()> {
        let bytes = match self.order {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        };

        self.write_slice(bytes.as_ref())
    }

    /// Writes an `i8`.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_num(value)
    }

    /// Writes a `u16` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_num(value)
    }

    /// Writes an `i16` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_num(value)
    }

    /// Writes a `u32` encoded per the buffer's byte order.
    ///
    /// # Example
    ///
    /// ```
    /// use zonebuf::{AllocationZone, Buffer, ByteOrder};
    ///
    /// # fn main() -> zonebuf::Result<()> {
    /// let mut buf = Buffer::allocate(4, &AllocationZone::Heap, ByteOrder::LittleEndian);
    ///
    /// buf.write_u32(0x0102_0304)?;
    /// buf.reset_for_read();
    ///
    /// assert_eq!(buf.read_byte_array(4)?, vec![0x04, 0x03, 0x02, 0x01]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_num(value)
    }

    /// Writes an `i32` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_num(value)
    }

    /// Writes a `u64` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_num(value)
    }

    /// Writes an `i64` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_num(value)
    }

    /// Writes an `f32` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_num(value)
    }

    /// Writes an `f64` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`write_num()`][Self::write_num] does.
    #[inline]
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_num(value)
    }
}
