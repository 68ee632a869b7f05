// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the sequential consumption methods for ease of maintenance.

use num_traits::FromBytes;

use crate::{Buffer, ByteOrder, Error, Result};

impl Buffer {
    /// Consumes a single byte at the cursor, advancing the position by 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the cursor has reached the limit, or
    /// [`Error::StaleHandle`] if the buffer has been released. The position is
    /// unchanged on failure.
    pub fn read_byte(&mut self) -> Result<u8> {
        let storage = self.storage.as_ref().ok_or(Error::StaleHandle)?;

        if self.position >= self.limit {
            return Err(Error::OutOfRange {
                requested: 1,
                available: 0,
            });
        }

        let byte = storage.as_slice()[self.position];
        self.position += 1;
        Ok(byte)
    }

    /// Consumes exactly `n` bytes at the cursor, advancing the position by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if fewer than `n` unread bytes remain, or
    /// [`Error::StaleHandle`] if the buffer has been released. Nothing is consumed
    /// on failure.
    pub fn read_byte_array(&mut self, n: usize) -> Result<Vec<u8>> {
        let storage = self.storage.as_ref().ok_or(Error::StaleHandle)?;

        let available = self.limit - self.position;

        if n > available {
            return Err(Error::OutOfRange {
                requested: n,
                available,
            });
        }

        let bytes = storage.as_slice()[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(bytes)
    }

    /// Consumes a number of type `T` encoded per the buffer's byte order.
    ///
    /// The operation is atomic relative to the cursor: on failure no byte is
    /// consumed and the position is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if fewer than `size_of::<T>()` unread bytes
    /// remain, or [`Error::StaleHandle`] if the buffer has been released.
    pub fn read_num<T: FromBytes>(&mut self) -> Result<T>
    where
        T::Bytes: Sized,
    {
        let size = size_of::<T>();
        let storage = self.storage.as_ref().ok_or(Error::StaleHandle)?;

        let available = self.limit - self.position;

        if size > available {
            return Err(Error::OutOfRange {
                requested: size,
                available,
            });
        }

        let bytes = &storage.as_slice()[self.position..self.position + size];
        let bytes_array_ptr = bytes.as_ptr().cast::<T::Bytes>();

        // SAFETY: The slice holds exactly `size_of::<T>()` bytes and the target type
        // is an array of bytes, so it has no alignment requirements. The pointer came
        // from a reference and is therefore valid for reads.
        let bytes_array = unsafe { &*bytes_array_ptr };

        let value = match self.order {
            ByteOrder::BigEndian => T::from_be_bytes(bytes_array),
            ByteOrder::LittleEndian => T::from_le_bytes(bytes_array),
        };

        self.position += size;
        Ok(value)
    }

    /// Consumes an `i8`.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_num()
    }

    /// Consumes a `u16` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_num()
    }

    /// Consumes an `i16` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_num()
    }

    /// Consumes a `u32` encoded per the buffer's byte order.
    ///
    /// # Example
    ///
    /// ```
    /// use zonebuf::{Buffer, ByteOrder};
    ///
    /// # fn main() -> zonebuf::Result<()> {
    /// let mut buf = Buffer::wrap(vec![0x01, 0x02, 0x03, 0x04], ByteOrder::BigEndian);
    ///
    /// assert_eq!(buf.read_u32()?, 0x0102_0304);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_num()
    }

    /// Consumes an `i32` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_num()
    }

    /// Consumes a `u64` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_num()
    }

    /// Consumes an `i64` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_num()
    }

    /// Consumes an `f32` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_num()
    }

    /// Consumes an `f64` encoded per the buffer's byte order.
    ///
    /// # Errors
    ///
    /// Fails as [`read_num()`][Self::read_num] does.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_num()
    }
}
