// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::mem::Block;

/// The backing-store strategy behind a [`Buffer`][crate::Buffer].
///
/// There is one buffer type with interchangeable storage backends selected at
/// construction time, not one buffer type per backend. The cursor code is
/// backend-agnostic: every backend presents the same contiguous byte-slice surface.
#[derive(Debug)]
pub(crate) enum Storage {
    /// General managed memory, also used when adopting an existing byte sequence
    /// via [`Buffer::wrap()`][crate::Buffer::wrap].
    Heap(Box<[u8]>),

    /// A cache-line-aligned native region, friendly to native-interop callers.
    Native(Block),
}

impl Storage {
    /// Allocates zero-filled heap storage of `len` bytes.
    pub(crate) fn heap(len: usize) -> Self {
        Self::Heap(vec![0; len].into_boxed_slice())
    }

    /// Allocates a zero-filled native block of `len` bytes.
    pub(crate) fn native(len: usize) -> Self {
        Self::Native(Block::new(len))
    }

    /// The contents as an immutable byte slice.
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Self::Heap(bytes) => bytes,
            Self::Native(block) => block.as_slice(),
        }
    }

    /// The contents as a mutable byte slice.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Heap(bytes) => bytes,
            Self::Native(block) => block.as_mut_slice(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_storage_is_zero_filled() {
        let storage = Storage::heap(8);

        assert_eq!(storage.as_slice(), &[0; 8]);
    }

    #[test]
    fn native_storage_is_zero_filled() {
        let storage = Storage::native(8);

        assert_eq!(storage.as_slice(), &[0; 8]);
    }

    #[test]
    fn backends_present_the_same_surface() {
        for mut storage in [Storage::heap(4), Storage::native(4)] {
            storage.as_mut_slice().copy_from_slice(&[9, 8, 7, 6]);

            assert_eq!(storage.as_slice(), &[9, 8, 7, 6]);
        }
    }
}
