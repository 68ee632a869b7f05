// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::slice;

/// Alignment of native memory blocks.
///
/// One cache line, which also satisfies the alignment expectations of common
/// native I/O APIs that consume raw buffers.
const NATIVE_ALIGN: usize = 64;

/// An exclusively owned, cache-line-aligned region of native memory.
///
/// Backs the `Direct` and `SharedMemory` allocation zones. The region is
/// zero-initialized at allocation time and deallocated exactly once, either by
/// [`Buffer::release()`][crate::Buffer::release] or when the owning buffer is dropped.
#[derive(Debug)]
pub(crate) struct Block {
    ptr: NonNull<u8>,

    len: usize,
}

impl Block {
    /// Allocates a zero-initialized native block of `len` bytes.
    ///
    /// A zero-length block performs no allocation.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the addressable range; aborts via
    /// [`alloc::handle_alloc_error`] if the allocator cannot satisfy the request.
    pub(crate) fn new(len: usize) -> Self {
        if len == 0 {
            return Self {
                ptr: NonNull::dangling(),
                len: 0,
            };
        }

        let layout =
            Layout::from_size_align(len, NATIVE_ALIGN).expect("buffer size exceeds the addressable range");

        // SAFETY: The layout has non-zero size; we returned early for the zero case.
        let raw = unsafe { alloc::alloc_zeroed(layout) };

        let Some(ptr) = NonNull::new(raw) else {
            alloc::handle_alloc_error(layout)
        };

        Self { ptr, len }
    }

    /// The contents of the block as an immutable byte slice.
    pub(crate) fn as_slice(&self) -> &[u8] {
        if self.len == 0 {
            return &[];
        }

        // SAFETY: The pointer is valid for `len` bytes for the lifetime of the block,
        // the memory was zero-initialized at allocation time, and mutation requires
        // `&mut self`, so no mutable alias can exist while this borrow is live.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The contents of the block as a mutable byte slice.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        if self.len == 0 {
            return &mut [];
        }

        // SAFETY: The pointer is valid for `len` bytes for the lifetime of the block
        // and `&mut self` guarantees this is the only live reference to the contents.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }

        // The layout parameters cannot have changed since allocation - both are
        // immutable for the lifetime of the block.
        let layout = Layout::from_size_align(self.len, NATIVE_ALIGN)
            .expect("layout was validated at allocation time");

        // SAFETY: The pointer came from `alloc_zeroed` with this exact layout and
        // ownership is exclusive, so this is the first and only deallocation.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr(), layout);
        }
    }
}

// SAFETY: The block exclusively owns its allocation; moving it to another thread
// moves the sole handle to the memory.
unsafe impl Send for Block {}

// SAFETY: Mutation requires `&mut self`, so shared references only permit reads.
unsafe impl Sync for Block {}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    #[test]
    fn thread_safe_type() {
        assert_impl_all!(Block: Send, Sync);
    }

    #[test]
    fn allocation_is_zero_initialized() {
        let block = Block::new(32);

        assert_eq!(block.as_slice().len(), 32);
        assert!(block.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn contents_are_aligned() {
        let block = Block::new(16);

        assert_eq!(block.as_slice().as_ptr().addr() % NATIVE_ALIGN, 0);
    }

    #[test]
    fn mutation_is_visible_through_reads() {
        let mut block = Block::new(4);

        block.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);

        assert_eq!(block.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn zero_length_block_allocates_nothing() {
        let mut block = Block::new(0);

        assert!(block.as_slice().is_empty());
        assert!(block.as_mut_slice().is_empty());
    }
}
