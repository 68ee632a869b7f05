// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::{Buffer, ByteOrder};

/// The policy that selects the backing memory strategy for a new buffer.
///
/// Zones are stateless and act purely as buffer factories - only construction-time
/// behavior differs between them. Pass a zone to
/// [`Buffer::allocate()`][crate::Buffer::allocate] to obtain a buffer backed per the
/// chosen strategy.
#[derive(Clone, Default, derive_more::Debug)]
pub enum AllocationZone {
    /// General managed memory.
    #[default]
    Heap,

    /// A native memory region suitable for handing to native-interop APIs.
    Direct,

    /// A native memory region suitable for sharing across threads.
    ///
    /// The buffer itself remains single-owner; this zone only selects a backing
    /// region that is safe to move between threads. A genuinely inter-process
    /// mapping belongs to a [`Custom`][Self::Custom] factory.
    SharedMemory,

    /// A caller-supplied allocator, bypassing the default policy entirely.
    Custom(#[debug(skip)] Arc<dyn BufferFactory>),
}

/// Produces buffers on behalf of the [`AllocationZone::Custom`] zone.
///
/// Implement this to control the backing storage of every buffer allocated through
/// the zone, for example to serve allocations from a memory-mapped file or a pool.
pub trait BufferFactory: Send + Sync {
    /// Allocates a buffer with `capacity == limit == size` and `position == 0`.
    ///
    /// The returned buffer must use `order` for its multi-byte numeric operations.
    #[must_use]
    fn allocate(&self, size: usize, order: ByteOrder) -> Buffer;
}

/// Implements [`BufferFactory`] by delegating to a closure.
///
/// This can be used to construct wrapping factories that add logic or configuration
/// on top of an existing allocation path.
pub struct CallbackFactory<FAllocate>
where
    FAllocate: Fn(usize, ByteOrder) -> Buffer + Send + Sync + 'static,
{
    allocate_fn: Arc<FAllocate>,
}

impl<FAllocate> CallbackFactory<FAllocate>
where
    FAllocate: Fn(usize, ByteOrder) -> Buffer + Send + Sync + 'static,
{
    /// Creates a new instance implemented via the provided callback.
    pub fn new(allocate_fn: FAllocate) -> Self {
        Self {
            allocate_fn: Arc::new(allocate_fn),
        }
    }
}

impl<FAllocate> BufferFactory for CallbackFactory<FAllocate>
where
    FAllocate: Fn(usize, ByteOrder) -> Buffer + Send + Sync + 'static,
{
    #[cfg_attr(test, mutants::skip)] // Trivial forwarder.
    fn allocate(&self, size: usize, order: ByteOrder) -> Buffer {
        (self.allocate_fn)(size, order)
    }
}

impl<FAllocate> Clone for CallbackFactory<FAllocate>
where
    FAllocate: Fn(usize, ByteOrder) -> Buffer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            allocate_fn: Arc::clone(&self.allocate_fn),
        }
    }
}

impl<FAllocate> fmt::Debug for CallbackFactory<FAllocate>
where
    FAllocate: Fn(usize, ByteOrder) -> Buffer + Send + Sync + 'static,
{
    #[cfg_attr(test, mutants::skip)] // We have no API contract for this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("allocate_fn", &"Fn(usize, ByteOrder) -> Buffer")
            .finish()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::sync::atomic::{self, AtomicUsize};

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CallbackFactory<fn(usize, ByteOrder) -> Buffer>: BufferFactory);

    #[test]
    fn calls_back_to_provided_fn() {
        let callback_called_times = Arc::new(AtomicUsize::new(0));

        let factory = CallbackFactory::new({
            let callback_called_times = Arc::clone(&callback_called_times);

            move |size, order| {
                callback_called_times.fetch_add(1, atomic::Ordering::SeqCst);
                Buffer::allocate(size, &AllocationZone::Heap, order)
            }
        });

        let buf = Buffer::allocate(
            100,
            &AllocationZone::Custom(Arc::new(factory)),
            ByteOrder::LittleEndian,
        );

        assert_eq!(callback_called_times.load(atomic::Ordering::SeqCst), 1);
        assert_eq!(buf.capacity(), 100);
        assert_eq!(buf.order(), ByteOrder::LittleEndian);
    }

    #[test]
    fn clone_shares_underlying_callback() {
        let callback_called_times = Arc::new(AtomicUsize::new(0));

        let factory = CallbackFactory::new({
            let callback_called_times = Arc::clone(&callback_called_times);

            move |size, order| {
                callback_called_times.fetch_add(1, atomic::Ordering::SeqCst);
                Buffer::allocate(size, &AllocationZone::Heap, order)
            }
        });

        let cloned_factory = factory.clone();

        _ = factory.allocate(50, ByteOrder::BigEndian);
        assert_eq!(callback_called_times.load(atomic::Ordering::SeqCst), 1);

        _ = cloned_factory.allocate(75, ByteOrder::BigEndian);
        assert_eq!(callback_called_times.load(atomic::Ordering::SeqCst), 2);
    }

    #[test]
    fn zone_debug_output_skips_the_factory() {
        let factory =
            CallbackFactory::new(|size, order| Buffer::allocate(size, &AllocationZone::Heap, order));
        let zone = AllocationZone::Custom(Arc::new(factory));

        let debug_output = format!("{zone:?}");

        assert!(debug_output.contains("Custom"), "Debug output should name the variant");
    }

    #[test]
    fn default_zone_is_heap() {
        assert!(matches!(AllocationZone::default(), AllocationZone::Heap));
    }
}
