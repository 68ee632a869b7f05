// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Helpers shared between the test modules of this crate.

use std::sync::Arc;

use crate::Buffer;
use crate::mem::{AllocationZone, CallbackFactory};

/// Every allocation zone, so contract tests can run against each backing strategy.
///
/// The custom zone delegates to a plain heap allocation, which is enough to prove
/// the factory dispatch path.
pub(crate) fn zones() -> [AllocationZone; 4] {
    [
        AllocationZone::Heap,
        AllocationZone::Direct,
        AllocationZone::SharedMemory,
        AllocationZone::Custom(Arc::new(CallbackFactory::new(|size, order| {
            Buffer::allocate(size, &AllocationZone::Heap, order)
        }))),
    ]
}
