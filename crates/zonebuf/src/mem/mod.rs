// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Backing-memory strategies and the allocation-zone policy that selects between them.

mod block;
mod storage;
mod zone;

pub(crate) use block::Block;
pub(crate) use storage::Storage;

pub use zone::{AllocationZone, BufferFactory, CallbackFactory};
