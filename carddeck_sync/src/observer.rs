// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callback registry for published values.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Handle returned by [`Observers::subscribe`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(Option<&T>)>;

/// Ordered set of callbacks notified with an optional value.
///
/// Callbacks run synchronously, in subscription order.
pub struct Observers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> core::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observers<T> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register `callback`.
    pub fn subscribe(&mut self, callback: impl FnMut(Option<&T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    /// Call every callback with `value`.
    pub fn notify(&mut self, value: Option<&T>) {
        for (_, cb) in &mut self.entries {
            cb(value);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
