// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached partition of card indices into upper and lower areas.

use alloc::vec::Vec;

use crate::types::{Area, ViewState};

/// Upper/lower index lists derived from the per-card [`Area`] field.
///
/// Both lists are in ascending index order. The cache is rebuilt lazily in a
/// single pass the first time it is read after [`AreaIndex::invalidate`].
#[derive(Clone, Debug, Default)]
pub struct AreaIndex {
    upper: Vec<usize>,
    lower: Vec<usize>,
    valid: bool,
}

impl AreaIndex {
    /// Create an empty, invalid index.
    pub const fn new() -> Self {
        Self {
            upper: Vec::new(),
            lower: Vec::new(),
            valid: false,
        }
    }

    /// Mark the cache stale. Must be called after any `area` mutation.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// True if the cached lists reflect the last refresh.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Rebuild from `states` if stale.
    pub fn refresh(&mut self, states: &[ViewState]) {
        if self.valid {
            return;
        }
        self.upper.clear();
        self.lower.clear();
        for (i, s) in states.iter().enumerate() {
            match s.area {
                Area::Upper => self.upper.push(i),
                Area::Lower => self.lower.push(i),
            }
        }
        self.valid = true;
    }

    /// Cached indices for `area`. Call [`AreaIndex::refresh`] first.
    pub fn get(&self, area: Area) -> &[usize] {
        debug_assert!(self.valid, "area index read while stale");
        match area {
            Area::Upper => &self.upper,
            Area::Lower => &self.lower,
        }
    }
}
