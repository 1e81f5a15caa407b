// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way "current position" value shared between a deck and its host.

/// The host-visible position of a deck, expressed as a tag.
///
/// Both sides write it. The host calls [`StackPosition::request`] to navigate;
/// the deck calls [`StackPosition::receive`] after publishing a new frontmost
/// tag. Values are compared before they are stored, so a navigation request
/// that lands on the requested tag does not come back as a second change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackPosition<T> {
    value: Option<T>,
}

impl<T: Clone + PartialEq> StackPosition<T> {
    /// A binding holding `value`.
    pub const fn new(value: Option<T>) -> Self {
        Self { value }
    }

    /// The stored value.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Host-side write.
    ///
    /// Returns the tag to navigate to, if `tag` is `Some` and differs from the
    /// stored value. Writing `None` clears the value and requests nothing.
    pub fn request(&mut self, tag: Option<T>) -> Option<T> {
        if self.value == tag {
            return None;
        }
        self.value = tag.clone();
        tag
    }

    /// Deck-side write. Returns `true` if the stored value changed.
    pub fn receive(&mut self, published: Option<&T>) -> bool {
        if self.value.as_ref() == published {
            return false;
        }
        self.value = published.cloned();
        true
    }
}
