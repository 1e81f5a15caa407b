// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between card indices and host-supplied tags.

use alloc::vec::Vec;

/// Resolve tags for the cards of a deck.
///
/// The host implements this over whatever it uses to describe its cards. The
/// tag type `T` is fixed by the integrating application; cards may be untagged.
pub trait TagLookup<T> {
    /// Tag of the card at `index`, or `None` if it has none or is out of range.
    fn tag_at(&self, index: usize) -> Option<T>;
    /// Index of the first card tagged `tag`.
    fn index_of(&self, tag: &T) -> Option<usize>;
}

impl<T: Clone + PartialEq> TagLookup<T> for [Option<T>] {
    fn tag_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned().flatten()
    }

    fn index_of(&self, tag: &T) -> Option<usize> {
        self.iter().position(|t| t.as_ref() == Some(tag))
    }
}

impl<T: Clone + PartialEq> TagLookup<T> for Vec<Option<T>> {
    fn tag_at(&self, index: usize) -> Option<T> {
        self.as_slice().tag_at(index)
    }

    fn index_of(&self, tag: &T) -> Option<usize> {
        self.as_slice().index_of(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn slice_lookup_both_ways() {
        let tags = vec![Some("a"), None, Some("c")];
        assert_eq!(tags.tag_at(0), Some("a"));
        assert_eq!(tags.tag_at(1), None);
        assert_eq!(tags.tag_at(9), None);
        assert_eq!(tags.index_of(&"c"), Some(2));
        assert_eq!(tags.index_of(&"zz"), None);
    }

    #[test]
    fn first_match_wins() {
        let tags = [Some(7_u32), Some(7), Some(8)];
        assert_eq!(tags[..].index_of(&7), Some(0));
    }
}
