// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carddeck Sync: tags, observers and programmatic navigation for a card deck.
//!
//! Cards carry optional host-defined tags of a single type `T`. This crate keeps
//! one published value, the *frontmost tag*, in step with a
//! [`carddeck_state::DeckState`], and turns "show me the card tagged X" into
//! area changes.
//!
//! - [`TagLookup`]: the host's index-to-tag mapping, in both directions.
//! - [`TagSynchronizer`]: recomputes and publishes the frontmost tag, and
//!   performs [`TagSynchronizer::slide_to`] under a [`SlidePolicy`].
//! - [`Observers`]: synchronous callbacks fired when the published value changes.
//! - [`StackPosition`]: the host's two-way position binding.
//! - [`CardDeck`]: all of the above plus a [`carddeck_drag::DragController`],
//!   for one deck instance.
//!
//! ## Example
//!
//! ```
//! use carddeck_sync::CardDeck;
//!
//! let tags = vec![Some("inbox"), Some("drafts"), Some("sent")];
//! let mut deck: CardDeck<&str> = CardDeck::default();
//! deck.set_items(tags.len(), &tags);
//! assert_eq!(deck.frontmost_tag(), Some(&"inbox"));
//!
//! // Lift everything stacked above "sent".
//! deck.slide_to(&"sent", &tags);
//! assert_eq!(deck.frontmost_tag(), Some(&"sent"));
//! assert_eq!(deck.upper_indices(), &[0, 1]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod deck;
mod lookup;
mod observer;
mod sync;

pub use binding::StackPosition;
pub use deck::{CardDeck, DeckConfig};
pub use lookup::TagLookup;
pub use observer::{Observers, SubscriptionId};
pub use sync::{NotifyMode, SlidePolicy, TagSynchronizer};
