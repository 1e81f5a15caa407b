// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carddeck State: the per-card store behind an interactive card deck.
//!
//! A card deck is a stack of full-size cards that the user swipes between two
//! zones: the front-facing *lower* area and a holding *upper* area above it.
//! This crate holds the authoritative state for such a deck and nothing else.
//! It does not render, animate, or recognize gestures.
//!
//! - [`DeckState`]: per-card records, the active drag, and area bookkeeping.
//! - [`ViewState`]: one card's area, drag offset, dragging flag, and z-order.
//! - [`Area`]: upper or lower.
//! - [`AreaIndex`]: cached upper/lower partition, invalidated on every area change.
//!
//! Higher layers drive it: `carddeck_drag` turns gesture events into drags and
//! area changes, and `carddeck_sync` keeps a frontmost tag in step with it.
//!
//! ## Z-order
//!
//! Cards are declared in order and the first card is on top: card `i` of `n`
//! gets `z_order = n - 1 - i`. Z-order is fixed once assigned; moving a card
//! between areas does not restack it.
//!
//! ## Tolerant indexing
//!
//! Reads past the end of the deck return neutral values and writes are ignored.
//! Gesture and layout events may race a change in card count; the store stays
//! valid instead of failing.
//!
//! ## Example
//!
//! ```
//! use carddeck_state::{Area, DeckState};
//!
//! let mut deck = DeckState::new();
//! deck.initialize(3);
//! assert_eq!(deck.lower_indices(), &[0, 1, 2]);
//!
//! // Swipe the front card away.
//! deck.start_dragging(0);
//! deck.end_dragging(true);
//! assert_eq!(deck.area(0), Area::Upper);
//! assert_eq!(deck.frontmost_lower_index(), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod index;
mod store;
mod types;

pub use index::AreaIndex;
pub use store::DeckState;
pub use types::{Area, ViewState};
