// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carddeck Drag: the gesture half of an interactive card deck.
//!
//! ## Overview
//!
//! [`DragController`] consumes drag events from the host's gesture recognizer
//! and applies them to a [`carddeck_state::DeckState`]:
//!
//! 1) On the first movement of a gesture it picks a card. Pulling down picks
//!    from the upper area (the highest index, i.e. the card swiped away last);
//!    pushing up picks from the lower area (the lowest index, i.e. the front card).
//! 2) While the gesture moves, the card follows it vertically. Upper cards
//!    cannot be pushed further up than where they rest.
//! 3) On release, a [`DecisionPolicy`] decides from position and momentum
//!    whether the card changes area, and a [`Resolution`] reports the outcome
//!    with a suggested settle duration.
//!
//! It does not recognize gestures or animate anything.
//!
//! ## Inputs
//!
//! - [`DragEvent`]: `changed`/`ended` updates carrying translation, predicted
//!   end translation, and start location. Platform cancellation maps to
//!   [`DragEvent::cancelled`].
//! - [`Viewport`]: frame size and safe-area insets, read on release.
//! - [`DragConfig`]: decision policy and [`ScrollDirection`]s to ignore.
//!
//! ## Example
//!
//! ```
//! use carddeck_drag::{DragController, DragEvent, Viewport};
//! use carddeck_state::{Area, DeckState};
//! use kurbo::{Point, Vec2};
//!
//! let mut deck = DeckState::new();
//! deck.initialize(3);
//! let controller = DragController::default();
//! let viewport = Viewport::from_height(800.0, 0.0, 0.0);
//!
//! // A quick upward flick on the front card.
//! let start = Point::new(200.0, 600.0);
//! controller.handle(&mut deck, &DragEvent::changed(start, Vec2::new(0.0, -30.0)), &viewport);
//! let end = DragEvent::ended(start, Vec2::new(0.0, -40.0), Vec2::new(0.0, -160.0));
//! let resolution = controller.handle(&mut deck, &end, &viewport).unwrap();
//!
//! assert!(resolution.changed_area);
//! assert_eq!(deck.area(0), Area::Upper);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod controller;
mod decision;
mod direction;
mod event;
mod geometry;

pub use controller::{DragConfig, DragController, GesturePhase, Resolution};
pub use decision::DecisionPolicy;
pub use direction::ScrollDirection;
pub use event::{DragEvent, DragPhase};
pub use geometry::Viewport;
