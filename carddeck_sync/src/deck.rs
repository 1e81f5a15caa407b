// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One deck instance: store, gesture controller, synchronizer and position binding.

use carddeck_drag::{DragConfig, DragController, DragEvent, Resolution, Viewport};
use carddeck_state::DeckState;

use crate::binding::StackPosition;
use crate::lookup::TagLookup;
use crate::observer::SubscriptionId;
use crate::sync::{NotifyMode, SlidePolicy, TagSynchronizer};

/// Configuration for a [`CardDeck`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DeckConfig {
    /// Gesture decision policy and disabled directions.
    pub drag: DragConfig,
    /// How programmatic slides rearrange the deck.
    pub slide: SlidePolicy,
    /// When area changes publish a new frontmost tag.
    pub notify: NotifyMode,
}

/// A card deck wired end to end.
///
/// Host collaborators are passed to each call: the [`TagLookup`] describing
/// the cards, and the [`Viewport`] the deck is laid out in. After every
/// publish the [`StackPosition`] binding adopts the new frontmost tag.
#[derive(Debug)]
pub struct CardDeck<T> {
    state: DeckState,
    controller: DragController,
    sync: TagSynchronizer<T>,
    position: StackPosition<T>,
}

impl<T: Clone + PartialEq> Default for CardDeck<T> {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

impl<T: Clone + PartialEq> CardDeck<T> {
    /// Create an empty deck.
    pub fn new(config: DeckConfig) -> Self {
        Self {
            state: DeckState::new(),
            controller: DragController::new(config.drag),
            sync: TagSynchronizer::new(config.slide, config.notify),
            position: StackPosition::new(None),
        }
    }

    /// The underlying store.
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    /// The gesture controller.
    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Mutable access to the gesture controller, e.g. to change disabled directions.
    pub fn controller_mut(&mut self) -> &mut DragController {
        &mut self.controller
    }

    /// The tag synchronizer.
    pub fn synchronizer(&self) -> &TagSynchronizer<T> {
        &self.sync
    }

    /// Mutable access to the tag synchronizer.
    pub fn synchronizer_mut(&mut self) -> &mut TagSynchronizer<T> {
        &mut self.sync
    }

    /// Indices of cards in the upper area, ascending.
    pub fn upper_indices(&mut self) -> &[usize] {
        self.state.upper_indices()
    }

    /// Indices of cards in the lower area, ascending.
    pub fn lower_indices(&mut self) -> &[usize] {
        self.state.lower_indices()
    }

    /// The published frontmost tag.
    pub fn frontmost_tag(&self) -> Option<&T> {
        self.sync.frontmost_tag()
    }

    /// The host-visible position binding.
    pub fn position(&self) -> Option<&T> {
        self.position.get()
    }

    /// Register a callback for frontmost tag changes.
    pub fn subscribe(&mut self, callback: impl FnMut(Option<&T>) + 'static) -> SubscriptionId {
        self.sync.subscribe(callback)
    }

    /// Remove a callback registered with [`CardDeck::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.sync.unsubscribe(id)
    }

    /// Declare the deck's cards.
    ///
    /// When `count` differs from the current count, every card is recreated in
    /// the lower area and any drag in flight is dropped. The frontmost tag is
    /// refreshed either way, since `tags` may have changed. Returns `true` if a
    /// new frontmost tag was published.
    pub fn set_items<L>(&mut self, count: usize, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        self.state.initialize(count);
        self.refresh(tags)
    }

    /// Feed one gesture event.
    ///
    /// Returns the resolution when `event` ends a drag. A resolution that moved
    /// the card to the other area refreshes the frontmost tag.
    pub fn handle_drag<L>(
        &mut self,
        event: &DragEvent,
        viewport: &Viewport,
        tags: &L,
    ) -> Option<Resolution>
    where
        L: TagLookup<T> + ?Sized,
    {
        let resolution = self.controller.handle(&mut self.state, event, viewport);
        if resolution.is_some_and(|r| r.changed_area) {
            self.refresh(tags);
        }
        resolution
    }

    /// Abandon the gesture in flight, if any.
    pub fn cancel_drag<L>(&mut self, viewport: &Viewport, tags: &L) -> Option<Resolution>
    where
        L: TagLookup<T> + ?Sized,
    {
        let resolution = self.controller.cancel(&mut self.state, viewport);
        if resolution.is_some_and(|r| r.changed_area) {
            self.refresh(tags);
        }
        resolution
    }

    /// Make the card tagged `target` frontmost.
    ///
    /// Returns `true` if a new frontmost tag was published.
    pub fn slide_to<L>(&mut self, target: &T, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        let published = self.sync.slide_to(&mut self.state, tags, target);
        if published {
            self.position.receive(self.sync.frontmost_tag());
        }
        published
    }

    /// Host-side write of the position binding.
    ///
    /// A changed `Some` value navigates there; `None` only clears the binding.
    /// Returns `true` if a new frontmost tag was published.
    pub fn set_position<L>(&mut self, tag: Option<T>, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        match self.position.request(tag) {
            Some(target) => self.slide_to(&target, tags),
            None => false,
        }
    }

    /// Flush a deferred recompute. Call once per host event-loop turn when
    /// using [`NotifyMode::Deferred`].
    pub fn tick<L>(&mut self, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        let published = self.sync.run_deferred(&mut self.state, tags);
        if published {
            self.position.receive(self.sync.frontmost_tag());
        }
        published
    }

    fn refresh<L>(&mut self, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        let published = self.sync.areas_changed(&mut self.state, tags);
        if published {
            self.position.receive(self.sync.frontmost_tag());
        }
        published
    }
}
