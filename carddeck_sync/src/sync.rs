// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tag synchronizer: publishes the frontmost tag and handles slide requests.
//!
//! ## Frontmost tag
//!
//! The frontmost tag is the tag of the lower-area card with the highest
//! z-order, or `None` when the lower area is empty or that card is untagged.
//! It is recomputed after every area change and published only when it
//! differs from the current value.
//!
//! ## Slide requests
//!
//! [`TagSynchronizer::slide_to`] makes a tagged card the frontmost card by
//! rearranging areas according to a [`SlidePolicy`]. Z-order never changes;
//! only area membership does.

use carddeck_state::{Area, DeckState};

use crate::lookup::TagLookup;
use crate::observer::{Observers, SubscriptionId};

/// How [`TagSynchronizer::slide_to`] rearranges the deck.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SlidePolicy {
    /// Bring an upper target down; for a lower target, send every lower card
    /// stacked above it to the upper area.
    #[default]
    Reorganize,
    /// Only bring an upper target down. Lower targets are left alone.
    FlipOnly,
    /// Bring the target down, then put every card stacked above it in the upper
    /// area and every card below it in the lower area.
    Restack,
}

/// When area changes are turned into a published frontmost tag.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum NotifyMode {
    /// Recompute right after each change.
    #[default]
    Immediate,
    /// Mark a recompute as pending; the host flushes it on its next event-loop
    /// turn with [`TagSynchronizer::run_deferred`].
    Deferred,
}

/// Keeps one published frontmost tag in step with a [`DeckState`].
pub struct TagSynchronizer<T> {
    frontmost: Option<T>,
    observers: Observers<T>,
    policy: SlidePolicy,
    mode: NotifyMode,
    pending: bool,
}

impl<T: core::fmt::Debug> core::fmt::Debug for TagSynchronizer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TagSynchronizer")
            .field("frontmost", &self.frontmost)
            .field("observers", &self.observers)
            .field("policy", &self.policy)
            .field("mode", &self.mode)
            .field("pending", &self.pending)
            .finish()
    }
}

impl<T> Default for TagSynchronizer<T> {
    fn default() -> Self {
        Self::new(SlidePolicy::default(), NotifyMode::default())
    }
}

impl<T> TagSynchronizer<T> {
    /// Create a synchronizer with nothing published.
    pub const fn new(policy: SlidePolicy, mode: NotifyMode) -> Self {
        Self {
            frontmost: None,
            observers: Observers::new(),
            policy,
            mode,
            pending: false,
        }
    }

    /// The published frontmost tag.
    pub fn frontmost_tag(&self) -> Option<&T> {
        self.frontmost.as_ref()
    }

    /// Current slide policy.
    pub fn policy(&self) -> SlidePolicy {
        self.policy
    }

    /// Replace the slide policy.
    pub fn set_policy(&mut self, policy: SlidePolicy) {
        self.policy = policy;
    }

    /// Current notification mode.
    pub fn mode(&self) -> NotifyMode {
        self.mode
    }

    /// Replace the notification mode.
    pub fn set_mode(&mut self, mode: NotifyMode) {
        self.mode = mode;
    }

    /// Register a callback for frontmost tag changes.
    pub fn subscribe(&mut self, callback: impl FnMut(Option<&T>) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Schedule a recompute for the next [`TagSynchronizer::run_deferred`].
    ///
    /// Repeated calls before the flush coalesce into one recompute.
    pub fn defer_recompute(&mut self) {
        self.pending = true;
    }

    /// True if a deferred recompute is waiting.
    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

impl<T: Clone + PartialEq> TagSynchronizer<T> {
    /// Recompute the frontmost tag from `state` and publish it if it changed.
    ///
    /// Returns `true` if a new value was published.
    pub fn recompute<L>(&mut self, state: &mut DeckState, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        self.pending = false;
        let tag = state.frontmost_lower_index().and_then(|i| tags.tag_at(i));
        self.publish(tag)
    }

    /// React to an area change according to the [`NotifyMode`].
    ///
    /// Returns `true` if a new value was published now.
    pub fn areas_changed<L>(&mut self, state: &mut DeckState, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        match self.mode {
            NotifyMode::Immediate => self.recompute(state, tags),
            NotifyMode::Deferred => {
                self.defer_recompute();
                false
            }
        }
    }

    /// Flush a deferred recompute, if one is pending.
    pub fn run_deferred<L>(&mut self, state: &mut DeckState, tags: &L) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        if !self.pending {
            return false;
        }
        self.recompute(state, tags)
    }

    /// Navigate so that the card tagged `target` becomes frontmost.
    ///
    /// Unknown tags, and tags whose index is past the end of `state`, are
    /// ignored. Otherwise any drag in flight is released in place, the deck
    /// is rearranged per the [`SlidePolicy`] and the frontmost tag is
    /// refreshed per the [`NotifyMode`]. Returns `true` if a new value was
    /// published.
    pub fn slide_to<L>(&mut self, state: &mut DeckState, tags: &L, target: &T) -> bool
    where
        L: TagLookup<T> + ?Sized,
    {
        let Some(index) = tags.index_of(target) else {
            return false;
        };
        if state.view(index).is_none() {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(index, policy = ?self.policy, "slide requested");
        // Navigation runs after the gesture: a card keeps no drag offset
        // across an area change.
        state.end_dragging(false);
        rearrange(state, index, self.policy);
        self.areas_changed(state, tags)
    }

    fn publish(&mut self, tag: Option<T>) -> bool {
        if self.frontmost == tag {
            return false;
        }
        self.frontmost = tag;
        #[cfg(feature = "tracing")]
        tracing::debug!("frontmost tag published");
        self.observers.notify(self.frontmost.as_ref());
        true
    }
}

/// Apply `policy` for a slide to `target`. Returns the number of cards moved.
fn rearrange(state: &mut DeckState, target: usize, policy: SlidePolicy) -> usize {
    let target_z = state.z_order(target);
    let mut moved = 0;
    match policy {
        SlidePolicy::FlipOnly => {
            moved += usize::from(state.move_to_lower_area(target));
        }
        SlidePolicy::Reorganize => {
            if state.is_in_upper_area(target) {
                moved += usize::from(state.move_to_lower_area(target));
            } else {
                for i in 0..state.len() {
                    if i != target && state.area(i) == Area::Lower && state.z_order(i) > target_z {
                        moved += usize::from(state.set_area(i, Area::Upper));
                    }
                }
            }
        }
        SlidePolicy::Restack => {
            moved += usize::from(state.move_to_lower_area(target));
            for i in 0..state.len() {
                let z = state.z_order(i);
                if i == target || z == target_z {
                    continue;
                }
                let area = if z > target_z { Area::Upper } else { Area::Lower };
                moved += usize::from(state.set_area(i, area));
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(index = target, moved, "deck rearranged");
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn abc() -> (DeckState, Vec<Option<&'static str>>) {
        let mut s = DeckState::new();
        s.initialize(3);
        (s, vec![Some("a"), Some("b"), Some("c")])
    }

    fn areas(s: &DeckState) -> Vec<Area> {
        s.views().iter().map(|v| v.area).collect()
    }

    #[test]
    fn frontmost_is_max_z_lower_card() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        assert!(sync.recompute(&mut s, &tags));
        assert_eq!(sync.frontmost_tag(), Some(&"a"));
        s.set_area(0, Area::Upper);
        assert!(sync.recompute(&mut s, &tags));
        assert_eq!(sync.frontmost_tag(), Some(&"b"));
    }

    #[test]
    fn empty_lower_area_publishes_none() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        sync.recompute(&mut s, &tags);
        for i in 0..3 {
            s.set_area(i, Area::Upper);
        }
        assert!(sync.recompute(&mut s, &tags));
        assert_eq!(sync.frontmost_tag(), None);
    }

    #[test]
    fn untagged_front_card_publishes_none() {
        let mut s = DeckState::new();
        s.initialize(2);
        let tags = vec![None, Some(1_u32)];
        let mut sync: TagSynchronizer<u32> = TagSynchronizer::default();
        assert!(!sync.recompute(&mut s, &tags));
        assert_eq!(sync.frontmost_tag(), None);
    }

    #[test]
    fn observers_fire_only_on_change() {
        let (mut s, tags) = abc();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        let log = seen.clone();
        sync.subscribe(move |t| log.borrow_mut().push(t.copied()));
        sync.recompute(&mut s, &tags);
        sync.recompute(&mut s, &tags);
        s.set_area(0, Area::Upper);
        sync.recompute(&mut s, &tags);
        assert_eq!(*seen.borrow(), vec![Some("a"), Some("b")]);
    }

    #[test]
    fn slide_to_upper_target_brings_it_down() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        s.set_area(0, Area::Upper);
        s.set_area(1, Area::Upper);
        sync.recompute(&mut s, &tags);
        assert_eq!(sync.frontmost_tag(), Some(&"c"));
        assert!(sync.slide_to(&mut s, &tags, &"b"));
        assert_eq!(areas(&s), vec![Area::Upper, Area::Lower, Area::Lower]);
        assert_eq!(sync.frontmost_tag(), Some(&"b"));
    }

    #[test]
    fn slide_to_lower_target_lifts_cards_above_it() {
        let mut s = DeckState::new();
        s.initialize(4);
        let tags = vec![Some(10), Some(11), Some(12), Some(13)];
        let mut sync: TagSynchronizer<i32> = TagSynchronizer::default();
        sync.recompute(&mut s, &tags);
        assert!(sync.slide_to(&mut s, &tags, &12));
        assert_eq!(
            areas(&s),
            vec![Area::Upper, Area::Upper, Area::Lower, Area::Lower]
        );
        assert_eq!(sync.frontmost_tag(), Some(&12));
    }

    #[test]
    fn slide_to_is_idempotent() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        sync.slide_to(&mut s, &tags, &"b");
        let after_first = areas(&s);
        assert!(!sync.slide_to(&mut s, &tags, &"b"));
        assert_eq!(areas(&s), after_first);
        assert_eq!(sync.frontmost_tag(), Some(&"b"));
    }

    #[test]
    fn slide_to_unknown_tag_is_noop() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        sync.recompute(&mut s, &tags);
        assert!(!sync.slide_to(&mut s, &tags, &"zz"));
        assert_eq!(areas(&s), vec![Area::Lower; 3]);
        assert_eq!(sync.frontmost_tag(), Some(&"a"));
    }

    #[test]
    fn slide_to_tag_past_the_deck_is_noop() {
        let mut s = DeckState::new();
        s.initialize(2);
        let tags = vec![Some(1), Some(2), Some(3)];
        let mut sync: TagSynchronizer<i32> = TagSynchronizer::default();
        sync.recompute(&mut s, &tags);
        assert!(!sync.slide_to(&mut s, &tags, &3));
        assert_eq!(areas(&s), vec![Area::Lower; 2]);
    }

    #[test]
    fn flip_only_leaves_lower_target_alone() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::new(SlidePolicy::FlipOnly, NotifyMode::Immediate);
        sync.recompute(&mut s, &tags);
        assert!(!sync.slide_to(&mut s, &tags, &"c"));
        assert_eq!(areas(&s), vec![Area::Lower; 3]);
        s.set_area(2, Area::Upper);
        sync.slide_to(&mut s, &tags, &"c");
        assert_eq!(s.area(2), Area::Lower);
    }

    #[test]
    fn reorganize_upper_target_may_stay_behind() {
        // An upper target only comes down; lower cards above it stay put.
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::default();
        s.set_area(1, Area::Upper);
        sync.slide_to(&mut s, &tags, &"b");
        assert_eq!(areas(&s), vec![Area::Lower; 3]);
        assert_eq!(sync.frontmost_tag(), Some(&"a"));
    }

    #[test]
    fn restack_always_makes_target_frontmost() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::new(SlidePolicy::Restack, NotifyMode::Immediate);
        s.set_area(1, Area::Upper);
        s.set_area(2, Area::Upper);
        sync.slide_to(&mut s, &tags, &"b");
        assert_eq!(areas(&s), vec![Area::Upper, Area::Lower, Area::Lower]);
        assert_eq!(sync.frontmost_tag(), Some(&"b"));
    }

    #[test]
    fn slide_releases_dragged_card_first() {
        let mut s = DeckState::new();
        s.initialize(2);
        let tags = vec![Some(0_u32), Some(1)];
        let mut sync: TagSynchronizer<u32> = TagSynchronizer::default();
        sync.recompute(&mut s, &tags);
        s.start_dragging(0);
        s.update_drag_offset(kurbo::Vec2::new(0.0, -166.0));

        assert!(sync.slide_to(&mut s, &tags, &1));
        assert_eq!(s.area(0), Area::Upper);
        assert_eq!(s.dragged_index(), None);
        assert!(!s.is_dragging(0), "moved card must not stay grabbed");
        assert_eq!(s.offset(0), kurbo::Vec2::ZERO);
        assert_eq!(sync.frontmost_tag(), Some(&1));
    }

    #[test]
    fn rearrange_counts_moved_cards() {
        let (mut s, _) = abc();
        assert_eq!(rearrange(&mut s, 2, SlidePolicy::Reorganize), 2);
        assert_eq!(rearrange(&mut s, 2, SlidePolicy::Reorganize), 0);
        assert_eq!(rearrange(&mut s, 0, SlidePolicy::Restack), 2);
        assert_eq!(areas(&s), vec![Area::Lower; 3]);
    }

    #[test]
    fn deferred_mode_waits_for_flush() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::new(SlidePolicy::Reorganize, NotifyMode::Deferred);
        assert!(!sync.areas_changed(&mut s, &tags));
        assert!(sync.has_pending());
        assert_eq!(sync.frontmost_tag(), None);
        assert!(sync.run_deferred(&mut s, &tags));
        assert!(!sync.has_pending());
        assert_eq!(sync.frontmost_tag(), Some(&"a"));
        assert!(!sync.run_deferred(&mut s, &tags));
    }

    #[test]
    fn deferred_slide_publishes_on_flush() {
        let (mut s, tags) = abc();
        let mut sync: TagSynchronizer<&str> = TagSynchronizer::new(SlidePolicy::Reorganize, NotifyMode::Deferred);
        sync.defer_recompute();
        sync.defer_recompute();
        sync.run_deferred(&mut s, &tags);
        assert!(!sync.slide_to(&mut s, &tags, &"c"));
        assert_eq!(sync.frontmost_tag(), Some(&"a"));
        assert!(sync.run_deferred(&mut s, &tags));
        assert_eq!(sync.frontmost_tag(), Some(&"c"));
    }
}
