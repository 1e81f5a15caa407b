// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deck store: per-card records, the active drag, and area bookkeeping.

use alloc::vec::Vec;
use kurbo::Vec2;

use crate::index::AreaIndex;
use crate::types::{Area, ViewState};

/// Authoritative per-card state for one deck.
///
/// ## Invariants
///
/// - At most one card has `dragging` set, and it is the one reported by
///   [`DeckState::dragged_index`].
/// - Every card other than the dragged one has a zero offset.
/// - `z_order` is `count - 1 - index`, fixed at [`DeckState::initialize`].
/// - [`DeckState::upper_indices`] and [`DeckState::lower_indices`] always agree
///   with the per-card `area` fields.
///
/// ## Out-of-range access
///
/// Reads at an index past the end return neutral values (index-as-z-order,
/// zero offset, `false`, [`Area::Lower`]) and writes are ignored. The host may
/// deliver events against a stale card count; those must not bring the store down.
#[derive(Clone, Debug, Default)]
pub struct DeckState {
    views: Vec<ViewState>,
    dragged: Option<usize>,
    index: AreaIndex,
}

impl DeckState {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            views: Vec::new(),
            dragged: None,
            index: AreaIndex::new(),
        }
    }

    /// Resize to `count` cards if the count changed.
    ///
    /// On a change every card is recreated in the lower area, at rest, with
    /// `z_order = count - 1 - index`, and any in-flight drag is dropped.
    /// Calling this again with the current count leaves the state untouched.
    /// Returns `true` if the store was rebuilt.
    pub fn initialize(&mut self, count: usize) -> bool {
        if self.views.len() == count {
            return false;
        }
        self.views.clear();
        self.views.reserve(count);
        self.views
            .extend((0..count).map(|i| ViewState::new((count - 1 - i) as f64)));
        self.dragged = None;
        self.index.invalidate();
        #[cfg(feature = "tracing")]
        tracing::debug!(count, "deck state initialized");
        true
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// True if the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// All per-card records, in index order.
    pub fn views(&self) -> &[ViewState] {
        &self.views
    }

    /// The record at `index`, if any.
    pub fn view(&self, index: usize) -> Option<&ViewState> {
        self.views.get(index)
    }

    /// Z-order of the card at `index`; the index itself when out of range.
    pub fn z_order(&self, index: usize) -> f64 {
        self.views
            .get(index)
            .map_or(index as f64, |v| v.z_order)
    }

    /// Area of the card at `index`; [`Area::Lower`] when out of range.
    pub fn area(&self, index: usize) -> Area {
        self.views.get(index).map_or(Area::Lower, |v| v.area)
    }

    /// True if the card at `index` rests in the upper area.
    pub fn is_in_upper_area(&self, index: usize) -> bool {
        self.area(index).is_upper()
    }

    /// Drag offset of the card at `index`; zero when out of range.
    pub fn offset(&self, index: usize) -> Vec2 {
        self.views.get(index).map_or(Vec2::ZERO, |v| v.offset)
    }

    /// True if the card at `index` is being dragged.
    pub fn is_dragging(&self, index: usize) -> bool {
        self.views.get(index).is_some_and(|v| v.dragging)
    }

    /// The card tracked by the in-flight gesture.
    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged
    }

    /// Indices of cards in the upper area, ascending.
    pub fn upper_indices(&mut self) -> &[usize] {
        self.indices(Area::Upper)
    }

    /// Indices of cards in the lower area, ascending.
    pub fn lower_indices(&mut self) -> &[usize] {
        self.indices(Area::Lower)
    }

    /// Indices of cards in `area`, ascending.
    pub fn indices(&mut self, area: Area) -> &[usize] {
        self.index.refresh(&self.views);
        self.index.get(area)
    }

    /// Candidate cards for a gesture moving by `translation_y`.
    ///
    /// Downward motion (`> 0`) pulls from the upper area; anything else pushes
    /// from the lower area.
    pub fn target_indices(&mut self, translation_y: f64) -> &[usize] {
        self.indices(source_area(translation_y))
    }

    /// Pick which candidate a new gesture grabs.
    ///
    /// When every candidate rests in the upper area the highest index wins
    /// (the card most recently swiped away); otherwise the lowest index wins
    /// (the front card of the lower stack). Empty input yields `None`.
    pub fn find_nearest_index(&self, candidates: &[usize]) -> Option<usize> {
        nearest(&self.views, candidates)
    }

    /// The card a gesture moving by `translation_y` should grab, if any.
    ///
    /// Same as [`DeckState::find_nearest_index`] over
    /// [`DeckState::target_indices`].
    pub fn select_target(&mut self, translation_y: f64) -> Option<usize> {
        self.index.refresh(&self.views);
        nearest(&self.views, self.index.get(source_area(translation_y)))
    }

    /// Begin tracking `index` as the dragged card.
    ///
    /// Any previously dragged card is released in place first so that only one
    /// card is ever marked. Out-of-range indices are ignored.
    pub fn start_dragging(&mut self, index: usize) {
        if index >= self.views.len() {
            return;
        }
        if let Some(prev) = self.dragged.take()
            && let Some(v) = self.views.get_mut(prev)
        {
            v.dragging = false;
            v.offset = Vec2::ZERO;
        }
        self.views[index].dragging = true;
        self.dragged = Some(index);
        #[cfg(feature = "tracing")]
        tracing::trace!(index, "drag started");
    }

    /// Move the dragged card by `offset`.
    ///
    /// Upper-area cards cannot be pulled above their resting position, so their
    /// vertical offset is clamped to `>= 0`. No-op without an active drag.
    pub fn update_drag_offset(&mut self, offset: Vec2) {
        let Some(v) = self.dragged.and_then(|i| self.views.get_mut(i)) else {
            return;
        };
        v.offset = if v.area.is_upper() {
            Vec2::new(offset.x, offset.y.max(0.0))
        } else {
            offset
        };
    }

    /// Release the dragged card, toggling its area when `change_area` is set.
    ///
    /// Returns the released index, or `None` if nothing was being dragged.
    pub fn end_dragging(&mut self, change_area: bool) -> Option<usize> {
        let index = self.dragged.take()?;
        let v = self.views.get_mut(index)?;
        if change_area {
            v.area = v.area.toggled();
            self.index.invalidate();
            #[cfg(feature = "tracing")]
            tracing::debug!(index, area = ?v.area, "area changed by drag");
        }
        v.offset = Vec2::ZERO;
        v.dragging = false;
        Some(index)
    }

    /// Put the card at `index` into `area`. Returns `true` if it moved.
    pub fn set_area(&mut self, index: usize, area: Area) -> bool {
        let Some(v) = self.views.get_mut(index) else {
            return false;
        };
        if v.area == area {
            return false;
        }
        v.area = area;
        self.index.invalidate();
        #[cfg(feature = "tracing")]
        tracing::debug!(index, ?area, "area set");
        true
    }

    /// Bring an upper-area card back down. Returns `true` if it moved.
    pub fn move_to_lower_area(&mut self, index: usize) -> bool {
        self.set_area(index, Area::Lower)
    }

    /// The lower-area card with the highest z-order.
    ///
    /// Ties go to the lowest index. `None` when the lower area is empty.
    pub fn frontmost_lower_index(&mut self) -> Option<usize> {
        self.index.refresh(&self.views);
        let mut best: Option<(usize, f64)> = None;
        for &i in self.index.get(Area::Lower) {
            let z = self.views[i].z_order;
            match best {
                Some((_, bz)) if z <= bz => {}
                _ => best = Some((i, z)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Position-based area decision.
    ///
    /// An upper card changes area once its `current_y` is below the midline or
    /// it is flung downward faster than `velocity_threshold`; a lower card
    /// mirrors that upward. Out-of-range indices never change area.
    pub fn should_change_area(
        &self,
        index: usize,
        current_y: f64,
        velocity: f64,
        velocity_threshold: f64,
    ) -> bool {
        let Some(v) = self.views.get(index) else {
            return false;
        };
        match v.area {
            Area::Upper => current_y > 0.0 || velocity > velocity_threshold,
            Area::Lower => current_y < 0.0 || velocity < -velocity_threshold,
        }
    }
}

fn source_area(translation_y: f64) -> Area {
    if translation_y > 0.0 {
        Area::Upper
    } else {
        Area::Lower
    }
}

fn nearest(views: &[ViewState], candidates: &[usize]) -> Option<usize> {
    let all_upper = candidates
        .iter()
        .all(|&i| views.get(i).is_some_and(|v| v.area.is_upper()));
    if all_upper {
        candidates.iter().copied().max()
    } else {
        candidates.iter().copied().min()
    }
}
