// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: turns gesture events into drags and area changes.
//!
//! ## Lifecycle
//!
//! ```text
//!   Idle ──changed──► Selecting ──card found──► Dragging ──ended──► Resolving ──► Idle
//!                        │
//!                        └── no candidate: stay Idle, retry on the next `changed`
//! ```
//!
//! Selecting and Resolving complete within a single event, so the only phases
//! observable between events are [`GesturePhase::Idle`] and
//! [`GesturePhase::Dragging`]. The dragged card is recorded in the
//! [`DeckState`] itself; the controller carries configuration only.

use core::time::Duration;

use carddeck_state::{Area, DeckState};
use kurbo::Vec2;

use crate::decision::DecisionPolicy;
use crate::direction::ScrollDirection;
use crate::event::{DragEvent, DragPhase};
use crate::geometry::Viewport;

/// Drag configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragConfig {
    /// Rule deciding whether a released card changes area.
    pub policy: DecisionPolicy,
    /// Swipe directions the controller ignores.
    pub disabled_directions: ScrollDirection,
}

/// Observable gesture phase between events.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GesturePhase {
    /// No card is being dragged.
    Idle,
    /// A card is following the gesture.
    Dragging {
        /// Index of the dragged card.
        index: usize,
    },
}

/// Outcome of releasing a dragged card.
///
/// Hosts use `to` and `duration` to animate the card into place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The released card.
    pub index: usize,
    /// Area the card was in when the gesture ended.
    pub from: Area,
    /// Area the card rests in now.
    pub to: Area,
    /// True if `from != to`.
    pub changed_area: bool,
    /// Vertical momentum at release (predicted end minus translation).
    pub velocity: f64,
    /// Suggested settle animation length.
    pub duration: Duration,
}

/// Drives a [`DeckState`] from drag gesture events.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    config: DragConfig,
}

impl DragController {
    /// Create a controller with `config`.
    pub fn new(config: DragConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Replace the decision policy.
    pub fn set_policy(&mut self, policy: DecisionPolicy) {
        self.config.policy = policy;
    }

    /// Replace the set of ignored directions.
    pub fn set_disabled_directions(&mut self, directions: ScrollDirection) {
        self.config.disabled_directions = directions;
    }

    /// Gesture phase as seen from `state`.
    pub fn phase(&self, state: &DeckState) -> GesturePhase {
        match state.dragged_index() {
            Some(index) => GesturePhase::Dragging { index },
            None => GesturePhase::Idle,
        }
    }

    /// True if a gesture translating by `translation_y` is handled at all.
    pub fn should_handle(&self, translation_y: f64) -> bool {
        self.config.disabled_directions.allows(translation_y)
    }

    /// Feed one event. Returns the resolution when `event` ends a drag.
    pub fn handle(
        &self,
        state: &mut DeckState,
        event: &DragEvent,
        viewport: &Viewport,
    ) -> Option<Resolution> {
        match event.phase {
            DragPhase::Changed => {
                self.drag_changed(state, event);
                None
            }
            DragPhase::Ended => self.drag_ended(state, event, viewport),
        }
    }

    /// Handle a movement update.
    ///
    /// Selects a card on the first handled movement of a gesture, then moves it
    /// vertically with the translation. Returns `true` if a card is being
    /// dragged after the update.
    pub fn drag_changed(&self, state: &mut DeckState, event: &DragEvent) -> bool {
        let dy = event.translation.y;
        if !self.should_handle(dy) {
            return false;
        }
        if state.dragged_index().is_none() {
            let Some(index) = state.select_target(dy) else {
                return false;
            };
            state.start_dragging(index);
        }
        state.update_drag_offset(Vec2::new(0.0, dy));
        true
    }

    /// Handle the terminal update of a gesture.
    ///
    /// Without an active drag this is a no-op. An end event pointing in a
    /// disabled direction still releases the card, but as a cancellation.
    pub fn drag_ended(
        &self,
        state: &mut DeckState,
        event: &DragEvent,
        viewport: &Viewport,
    ) -> Option<Resolution> {
        let index = state.dragged_index()?;
        let event = if self.should_handle(event.translation.y) {
            *event
        } else {
            DragEvent::cancelled(event.start_location)
        };
        let policy = self.config.policy;
        let from = state.area(index);
        let changed_area = policy.should_change_area(state, index, &event, viewport);
        let velocity = event.velocity();
        let duration = policy.settle_duration(velocity.abs(), changed_area);
        state.end_dragging(changed_area)?;
        let to = if changed_area { from.toggled() } else { from };
        #[cfg(feature = "tracing")]
        tracing::debug!(index, ?from, ?to, velocity, "drag resolved");
        Some(Resolution {
            index,
            from,
            to,
            changed_area,
            velocity,
            duration,
        })
    }

    /// Abandon the in-flight gesture, returning the card to rest.
    pub fn cancel(&self, state: &mut DeckState, viewport: &Viewport) -> Option<Resolution> {
        self.drag_ended(state, &DragEvent::cancelled(kurbo::Point::ORIGIN), viewport)
    }
}
