// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-time decisions: does the card change area, and how long does it settle.

use core::time::Duration;

use carddeck_state::{Area, DeckState};

use crate::event::DragEvent;
use crate::geometry::Viewport;

/// Rule used to decide whether a released card changes area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DecisionPolicy {
    /// Fling first, then predicted position plus travelled distance.
    ///
    /// - If `|velocity| > velocity_threshold`, the sign alone decides: an upper
    ///   card changes on downward momentum, a lower card on upward momentum.
    /// - Otherwise the card changes only if its predicted resting position lies
    ///   on the other side of the midline *and* it actually travelled more than
    ///   `distance_fraction` of the viewport height.
    Predictive {
        /// Momentum above which direction alone decides.
        velocity_threshold: f64,
        /// Minimum travel, as a fraction of the viewport height.
        distance_fraction: f64,
    },
    /// Current position or fling.
    ///
    /// An upper card changes once it is below the midline or flung downward
    /// faster than `velocity_threshold`; a lower card mirrors that upward.
    Positional {
        /// Momentum above which the card changes regardless of position.
        velocity_threshold: f64,
    },
}

impl DecisionPolicy {
    /// The default predictive rule.
    pub const PREDICTIVE: Self = Self::Predictive {
        velocity_threshold: 30.0,
        distance_fraction: 0.15,
    };

    /// The simpler position-or-fling rule.
    pub const POSITIONAL: Self = Self::Positional {
        velocity_threshold: 50.0,
    };

    /// Decide whether the card at `index`, released by `event`, changes area.
    ///
    /// Out-of-range indices never change area.
    pub fn should_change_area(
        &self,
        state: &DeckState,
        index: usize,
        event: &DragEvent,
        viewport: &Viewport,
    ) -> bool {
        if state.view(index).is_none() {
            return false;
        }
        let area = state.area(index);
        let velocity = event.velocity();
        match *self {
            Self::Predictive {
                velocity_threshold,
                distance_fraction,
            } => {
                if velocity.abs() > velocity_threshold {
                    return match area {
                        Area::Upper => velocity > 0.0,
                        Area::Lower => velocity < 0.0,
                    };
                }
                let predicted_y = viewport.resting_y(area) + event.predicted_end_translation.y;
                let crosses_midline = match area {
                    Area::Upper => predicted_y > 0.0,
                    Area::Lower => predicted_y < 0.0,
                };
                let travelled = event.translation.y.abs() > viewport.height() * distance_fraction;
                crosses_midline && travelled
            }
            Self::Positional { velocity_threshold } => {
                let current_y = viewport.resting_y(area) + event.translation.y;
                state.should_change_area(index, current_y, velocity, velocity_threshold)
            }
        }
    }

    /// How long the released card takes to settle, given `speed = |velocity|`.
    pub fn settle_duration(&self, speed: f64, changes_area: bool) -> Duration {
        if !changes_area {
            return Duration::from_millis(200);
        }
        match self {
            Self::Predictive { .. } => {
                if speed > 200.0 {
                    Duration::from_millis(250)
                } else if speed > 50.0 {
                    Duration::from_millis(350)
                } else {
                    Duration::from_millis(450)
                }
            }
            Self::Positional { .. } => Duration::from_secs_f64((speed / 1000.0).clamp(0.2, 0.5)),
        }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::PREDICTIVE
    }
}
