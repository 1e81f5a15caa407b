// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the deck store: areas and per-card view state.

use kurbo::Vec2;

/// The two zones a card can belong to.
///
/// `Lower` is the active, front-facing zone. `Upper` is the holding zone that
/// cards are swiped away into.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Area {
    /// Holding zone above the viewport.
    Upper,
    /// Front-facing zone.
    #[default]
    Lower,
}

impl Area {
    /// The other area.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
        }
    }

    /// True for [`Area::Upper`].
    pub const fn is_upper(self) -> bool {
        matches!(self, Self::Upper)
    }
}

/// Mutable record for one card.
///
/// `z_order` is assigned once by [`DeckState::initialize`](crate::DeckState::initialize)
/// and never changes afterwards; area changes leave it untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Area the card currently rests in.
    pub area: Area,
    /// Transient drag displacement. Zero unless [`ViewState::dragging`] is set.
    pub offset: Vec2,
    /// True only for the card tracked by the in-flight gesture.
    pub dragging: bool,
    /// Stacking key. Higher is nearer to the user.
    pub z_order: f64,
}

impl ViewState {
    /// A resting card in the lower area with the given z-order.
    pub const fn new(z_order: f64) -> Self {
        Self {
            area: Area::Lower,
            offset: Vec2::ZERO,
            dragging: false,
            z_order,
        }
    }
}
