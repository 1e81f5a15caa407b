// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe directions, used to disable parts of the drag gesture.

bitflags::bitflags! {
    /// A set of vertical swipe directions.
    ///
    /// Hosts put directions into
    /// [`DragConfig::disabled_directions`](crate::DragConfig::disabled_directions)
    /// to stop the controller from reacting to them.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ScrollDirection: u8 {
        /// Swiping up (negative vertical translation).
        const UP   = 0b0000_0001;
        /// Swiping down (positive vertical translation).
        const DOWN = 0b0000_0010;
        /// Both vertical directions.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// Every direction the deck reacts to. Same as [`ScrollDirection::VERTICAL`].
        const ALL = Self::VERTICAL.bits();
    }
}

impl ScrollDirection {
    /// Direction of a vertical translation, or empty for zero.
    pub fn from_translation(dy: f64) -> Self {
        if dy < 0.0 {
            Self::UP
        } else if dy > 0.0 {
            Self::DOWN
        } else {
            Self::empty()
        }
    }

    /// True if a gesture translating by `dy` may be handled when `self` is the
    /// disabled set.
    ///
    /// Disabling [`ScrollDirection::ALL`] blocks every gesture, including ones
    /// that have not moved vertically yet.
    pub fn allows(self, dy: f64) -> bool {
        if self.contains(Self::ALL) {
            return false;
        }
        !self.intersects(Self::from_translation(dy))
    }
}
