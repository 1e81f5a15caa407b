// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided viewport geometry.

use carddeck_state::Area;
use kurbo::{Insets, Size};

/// The visible region a deck is laid out in.
///
/// Only the height and the vertical safe-area insets matter for the drag
/// decision. Coordinates follow the usual UI convention: `y` grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Size of the deck's frame.
    pub size: Size,
    /// Safe-area insets; `y0` is the top inset and `y1` the bottom inset.
    pub safe_area: Insets,
}

impl Viewport {
    /// A viewport with no safe-area insets.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            safe_area: Insets::ZERO,
        }
    }

    /// A viewport of `height` with the given top and bottom insets.
    pub fn from_height(height: f64, top_inset: f64, bottom_inset: f64) -> Self {
        Self {
            size: Size::new(0.0, height),
            safe_area: Insets::new(0.0, top_inset, 0.0, bottom_inset),
        }
    }

    /// Frame height.
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// Vertical centre of a resting card in `area`.
    ///
    /// Lower cards sit at half the viewport height. Upper cards sit a full
    /// frame above that, pushed past both safe-area insets so they are off screen.
    pub fn resting_y(&self, area: Area) -> f64 {
        let half = self.size.height / 2.0;
        match area {
            Area::Upper => -(self.safe_area.y0 + self.safe_area.y1 + half),
            Area::Lower => half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_positions() {
        let vp = Viewport::from_height(800.0, 40.0, 20.0);
        assert_eq!(vp.resting_y(Area::Lower), 400.0);
        assert_eq!(vp.resting_y(Area::Upper), -460.0);
    }

    #[test]
    fn no_insets_is_symmetric() {
        let vp = Viewport::new(Size::new(300.0, 600.0));
        assert_eq!(vp.height(), 600.0);
        assert_eq!(vp.resting_y(Area::Upper), -vp.resting_y(Area::Lower));
    }
}
