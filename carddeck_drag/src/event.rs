// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture events as delivered by the host's gesture recognizer.

use kurbo::{Point, Vec2};

/// Lifecycle phase of a drag event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragPhase {
    /// The pointer moved. Any number of these precede the end of a gesture.
    Changed,
    /// The gesture finished. Exactly one per gesture.
    Ended,
}

/// One drag update.
///
/// All vectors are relative to the gesture's start location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEvent {
    /// Whether the gesture is still moving or has ended.
    pub phase: DragPhase,
    /// Translation since the gesture began.
    pub translation: Vec2,
    /// Where the recognizer expects the translation to settle, given current momentum.
    pub predicted_end_translation: Vec2,
    /// Where the gesture began, in deck coordinates.
    pub start_location: Point,
}

impl DragEvent {
    /// A movement update.
    pub const fn changed(start_location: Point, translation: Vec2) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
            predicted_end_translation: translation,
            start_location,
        }
    }

    /// A terminal update.
    pub const fn ended(
        start_location: Point,
        translation: Vec2,
        predicted_end_translation: Vec2,
    ) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation,
            predicted_end_translation,
            start_location,
        }
    }

    /// Terminal update for a gesture the platform cancelled.
    ///
    /// Cancellation has no separate path: it ends the gesture with zero
    /// translation and zero momentum.
    pub const fn cancelled(start_location: Point) -> Self {
        Self::ended(start_location, Vec2::ZERO, Vec2::ZERO)
    }

    /// Vertical momentum: predicted end minus actual translation.
    pub fn velocity(&self) -> f64 {
        self.predicted_end_translation.y - self.translation.y
    }
}
