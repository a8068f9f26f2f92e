// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Horizontal position of the slider handle, as a percentage of the
/// container width. Always within `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SliderPosition(f64);

impl SliderPosition {
    /// Left edge of the container.
    pub const LEFT: Self = Self(0.0);
    /// Middle of the container.
    pub const CENTER: Self = Self(50.0);
    /// Right edge of the container.
    pub const RIGHT: Self = Self(100.0);

    /// Creates a position from a percentage, clamping it into `[0, 100]`.
    ///
    /// NaN maps to [`Self::LEFT`].
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::LEFT;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Position of a pointer at page x-coordinate `x` over `container`.
    ///
    /// A container with no width yields [`Self::LEFT`].
    #[must_use]
    pub fn from_pointer(x: f64, container: Rect) -> Self {
        let width = container.width();
        if width <= 0.0 {
            return Self::LEFT;
        }
        Self::from_percent((x - container.x0) / width * 100.0)
    }

    /// Percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Page x-coordinate of this position within `container`.
    #[must_use]
    pub fn x_in(self, container: Rect) -> f64 {
        container.x0 + container.width() * self.fraction()
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::CENTER
    }
}
