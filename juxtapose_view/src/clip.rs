// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Where the reveal boundary cuts the images, as a percentage of the
/// rendered image width. Always within `[0, 100]`.
///
/// The left image shows everything left of the boundary and the right image
/// everything right of it, so the two masks never overlap and leave no gap.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ClipBoundary(f64);

impl ClipBoundary {
    /// Left image fully hidden, right image fully shown.
    pub const START: Self = Self(0.0);
    /// Left image fully shown, right image fully hidden.
    pub const END: Self = Self(100.0);

    /// Boundary for a slider at page x-coordinate `slider_x` over an image
    /// rendered at `image`.
    ///
    /// The boundary is relative to the image's *rendered* rectangle, so the
    /// same slider position reveals different image content as the view is
    /// panned and zoomed. Returns `None` if the image has no width yet.
    #[must_use]
    pub fn at(slider_x: f64, image: Rect) -> Option<Self> {
        let width = image.width();
        if width.is_nan() || width <= 0.0 || !slider_x.is_finite() {
            return None;
        }
        Some(Self::from_percent((slider_x - image.x0) / width * 100.0))
    }

    /// Creates a boundary from a percentage, clamping it into `[0, 100]`.
    ///
    /// NaN maps to [`Self::START`].
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::START;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Percentage of the image width shown by the left image.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Inset hiding the right part of the left image.
    #[must_use]
    pub fn left_inset(self) -> f64 {
        100.0 - self.0
    }

    /// Inset hiding the left part of the right image.
    #[must_use]
    pub fn right_inset(self) -> f64 {
        self.0
    }
}
