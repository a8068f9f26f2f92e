// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::layout::Layout;

/// Permissible translation range along one axis.
///
/// `lower <= upper` always holds. When the image does not exceed the
/// viewport on this axis both ends are `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    /// Smallest allowed translation.
    pub lower: f64,
    /// Largest allowed translation.
    pub upper: f64,
}

impl AxisBounds {
    /// Range that pins translation to zero.
    pub const PINNED: Self = Self {
        lower: 0.0,
        upper: 0.0,
    };

    /// Computes the range for one axis.
    ///
    /// - `image_size`: rendered (scaled) image extent.
    /// - `image_center`: untransformed image center relative to the viewport start.
    /// - `view_size`: viewport extent.
    ///
    /// With translation in the returned range, the image's near edge stays at
    /// or before the viewport start and its far edge at or after the viewport end.
    #[must_use]
    pub fn for_axis(image_size: f64, image_center: f64, view_size: f64) -> Self {
        if image_size > view_size {
            let upper = image_size / 2.0 - image_center;
            Self {
                lower: upper - (image_size - view_size),
                upper,
            }
        } else {
            Self::PINNED
        }
    }

    /// Clamps `value` into this range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within this range.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Translation bounds on both axes for a given layout and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Horizontal range.
    pub x: AxisBounds,
    /// Vertical range.
    pub y: AxisBounds,
}

impl PanBounds {
    /// Computes the bounds for `layout` with the images drawn at `scale`.
    #[must_use]
    pub fn compute(layout: &Layout, scale: f64) -> Self {
        let size = layout.image().size() * scale;
        let view = layout.viewport().size();
        let center = layout.image_center();
        Self {
            x: AxisBounds::for_axis(size.width, center.x, view.width),
            y: AxisBounds::for_axis(size.height, center.y, view.height),
        }
    }

    /// Clamps a translation into these bounds.
    #[must_use]
    pub fn clamp(&self, translation: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(translation.x), self.y.clamp(translation.y))
    }

    /// Returns `true` if `translation` needs no clamping.
    #[must_use]
    pub fn contains(&self, translation: Vec2) -> bool {
        self.x.contains(translation.x) && self.y.contains(translation.y)
    }
}
