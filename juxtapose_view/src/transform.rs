// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Pan + zoom applied identically to both images.
///
/// The transform mirrors CSS `translate(x, y) scale(s)` with the default
/// `transform-origin` of the element's center: the image is scaled about its
/// own center and then moved by `translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Translation in device pixels.
    pub translation: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewTransform {
    /// No translation, scale `1`.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from a translation and a scale.
    #[must_use]
    pub const fn new(translation: Vec2, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// Returns this transform with `offset` added to the translation.
    #[must_use]
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            translation: self.translation + offset,
            ..self
        }
    }

    /// Returns `true` if this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Affine equivalent of this transform for an element whose
    /// untransformed center is `origin`.
    #[must_use]
    pub fn to_affine(self, origin: Point) -> Affine {
        let origin = origin.to_vec2();
        Affine::translate(origin + self.translation)
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }

    /// Maps an untransformed element rectangle to its rendered rectangle.
    #[must_use]
    pub fn apply_to_rect(self, rect: Rect) -> Rect {
        Rect::from_center_size(rect.center() + self.translation, rect.size() * self.scale)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Direction of a single discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Enlarge the images.
    In,
    /// Shrink the images.
    Out,
}

impl ZoomDirection {
    /// Interprets a DOM `WheelEvent.deltaY`.
    ///
    /// Scrolling up (negative delta) zooms in. Any other value, including
    /// zero, zooms out.
    #[must_use]
    pub fn from_wheel_delta_y(delta_y: f64) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }

    /// Factor to multiply the scale by for a step of size `step`.
    #[must_use]
    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::In => 1.0 + step,
            Self::Out => 1.0 - step,
        }
    }
}
