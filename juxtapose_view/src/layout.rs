// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Measured geometry of the comparator container and its images.
///
/// Both rectangles are in page (client) coordinates and must be measured
/// while the images carry the identity transform, so that `image` is the
/// laid-out rectangle before any pan or zoom.
///
/// A default `Layout` is zero-sized; it is what you get before anything has
/// been laid out, and boundary clamping against it pins translation to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    viewport: Rect,
    image: Rect,
}

impl Layout {
    /// Zero-sized layout.
    pub const EMPTY: Self = Self {
        viewport: Rect::ZERO,
        image: Rect::ZERO,
    };

    /// Captures a layout from the container rectangle and the untransformed
    /// rectangle of the (left) image.
    ///
    /// Rectangles with negative extents are normalized with [`Rect::abs`].
    #[must_use]
    pub fn capture(viewport: Rect, image: Rect) -> Self {
        Self {
            viewport: viewport.abs(),
            image: image.abs(),
        }
    }

    /// Container rectangle in page coordinates.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Untransformed image rectangle in page coordinates.
    #[must_use]
    pub fn image(&self) -> Rect {
        self.image
    }

    /// Center of the untransformed image, relative to the viewport origin.
    #[must_use]
    pub fn image_center(&self) -> Point {
        (self.image.center() - self.viewport.origin()).to_point()
    }

    /// Returns `true` if either rectangle has no area, i.e. nothing is laid out yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewport.area() <= 0.0 || self.image.area() <= 0.0
    }

    /// Returns this layout shifted so that the viewport origin sits at `origin`.
    ///
    /// Page scrolling moves the container in client coordinates without
    /// changing its size; this keeps the captured geometry in step without a
    /// full re-measure.
    #[must_use]
    pub fn moved_to(&self, origin: Point) -> Self {
        let delta: Vec2 = origin - self.viewport.origin();
        Self {
            viewport: self.viewport + delta,
            image: self.image + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::Layout;

    #[test]
    fn image_center_is_relative_to_viewport() {
        let layout = Layout::capture(
            Rect::new(100.0, 50.0, 900.0, 650.0),
            Rect::new(100.0, 50.0, 900.0, 650.0),
        );
        assert_eq!(layout.image_center(), Point::new(400.0, 300.0));

        // Letterboxed image, offset inside the container.
        let layout = Layout::capture(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Rect::new(100.0, 0.0, 700.0, 600.0),
        );
        assert_eq!(layout.image_center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn default_layout_is_empty() {
        let layout = Layout::default();
        assert!(layout.is_empty());
        assert_eq!(layout, Layout::EMPTY);
        assert_eq!(layout.image_center(), Point::ZERO);
    }

    #[test]
    fn capture_normalizes_flipped_rects() {
        let layout = Layout::capture(
            Rect::new(800.0, 600.0, 0.0, 0.0),
            Rect::new(800.0, 600.0, 0.0, 0.0),
        );
        assert_eq!(layout.viewport(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(!layout.is_empty());
    }

    #[test]
    fn moved_to_keeps_relative_geometry() {
        let layout = Layout::capture(
            Rect::new(0.0, 200.0, 800.0, 800.0),
            Rect::new(100.0, 200.0, 700.0, 800.0),
        );
        let moved = layout.moved_to(Point::new(0.0, -100.0));

        assert_eq!(moved.viewport(), Rect::new(0.0, -100.0, 800.0, 500.0));
        assert_eq!(moved.image(), Rect::new(100.0, -100.0, 700.0, 500.0));
        assert_eq!(moved.image_center(), layout.image_center());
    }
}
