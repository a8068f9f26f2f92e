// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure mapping from comparator state to CSS property values.
//!
//! Every type here implements [`fmt::Display`] producing the exact text to
//! assign to the corresponding inline style property, so a rendering layer
//! only has to copy strings.

use core::fmt;

use crate::clip::ClipBoundary;
use crate::slider::SliderPosition;
use crate::transform::ViewTransform;

/// Class toggled on the container while maximize mode is active.
pub const MAXIMIZED_CLASS: &str = "maximized";

/// `transform` property value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformStyle(pub ViewTransform);

impl fmt::Display for TransformStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ViewTransform { translation, scale } = self.0;
        write!(
            f,
            "translate({}px, {}px) scale({})",
            translation.x, translation.y, scale
        )
    }
}

/// `clip-path` property value: an `inset()` hiding one side of an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipInset {
    /// Hide this percentage of the image from the right edge.
    Right(f64),
    /// Hide this percentage of the image from the left edge.
    Left(f64),
}

impl ClipInset {
    /// Inset applied to the left (before) image.
    #[must_use]
    pub fn for_left_image(clip: ClipBoundary) -> Self {
        Self::Right(clip.left_inset())
    }

    /// Inset applied to the right (after) image.
    #[must_use]
    pub fn for_right_image(clip: ClipBoundary) -> Self {
        Self::Left(clip.right_inset())
    }
}

impl fmt::Display for ClipInset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Right(p) => write!(f, "inset(0 {p}% 0 0)"),
            Self::Left(p) => write!(f, "inset(0 0 0 {p}%)"),
        }
    }
}

/// A percentage length, e.g. for `left` or `padding-bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// `cursor` property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Remove any inline cursor.
    Unset,
    /// The platform default arrow.
    Default,
    /// Closed hand while panning.
    Grabbing,
    /// Horizontal resize arrows while moving the slider.
    EwResize,
}

impl Cursor {
    /// CSS keyword, or the empty string for [`Cursor::Unset`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Default => "default",
            Self::Grabbing => "grabbing",
            Self::EwResize => "ew-resize",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline styles for one image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageStyle {
    /// `transform` value.
    pub transform: TransformStyle,
    /// `clip-path` value.
    pub clip_path: ClipInset,
}

/// Everything a rendering layer needs to present the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparatorStyle {
    /// Styles for the left (before) image.
    pub left_image: ImageStyle,
    /// Styles for the right (after) image.
    pub right_image: ImageStyle,
    /// `left` of the slider handle.
    pub slider_left: Percent,
    /// `cursor` of the container.
    pub container_cursor: Cursor,
    /// `cursor` of the document body.
    pub body_cursor: Cursor,
    /// Whether [`MAXIMIZED_CLASS`] should be present on the container.
    pub maximized: bool,
}

impl ComparatorStyle {
    /// Builds the style for a displayed transform, clip boundary and slider.
    #[must_use]
    pub fn new(
        transform: ViewTransform,
        clip: ClipBoundary,
        slider: SliderPosition,
        maximized: bool,
    ) -> Self {
        let transform = TransformStyle(transform);
        Self {
            left_image: ImageStyle {
                transform,
                clip_path: ClipInset::for_left_image(clip),
            },
            right_image: ImageStyle {
                transform,
                clip_path: ClipInset::for_right_image(clip),
            },
            slider_left: Percent(slider.percent()),
            container_cursor: Cursor::Default,
            body_cursor: Cursor::Unset,
            maximized,
        }
    }
}

/// `padding-bottom` reserving space for an image's aspect ratio.
///
/// Returns `None` if either natural dimension is zero, i.e. the image has
/// not loaded.
#[must_use]
pub fn aspect_padding(natural_width: u32, natural_height: u32) -> Option<Percent> {
    if natural_width == 0 || natural_height == 0 {
        return None;
    }
    Some(Percent(
        f64::from(natural_height) / f64::from(natural_width) * 100.0,
    ))
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use kurbo::Vec2;

    use super::*;

    #[test]
    fn transform_text() {
        let xf = ViewTransform::new(Vec2::new(120.0, -40.0), 5.0);
        assert_eq!(
            TransformStyle(xf).to_string(),
            "translate(120px, -40px) scale(5)"
        );
        assert_eq!(
            TransformStyle(ViewTransform::IDENTITY).to_string(),
            "translate(0px, 0px) scale(1)"
        );
    }

    #[test]
    fn clip_text() {
        let clip = ClipBoundary::from_percent(30.0);
        assert_eq!(ClipInset::for_left_image(clip).to_string(), "inset(0 70% 0 0)");
        assert_eq!(ClipInset::for_right_image(clip).to_string(), "inset(0 0 0 30%)");
    }

    #[test]
    fn cursor_keywords() {
        assert_eq!(Cursor::Grabbing.to_string(), "grabbing");
        assert_eq!(Cursor::EwResize.to_string(), "ew-resize");
        assert_eq!(Cursor::Default.to_string(), "default");
        assert_eq!(Cursor::Unset.to_string(), "");
    }

    #[test]
    fn both_images_share_transform() {
        let xf = ViewTransform::new(Vec2::new(3.0, 4.0), 2.0);
        let style = ComparatorStyle::new(
            xf,
            ClipBoundary::from_percent(25.0),
            SliderPosition::from_percent(40.0),
            true,
        );
        assert_eq!(style.left_image.transform, style.right_image.transform);
        assert_eq!(style.slider_left.to_string(), "40%");
        assert!(style.maximized);
    }

    #[test]
    fn aspect_padding_guards_zero() {
        assert_eq!(aspect_padding(0, 0), None);
        assert_eq!(aspect_padding(800, 0), None);
        assert_eq!(aspect_padding(0, 600), None);
        assert_eq!(aspect_padding(800, 600), Some(Percent(75.0)));
        assert_eq!(aspect_padding(1000, 500).unwrap().to_string(), "50%");
    }
}
