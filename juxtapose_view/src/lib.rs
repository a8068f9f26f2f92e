// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Juxtapose View: headless state for a before/after image comparator.
//!
//! Two images of identical size are stacked inside a container. A vertical
//! slider splits them: the left ("before") image shows left of the boundary,
//! the right ("after") image right of it. Both images can be zoomed with the
//! wheel and panned by dragging.
//!
//! This crate models all of that as plain data:
//! - [`Layout`]: the measured container and untransformed image rectangles.
//! - [`ViewTransform`]: the shared pan + zoom applied to both images.
//! - [`PanBounds`]: how far the images may be panned so that a zoomed image
//!   never exposes empty space inside the container.
//! - [`SliderPosition`] and [`ClipBoundary`]: where the slider sits and where
//!   that cuts the *rendered* images.
//! - [`Comparator`]: the state machine tying these together, driven by
//!   pointer, wheel, resize and key input.
//! - [`style`]: a pure mapping from state to CSS property values.
//!
//! It does **not** touch any rendering surface. A binding layer measures
//! elements, forwards input events, and writes the [`ComparatorStyle`] back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use juxtapose_gesture::PointerButton;
//! use juxtapose_view::{Comparator, ComparatorConfig, Layout, ZoomDirection};
//!
//! let mut cmp = Comparator::new(ComparatorConfig::default());
//! let container = Rect::new(0.0, 0.0, 1000.0, 500.0);
//! cmp.reset(Layout::capture(container, container));
//!
//! // Zoom in twice: 1.0 -> 1.2 -> 1.44.
//! cmp.zoom(ZoomDirection::In);
//! let scale = cmp.zoom(ZoomDirection::In);
//! assert!((scale - 1.44).abs() < 1e-9);
//!
//! // Drag the images; translation is committed on release and clamped.
//! cmp.begin_pan(PointerButton::Primary, Point::new(500.0, 250.0));
//! cmp.pan_to(Point::new(2000.0, 250.0));
//! cmp.end_pan();
//! // A 1000px image at 1.44x may move at most 220px to either side.
//! assert!((cmp.translation().x - 220.0).abs() < 1e-9);
//! assert_eq!(cmp.translation().y, 0.0);
//!
//! // Render.
//! let style = cmp.style();
//! assert_eq!(style.slider_left.to_string(), "50%");
//! ```
//!
//! ## Design notes
//!
//! - The clip boundary is measured against the image's current rendered
//!   rectangle, so zooming and panning change what a fixed slider position
//!   reveals. This keeps the boundary anchored to image content.
//! - Resizing the container (or toggling maximize mode) resets pan and zoom;
//!   the slider position is kept.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod clip;
mod comparator;
mod config;
mod layout;
mod slider;
pub mod style;
mod transform;

pub use bounds::{AxisBounds, PanBounds};
pub use clip::ClipBoundary;
pub use comparator::{ActiveGesture, Comparator};
pub use config::ComparatorConfig;
pub use layout::Layout;
pub use slider::SliderPosition;
pub use style::{ClipInset, ComparatorStyle, Cursor, ImageStyle, Percent, TransformStyle};
pub use transform::{ViewTransform, ZoomDirection};
