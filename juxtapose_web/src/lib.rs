// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings for the Juxtapose before/after image comparator.
//!
//! This crate wires a [`juxtapose_view::Comparator`] to a DOM container
//! holding two stacked images. It creates the slider handle and maximize
//! toggle, listens for pointer, wheel, resize, key and load events, and
//! writes the resulting inline styles back to the elements.
//!
//! # Usage
//!
//! Markup:
//!
//! ```html
//! <div class="image-comparator">
//!   <img class="left-image" src="before.jpg">
//!   <img class="right-image" src="after.jpg">
//! </div>
//! ```
//!
//! From JavaScript, after loading the generated module:
//!
//! ```js
//! new ImageComparator('.image-comparator');
//! ```
//!
//! From Rust, either discover the images or pass them explicitly:
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn mount(
//!     container: web_sys::HtmlElement,
//!     before: web_sys::HtmlImageElement,
//!     after: web_sys::HtmlImageElement,
//! ) -> Result<juxtapose_web::ImageComparator, juxtapose_web::MountError> {
//!     juxtapose_web::ImageComparator::mount(container, before, after)
//! }
//! ```
//!
//! Notes:
//! - The widget does not inject CSS. The page is expected to stack the images
//!   (for example, absolutely positioned inside a relatively positioned
//!   container), position `.slider-handle` and `.maximized-icon`, and style
//!   `.maximized` as a full-viewport overlay.
//! - Both images must have the same intrinsic size; this is not validated.
//! - Dropping an [`ImageComparator`] mounted from Rust detaches all listeners
//!   and removes the slider handle and maximize toggle. Call
//!   `ImageComparator::forget` to keep it alive for the lifetime of the page.
//!   Instances created from JavaScript always live as long as the page, so
//!   the result of `new ImageComparator(...)` does not need to be kept.
//! - On targets other than `wasm32` only the target-independent pieces
//!   ([`MountError`], [`IconGlyph`], selector constants) are available.

mod error;
mod icon;
#[cfg(target_arch = "wasm32")]
mod widget;

pub use error::MountError;
pub use icon::IconGlyph;
#[cfg(target_arch = "wasm32")]
pub use widget::ImageComparator;

/// Selector locating the left (before) image inside the container.
pub const LEFT_IMAGE_SELECTOR: &str = "img.left-image";
/// Selector locating the right (after) image inside the container.
pub const RIGHT_IMAGE_SELECTOR: &str = "img.right-image";
/// Class of the slider handle element created on mount.
pub const SLIDER_CLASS: &str = "slider-handle";
/// Class of the maximize toggle element created on mount.
pub const MAXIMIZE_ICON_CLASS: &str = "maximized-icon";
