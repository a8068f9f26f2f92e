// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Juxtapose Gesture: pointer gesture state for the image comparator.
//!
//! This crate holds the small amount of state that has to survive between
//! pointer events of a single gesture:
//!
//! - [`button`]: map platform button codes onto [`PointerButton`] and decide
//!   whether a press may start a gesture at all.
//! - [`drag`]: a [`DragSession`] value recording where a drag started and how
//!   far the pointer has travelled since.
//!
//! A drag session is an ordinary value owned by whoever is handling the
//! gesture. Ending the gesture means consuming the session; there is no global
//! handler registration to undo. Platform glue (for example, document-level
//! pointer listeners in a browser) is expected to be stored next to the
//! session and dropped together with it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use juxtapose_gesture::{DragSession, PointerButton};
//!
//! // Secondary clicks never start a drag.
//! assert!(DragSession::begin(PointerButton::Secondary, Point::ZERO).is_none());
//!
//! let mut session = DragSession::begin(PointerButton::Primary, Point::new(10.0, 10.0)).unwrap();
//! session.update(Point::new(25.0, 4.0));
//! assert_eq!(session.offset(), Vec2::new(15.0, -6.0));
//!
//! // Pointer-up commits the accumulated offset.
//! assert_eq!(session.finish(), Vec2::new(15.0, -6.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod button;
pub mod drag;

pub use button::PointerButton;
pub use drag::DragSession;
