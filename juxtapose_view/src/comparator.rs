// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use juxtapose_gesture::{DragSession, PointerButton};
use kurbo::{Point, Rect, Vec2};

use crate::bounds::PanBounds;
use crate::clip::ClipBoundary;
use crate::config::ComparatorConfig;
use crate::layout::Layout;
use crate::slider::SliderPosition;
use crate::style::{ComparatorStyle, Cursor};
use crate::transform::{ViewTransform, ZoomDirection};

/// The pointer gesture currently in progress, if any.
///
/// At most one gesture is active at a time: a press on the slider handle
/// never starts an image pan and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ActiveGesture {
    /// No gesture.
    #[default]
    Idle,
    /// Panning the images.
    Pan(DragSession),
    /// Moving the slider handle.
    Slider,
}

/// Headless state of a before/after image comparator.
///
/// `Comparator` owns the committed pan/zoom transform, the measured
/// [`Layout`], the slider position, the maximize flag and the active gesture.
/// Input handlers call its methods and then render [`Comparator::style`].
///
/// Invariants maintained by every method:
/// - scale stays within `[1, max_scale]`;
/// - outside of a live pan preview, the committed translation lies within
///   [`Comparator::bounds`];
/// - the slider and clip boundary stay within `[0, 100]`.
#[derive(Clone, Debug)]
pub struct Comparator {
    config: ComparatorConfig,
    layout: Layout,
    transform: ViewTransform,
    slider: SliderPosition,
    maximized: bool,
    gesture: ActiveGesture,
}

impl Comparator {
    /// Creates a comparator with an empty layout and identity transform.
    #[must_use]
    pub fn new(config: ComparatorConfig) -> Self {
        Self {
            config,
            layout: Layout::EMPTY,
            transform: ViewTransform::IDENTITY,
            slider: config.initial_slider(),
            maximized: false,
            gesture: ActiveGesture::Idle,
        }
    }

    /// Configuration this comparator was created with.
    #[must_use]
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Current measured layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Committed transform, excluding any live pan offset.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Committed translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.transform.translation
    }

    /// Slider position.
    #[must_use]
    pub fn slider(&self) -> SliderPosition {
        self.slider
    }

    /// Whether maximize mode is active.
    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Gesture in progress.
    #[must_use]
    pub fn gesture(&self) -> ActiveGesture {
        self.gesture
    }

    /// Transform to display: the committed transform plus the offset of a
    /// pan in progress.
    #[must_use]
    pub fn displayed_transform(&self) -> ViewTransform {
        match self.gesture {
            ActiveGesture::Pan(session) => self.transform.translated(session.offset()),
            ActiveGesture::Idle | ActiveGesture::Slider => self.transform,
        }
    }

    /// Rendered rectangle of the images under the displayed transform.
    #[must_use]
    pub fn rendered_image_rect(&self) -> Rect {
        self.displayed_transform().apply_to_rect(self.layout.image())
    }

    /// Translation bounds at the current scale.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        PanBounds::compute(&self.layout, self.transform.scale)
    }

    /// Clip boundary for the current slider position and rendered image.
    ///
    /// Falls back to the slider percentage while the image has no width.
    #[must_use]
    pub fn clip(&self) -> ClipBoundary {
        let slider_x = self.slider.x_in(self.layout.viewport());
        ClipBoundary::at(slider_x, self.rendered_image_rect())
            .unwrap_or_else(|| ClipBoundary::from_percent(self.slider.percent()))
    }

    /// Maps the current state to inline style values.
    #[must_use]
    pub fn style(&self) -> ComparatorStyle {
        let mut style = ComparatorStyle::new(
            self.displayed_transform(),
            self.clip(),
            self.slider,
            self.maximized,
        );
        match self.gesture {
            ActiveGesture::Pan(_) => style.container_cursor = Cursor::Grabbing,
            ActiveGesture::Slider => style.body_cursor = Cursor::EwResize,
            ActiveGesture::Idle => {}
        }
        style
    }

    /// Resets the transform to identity, keeping the layout.
    ///
    /// Call this before measuring a new layout, so the image is measured
    /// untransformed, then pass the measurement to [`Comparator::set_layout`].
    pub fn reset_transform(&mut self) {
        self.transform = ViewTransform::IDENTITY;
        if let ActiveGesture::Pan(_) = self.gesture {
            self.gesture = ActiveGesture::Idle;
        }
    }

    /// Replaces the measured layout and re-clamps the committed translation.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.clamp_to_bounds();
    }

    /// Resets the transform and captures a new layout.
    ///
    /// This is the reaction to container resizes and maximize toggles: pan and
    /// zoom are not preserved, the slider position is.
    pub fn reset(&mut self, layout: Layout) {
        self.reset_transform();
        self.set_layout(layout);
    }

    /// Moves the captured layout so the viewport starts at `origin`.
    ///
    /// Used when the page scrolled since the layout was measured.
    pub fn sync_viewport_origin(&mut self, origin: Point) {
        if self.layout.viewport().origin() != origin {
            self.layout = self.layout.moved_to(origin);
        }
    }

    /// Applies one discrete zoom step and re-clamps. Returns the new scale.
    pub fn zoom(&mut self, direction: ZoomDirection) -> f64 {
        let factor = direction.factor(self.config.scale_step());
        self.set_scale(self.transform.scale * factor)
    }

    /// Sets the zoom factor directly, clamped to the configured range, and
    /// re-clamps translation. Returns the new scale.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        self.transform.scale = self.config.clamp_scale(scale);
        self.clamp_to_bounds();
        self.transform.scale
    }

    /// Starts panning at `pos` if `button` is primary and no gesture is active.
    ///
    /// Returns `true` if a pan started.
    pub fn begin_pan(&mut self, button: PointerButton, pos: Point) -> bool {
        if self.gesture != ActiveGesture::Idle {
            return false;
        }
        match DragSession::begin(button, pos) {
            Some(session) => {
                self.gesture = ActiveGesture::Pan(session);
                true
            }
            None => false,
        }
    }

    /// Updates a pan in progress with the pointer at `pos`.
    ///
    /// The offset is previewed through [`Comparator::displayed_transform`]
    /// without being committed or clamped. Returns `false` if no pan is active.
    pub fn pan_to(&mut self, pos: Point) -> bool {
        match &mut self.gesture {
            ActiveGesture::Pan(session) => {
                session.update(pos);
                true
            }
            _ => false,
        }
    }

    /// Ends a pan, committing its offset and re-clamping.
    ///
    /// Returns `false` if no pan was active.
    pub fn end_pan(&mut self) -> bool {
        let ActiveGesture::Pan(session) = self.gesture else {
            return false;
        };
        self.gesture = ActiveGesture::Idle;
        self.transform.translation += session.finish();
        self.clamp_to_bounds();
        true
    }

    /// Starts moving the slider if `button` is primary and no gesture is active.
    ///
    /// Returns `true` if the slider drag started.
    pub fn begin_slide(&mut self, button: PointerButton) -> bool {
        if self.gesture != ActiveGesture::Idle || !button.starts_gesture() {
            return false;
        }
        self.gesture = ActiveGesture::Slider;
        true
    }

    /// Moves the slider to follow a pointer at page x-coordinate `x`.
    ///
    /// Returns `false` if no slider drag is active.
    pub fn slide_to(&mut self, x: f64) -> bool {
        if self.gesture != ActiveGesture::Slider {
            return false;
        }
        self.slider = SliderPosition::from_pointer(x, self.layout.viewport());
        true
    }

    /// Ends a slider drag. Returns `false` if none was active.
    pub fn end_slide(&mut self) -> bool {
        if self.gesture != ActiveGesture::Slider {
            return false;
        }
        self.gesture = ActiveGesture::Idle;
        true
    }

    /// Places the slider directly.
    pub fn set_slider(&mut self, position: SliderPosition) {
        self.slider = position;
    }

    /// Routes a pointer-move to whichever gesture is active.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        match self.gesture {
            ActiveGesture::Pan(_) => self.pan_to(pos),
            ActiveGesture::Slider => self.slide_to(pos.x),
            ActiveGesture::Idle => false,
        }
    }

    /// Routes a pointer-up to whichever gesture is active.
    pub fn pointer_up(&mut self) -> bool {
        match self.gesture {
            ActiveGesture::Pan(_) => self.end_pan(),
            ActiveGesture::Slider => self.end_slide(),
            ActiveGesture::Idle => false,
        }
    }

    /// Flips maximize mode and resets the transform. Returns the new mode.
    ///
    /// The container's size changes with the mode, so the caller must
    /// re-measure and pass the result to [`Comparator::set_layout`].
    pub fn toggle_maximize(&mut self) -> bool {
        self.maximized = !self.maximized;
        self.reset_transform();
        self.maximized
    }

    /// Handles the Escape key: leaves maximize mode if it is active.
    ///
    /// Returns `true` if the mode changed; in that case the caller must
    /// re-measure as after [`Comparator::toggle_maximize`].
    pub fn escape(&mut self) -> bool {
        if self.maximized {
            self.toggle_maximize();
            true
        } else {
            false
        }
    }

    fn clamp_to_bounds(&mut self) {
        let bounds = self.bounds();
        if !bounds.contains(self.transform.translation) {
            self.transform.translation = bounds.clamp(self.transform.translation);
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(ComparatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use juxtapose_gesture::PointerButton;
    use kurbo::{Point, Rect, Vec2};

    use super::{ActiveGesture, Comparator};
    use crate::{Cursor, Layout, SliderPosition, ZoomDirection};

    fn square_layout() -> Layout {
        Layout::capture(
            Rect::new(0.0, 0.0, 1000.0, 500.0),
            Rect::new(0.0, 0.0, 1000.0, 500.0),
        )
    }

    #[test]
    fn new_comparator_is_idle_and_centered() {
        let cmp = Comparator::default();
        assert_eq!(cmp.scale(), 1.0);
        assert_eq!(cmp.translation(), Vec2::ZERO);
        assert_eq!(cmp.slider(), SliderPosition::CENTER);
        assert_eq!(cmp.gesture(), ActiveGesture::Idle);
        assert!(!cmp.is_maximized());
    }

    #[test]
    fn zoom_out_at_one_is_noop() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        assert_eq!(cmp.zoom(ZoomDirection::Out), 1.0);
    }

    #[test]
    fn pan_preview_is_not_committed_until_release() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        cmp.set_scale(4.0);

        assert!(cmp.begin_pan(PointerButton::Primary, Point::new(100.0, 100.0)));
        assert!(cmp.pan_to(Point::new(150.0, 80.0)));
        assert_eq!(cmp.translation(), Vec2::ZERO);
        assert_eq!(cmp.displayed_transform().translation, Vec2::new(50.0, -20.0));
        assert_eq!(cmp.style().container_cursor, Cursor::Grabbing);

        assert!(cmp.end_pan());
        assert_eq!(cmp.translation(), Vec2::new(50.0, -20.0));
        assert_eq!(cmp.gesture(), ActiveGesture::Idle);
        assert_eq!(cmp.style().container_cursor, Cursor::Default);
    }

    #[test]
    fn secondary_button_does_not_pan() {
        let mut cmp = Comparator::default();
        assert!(!cmp.begin_pan(PointerButton::Secondary, Point::ZERO));
        assert!(!cmp.begin_slide(PointerButton::Auxiliary));
        assert_eq!(cmp.gesture(), ActiveGesture::Idle);
        assert!(!cmp.pan_to(Point::new(5.0, 5.0)));
        assert!(!cmp.end_pan());
    }

    #[test]
    fn gestures_are_exclusive() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());

        assert!(cmp.begin_slide(PointerButton::Primary));
        assert!(!cmp.begin_pan(PointerButton::Primary, Point::ZERO));
        assert!(cmp.pointer_move(Point::new(250.0, 999.0)));
        assert_eq!(cmp.slider().percent(), 25.0);
        assert_eq!(cmp.style().body_cursor, Cursor::EwResize);
        assert!(cmp.pointer_up());
        assert_eq!(cmp.style().body_cursor, Cursor::Unset);

        assert!(cmp.begin_pan(PointerButton::Primary, Point::ZERO));
        assert!(!cmp.begin_slide(PointerButton::Primary));
        assert!(!cmp.slide_to(900.0));
        assert!(cmp.pointer_up());
        assert!(!cmp.pointer_up());
    }

    #[test]
    fn pan_at_scale_one_snaps_back() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        cmp.begin_pan(PointerButton::Primary, Point::ZERO);
        cmp.pan_to(Point::new(300.0, 300.0));
        cmp.end_pan();
        assert_eq!(cmp.translation(), Vec2::ZERO);
    }

    #[test]
    fn zooming_out_reclamps_translation() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        cmp.set_scale(3.0);
        cmp.begin_pan(PointerButton::Primary, Point::ZERO);
        cmp.pan_to(Point::new(-900.0, 400.0));
        cmp.end_pan();
        // At scale 3 a 1000x500 image may move 1000px horizontally and 500px vertically.
        assert_eq!(cmp.translation(), Vec2::new(-900.0, 400.0));

        cmp.set_scale(2.0);
        assert_eq!(cmp.translation(), Vec2::new(-500.0, 250.0));
    }

    #[test]
    fn clip_follows_rendered_image() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        assert_eq!(cmp.clip().percent(), 50.0);

        // Zoomed 2x about the center: the image spans -500..1500, so the
        // container midpoint is still the image midpoint.
        cmp.set_scale(2.0);
        assert_eq!(cmp.clip().percent(), 50.0);

        // Pan right by 250px: image spans -250..1750, slider at 500 sits at 37.5%.
        cmp.begin_pan(PointerButton::Primary, Point::ZERO);
        cmp.pan_to(Point::new(250.0, 0.0));
        assert_eq!(cmp.clip().percent(), 37.5);
        cmp.end_pan();
        assert_eq!(cmp.clip().percent(), 37.5);
    }

    #[test]
    fn clip_falls_back_to_slider_without_layout() {
        let mut cmp = Comparator::default();
        cmp.set_slider(SliderPosition::from_percent(30.0));
        assert_eq!(cmp.clip().percent(), 30.0);
    }

    #[test]
    fn maximize_and_escape() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        assert!(!cmp.escape());

        cmp.set_scale(4.0);
        assert!(cmp.toggle_maximize());
        assert_eq!(cmp.scale(), 1.0);
        assert!(cmp.style().maximized);

        assert!(cmp.escape());
        assert!(!cmp.is_maximized());
        assert!(!cmp.escape());
    }

    #[test]
    fn reset_abandons_pan_but_keeps_slider() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        cmp.set_slider(SliderPosition::from_percent(80.0));
        cmp.set_scale(2.0);
        cmp.begin_pan(PointerButton::Primary, Point::ZERO);
        cmp.pan_to(Point::new(40.0, 40.0));

        cmp.reset(square_layout());
        assert_eq!(cmp.gesture(), ActiveGesture::Idle);
        assert_eq!(cmp.displayed_transform().translation, Vec2::ZERO);
        assert_eq!(cmp.slider().percent(), 80.0);
    }

    #[test]
    fn sync_viewport_origin_tracks_scrolling() {
        let mut cmp = Comparator::default();
        cmp.set_layout(square_layout());
        cmp.sync_viewport_origin(Point::new(0.0, -200.0));
        assert_eq!(cmp.layout().viewport(), Rect::new(0.0, -200.0, 1000.0, 300.0));

        cmp.begin_slide(PointerButton::Primary);
        cmp.slide_to(750.0);
        assert_eq!(cmp.slider().percent(), 75.0);
        assert_eq!(cmp.clip().percent(), 75.0);
    }
}
