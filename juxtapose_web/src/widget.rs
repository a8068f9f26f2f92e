// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use juxtapose_gesture::PointerButton;
use juxtapose_view::style::{ImageStyle, MAXIMIZED_CLASS, aspect_padding};
use juxtapose_view::{Comparator, ComparatorConfig, Layout, ZoomDirection};
use kurbo::{Point, Rect};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent, WheelEvent,
};

use crate::error::MountError;
use crate::icon::IconGlyph;
use crate::{LEFT_IMAGE_SELECTOR, MAXIMIZE_ICON_CLASS, RIGHT_IMAGE_SELECTOR, SLIDER_CLASS};

/// A before/after image comparator mounted on a DOM container.
///
/// Dropping a value built from Rust detaches its listeners and removes the
/// slider handle and maximize toggle. Values built through the JavaScript
/// constructors are detached from their wrapper and live with the page.
#[wasm_bindgen]
#[derive(Debug)]
pub struct ImageComparator {
    inner: Rc<Inner>,
    listeners: Vec<EventListener>,
}

/// Document-level listeners of the gesture in progress.
///
/// They exist only between pointer-down and pointer-up; dropping the session
/// unsubscribes them.
#[derive(Debug)]
struct GestureSession {
    _on_move: EventListener,
    _on_up: EventListener,
}

#[derive(Debug)]
struct Inner {
    comparator: RefCell<Comparator>,
    document: Document,
    container: HtmlElement,
    left: HtmlImageElement,
    right: HtmlImageElement,
    slider: HtmlElement,
    icon: HtmlElement,
    gesture: RefCell<Option<GestureSession>>,
}

impl ImageComparator {
    /// Mounts a comparator on `container` using explicit image handles.
    ///
    /// Fails if `left` and `right` are the same element or if the helper
    /// elements cannot be created.
    pub fn mount(
        container: HtmlElement,
        left: HtmlImageElement,
        right: HtmlImageElement,
    ) -> Result<Self, MountError> {
        Self::mount_with_config(container, left, right, ComparatorConfig::default())
    }

    /// Like [`ImageComparator::mount`], with a custom configuration.
    pub fn mount_with_config(
        container: HtmlElement,
        left: HtmlImageElement,
        right: HtmlImageElement,
        config: ComparatorConfig,
    ) -> Result<Self, MountError> {
        if left == right {
            return Err(MountError::SameImage);
        }
        let document = container.owner_document().ok_or(MountError::NoDocument)?;

        let slider = create_div(&document, SLIDER_CLASS)?;
        let icon = create_div(&document, MAXIMIZE_ICON_CLASS)?;
        icon.set_inner_html(IconGlyph::for_state(false).markup());

        // Dropping `inner` on any error below removes whatever was attached.
        let inner = Rc::new(Inner {
            comparator: RefCell::new(Comparator::new(config)),
            document,
            container,
            left,
            right,
            slider,
            icon,
            gesture: RefCell::new(None),
        });
        let listeners = install_listeners(&inner)?;
        inner.container.append_child(&inner.slider)?;
        inner.container.append_child(&inner.icon)?;

        inner.reset();
        if inner.left.complete() {
            inner.apply_aspect_padding();
        }
        gloo::console::log!("juxtapose: comparator mounted");
        Ok(Self { inner, listeners })
    }

    /// Mounts on `container`, discovering `img.left-image` and `img.right-image`.
    pub fn from_element(container: HtmlElement) -> Result<Self, MountError> {
        let left = find_image(&container, LEFT_IMAGE_SELECTOR)?.ok_or(MountError::MissingLeftImage)?;
        let right =
            find_image(&container, RIGHT_IMAGE_SELECTOR)?.ok_or(MountError::MissingRightImage)?;
        Self::mount(container, left, right)
    }

    /// Mounts on the first element matching `selector`.
    pub fn from_selector(selector: &str) -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(MountError::NoDocument)?;
        let container = document
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MountError::ContainerNotFound(selector.to_owned()))?;
        Self::from_element(container)
    }

    /// Current state, for inspection.
    pub fn comparator(&self) -> Comparator {
        self.inner.comparator.borrow().clone()
    }

    /// Keeps the comparator and its listeners alive for the rest of the page's lifetime.
    pub fn forget(self) {
        drop(self.detached());
    }

    /// Hands ownership of the listeners and state to the page.
    ///
    /// The returned value still shares the state, but dropping it no longer
    /// detaches anything.
    fn detached(mut self) -> Self {
        for listener in self.listeners.drain(..) {
            listener.forget();
        }
        std::mem::forget(Rc::clone(&self.inner));
        self
    }
}

#[wasm_bindgen]
impl ImageComparator {
    /// JavaScript constructor: `new ImageComparator(selector)`.
    ///
    /// The widget stays mounted for the rest of the page's lifetime, even
    /// after the returned object is garbage-collected or freed.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<Self, JsError> {
        Ok(Self::from_selector(selector)?.detached())
    }

    /// JavaScript `ImageComparator.fromElement(container)`.
    ///
    /// Like the constructor, the widget outlives the returned object.
    #[wasm_bindgen(js_name = fromElement)]
    pub fn from_element_js(container: HtmlElement) -> Result<Self, JsError> {
        Ok(Self::from_element(container)?.detached())
    }

    /// Enters or leaves maximize mode.
    #[wasm_bindgen(js_name = toggleMaximize)]
    pub fn toggle_maximize(&self) {
        self.inner.toggle_maximize();
    }

    /// Resets pan and zoom and re-measures the layout.
    pub fn reset(&self) {
        self.inner.reset();
    }

    /// Slider position in percent of the container width.
    #[wasm_bindgen(js_name = sliderPercent)]
    pub fn slider_percent(&self) -> f64 {
        self.inner.comparator.borrow().slider().percent()
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.inner.comparator.borrow().scale()
    }

    /// Whether maximize mode is active.
    #[wasm_bindgen(js_name = isMaximized)]
    pub fn is_maximized(&self) -> bool {
        self.inner.comparator.borrow().is_maximized()
    }
}

impl Inner {
    fn measure(&self) -> Layout {
        Layout::capture(element_rect(&self.container), element_rect(&self.left))
    }

    /// Writes transform, clip and slider placement.
    fn render(&self) {
        let style = self.comparator.borrow().style();
        apply_image_style(&self.left, &style.left_image);
        apply_image_style(&self.right, &style.right_image);
        set_style(&self.slider, "left", &style.slider_left.to_string());
    }

    /// Writes container and body cursors. Only called when a gesture starts
    /// or ends so that page-level cursors are left alone otherwise.
    fn render_cursors(&self) {
        let style = self.comparator.borrow().style();
        set_style(&self.container, "cursor", style.container_cursor.as_str());
        if let Some(body) = self.document.body() {
            set_style(&body, "cursor", style.body_cursor.as_str());
        }
    }

    fn reset(&self) {
        self.comparator.borrow_mut().reset_transform();
        self.render();
        // Measured with the identity transform applied.
        let layout = self.measure();
        self.comparator.borrow_mut().set_layout(layout);
        self.render();
    }

    fn sync_viewport_origin(&self) {
        let origin = element_rect(&self.container).origin();
        self.comparator.borrow_mut().sync_viewport_origin(origin);
    }

    fn toggle_maximize(&self) {
        let maximized = self.comparator.borrow_mut().toggle_maximize();
        self.apply_maximized(maximized);
        self.reset();
    }

    fn escape(&self) {
        let changed = self.comparator.borrow_mut().escape();
        if changed {
            self.apply_maximized(false);
            self.reset();
        }
    }

    fn apply_maximized(&self, maximized: bool) {
        if let Err(err) = self
            .container
            .class_list()
            .toggle_with_force(MAXIMIZED_CLASS, maximized)
        {
            gloo::console::warn!("juxtapose: failed to toggle maximize class", err);
        }
        self.icon
            .set_inner_html(IconGlyph::for_state(maximized).markup());
        gloo::console::log!("juxtapose: maximized", maximized);
    }

    fn apply_aspect_padding(&self) {
        let left = &self.left;
        if let Some(padding) = aspect_padding(left.natural_width(), left.natural_height()) {
            set_style(&self.container, "padding-bottom", &padding.to_string());
        }
    }

    fn end_gesture(&self) {
        let session = self.gesture.borrow_mut().take();
        drop(session);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.slider.remove();
        self.icon.remove();
        // Mid-gesture drop: the body cursor was set by this widget.
        if self.gesture.get_mut().take().is_some()
            && let Some(body) = self.document.body()
        {
            set_style(&body, "cursor", "");
        }
    }
}

fn install_listeners(inner: &Rc<Inner>) -> Result<Vec<EventListener>, MountError> {
    let window = inner
        .document
        .default_view()
        .ok_or(MountError::NoDocument)?;
    let mut listeners = Vec::with_capacity(7);

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new_with_options(
        &inner.container,
        "pointerdown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(inner) = weak.upgrade() else { return };
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            inner.sync_viewport_origin();
            let button = PointerButton::from_dom(event.button());
            let started = inner
                .comparator
                .borrow_mut()
                .begin_pan(button, client_point(event));
            if started {
                event.prevent_default();
                start_gesture(&inner);
            }
        },
    ));

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new_with_options(
        &inner.slider,
        "pointerdown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(inner) = weak.upgrade() else { return };
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let button = PointerButton::from_dom(event.button());
            if !button.starts_gesture() {
                return;
            }
            // Keep the container from starting a pan.
            event.stop_propagation();
            inner.sync_viewport_origin();
            let started = inner.comparator.borrow_mut().begin_slide(button);
            if started {
                event.prevent_default();
                start_gesture(&inner);
            }
        },
    ));

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new_with_options(
        &inner.container,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(inner) = weak.upgrade() else { return };
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            // Keep the page from scrolling.
            wheel.prevent_default();
            inner.sync_viewport_origin();
            let direction = ZoomDirection::from_wheel_delta_y(wheel.delta_y());
            inner.comparator.borrow_mut().zoom(direction);
            inner.render();
        },
    ));

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new(&inner.icon, "click", move |_event| {
        if let Some(inner) = weak.upgrade() {
            inner.toggle_maximize();
        }
    }));

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new(&inner.left, "load", move |_event| {
        if let Some(inner) = weak.upgrade() {
            inner.apply_aspect_padding();
            inner.reset();
        }
    }));

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new(&window, "resize", move |_event| {
        if let Some(inner) = weak.upgrade() {
            inner.reset();
        }
    }));

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new(&window, "keyup", move |event: &Event| {
        let Some(inner) = weak.upgrade() else { return };
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape {
            inner.escape();
        }
    }));

    Ok(listeners)
}

/// Subscribes document-level move/up listeners for the gesture that was just
/// started on the comparator.
fn start_gesture(inner: &Rc<Inner>) {
    let weak: Weak<Inner> = Rc::downgrade(inner);
    let on_move = EventListener::new(&inner.document, "pointermove", move |event: &Event| {
        let Some(inner) = weak.upgrade() else { return };
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let moved = inner
            .comparator
            .borrow_mut()
            .pointer_move(client_point(event));
        if moved {
            inner.render();
        }
    });

    let weak: Weak<Inner> = Rc::downgrade(inner);
    let on_up = EventListener::new(&inner.document, "pointerup", move |_event| {
        let Some(inner) = weak.upgrade() else { return };
        // A reset during the gesture may already have abandoned it; cursors
        // are restored either way.
        let ended = inner.comparator.borrow_mut().pointer_up();
        if ended {
            inner.render();
        }
        inner.render_cursors();
        inner.end_gesture();
    });

    *inner.gesture.borrow_mut() = Some(GestureSession {
        _on_move: on_move,
        _on_up: on_up,
    });
    inner.render_cursors();
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, MountError> {
    let element = document.create_element("div")?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::Dom(format!("created <div class=\"{class}\"> is not an HTMLElement")))
}

fn find_image(container: &HtmlElement, selector: &str) -> Result<Option<HtmlImageElement>, MountError> {
    Ok(container
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok()))
}

fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::from_origin_size((rect.x(), rect.y()), (rect.width(), rect.height()))
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn apply_image_style(image: &HtmlImageElement, style: &ImageStyle) {
    set_style(image, "transform", &style.transform.to_string());
    set_style(image, "clip-path", &style.clip_path.to_string());
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        gloo::console::warn!("juxtapose: failed to set style", property, err);
    }
}
