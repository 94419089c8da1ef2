//! Browser glue: interval-driven effects as a hook, a cancellable
//! animation-frame loop, and coalesced scroll listeners.
//!
//! Everything registered here hands its canceller to a [`Region`], so a
//! section unmount tears down listeners, intervals and pending frames in
//! one pass.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::sequencer::effect::TimerEffect;
use crate::sequencer::region::Region;

/// Drive a [`TimerEffect`] on its own interval and re-render on every
/// tick. The interval lives for the component's lifetime; the region
/// named `name` cancels it on unmount.
#[hook]
pub fn use_timer_effect<T>(name: &'static str, init: impl FnOnce() -> T) -> UseStateHandle<T>
where
    T: TimerEffect + Clone + 'static,
{
    let state = use_state(init);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let mut region = Region::new(name);
                // The live copy ticks here; renders get snapshots of it.
                let model = Rc::new(RefCell::new((*state).clone()));
                let period = model.borrow().interval_ms();
                let interval = Interval::new(period, move || {
                    let mut current = model.borrow_mut();
                    current.tick();
                    state.set((*current).clone());
                });
                region.defer(move || drop(interval));
                move || drop(region)
            },
            (),
        );
    }
    state
}

/// A requestAnimationFrame loop that re-arms itself every frame and
/// stops for good when dropped. The callback receives the frame
/// timestamp in milliseconds.
pub struct RafLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl RafLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
            Rc::new(RefCell::new(None));

        let id_slot = raf_id.clone();
        let self_slot = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            on_frame(timestamp);
            // Re-arm unless the loop was cancelled during the frame.
            if let Some(callback) = self_slot.borrow().as_ref() {
                let id = window()
                    .unwrap()
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .unwrap();
                id_slot.set(Some(id));
            }
        }) as Box<dyn FnMut(f64)>));

        let first = window()
            .unwrap()
            .request_animation_frame(
                callback.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            )
            .unwrap();
        raf_id.set(Some(first));

        Self { raf_id, callback }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // The closure holds a handle to its own slot for re-arming;
        // emptying the slot breaks that cycle so it can be freed.
        drop(self.callback.borrow_mut().take());
    }
}

/// Listen for scroll and resize, coalescing bursts into at most one
/// `on_frame` call per animation frame. Runs `on_frame` once up front so
/// a restored scroll position renders correctly, and unbinds through
/// `region`.
pub fn bind_scroll_frames(region: &mut Region, on_frame: impl FnMut() + 'static) {
    let window = match window() {
        Some(window) => window,
        None => return,
    };
    let on_frame: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(on_frame));
    let scheduled = Rc::new(Cell::new(false));
    let pending = Rc::new(Cell::new(None::<i32>));

    let frame_callback = {
        let on_frame = on_frame.clone();
        let scheduled = scheduled.clone();
        let pending = pending.clone();
        Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
            scheduled.set(false);
            pending.set(None);
            (on_frame.borrow_mut())();
        }) as Box<dyn FnMut(f64)>))
    };

    let listener = {
        let window = window.clone();
        let scheduled = scheduled.clone();
        let pending = pending.clone();
        let frame_callback = frame_callback.clone();
        Closure::wrap(Box::new(move || {
            // One pending frame at a time; extra events within the same
            // frame collapse into it.
            if scheduled.replace(true) {
                return;
            }
            let id = window
                .request_animation_frame((*frame_callback).as_ref().unchecked_ref())
                .unwrap();
            pending.set(Some(id));
        }) as Box<dyn FnMut()>)
    };

    window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .unwrap();
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .unwrap();

    // Initial pass.
    (on_frame.borrow_mut())();

    region.defer(move || {
        let _ = window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        if let Some(id) = pending.take() {
            let _ = window.cancel_animation_frame(id);
        }
        drop(frame_callback);
    });
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Document-space top of an element, independent of the current scroll
/// position. Sticky descendants report a pinned rect, so measure the
/// non-sticky container.
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_offset()
}

pub fn set_style(element: &Element, css: &str) {
    let _ = element.set_attribute("style", css);
}

/// Add or remove a single class without disturbing the rest.
pub fn ensure_class(element: &Element, class: &str, present: bool) {
    let current = element.class_name();
    let has = current.split_whitespace().any(|c| c == class);
    if present && !has {
        element.set_class_name(&format!("{} {}", current, class));
    } else if !present && has {
        let kept = current
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        element.set_class_name(&kept);
    }
}

pub fn smooth_scroll_to(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
