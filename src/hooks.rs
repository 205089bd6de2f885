use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::prelude::*;

use crate::scroll::{ScrollState, ViewportSample};

#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("No window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Document has no root element")]
    NoDocumentElement,

    #[error("{0} is not a number")]
    NotANumber(&'static str),

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for ViewportError {
    fn from(value: JsValue) -> Self {
        ViewportError::Js(format!("{:?}", value))
    }
}

/// Reads scroll offset, document height and viewport height from the window.
pub fn read_viewport(window: &Window) -> Result<ViewportSample, ViewportError> {
    let scroll_offset = window.scroll_y()?;
    let viewport_height = window
        .inner_height()?
        .as_f64()
        .ok_or(ViewportError::NotANumber("innerHeight"))?;
    let document_height = window
        .document()
        .ok_or(ViewportError::NoDocument)?
        .document_element()
        .ok_or(ViewportError::NoDocumentElement)?
        .scroll_height() as f64;

    Ok(ViewportSample {
        scroll_offset,
        document_height,
        viewport_height,
    })
}

/// A `scroll` listener on the window that is removed when the guard is dropped.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn register(window: Window, callback: Closure<dyn FnMut()>) -> Result<Self, ViewportError> {
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
}

/// What a scroll listener should do with an incoming event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    SampleNow,
    Schedule(u32),
    Skip,
}

/// Gate that lets at most one delayed sample be pending at a time.
///
/// Events that arrive while a sample is pending are skipped. The pending
/// sample reads the geometry when it fires, so it always sees the latest offset.
#[derive(Debug, Default)]
pub struct Coalescer {
    interval_ms: u32,
    armed: bool,
}

impl Coalescer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            armed: false,
        }
    }

    pub fn on_event(&mut self) -> ScrollAction {
        if self.interval_ms == 0 {
            ScrollAction::SampleNow
        } else if self.armed {
            ScrollAction::Skip
        } else {
            self.armed = true;
            ScrollAction::Schedule(self.interval_ms)
        }
    }

    pub fn on_fire(&mut self) {
        self.armed = false;
    }

    /// Forgets a pending sample whose timeout was cancelled.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Samples the viewport and stores the resulting state. Failures keep the previous state.
fn sample_into(
    window: &Window,
    state: &UseStateHandle<ScrollState>,
    last_active: &Cell<usize>,
    card_count: usize,
) {
    match read_viewport(window) {
        Ok(sample) => {
            let next = ScrollState::from_sample(&sample, card_count);
            let previous = last_active.replace(next.active_index);
            if previous != next.active_index {
                debug!(
                    "Active card {} -> {} at progress {:.3}",
                    previous, next.active_index, next.progress
                );
            }
            state.set(next);
        }
        Err(e) => warn!("Skipping scroll sample: {}", e),
    }
}

/// Current scroll state of the window, recomputed on every scroll event.
///
/// With `coalesce_ms > 0` at most one sample is taken per interval; events in
/// between are dropped and the next sample reads the latest geometry.
#[hook]
pub fn use_scroll_state(card_count: usize, coalesce_ms: u32) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |&(card_count, coalesce_ms)| {
                let mut subscription = None;
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let coalescer = Rc::new(RefCell::new(Coalescer::new(coalesce_ms)));

                match web_sys::window() {
                    Some(window) => {
                        let last_active = Rc::new(Cell::new(0usize));

                        let callback = {
                            let window = window.clone();
                            let pending = pending.clone();
                            let coalescer = coalescer.clone();
                            let last_active = last_active.clone();
                            let state = state.clone();
                            Closure::wrap(Box::new(move || {
                                let action = coalescer.borrow_mut().on_event();
                                match action {
                                    ScrollAction::SampleNow => {
                                        sample_into(&window, &state, &last_active, card_count);
                                    }
                                    ScrollAction::Schedule(delay_ms) => {
                                        let timeout = {
                                            let window = window.clone();
                                            let state = state.clone();
                                            let last_active = last_active.clone();
                                            let coalescer = coalescer.clone();
                                            Timeout::new(delay_ms, move || {
                                                coalescer.borrow_mut().on_fire();
                                                sample_into(&window, &state, &last_active, card_count);
                                            })
                                        };
                                        // Replacing drops the previous, already fired timeout
                                        *pending.borrow_mut() = Some(timeout);
                                    }
                                    ScrollAction::Skip => {}
                                }
                            }) as Box<dyn FnMut()>)
                        };

                        match ScrollSubscription::register(window.clone(), callback) {
                            Ok(sub) => subscription = Some(sub),
                            Err(e) => error!("Failed to register scroll listener: {}", e),
                        }

                        // Initial check
                        sample_into(&window, &state, &last_active, card_count);
                    }
                    None => error!("{}", ViewportError::NoWindow),
                }

                move || {
                    drop(subscription);
                    // Dropping the timeout cancels a sample that has not fired yet
                    pending.borrow_mut().take();
                    if coalescer.borrow().is_armed() {
                        debug!("Cancelled pending scroll sample");
                        coalescer.borrow_mut().cancel();
                    }
                }
            },
            (card_count, coalesce_ms),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_samples_every_event() {
        let mut coalescer = Coalescer::new(0);
        for _ in 0..5 {
            assert_eq!(coalescer.on_event(), ScrollAction::SampleNow);
        }
        assert!(!coalescer.is_armed());
    }

    #[test]
    fn test_events_while_armed_are_skipped() {
        let mut coalescer = Coalescer::new(16);
        assert_eq!(coalescer.on_event(), ScrollAction::Schedule(16));
        assert!(coalescer.is_armed());
        assert_eq!(coalescer.on_event(), ScrollAction::Skip);
        assert_eq!(coalescer.on_event(), ScrollAction::Skip);
    }

    #[test]
    fn test_fire_rearms_for_next_burst() {
        let mut coalescer = Coalescer::new(16);
        let scheduled: usize = (0..3)
            .map(|_| {
                let burst: Vec<ScrollAction> = (0..10).map(|_| coalescer.on_event()).collect();
                coalescer.on_fire();
                burst.iter().filter(|a| matches!(a, ScrollAction::Schedule(_))).count()
            })
            .sum();
        // One pending sample per burst, never more
        assert_eq!(scheduled, 3);
        assert!(!coalescer.is_armed());
    }

    #[test]
    fn test_cancel_clears_pending_sample() {
        let mut coalescer = Coalescer::new(16);
        coalescer.on_event();
        coalescer.cancel();
        assert!(!coalescer.is_armed());
        assert_eq!(coalescer.on_event(), ScrollAction::Schedule(16));
    }
}
