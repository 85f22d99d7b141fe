//! Debounced invocation over browser timers.
//!
//! Both debouncers hold their pending timer as explicit state instead of a
//! closure-captured handle, so ownership and cancellation are visible at the
//! call site. There is no queuing: collapsed calls are simply dropped.

use std::{cell::Cell, rc::Rc};

use wasm_bindgen::{JsCast, closure::Closure};

/// Timer scheduling failures (the browser refused `setTimeout`).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("could not schedule a timeout")]
pub struct TimerError;

/// A scheduled `setTimeout` callback, cleared when dropped.
///
/// Holds the JS closure alive for the timer's lifetime. Clearing an
/// already-fired timer id is a no-op, so keeping a stale handle around is
/// harmless.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl std::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeout").field("id", &self.id).finish()
    }
}

impl Timeout {
    /// Schedules `action` to run once after `delay_ms`.
    pub fn set(delay_ms: i32, action: impl FnOnce() + 'static) -> Result<Self, TimerError> {
        let window = web_sys::window().ok_or(TimerError)?;
        let closure = Closure::once(action);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|_| TimerError)?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// Trailing-edge debouncer: the action runs once the quiet window elapses.
///
/// Each [`Debouncer::schedule`] cancels the pending timer and starts a fresh
/// window, so a burst of calls yields a single invocation of the last action.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: i32,
    pending: Option<Timeout>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replaces any pending invocation with `action`, delayed by the quiet
    /// window.
    pub fn schedule(&mut self, action: impl FnOnce() + 'static) -> Result<(), TimerError> {
        self.cancel_pending();
        self.pending = Some(Timeout::set(self.delay_ms, action)?);
        Ok(())
    }

    /// Drops the pending invocation, if any.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }
}

/// Leading-edge debouncer: the first call in a quiet window fires
/// immediately; later calls only extend the window.
#[derive(Debug)]
pub struct LeadingDebouncer {
    delay_ms: i32,
    window_open: Rc<Cell<bool>>,
    quiet: Option<Timeout>,
}

impl LeadingDebouncer {
    #[must_use]
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            window_open: Rc::new(Cell::new(false)),
            quiet: None,
        }
    }

    /// Runs `action` now unless a quiet window is open, then (re)starts the
    /// window.
    pub fn trigger(&mut self, action: impl FnOnce() + 'static) -> Result<(), TimerError> {
        if !self.window_open.get() {
            action();
            self.window_open.set(true);
        }
        let window_open = Rc::clone(&self.window_open);
        self.quiet = None;
        self.quiet = Some(Timeout::set(self.delay_ms, move || {
            window_open.set(false);
        })?);
        Ok(())
    }

    /// Closes the quiet window so the next trigger fires immediately.
    pub fn cancel_pending(&mut self) {
        self.quiet = None;
        self.window_open.set(false);
    }
}
