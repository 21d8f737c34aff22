//! Cancellable one-shot timer over `window.setTimeout`.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A single pending `setTimeout` callback. Cancelling (or dropping) the
/// timer clears the timeout, so the callback can no longer run; cancel is
/// idempotent. Replacing the value stored in an `Option<CancelableTimer>`
/// is how "starting a new timer cancels the previous one" is enforced.
pub struct CancelableTimer {
    id: Cell<Option<i32>>,
    // Keeps the JS-side callback alive until the timer is gone.
    _cb: Closure<dyn FnMut()>,
}

impl CancelableTimer {
    /// Schedule `f` to run once after `delay_ms`. Returns `None` when no
    /// window is available or the browser rejects the timeout.
    pub fn schedule(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let cb: Closure<dyn FnMut()> = Closure::once(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => Some(Self {
                id: Cell::new(Some(id)),
                _cb: cb,
            }),
            Err(err) => {
                log::warn!("failed to schedule timer: {err:?}");
                None
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for CancelableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
