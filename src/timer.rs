use linkwave_core::TickScheduler;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `TickScheduler` backed by `setInterval`. The callback closure lives as
/// long as the scheduler; only the interval handle changes.
pub struct IntervalScheduler {
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl IntervalScheduler {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
            handle: None,
        }
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule(&mut self, interval: Duration) {
        self.cancel();
        let Some(window) = web::window() else {
            log::warn!("[timer] no window; not scheduling");
            return;
        };
        let ms = interval.as_millis().min(i32::MAX as u128) as i32;
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(h) => self.handle = Some(h),
            Err(e) => log::error!("[timer] setInterval error: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(h);
            }
        }
    }

    fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
