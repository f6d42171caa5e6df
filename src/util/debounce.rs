//! Trailing-edge call coalescing for noisy input events.
//!
//! DESIGN
//! ======
//! The pending-timer handle lives inside the wrapper itself: each `call`
//! advances a sequence counter and stores the latest value, and only the
//! timer holding the current sequence is allowed to deliver. Superseded
//! timers wake up, see a stale sequence, and drop out.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Pending<T> {
    seq: u64,
    value: Option<T>,
}

/// Wraps a callback so bursts of calls within the quiet period collapse
/// into a single trailing invocation carrying the last value.
pub struct Debouncer<T> {
    wait: Duration,
    callback: Rc<dyn Fn(T)>,
    pending: Rc<RefCell<Pending<T>>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            wait: self.wait,
            callback: Rc::clone(&self.callback),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<T: 'static> Debouncer<T> {
    pub fn new(wait: Duration, callback: impl Fn(T) + 'static) -> Self {
        Self {
            wait,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(Pending { seq: 0, value: None })),
        }
    }

    /// The configured quiet-period window.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record `value` and (re)start the quiet-period window.
    pub fn call(&self, value: T) {
        let seq = {
            let mut pending = self.pending.borrow_mut();
            pending.seq += 1;
            pending.value = Some(value);
            pending.seq
        };
        self.schedule(seq);
    }

    #[cfg(feature = "hydrate")]
    fn schedule(&self, seq: u64) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(this.wait).await;
            this.fire(seq);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule(&self, _seq: u64) {}

    /// Deliver the pending value if `seq` is still the newest call.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn fire(&self, seq: u64) {
        let value = {
            let mut pending = self.pending.borrow_mut();
            if pending.seq != seq {
                return;
            }
            pending.value.take()
        };
        if let Some(value) = value {
            (self.callback)(value);
        }
    }
}
