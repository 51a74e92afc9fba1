use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

/// Host-pumped, single-threaded frame clock.
///
/// Callbacks are one-shot: a registration fires on the next
/// [`drain_frame_callbacks`](FrameClock::drain_frame_callbacks) and is then
/// gone. Continuous animations re-register from inside their callback; those
/// re-registrations run on the *following* drain, never the current one.
#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    next_id: FrameCallbackId,
    callbacks: FxHashMap<FrameCallbackId, Box<dyn FnOnce(u64)>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` for the next frame. The argument is the frame time
    /// in milliseconds, as reported by the host.
    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.callbacks.insert(id, Box::new(callback));
            id
        };
        log::trace!("frame callback {id} registered");
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Run every callback registered before this call, in registration order.
    ///
    /// Callbacks registered while draining are deferred to the next drain, so
    /// a self-rescheduling animation advances exactly one tick per call.
    pub fn drain_frame_callbacks(&self, time_millis: u64) {
        let mut due: Vec<(FrameCallbackId, Box<dyn FnOnce(u64)>)> =
            self.inner.borrow_mut().callbacks.drain().collect();
        due.sort_by_key(|(id, _)| *id);
        for (id, callback) in due {
            log::trace!("frame callback {id} fired at {time_millis}ms");
            callback(time_millis);
        }
    }

    /// Number of callbacks waiting for the next drain.
    pub fn pending_callbacks(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }
}

/// Handle to a scheduled frame callback. Dropping it cancels the callback if
/// it has not fired yet.
pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<ClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(inner) = self.clock.upgrade() {
                if inner.borrow_mut().callbacks.remove(&id).is_some() {
                    log::trace!("frame callback {id} cancelled");
                }
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}
