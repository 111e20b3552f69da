use crate::host::WebHost;
use idol_core::{Session, Signal};
use instant::Instant;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Session clock: time since the page session started.
pub struct Clock {
    origin: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Signals waiting to be handed to the session. Promise callbacks push here
/// and the next flush (listener or animation frame) drains it.
#[derive(Clone, Default)]
pub struct Inbox(Rc<RefCell<VecDeque<Signal>>>);

impl Inbox {
    pub fn push(&self, signal: Signal) {
        self.0.borrow_mut().push_back(signal);
    }

    fn take(&self) -> VecDeque<Signal> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    session: Rc<RefCell<Session<WebHost>>>,
    inbox: Inbox,
    clock: Rc<Clock>,
}

impl Dispatcher {
    pub fn new(session: Session<WebHost>, inbox: Inbox, clock: Clock) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            inbox,
            clock: Rc::new(clock),
        }
    }

    pub fn session(&self) -> &Rc<RefCell<Session<WebHost>>> {
        &self.session
    }

    pub fn dispatch(&self, signal: Signal) {
        self.inbox.push(signal);
        self.flush();
    }

    /// Deliver queued signals in arrival order. If the session is busy the
    /// signals stay queued for the next flush.
    pub fn flush(&self) {
        let Ok(mut session) = self.session.try_borrow_mut() else {
            return;
        };
        loop {
            let batch = self.inbox.take();
            if batch.is_empty() {
                break;
            }
            let now = self.clock.now();
            for signal in batch {
                session.handle(signal, now);
            }
        }
    }

    fn frame(&self) {
        self.flush();
        if let Ok(mut session) = self.session.try_borrow_mut() {
            session.tick(self.clock.now());
        }
    }
}

/// Drive timers and queued promise results from `requestAnimationFrame`.
pub fn start_loop(dispatcher: Dispatcher) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        dispatcher.frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
