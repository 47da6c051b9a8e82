use std::cell::RefCell;
use std::fmt;
use std::mem;

type Waiter = Box<dyn FnOnce()>;

enum Inner {
    Pending(Vec<Waiter>),
    Fired,
}

/// One-shot "document is ready" notification.
///
/// Continuations registered before [`fire`](Self::fire) run exactly once when
/// it is called; continuations registered afterwards run immediately.
pub struct ReadySignal {
    inner: RefCell<Inner>,
}

impl ReadySignal {
    /// A signal for a document that is still loading.
    pub fn pending() -> Self {
        Self {
            inner: RefCell::new(Inner::Pending(Vec::new())),
        }
    }

    /// A signal for a document that has already finished loading.
    pub fn fired() -> Self {
        Self {
            inner: RefCell::new(Inner::Fired),
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(*self.inner.borrow(), Inner::Fired)
    }

    pub fn when_ready(&self, f: impl FnOnce() + 'static) {
        if let Inner::Pending(waiters) = &mut *self.inner.borrow_mut() {
            waiters.push(Box::new(f));
            return;
        }
        f();
    }

    /// Run every pending continuation. Later calls do nothing.
    pub fn fire(&self) {
        let previous = mem::replace(&mut *self.inner.borrow_mut(), Inner::Fired);
        if let Inner::Pending(waiters) = previous {
            for waiter in waiters {
                waiter();
            }
        }
    }
}

impl fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner.borrow() {
            Inner::Pending(waiters) => write!(f, "ReadySignal::Pending({})", waiters.len()),
            Inner::Fired => write!(f, "ReadySignal::Fired"),
        }
    }
}
