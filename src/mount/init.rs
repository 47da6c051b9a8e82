use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Application, Host, Mounter, Target, DEFAULT_SELECTOR, GLOBAL_NAME};

/// Progress of page-load auto-initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Unstarted,
    WaitingForDocumentReady,
    /// `#app` was present and the application is attached.
    Mounted,
    /// `#app` was absent; nothing was mounted and nothing reported.
    Skipped,
    /// `#app` was present but the application failed to mount.
    Failed,
}

impl InitState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InitState::Mounted | InitState::Skipped | InitState::Failed
        )
    }
}

/// Observer for one auto-initialization run.
pub struct AutoInit<T> {
    state: Rc<Cell<InitState>>,
    handle: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for AutoInit<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            handle: self.handle.clone(),
        }
    }
}

impl<T> AutoInit<T> {
    fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(InitState::Unstarted)),
            handle: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> InitState {
        self.state.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Take ownership of the auto-mounted application, if any.
    pub fn take_handle(&self) -> Option<T> {
        self.handle.borrow_mut().take()
    }

    fn attempt<H, A>(&self, mounter: &Mounter<H, A>)
    where
        H: Host,
        A: Application<H::Element, Handle = T>,
    {
        if self.state.get().is_terminal() {
            return;
        }
        // Absence is a silent no-op, unlike an explicit mount call.
        let Some(el) = mounter.host().query_selector(DEFAULT_SELECTOR) else {
            self.finish(InitState::Skipped);
            return;
        };
        // Nobody awaits the auto-mount, so its failure goes to the host.
        let next = match mounter.mount(Target::Element(el)) {
            Ok(handle) => {
                *self.handle.borrow_mut() = handle;
                InitState::Mounted
            }
            Err(e) => {
                mounter.host().report(&format!(
                    "{GLOBAL_NAME}: auto-mount into \"{DEFAULT_SELECTOR}\" failed: {e:?}"
                ));
                InitState::Failed
            }
        };
        self.finish(next);
    }

    fn finish(&self, next: InitState) {
        log::debug!("auto-init: {next:?}");
        self.state.set(next);
    }
}

/// Mount into `#app` now if the document is ready, otherwise once it is.
pub fn auto_init<H, A>(mounter: &Rc<Mounter<H, A>>) -> AutoInit<A::Handle>
where
    H: Host + 'static,
    A: Application<H::Element> + 'static,
    A::Handle: 'static,
{
    let init = AutoInit::new();
    let signal = mounter.host().ready_signal();

    if signal.is_fired() {
        init.attempt(mounter);
    } else {
        init.state.set(InitState::WaitingForDocumentReady);
        let (pending, mounter) = (init.clone(), Rc::clone(mounter));
        signal.when_ready(move || pending.attempt(&mounter));
    }
    init
}
