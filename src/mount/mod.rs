//! Attaches the game application to a container element.
//!
//! The host document and the application are injected, so the same logic
//! runs against the browser DOM (`wasm` feature) or an in-memory test host.
//!
//! - `ready` — one-shot document-ready signal
//! - `init` — page-load auto-initialization state machine
//! - `registry` — the global `MemoryGame` handle for script-tag consumers

mod init;
mod ready;
mod registry;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::rc::Rc;

pub use init::{auto_init, AutoInit, InitState};
pub use ready::ReadySignal;
pub use registry::{Registry, GLOBAL_NAME, VERSION};

/// Selector tried by auto-initialization and by a bare `mount()`.
pub const DEFAULT_SELECTOR: &str = "#app";

/// The page the application is mounted into.
pub trait Host {
    type Element: Clone;

    /// Resolve a selector; invalid selectors resolve to nothing.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn ready_signal(&self) -> &ReadySignal;

    /// Diagnostic channel (the console in a browser).
    fn report(&self, message: &str);
}

/// The game itself. Rendering and rules live behind this trait.
pub trait Application<E> {
    type Handle;
    type Error: fmt::Debug;

    /// Create an instance and render it into `container`.
    fn mount(&self, container: &E) -> Result<Self::Handle, Self::Error>;
}

/// Where to mount: a selector to resolve, or an element already in hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<E> {
    Selector(String),
    Element(E),
}

impl<E> Default for Target<E> {
    fn default() -> Self {
        Target::Selector(DEFAULT_SELECTOR.to_string())
    }
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

/// Whether a UI host exists at all.
pub enum Environment<H> {
    Browser(Rc<H>),
    Headless,
}

pub struct Mounter<H, A> {
    host: Rc<H>,
    app: A,
}

impl<H, A> Mounter<H, A>
where
    H: Host,
    A: Application<H::Element>,
{
    pub fn new(host: Rc<H>, app: A) -> Self {
        Self { host, app }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Resolve `target` and mount a fresh application instance into it.
    ///
    /// An unresolvable selector is reported once through the host and
    /// yields `Ok(None)`. Errors from the application itself are passed
    /// back to the caller. Mounting twice into one element mounts twice.
    pub fn mount(
        &self,
        target: impl Into<Target<H::Element>>,
    ) -> Result<Option<A::Handle>, A::Error> {
        let container = match target.into() {
            Target::Element(el) => el,
            Target::Selector(selector) => match self.host.query_selector(&selector) {
                Some(el) => el,
                None => {
                    self.host.report(&format!(
                        "{GLOBAL_NAME}: cannot find mount container \"{selector}\""
                    ));
                    return Ok(None);
                }
            },
        };
        self.app.mount(&container).map(Some)
    }
}

/// Everything set up at script load in a browsing environment.
pub struct Page<H, A>
where
    H: Host,
    A: Application<H::Element>,
{
    pub registry: Registry<H, A>,
    pub init: AutoInit<A::Handle>,
}

/// Script-load entry point: auto-mount into `#app` and build the registry.
///
/// Headless environments get nothing and touch nothing.
pub fn boot<H, A>(env: Environment<H>, app: A) -> Option<Page<H, A>>
where
    H: Host + 'static,
    A: Application<H::Element> + 'static,
    A::Handle: 'static,
{
    let host = match env {
        Environment::Browser(host) => host,
        Environment::Headless => return None,
    };
    let mounter = Rc::new(Mounter::new(host, app));
    let init = auto_init(&mounter);
    Some(Page {
        registry: Registry::new(mounter),
        init,
    })
}

#[cfg(test)]
mod tests {
    use super::testing::{Board, FakeDom};
    use super::*;

    #[test]
    fn mounts_into_default_selector() {
        let dom = FakeDom::ready_with(&["app"]);
        let mounter = Mounter::new(dom.clone(), Board::default());

        let handle = mounter.mount(DEFAULT_SELECTOR).unwrap().expect("should mount");
        assert_eq!(handle.instance, 1);
        assert!(!dom.element("app").unwrap().children().is_empty());
        assert!(dom.reports().is_empty());
    }

    #[test]
    fn default_target_is_app_selector() {
        assert_eq!(Target::<()>::default(), Target::Selector("#app".to_string()));
    }

    #[test]
    fn mounts_into_given_element() {
        let dom = FakeDom::ready_with(&["stage"]);
        let el = dom.element("stage").unwrap();
        let mounter = Mounter::new(dom.clone(), Board::default());

        assert!(mounter.mount(Target::Element(el.clone())).unwrap().is_some());
        assert_eq!(el.children(), vec!["memory-board".to_string()]);
    }

    #[test]
    fn missing_selector_reports_once_and_returns_none() {
        let dom = FakeDom::ready_with(&["app"]);
        let board = Board::default();
        let mounter = Mounter::new(dom.clone(), board.clone());

        assert!(mounter.mount("#does-not-exist").unwrap().is_none());
        let reports = dom.reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("\"#does-not-exist\""));
        assert_eq!(board.instances(), 0);
    }

    #[test]
    fn empty_and_invalid_selectors_are_reported() {
        let dom = FakeDom::ready_with(&["app"]);
        let mounter = Mounter::new(dom.clone(), Board::default());

        assert!(mounter.mount("").unwrap().is_none());
        assert!(mounter.mount("##").unwrap().is_none());
        assert_eq!(dom.reports().len(), 2);
    }

    #[test]
    fn repeated_mounts_are_not_deduplicated() {
        let dom = FakeDom::ready_with(&["app"]);
        let mounter = Mounter::new(dom.clone(), Board::default());

        mounter.mount("#app").unwrap();
        mounter.mount("#app").unwrap();
        assert_eq!(dom.element("app").unwrap().children().len(), 2);
    }

    #[test]
    fn application_error_reaches_caller() {
        let dom = FakeDom::ready_with(&["app"]);
        let mounter = Mounter::new(dom.clone(), Board::broken());

        let err = mounter.mount("#app").unwrap_err();
        assert_eq!(err, "board failed to render");
        assert!(dom.element("app").unwrap().children().is_empty());
        assert!(dom.reports().is_empty());
    }

    #[test]
    fn boot_headless_does_nothing() {
        let board = Board::default();
        let page = boot::<FakeDom, _>(Environment::Headless, board.clone());
        assert!(page.is_none());
        assert_eq!(board.instances(), 0);
    }

    #[test]
    fn boot_in_browser_mounts_and_exposes_registry() {
        let dom = FakeDom::ready_with(&["app"]);
        let page = boot(Environment::Browser(dom.clone()), Board::default()).unwrap();

        assert_eq!(page.init.state(), InitState::Mounted);
        assert_eq!(page.registry.version(), VERSION);
        assert!(page.registry.mount("#missing").unwrap().is_none());
        assert_eq!(dom.reports().len(), 1);
    }
}
