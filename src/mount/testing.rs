//! In-memory host and application used by the mount tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Application, Host, ReadySignal};

#[derive(Debug, Default)]
pub struct FakeElement {
    id: String,
    children: RefCell<Vec<String>>,
}

impl FakeElement {
    pub fn children(&self) -> Vec<String> {
        self.children.borrow().clone()
    }
}

/// A document holding a flat list of elements, addressable by `#id` only.
pub struct FakeDom {
    elements: Vec<Rc<FakeElement>>,
    ready: ReadySignal,
    reports: RefCell<Vec<String>>,
}

impl FakeDom {
    fn with(ids: &[&str], ready: ReadySignal) -> Rc<Self> {
        Rc::new(Self {
            elements: ids
                .iter()
                .map(|id| {
                    Rc::new(FakeElement {
                        id: id.to_string(),
                        ..FakeElement::default()
                    })
                })
                .collect(),
            ready,
            reports: RefCell::new(Vec::new()),
        })
    }

    pub fn ready_with(ids: &[&str]) -> Rc<Self> {
        Self::with(ids, ReadySignal::fired())
    }

    pub fn loading_with(ids: &[&str]) -> Rc<Self> {
        Self::with(ids, ReadySignal::pending())
    }

    pub fn element(&self, id: &str) -> Option<Rc<FakeElement>> {
        self.elements.iter().find(|e| e.id == id).cloned()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }
}

impl Host for FakeDom {
    type Element = Rc<FakeElement>;

    fn query_selector(&self, selector: &str) -> Option<Self::Element> {
        let id = selector.strip_prefix('#')?;
        if id.is_empty() || id.contains('#') {
            return None;
        }
        self.element(id)
    }

    fn ready_signal(&self) -> &ReadySignal {
        &self.ready
    }

    fn report(&self, message: &str) {
        self.reports.borrow_mut().push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardHandle {
    pub instance: usize,
}

/// Renders a single `memory-board` node and counts instances.
#[derive(Debug, Clone, Default)]
pub struct Board {
    created: Rc<Cell<usize>>,
    broken: bool,
}

impl Board {
    /// A board whose every mount fails before rendering anything.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn instances(&self) -> usize {
        self.created.get()
    }
}

impl Application<Rc<FakeElement>> for Board {
    type Handle = BoardHandle;
    type Error = &'static str;

    fn mount(&self, container: &Rc<FakeElement>) -> Result<BoardHandle, &'static str> {
        if self.broken {
            return Err("board failed to render");
        }
        self.created.set(self.created.get() + 1);
        container
            .children
            .borrow_mut()
            .push("memory-board".to_string());
        Ok(BoardHandle {
            instance: self.created.get(),
        })
    }
}
