use std::rc::Rc;

use super::{Application, Host, Mounter, Target};

/// Name the registry is published under for script-tag consumers.
pub const GLOBAL_NAME: &str = "MemoryGame";
pub const VERSION: &str = "1.0.0";

/// The global `{ mount, version }` object.
///
/// Built once at script load and handed to whoever publishes it; a reload
/// builds a new one in its place.
pub struct Registry<H, A> {
    mounter: Rc<Mounter<H, A>>,
}

impl<H, A> Registry<H, A>
where
    H: Host,
    A: Application<H::Element>,
{
    pub fn new(mounter: Rc<Mounter<H, A>>) -> Self {
        Self { mounter }
    }

    pub fn mount(
        &self,
        target: impl Into<Target<H::Element>>,
    ) -> Result<Option<A::Handle>, A::Error> {
        self.mounter.mount(target)
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn name(&self) -> &'static str {
        GLOBAL_NAME
    }
}
