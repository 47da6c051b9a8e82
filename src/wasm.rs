//! Browser bindings for the mount adapter.
//!
//! The game bundle calls `init(createApp)` as soon as it loads, where
//! `createApp(container)` renders the game into `container` and returns the
//! application instance. Build with: `wasm-pack build --target web --features wasm`

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::mount::{self, Application, Environment, Host, ReadySignal, Registry, Target};

/// The live DOM as a mount host.
pub struct DomHost {
    document: web_sys::Document,
    ready: ReadySignal,
}

impl DomHost {
    pub fn new(document: web_sys::Document) -> Self {
        let ready = if document.ready_state() == "loading" {
            ReadySignal::pending()
        } else {
            ReadySignal::fired()
        };
        Self { document, ready }
    }
}

impl Host for DomHost {
    type Element = web_sys::Element;

    fn query_selector(&self, selector: &str) -> Option<web_sys::Element> {
        // A malformed selector throws; treat it like a miss.
        self.document.query_selector(selector).ok().flatten()
    }

    fn ready_signal(&self) -> &ReadySignal {
        &self.ready
    }

    fn report(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
}

/// Fire the host's ready signal on `DOMContentLoaded`.
fn listen_for_ready(host: &Rc<DomHost>) -> Result<(), JsValue> {
    if host.ready.is_fired() {
        return Ok(());
    }
    let host_ref = Rc::downgrade(host);
    let on_ready = Closure::once(move || {
        if let Some(host) = host_ref.upgrade() {
            host.ready.fire();
        }
    });
    host.document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// A JS factory `(container) => app` standing in for the game.
pub struct JsApplication {
    factory: js_sys::Function,
}

impl Application<web_sys::Element> for JsApplication {
    type Handle = JsValue;
    /// Whatever `createApp` threw.
    type Error = JsValue;

    fn mount(&self, container: &web_sys::Element) -> Result<JsValue, JsValue> {
        let container: &JsValue = container;
        self.factory.call1(&JsValue::NULL, container)
    }
}

/// `window.MemoryGame`
#[wasm_bindgen]
pub struct MemoryGame {
    registry: Rc<Registry<DomHost, JsApplication>>,
}

#[wasm_bindgen]
impl MemoryGame {
    /// Mount into a selector (default `#app`) or an element.
    /// Returns the application instance, or `null` if nothing matched;
    /// rethrows whatever `createApp` throws.
    pub fn mount(&self, target: JsValue) -> Result<JsValue, JsValue> {
        let target = if target.is_undefined() {
            Target::default()
        } else if let Some(selector) = target.as_string() {
            Target::Selector(selector)
        } else {
            match target.dyn_into::<web_sys::Element>() {
                Ok(el) => Target::Element(el),
                Err(other) => Target::Selector(target_label(
                    other.is_null(),
                    js_sys::JSON::stringify(&other)
                        .ok()
                        .and_then(|json| json.as_string()),
                )),
            }
        };
        Ok(self.registry.mount(target)?.unwrap_or(JsValue::NULL))
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> String {
        self.registry.version().to_string()
    }
}

/// Name a target that is neither a selector nor an element the way the
/// caller wrote it: `null`, its JSON form, or `undefined` when it has none.
fn target_label(is_null: bool, json: Option<String>) -> String {
    if is_null {
        return "null".to_string();
    }
    json.unwrap_or_else(|| "undefined".to_string())
}

/// Script-load entry point: auto-mount into `#app` and publish
/// `window.MemoryGame`. Does nothing outside a browser.
#[wasm_bindgen]
pub fn init(create_app: js_sys::Function) -> Result<(), JsValue> {
    let window = web_sys::window();
    let document = window.as_ref().and_then(|w| w.document());
    let (window, env) = match (window, document) {
        (Some(window), Some(document)) => {
            let host = Rc::new(DomHost::new(document));
            listen_for_ready(&host)?;
            (window, Environment::Browser(host))
        }
        _ => return Ok(()),
    };

    let Some(page) = mount::boot(env, JsApplication { factory: create_app }) else {
        return Ok(());
    };
    let global = MemoryGame {
        registry: Rc::new(page.registry),
    };
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(mount::GLOBAL_NAME),
        &JsValue::from(global),
    )?;
    Ok(())
}
