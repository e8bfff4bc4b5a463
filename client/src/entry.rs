//! JS entry points for server-rendered dashboard pages.
//!
//! Static pages keep calling `switchPage('review')` from their nav buttons.
//! The switcher behind it lives in a thread-local slot; it is built lazily
//! with the default config on first use, or explicitly through
//! `initPageSwitcher(configJson)`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use page_switcher::{CallbackTable, PageSwitcher, SwitcherConfig, Variant};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::util::dom::DomRegistry;
use crate::util::globals::install_globals;
use crate::util::timers::TimeoutScheduler;

type DomSwitcher = PageSwitcher<DomRegistry, TimeoutScheduler>;

thread_local! {
    static SWITCHER: RefCell<Option<Rc<DomSwitcher>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
}

fn build(config: SwitcherConfig) -> Result<DomSwitcher, JsValue> {
    let registry = DomRegistry::from_window(config.naming.clone())
        .ok_or_else(|| JsValue::from_str("no document to switch pages in"))?;
    let mut callbacks = CallbackTable::default();
    install_globals(&mut callbacks);
    Ok(PageSwitcher::new(config, Rc::new(registry), Rc::new(TimeoutScheduler::new()), callbacks))
}

fn install(switcher: DomSwitcher) -> Rc<DomSwitcher> {
    let switcher = Rc::new(switcher);
    let previous = SWITCHER.with(|slot| slot.replace(Some(Rc::clone(&switcher))));
    if let Some(previous) = previous {
        previous.cancel_pending();
    }
    switcher
}

/// (Re)build the page switcher from an optional JSON config.
#[wasm_bindgen(js_name = initPageSwitcher)]
pub fn init_page_switcher(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(raw) => SwitcherConfig::from_json(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => SwitcherConfig::default(),
    };
    install(build(config)?);
    log::info!("page switcher ready");
    Ok(())
}

/// Switch the visible page. Never throws.
#[wasm_bindgen(js_name = switchPage)]
pub fn switch_page(page_id: &str) {
    // Clone out of the slot: callbacks may call back into `switchPage`.
    let existing = SWITCHER.with(|slot| slot.borrow().clone());
    let switcher = match existing {
        Some(switcher) => switcher,
        None => match build(SwitcherConfig::default()) {
            Ok(switcher) => install(switcher),
            Err(e) => {
                log::warn!("switchPage({page_id}) ignored: {e:?}");
                return;
            }
        },
    };
    switcher.switch_page(page_id);
}

/// Page id of the last `switchPage` call.
#[wasm_bindgen(js_name = currentPage)]
pub fn current_page() -> Option<String> {
    SWITCHER.with(|slot| slot.borrow().as_ref().and_then(|s| s.current_page()))
}

/// Mount the Leptos shell instead of driving static markup.
#[wasm_bindgen(js_name = mountApp)]
pub fn mount_app(variant: Option<String>) -> Result<(), JsValue> {
    let variant = match variant {
        Some(name) => name.parse::<Variant>().map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => Variant::default(),
    };
    mount_to_body(move || view! { <App variant=variant/> });
    Ok(())
}
