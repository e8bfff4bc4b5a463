//! View registry over the live document.
//!
//! Navigation buttons and content views are found by selector and matched to
//! page ids through their element ids (`nav-<id>`, `page-<id>` by default).
//! DOM calls that throw are logged at debug and otherwise ignored.

use page_switcher::{Display, Naming, ViewRegistry};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub struct DomRegistry {
    document: Document,
    naming: Naming,
}

impl DomRegistry {
    pub fn new(document: Document, naming: Naming) -> Self {
        Self { document, naming }
    }

    /// Registry over the current window's document, if there is one.
    pub fn from_window(naming: Naming) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, naming))
    }

    fn elements(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("selector {selector} rejected: {e:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    fn view(&self, page_id: &str) -> Option<Element> {
        self.document
            .get_element_by_id(&self.naming.view_element_id(page_id))
    }
}

impl ViewRegistry for DomRegistry {
    fn set_active(&self, page_id: &str) -> bool {
        let target = self.naming.nav_element_id(page_id);
        let mut matched = false;
        for el in self.elements(&self.naming.nav_selector) {
            let active = el.id() == target;
            matched |= active;
            if let Err(e) = el
                .class_list()
                .toggle_with_force(&self.naming.active_class, active)
            {
                log::debug!("class toggle on #{} failed: {e:?}", el.id());
            }
        }
        matched
    }

    fn set_visible(&self, page_id: &str, display: Display) -> bool {
        let target = self.naming.view_element_id(page_id);
        let mut matched = false;
        for el in self.elements(&self.naming.view_selector) {
            let shown = el.id() == target;
            matched |= shown;
            let Some(html) = el.dyn_ref::<HtmlElement>() else {
                continue;
            };
            let value = if shown { display } else { Display::None };
            if let Err(e) = html.style().set_property("display", value.as_css()) {
                log::debug!("display on #{} failed: {e:?}", el.id());
            }
        }
        matched
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn has_marker(&self, page_id: &str, class: &str) -> bool {
        self.view(page_id)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn add_marker(&self, page_id: &str, class: &str) {
        let Some(el) = self.view(page_id) else {
            log::debug!("no view for {page_id}; marker {class} dropped");
            return;
        };
        if let Err(e) = el.class_list().add_1(class) {
            log::debug!("marker {class} on #{} failed: {e:?}", el.id());
        }
    }
}
