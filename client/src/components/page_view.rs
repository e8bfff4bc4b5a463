//! Content panel shown while its page is active.

use leptos::prelude::*;
use page_switcher::ViewState;

use crate::state::nav::{AppSwitcher, view_class};

/// Wrapper for one page's content.
///
/// Display and marker classes come from `ViewState`; the page content itself
/// is whatever the caller passes as children.
#[component]
pub fn PageView(page_id: &'static str, children: Children) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let switcher = expect_context::<StoredValue<AppSwitcher, LocalStorage>>();
    let naming = switcher.with_value(|s| s.config().naming.clone());
    let element_id = naming.view_element_id(page_id);

    let class = move || state.with(|s| view_class(&naming, s, page_id));
    let display = move || state.with(|s| s.display_of(page_id).unwrap_or_default().as_css());

    view! {
        <section id=element_id class=class style:display=display>
            {children()}
        </section>
    }
}
