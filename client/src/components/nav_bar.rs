//! Navigation bar with one button per page.

use leptos::prelude::*;
use page_switcher::ViewState;

use crate::state::nav::{AppSwitcher, NavItem, nav_class};

/// Row of navigation buttons.
///
/// Highlights the active page from `ViewState` and switches pages on click.
#[component]
pub fn NavBar(items: Vec<NavItem>) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let switcher = expect_context::<StoredValue<AppSwitcher, LocalStorage>>();
    let naming = switcher.with_value(|s| s.config().naming.clone());

    let buttons = items
        .into_iter()
        .map(|item| {
            let page_id = item.page_id;
            let element_id = naming.nav_element_id(page_id);
            let item_naming = naming.clone();

            let class = move || nav_class(&item_naming, state.with(|s| s.is_active(page_id)));
            let on_click = move |_| {
                switcher.with_value(|s| s.switch_page(page_id));
            };

            view! {
                <button
                    id=element_id
                    class=class
                    title=item.label
                    on:click=on_click
                >
                    <span class="nav-btn__icon">{item.icon}</span>
                    <span class="nav-btn__label">{item.label}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="nav-bar">{buttons}</nav> }
}
