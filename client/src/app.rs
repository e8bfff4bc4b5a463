//! Root shell component: navigation, content views and document title.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use page_switcher::consts::PAGE_DASHBOARD;
use page_switcher::{SwitcherConfig, Variant};

use crate::components::{nav_bar::NavBar, page_view::PageView};
use crate::state::nav::{initial_state, nav_items, new_switcher};

/// Root application component.
///
/// Provides the view state and the switcher as context, then opens the
/// dashboard.
#[component]
pub fn App(#[prop(optional)] variant: Variant) -> impl IntoView {
    provide_meta_context();

    let items = nav_items(variant);
    let state = RwSignal::new(initial_state(&items));
    let switcher = StoredValue::new_local(new_switcher(SwitcherConfig::for_variant(variant), state));

    provide_context(state);
    provide_context(switcher);

    switcher.with_value(|s| s.switch_page(PAGE_DASHBOARD));

    let title = move || state.with(|s| s.title().to_owned());
    let views = items
        .iter()
        .map(|item| {
            let label = item.label;
            view! {
                <PageView page_id=item.page_id>
                    <h2 class="page-view__heading">{label}</h2>
                </PageView>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=title/>
        <div class="app">
            <NavBar items=items/>
            <main class="app__views">{views}</main>
        </div>
    }
}
