#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::rc::Rc;

use leptos::prelude::*;
use page_switcher::consts::*;
use page_switcher::{CallbackTable, Display, Naming, PageSwitcher, SwitcherConfig, Variant, ViewRegistry, ViewState};

/// Timers in the browser; a manual clock (never advanced) elsewhere.
#[cfg(feature = "hydrate")]
pub type AppScheduler = crate::util::timers::TimeoutScheduler;
#[cfg(not(feature = "hydrate"))]
pub type AppScheduler = page_switcher::ManualScheduler;

pub type AppSwitcher = PageSwitcher<SignalRegistry, AppScheduler>;

/// Navigation button definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub page_id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const DASHBOARD: NavItem = NavItem { page_id: PAGE_DASHBOARD, label: "仪表盘", icon: "\u{25A6}" };
const REVIEW: NavItem = NavItem { page_id: PAGE_REVIEW, label: "代码审查", icon: "\u{2714}" };
const DIFF: NavItem = NavItem { page_id: PAGE_DIFF, label: "差异分析", icon: "\u{00B1}" };
const CONFIG: NavItem = NavItem { page_id: PAGE_CONFIG, label: "配置管理", icon: "\u{2699}" };
const RULE_GROWTH: NavItem = NavItem { page_id: PAGE_RULE_GROWTH, label: "规则成长", icon: "\u{2197}" };
const DEBUG: NavItem = NavItem { page_id: PAGE_DEBUG, label: "调试信息", icon: "\u{2318}" };
const GITHUB_PR: NavItem = NavItem { page_id: PAGE_GITHUB_PR, label: "GitHub PR", icon: "\u{21C4}" };

/// Navigation buttons shown by a dashboard build, in display order.
pub fn nav_items(variant: Variant) -> Vec<NavItem> {
    let extra = match variant {
        Variant::Debug => DEBUG,
        Variant::GithubPr => GITHUB_PR,
    };
    vec![DASHBOARD, REVIEW, DIFF, CONFIG, RULE_GROWTH, extra]
}

/// Fresh state with one nav entry and one hidden view per item.
pub fn initial_state(items: &[NavItem]) -> ViewState {
    ViewState::with_pages(items.iter().map(|item| item.page_id))
}

/// Registry writing into a reactive [`ViewState`].
#[derive(Clone, Copy, Debug)]
pub struct SignalRegistry {
    state: RwSignal<ViewState>,
}

impl SignalRegistry {
    pub fn new(state: RwSignal<ViewState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> RwSignal<ViewState> {
        self.state
    }
}

impl ViewRegistry for SignalRegistry {
    fn set_active(&self, page_id: &str) -> bool {
        self.state.try_update(|s| s.activate(page_id)).unwrap_or(false)
    }

    fn set_visible(&self, page_id: &str, display: Display) -> bool {
        self.state.try_update(|s| s.show(page_id, display)).unwrap_or(false)
    }

    fn set_title(&self, title: &str) {
        self.state.update(|s| s.set_title(title));
    }

    fn has_marker(&self, page_id: &str, class: &str) -> bool {
        self.state.with_untracked(|s| s.has_marker(page_id, class))
    }

    fn add_marker(&self, page_id: &str, class: &str) {
        self.state.update(|s| {
            s.add_marker(page_id, class);
        });
    }
}

/// Switcher for the Leptos shell, writing into `state`.
///
/// In the browser every page callback resolves to the page script function
/// of the same name; elsewhere the table is empty.
pub fn new_switcher(config: SwitcherConfig, state: RwSignal<ViewState>) -> AppSwitcher {
    #[cfg(feature = "hydrate")]
    let callbacks = {
        let mut table = CallbackTable::default();
        crate::util::globals::install_globals(&mut table);
        table
    };
    #[cfg(not(feature = "hydrate"))]
    let callbacks = CallbackTable::default();

    PageSwitcher::new(config, Rc::new(SignalRegistry::new(state)), Rc::new(AppScheduler::new()), callbacks)
}

/// Class attribute for a navigation button.
pub fn nav_class(naming: &Naming, active: bool) -> String {
    if active {
        format!("{} {}", naming.nav_class(), naming.active_class)
    } else {
        naming.nav_class().to_owned()
    }
}

/// Class attribute for a content view: the base class plus its markers.
pub fn view_class(naming: &Naming, state: &ViewState, page_id: &str) -> String {
    let mut class = naming.view_class().to_owned();
    for marker in state.markers(page_id) {
        class.push(' ');
        class.push_str(marker);
    }
    class
}
