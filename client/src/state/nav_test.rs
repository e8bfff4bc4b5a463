use super::*;

// =============================================================
// nav_items
// =============================================================

#[test]
fn debug_build_ends_with_debug_page() {
    let items = nav_items(Variant::Debug);
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].page_id, "dashboard");
    assert_eq!(items[5].page_id, "debug");
}

#[test]
fn github_pr_build_ends_with_pr_page() {
    let items = nav_items(Variant::GithubPr);
    assert_eq!(items[5].page_id, "github-pr");
    assert!(items.iter().all(|item| item.page_id != "debug"));
}

#[test]
fn every_nav_item_has_a_title() {
    for variant in [Variant::Debug, Variant::GithubPr] {
        let titles = page_switcher::SwitcherConfig::for_variant(variant).title_table();
        for item in nav_items(variant) {
            assert!(titles.contains(item.page_id), "{} has no title", item.page_id);
        }
    }
}

#[test]
fn nav_item_ids_are_distinct() {
    let items = nav_items(Variant::Debug);
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate() {
            if i != j {
                assert_ne!(a.page_id, b.page_id);
            }
        }
    }
}

#[test]
fn initial_state_is_inactive_and_hidden() {
    let state = initial_state(&nav_items(Variant::Debug));
    assert!(state.active_navs().is_empty());
    assert!(state.visible_views().is_empty());
    assert_eq!(state.display_of("review"), Some(Display::None));
}

// =============================================================
// SignalRegistry
// =============================================================

#[test]
fn signal_registry_writes_through() {
    let state = RwSignal::new(initial_state(&nav_items(Variant::Debug)));
    let registry = SignalRegistry::new(state);

    assert!(registry.set_active("review"));
    assert!(registry.set_visible("review", Display::Flex));
    registry.set_title("代码审查 - DeltaConverge");

    let snap = state.get_untracked();
    assert_eq!(snap.active_navs(), vec!["review"]);
    assert_eq!(snap.visible_views(), vec!["review"]);
    assert_eq!(snap.title(), "代码审查 - DeltaConverge");
}

#[test]
fn signal_registry_unknown_page_reports_miss() {
    let registry = SignalRegistry::new(RwSignal::new(initial_state(&nav_items(Variant::Debug))));
    assert!(!registry.set_active("zzz"));
    assert!(!registry.set_visible("zzz", Display::Block));
}

#[test]
fn signal_registry_markers() {
    let registry = SignalRegistry::new(RwSignal::new(initial_state(&nav_items(Variant::Debug))));
    assert!(!registry.has_marker("review", "animated"));
    registry.add_marker("review", "animated");
    assert!(registry.has_marker("review", "animated"));
    assert!(registry.state().get_untracked().has_marker("review", "animated"));
}

// =============================================================
// new_switcher / view_class
// =============================================================

#[test]
fn shell_switcher_drives_signal_state() {
    let state = RwSignal::new(initial_state(&nav_items(Variant::Debug)));
    let switcher = new_switcher(SwitcherConfig::default(), state);

    switcher.switch_page("dashboard");
    let snap = state.get_untracked();
    assert_eq!(snap.active_navs(), vec!["dashboard"]);
    assert_eq!(snap.display_of("dashboard"), Some(Display::Block));
    assert_eq!(snap.title(), "仪表盘 - DeltaConverge");

    switcher.switch_page("review");
    assert_eq!(state.get_untracked().display_of("review"), Some(Display::Flex));
    assert_eq!(switcher.scheduled_tasks(), 2);
}

#[test]
fn view_class_lists_markers() {
    let naming = Naming::default();
    let mut state = initial_state(&nav_items(Variant::Debug));
    assert_eq!(view_class(&naming, &state, "review"), "page-view");
    state.add_marker("review", "animated");
    assert_eq!(view_class(&naming, &state, "review"), "page-view animated");
    assert_eq!(view_class(&naming, &state, "zzz"), "page-view");
}

#[test]
fn nav_class_marks_active_button() {
    let naming = Naming::default();
    assert_eq!(nav_class(&naming, false), "nav-btn");
    assert_eq!(nav_class(&naming, true), "nav-btn active");
}

#[test]
fn custom_naming_reaches_shell_classes() {
    let config = SwitcherConfig::from_json(
        r#"{"naming":{"navSelector":".tab","viewSelector":".panel","activeClass":"current"}}"#,
    )
    .unwrap();
    let state = RwSignal::new(initial_state(&nav_items(Variant::Debug)));
    let switcher = new_switcher(config, state);
    switcher.switch_page("review");

    let naming = &switcher.config().naming;
    let snap = state.get_untracked();
    assert_eq!(nav_class(naming, snap.is_active("review")), "tab current");
    assert_eq!(nav_class(naming, snap.is_active("dashboard")), "tab");
    assert_eq!(view_class(naming, &snap, "review"), "panel");
}
