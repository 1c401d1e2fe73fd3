use crossterm::event::KeyCode;

use super::{update, Focus, Model, Msg};
use crate::catalog::{Item, Subscription};
use crate::hub::OperatorHubView;
use crate::nav::{Location, MemoryHistory, Navigator, DETAILS_ITEM_PARAM};

/// テスト用の Model を構築するヘルパー
fn make_model(url: &str) -> Model {
    let items = vec![
        Item {
            provider: Some("CNCF".to_string()),
            categories: Some(vec!["Database".to_string()]),
            ..Item::new("etcd", "etcd")
        },
        Item {
            provider: Some("MongoDB, Inc.".to_string()),
            categories: Some(vec!["Database".to_string()]),
            ..Item::new("mongo", "MongoDB")
        },
        Item {
            provider: Some("Red Hat, Inc.".to_string()),
            categories: Some(vec!["Monitoring".to_string()]),
            ..Item::new("prom", "Prometheus")
        },
    ];
    let history = MemoryHistory::new(Location::parse(url).unwrap());
    Model::new(OperatorHubView::mount(
        items,
        vec![Subscription::for_package("etcd")],
        history,
    ))
}

fn url_param(model: &Model) -> Option<String> {
    model
        .hub
        .navigator()
        .location()
        .param(DETAILS_ITEM_PARAM)
        .map(|s| s.to_string())
}

// ============================================================================
// key_to_msg
// ============================================================================

#[test]
fn enter_opens_details_in_grid() {
    let model = make_model("/operatorhub");
    assert_eq!(model.key_to_msg(KeyCode::Enter), Some(Msg::OpenDetails));
}

#[test]
fn esc_closes_details_when_open() {
    let model = make_model("/operatorhub?details-item=etcd");
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::CloseDetails));
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), None);
}

#[test]
fn slash_focuses_search() {
    let model = make_model("/operatorhub");
    assert_eq!(model.key_to_msg(KeyCode::Char('/')), Some(Msg::SearchFocus));
}

#[test]
fn chars_go_to_search_when_focused() {
    let mut model = make_model("/operatorhub");
    model.focus = Focus::Search;
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::SearchInput('q')));
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::GridFocus));
}

// ============================================================================
// update
// ============================================================================

#[test]
fn mount_selects_open_item() {
    // 名前順: MongoDB, Prometheus, etcd
    let model = make_model("/operatorhub?details-item=prom");
    assert_eq!(model.selected, 1);
    assert!(model.hub.is_overlay_open());
}

#[test]
fn open_and_close_sync_url() {
    let mut model = make_model("/operatorhub");
    update(&mut model, Msg::Right);
    update(&mut model, Msg::OpenDetails);
    assert_eq!(url_param(&model).as_deref(), Some("prom"));
    assert_eq!(
        model.hub.details_item().map(|i| i.uid.as_str()),
        Some("prom")
    );

    update(&mut model, Msg::CloseDetails);
    assert!(url_param(&model).is_none());
    assert!(!model.hub.is_overlay_open());
}

#[test]
fn selection_is_clamped_by_search() {
    let mut model = make_model("/operatorhub");
    update(&mut model, Msg::Right);
    update(&mut model, Msg::Right);
    assert_eq!(model.selected, 2);
    for c in "etcd".chars() {
        update(&mut model, Msg::SearchInput(c));
    }
    assert_eq!(model.visible_count(), 1);
    assert_eq!(model.selected, 0);
}

#[test]
fn grid_moves_by_columns() {
    let mut model = make_model("/operatorhub");
    model.columns = 2;
    update(&mut model, Msg::Down);
    assert_eq!(model.selected, 2);
    update(&mut model, Msg::Down);
    assert_eq!(model.selected, 2);
    update(&mut model, Msg::Up);
    assert_eq!(model.selected, 0);
}

#[test]
fn sidebar_activates_category_and_filter() {
    let mut model = make_model("/operatorhub");
    // 0: All Items, 1: Database, 2: Monitoring, 3..: providers
    update(&mut model, Msg::SidebarFocus);
    update(&mut model, Msg::SidebarDown);
    update(&mut model, Msg::SidebarActivate);
    assert_eq!(model.hub.page().selected_category(), Some("Database"));
    assert_eq!(model.visible_count(), 2);

    // 3: CNCF
    update(&mut model, Msg::SidebarDown);
    update(&mut model, Msg::SidebarDown);
    update(&mut model, Msg::SidebarActivate);
    assert_eq!(model.visible_count(), 1);

    update(&mut model, Msg::ClearFilters);
    assert_eq!(model.visible_count(), 3);
    assert!(model.hub.page().selected_category().is_none());
}

#[test]
fn empty_grid_open_does_nothing() {
    let mut model = make_model("/operatorhub");
    for c in "zzz".chars() {
        update(&mut model, Msg::SearchInput(c));
    }
    update(&mut model, Msg::OpenDetails);
    assert!(!model.hub.is_overlay_open());
    assert!(url_param(&model).is_none());
}

// ============================================================================
// Reload
// ============================================================================

#[test]
fn reload_key_requires_source() {
    let model = make_model("/operatorhub");
    assert_eq!(model.key_to_msg(KeyCode::Char('r')), None);
    let model = model.with_source("items.json".into());
    assert_eq!(model.key_to_msg(KeyCode::Char('r')), Some(Msg::Reload));
}

#[test]
fn reload_replaces_items_and_keeps_open_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, r#"[{"uid": "mongo", "name": "MongoDB"}]"#).unwrap();

    let mut model = make_model("/operatorhub?details-item=etcd").with_source(path);
    update(&mut model, Msg::Reload);

    assert!(model.last_error.is_none());
    assert_eq!(model.visible_count(), 1);
    assert_eq!(
        model.hub.details_item().map(|i| i.uid.as_str()),
        Some("etcd")
    );
    assert_eq!(url_param(&model).as_deref(), Some("etcd"));
}

#[test]
fn reload_failure_keeps_items_and_records_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = make_model("/operatorhub").with_source(dir.path().join("missing.json"));
    update(&mut model, Msg::Reload);
    assert!(model.last_error.is_some());
    assert_eq!(model.visible_count(), 3);
}
