use crossterm::event::KeyCode;
use std::sync::Arc;
use tempfile::TempDir;

use super::{update, Focus, Model, Msg};
use edit_menu_filter::catalog::ItemCatalog;
use edit_menu_filter::fs::RealFs;
use edit_menu_filter::{FilterContext, FilterMode, MenuKind, OptionId};

const CATALOG: &str = r#"{
  "categories": [
    {
      "name": "Sweets",
      "kind": "menu",
      "items": [
        { "file": "pie.png", "name": "Apple Pie", "description": "baked" },
        { "file": "banana.png", "name": "Banana", "description": "yellow fruit" },
        { "file": "", "name": "無し" }
      ]
    },
    {
      "name": "Bakery",
      "kind": "menu",
      "items": [
        { "file": "cherry.png", "name": "Cherry Pie" },
        { "file": "donut.png", "name": "Donut" }
      ]
    },
    {
      "name": "Sets",
      "kind": "set",
      "items": [{ "file": "s1", "name": "Summer Set" }]
    }
  ]
}"#;

/// テスト用の Model を構築するヘルパー
fn make_model(temp: &TempDir) -> Model {
    let catalog = ItemCatalog::parse(CATALOG).unwrap();
    let ctx = FilterContext::new(temp.path(), Arc::new(RealFs));
    Model::new(&catalog, &ctx).unwrap()
}

fn visible_names(model: &Model) -> Vec<String> {
    model
        .tab()
        .visible_items()
        .iter()
        .map(|item| item.display_name.clone())
        .collect()
}

fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        update(model, Msg::Input(c));
    }
}

// ============================================================================
// 初期状態
// ============================================================================

#[test]
fn new_model_has_one_tab_per_menu_kind() {
    let temp = TempDir::new().unwrap();
    let model = make_model(&temp);

    let kinds: Vec<MenuKind> = model.tabs.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, MenuKind::all().to_vec());
    assert_eq!(model.tab().category_name(), Some("Sweets"));
    assert_eq!(model.tabs[MenuKind::Set.index()].category_name(), Some("Sets"));
    assert_eq!(model.tabs[MenuKind::Preset.index()].category_name(), None);
    assert_eq!(model.focus, Focus::Input);
}

// ============================================================================
// キー入力 → Msg
// ============================================================================

#[test]
fn function_keys_toggle_options_in_any_focus() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);

    for focus in [Focus::Input, Focus::List, Focus::History] {
        model.focus = focus;
        assert_eq!(model.key_to_msg(KeyCode::F(2)), Some(Msg::Toggle(OptionId::Mode)));
        assert_eq!(
            model.key_to_msg(KeyCode::F(3)),
            Some(Msg::Toggle(OptionId::IgnoreCase))
        );
        assert_eq!(
            model.key_to_msg(KeyCode::F(4)),
            Some(Msg::Toggle(OptionId::IncludeDescription))
        );
    }
}

#[test]
fn esc_on_empty_input_quits() {
    let temp = TempDir::new().unwrap();
    let model = make_model(&temp);
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::Quit));
}

#[test]
fn esc_with_text_clears() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    type_text(&mut model, "pie");
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::Clear));
}

#[test]
fn characters_are_input_only_when_input_focused() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Input('q')));

    model.focus = Focus::List;
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit));
    assert_eq!(model.key_to_msg(KeyCode::Char('/')), Some(Msg::FocusInput));
}

#[test]
fn tab_keys_are_ignored_in_history_popup() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    model.focus = Focus::History;
    assert_eq!(model.key_to_msg(KeyCode::Tab), None);
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::CloseHistory));
}

// ============================================================================
// 入力と確定
// ============================================================================

#[test]
fn typing_does_not_filter_until_submit() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);

    type_text(&mut model, "Pie");
    assert_eq!(visible_names(&model).len(), 3);
    assert_eq!(model.tab().view.query_text, "Pie");

    update(&mut model, Msg::Submit);
    assert_eq!(visible_names(&model), vec!["Apple Pie", "無し"]);
    assert_eq!(model.tab().session.history(), ["Pie".to_string()]);
}

#[test]
fn backspace_to_empty_clears_filter() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    type_text(&mut model, "B");
    update(&mut model, Msg::Submit);
    assert_eq!(visible_names(&model), vec!["Banana", "無し"]);

    update(&mut model, Msg::Backspace);
    assert_eq!(visible_names(&model).len(), 3);
    assert!(!model.tab().session.is_filtered());
}

#[test]
fn clear_resets_input_and_items() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    type_text(&mut model, "Banana");
    update(&mut model, Msg::Submit);
    model.focus = Focus::List;

    update(&mut model, Msg::Clear);
    assert_eq!(model.tab().view.query_text, "");
    assert_eq!(visible_names(&model).len(), 3);
    assert_eq!(model.focus, Focus::Input);
}

#[test]
fn tabs_keep_independent_sessions() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    type_text(&mut model, "Banana");
    update(&mut model, Msg::Submit);

    update(&mut model, Msg::NextTab);
    assert_eq!(model.tab().kind, MenuKind::Set);
    assert!(!model.tab().session.is_filtered());
    assert_eq!(model.tab().view.query_text, "");

    update(&mut model, Msg::PrevTab);
    assert_eq!(visible_names(&model), vec!["Banana", "無し"]);
}

// ============================================================================
// カテゴリ切り替え（作り直し）
// ============================================================================

#[test]
fn category_switch_reapplies_filter_once_items_arrive() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    type_text(&mut model, "Pie");
    update(&mut model, Msg::Submit);

    update(&mut model, Msg::NextCategory);
    assert_eq!(model.tab().category_name(), Some("Bakery"));
    assert!(model.tab().view.scroll_hidden);
    assert!(model.tab().session.is_reapply_pending());

    // 最初のフレームではまだ空
    update(&mut model, Msg::Tick);
    assert!(model.tab().session.is_reapply_pending());
    assert_eq!(model.tab().items.items().len(), 2);

    update(&mut model, Msg::Tick);
    assert!(!model.tab().session.is_reapply_pending());
    assert!(!model.tab().view.scroll_hidden);
    assert_eq!(visible_names(&model), vec!["Cherry Pie"]);
}

#[test]
fn category_switch_while_idle_shows_everything() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);

    update(&mut model, Msg::PrevCategory);
    assert!(!model.tab().view.scroll_hidden);
    update(&mut model, Msg::Tick);
    assert_eq!(visible_names(&model), vec!["Cherry Pie", "Donut"]);
}

// ============================================================================
// オプション・履歴
// ============================================================================

#[test]
fn toggling_mode_persists_and_reapplies() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    type_text(&mut model, "apple banana");
    update(&mut model, Msg::Toggle(OptionId::IgnoreCase));
    update(&mut model, Msg::Submit);
    assert_eq!(visible_names(&model), vec!["無し"]);

    update(&mut model, Msg::Toggle(OptionId::Mode));
    assert_eq!(model.tab().session.options().mode, FilterMode::Or);
    assert_eq!(visible_names(&model), vec!["Apple Pie", "Banana", "無し"]);
    assert!(model.status.is_none());
    assert!(temp.path().join("EditMenuFilter.menu.json").exists());
}

#[test]
fn history_popup_selects_entry() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    for query in ["Banana", "Pie"] {
        update(&mut model, Msg::Clear);
        type_text(&mut model, query);
        update(&mut model, Msg::Submit);
    }
    update(&mut model, Msg::Clear);

    update(&mut model, Msg::OpenHistory);
    assert_eq!(model.focus, Focus::History);
    update(&mut model, Msg::HistoryMove(1));
    update(&mut model, Msg::HistorySelect);

    assert_eq!(model.focus, Focus::Input);
    assert_eq!(model.tab().view.query_text, "Banana");
    assert_eq!(visible_names(&model), vec!["Banana", "無し"]);
    assert_eq!(model.tab().session.history()[0], "Banana");
}

#[test]
fn history_popup_does_not_open_without_entries() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    update(&mut model, Msg::OpenHistory);
    assert_eq!(model.focus, Focus::Input);
}

#[test]
fn list_selection_stays_in_bounds() {
    let temp = TempDir::new().unwrap();
    let mut model = make_model(&temp);
    update(&mut model, Msg::FocusList);
    for _ in 0..5 {
        update(&mut model, Msg::ListMove(1));
    }
    assert_eq!(model.tab().view.list_state.selected(), Some(2));
    update(&mut model, Msg::ToggleDetail);
    assert!(model.tab().view.show_detail);
    assert_eq!(model.tab().selected_item().map(|i| i.display_name.as_str()), Some("無し"));
}
