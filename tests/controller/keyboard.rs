//! Keyboard contract of the open dialog.

use sitedex::controller::{
    result_element_id, ControllerState, Effect, KeyEvent, PayloadCache, SearchController, CLOSE_ID,
    INPUT_ID,
};
use sitedex::search::QueryEngine;
use sitedex::types::DocKind;

use crate::common::{make_dated_document, make_payload};

fn open_dialog() -> SearchController {
    let payload = make_payload(vec![
        make_dated_document("Shared newest", DocKind::LabNote, "2024-03-01"),
        make_dated_document("Shared middle", DocKind::LabNote, "2024-02-01"),
        make_dated_document("Shared oldest", DocKind::LabNote, "2024-01-01"),
    ]);
    let mut controller = SearchController::new(PayloadCache::new());
    controller.handle_key(&KeyEvent::new("/"));
    controller.payload_loaded(QueryEngine::from_payload(payload));
    assert_eq!(controller.state(), &ControllerState::Ready);
    controller
}

fn press(controller: &mut SearchController, key: &str) -> Option<Vec<Effect>> {
    controller.handle_key(&KeyEvent::new(key))
}

#[test]
fn test_slash_ignored_while_typing_elsewhere() {
    let mut controller = SearchController::new(PayloadCache::new());
    assert_eq!(controller.handle_key(&KeyEvent::new("/").in_editable()), None);
    assert_eq!(controller.state(), &ControllerState::Closed);
}

#[test]
fn test_ctrl_k_opens_even_from_text_field() {
    let mut controller = SearchController::new(PayloadCache::new());
    let effects = controller
        .handle_key(&KeyEvent::new("k").with_ctrl().in_editable())
        .unwrap();
    assert_eq!(effects, vec![Effect::LockScroll, Effect::FetchPayload]);
}

#[test]
fn test_meta_k_open_returns_focus_to_trigger_element() {
    let mut controller = SearchController::new(PayloadCache::new());
    controller
        .handle_key(&KeyEvent::new("k").with_meta().in_editable().focused_on("comment-box"))
        .unwrap();
    controller.payload_loaded(QueryEngine::from_payload(make_payload(vec![])));
    assert_eq!(
        press(&mut controller, "Escape").unwrap(),
        vec![Effect::UnlockScroll, Effect::RestoreFocus(Some("comment-box".into()))]
    );
}

#[test]
fn test_error_state_keeps_tab_inside_panel() {
    let mut controller = SearchController::new(PayloadCache::new());
    controller.handle_key(&KeyEvent::new("/"));
    controller.payload_loaded(QueryEngine::from_json("<html>502</html>"));
    assert!(matches!(controller.state(), ControllerState::Error(_)));
    assert_eq!(controller.focus_trap().elements(), [INPUT_ID, CLOSE_ID]);
    assert_eq!(press(&mut controller, "Tab").unwrap(), vec![Effect::Focus(INPUT_ID.into())]);
    assert_eq!(press(&mut controller, "Tab").unwrap(), vec![Effect::Focus(CLOSE_ID.into())]);
    assert_eq!(press(&mut controller, "Tab").unwrap(), vec![Effect::Focus(INPUT_ID.into())]);
}

#[test]
fn test_plain_k_does_nothing() {
    let mut controller = SearchController::new(PayloadCache::new());
    assert_eq!(press(&mut controller, "k"), None);
}

#[test]
fn test_arrows_cycle_both_ways() {
    let mut controller = open_dialog();
    controller.set_query("shared");
    let order: Vec<usize> = (0..4)
        .map(|_| {
            press(&mut controller, "ArrowDown");
            controller.active_index()
        })
        .collect();
    assert_eq!(order, vec![1, 2, 0, 1]);

    press(&mut controller, "ArrowUp");
    press(&mut controller, "ArrowUp");
    assert_eq!(controller.active_index(), 2);
}

#[test]
fn test_arrows_on_empty_list_stay_at_zero() {
    let mut controller = open_dialog();
    press(&mut controller, "ArrowDown");
    press(&mut controller, "ArrowUp");
    assert_eq!(controller.active_index(), 0);
}

#[test]
fn test_enter_navigates_to_highlighted() {
    let mut controller = open_dialog();
    controller.set_query("shared");
    press(&mut controller, "ArrowDown");
    assert_eq!(controller.active_result().unwrap().title, "Shared middle");

    let effects = press(&mut controller, "Enter").unwrap();
    assert_eq!(
        effects.last(),
        Some(&Effect::Navigate("/blog/shared-middle/".into()))
    );
    assert!(!controller.is_open());
}

#[test]
fn test_escape_restores_focus() {
    let mut controller = SearchController::new(PayloadCache::new());
    controller.open(Some("nav-search-button".into()));
    let effects = press(&mut controller, "Escape").unwrap();
    assert_eq!(
        effects,
        vec![
            Effect::UnlockScroll,
            Effect::RestoreFocus(Some("nav-search-button".into()))
        ]
    );
    assert_eq!(press(&mut controller, "Escape"), None);
}

#[test]
fn test_tab_cycles_within_panel() {
    let mut controller = open_dialog();
    controller.set_query("shared");
    let ids: Vec<Effect> = (0..6)
        .flat_map(|_| press(&mut controller, "Tab").unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            Effect::Focus(CLOSE_ID.into()),
            Effect::Focus(result_element_id(0)),
            Effect::Focus(result_element_id(1)),
            Effect::Focus(result_element_id(2)),
            Effect::Focus(INPUT_ID.into()),
            Effect::Focus(CLOSE_ID.into()),
        ]
    );
}

#[test]
fn test_shift_tab_from_first_wraps_to_last() {
    let mut controller = open_dialog();
    controller.set_query("shared");
    controller.focus_moved(INPUT_ID);
    let effects = controller
        .handle_key(&KeyEvent::new("Tab").with_shift())
        .unwrap();
    assert_eq!(effects, vec![Effect::Focus(result_element_id(2))]);
}

#[test]
fn test_requery_shrinks_focus_ring() {
    let mut controller = open_dialog();
    controller.set_query("shared");
    controller.focus_moved(&result_element_id(2));
    controller.set_query("oldest");
    // The focused row disappeared; Tab re-enters at the first element
    assert_eq!(
        press(&mut controller, "Tab").unwrap(),
        vec![Effect::Focus(INPUT_ID.into())]
    );
    assert_eq!(controller.focus_trap().elements().len(), 3);
}

#[test]
fn test_click_selects_result() {
    let mut controller = open_dialog();
    controller.set_query("shared");
    let effects = controller.select(2).unwrap();
    assert_eq!(effects.last(), Some(&Effect::Navigate("/blog/shared-oldest/".into())));
    assert!(controller.select(0).is_none());
}

#[test]
fn test_unhandled_keys_pass_through() {
    let mut controller = open_dialog();
    assert_eq!(press(&mut controller, "a"), None);
    assert_eq!(press(&mut controller, "PageDown"), None);
}
