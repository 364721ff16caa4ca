//! Integration tests for the JSON command protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> dispatch -> response.

use garden_designer_lib::command::{execute_json, execute_json_batch, inspect};
use garden_designer_lib::fixtures::session;

#[test]
fn test_command_add_and_update() {
    let mut s = session();

    let json = r#"{"type": "add_element", "payload": {"element": {"id": "rose", "type": "flower", "position": {"x": 5, "y": 5}}}}"#;
    let resp = execute_json(&mut s, json).unwrap();
    assert!(resp.success);

    let json = r#"{"type": "update_element", "payload": {"id": "rose", "changes": {"position": {"x": 40}, "rotation": 90}}}"#;
    let resp = execute_json(&mut s, json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["version"], 2);

    let rose = s.element_by_id("rose").unwrap();
    assert_eq!((rose.position.x, rose.position.y), (40.0, 5.0));
    assert_eq!(rose.rotation, 90.0);
}

#[test]
fn test_command_full_workflow_via_json_batch() {
    let mut s = session();

    let json = r#"[
        {"type": "add_element", "payload": {"element": {"id": "a", "position": {"x": 0, "y": 0}}}},
        {"type": "add_element", "payload": {"element": {"id": "b", "position": {"x": 30, "y": 0}}}},
        {"type": "add_element", "payload": {"element": {"id": "c", "position": {"x": 100, "y": 0}}}},
        {"type": "select_all"},
        {"type": "align_selection", "payload": {"align": "distribute-x"}},
        {"type": "set_setting", "payload": {"key": "gridSize", "value": 12}},
        {"type": "reorder_layer", "payload": {"elementId": "a", "direction": "front"}}
    ]"#;

    let responses = execute_json_batch(&mut s, json).unwrap();
    assert_eq!(responses.len(), 7);
    for resp in &responses {
        assert!(resp.success, "Failed: {:?}", resp.error);
    }
    assert_eq!(s.element_by_id("b").unwrap().position.x, 50.0);
    assert_eq!(s.settings().grid_size, 12.0);
    assert_eq!(s.garden().elements[2].id, "a");

    let data = inspect(&s);
    assert_eq!(data["layers"][0]["id"], "a");
    assert_eq!(data["history_depth"], 5);
    assert_eq!(data["selection"].as_array().unwrap().len(), 3);
}

#[test]
fn test_command_errors_do_not_stop_batch() {
    let mut s = session();

    let json = r#"[
        {"type": "add_element", "payload": {"element": {"id": "a"}}},
        {"type": "add_element", "payload": {"element": {"id": "a"}}},
        {"type": "set_setting", "payload": {"key": "gridSize", "value": 0}},
        {"type": "water_plants"},
        {"type": "duplicate_element", "payload": {"elementId": "a"}}
    ]"#;

    let responses = execute_json_batch(&mut s, json).unwrap();
    assert!(responses[0].success);
    assert!(!responses[1].success);
    assert!(!responses[2].success);
    assert!(responses[3].success);
    assert_eq!(responses[3].data.as_ref().unwrap()["transition"], "unchanged");
    assert!(responses[4].success);

    assert_eq!(s.garden().elements.len(), 2);
    assert_eq!(s.settings().grid_size, 24.0);
}

#[test]
fn test_command_undo_redo_via_json() {
    let mut s = session();
    execute_json(&mut s, r#"{"type": "add_element", "payload": {"element": {"id": "a"}}}"#).unwrap();

    let resp = execute_json(&mut s, r#"{"type": "undo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["transition"], "undone");
    assert!(s.garden().elements.is_empty());

    let resp = execute_json(&mut s, r#"{"type": "redo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["transition"], "redone");
    assert_eq!(s.garden().elements.len(), 1);

    let resp = execute_json(&mut s, r#"{"type": "redo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["transition"], "unchanged");
}

#[test]
fn test_command_init_document() {
    let mut s = session();
    let json = r#"{"type": "init_document", "payload": {"garden": {
        "id": "yard",
        "name": "Back Yard",
        "elements": [{"id": "pond", "type": "water", "size": {"width": 120, "height": 80}, "zIndex": 1}],
        "selection": ["pond", "gone"],
        "settings": {"gridSize": 16, "snapToGrid": false, "zoom": 1.5, "background": "grass"}
    }}}"#;

    let resp = execute_json(&mut s, json).unwrap();
    assert!(resp.success);
    assert_eq!(s.garden().id, "yard");
    assert_eq!(s.selection(), ["pond".to_string()]);
    assert_eq!(s.settings().background, "grass");
    assert!(s.can_undo());
}

#[test]
fn test_command_batch_rejects_non_array() {
    let mut s = session();
    let err = execute_json_batch(&mut s, r#"{"type": "undo"}"#).unwrap_err();
    assert!(err.contains("Invalid commands JSON"));
}

#[test]
fn test_command_init_document_enforces_settings_bounds() {
    let mut s = session();
    let json = r#"{"type": "init_document", "payload": {"garden": {"settings": {"zoom": 99, "gridSize": 16}}}}"#;
    let resp = execute_json(&mut s, json).unwrap();
    assert!(resp.success);
    assert_eq!(s.settings().zoom, 4.0);

    let json = r#"{"type": "init_document", "payload": {"garden": {"settings": {"zoom": 1, "gridSize": -5}}}}"#;
    let resp = execute_json(&mut s, json).unwrap();
    assert!(!resp.success);
    assert_eq!(s.settings().grid_size, 16.0);
}

#[test]
fn test_command_add_element_rejects_degenerate_size() {
    let mut s = session();
    let json = r#"{"type": "add_element", "payload": {"element": {"id": "a", "size": {"width": 0, "height": -10}}}}"#;
    let resp = execute_json(&mut s, json).unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("size"));
    assert!(s.garden().elements.is_empty());
}
