use serde_json::json;
use text_size::TextSize;

use crate::protocol::WorkerMessage;
use crate::{NodeKey, Point, Sibling, SnapshotError, SnapshotNode, decode_message, decode_tree};

#[test]
fn absent_fields_take_defaults() {
    let node: SnapshotNode = serde_json::from_value(json!({
        "text": "abc",
        "startPosition": { "row": 0, "column": 0 },
        "endPosition": { "row": 0, "column": 3 },
    }))
    .unwrap();

    assert_eq!(node.kind, None);
    assert_eq!(node.id, None);
    assert_eq!(node.start_index, TextSize::new(0));
    assert_eq!(node.end_index, TextSize::new(0));
    assert!(node.children.is_empty());
    assert!(node.is_named);
    assert!(!node.has_error);
    assert!(!node.is_missing);
    assert_eq!(node.end_position, Some(Point::new(0, 3)));
}

#[test]
fn worker_only_fields_are_ignored() {
    let node: SnapshotNode = serde_json::from_value(json!({
        "id": 7,
        "type": "identifier",
        "childCount": 0,
        "namedChildCount": 0,
        "hasNextSibling": true,
        "isNamed": false,
    }))
    .unwrap();

    assert_eq!(node.id, Some(NodeKey(7)));
    assert_eq!(node.kind.as_deref(), Some("identifier"));
    assert!(!node.is_named);
}

#[test]
fn sibling_references_are_inline_nodes() {
    let node: SnapshotNode = serde_json::from_value(json!({
        "type": "a",
        "nextSibling": { "id": 2, "type": "b", "text": "b" },
    }))
    .unwrap();

    let next = node.sibling(Sibling::Next).unwrap();
    assert_eq!(next.id, Some(NodeKey(2)));
    assert_eq!(next.text, "b");
    assert!(node.sibling(Sibling::Previous).is_none());
}

#[test]
fn points_order_row_major() {
    assert!(Point::new(0, 9) < Point::new(1, 0));
    assert!(Point::new(1, 2) < Point::new(1, 3));
    assert_eq!(Point::new(4, 4), Point::new(4, 4));
}

#[test]
fn subtree_len_counts_every_node() {
    let mut root = SnapshotNode::new("root");
    let mut inner = SnapshotNode::new("inner");
    inner.children.push(SnapshotNode::new("leaf"));
    root.children.push(inner);
    root.children.push(SnapshotNode::new("leaf"));

    assert_eq!(root.subtree_len(), 4);
}

#[test]
fn bare_tree_decodes() {
    let tree = decode_tree(r#"{ "rootNode": { "type": "source_code" }, "hasErrors": false }"#)
        .unwrap();

    assert_eq!(tree.root_node.kind.as_deref(), Some("source_code"));
    assert_eq!(tree.has_errors, Some(false));
    assert_eq!(tree.file_id, None);
}

#[test]
fn parse_result_message_decodes_to_tree() {
    let json = json!({
        "type": "parseResult",
        "id": 3,
        "fileId": "main.p",
        "success": true,
        "tree": { "rootNode": { "type": "source_code" }, "hasErrors": true },
        "errorRanges": [{
            "startPosition": { "row": 1, "column": 0 },
            "endPosition": { "row": 1, "column": 4 },
            "startIndex": 10,
            "endIndex": 14,
        }],
    })
    .to_string();

    let tree = decode_tree(&json).unwrap();
    assert_eq!(tree.file_id.as_deref(), Some("main.p"));
    assert_eq!(tree.has_errors, Some(true));

    let WorkerMessage::ParseResult(response) = decode_message(&json).unwrap() else {
        panic!("expected a parse result");
    };
    assert_eq!(response.eol, "\n");
    assert_eq!(response.error_ranges.len(), 1);
    assert_eq!(response.error_ranges[0].end_index, TextSize::new(14));
}

#[test]
fn failed_parse_reports_worker_message() {
    let json = r#"{ "type": "parseResult", "id": 9, "success": false, "error": "Parser not initialized" }"#;

    let err = decode_tree(json).unwrap_err();
    assert!(matches!(
        &err,
        SnapshotError::WorkerFailed { id: 9, message } if message == "Parser not initialized"
    ));
    assert_eq!(err.to_string(), "worker failed to parse request 9: Parser not initialized");
}

#[test]
fn successful_parse_without_tree_is_an_error() {
    let err = decode_tree(r#"{ "type": "parseResult", "id": 1, "success": true }"#).unwrap_err();
    assert!(matches!(err, SnapshotError::MissingTree { id: 1 }));
}

#[test]
fn other_messages_are_not_trees() {
    let err = decode_tree(r#"{ "type": "pong", "id": 4, "timestamp": 100 }"#).unwrap_err();
    assert!(matches!(err, SnapshotError::UnexpectedMessage { kind: "pong" }));

    let message = decode_message(r#"{ "type": "formatResult", "id": 2, "success": true }"#).unwrap();
    assert_eq!(message, WorkerMessage::Unknown);

    let message = decode_message(r#"{ "type": "log", "message": "Worker started..." }"#).unwrap();
    assert_eq!(message, WorkerMessage::Log { message: "Worker started...".to_owned() });
}

#[test]
fn malformed_json_is_a_decode_error() {
    let err = decode_tree("{ \"rootNode\": ").unwrap_err();
    assert!(matches!(err, SnapshotError::Decode(_)));
}
