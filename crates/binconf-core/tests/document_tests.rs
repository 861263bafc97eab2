use binconf_core::{ConfError, Document, Node, NodeKey, Value};

#[test]
fn set_then_get_returns_the_value() {
    let mut doc = Document::new();
    doc.set("name", "awplc").unwrap();
    assert_eq!(doc.get("name"), Some(&Value::String("awplc".to_string())));
}

#[test]
fn set_overwrites_existing_leaf() {
    let mut doc = Document::new();
    doc.set("age", 18i32).unwrap();
    doc.set("age", 20i64).unwrap();
    assert_eq!(doc.get("age"), Some(&Value::Int64(20)));
}

#[test]
fn set_creates_intermediate_objects() {
    let mut doc = Document::new();
    doc.set("server.tls.enabled", true).unwrap();

    assert!(doc.exists("server"));
    assert!(doc.exists("server.tls"));
    assert!(doc.get_node("server").unwrap().is_container());
    assert_eq!(doc.get("server.tls.enabled"), Some(&Value::Bool(true)));
}

#[test]
fn get_on_container_yields_none() {
    let mut doc = Document::new();
    doc.set("server.host", "localhost").unwrap();
    assert_eq!(doc.get("server"), None);
    assert!(doc.get_node("server").is_some());
}

#[test]
fn get_on_absent_path_yields_none() {
    let doc = Document::new();
    assert_eq!(doc.get("no.such.path"), None);
    assert!(!doc.exists("no.such.path"));
}

#[test]
fn set_into_existing_array_by_index() {
    let mut doc = Document::from_json_str(r#"{"items": [10, 20, 30]}"#).unwrap();
    doc.set("items.1", 99i32).unwrap();
    assert_eq!(doc.get("items.1"), Some(&Value::Int32(99)));
    assert_eq!(doc.get_node("items").unwrap().len(), 3);
}

#[test]
fn set_past_array_end_pads_with_nulls() {
    let mut doc = Document::from_json_str(r#"{"items": [1]}"#).unwrap();
    doc.set("items.3", "tail").unwrap();

    let items = doc.get_node("items").unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(doc.get("items.1"), Some(&Value::Null));
    assert_eq!(doc.get("items.2"), Some(&Value::Null));
    assert_eq!(
        doc.get("items.3"),
        Some(&Value::String("tail".to_string()))
    );
}

#[test]
fn all_digit_segment_is_a_member_name_against_objects() {
    let mut doc = Document::new();
    // No array exists at "weights", so "0" names an object member.
    doc.set("weights.0", 1.5f64).unwrap();
    let weights = doc.get_node("weights").unwrap();
    assert!(matches!(weights, Node::Object(_)));
    assert_eq!(doc.get("weights.0"), Some(&Value::Float64(1.5)));
}

#[test]
fn non_numeric_segment_into_array_is_a_type_mismatch() {
    let mut doc = Document::from_json_str(r#"{"items": [1, 2]}"#).unwrap();
    let err = doc.set("items.first", 0i32).unwrap_err();
    assert!(matches!(err, ConfError::TypeMismatch { .. }));
}

#[test]
fn set_through_a_leaf_is_a_type_mismatch() {
    let mut doc = Document::new();
    doc.set("port", 8080i32).unwrap();
    let err = doc.set("port.inner", 1i32).unwrap_err();
    assert!(matches!(err, ConfError::TypeMismatch { .. }));
}

#[test]
fn set_onto_a_container_is_a_type_mismatch() {
    let mut doc = Document::new();
    doc.set("server.host", "localhost").unwrap();
    let err = doc.set("server", 1i32).unwrap_err();
    assert!(matches!(err, ConfError::TypeMismatch { .. }));
}

#[test]
fn failed_set_leaves_the_document_unmodified() {
    let mut doc = Document::new();
    doc.set("port", 8080i32).unwrap();
    let before = doc.clone();

    // The first segment would create "a" before the walk reaches the leaf
    // at "port"; a failed write must not leave that behind.
    assert!(doc.set("port.deep.deeper", 1i32).is_err());
    assert_eq!(doc, before);
}

#[test]
fn set_on_the_empty_path_is_rejected() {
    let mut doc = Document::new();
    assert!(doc.set("", 1i32).is_err());
}

#[test]
fn remove_detaches_the_subtree() {
    let mut doc = Document::from_json_str(r#"{"a": {"b": 1, "c": 2}, "d": 3}"#).unwrap();
    doc.remove("a.b");
    assert!(!doc.exists("a.b"));
    assert!(doc.exists("a.c"));

    doc.remove("a");
    assert!(!doc.exists("a"));
    assert!(doc.exists("d"));
}

#[test]
fn remove_array_element_shifts_later_indexes() {
    let mut doc = Document::from_json_str(r#"{"items": [10, 20, 30]}"#).unwrap();
    doc.remove("items.1");
    assert_eq!(doc.get_node("items").unwrap().len(), 2);
    assert_eq!(doc.get("items.1"), Some(&Value::Int64(30)));
}

#[test]
fn remove_absent_path_is_a_no_op() {
    let mut doc = Document::from_json_str(r#"{"a": 1}"#).unwrap();
    let before = doc.clone();
    doc.remove("missing");
    doc.remove("a.b.c");
    assert_eq!(doc, before);
}

#[test]
fn children_enumerate_in_insertion_order() {
    let mut doc = Document::new();
    doc.set("zeta", 1i32).unwrap();
    doc.set("alpha", 2i32).unwrap();
    doc.set("mid", 3i32).unwrap();

    let keys: Vec<NodeKey> = doc.root().children().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        [
            NodeKey::Name("zeta"),
            NodeKey::Name("alpha"),
            NodeKey::Name("mid")
        ]
    );
}

#[test]
fn children_of_arrays_carry_indexes() {
    let doc = Document::from_json_str(r#"{"items": ["a", "b"]}"#).unwrap();
    let items = doc.get_node("items").unwrap();
    let keys: Vec<NodeKey> = items.children().map(|(key, _)| key).collect();
    assert_eq!(keys, [NodeKey::Index(0), NodeKey::Index(1)]);
}

#[test]
fn leaves_have_no_children() {
    let mut doc = Document::new();
    doc.set("x", 1i32).unwrap();
    let leaf = doc.get_node("x").unwrap();
    assert!(leaf.is_leaf());
    assert_eq!(leaf.len(), 0);
    assert!(leaf.is_empty());
    assert_eq!(leaf.children().count(), 0);
}

#[test]
fn escaped_dot_stays_inside_one_member_name() {
    let mut doc = Document::new();
    doc.set(r"hosts.a\.example\.com.port", 443i32).unwrap();

    let hosts = doc.get_node("hosts").unwrap();
    let names: Vec<NodeKey> = hosts.children().map(|(key, _)| key).collect();
    assert_eq!(names, [NodeKey::Name("a.example.com")]);
    assert_eq!(
        doc.get(r"hosts.a\.example\.com.port"),
        Some(&Value::Int32(443))
    );
}

#[test]
fn escaped_backslash_is_literal() {
    let mut doc = Document::new();
    doc.set(r"win\\path", 1i32).unwrap();
    let names: Vec<NodeKey> = doc.root().children().map(|(key, _)| key).collect();
    assert_eq!(names, [NodeKey::Name(r"win\path")]);
}

#[test]
fn escaped_digits_never_index_arrays() {
    let mut doc = Document::from_json_str(r#"{"items": [1, 2]}"#).unwrap();
    // "\0" is the member name "0", not index 0; arrays have no names.
    let err = doc.set(r"items.\0", 9i32).unwrap_err();
    assert!(matches!(err, ConfError::TypeMismatch { .. }));
}

#[test]
fn empty_path_addresses_the_root() {
    let mut doc = Document::new();
    doc.set("a", 1i32).unwrap();
    let root = doc.get_node("").unwrap();
    assert!(root.is_container());
    assert_eq!(root.len(), 1);
    assert_eq!(doc.get(""), None);
}
