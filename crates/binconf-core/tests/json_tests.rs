use binconf_core::{decode, encode, ConfError, Document, Properties, Value};

#[test]
fn import_reads_scalars_at_64_bit_width() {
    let doc = Document::from_json_str(
        r#"{"name": "awplc", "age": 18, "weight": 60.5, "big": 18446744073709551615, "neg": -2}"#,
    )
    .unwrap();

    assert_eq!(doc.get("name"), Some(&Value::String("awplc".to_string())));
    assert_eq!(doc.get("age"), Some(&Value::Int64(18)));
    assert_eq!(doc.get("weight"), Some(&Value::Float64(60.5)));
    assert_eq!(doc.get("big"), Some(&Value::UInt64(u64::MAX)));
    assert_eq!(doc.get("neg"), Some(&Value::Int64(-2)));
}

#[test]
fn import_rejects_non_object_roots() {
    for json in ["[1, 2]", "42", r#""text""#, "null", "true"] {
        assert!(matches!(
            Document::from_json_str(json),
            Err(ConfError::MalformedInput { .. })
        ));
    }
}

#[test]
fn import_rejects_invalid_json() {
    assert!(matches!(
        Document::from_json_str("{not json"),
        Err(ConfError::Json(_))
    ));
}

#[test]
fn export_preserves_member_order() {
    let doc = Document::from_json_str(r#"{"zeta": 1, "alpha": 2, "beta": 3}"#).unwrap();
    assert_eq!(
        doc.to_json_string().unwrap(),
        r#"{"zeta":1,"alpha":2,"beta":3}"#
    );
}

#[test]
fn json_binary_json_round_trip() {
    let json = r#"{"server":{"host":"127.0.0.1","port":8080},"tags":["a","b"],"on":true,"extra":null}"#;
    let doc = Document::from_json_str(json).unwrap();
    let back = decode(&encode(&doc)).unwrap();
    assert_eq!(back.to_json_string().unwrap(), json);
}

#[test]
fn blob_exports_as_byte_array() {
    let mut doc = Document::new();
    doc.set("key", vec![0u8, 127, 255]).unwrap();
    assert_eq!(doc.to_json_string().unwrap(), r#"{"key":[0,127,255]}"#);
}

#[test]
fn import_never_produces_blobs() {
    // A byte-array export comes back as an array of numbers.
    let doc = Document::from_json_str(r#"{"key": [0, 127, 255]}"#).unwrap();
    let node = doc.get_node("key").unwrap();
    assert!(node.is_container());
    assert_eq!(doc.get("key.0"), Some(&Value::Int64(0)));
}

#[test]
fn non_finite_floats_export_as_null() {
    let mut doc = Document::new();
    doc.set("inf", f64::INFINITY).unwrap();
    doc.set("nan", f64::NAN).unwrap();
    assert_eq!(doc.to_json_string().unwrap(), r#"{"inf":null,"nan":null}"#);
}

#[test]
fn narrow_numeric_widths_export_as_plain_numbers() {
    let mut doc = Document::new();
    doc.set("a", 5u8).unwrap();
    doc.set("b", -5i16).unwrap();
    doc.set("c", 1.5f32).unwrap();
    assert_eq!(doc.to_json_string().unwrap(), r#"{"a":5,"b":-5,"c":1.5}"#);
}

#[test]
fn pretty_output_is_indented() {
    let doc = Document::from_json_str(r#"{"a": 1}"#).unwrap();
    let pretty = doc.to_json_string_pretty().unwrap();
    assert!(pretty.contains('\n'));
    let reparsed = Document::from_json_str(&pretty).unwrap();
    assert_eq!(reparsed.get_i64_or("a", 0), 1);
}

#[test]
fn empty_containers_survive_the_json_bridge() {
    let json = r#"{"obj":{},"arr":[]}"#;
    let doc = Document::from_json_str(json).unwrap();
    assert_eq!(doc.to_json_string().unwrap(), json);
}
