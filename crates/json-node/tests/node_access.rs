use json_node::{parse, JsonNode, NodeType, NumericConversionError};

#[test]
fn lookup_miss_contract() {
    assert_eq!(JsonNode::new_object().get("missing").node_type(), NodeType::Absent);
    assert_eq!(JsonNode::new_array().get(0).node_type(), NodeType::Absent);
}

#[test]
fn chained_access_degrades_to_absent() {
    let root = parse(r#"{"a": [{"b": "found"}], "n": null}"#).unwrap();
    assert_eq!(root.get("a").get(0).get("b").as_str(), Some("found"));

    let miss = root.get("a").get(5).get("b").get(0);
    assert!(miss.is_absent());
    assert_eq!(miss.as_str(), None);
    assert_eq!(miss.as_integer(), Ok(None));

    // Wrong-kind lookups are absent, not errors.
    assert!(root.get(0).is_absent());
    assert!(root.get("a").get("b").is_absent());

    // Present null is distinguishable from absence.
    assert_eq!(root.get("n").node_type(), NodeType::Null);
    assert_eq!(root.get("x").node_type(), NodeType::Absent);
}

#[test]
fn numeric_extraction() {
    let root = parse(r#"[3.14159265358979, 42, -7, 1e3, 99999999999999999999]"#).unwrap();
    assert_eq!(root.get(0).as_str(), Some("3.14159265358979"));
    assert_eq!(
        root.get(0).as_integer(),
        Err(NumericConversionError::NotAnInteger("3.14159265358979".into()))
    );
    assert_eq!(root.get(1).as_integer(), Ok(Some(42)));
    assert_eq!(root.get(2).as_integer(), Ok(Some(-7)));
    assert!(matches!(
        root.get(3).as_integer(),
        Err(NumericConversionError::NotAnInteger(_))
    ));
    assert!(matches!(
        root.get(4).as_integer(),
        Err(NumericConversionError::OutOfRange(_))
    ));
    assert_eq!(root.get(4).as_number().unwrap().as_u64().ok(), None);
}

#[test]
fn build_tree_with_helpers() {
    let mut root = JsonNode::new_object();
    let mut tags = JsonNode::new_array();
    tags.append(JsonNode::wrap_string("b"))
        .insert(0, JsonNode::wrap_string("a"))
        .append(JsonNode::wrap_number(3));
    root.set("tags", tags)
        .set("on", JsonNode::wrap_boolean(true))
        .set("none", JsonNode::new_null());

    assert_eq!(root.len(), 3);
    assert_eq!(root.get("tags").get(0).as_str(), Some("a"));
    assert_eq!(root.get("tags").get(1).as_str(), Some("b"));
    assert_eq!(root.get("tags").get(2).as_integer(), Ok(Some(3)));
    assert_eq!(root.get("on").as_bool(), Some(true));
    assert!(root.get("none").is_null());
    assert_eq!(
        root.to_string(),
        r#"{"tags":["a", "b", 3], "on":true, "none":null}"#
    );
}

#[test]
fn mutation_after_parse() {
    let mut root = parse(r#"{"items": [1, 3]}"#).unwrap();
    root.get_mut("items").unwrap().insert(1, JsonNode::wrap_number(2));
    root.set("items_count", JsonNode::wrap_number(3));
    *root.get_mut("items").unwrap().get_mut(0).unwrap() = JsonNode::wrap_string("one");
    assert_eq!(
        root.to_string(),
        r#"{"items":["one", 2, 3], "items_count":3}"#
    );
}

#[test]
fn type_mismatch_is_not_applicable() {
    let cases = [
        JsonNode::new_null(),
        JsonNode::wrap_boolean(false),
        JsonNode::new_array(),
        JsonNode::new_object(),
        JsonNode::Absent,
    ];
    for node in &cases {
        assert_eq!(node.as_str(), None);
        assert_eq!(node.as_integer(), Ok(None));
    }
    assert!(JsonNode::new_array().as_object().is_none());
    assert!(JsonNode::new_object().as_array().is_none());
}
