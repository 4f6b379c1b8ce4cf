use json_node::{parse, serialize, JsonNode, JsonNumber, SerializeError};

#[test]
fn serialize_escaping_example() {
    let node = JsonNode::wrap_string("a\"b\\c/d\n");
    assert_eq!(serialize(&node).unwrap(), "\"a\\\"b\\\\c\\/d\\n\"");
}

#[test]
fn serialize_scalar_matrix() {
    let cases = vec![
        (JsonNode::new_null(), "null"),
        (JsonNode::wrap_boolean(true), "true"),
        (JsonNode::wrap_boolean(false), "false"),
        (JsonNode::wrap_number(-17), "-17"),
        (JsonNode::wrap_number(u64::MAX), "18446744073709551615"),
        (JsonNode::wrap_number(0.5), "0.5"),
        (JsonNode::wrap_number(100.0), "100"),
        (JsonNode::wrap_number(f64::NAN), "null"),
        (
            JsonNode::wrap_number(JsonNumber::from_literal("6.02E23").unwrap()),
            "6.02E23",
        ),
        (JsonNode::wrap_string(""), r#""""#),
        (JsonNode::wrap_string("tab\there"), r#""tab\there""#),
    ];
    for (node, expected) in cases {
        assert_eq!(serialize(&node).unwrap(), expected);
    }
}

#[test]
fn serialize_container_layout() {
    let mut inner = JsonNode::new_array();
    inner.append(JsonNode::new_object()).append(JsonNode::new_array());

    let mut root = JsonNode::new_object();
    root.set("list", inner)
        .set("url", JsonNode::wrap_string("http://x"))
        .set("n", JsonNode::wrap_number(1));

    assert_eq!(
        serialize(&root).unwrap(),
        r#"{"list":[{}, []], "url":"http:\/\/x", "n":1}"#
    );
}

#[test]
fn serialize_preserves_number_text() {
    let root = parse("[1.0, 1e2, -0, 0.1000000000000000055511151231257827]").unwrap();
    assert_eq!(
        serialize(&root).unwrap(),
        "[1.0, 1e2, -0, 0.1000000000000000055511151231257827]"
    );
}

#[test]
fn serialize_absent_is_error() {
    let missing = JsonNode::new_object().get("nope").clone();
    assert_eq!(serialize(&missing), Err(SerializeError::Absent));

    let mut obj = JsonNode::new_object();
    obj.as_object_mut()
        .unwrap()
        .insert("hole".to_owned(), JsonNode::Absent);
    assert_eq!(serialize(&obj), Err(SerializeError::Absent));
}

#[test]
fn serialize_parse_idempotence_examples() {
    let inputs = [
        r#"{"a": [1, 2, true, null], "b": "x"}"#,
        r#"[{"k\"ey": "v\/al"}, [], {}, "\b\f\n\r\t"]"#,
        r#"{"nested": {"deeper": {"deepest": [0.5, -3e-2]}}}"#,
    ];
    for input in inputs {
        let once = serialize(&parse(input).unwrap()).unwrap();
        let twice = serialize(&parse(&once).unwrap()).unwrap();
        assert_eq!(once, twice, "input {input:?}");
    }
}
