use serde_json::json;

use sift::parse::{ParseError, extract_json};

#[test]
fn strict_json_parses_directly() {
    let text = r#"{"analysis": {"title": "분석 (Analysis)", "icon": "🔍"}, "myPerspective": "x"}"#;
    let parsed = extract_json(text).unwrap();
    assert_eq!(
        parsed,
        json!({"analysis": {"title": "분석 (Analysis)", "icon": "🔍"}, "myPerspective": "x"})
    );
}

#[test]
fn surrounding_whitespace_is_fine() {
    let parsed = extract_json("\n\n  {\"a\": 1}\n").unwrap();
    assert_eq!(parsed, json!({"a": 1}));
}

#[test]
fn prose_around_object_is_stripped() {
    let text = r#"Here is the result: {"analysis":{"content":"ok"}} Thanks"#;
    let parsed = extract_json(text).unwrap();
    assert_eq!(parsed, json!({"analysis": {"content": "ok"}}));
}

#[test]
fn markdown_fence_is_stripped() {
    let text = "```json\n{\"reflection\": {\"question\": \"내가 보고 싶은 것만 보고 있지는 않은가?\"}}\n```";
    let parsed = extract_json(text).unwrap();
    assert_eq!(
        parsed["reflection"]["question"],
        "내가 보고 싶은 것만 보고 있지는 않은가?"
    );
}

#[test]
fn nested_braces_keep_outermost_object() {
    let text = r#"note: {"a": {"b": {"c": 1}}, "d": "}"} end"#;
    let parsed = extract_json(text).unwrap();
    assert_eq!(parsed, json!({"a": {"b": {"c": 1}}, "d": "}"}));
}

#[test]
fn text_without_braces_has_no_object() {
    let err = extract_json("I could not analyze this input.").unwrap_err();
    assert!(matches!(err, ParseError::NoObject));
}

#[test]
fn empty_text_has_no_object() {
    assert!(matches!(extract_json(""), Err(ParseError::NoObject)));
}

#[test]
fn top_level_array_is_kept_whole() {
    let parsed = extract_json(r#"[{"analysis": {"content": "a"}}]"#).unwrap();
    assert_eq!(parsed, json!([{"analysis": {"content": "a"}}]));

    let parsed = extract_json(r#"[{"a": 1}, {"b": 2}]"#).unwrap();
    assert_eq!(parsed, json!([{"a": 1}, {"b": 2}]));
}

#[test]
fn json_scalars_are_returned_as_is() {
    assert_eq!(extract_json("42").unwrap(), json!(42));
    assert_eq!(extract_json(r#""just a string""#).unwrap(), json!("just a string"));
    assert_eq!(extract_json("null").unwrap(), json!(null));
}

#[test]
fn two_separate_objects_fail_as_one_span() {
    // The greedy span covers both objects and the prose between them.
    let err = extract_json(r#"first {"a": 1} then {"b": 2}"#).unwrap_err();
    assert!(matches!(err, ParseError::Invalid(_)));
}

#[test]
fn truncated_object_is_invalid() {
    let err = extract_json(r#"{"analysis": {"title": "분석"}, "evaluation": {"#).unwrap_err();
    // Last `}` closes the inner object; the span is still not valid JSON.
    assert!(matches!(err, ParseError::Invalid(_)));
}
