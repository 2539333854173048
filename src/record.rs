use serde_json::{Map, Value};

/// One structured log record: a flat mapping of field name to JSON value.
/// Records are ephemeral, parsed from a single input line and discarded
/// after one formatting pass. Field order is preserved.
pub type Record = Map<String, Value>;

/// Parses one input line as a record.
///
/// Only a JSON object counts: invalid JSON and valid-but-non-object JSON
/// (`42`, `"text"`, `[1,2]`, `null`) both return `None`, which callers treat
/// as the verbatim pass-through path rather than an error.
pub fn parse_record(line: &str) -> Option<Record> {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Coerces an untyped field value to display text.
///
/// Strings render bare, without their JSON quotes; everything else renders
/// as compact JSON, so nested objects stay readable inline.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Whether a value substitutes as the empty string in the template:
/// null, false, numeric zero, and the empty string do; containers never do.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_lines_parse_in_field_order() {
        let record = parse_record(r#"{"level":30,"msg":"hi","a":1}"#).unwrap();
        let names: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["level", "msg", "a"]);
    }

    #[test]
    fn invalid_json_is_not_a_record() {
        assert!(parse_record("not json at all").is_none());
        assert!(parse_record("").is_none());
        assert!(parse_record("{\"truncated\":").is_none());
    }

    #[test]
    fn non_object_json_is_not_a_record() {
        assert!(parse_record("42").is_none());
        assert!(parse_record("null").is_none());
        assert!(parse_record("\"text\"").is_none());
        assert!(parse_record("[1,2,3]").is_none());
    }

    #[test]
    fn display_renders_strings_bare_and_rest_as_json() {
        assert_eq!(display_value(&json!("started")), "started");
        assert_eq!(display_value(&json!(400)), "400");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!({"body":{"ok":false}})), r#"{"body":{"ok":false}}"#);
    }

    #[test]
    fn falsy_values_match_substitution_rules() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));

        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("x")));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
    }
}
