use serde_json::Value;

use crate::Record;
use crate::error::RecordError;

/// Interprets a request body as a record. A zero-length body is the empty
/// record; whitespace alone is not valid JSON and is rejected.
pub fn parse_payload(body: &[u8]) -> Result<Record, RecordError> {
    if body.is_empty() {
        return Ok(Record::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(other) => Err(RecordError::MalformedPayload(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        ))),
        Err(e) => Err(RecordError::MalformedPayload(e.to_string())),
    }
}

/// Reads a decimal identifier the lenient way URL ids have always been read:
/// leading whitespace and an optional sign, then the leading run of digits.
/// Anything after the digits is ignored (`"12abc"` is 12).
///
/// Returns `None` when there are no leading digits or the value overflows;
/// such an identifier matches no record.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = &trimmed[sign_len..];
    let digit_len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse().ok()
}

/// Numeric equality against the record's `id` field. Integral floats
/// (`1.0`) match; strings never do.
pub fn id_matches(record: &Record, id: i64) -> bool {
    match record.get("id") {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(value) => value == id,
            None => n.is_f64() && n.as_f64() == Some(id as f64),
        },
        _ => false,
    }
}

/// A record is inactive only when `activo` is exactly `false`.
pub fn is_active(record: &Record) -> bool {
    !matches!(record.get("activo"), Some(Value::Bool(false)))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn parse_id_reads_leading_digits() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("  7"), Some(7));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("3.9"), Some(3));
        assert_eq!(parse_id("-5"), Some(-5));
        assert_eq!(parse_id("+8"), Some(8));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("x12"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }

    #[test]
    fn id_matches_integers_and_integral_floats() {
        assert!(id_matches(&record(json!({ "id": 1 })), 1));
        assert!(id_matches(&record(json!({ "id": 1.0 })), 1));
        assert!(!id_matches(&record(json!({ "id": 1.5 })), 1));
        assert!(!id_matches(&record(json!({ "id": 2 })), 1));
    }

    #[test]
    fn id_matches_is_strict_about_type() {
        assert!(!id_matches(&record(json!({ "id": "1" })), 1));
        assert!(!id_matches(&record(json!({ "id": null })), 0));
        assert!(!id_matches(&record(json!({ "nombre": "Ana" })), 1));
    }

    #[test]
    fn activo_must_be_exactly_false() {
        assert!(is_active(&record(json!({ "id": 1 }))));
        assert!(is_active(&record(json!({ "id": 1, "activo": true }))));
        assert!(is_active(&record(json!({ "id": 1, "activo": "false" }))));
        assert!(is_active(&record(json!({ "id": 1, "activo": 0 }))));
        assert!(!is_active(&record(json!({ "id": 1, "activo": false }))));
    }

    #[test]
    fn parse_payload_accepts_objects() {
        let parsed = parse_payload(br#"{"id": 3, "nombre": "Eva"}"#).unwrap();
        assert_eq!(parsed, record(json!({ "id": 3, "nombre": "Eva" })));
    }

    #[test]
    fn parse_payload_treats_empty_body_as_empty_record() {
        assert!(parse_payload(b"").unwrap().is_empty());
    }

    #[test]
    fn parse_payload_rejects_whitespace_only_body() {
        for body in [&b" "[..], &b" \n"[..], &b"\t\r\n"[..]] {
            assert!(matches!(
                parse_payload(body),
                Err(RecordError::MalformedPayload(_))
            ));
        }
    }

    #[test]
    fn parse_payload_rejects_non_objects() {
        let bodies: [&[u8]; 5] = [b"[1, 2]", b"42", b"\"text\"", b"null", b"{ broken"];
        for body in bodies {
            let err = parse_payload(body).unwrap_err();
            assert!(matches!(err, RecordError::MalformedPayload(_)), "{body:?}");
        }
    }
}
