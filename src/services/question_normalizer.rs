use serde_json::{Map, Value};

/// Any record carrying `options` is a multiple choice question, whatever type
/// the model gave it. Nothing else is inferred.
pub fn normalize_question(mut record: Map<String, Value>) -> Map<String, Value> {
    if record.contains_key("options") {
        record.insert("type".to_string(), Value::String("mcq".to_string()));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test record must be an object")
    }

    #[test]
    fn options_without_type_become_mcq() {
        let normalized = normalize_question(record(json!({
            "question": "Pick one",
            "options": ["A", "B"],
            "answer": "A"
        })));

        assert_eq!(normalized.get("type"), Some(&json!("mcq")));
    }

    #[test]
    fn options_override_existing_type() {
        let normalized = normalize_question(record(json!({
            "type": "qa",
            "question": "Pick one",
            "options": ["A", "B"],
            "answer": "A"
        })));

        assert_eq!(normalized.get("type"), Some(&json!("mcq")));
    }

    #[test]
    fn qa_record_without_options_is_unchanged() {
        let original = record(json!({"type": "qa", "question": "Q?", "answer": "A"}));
        let normalized = normalize_question(original.clone());

        assert_eq!(normalized, original);
    }

    #[test]
    fn untyped_record_without_options_gets_no_type() {
        let normalized = normalize_question(record(json!({"front": "Term", "back": "Def"})));
        assert!(!normalized.contains_key("type"));
    }
}
