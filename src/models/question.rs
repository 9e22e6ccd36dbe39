use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the API's `results` array, exactly as it was returned.
///
/// The record is opaque: no schema is enforced and nothing is rewritten.
/// Entries that are not JSON objects are kept as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord(Value);

impl QuestionRecord {
    /// Look up a field of the record.
    ///
    /// Returns `None` if the field is absent or the record is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The question text, if present and a string.
    pub fn question(&self) -> Option<&str> {
        self.get("question").and_then(Value::as_str)
    }

    /// The record as returned by the API.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for QuestionRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_read_known_fields() {
        let record: QuestionRecord = serde_json::from_value(json!({
            "category": "General",
            "type": "boolean",
            "difficulty": "easy",
            "question": "Q1",
            "correct_answer": "True",
            "incorrect_answers": ["False"]
        }))
        .unwrap();

        assert_eq!(record.question(), Some("Q1"));
        assert_eq!(record.get("category"), Some(&json!("General")));
        assert_eq!(record.get("incorrect_answers"), Some(&json!(["False"])));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let value = json!({ "question": 7, "extra": { "nested": true } });
        let record: QuestionRecord = serde_json::from_value(value.clone()).unwrap();

        // Non-string values are kept, just not exposed as &str.
        assert_eq!(record.question(), None);
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn test_non_object_is_kept() {
        let record = QuestionRecord::from(json!(["a", "b"]));

        assert_eq!(record.get("question"), None);
        assert_eq!(record.as_value(), &json!(["a", "b"]));
    }
}
