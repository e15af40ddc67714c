// Generic record trait for anything the dashboard lists

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Core trait that any listable record must implement
pub trait Record: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync + 'static {
    /// Unique identifier for this record
    fn id(&self) -> &str;

    /// Collection name for this record type (e.g., "events", "logs")
    /// Also names the JSONL fixture file: {collection}.jsonl
    fn collection_name() -> &'static str
    where
        Self: Sized;

    /// Fields exposed to search, exact filters and export
    /// Return empty HashMap if nothing should be queryable
    fn fields(&self) -> HashMap<String, FieldValue> {
        HashMap::new()
    }

    /// Look up a single field by name
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields().remove(name)
    }
}

/// Value types a record field can carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct TestRecord {
        id: String,
        name: String,
        hits: i64,
    }

    impl Record for TestRecord {
        fn id(&self) -> &str {
            &self.id
        }

        fn collection_name() -> &'static str {
            "test"
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct FieldedRecord {
        id: String,
        name: String,
        hits: i64,
    }

    impl Record for FieldedRecord {
        fn id(&self) -> &str {
            &self.id
        }

        fn collection_name() -> &'static str {
            "fielded"
        }

        fn fields(&self) -> HashMap<String, FieldValue> {
            let mut fields = HashMap::new();
            fields.insert("name".to_string(), self.name.as_str().into());
            fields.insert("hits".to_string(), self.hits.into());
            fields
        }
    }

    #[test]
    fn test_record_trait_implementation() {
        let record = TestRecord {
            id: "test-1".to_string(),
            name: "Test".to_string(),
            hits: 3,
        };

        assert_eq!(record.id(), "test-1");
        assert_eq!(TestRecord::collection_name(), "test");
        assert!(record.fields().is_empty());
        assert_eq!(record.field("name"), None);
    }

    #[test]
    fn test_field_lookup() {
        let record = FieldedRecord {
            id: "f-1".to_string(),
            name: "Stripe".to_string(),
            hits: 42,
        };

        assert_eq!(record.field("name"), Some(FieldValue::String("Stripe".to_string())));
        assert_eq!(record.field("hits"), Some(FieldValue::Int(42)));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::String("test".to_string()).to_string(), "test");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
    }
}
