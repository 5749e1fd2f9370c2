use serde_json::{Map, Value};

/// Request fields that already passed upstream validation. Read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatedInput(Map<String, Value>);

impl ValidatedInput {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Anything other than a JSON object carries no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.0.get(field_name)
    }

    /// The field's value when it is present and truthy.
    pub fn truthy(&self, field_name: &str) -> Option<&Value> {
        self.get(field_name).filter(|value| is_truthy(value))
    }
}

impl From<Map<String, Value>> for ValidatedInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Text form of a primary key value: strings verbatim, everything else as JSON.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
