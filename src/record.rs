use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// One server-metadata object from the input file.
///
/// Only `hostname` is interpreted; every other field is carried through
/// unchanged, in its original order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// The `hostname` field, if it is a non-empty string.
    pub fn hostname(&self) -> Option<&str> {
        self.fields
            .get("hostname")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record { fields }
    }
}

impl std::fmt::Display for Record {
    /// Renders the record as indented JSON, two spaces per level.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = serde_json::to_string_pretty(&self.fields).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn expose_hostname_field() {
        let record = record(json!({"hostname": "SPINAL-TAP.lan", "os": "Linux"}));
        assert_eq!(record.hostname(), Some("SPINAL-TAP.lan"));
    }

    #[test]
    fn treat_missing_hostname_as_absent() {
        assert_eq!(record(json!({"os": "Linux"})).hostname(), None);
    }

    #[test]
    fn treat_empty_hostname_as_absent() {
        assert_eq!(record(json!({"hostname": ""})).hostname(), None);
    }

    #[test]
    fn treat_non_string_hostname_as_absent() {
        assert_eq!(record(json!({"hostname": 42})).hostname(), None);
        assert_eq!(record(json!({"hostname": null})).hostname(), None);
        assert_eq!(record(json!({"hostname": ["a"]})).hostname(), None);
    }

    #[test]
    fn pass_arbitrary_fields_through() {
        let record = record(json!({"hostname": "pi4", "tags": ["nas", "dns"], "cores": 4}));
        assert_eq!(record.get("tags"), Some(&json!(["nas", "dns"])));
        assert_eq!(record.get("cores"), Some(&json!(4)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn render_with_two_space_indent() {
        let record = record(json!({"hostname": "pi4", "os": "Linux"}));
        assert_eq!(
            record.to_string(),
            "{\n  \"hostname\": \"pi4\",\n  \"os\": \"Linux\"\n}"
        );
    }

    #[test]
    fn preserve_field_order_in_rendering() {
        let record = record(json!({"os": "Linux", "hostname": "pi4", "arch": "aarch64"}));
        assert_eq!(
            record.to_string(),
            "{\n  \"os\": \"Linux\",\n  \"hostname\": \"pi4\",\n  \"arch\": \"aarch64\"\n}"
        );
    }
}
