use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One registered site, as returned by the comment server's admin API.
///
/// The server owns the shape of a site record; the sidebar carries records
/// through to whatever renders them without depending on individual fields.
/// Accessors below are best-effort lookups for display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteRecord(pub Value);

impl SiteRecord {
    /// Display name of the site, if the server provided one.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Server-side numeric id, if present.
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// Comma-separated list of origins the site accepts, if present.
    pub fn urls(&self) -> Option<&str> {
        self.0.get("urls").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_passes_through_unknown_fields() {
        let raw = json!({
            "id": 1,
            "name": "Blog",
            "urls": "https://blog.example.com",
            "first_url": "https://blog.example.com",
            "extra": { "nested": true }
        });
        let record: SiteRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_accessors() {
        let record = SiteRecord(json!({ "id": 7, "name": "Docs" }));
        assert_eq!(record.id(), Some(7));
        assert_eq!(record.name(), Some("Docs"));
        assert_eq!(record.urls(), None);
    }

    #[test]
    fn test_non_object_record_is_preserved() {
        // The sidebar makes no assumption that a record is a JSON object.
        let record: SiteRecord = serde_json::from_str("\"just-a-name\"").unwrap();
        assert_eq!(record.name(), None);
        assert_eq!(serde_json::to_string(&record).unwrap(), "\"just-a-name\"");
    }
}
