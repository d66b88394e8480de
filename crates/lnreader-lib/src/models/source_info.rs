use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A source as listed by the aggregation API
///
/// Only the id and name are relied upon, every other key is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    #[serde(rename = "sourceId")]
    pub id: i64,
    #[serde(rename = "sourceName")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_keeps_unknown_keys() {
        let raw = r#"{
            "sourceId": 7,
            "sourceName": "NovelFull",
            "url": "https://novelfull.com",
            "lang": "English",
            "status": 1
        }"#;

        let source: SourceInfo = serde_json::from_str(raw).unwrap();

        assert_eq!(source.id, 7);
        assert_eq!(source.name, "NovelFull");
        assert_eq!(source.url.as_deref(), Some("https://novelfull.com"));
        assert_eq!(source.icon, None);
        assert_eq!(source.extra.get("status"), Some(&Value::from(1)));
    }

    #[test]
    fn test_deserialize_without_name_fails() {
        let raw = r#"{ "sourceId": 7 }"#;

        assert!(serde_json::from_str::<SourceInfo>(raw).is_err());
    }
}
