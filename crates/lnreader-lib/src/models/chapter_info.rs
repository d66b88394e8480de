use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A chapter entry of a novel, passed through as the source returned it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ChapterSummary(pub Value);

impl ChapterSummary {
    pub fn name(&self) -> Option<&str> {
        self.0.get("chapterName").and_then(Value::as_str)
    }

    pub fn url(&self) -> Option<&str> {
        self.0.get("chapterUrl").and_then(Value::as_str)
    }
}

/// A full chapter body, uninterpreted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Chapter(pub Value);

impl Chapter {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chapter_summary_is_passed_through() {
        let raw = json!({
            "chapterName": "Chapter 1",
            "chapterUrl": "/chapter-1",
            "releaseDate": null,
        });

        let chapter: ChapterSummary = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(chapter.name(), Some("Chapter 1"));
        assert_eq!(chapter.url(), Some("/chapter-1"));
        assert_eq!(serde_json::to_value(&chapter).unwrap(), raw);
    }
}
