use std::collections::BTreeSet;

use lnreader_lib::models::{ChapterSummary, NovelDetail};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// Novel body as returned by `/api/{source}/novel/{path}`.
///
/// Nullable fields are still required to be present, a missing key is a parse error.
#[derive(Debug, Deserialize)]
struct NovelDto {
    #[serde(rename = "novelUrl")]
    novel_url: String,
    #[serde(rename = "sourceUrl")]
    source_url: String,
    #[serde(rename = "sourceName")]
    source_name: String,
    #[serde(rename = "extensionId")]
    extension_id: i64,
    #[serde(rename = "novelName")]
    novel_name: String,
    #[serde(rename = "novelCover", deserialize_with = "Option::deserialize")]
    novel_cover: Option<String>,
    #[serde(rename = "novelSummary", deserialize_with = "Option::deserialize")]
    novel_summary: Option<String>,
    #[serde(rename = "Author(s)", deserialize_with = "Option::deserialize")]
    author: Option<String>,
    #[serde(rename = "Artist(s)", deserialize_with = "Option::deserialize")]
    artist: Option<String>,
    #[serde(rename = "Status", deserialize_with = "Option::deserialize")]
    status: Option<String>,
    #[serde(rename = "Genre(s)", deserialize_with = "Option::deserialize")]
    genre: Option<Genres>,
    #[serde(rename = "novelChapters")]
    novel_chapters: Vec<ChapterSummary>,
}

// sources disagree on whether genres are a comma separated string or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Genres {
    Text(String),
    List(Vec<String>),
}

impl Genres {
    fn into_set(self) -> BTreeSet<String> {
        let genres: Vec<String> = match self {
            Genres::Text(text) => text.split(',').map(str::to_string).collect(),
            Genres::List(list) => list,
        };

        genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<NovelDto> for NovelDetail {
    fn from(dto: NovelDto) -> Self {
        Self {
            source_id: dto.extension_id,
            source_name: dto.source_name,
            novel_url: dto.novel_url,
            source_url: dto.source_url,
            name: dto.novel_name,
            cover: dto.novel_cover,
            summary: dto.novel_summary,
            author: dto.author,
            artist: dto.artist,
            status: dto.status,
            genres: dto.genre.map(Genres::into_set).unwrap_or_default(),
            followed: false,
            chapters: dto.novel_chapters,
        }
    }
}

pub(crate) fn novel_from_value(value: Value) -> Result<NovelDetail, Error> {
    let dto: NovelDto = serde_json::from_value(value)?;
    Ok(dto.into())
}

/// Classify a raw response before any schema is applied.
pub(crate) fn parse_response(url: &str, status: u16, body: &str) -> Result<Value, Error> {
    if status == 404 {
        return Err(Error::NotFound(url.to_string()));
    }

    if !(200..300).contains(&status) {
        return Err(Error::Status {
            status,
            body: body.to_string(),
        });
    }

    let value: Value = serde_json::from_str(body)?;
    if let Some(error) = value.get("error") {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(Error::Payload(message));
    }

    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn novel_json() -> Value {
        json!({
            "novelUrl": "novel/overgeared/",
            "sourceUrl": "https://example.org/novel/overgeared/",
            "sourceName": "Example",
            "extensionId": 3,
            "novelName": "Overgeared",
            "novelCover": "https://example.org/cover.jpg",
            "novelSummary": "A blacksmith.",
            "Author(s)": "Park Saenal",
            "Artist(s)": null,
            "Status": "Ongoing",
            "Genre(s)": "Action, Fantasy ,,Game",
            "novelChapters": [
                { "chapterName": "Chapter 1", "chapterUrl": "chapter-1/", "releaseDate": null },
                { "chapterName": "Chapter 2", "chapterUrl": "chapter-2/", "releaseDate": null }
            ]
        })
    }

    #[test]
    fn test_novel_keys_are_normalized() {
        let novel = novel_from_value(novel_json()).unwrap();

        assert_eq!(novel.source_id, 3);
        assert_eq!(novel.source_name, "Example");
        assert_eq!(novel.name, "Overgeared");
        assert_eq!(novel.author.as_deref(), Some("Park Saenal"));
        assert_eq!(novel.artist, None);
        assert_eq!(novel.status.as_deref(), Some("Ongoing"));
        assert!(!novel.followed);
        assert_eq!(
            novel.genres.into_iter().collect::<Vec<_>>(),
            vec!["Action", "Fantasy", "Game"]
        );
        assert_eq!(novel.chapters.len(), 2);
        assert_eq!(novel.chapters[1].url(), Some("chapter-2/"));
    }

    #[test]
    fn test_genre_list_is_accepted() {
        let mut raw = novel_json();
        raw["Genre(s)"] = json!(["Romance", " Drama "]);

        let novel = novel_from_value(raw).unwrap();

        assert!(novel.genres.contains("Romance"));
        assert!(novel.genres.contains("Drama"));
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let mut raw = novel_json();
        raw.as_object_mut().unwrap().remove("Author(s)");

        let err = novel_from_value(raw).unwrap_err();

        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("Author(s)"));
        assert!(matches!(
            lnreader_lib::error::Error::from(err),
            lnreader_lib::error::Error::Parse(_)
        ));
    }

    #[test]
    fn test_not_found_status() {
        let res = parse_response("https://host/api/1/novel/x", 404, "");

        assert!(matches!(res, Err(Error::NotFound(url)) if url == "https://host/api/1/novel/x"));
    }

    #[test]
    fn test_server_error_status() {
        let res = parse_response("https://host/api/", 500, "boom");

        assert!(matches!(res, Err(Error::Status { status: 500, .. })));
    }

    #[test]
    fn test_error_payload() {
        let res = parse_response("https://host/api/1/novel/x", 200, r#"{"error":"source down"}"#);

        match res {
            Err(Error::Payload(message)) => assert_eq!(message, "source down"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let res = parse_response("https://host/api/", 200, "<html>");

        assert!(matches!(res, Err(Error::Json(_))));
    }

    #[test]
    fn test_array_body() {
        let value = parse_response("https://host/api/", 200, r#"[{"sourceId":1}]"#).unwrap();

        assert!(value.is_array());
    }
}
