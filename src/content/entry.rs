//! Article entries as delivered by the content API

use serde::{Deserialize, Serialize};

/// A single article entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    /// Entry id (`sys.id`)
    pub id: String,

    /// Article title
    pub title: String,

    /// `/`-delimited directory path used for navigation
    pub directory: String,

    /// Raw markdown body; empty when the query projected it away
    pub article_content: String,
}

impl Entry {
    /// Create an entry without content, as returned by a projected query
    pub fn new(id: &str, title: &str, directory: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            directory: directory.to_string(),
            article_content: String::new(),
        }
    }

    /// Attach markdown content
    pub fn with_content(mut self, content: &str) -> Self {
        self.article_content = content.to_string();
        self
    }
}

/// A page of entries from the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryCollection {
    pub items: Vec<Entry>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

/// Wire shape: `{ "sys": { "id": .. }, "fields": { .. } }`
#[derive(Debug, Deserialize)]
struct RawEntry {
    sys: RawSys,
    #[serde(default)]
    fields: RawFields,
}

#[derive(Debug, Deserialize)]
struct RawSys {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawFields {
    title: String,
    directory: String,
    article_content: String,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self {
            id: raw.sys.id,
            title: raw.fields.title,
            directory: raw.fields.directory,
            article_content: raw.fields.article_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_collection() {
        let json = r##"{
            "sys": { "type": "Array" },
            "total": 2,
            "skip": 0,
            "limit": 100,
            "items": [
                {
                    "sys": { "id": "abc", "type": "Entry" },
                    "fields": {
                        "title": "Setup",
                        "directory": "guides/setup",
                        "articleContent": "# Hello"
                    }
                },
                {
                    "sys": { "id": "def", "type": "Entry" },
                    "fields": { "title": "Intro", "directory": "guides" }
                }
            ]
        }"##;

        let collection: EntryCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.total, 2);
        assert_eq!(collection.skip, 0);
        assert_eq!(collection.limit, 100);
        assert_eq!(
            collection.items[0],
            Entry::new("abc", "Setup", "guides/setup").with_content("# Hello")
        );
        assert_eq!(collection.items[1].article_content, "");
    }

    #[test]
    fn test_decode_without_fields() {
        let entry: Entry = serde_json::from_str(r#"{ "sys": { "id": "x" } }"#).unwrap();
        assert_eq!(entry.id, "x");
        assert!(entry.title.is_empty());
    }
}
