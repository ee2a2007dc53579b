//! Hacker News data types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Hacker News story item.
///
/// Fields the API may add beyond the documented ones are kept in `extra` so
/// the item is handed back to callers as upstream sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// The item's unique id.
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Username of the author. Absent on deleted items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,

    /// Story points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,

    /// Creation time, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Item type, e.g. `story`, `job`, `poll`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Total comment count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Ids of the top-level comments, in ranked display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<i64>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_story_keeps_unknown_fields() {
        let raw = json!({
            "by": "pg",
            "descendants": 15,
            "id": 1,
            "kids": [15, 234509],
            "score": 57,
            "time": 1160418111,
            "title": "Y Combinator",
            "type": "story",
            "url": "http://ycombinator.com",
            "dead": false
        });
        let story: Story = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(story.id, 1);
        assert_eq!(story.kind.as_deref(), Some("story"));
        assert_eq!(story.extra.get("dead"), Some(&json!(false)));
        assert_eq!(serde_json::to_value(&story).unwrap(), raw);
    }

    #[test]
    fn test_story_optional_fields_absent() {
        let raw = json!({
            "by": "whoishiring",
            "id": 192327,
            "score": 6,
            "time": 1210981217,
            "title": "Justin.tv is looking for a Lead Flash Engineer!",
            "type": "job"
        });
        let story: Story = serde_json::from_value(raw.clone()).unwrap();
        assert!(story.url.is_none());
        assert!(story.kids.is_none());
        assert_eq!(serde_json::to_value(&story).unwrap(), raw);
    }

    #[test]
    fn test_deleted_item_decodes() {
        let raw = json!({"id": 42, "deleted": true, "type": "story", "time": 1200000000});
        let story: Story = serde_json::from_value(raw.clone()).unwrap();
        assert!(story.by.is_none());
        assert!(story.title.is_none());
        assert!(story.score.is_none());
        assert_eq!(serde_json::to_value(&story).unwrap(), raw);
    }
}
