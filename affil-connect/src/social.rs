//! Simulated social publishers.
//!
//! No outbound call is made here: each confirmation echoes the submitted
//! fields back with a generated post id and timestamp, and is flagged
//! `simulated` so callers cannot mistake it for a real post. Swap in real
//! platform clients behind the same function signature when those
//! integrations land.

use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Builds the synthetic confirmation for one platform post.
pub fn simulated_confirmation(platform: &str, fields: Value) -> Value {
    let mut post = match fields {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("payload".to_string(), other);
            map
        }
    };

    post.insert(
        "id".to_string(),
        Value::String(format!("{platform}_{}", Uuid::new_v4().simple())),
    );
    post.insert(
        "posted_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
    post.insert("simulated".to_string(), Value::Bool(true));

    Value::Object(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confirmation_echoes_fields() {
        let post = simulated_confirmation(
            "twitter",
            json!({"text": "Check this out", "product": {"id": 1}}),
        );

        assert_eq!(post["text"], "Check this out");
        assert_eq!(post["product"]["id"], 1);
        assert_eq!(post["simulated"], true);
        assert!(post["id"].as_str().unwrap().starts_with("twitter_"));
    }

    #[test]
    fn test_confirmation_timestamp_is_rfc3339() {
        let post = simulated_confirmation("tiktok", json!({}));
        let posted_at = post["posted_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(posted_at).is_ok());
    }

    #[test]
    fn test_post_ids_are_unique() {
        let a = simulated_confirmation("pinterest", json!({}));
        let b = simulated_confirmation("pinterest", json!({}));
        assert_ne!(a["id"], b["id"]);
    }
}
