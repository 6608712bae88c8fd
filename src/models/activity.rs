//! Activity event model: an append-only log shown in the recent-activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An activity log entry. Never updated or deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub description: Option<String>,
    /// Server-assigned at append time.
    pub timestamp: DateTime<Utc>,
}

/// Request body for appending an activity event. `type` and `title` are
/// required; presence is checked in the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateActivity {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_serializes_as_type() {
        let event = ActivityEvent {
            id: Uuid::new_v4(),
            event_type: "task".to_string(),
            title: "Task completed".to_string(),
            description: None,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "task");
        assert!(json.get("event_type").is_none());
    }

    #[test]
    fn create_activity_accepts_type_key() {
        let body: CreateActivity =
            serde_json::from_str(r#"{"type":"project","title":"Project created"}"#).unwrap();
        assert_eq!(body.event_type.as_deref(), Some("project"));
        assert_eq!(body.title.as_deref(), Some("Project created"));
    }

    #[test]
    fn create_activity_missing_fields_deserialize_as_none() {
        let body: CreateActivity = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        assert!(body.event_type.is_none());
        assert!(body.title.is_none());
    }
}
