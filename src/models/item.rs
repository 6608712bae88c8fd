//! Dashboard item model and request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status label assigned to newly created items.
///
/// `status` is a free-text label with no enforced transitions; the values the
/// dashboard knows how to render are `pending`, `in-progress`, `completed`,
/// and `cancelled`.
pub const DEFAULT_STATUS: &str = "pending";

/// A dashboard item record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assigned_to: Option<String>,
    /// Creation timestamp, server-assigned.
    pub date: DateTime<Utc>,
    /// Stamped on update; null until the record is first updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for item creation. `title` is required; presence is checked
/// in the service so a missing field yields 400, not a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

/// Request body for item update. Only supplied fields are merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

/// Update response: the submitted fields echoed back with the new
/// `updatedAt` stamp, not the post-merge record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedItem {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Delete confirmation payload.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedItem {
    pub success: bool,
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_wire_names_are_camel_case() {
        let item = Item {
            id: Uuid::new_v4(),
            title: "Ship release".to_string(),
            description: None,
            status: DEFAULT_STATUS.to_string(),
            assigned_to: Some("alice".to_string()),
            date: Utc::now(),
            updated_at: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["assignedTo"], "alice");
        assert_eq!(json["status"], "pending");
        assert!(json["updatedAt"].is_null());
        assert!(json.get("assigned_to").is_none());
    }

    #[test]
    fn create_item_title_only() {
        let body: CreateItem = serde_json::from_str(r#"{"title":"Ship release"}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("Ship release"));
        assert!(body.status.is_none());
    }

    #[test]
    fn update_item_without_id() {
        let body: UpdateItem = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert!(body.id.is_none());
        assert_eq!(body.status.as_deref(), Some("completed"));
    }

    #[test]
    fn updated_item_skips_unsubmitted_fields() {
        let echo = UpdatedItem {
            id: Uuid::new_v4(),
            title: None,
            description: None,
            status: Some("completed".to_string()),
            assigned_to: None,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert_eq!(json["status"], "completed");
        assert!(json.get("title").is_none());
        assert!(json.get("updatedAt").is_some());
    }
}
