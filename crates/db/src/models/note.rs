//! Note model.

use notekeep_core::serde_ext::double_option;
use notekeep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `notes` table joined with its category's name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
    /// Name of the referenced category, `None` when uncategorized.
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "title must be 1-50 characters"))]
    pub title: String,
    #[validate(length(max = 500, message = "content must be at most 500 characters"))]
    pub content: Option<String>,
    pub category_id: Option<DbId>,
}

/// DTO for a partial note update.
///
/// A missing key leaves the column unchanged. For `content` and `category_id`
/// an explicit `null` clears the column.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNote {
    #[validate(length(min = 1, max = 50, message = "title must be 1-50 characters"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<DbId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_clear_from_untouched() {
        let patch: UpdateNote =
            serde_json::from_str(r#"{"content": "new", "category_id": null}"#).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.content, Some(Some("new".to_string())));
        assert_eq!(patch.category_id, Some(None));
    }

    #[test]
    fn create_ignores_owner_in_body() {
        let input: CreateNote =
            serde_json::from_str(r#"{"title": "T1", "owner_id": 999}"#).unwrap();
        assert_eq!(input.title, "T1");
        assert_eq!(input.category_id, None);
    }
}
