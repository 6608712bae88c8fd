//! Item service: list, create, merge-update, and delete for dashboard items.
//!
//! One parameterized implementation backs both the JSON endpoints and the
//! server-rendered items table.

use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::item::{
    CreateItem, DeletedItem, Item, UpdateItem, UpdatedItem, DEFAULT_STATUS,
};
use crate::models::pagination::{Paged, Pagination};

/// Filters for listing items.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ItemFilters {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ItemFilters {
    /// Status predicate; `all` (any case) and blank mean no filter.
    pub fn effective_status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
    }

    /// Search term; blank means no filter.
    pub fn effective_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// List items with filters and offset pagination, newest first.
///
/// The total is counted with the same predicate as the page, so pagination
/// metadata stays consistent while filters are active.
pub async fn list(
    pool: &PgPool,
    filters: &ItemFilters,
    pagination: &Pagination,
) -> Result<Paged<Item>, AppError> {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_index = 0u32;

    if filters.effective_status().is_some() {
        param_index += 1;
        conditions.push(format!("status = ${param_index}"));
    }
    if filters.effective_search().is_some() {
        param_index += 1;
        conditions.push(format!("title ILIKE ${param_index}"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let count_sql = format!("SELECT COUNT(*) FROM items {where_clause}");
    let data_sql = format!(
        "SELECT id, title, description, status, assigned_to, date, updated_at \
         FROM items {where_clause} ORDER BY date DESC LIMIT {} OFFSET {}",
        pagination.limit(),
        pagination.offset()
    );

    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    let mut data_query = sqlx::query_as::<_, Item>(&data_sql);

    // Bind parameters in the same order for both queries
    macro_rules! bind_both {
        ($val:expr) => {
            count_query = count_query.bind($val);
            data_query = data_query.bind($val);
        };
    }

    if let Some(status) = filters.effective_status() {
        bind_both!(status);
    }
    if let Some(search) = filters.effective_search() {
        let pattern = format!("%{search}%");
        count_query = count_query.bind(pattern.clone());
        data_query = data_query.bind(pattern);
    }

    let total = count_query.fetch_one(pool).await?;
    let items = data_query.fetch_all(pool).await?;

    Ok(Paged::new(items, total, pagination))
}

/// Create an item. `title` is required; `status` defaults to `pending` and
/// the creation timestamp is assigned by the store.
pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, AppError> {
    let title = match input.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::Validation("Title is required".to_string())),
    };

    let item = sqlx::query_as::<_, Item>(
        "INSERT INTO items (title, description, status, assigned_to) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(title)
    .bind(&input.description)
    .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
    .bind(&input.assigned_to)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Merge the supplied fields into an item and stamp `updatedAt`.
///
/// Existence is intentionally not checked: updating a missing id runs the
/// statement against zero rows and still reports success. The response
/// echoes the submitted fields, not the post-merge record.
pub async fn update(pool: &PgPool, input: &UpdateItem) -> Result<UpdatedItem, AppError> {
    let id = input
        .id
        .ok_or_else(|| AppError::Validation("ID is required".to_string()))?;

    let updated_at = Utc::now();

    sqlx::query(
        "UPDATE items SET \
            title = COALESCE($2, title), \
            description = COALESCE($3, description), \
            status = COALESCE($4, status), \
            assigned_to = COALESCE($5, assigned_to), \
            updated_at = $6 \
         WHERE id = $1",
    )
    .bind(id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.status)
    .bind(&input.assigned_to)
    .bind(updated_at)
    .execute(pool)
    .await?;

    Ok(UpdatedItem {
        id,
        title: input.title.clone(),
        description: input.description.clone(),
        status: input.status.clone(),
        assigned_to: input.assigned_to.clone(),
        updated_at,
    })
}

/// Delete an item unconditionally. Deleting a nonexistent id is not an error.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<DeletedItem, AppError> {
    sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(DeletedItem { success: true, id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_all_means_no_filter() {
        let filters = ItemFilters {
            status: Some("all".to_string()),
            search: None,
        };
        assert_eq!(filters.effective_status(), None);

        let filters = ItemFilters {
            status: Some("All".to_string()),
            search: None,
        };
        assert_eq!(filters.effective_status(), None);
    }

    #[test]
    fn status_exact_value_filters() {
        let filters = ItemFilters {
            status: Some("completed".to_string()),
            search: None,
        };
        assert_eq!(filters.effective_status(), Some("completed"));
    }

    #[test]
    fn blank_filters_are_ignored() {
        let filters = ItemFilters {
            status: Some("  ".to_string()),
            search: Some(String::new()),
        };
        assert_eq!(filters.effective_status(), None);
        assert_eq!(filters.effective_search(), None);
    }

    #[test]
    fn search_term_is_trimmed() {
        let filters = ItemFilters {
            status: None,
            search: Some(" release ".to_string()),
        };
        assert_eq!(filters.effective_search(), Some("release"));
    }
}
