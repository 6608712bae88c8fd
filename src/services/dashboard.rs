//! Dashboard statistics aggregation and the activity feed.

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::activity::{ActivityEvent, CreateActivity};

/// Aggregated counts for the overview page. Derived on request, never stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_projects: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub completion_rate: i64,
}

/// Stats payload returned by `GET /api/dashboard`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityEvent>,
}

/// Fetch all dashboard statistics in parallel queries.
///
/// Any single failure fails the whole request; no partial results.
pub async fn get_stats(pool: &PgPool) -> Result<DashboardData, AppError> {
    let (total_users, active_projects, task_counts, recent_activity) = tokio::try_join!(
        fetch_total_users(pool),
        fetch_active_projects(pool),
        fetch_task_counts(pool),
        fetch_recent_activity(pool),
    )?;

    Ok(DashboardData {
        stats: DashboardStats {
            total_users,
            active_projects,
            total_tasks: task_counts.total,
            completed_tasks: task_counts.completed,
            completion_rate: completion_rate(task_counts.total, task_counts.completed),
        },
        recent_activity,
    })
}

/// Percentage of tasks completed, rounded to the nearest integer.
/// Zero when no tasks exist.
pub fn completion_rate(total: i64, completed: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as i64
}

/// Append an activity event with a server-assigned timestamp.
pub async fn create_activity(
    pool: &PgPool,
    input: &CreateActivity,
) -> Result<ActivityEvent, AppError> {
    let event_type = input.event_type.as_deref().map(str::trim);
    let title = input.title.as_deref().map(str::trim);

    let (event_type, title) = match (event_type, title) {
        (Some(t), Some(ti)) if !t.is_empty() && !ti.is_empty() => (t, ti),
        _ => {
            return Err(AppError::Validation(
                "Type and title are required".to_string(),
            ))
        }
    };

    let event = sqlx::query_as::<_, ActivityEvent>(
        "INSERT INTO activity (event_type, title, description) \
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(event_type)
    .bind(title)
    .bind(&input.description)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

/// Count all user accounts.
async fn fetch_total_users(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Count projects with status 'active'.
async fn fetch_active_projects(pool: &PgPool) -> Result<i64, AppError> {
    let row =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE status = 'active'")
            .fetch_one(pool)
            .await?;
    Ok(row)
}

/// Intermediate row for task conditional aggregation.
#[derive(Debug, sqlx::FromRow)]
struct TaskCounts {
    total: i64,
    completed: i64,
}

/// Total and completed task counts in a single query.
async fn fetch_task_counts(pool: &PgPool) -> Result<TaskCounts, AppError> {
    let row = sqlx::query_as::<_, TaskCounts>(
        r#"
        SELECT
            COUNT(*) AS total,
            COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0) AS completed
        FROM tasks
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Fetch the 5 most recent activity events, newest first.
async fn fetch_recent_activity(pool: &PgPool) -> Result<Vec<ActivityEvent>, AppError> {
    let rows = sqlx::query_as::<_, ActivityEvent>(
        "SELECT id, event_type, title, description, timestamp \
         FROM activity ORDER BY timestamp DESC LIMIT 5",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_rate_zero_tasks() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(completion_rate(0, 5), 0);
    }

    #[test]
    fn completion_rate_exact_percentage() {
        assert_eq!(completion_rate(10, 3), 30);
        assert_eq!(completion_rate(4, 4), 100);
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        // 33.33 rounds down, 66.67 rounds up
        assert_eq!(completion_rate(3, 1), 33);
        assert_eq!(completion_rate(3, 2), 67);
    }

    #[test]
    fn stats_wire_names_are_camel_case() {
        let data = DashboardData {
            stats: DashboardStats {
                total_users: 2,
                active_projects: 1,
                total_tasks: 10,
                completed_tasks: 3,
                completion_rate: 30,
            },
            recent_activity: vec![],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["stats"]["totalUsers"], 2);
        assert_eq!(json["stats"]["completionRate"], 30);
        assert!(json["recentActivity"].is_array());
    }
}
