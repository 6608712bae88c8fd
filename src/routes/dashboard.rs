//! Dashboard routes: aggregated statistics and the activity feed.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::activity::{ActivityEvent, CreateActivity};
use crate::services::dashboard::{self, DashboardData};
use crate::AppState;

/// GET /api/dashboard — aggregated statistics plus the 5 newest activity events.
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardData>, AppError> {
    let data = dashboard::get_stats(&state.db).await?;
    Ok(Json(data))
}

/// POST /api/dashboard — append an activity event.
pub async fn create_activity(
    State(state): State<AppState>,
    Json(body): Json<CreateActivity>,
) -> Result<Json<ActivityEvent>, AppError> {
    let event = dashboard::create_activity(&state.db, &body).await?;
    Ok(Json(event))
}
