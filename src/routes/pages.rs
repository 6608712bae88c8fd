//! Server-rendered pages backed by the same services as the JSON API.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::models::activity::ActivityEvent;
use crate::models::item::Item;
use crate::models::pagination::{PageMeta, Pagination};
use crate::services::dashboard;
use crate::services::item::{self as item_service, ItemFilters};
use crate::AppState;

/// Query parameters accepted by the dashboard page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
}

/// Template for the dashboard page: stat tiles, recent-activity feed, and
/// the filterable, paginated items table.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub view: Option<DashboardView>,
    pub error: Option<String>,
}

/// Everything the dashboard template renders on success.
pub struct DashboardView {
    pub stats: dashboard::DashboardStats,
    pub recent_activity: Vec<ActivityEvent>,
    pub items: Vec<Item>,
    pub pagination: PageMeta,
    pub status_filter: String,
    pub search: String,
}

/// GET / — render the dashboard page.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> DashboardTemplate {
    let filters = ItemFilters {
        status: params.status.clone(),
        search: params.search.clone(),
    };
    let pagination = Pagination {
        page: params.page,
        limit: None,
    };

    let result = tokio::try_join!(
        dashboard::get_stats(&state.db),
        item_service::list(&state.db, &filters, &pagination),
    );

    match result {
        Ok((data, page)) => DashboardTemplate {
            view: Some(DashboardView {
                stats: data.stats,
                recent_activity: data.recent_activity,
                items: page.items,
                pagination: page.pagination,
                status_filter: params.status.unwrap_or_else(|| "all".to_string()),
                search: params.search.unwrap_or_default(),
            }),
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dashboard page");
            DashboardTemplate {
                view: None,
                error: Some("Failed to load dashboard data".to_string()),
            }
        }
    }
}
