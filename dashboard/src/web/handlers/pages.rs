//! REST API handlers for the dashboard pages
//!
//! Header configuration and the figures behind the service, finance, HR,
//! compliance and users pages.

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{Value, json};

use shared::ComplianceSummary;
use waitlist::RecordSource;

use crate::error::DashboardResult;
use crate::state::AppState;
use crate::traits::MetricsSource;
use crate::types::ConfigQuery;

/// Path highlighted when the request names none
const DEFAULT_PATH: &str = "/dashboard";

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Current user and navigation, highlighted for `?path=`
pub async fn get_config<R, M>(
    State(state): State<AppState<R, M>>,
    Query(query): Query<ConfigQuery>,
) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let path = query.path.as_deref().unwrap_or(DEFAULT_PATH);

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "currentUser": state.config.current_user,
            "navigation": state.config.navigation(path),
        }
    })))
}

pub async fn get_service_metrics<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let metrics = state.metrics.service_metrics().await?;
    let activity = state.metrics.recent_activity().await?;

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "cards": metrics.stat_cards(),
            "metrics": metrics,
            "recentActivity": activity,
        }
    })))
}

pub async fn get_finance_metrics<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let metrics = state.metrics.finance_metrics().await?;
    let breakdown = state.metrics.revenue_breakdown().await?;

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "cards": metrics.stat_cards(),
            "metrics": metrics,
            "revenueBreakdown": breakdown,
        }
    })))
}

pub async fn get_hr_metrics<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let metrics = state.metrics.hr_metrics().await?;

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "cards": metrics.stat_cards(),
            "metrics": metrics,
        }
    })))
}

/// Compliance checklist, recent verifications and the summary counts
pub async fn get_compliance<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let items = state.metrics.compliance_items().await?;
    let verifications = state.metrics.verifications().await?;
    let summary = ComplianceSummary::from_items(&items);

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "items": items,
            "verifications": verifications,
            "summary": summary,
        }
    })))
}

pub async fn get_users<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let users = state.metrics.users().await?;

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "total": users.len(),
            "users": users,
        }
    })))
}
