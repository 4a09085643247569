//! REST API handlers for the waitlist table
//!
//! Every handler locks the waitlist session, performs one table operation and
//! answers with the recomputed page.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{Value, json};

use shared::{Component, RecordId, component_debug};
use waitlist::{FilterSpec, RecordSource, WaitlistView};

use crate::error::{DashboardError, DashboardResult};
use crate::state::AppState;
use crate::traits::MetricsSource;
use crate::types::{PageDirection, PageRequest, StatusRequest, TabRequest, ToggleRequest, WaitlistPage, WaitlistRow};

fn page_response(view: WaitlistView) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "data": WaitlistPage::from(view),
    }))
}

/// Current page of the active tab
pub async fn get_waitlist<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    Ok(page_response(waitlist.view()?))
}

pub async fn switch_tab<R, M>(
    State(state): State<AppState<R, M>>,
    Json(request): Json<TabRequest>,
) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    let view = waitlist.switch_tab(request.tab)?;
    component_debug!(Component::Api, "📑 Switched to {}", request.tab);
    Ok(page_response(view))
}

/// Replace the draft filter; the page is unchanged until apply
pub async fn set_draft<R, M>(
    State(state): State<AppState<R, M>>,
    Json(spec): Json<FilterSpec>,
) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    Ok(page_response(waitlist.set_draft(spec)?))
}

/// Apply the draft, or the filter in the body when one is sent
pub async fn apply_filters<R, M>(State(state): State<AppState<R, M>>, body: Bytes) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let spec = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        let spec: FilterSpec = serde_json::from_slice(&body).map_err(DashboardError::invalid_request)?;
        Some(spec)
    };

    let mut waitlist = state.waitlist.lock().await;
    if let Some(spec) = spec {
        waitlist.set_draft(spec)?;
    }
    Ok(page_response(waitlist.apply_filters()?))
}

pub async fn clear_filters<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    Ok(page_response(waitlist.clear_filters()?))
}

/// Jump to a page or step one page; out-of-range requests leave the page as is
pub async fn change_page<R, M>(
    State(state): State<AppState<R, M>>,
    Json(request): Json<PageRequest>,
) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    let view = match request {
        PageRequest::Number { page } => waitlist.go_to_page(page)?,
        PageRequest::Step {
            direction: PageDirection::Next,
        } => waitlist.next_page()?,
        PageRequest::Step {
            direction: PageDirection::Previous,
        } => waitlist.previous_page()?,
    };
    Ok(page_response(view))
}

pub async fn toggle_selection<R, M>(
    State(state): State<AppState<R, M>>,
    Json(request): Json<ToggleRequest>,
) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    Ok(page_response(waitlist.toggle(&request.id)?))
}

/// Header checkbox: toggle every row of the current page
pub async fn toggle_all<R, M>(State(state): State<AppState<R, M>>) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let mut waitlist = state.waitlist.lock().await;
    Ok(page_response(waitlist.toggle_all()?))
}

/// Set a record's registration status
pub async fn update_status<R, M>(
    State(state): State<AppState<R, M>>,
    Path(id): Path<String>,
    Json(request): Json<StatusRequest>,
) -> DashboardResult<Json<Value>>
where
    R: RecordSource + 'static,
    M: MetricsSource + 'static,
{
    let id = RecordId::new(id);
    let updated = state.update_status(&id, request.status).await?;

    let mut waitlist = state.waitlist.lock().await;
    let selected = waitlist.table().is_selected(&updated.id);
    let view = waitlist.view()?;

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "record": WaitlistRow::new(updated, selected),
            "page": WaitlistPage::from(view),
        }
    })))
}
