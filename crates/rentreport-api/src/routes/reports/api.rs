//! Product report endpoints - JSON API, HTMX partials and CSV download

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use rentreport_core::{build_view, export_view, ProductReportView, ReportQuery, CSV_CONTENT_TYPE};

use super::page;
use crate::{page_response, ApiError, AppState};

fn current_view(state: &AppState, query: &ReportQuery) -> ProductReportView {
    let snapshot = state.controller.snapshot();
    build_view(&snapshot.data, query, state.config.pagination.entries_per_page)
}

/// Full product report page
pub async fn page_product_report(
    state: State<AppState>,
    headers: HeaderMap,
    query: Query<ReportQuery>,
) -> Html<String> {
    let snapshot = state.controller.snapshot();
    let view = build_view(&snapshot.data, &query, state.config.pagination.entries_per_page);
    let inner_content = page::render_report_page(&snapshot, &view, &query, &state.config.navigation.back_route);
    Html(page_response(&headers, "Product Report", "/reports/products", &inner_content))
}

pub async fn htmx_most_rented(state: State<AppState>, query: Query<ReportQuery>) -> Html<String> {
    Html(page::render_most_rented(&current_view(&state, &query).most_rented))
}

pub async fn htmx_never_rented(state: State<AppState>, query: Query<ReportQuery>) -> Html<String> {
    Html(page::render_never_rented(&current_view(&state, &query).never_rented))
}

pub async fn htmx_sales(state: State<AppState>, query: Query<ReportQuery>) -> Html<String> {
    Html(page::render_sales(&current_view(&state, &query), &query))
}

/// JSON view of the report for a query
pub async fn api_product_report(state: State<AppState>, query: Query<ReportQuery>) -> Json<ProductReportView> {
    Json(current_view(&state, &query))
}

/// Filtered sales rows as a CSV attachment
pub async fn export_sales(state: State<AppState>, query: Query<ReportQuery>) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.controller.snapshot();
    let export = export_view(&snapshot.data, &query)?;
    log::info!("Exporting {} sales rows as {}", export.rows, state.config.export.file_name);

    let disposition = format!("attachment; filename=\"{}\"", state.config.export.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.csv,
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRequest {
    pub branch_code: String,
}

fn load_result(state: &AppState) -> Value {
    let snapshot = state.controller.snapshot();
    serde_json::json!({
        "success": true,
        "branch_code": snapshot.branch_code,
        "status": snapshot.status,
        "products": snapshot.data.products.len(),
        "sales": snapshot.data.sales.rows.len(),
    })
}

/// Switch the session branch and load its report
pub async fn api_switch_branch(
    state: State<AppState>,
    Json(request): Json<BranchRequest>,
) -> Result<Json<Value>, ApiError> {
    state.controller.switch_branch(&request.branch_code).await?;
    Ok(Json(load_result(&state)))
}

/// Reload the current branch
pub async fn api_reload(state: State<AppState>) -> Result<Json<Value>, ApiError> {
    state.controller.reload().await?;
    Ok(Json(load_result(&state)))
}
