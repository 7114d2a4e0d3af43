//! HTTP server for the product report with HTMX support
//!
//! Routes are organized into modules:
//! - routes::reports: Product report page, partials, JSON API and CSV export

pub mod error;
pub mod routes;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Html,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use rentreport_config::Config;
use rentreport_core::{LoadStatus, ReportController};
use rentreport_utils::escape_html;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ReportController>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::reports::{
        api_product_report, api_reload, api_switch_branch, export_sales, htmx_most_rented, htmx_never_rented,
        htmx_sales, page_product_report,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/reports/products", get(api_product_report))
        .route("/api/branch", post(api_switch_branch))
        .route("/api/reload", post(api_reload))
        // HTMX page routes
        .route("/", get(index_page))
        .route("/welcome", get(page_welcome))
        .route("/reports/products", get(page_product_report))
        // HTMX partial routes
        .route("/reports/products/most-rented", get(htmx_most_rented))
        .route("/reports/products/never-rented", get(htmx_never_rented))
        .route("/reports/products/sales", get(htmx_sales))
        // Downloads
        .route("/reports/products/export", get(export_sales))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: uri.path().to_string(),
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Rent Report</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        escape_html(title),
        content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/welcome", "Dashboard"),
        ("/reports/products", "Product Report"),
    ];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-indigo-600'>Rent Report</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label) in &links {
        let active_class = if current_path.starts_with(path) {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'><span>{}</span></a></li>"#,
            path, active_class, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area
        format!(
            r#"<main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>"#,
            inner_content
        )
    } else {
        base_html(
            title,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path),
                inner_content
            ),
        )
    }
}

/// Index page (alias for the dashboard)
async fn index_page(state: State<AppState>, headers: HeaderMap) -> Html<String> {
    page_welcome(state, headers).await
}

/// Dashboard landing page
async fn page_welcome(state: State<AppState>, headers: HeaderMap) -> Html<String> {
    let snapshot = state.controller.snapshot();
    let branch = snapshot
        .branch_code
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "No branch selected".to_string());
    let status_color = match &snapshot.status {
        LoadStatus::Failed(_) => "text-red-700",
        LoadStatus::Ready => "text-green-700",
        _ => "text-gray-700",
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Dashboard</h2></div>
        <div class='grid grid-cols-1 md:grid-cols-3 gap-4 mb-6'>
            <div class='bg-indigo-50 p-4 rounded-lg border border-indigo-200'><p class='text-sm text-indigo-600'>Branch</p><p class='text-2xl font-bold text-indigo-700'>{}</p></div>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-sm text-green-600'>Products</p><p class='text-2xl font-bold text-green-700'>{}</p></div>
            <div class='bg-blue-50 p-4 rounded-lg border border-blue-200'><p class='text-sm text-blue-600'>Bookings</p><p class='text-2xl font-bold text-blue-700'>{}</p></div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <p class='mb-4'>Report status: <span class='font-medium {}'>{}</span></p>
            <a href='/reports/products' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Open Product Report</a>
        </div>"#,
        branch,
        snapshot.data.products.len(),
        snapshot.data.sales.rows.len(),
        status_color,
        snapshot.status.label()
    );

    Html(page_response(&headers, "Dashboard", "/welcome", &inner_content))
}

/// Start the HTTP server
///
/// Binds to `server.host:server.port` and serves until the listener fails.
pub async fn start_server(config: Config, controller: Arc<ReportController>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { controller, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting report server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /welcome (Dashboard)");
    log::info!("  - /reports/products (Product report)");
    log::info!("  - /reports/products/export (Sales CSV)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router).await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use rentreport_core::SessionContext;
    use rentreport_store::{Document, MemoryStore};
    use tower::util::ServiceExt;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_product(
                Document::new("P1").with("productName", "Tent").with("type", "Camping").with("branchCode", "B1"),
                vec![
                    Document::new("K1")
                        .with("quantity", 2)
                        .with("price", 100)
                        .with("deposit", 20)
                        .with("totalCost", 200)
                        .with("pickupDate", "2024-01-15T10:00:00Z"),
                    Document::new("K2")
                        .with("quantity", 1)
                        .with("price", "50")
                        .with("totalCost", 50)
                        .with("pickupDate", "2024-02-01T10:00:00Z"),
                ],
            )
            .with_product(
                Document::new("P2").with("productName", "Stove").with("branchCode", "B1"),
                vec![],
            )
            .with_product(
                Document::new("P9").with("productName", "Kayak").with("branchCode", "B2"),
                vec![],
            )
    }

    async fn app(branch: Option<&str>) -> (Router, Arc<ReportController>) {
        let controller = Arc::new(ReportController::new(
            Arc::new(store()),
            SessionContext::new(branch.map(str::to_string)),
        ));
        controller.load_session().await.unwrap();
        let state = AppState {
            controller: Arc::clone(&controller),
            config: Config::default(),
        };
        (create_router(state), controller)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (router, _) = app(None).await;
        let response = router.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (router, _) = app(None).await;
        let response = router.oneshot(get_request("/reports/unknown")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_report_page_full_and_partial() {
        let (router, _) = app(Some("B1")).await;
        let response = router.clone().oneshot(get_request("/reports/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Most Rented Products"));
        assert!(html.contains("Back to Dashboard"));
        assert!(html.contains("href='/welcome'"));
        assert!(html.contains("Total Rent Amount: 250.00"));
        assert!(html.contains("Ready"));

        let request = Request::builder()
            .uri("/reports/products")
            .header("hx-request", "true")
            .body(Body::empty())
            .unwrap();
        let html = body_text(router.oneshot(request).await.unwrap()).await;
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Never Rented Products"));
    }

    #[tokio::test]
    async fn test_never_rented_partial_filters_by_search() {
        let (router, _) = app(Some("B1")).await;
        let html = body_text(router.clone().oneshot(get_request("/reports/products/never-rented")).await.unwrap()).await;
        assert!(html.contains("Stove"));
        assert!(html.contains("N/A"));

        let html = body_text(
            router
                .oneshot(get_request("/reports/products/never-rented?product_search=TENT"))
                .await
                .unwrap(),
        )
        .await;
        assert!(html.contains("No product data found"));
    }

    #[tokio::test]
    async fn test_export_download() {
        let (router, _) = app(Some("B1")).await;
        let response = router
            .oneshot(get_request("/reports/products/export?start_date=2024-01-01&end_date=2024-01-31&page=7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"sales_report.csv\""
        );
        assert_eq!(
            body_text(response).await,
            "Product Code,Product Name,Pickup Date,Quantity,Price,Deposit\nP1,Tent,Mon Jan 15 2024,2,100.00,20.00"
        );
    }

    #[tokio::test]
    async fn test_json_report() {
        let (router, _) = app(Some("B1")).await;
        let response = router.oneshot(get_request("/api/reports/products?sales_search=camp")).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["summary"]["total_entries"], 2);
        assert_eq!(json["most_rented"][0]["product_id"], "P1");
        assert_eq!(json["never_rented"][0]["brand_name"], "N/A");
        assert_eq!(json["pagination"]["current_page"], 1);
    }

    #[tokio::test]
    async fn test_switch_branch() {
        let (router, controller) = app(Some("B1")).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/branch")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"branch_code": "B2"}"#))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(controller.snapshot().branch_code.as_deref(), Some("B2"));
        assert_eq!(controller.snapshot().data.products[0].product_id, "P9");

        let request = Request::builder()
            .method("POST")
            .uri("/api/branch")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"branch_code": " "}"#))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reload_without_branch_is_rejected() {
        let (router, _) = app(None).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/reload")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["success"], false);
    }
}
