//! Product report routes
//!
//! Structure:
//! - api.rs: JSON API, HTMX partial and CSV endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_product_report,
    api_reload,
    api_switch_branch,
    export_sales,
    htmx_most_rented,
    htmx_never_rented,
    htmx_sales,
    page_product_report,
    BranchRequest,
};
