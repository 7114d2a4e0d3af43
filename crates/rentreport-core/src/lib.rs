//! Core report processing for rental branches
//!
//! Loads products and bookings of one branch from a document store, then
//! derives the most-rented and never-rented lists, the paged sales table,
//! sales totals and the CSV export from them.

pub mod error;
pub mod numeric;
pub mod time;
pub mod models;
pub mod loader;
pub mod aggregate;
pub mod filter;
pub mod pagination;
pub mod export;
pub mod report;
pub mod controller;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use models::{Booking, Product, ProductReportRow, ReportData, SalesData, SalesRow, MISSING_BRAND};
pub use loader::{LoadOutcome, ReportLoader};
pub use aggregate::{most_rented, never_rented, SalesSummary};
pub use filter::{filter_products, sort_by_pickup_desc, SalesFilter};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use export::{export_sales_csv, CSV_CONTENT_TYPE, SALES_EXPORT_HEADERS};
pub use report::{build_view, export_view, filtered_sales, ProductReportView, ReportQuery, SalesExport};
pub use controller::{LoadStatus, ReportController, ReportSnapshot, SessionContext};
pub use time::{format_pickup_date, DateRange};
