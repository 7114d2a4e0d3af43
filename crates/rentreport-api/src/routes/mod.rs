//! Route modules for the API server
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints, HTMX partials and downloads
//! - page.rs: HTML rendering

pub mod reports;
