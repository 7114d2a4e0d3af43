//! Report view: filters, pages and totals applied to loaded data

use serde::{Deserialize, Serialize};

use crate::aggregate::{most_rented, never_rented, SalesSummary};
use crate::error::CoreResult;
use crate::export::export_sales_csv;
use crate::filter::{filter_products, SalesFilter};
use crate::models::{ProductReportRow, ReportData, SalesRow};
use crate::pagination::Pagination;
use crate::time::DateRange;

/// User-controlled report inputs, as received from the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportQuery {
    /// Search term of the product tables
    pub product_search: String,
    /// Search term of the sales table
    pub sales_search: String,
    /// `YYYY-MM-DD`; blank means unbounded
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`; blank means unbounded
    pub end_date: Option<String>,
    /// 1-based page of the sales table
    pub page: Option<String>,
}

impl ReportQuery {
    pub fn date_range(&self) -> DateRange {
        DateRange::from_inputs(self.start_date.as_deref(), self.end_date.as_deref())
    }

    pub fn sales_filter(&self) -> SalesFilter {
        SalesFilter::new(self.sales_search.clone(), self.date_range())
    }

    /// Requested page; anything unparsable is page 1
    pub fn requested_page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Everything the report page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReportView {
    pub most_rented: Vec<ProductReportRow>,
    pub never_rented: Vec<ProductReportRow>,
    /// Rows of the current sales page
    pub sales_page: Vec<SalesRow>,
    pub pagination: Pagination,
    /// Totals over all filtered sales rows, not just the page
    pub summary: SalesSummary,
    /// Search suggestions
    pub product_names: Vec<String>,
}

/// Filtered, sorted sales rows for a query (all pages)
pub fn filtered_sales(data: &ReportData, query: &ReportQuery) -> Vec<SalesRow> {
    query.sales_filter().apply(&data.sales.rows)
}

/// Build the page view for a query
pub fn build_view(data: &ReportData, query: &ReportQuery, page_size: usize) -> ProductReportView {
    let products = filter_products(&data.products, &query.product_search);
    let sales = filtered_sales(data, query);
    let pagination = Pagination::new(sales.len(), page_size, query.requested_page());

    ProductReportView {
        most_rented: most_rented(&products),
        never_rented: never_rented(&products),
        sales_page: pagination.slice(&sales).to_vec(),
        pagination,
        summary: SalesSummary::from_rows(&sales),
        product_names: data.sales.product_names.clone(),
    }
}

/// Rendered sales export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesExport {
    /// Number of sales rows written, not counting the header
    pub rows: usize,
    pub csv: String,
}

/// CSV of every filtered sales row, independent of the page
pub fn export_view(data: &ReportData, query: &ReportQuery) -> CoreResult<SalesExport> {
    let rows = filtered_sales(data, query);
    Ok(SalesExport {
        rows: rows.len(),
        csv: export_sales_csv(&rows)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalesData;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sale(n: usize) -> SalesRow {
        SalesRow {
            product_id: "P1".to_string(),
            product_name: "Tent".to_string(),
            product_type: "Camping".to_string(),
            booking_id: format!("K{}", n),
            pickup_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(n as i64)),
            quantity: 1,
            price: Decimal::from(10),
            deposit: Decimal::ZERO,
            total_cost: Decimal::from(10),
        }
    }

    fn tent_report(booked: usize) -> ProductReportRow {
        ProductReportRow {
            product_id: "P1".to_string(),
            product_name: "Tent".to_string(),
            brand_name: "N/A".to_string(),
            total_booked: booked,
            total_quantity: booked as u64,
            total_price: Decimal::from(10 * booked as i64),
            total_deposit: Decimal::ZERO,
        }
    }

    fn data(rows: usize) -> ReportData {
        ReportData {
            sales: SalesData {
                rows: (0..rows).map(sale).collect(),
                product_names: vec!["Tent".to_string()],
            },
            products: vec![tent_report(rows)],
        }
    }

    #[test]
    fn test_single_unbooked_product() {
        let data = data(0);
        let view = build_view(&data, &ReportQuery::default(), 50);
        assert!(view.most_rented.is_empty());
        assert_eq!(view.never_rented.len(), 1);
        assert_eq!(view.never_rented[0].product_id, "P1");
        assert_eq!(view.never_rented[0].brand_name, "N/A");
        assert_eq!(view.pagination.total_pages(), 0);
    }

    #[test]
    fn test_paging_and_totals_use_all_filtered_rows() {
        let data = data(120);
        let query = ReportQuery {
            page: Some("3".to_string()),
            ..Default::default()
        };
        let view = build_view(&data, &query, 50);
        assert_eq!(view.sales_page.len(), 20);
        assert_eq!(view.pagination.current_page, 3);
        assert_eq!(view.summary.total_entries, 120);
        assert_eq!(view.summary.total_sales_amount, Decimal::from(1200));
        assert_eq!(view.most_rented.len(), 1);
    }

    #[test]
    fn test_export_ignores_page() {
        let data = data(120);
        let query = ReportQuery {
            page: Some("2".to_string()),
            ..Default::default()
        };
        let export = export_view(&data, &query).unwrap();
        assert_eq!(export.rows, 120);
        assert_eq!(export.csv.lines().count(), 121);
    }

    #[test]
    fn test_export_counts_rows_not_lines() {
        let mut data = data(1);
        data.sales.rows[0].product_name = "Tent\nXL".to_string();
        let export = export_view(&data, &ReportQuery::default()).unwrap();
        assert_eq!(export.rows, 1);
        assert!(export.csv.contains("\"Tent\nXL\""));
        assert_eq!(export.csv.lines().count(), 3);
    }

    #[test]
    fn test_date_filter_narrows_totals() {
        let data = data(10);
        let query = ReportQuery {
            start_date: Some("2024-01-03".to_string()),
            end_date: Some("2024-01-05".to_string()),
            ..Default::default()
        };
        let view = build_view(&data, &query, 50);
        assert_eq!(view.summary.total_entries, 3);
        assert_eq!(view.summary.total_rent_amount, Decimal::from(30));
    }

    #[test]
    fn test_garbage_page_reads_as_first() {
        let query = ReportQuery {
            page: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(query.requested_page(), 1);
    }
}
