//! Search and date-range filtering of report rows

use std::cmp::Ordering;

use crate::models::{ProductReportRow, SalesRow};
use crate::time::DateRange;

/// Case-insensitive substring test; an empty term matches everything
fn matches_term(field: &str, term_lower: &str) -> bool {
    field.to_lowercase().contains(term_lower)
}

/// Product rows whose name or code contains the search term
pub fn filter_products(rows: &[ProductReportRow], search: &str) -> Vec<ProductReportRow> {
    let term = search.to_lowercase();
    rows.iter()
        .filter(|r| matches_term(&r.product_name, &term) || matches_term(&r.product_id, &term))
        .cloned()
        .collect()
}

/// Sales filter: one search term plus a pickup date range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesFilter {
    pub search: String,
    pub range: DateRange,
}

impl SalesFilter {
    pub fn new(search: impl Into<String>, range: DateRange) -> Self {
        Self {
            search: search.into(),
            range,
        }
    }

    /// Search matches name, code, or type; the pickup date must fall in range
    pub fn matches(&self, row: &SalesRow) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = matches_term(&row.product_name, &term)
            || matches_term(&row.product_id, &term)
            || matches_term(&row.product_type, &term);
        matches_search && self.range.contains_pickup(row.pickup_date.as_ref())
    }

    /// Matching rows, most recent pickup first
    pub fn apply(&self, rows: &[SalesRow]) -> Vec<SalesRow> {
        let mut filtered: Vec<SalesRow> = rows.iter().filter(|r| self.matches(r)).cloned().collect();
        sort_by_pickup_desc(&mut filtered);
        filtered
    }
}

/// Most recent pickup first; rows without a date go last; otherwise stable
pub fn sort_by_pickup_desc(rows: &mut [SalesRow]) {
    rows.sort_by(|a, b| match (&a.pickup_date, &b.pickup_date) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sale(id: &str, name: &str, kind: &str, pickup: Option<(i32, u32, u32)>) -> SalesRow {
        SalesRow {
            product_id: id.to_string(),
            product_name: name.to_string(),
            product_type: kind.to_string(),
            booking_id: format!("{}-{}", id, name),
            pickup_date: pickup.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
            quantity: 1,
            price: Decimal::ONE,
            deposit: Decimal::ZERO,
            total_cost: Decimal::ONE,
        }
    }

    fn product(id: &str, name: &str) -> ProductReportRow {
        ProductReportRow {
            product_id: id.to_string(),
            product_name: name.to_string(),
            brand_name: "N/A".to_string(),
            total_booked: 0,
            total_quantity: 0,
            total_price: Decimal::ZERO,
            total_deposit: Decimal::ZERO,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_product_search_is_case_insensitive() {
        let rows = vec![product("P1", "Tent"), product("TX-9", "Stove"), product("P3", "Chair")];
        let upper = filter_products(&rows, "TENT");
        let lower = filter_products(&rows, "tent");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);

        let by_code = filter_products(&rows, "tx");
        assert_eq!(by_code[0].product_id, "TX-9");
        assert_eq!(filter_products(&rows, "").len(), 3);
    }

    #[test]
    fn test_sales_search_matches_type() {
        let rows = vec![sale("P1", "Tent", "Camping", None), sale("P2", "Board", "Water", None)];
        let filter = SalesFilter::new("CAMP", DateRange::default());
        let found = filter.apply(&rows);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product_id, "P1");
    }

    #[test]
    fn test_sales_range_bounds_are_inclusive() {
        let rows = vec![
            sale("P1", "Tent", "Camping", Some((2024, 1, 1))),
            sale("P2", "Tent", "Camping", Some((2024, 1, 15))),
            sale("P3", "Tent", "Camping", Some((2024, 1, 31))),
            sale("P4", "Tent", "Camping", Some((2024, 2, 1))),
            sale("P5", "Tent", "Camping", None),
        ];
        let filter = SalesFilter::new("", DateRange::new(Some(day(2024, 1, 1)), Some(day(2024, 1, 31))));
        let ids: Vec<String> = filter.apply(&rows).into_iter().map(|r| r.product_id).collect();
        assert_eq!(ids, vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn test_sort_recent_first_undated_last() {
        let mut rows = vec![
            sale("A", "x", "", None),
            sale("B", "x", "", Some((2024, 1, 1))),
            sale("C", "x", "", Some((2024, 3, 1))),
            sale("D", "x", "", None),
            sale("E", "x", "", Some((2024, 2, 1))),
        ];
        sort_by_pickup_desc(&mut rows);
        let ids: Vec<&str> = rows.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "E", "B", "A", "D"]);
    }

    #[test]
    fn test_unbounded_filter_keeps_undated_rows() {
        let rows = vec![sale("P1", "Tent", "Camping", None)];
        assert_eq!(SalesFilter::default().apply(&rows).len(), 1);
    }
}
