//! Most-rented / never-rented lists and sales totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ProductReportRow, SalesRow};

/// Products booked at least once, most bookings first
///
/// The sort is stable: products with equal booking counts keep store order.
pub fn most_rented(rows: &[ProductReportRow]) -> Vec<ProductReportRow> {
    let mut rented: Vec<ProductReportRow> = rows
        .iter()
        .filter(|r| r.total_booked > 0)
        .cloned()
        .collect();
    rented.sort_by(|a, b| b.total_booked.cmp(&a.total_booked));
    rented
}

/// Products with no bookings, in store order
pub fn never_rented(rows: &[ProductReportRow]) -> Vec<ProductReportRow> {
    rows.iter().filter(|r| r.total_booked == 0).cloned().collect()
}

/// Totals over a set of sales rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_entries: usize,
    /// Sum of stored total cost
    pub total_sales_amount: Decimal,
    /// Sum of unit price x quantity
    pub total_rent_amount: Decimal,
}

impl SalesSummary {
    pub fn from_rows(rows: &[SalesRow]) -> Self {
        Self {
            total_entries: rows.len(),
            total_sales_amount: rows
                .iter()
                .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.total_cost)),
            total_rent_amount: rows
                .iter()
                .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.rent_amount())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_row(id: &str, booked: usize) -> ProductReportRow {
        ProductReportRow {
            product_id: id.to_string(),
            product_name: id.to_string(),
            brand_name: "N/A".to_string(),
            total_booked: booked,
            total_quantity: booked as u64,
            total_price: Decimal::ZERO,
            total_deposit: Decimal::ZERO,
        }
    }

    fn sale(price: i64, quantity: u32, total_cost: i64) -> SalesRow {
        SalesRow {
            product_id: "P1".to_string(),
            product_name: "Tent".to_string(),
            product_type: "Camping".to_string(),
            booking_id: "K".to_string(),
            pickup_date: None,
            quantity,
            price: Decimal::from(price),
            deposit: Decimal::ZERO,
            total_cost: Decimal::from(total_cost),
        }
    }

    fn ids(rows: &[ProductReportRow]) -> Vec<&str> {
        rows.iter().map(|r| r.product_id.as_str()).collect()
    }

    #[test]
    fn test_most_rented_sorted_and_stable() {
        let rows = vec![
            report_row("A", 1),
            report_row("B", 3),
            report_row("C", 0),
            report_row("D", 3),
            report_row("E", 1),
        ];
        assert_eq!(ids(&most_rented(&rows)), vec!["B", "D", "A", "E"]);
        assert_eq!(ids(&never_rented(&rows)), vec!["C"]);
    }

    #[test]
    fn test_all_unbooked() {
        let rows = vec![report_row("A", 0), report_row("B", 0)];
        assert!(most_rented(&rows).is_empty());
        assert_eq!(never_rented(&rows), rows);
    }

    #[test]
    fn test_summary_sums_are_independent() {
        let consistent = vec![sale(100, 2, 200), sale(50, 1, 50)];
        let summary = SalesSummary::from_rows(&consistent);
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.total_sales_amount, Decimal::from(250));
        assert_eq!(summary.total_rent_amount, Decimal::from(250));

        let inconsistent = vec![sale(100, 2, 180), sale(50, 1, 75)];
        let summary = SalesSummary::from_rows(&inconsistent);
        assert_eq!(summary.total_sales_amount, Decimal::from(255));
        assert_eq!(summary.total_rent_amount, Decimal::from(250));
    }

    #[test]
    fn test_summary_saturates_on_huge_amounts() {
        let mut rows = vec![sale(1, 1, 1), sale(1, 1, 1)];
        for row in &mut rows {
            row.price = Decimal::MAX;
            row.total_cost = Decimal::MAX;
        }
        let summary = SalesSummary::from_rows(&rows);
        assert_eq!(summary.total_sales_amount, Decimal::MAX);
        assert_eq!(summary.total_rent_amount, Decimal::MAX);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(SalesSummary::from_rows(&[]), SalesSummary::default());
    }
}
