//! Loading report data for a branch from the document store
//!
//! The sales rows and the per-product aggregates are built by two separate
//! traversals of the store. Each traversal reads the branch's products and
//! then, one product at a time, that product's bookings.

use rentreport_store::StoreRef;

use crate::error::CoreResult;
use crate::models::{Booking, Product, ProductReportRow, SalesData, SalesRow};

/// Results of both traversals; each may fail on its own
#[derive(Debug)]
pub struct LoadOutcome {
    pub sales: CoreResult<SalesData>,
    pub products: CoreResult<Vec<ProductReportRow>>,
}

/// Reads products and bookings for a branch
#[derive(Clone)]
pub struct ReportLoader {
    store: StoreRef,
}

impl ReportLoader {
    pub fn new(store: StoreRef) -> Self {
        Self { store }
    }

    /// Run both traversals concurrently
    pub async fn load(&self, branch_code: &str) -> LoadOutcome {
        let (sales, products) = tokio::join!(
            self.load_sales(branch_code),
            self.load_product_report(branch_code)
        );
        LoadOutcome { sales, products }
    }

    /// Flatten every booking of the branch into sales rows
    pub async fn load_sales(&self, branch_code: &str) -> CoreResult<SalesData> {
        let products = self.store.products_by_branch(branch_code).await?;

        let mut data = SalesData::default();
        for doc in &products {
            let product = Product::from_document(doc);
            let bookings = self.store.bookings(&product.id).await?;

            if !data.product_names.contains(&product.name) {
                data.product_names.push(product.name.clone());
            }

            for booking_doc in &bookings {
                let booking = Booking::from_document(&product.id, booking_doc);
                data.rows.push(SalesRow::new(&product, &booking));
            }
        }

        log::info!(
            "Loaded {} sales rows across {} products for branch {}",
            data.rows.len(),
            products.len(),
            branch_code
        );
        Ok(data)
    }

    /// Aggregate each product's bookings into one report row
    pub async fn load_product_report(&self, branch_code: &str) -> CoreResult<Vec<ProductReportRow>> {
        let products = self.store.products_by_branch(branch_code).await?;

        let mut report = Vec::with_capacity(products.len());
        for doc in &products {
            let product = Product::from_document(doc);
            let bookings = self.store.bookings(&product.id).await?;

            let mut row = ProductReportRow::new(&product);
            for booking_doc in &bookings {
                row.add_booking(&Booking::from_document(&product.id, booking_doc));
            }
            report.push(row);
        }

        log::info!(
            "Built product report with {} products for branch {}",
            report.len(),
            branch_code
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentreport_store::{Document, MemoryStore};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_product(
                Document::new("P1")
                    .with("productName", "Tent")
                    .with("type", "Camping")
                    .with("branchCode", "B1"),
                vec![
                    Document::new("K1")
                        .with("quantity", 2)
                        .with("price", "100")
                        .with("totalCost", "200")
                        .with("pickupDate", "2024-01-10"),
                    Document::new("K2")
                        .with("quantity", 1)
                        .with("price", 50)
                        .with("totalCost", 60),
                ],
            )
            .with_product(
                Document::new("P2")
                    .with("productName", "Stove")
                    .with("branchCode", "B1"),
                vec![],
            )
            .with_product(
                Document::new("P3")
                    .with("productName", "Kayak")
                    .with("branchCode", "B2"),
                vec![Document::new("K3").with("quantity", 1)],
            )
    }

    #[tokio::test]
    async fn test_load_sales_flattens_bookings() {
        let loader = ReportLoader::new(Arc::new(store()));
        let sales = loader.load_sales("B1").await.unwrap();

        assert_eq!(sales.rows.len(), 2);
        assert!(sales.rows.iter().all(|r| r.product_id == "P1"));
        assert_eq!(sales.rows[0].product_type, "Camping");
        assert_eq!(sales.product_names, vec!["Tent", "Stove"]);
    }

    #[tokio::test]
    async fn test_product_report_counts_every_booking() {
        let loader = ReportLoader::new(Arc::new(store()));
        let report = loader.load_product_report("B1").await.unwrap();

        assert_eq!(report.len(), 2);
        let booked: usize = report.iter().map(|r| r.total_booked).sum();
        assert_eq!(booked, 2);
        assert_eq!(report[0].total_price, Decimal::from(250));
        assert_eq!(report[1].total_booked, 0);
    }

    #[tokio::test]
    async fn test_extreme_price_does_not_abort_load() {
        let store = MemoryStore::new().with_product(
            Document::new("P1").with("productName", "Yacht").with("branchCode", "B1"),
            vec![Document::new("K1").with("quantity", 10).with("price", "1e28")],
        );
        let loader = ReportLoader::new(Arc::new(store));
        let outcome = loader.load("B1").await;

        let report = outcome.products.unwrap();
        assert_eq!(report[0].total_booked, 1);
        assert_eq!(report[0].total_price, Decimal::MAX);
        assert_eq!(outcome.sales.unwrap().rows.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_branch_is_empty() {
        let loader = ReportLoader::new(Arc::new(store()));
        let outcome = loader.load("B9").await;
        assert!(outcome.sales.unwrap().rows.is_empty());
        assert!(outcome.products.unwrap().is_empty());
    }
}
