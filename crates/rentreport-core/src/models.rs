//! Core data models for the product report

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentreport_store::Document;

use crate::numeric::{coerce_decimal, coerce_quantity};
use crate::time::parse_pickup_date;

/// Shown when a product has no brand name
pub const MISSING_BRAND: &str = "N/A";

/// Product information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product document id (the product code)
    pub id: String,
    pub name: String,
    /// Product type (e.g. "Tent", "Stove")
    pub product_type: String,
    pub brand_name: Option<String>,
    pub branch_code: String,
}

impl Product {
    /// Read a product document; missing text fields read as empty
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.get_str("productName").unwrap_or_default().to_string(),
            product_type: doc.get_str("type").unwrap_or_default().to_string(),
            brand_name: doc
                .get_str("brandName")
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            branch_code: doc.get_str("branchCode").unwrap_or_default().to_string(),
        }
    }

    /// Brand name for display
    pub fn brand_display(&self) -> &str {
        self.brand_name.as_deref().unwrap_or(MISSING_BRAND)
    }
}

/// Booking information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Id of the product the booking is nested under
    pub product_id: String,
    pub pickup_date: Option<DateTime<Utc>>,
    pub quantity: u32,
    /// Unit price
    pub price: Decimal,
    pub deposit: Decimal,
    pub total_cost: Decimal,
}

impl Booking {
    /// Read a booking document nested under `product_id`
    pub fn from_document(product_id: &str, doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            product_id: product_id.to_string(),
            pickup_date: parse_pickup_date(doc.get("pickupDate")),
            quantity: coerce_quantity(doc.get("quantity")).value(),
            price: coerce_decimal(doc.get("price")).value(),
            deposit: coerce_decimal(doc.get("deposit")).value(),
            total_cost: coerce_decimal(doc.get("totalCost")).value(),
        }
    }

    /// Unit price times quantity, saturating at the decimal bounds
    pub fn rent_amount(&self) -> Decimal {
        rent_amount(self.price, self.quantity)
    }
}

fn rent_amount(price: Decimal, quantity: u32) -> Decimal {
    price.saturating_mul(Decimal::from(quantity))
}

/// One booking joined with its product's display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    pub product_id: String,
    pub product_name: String,
    pub product_type: String,
    pub booking_id: String,
    pub pickup_date: Option<DateTime<Utc>>,
    pub quantity: u32,
    pub price: Decimal,
    pub deposit: Decimal,
    pub total_cost: Decimal,
}

impl SalesRow {
    pub fn new(product: &Product, booking: &Booking) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            product_type: product.product_type.clone(),
            booking_id: booking.id.clone(),
            pickup_date: booking.pickup_date,
            quantity: booking.quantity,
            price: booking.price,
            deposit: booking.deposit,
            total_cost: booking.total_cost,
        }
    }

    /// Unit price times quantity, saturating at the decimal bounds
    pub fn rent_amount(&self) -> Decimal {
        rent_amount(self.price, self.quantity)
    }
}

/// Per-product aggregate of all its bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReportRow {
    pub product_id: String,
    pub product_name: String,
    pub brand_name: String,
    /// Number of bookings
    pub total_booked: usize,
    /// Sum of booked quantities
    pub total_quantity: u64,
    /// Sum of price x quantity
    pub total_price: Decimal,
    pub total_deposit: Decimal,
}

impl ProductReportRow {
    /// Empty aggregate for a product
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            brand_name: product.brand_display().to_string(),
            total_booked: 0,
            total_quantity: 0,
            total_price: Decimal::ZERO,
            total_deposit: Decimal::ZERO,
        }
    }

    /// Fold one booking into the aggregate
    pub fn add_booking(&mut self, booking: &Booking) {
        self.total_booked += 1;
        self.total_quantity += u64::from(booking.quantity);
        self.total_price = self.total_price.saturating_add(booking.rent_amount());
        self.total_deposit = self.total_deposit.saturating_add(booking.deposit);
    }
}

/// Flat sales rows from one traversal of the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub rows: Vec<SalesRow>,
    /// Distinct product names, in traversal order
    pub product_names: Vec<String>,
}

/// Everything loaded for one branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub sales: SalesData,
    pub products: Vec<ProductReportRow>,
}
