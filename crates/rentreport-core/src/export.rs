//! CSV export of sales rows

use rentreport_utils::format_money;

use crate::error::{CoreError, CoreResult};
use crate::models::SalesRow;
use crate::time::format_pickup_date;

/// MIME type of the export
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Column headers of the export
pub const SALES_EXPORT_HEADERS: [&str; 6] = [
    "Product Code",
    "Product Name",
    "Pickup Date",
    "Quantity",
    "Price",
    "Deposit",
];

/// Serialize sales rows to CSV text
///
/// The header is always written. Lines are separated by `\n` with no
/// trailing newline. Fields containing the delimiter, quotes, or line breaks
/// are quoted.
pub fn export_sales_csv(rows: &[SalesRow]) -> CoreResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(SALES_EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.product_id.as_str(),
            row.product_name.as_str(),
            format_pickup_date(row.pickup_date.as_ref()).as_str(),
            row.quantity.to_string().as_str(),
            format_money(row.price).as_str(),
            format_money(row.deposit).as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| CoreError::Export {
        message: e.to_string(),
    })?;
    let mut text = String::from_utf8(bytes).map_err(|e| CoreError::Export {
        message: e.to_string(),
    })?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
