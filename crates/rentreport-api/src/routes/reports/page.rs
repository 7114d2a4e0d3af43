//! Product report page rendering

use rentreport_core::{
    format_pickup_date, LoadStatus, Pagination, ProductReportRow, ProductReportView, ReportQuery, ReportSnapshot,
    SalesRow, SalesSummary,
};
use rentreport_utils::{escape_html, format_money};

const TABLE_CLASS: &str = "w-full text-sm";
const TH_CLASS: &str = "px-4 py-2 text-left font-medium text-gray-600";
const TD_CLASS: &str = "px-4 py-2";

fn table_head(columns: &[&str]) -> String {
    let cells: String = columns
        .iter()
        .map(|c| format!("<th class='{}'>{}</th>", TH_CLASS, c))
        .collect();
    format!("<thead class='bg-gray-50'><tr>{}</tr></thead>", cells)
}

fn empty_row(colspan: usize, message: &str) -> String {
    format!(
        "<tr><td class='px-4 py-6 text-center text-gray-500' colspan='{}'>{}</td></tr>",
        colspan, message
    )
}

/// Status line shown above the tables
pub fn render_status(snapshot: &ReportSnapshot) -> String {
    let branch = snapshot
        .branch_code
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "-".to_string());
    let (color, detail) = match &snapshot.status {
        LoadStatus::Idle => ("text-gray-500", String::new()),
        LoadStatus::Loading => ("text-blue-600", String::new()),
        LoadStatus::Ready => ("text-green-600", String::new()),
        LoadStatus::Failed(message) => ("text-red-600", format!(": {}", escape_html(message))),
    };
    format!(
        r#"<div id='report-status' class='text-sm text-gray-600 mb-4'>Branch <span class='font-medium'>{}</span> · <span class='{}'>{}{}</span></div>"#,
        branch,
        color,
        snapshot.status.label(),
        detail
    )
}

/// "Most Rented Products" table
pub fn render_most_rented(rows: &[ProductReportRow]) -> String {
    let mut html = format!(
        "<table class='{}'>{}<tbody>",
        TABLE_CLASS,
        table_head(&["SR.No", "Product Code", "Product Name", "Total Booked"])
    );
    if rows.is_empty() {
        html.push_str(&empty_row(4, "No product data found"));
    }
    for (i, row) in rows.iter().enumerate() {
        html.push_str(&format!(
            "<tr class='border-b'><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td}'>{}</td></tr>",
            i + 1,
            escape_html(&row.product_id),
            escape_html(&row.product_name),
            row.total_booked,
            td = TD_CLASS
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// "Never Rented Products" table
pub fn render_never_rented(rows: &[ProductReportRow]) -> String {
    let mut html = format!(
        "<table class='{}'>{}<tbody>",
        TABLE_CLASS,
        table_head(&["SR.No", "Product Code", "Product Name", "Brand Name"])
    );
    if rows.is_empty() {
        html.push_str(&empty_row(4, "No product data found"));
    }
    for (i, row) in rows.iter().enumerate() {
        html.push_str(&format!(
            "<tr class='border-b'><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td}'>{}</td></tr>",
            i + 1,
            escape_html(&row.product_id),
            escape_html(&row.product_name),
            escape_html(&row.brand_name),
            td = TD_CLASS
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn render_sales_rows(rows: &[SalesRow]) -> String {
    if rows.is_empty() {
        return empty_row(7, "No sales data found");
    }
    rows.iter()
        .map(|row| {
            format!(
                "<tr class='border-b'><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td}'>{}</td><td class='{td} text-right'>{}</td><td class='{td} text-right'>{}</td><td class='{td} text-right'>{}</td></tr>",
                escape_html(&row.product_id),
                escape_html(&row.product_name),
                format_pickup_date(row.pickup_date.as_ref()),
                row.quantity,
                format_money(row.price),
                format_money(row.deposit),
                format_money(row.total_cost),
                td = TD_CLASS
            )
        })
        .collect()
}

fn render_pagination(pagination: &Pagination) -> String {
    let button = |label: &str, page: usize, enabled: bool| {
        format!(
            "<button {} hx-get='/reports/products/sales?page={}' hx-include='#sales-filters' hx-target='#sales-section' class='px-3 py-1 border rounded hover:bg-gray-100'>{}</button>",
            if enabled { "" } else { "disabled" },
            page,
            label
        )
    };
    let mut previous = *pagination;
    previous.previous();
    let mut next = *pagination;
    next.next();

    format!(
        "<div class='mt-4 flex items-center justify-center gap-3'>{}<span class='text-sm text-gray-600'>{}</span>{}</div>",
        button("Previous", previous.current_page, pagination.has_previous()),
        pagination.label(),
        button("Next", next.current_page, pagination.has_next())
    )
}

/// Download link carrying the current sales filters
pub fn export_href(query: &ReportQuery) -> String {
    let mut params = Vec::new();
    if !query.sales_search.is_empty() {
        params.push(format!("sales_search={}", urlencoding::encode(&query.sales_search)));
    }
    if let Some(start) = query.start_date.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("start_date={}", urlencoding::encode(start)));
    }
    if let Some(end) = query.end_date.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("end_date={}", urlencoding::encode(end)));
    }
    if params.is_empty() {
        "/reports/products/export".to_string()
    } else {
        format!("/reports/products/export?{}", params.join("&"))
    }
}

fn render_totals(summary: &SalesSummary, query: &ReportQuery) -> String {
    format!(
        r#"<div class='mt-6 flex items-center justify-between flex-wrap gap-4'>
            <div class='space-y-1'>
                <h4 class='font-medium'>Total Entries: {}</h4>
                <h4 class='font-medium'>Total Sales Amount: {}</h4>
                <h4 class='font-medium'>Total Rent Amount: {}</h4>
            </div>
            <a href='{}' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Export Sales Data</a>
        </div>"#,
        summary.total_entries,
        format_money(summary.total_sales_amount),
        format_money(summary.total_rent_amount),
        escape_html(&export_href(query))
    )
}

/// Sales table with its pagination controls and totals
pub fn render_sales(view: &ProductReportView, query: &ReportQuery) -> String {
    format!(
        "<table class='{}'>{}<tbody>{}</tbody></table>{}{}",
        TABLE_CLASS,
        table_head(&["Product Code", "Product Name", "Pickup Date", "Quantity", "Price", "Deposit", "Total"]),
        render_sales_rows(&view.sales_page),
        render_pagination(&view.pagination),
        render_totals(&view.summary, query)
    )
}

fn render_product_names(names: &[String]) -> String {
    let options: String = names
        .iter()
        .map(|n| format!("<option value='{}'>", escape_html(n)))
        .collect();
    format!("<datalist id='product-names'>{}</datalist>", options)
}

/// Inner content of the product report page
pub fn render_report_page(
    snapshot: &ReportSnapshot,
    view: &ProductReportView,
    query: &ReportQuery,
    back_route: &str,
) -> String {
    format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-2xl font-bold'>Product Report</h2>
            <div class='flex gap-2'>
                <button onclick='reloadReport()' class='px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200'>Reload</button>
                <a href='{back}' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Back to Dashboard</a>
            </div>
        </div>
        {status}
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <div class='flex items-center justify-between mb-4'>
                <h3 class='text-lg font-semibold'>Most Rented Products</h3>
                <input id='product-search' type='text' name='product_search' value='{product_search}' placeholder='Search products...'
                    hx-get='/reports/products/most-rented' hx-target='#most-rented' hx-trigger='keyup changed delay:300ms'
                    class='px-4 py-2 border rounded-lg w-48'>
            </div>
            <div id='most-rented'>{most_rented}</div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Never Rented Products</h3>
            <div id='never-rented' hx-get='/reports/products/never-rented' hx-include='#product-search'
                hx-trigger='keyup changed delay:300ms from:#product-search'>{never_rented}</div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Sales Data</h3>
            <form id='sales-filters' class='flex flex-wrap items-center gap-3 mb-4'
                hx-get='/reports/products/sales' hx-target='#sales-section' hx-trigger='input changed delay:300ms, change'>
                <input type='text' name='sales_search' value='{sales_search}' list='product-names' placeholder='Search...'
                    class='px-4 py-2 border rounded-lg w-48'>
                {product_names}
                <label class='text-sm text-gray-600'>Start Date:</label>
                <input type='date' name='start_date' value='{start}' class='px-3 py-2 border rounded-lg'>
                <label class='text-sm text-gray-600'>End Date:</label>
                <input type='date' name='end_date' value='{end}' class='px-3 py-2 border rounded-lg'>
            </form>
            <div id='sales-section'>{sales}</div>
        </div>
        <script>
        function reloadReport() {{
            fetch('/api/reload', {{method: 'POST'}})
                .then(r => r.json())
                .then(data => {{
                    if (data.success) {{
                        window.location.reload();
                    }} else {{
                        alert('Reload failed: ' + data.message);
                    }}
                }})
                .catch(e => alert('Reload failed: ' + e));
        }}
        </script>
        <style>button[disabled]{{cursor:not-allowed;opacity:0.5}}</style>"#,
        back = escape_html(back_route),
        status = render_status(snapshot),
        product_search = escape_html(&query.product_search),
        most_rented = render_most_rented(&view.most_rented),
        never_rented = render_never_rented(&view.never_rented),
        sales_search = escape_html(&query.sales_search),
        product_names = render_product_names(&view.product_names),
        start = escape_html(query.start_date.as_deref().unwrap_or("")),
        end = escape_html(query.end_date.as_deref().unwrap_or("")),
        sales = render_sales(view, query)
    )
}
