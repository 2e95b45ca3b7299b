use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

// ─── Request ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    #[serde(default = "overall")]
    pub shop: String,
    #[serde(default = "overall")]
    pub month: String,
}

fn overall() -> String {
    "Overall".to_string()
}

// ─── Query rows ─────────────────────────────────────────────────────────────

/// Revenue/quantity totals per store (pie chart source).
#[derive(Debug, FromRow)]
pub struct StoreTotalsRow {
    pub store_location: Option<String>,
    pub total_sales: Option<f64>,
    pub total_qty: Option<i64>,
}

/// Transaction counts per (day-of-week, hour-of-day) cell.
///
/// The calendar fields are null when a date failed normalization; such rows
/// are skipped during reshaping.
#[derive(Debug, FromRow)]
pub struct HeatmapRow {
    pub day_of_week: Option<i64>,
    pub hour_of_day: Option<i64>,
    pub total_transactions: i64,
}

/// Revenue/quantity per (calendar month, store).
#[derive(Debug, FromRow)]
pub struct MonthlyRow {
    pub month: Option<i64>,
    pub store_location: Option<String>,
    pub sales: Option<f64>,
    pub qty: Option<i64>,
}

/// Revenue/quantity per (day-of-month, store); folded into week buckets.
#[derive(Debug, FromRow)]
pub struct DailyRow {
    pub day_of_month: Option<i64>,
    pub store_location: Option<String>,
    pub sales: Option<f64>,
    pub qty: Option<i64>,
}

/// Parent rollup row, grouped by category.
#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub product_category: Option<String>,
    pub total_qty: Option<i64>,
    pub avg_price: Option<f64>,
    pub total_sales: Option<f64>,
}

/// Child rollup row, grouped by (category, product type).
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub product_category: Option<String>,
    pub product_type: Option<String>,
    pub total_qty: Option<i64>,
    pub avg_price: Option<f64>,
    pub total_sales: Option<f64>,
}

// ─── Response ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub metrics: Metrics,
    pub pie_data: PieData,
    pub line_data: LineData,
    pub heatmap_data: Option<HeatmapData>,
    pub table_data: Vec<CategoryBreakdown>,
}

#[derive(Debug, Serialize)]
pub struct Metrics {
    pub total_revenue: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct PieData {
    pub labels: Vec<String>,
    pub sales: Vec<f64>,
    pub qty: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct LineData {
    pub dates: Vec<String>,
    pub sales_datasets: Vec<ChartDataset>,
    pub qty_datasets: Vec<ChartDataset>,
}

#[derive(Debug, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "borderColor")]
    pub border_color: String,
}

#[derive(Debug, Serialize)]
pub struct HeatmapData {
    pub transaction_matrix: BTreeMap<String, i64>,
    pub max_transactions: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub sales: f64,
    pub percent_sales: f64,
    pub avg_price: f64,
    pub qty: i64,
    pub percent_qty: f64,
    pub products: Vec<ProductBreakdown>,
}

#[derive(Debug, Serialize)]
pub struct ProductBreakdown {
    pub name: String,
    pub sales: f64,
    pub percent_sales: f64,
    pub avg_price: f64,
    pub qty: i64,
    pub percent_qty: f64,
}
