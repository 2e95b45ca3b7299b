use crate::models::{
    CategoryBreakdown, CategoryRow, ChartDataset, DailyRow, HeatmapData, HeatmapRow, LineData,
    MonthlyRow, PieData, ProductBreakdown, ProductRow, StoreTotalsRow,
};
use std::collections::BTreeMap;

/// The three fixed store identities, in chart order.
pub const STORE_NAMES: [&str; 3] = ["Astoria", "Lower Manhattan", "Hell's Kitchen"];

const SALES_COLORS: [&str; 3] = ["#FF6384", "#36A2EB", "#FFCE56"];
const QTY_COLORS: [&str; 3] = ["#27ae60", "#9b59b6", "#f39c12"];

const MONTH_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const WEEK_LABELS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];

/// Operating-hours window for the heatmap, inclusive.
pub const OPEN_HOUR: i64 = 6;
pub const CLOSE_HOUR: i64 = 20;

const UNKNOWN_STORE: &str = "Unknown";
const UNKNOWN_PRODUCT: &str = "Unknown";
const UNCATEGORIZED: &str = "Uncategorized";

/// An aggregate query result that keeps "no rows matched" (`None`) distinct
/// from a true zero, even though both serialize as 0 on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate(Option<f64>);

impl Aggregate {
    pub fn or_zero(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    pub fn has_rows(self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<f64>> for Aggregate {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

/// Share of `part` in `whole` as a percentage; a missing or zero denominator
/// yields 0 rather than a division fault.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Week-of-month bucket index for a day of month: days 1-7 map to 0, 8-14 to
/// 1, 15-21 to 2, and everything from 22 on to 3.
pub fn week_bucket(day_of_month: u32) -> usize {
    match day_of_month {
        1..=7 => 0,
        8..=14 => 1,
        15..=21 => 2,
        _ => 3,
    }
}

pub fn build_pie(rows: Vec<StoreTotalsRow>) -> PieData {
    let mut pie = PieData::default();
    for row in rows {
        pie.labels
            .push(row.store_location.unwrap_or_else(|| UNKNOWN_STORE.to_string()));
        pie.sales.push(row.total_sales.unwrap_or(0.0));
        pie.qty.push(row.total_qty.unwrap_or(0));
    }
    pie
}

pub fn build_heatmap(rows: &[HeatmapRow]) -> HeatmapData {
    let mut matrix = BTreeMap::new();
    let mut max_transactions = 0;
    for row in rows {
        let (Some(dow), Some(hour)) = (row.day_of_week, row.hour_of_day) else {
            continue;
        };
        matrix.insert(format!("{dow}:{hour}"), row.total_transactions);
        max_transactions = max_transactions.max(row.total_transactions);
    }
    HeatmapData {
        transaction_matrix: matrix,
        max_transactions,
    }
}

pub fn build_monthly_series(rows: &[MonthlyRow]) -> LineData {
    let points = rows.iter().filter_map(|row| {
        let month = row.month?;
        if !(1..=MONTH_LABELS.len() as i64).contains(&month) {
            return None;
        }
        Some((
            (month - 1) as usize,
            row.store_location.as_deref()?,
            row.sales.unwrap_or(0.0),
            row.qty.unwrap_or(0) as f64,
        ))
    });
    assemble_series(&MONTH_LABELS, points)
}

pub fn build_weekly_series(rows: &[DailyRow]) -> LineData {
    let points = rows.iter().filter_map(|row| {
        let day = row.day_of_month?;
        if !(1..=31).contains(&day) {
            return None;
        }
        Some((
            week_bucket(day as u32),
            row.store_location.as_deref()?,
            row.sales.unwrap_or(0.0),
            row.qty.unwrap_or(0) as f64,
        ))
    });
    assemble_series(&WEEK_LABELS, points)
}

/// Folds (bucket, store, sales, qty) points into fixed-size series for the
/// three fixed stores. Stores outside the fixed list are dropped; buckets
/// without data stay zero. Weekly buckets accumulate because several days
/// share one bucket.
fn assemble_series<'a>(
    labels: &[&str],
    points: impl Iterator<Item = (usize, &'a str, f64, f64)>,
) -> LineData {
    let buckets = labels.len();
    let mut sales = vec![vec![0.0; buckets]; STORE_NAMES.len()];
    let mut qty = vec![vec![0.0; buckets]; STORE_NAMES.len()];

    for (bucket, store, sale, quantity) in points {
        if bucket >= buckets {
            continue;
        }
        if let Some(idx) = STORE_NAMES.iter().position(|name| *name == store) {
            sales[idx][bucket] += sale;
            qty[idx][bucket] += quantity;
        }
    }

    LineData {
        dates: labels.iter().map(|label| label.to_string()).collect(),
        sales_datasets: datasets(sales, &SALES_COLORS),
        qty_datasets: datasets(qty, &QTY_COLORS),
    }
}

fn datasets(series: Vec<Vec<f64>>, colors: &[&str; 3]) -> Vec<ChartDataset> {
    STORE_NAMES
        .iter()
        .zip(series)
        .zip(colors)
        .map(|((name, data), color)| ChartDataset {
            label: name.to_string(),
            data,
            border_color: color.to_string(),
        })
        .collect()
}

/// Builds the drill-down table. Each category reports its share of the grand
/// total across all categories, while each product under it reports its share
/// of that category's own total. The asymmetry is intentional.
pub fn build_table(cat_rows: Vec<CategoryRow>, prod_rows: Vec<ProductRow>) -> Vec<CategoryBreakdown> {
    let mut products_by_cat: BTreeMap<String, Vec<ProductRow>> = BTreeMap::new();
    for row in prod_rows {
        let category = row
            .product_category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        products_by_cat.entry(category).or_default().push(row);
    }

    let grand_sales: f64 = cat_rows.iter().map(|r| r.total_sales.unwrap_or(0.0)).sum();
    let grand_qty: f64 = cat_rows
        .iter()
        .map(|r| r.total_qty.unwrap_or(0) as f64)
        .sum();

    let mut table = Vec::with_capacity(cat_rows.len());
    for row in cat_rows {
        let category = row
            .product_category
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        let cat_sales = row.total_sales.unwrap_or(0.0);
        let cat_qty = row.total_qty.unwrap_or(0);

        let products = products_by_cat
            .remove(&category)
            .unwrap_or_default()
            .into_iter()
            .map(|p| {
                let sales = p.total_sales.unwrap_or(0.0);
                let qty = p.total_qty.unwrap_or(0);
                ProductBreakdown {
                    name: p.product_type.unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
                    sales,
                    percent_sales: percent_of(sales, cat_sales),
                    avg_price: p.avg_price.unwrap_or(0.0),
                    qty,
                    percent_qty: percent_of(qty as f64, cat_qty as f64),
                }
            })
            .collect();

        table.push(CategoryBreakdown {
            category,
            sales: cat_sales,
            percent_sales: percent_of(cat_sales, grand_sales),
            avg_price: row.avg_price.unwrap_or(0.0),
            qty: cat_qty,
            percent_qty: percent_of(cat_qty as f64, grand_qty),
            products,
        });
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: Option<&str>, qty: i64, price: f64, sales: f64) -> CategoryRow {
        CategoryRow {
            product_category: name.map(str::to_string),
            total_qty: Some(qty),
            avg_price: Some(price),
            total_sales: Some(sales),
        }
    }

    fn prod(cat: Option<&str>, name: Option<&str>, qty: i64, sales: f64) -> ProductRow {
        ProductRow {
            product_category: cat.map(str::to_string),
            product_type: name.map(str::to_string),
            total_qty: Some(qty),
            avg_price: Some(1.0),
            total_sales: Some(sales),
        }
    }

    #[test]
    fn week_bucket_boundaries() {
        assert_eq!(week_bucket(1), 0);
        assert_eq!(week_bucket(7), 0);
        assert_eq!(week_bucket(8), 1);
        assert_eq!(week_bucket(14), 1);
        assert_eq!(week_bucket(15), 2);
        assert_eq!(week_bucket(21), 2);
        assert_eq!(week_bucket(22), 3);
        assert_eq!(week_bucket(31), 3);
    }

    #[test]
    fn percent_of_zero_denominator_is_zero() {
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
        assert_eq!(percent_of(25.0, 100.0), 25.0);
    }

    #[test]
    fn aggregate_distinguishes_missing_from_zero() {
        let missing = Aggregate::from(None);
        let zero = Aggregate::from(Some(0.0));
        assert!(!missing.has_rows());
        assert!(zero.has_rows());
        assert_eq!(missing.or_zero(), 0.0);
        assert_eq!(zero.or_zero(), 0.0);
    }

    #[test]
    fn pie_renders_placeholder_for_missing_store() {
        let pie = build_pie(vec![StoreTotalsRow {
            store_location: None,
            total_sales: None,
            total_qty: None,
        }]);
        assert_eq!(pie.labels, vec!["Unknown"]);
        assert_eq!(pie.sales, vec![0.0]);
        assert_eq!(pie.qty, vec![0]);
    }

    #[test]
    fn monthly_series_has_fixed_shape() {
        let rows = vec![
            MonthlyRow {
                month: Some(2),
                store_location: Some("Astoria".to_string()),
                sales: Some(120.0),
                qty: Some(40),
            },
            // Outside the six-month window.
            MonthlyRow {
                month: Some(9),
                store_location: Some("Astoria".to_string()),
                sales: Some(999.0),
                qty: Some(1),
            },
            // Not one of the fixed stores.
            MonthlyRow {
                month: Some(1),
                store_location: Some("Queens".to_string()),
                sales: Some(50.0),
                qty: Some(5),
            },
        ];
        let line = build_monthly_series(&rows);
        assert_eq!(line.dates.len(), 6);
        assert_eq!(line.sales_datasets.len(), 3);
        let astoria = &line.sales_datasets[0];
        assert_eq!(astoria.label, "Astoria");
        assert_eq!(astoria.data, vec![0.0, 120.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(line.sales_datasets.iter().all(|ds| ds.data.len() == 6));
        assert!(line.qty_datasets.iter().all(|ds| ds.data.len() == 6));
    }

    #[test]
    fn weekly_series_accumulates_days_within_a_bucket() {
        let rows = vec![
            DailyRow {
                day_of_month: Some(8),
                store_location: Some("Astoria".to_string()),
                sales: Some(10.0),
                qty: Some(2),
            },
            DailyRow {
                day_of_month: Some(9),
                store_location: Some("Astoria".to_string()),
                sales: Some(5.0),
                qty: Some(1),
            },
            DailyRow {
                day_of_month: Some(31),
                store_location: Some("Hell's Kitchen".to_string()),
                sales: Some(7.0),
                qty: Some(1),
            },
        ];
        let line = build_weekly_series(&rows);
        assert_eq!(line.dates, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(line.sales_datasets[0].data, vec![0.0, 15.0, 0.0, 0.0]);
        assert_eq!(line.sales_datasets[2].data, vec![0.0, 0.0, 0.0, 7.0]);
        assert_eq!(line.qty_datasets[0].data, vec![0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn heatmap_tracks_max_and_skips_null_cells() {
        let rows = vec![
            HeatmapRow {
                day_of_week: Some(0),
                hour_of_day: Some(8),
                total_transactions: 4,
            },
            HeatmapRow {
                day_of_week: Some(3),
                hour_of_day: Some(12),
                total_transactions: 9,
            },
            HeatmapRow {
                day_of_week: None,
                hour_of_day: Some(10),
                total_transactions: 100,
            },
        ];
        let heatmap = build_heatmap(&rows);
        assert_eq!(heatmap.transaction_matrix.get("0:8"), Some(&4));
        assert_eq!(heatmap.transaction_matrix.get("3:12"), Some(&9));
        assert_eq!(heatmap.transaction_matrix.len(), 2);
        assert_eq!(heatmap.max_transactions, 9);
    }

    #[test]
    fn table_percentages_use_global_base_for_parents_and_local_for_children() {
        let cats = vec![
            cat(Some("Coffee"), 30, 4.0, 300.0),
            cat(Some("Tea"), 10, 5.0, 100.0),
        ];
        let prods = vec![
            prod(Some("Coffee"), Some("Latte"), 20, 200.0),
            prod(Some("Coffee"), Some("Espresso"), 10, 100.0),
            prod(Some("Tea"), Some("Chai"), 10, 100.0),
        ];
        let table = build_table(cats, prods);

        assert_eq!(table.len(), 2);
        let coffee = &table[0];
        assert_eq!(coffee.category, "Coffee");
        assert!((coffee.percent_sales - 75.0).abs() < 1e-9);
        assert!((coffee.percent_qty - 75.0).abs() < 1e-9);

        // Children share out of the category, not the grand total.
        assert!((coffee.products[0].percent_sales - (200.0 / 300.0 * 100.0)).abs() < 1e-9);
        assert!((coffee.products[1].percent_sales - (100.0 / 300.0 * 100.0)).abs() < 1e-9);
        let child_sum: f64 = coffee.products.iter().map(|p| p.percent_sales).sum();
        assert!((child_sum - 100.0).abs() < 1e-9);

        let parent_sum: f64 = table.iter().map(|c| c.percent_sales).sum();
        assert!((parent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn table_handles_missing_labels_and_zero_denominators() {
        let cats = vec![cat(None, 0, 0.0, 0.0)];
        let prods = vec![prod(None, None, 0, 0.0)];
        let table = build_table(cats, prods);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].category, "Uncategorized");
        assert_eq!(table[0].percent_sales, 0.0);
        assert_eq!(table[0].percent_qty, 0.0);
        // The uncategorized child still attaches to its parent row.
        assert_eq!(table[0].products.len(), 1);
        assert_eq!(table[0].products[0].name, "Unknown");
        assert_eq!(table[0].products[0].percent_sales, 0.0);
    }

    #[test]
    fn empty_rollup_produces_empty_table() {
        let table = build_table(Vec::new(), Vec::new());
        assert!(table.is_empty());
    }
}
