use crate::dates;
use crate::filters::FilterSet;
use crate::models::{CategoryRow, DailyRow, HeatmapRow, MonthlyRow, ProductRow, StoreTotalsRow};
use crate::report::Aggregate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

pub fn resolve_database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/coffee_shop.db".to_string())
}

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// One-time repair pass run at startup: rewrites day-first slash dates to the
/// canonical ISO form so every `strftime` extraction below reads the same
/// calendar. Values that parse under neither accepted format are left alone
/// and logged.
pub async fn normalize_dates(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let non_iso: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT transaction_date FROM transactions WHERE transaction_date LIKE '%/%'",
    )
    .fetch_all(pool)
    .await?;

    let mut repaired = 0u64;
    for value in non_iso {
        match dates::parse_flexible(&value) {
            Some(date) => {
                let result =
                    sqlx::query("UPDATE transactions SET transaction_date = ? WHERE transaction_date = ?")
                        .bind(dates::to_canonical(date))
                        .bind(&value)
                        .execute(pool)
                        .await?;
                repaired += result.rows_affected();
            }
            None => warn!("unrecognized transaction_date format, leaving as-is: {value}"),
        }
    }

    if repaired > 0 {
        info!("normalized {repaired} transaction dates to ISO form");
    }
    Ok(())
}

/// Revenue/quantity grouped by store. Time filter only; feeds the pie charts
/// when no specific store is selected.
pub async fn store_totals(
    pool: &SqlitePool,
    filter: &FilterSet,
) -> Result<Vec<StoreTotalsRow>, sqlx::Error> {
    let sql = format!(
        "SELECT store_location, \
                CAST(SUM(unit_price * transaction_qty) AS REAL) AS total_sales, \
                CAST(SUM(transaction_qty) AS INTEGER) AS total_qty \
         FROM transactions {} \
         GROUP BY store_location",
        filter.where_sql()
    );
    let query = sqlx::query_as::<_, StoreTotalsRow>(&sql);
    filter.bind(query).fetch_all(pool).await
}

/// Transaction counts per (day-of-week, hour-of-day) inside the operating
/// window. Strict filter; only queried when a specific store is selected.
pub async fn heatmap_counts(
    pool: &SqlitePool,
    filter: &FilterSet,
) -> Result<Vec<HeatmapRow>, sqlx::Error> {
    let sql = format!(
        "SELECT CAST(strftime('%w', transaction_date) AS INTEGER) AS day_of_week, \
                CAST(strftime('%H', transaction_time) AS INTEGER) AS hour_of_day, \
                COUNT(transaction_id) AS total_transactions \
         FROM transactions {} \
         GROUP BY day_of_week, hour_of_day \
         HAVING hour_of_day BETWEEN ? AND ? \
         ORDER BY day_of_week, hour_of_day",
        filter.where_sql()
    );
    let query = sqlx::query_as::<_, HeatmapRow>(&sql);
    filter
        .bind(query)
        .bind(crate::report::OPEN_HOUR)
        .bind(crate::report::CLOSE_HOUR)
        .fetch_all(pool)
        .await
}

/// Revenue/quantity per (calendar month, store) over the whole dataset. The
/// six-month view is deliberately unfiltered; it is only used when no month
/// is selected.
pub async fn monthly_totals(pool: &SqlitePool) -> Result<Vec<MonthlyRow>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyRow>(
        "SELECT CAST(strftime('%m', transaction_date) AS INTEGER) AS month, \
                store_location, \
                CAST(SUM(unit_price * transaction_qty) AS REAL) AS sales, \
                CAST(SUM(transaction_qty) AS INTEGER) AS qty \
         FROM transactions \
         GROUP BY month, store_location \
         ORDER BY month",
    )
    .fetch_all(pool)
    .await
}

/// Revenue/quantity per (day-of-month, store) under the time filter; the
/// caller folds days into week-of-month buckets.
pub async fn daily_totals(
    pool: &SqlitePool,
    filter: &FilterSet,
) -> Result<Vec<DailyRow>, sqlx::Error> {
    let sql = format!(
        "SELECT CAST(strftime('%d', transaction_date) AS INTEGER) AS day_of_month, \
                store_location, \
                CAST(SUM(unit_price * transaction_qty) AS REAL) AS sales, \
                CAST(SUM(transaction_qty) AS INTEGER) AS qty \
         FROM transactions {} \
         GROUP BY day_of_month, store_location \
         ORDER BY day_of_month",
        filter.where_sql()
    );
    let query = sqlx::query_as::<_, DailyRow>(&sql);
    filter.bind(query).fetch_all(pool).await
}

/// Parent rollup rows grouped by category, highest revenue first.
pub async fn category_totals(
    pool: &SqlitePool,
    filter: &FilterSet,
) -> Result<Vec<CategoryRow>, sqlx::Error> {
    let sql = format!(
        "SELECT product_category, \
                CAST(SUM(transaction_qty) AS INTEGER) AS total_qty, \
                CAST(AVG(unit_price) AS REAL) AS avg_price, \
                CAST(SUM(unit_price * transaction_qty) AS REAL) AS total_sales \
         FROM transactions {} \
         GROUP BY product_category \
         ORDER BY total_sales DESC",
        filter.where_sql()
    );
    let query = sqlx::query_as::<_, CategoryRow>(&sql);
    filter.bind(query).fetch_all(pool).await
}

/// Child rollup rows grouped by (category, product type), highest revenue
/// first.
pub async fn product_totals(
    pool: &SqlitePool,
    filter: &FilterSet,
) -> Result<Vec<ProductRow>, sqlx::Error> {
    let sql = format!(
        "SELECT product_category, product_type, \
                CAST(SUM(transaction_qty) AS INTEGER) AS total_qty, \
                CAST(AVG(unit_price) AS REAL) AS avg_price, \
                CAST(SUM(unit_price * transaction_qty) AS REAL) AS total_sales \
         FROM transactions {} \
         GROUP BY product_category, product_type \
         ORDER BY total_sales DESC",
        filter.where_sql()
    );
    let query = sqlx::query_as::<_, ProductRow>(&sql);
    filter.bind(query).fetch_all(pool).await
}

/// Scalar total revenue under the strict filter.
pub async fn total_revenue(
    pool: &SqlitePool,
    filter: &FilterSet,
) -> Result<Aggregate, sqlx::Error> {
    let sql = format!(
        "SELECT CAST(SUM(unit_price * transaction_qty) AS REAL) FROM transactions {}",
        filter.where_sql()
    );
    let query = sqlx::query_scalar::<_, Option<f64>>(&sql);
    let value = filter.bind_scalar(query).fetch_one(pool).await?;
    Ok(Aggregate::from(value))
}
