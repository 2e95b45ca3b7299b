use crate::db;
use crate::errors::AppError;
use crate::filters::FilterSet;
use crate::models::{DashboardParams, DashboardResponse, Metrics, PieData};
use crate::report;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn dashboard_data(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>, AppError> {
    let month = parse_month(&params.month)?;
    let shop = parse_shop(&params.shop);

    // Time filter drives the pie and weekly line; the strict filter adds the
    // store and drives the heatmap, table and metrics.
    let mut time_filter = FilterSet::new();
    if let Some(month) = month {
        time_filter = time_filter.month(month);
    }
    let mut strict_filter = time_filter.clone();
    if let Some(shop) = &shop {
        strict_filter = strict_filter.store(shop.clone());
    }

    let (pie_data, heatmap_data) = if shop.is_some() {
        let rows = db::heatmap_counts(&state.pool, &strict_filter).await?;
        (PieData::default(), Some(report::build_heatmap(&rows)))
    } else {
        let rows = db::store_totals(&state.pool, &time_filter).await?;
        (report::build_pie(rows), None)
    };

    let line_data = match month {
        None => report::build_monthly_series(&db::monthly_totals(&state.pool).await?),
        Some(_) => report::build_weekly_series(&db::daily_totals(&state.pool, &time_filter).await?),
    };

    let categories = db::category_totals(&state.pool, &strict_filter).await?;
    let products = db::product_totals(&state.pool, &strict_filter).await?;
    let table_data = report::build_table(categories, products);

    let total_revenue = db::total_revenue(&state.pool, &strict_filter).await?;

    Ok(Json(DashboardResponse {
        metrics: Metrics {
            total_revenue: total_revenue.or_zero(),
        },
        pie_data,
        line_data,
        heatmap_data,
        table_data,
    }))
}

fn parse_month(raw: &str) -> Result<Option<u32>, AppError> {
    if raw == "Overall" {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(month @ 1..=12) => Ok(Some(month)),
        _ => Err(AppError::bad_request("month must be 1-12 or 'Overall'")),
    }
}

fn parse_shop(raw: &str) -> Option<String> {
    if raw == "Overall" {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_overall_means_no_filter() {
        assert_eq!(parse_month("Overall").unwrap(), None);
    }

    #[test]
    fn month_in_range_parses() {
        assert_eq!(parse_month("1").unwrap(), Some(1));
        assert_eq!(parse_month("12").unwrap(), Some(12));
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
        assert!(parse_month("January").is_err());
    }

    #[test]
    fn shop_overall_means_no_filter() {
        assert_eq!(parse_shop("Overall"), None);
        assert_eq!(parse_shop("Astoria"), Some("Astoria".to_string()));
    }
}
