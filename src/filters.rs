use sqlx::query::{QueryAs, QueryScalar};
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A single parameterized predicate. Values are always bound, never spliced
/// into the SQL text.
#[derive(Debug, Clone)]
enum Clause {
    Month(u32),
    Store(String),
}

impl Clause {
    fn sql(&self) -> &'static str {
        match self {
            Clause::Month(_) => "CAST(strftime('%m', transaction_date) AS INTEGER) = ?",
            Clause::Store(_) => "store_location = ?",
        }
    }
}

/// Composable filter set shared by every aggregate query.
///
/// The "time filter" is a `FilterSet` with at most a month clause; the
/// "strict filter" adds the store clause on top. `where_sql` renders the
/// clause text and `bind`/`bind_scalar` attach the values in the same order.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    clauses: Vec<Clause>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: u32) -> Self {
        self.clauses.push(Clause::Month(month));
        self
    }

    pub fn store(mut self, store: impl Into<String>) -> Self {
        self.clauses.push(Clause::Store(store.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Renders `WHERE a AND b` or an empty string when unfiltered.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            return String::new();
        }
        let parts: Vec<&str> = self.clauses.iter().map(Clause::sql).collect();
        format!("WHERE {}", parts.join(" AND "))
    }

    pub fn bind<'q, O>(
        &'q self,
        mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
        for clause in &self.clauses {
            query = match clause {
                Clause::Month(month) => query.bind(*month as i64),
                Clause::Store(store) => query.bind(store.as_str()),
            };
        }
        query
    }

    pub fn bind_scalar<'q, O>(
        &'q self,
        mut query: QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryScalar<'q, Sqlite, O, SqliteArguments<'q>> {
        for clause in &self.clauses {
            query = match clause {
                Clause::Month(month) => query.bind(*month as i64),
                Clause::Store(store) => query.bind(store.as_str()),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_renders_no_where() {
        assert_eq!(FilterSet::new().where_sql(), "");
        assert!(FilterSet::new().is_empty());
    }

    #[test]
    fn month_only_filter() {
        let filter = FilterSet::new().month(3);
        assert_eq!(
            filter.where_sql(),
            "WHERE CAST(strftime('%m', transaction_date) AS INTEGER) = ?"
        );
    }

    #[test]
    fn strict_filter_combines_clauses_in_order() {
        let filter = FilterSet::new().month(3).store("Astoria");
        assert_eq!(
            filter.where_sql(),
            "WHERE CAST(strftime('%m', transaction_date) AS INTEGER) = ? AND store_location = ?"
        );
    }

    #[test]
    fn store_values_are_bound_not_spliced() {
        let filter = FilterSet::new().store("Astoria'; DROP TABLE transactions; --");
        assert!(!filter.where_sql().contains("DROP"));
    }
}
