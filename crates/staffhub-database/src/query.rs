//! Shared filtered/sorted/paged query facade.
//!
//! Each repository declares one [`EntityQuery`]: the canonical joined
//! SELECT producing its detail projection, plus the columns a free-text
//! search matches against. List, paged, and by-id reads all run that same
//! joined SELECT, so declared relations are loaded uniformly on every read
//! path.
//!
//! The paged read is a two-step execution: a COUNT over the filtered set,
//! then a windowed fetch over the filtered and ordered set. Ordering is
//! always present (the caller's resolved sort key plus an id tiebreaker),
//! so paging is stable across calls.

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;

/// The canonical read query for one entity.
pub struct EntityQuery {
    /// Entity name used in error messages.
    pub entity: &'static str,
    /// SELECT clause producing the detail projection.
    pub select: &'static str,
    /// FROM clause with all joins the projection needs.
    pub from: &'static str,
    /// Columns a search term is matched against, qualified by alias.
    pub search_columns: &'static [&'static str],
    /// Qualified primary-key column; also the ordering tiebreaker.
    pub id_column: &'static str,
}

impl EntityQuery {
    /// Execute the count + windowed fetch and package paging metadata.
    pub async fn fetch_page<T>(
        &self,
        pool: &PgPool,
        search: &SearchQuery,
        order_expr: &str,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin,
    {
        let pattern = search.like_pattern();

        let mut count_query = QueryBuilder::new(format!("SELECT COUNT(*) {}", self.from));
        if let Some(pattern) = &pattern {
            push_search(&mut count_query, self.search_columns, pattern);
        }
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to count {} rows", self.entity),
                    e,
                )
            })?;

        let mut query = self.select_builder(&pattern);
        self.push_order(&mut query, order_expr, direction);
        query.push(" LIMIT ");
        query.push_bind(page.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(page.offset() as i64);

        let items = query
            .build_query_as::<T>()
            .fetch_all(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {} page", self.entity),
                    e,
                )
            })?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Execute the filtered and ordered query without a window.
    pub async fn fetch_all<T>(
        &self,
        pool: &PgPool,
        search: &SearchQuery,
        order_expr: &str,
        direction: SortDirection,
    ) -> AppResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let pattern = search.like_pattern();
        let mut query = self.select_builder(&pattern);
        self.push_order(&mut query, order_expr, direction);

        query
            .build_query_as::<T>()
            .fetch_all(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {} rows", self.entity),
                    e,
                )
            })
    }

    /// Look up one detail row by primary key; absent ids yield `None`.
    pub async fn fetch_by_id<T>(&self, pool: &PgPool, id: Uuid) -> AppResult<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = format!(
            "{} {} WHERE {} = $1",
            self.select, self.from, self.id_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to find {} by id", self.entity),
                    e,
                )
            })
    }

    fn select_builder(&self, pattern: &Option<String>) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("{} {}", self.select, self.from));
        if let Some(pattern) = pattern {
            push_search(&mut query, self.search_columns, pattern);
        }
        query
    }

    fn push_order(
        &self,
        query: &mut QueryBuilder<'static, Postgres>,
        order_expr: &str,
        direction: SortDirection,
    ) {
        query.push(format!(
            " ORDER BY {order_expr} {}, {} ASC",
            direction.as_sql(),
            self.id_column
        ));
    }
}

/// Append `WHERE (col1 ILIKE $n OR col2 ILIKE $n ...)` for the pattern.
fn push_search(
    query: &mut QueryBuilder<'static, Postgres>,
    columns: &[&str],
    pattern: &str,
) {
    query.push(" WHERE (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            query.push(" OR ");
        }
        query.push(*column);
        query.push(" ILIKE ");
        query.push_bind(pattern.to_string());
    }
    query.push(")");
}
