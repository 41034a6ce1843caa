//! Database connection management

use std::str::FromStr;

use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions, query};
use thiserror::Error;

use crate::domain::workspaces::records::WorkspaceUuid;

/// SQL used to bind the workspace to the current transaction. The binding
/// feeds both the row-level-security policies and the explicit scoping
/// predicates every domain query carries.
pub const SET_WORKSPACE_CONTEXT_SQL: &str =
    "SELECT set_config('app.current_workspace_uuid', $1, true)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction scoped to the given workspace.
    ///
    /// Every statement executed inside the transaction sees only rows of
    /// that workspace; inserts are force-stamped with it.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or binding the
    /// workspace fails.
    pub async fn begin_workspace_transaction(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_WORKSPACE_CONTEXT_SQL)
            .bind(workspace.into_uuid().to_string())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Connect to `PostgreSQL` with a bounded connection pool, for the serving
/// path where concurrency is driven by inbound requests.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Soft-delete visibility applied to list queries.
///
/// The default hides rows with a deletion timestamp; callers must opt in to
/// see them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Rows without a deletion timestamp.
    #[default]
    Active,

    /// All rows, deleted or not.
    All,

    /// Rows with a deletion timestamp only.
    DeletedOnly,
}

impl Visibility {
    /// Stable identifier bound into list statements.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::All => "all",
            Self::DeletedOnly => "deleted",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown visibility \"{0}\"")]
pub struct UnknownVisibility(String);

impl FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "all" => Ok(Self::All),
            "deleted" => Ok(Self::DeletedOnly),
            other => Err(UnknownVisibility(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_round_trips_through_str() {
        for visibility in [Visibility::Active, Visibility::All, Visibility::DeletedOnly] {
            assert_eq!(
                visibility.as_str().parse::<Visibility>().ok(),
                Some(visibility),
                "visibility identifiers must round-trip"
            );
        }
    }

    #[test]
    fn visibility_rejects_unknown_identifier() {
        assert!("everything".parse::<Visibility>().is_err());
    }

    #[test]
    fn visibility_defaults_to_active() {
        assert_eq!(Visibility::default(), Visibility::Active);
    }
}
