//! Investments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::Visibility,
    domain::{
        investments::{
            data::{InvestmentUpdate, NewInvestment},
            records::{InvestmentRecord, InvestmentUuid},
        },
        workspaces::records::WorkspaceUuid,
    },
};

const LIST_INVESTMENTS_SQL: &str = include_str!("sql/list_investments.sql");
const GET_INVESTMENT_SQL: &str = include_str!("sql/get_investment.sql");
const CREATE_INVESTMENT_SQL: &str = include_str!("sql/create_investment.sql");
const UPDATE_INVESTMENT_SQL: &str = include_str!("sql/update_investment.sql");
const DELETE_INVESTMENT_SQL: &str = include_str!("sql/delete_investment.sql");
const RESTORE_INVESTMENT_SQL: &str = include_str!("sql/restore_investment.sql");

fn to_db_amount(column: &str, value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn from_db_amount(column: &str, value: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInvestmentsRepository;

impl PgInvestmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_investments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        visibility: Visibility,
    ) -> Result<Vec<InvestmentRecord>, sqlx::Error> {
        query_as::<Postgres, InvestmentRecord>(LIST_INVESTMENTS_SQL)
            .bind(visibility.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_investment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        investment: InvestmentUuid,
    ) -> Result<InvestmentRecord, sqlx::Error> {
        query_as::<Postgres, InvestmentRecord>(GET_INVESTMENT_SQL)
            .bind(investment.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_investment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        investment: NewInvestment,
    ) -> Result<InvestmentRecord, sqlx::Error> {
        let quantity = to_db_amount("quantity", investment.quantity)?;
        let invested_cents = to_db_amount("invested_cents", investment.invested_cents)?;

        query_as::<Postgres, InvestmentRecord>(CREATE_INVESTMENT_SQL)
            .bind(investment.uuid.into_uuid())
            .bind(investment.ticker)
            .bind(quantity)
            .bind(invested_cents)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_investment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        investment: InvestmentUuid,
        update: InvestmentUpdate,
    ) -> Result<InvestmentRecord, sqlx::Error> {
        let quantity = to_db_amount("quantity", update.quantity)?;
        let invested_cents = to_db_amount("invested_cents", update.invested_cents)?;

        query_as::<Postgres, InvestmentRecord>(UPDATE_INVESTMENT_SQL)
            .bind(investment.into_uuid())
            .bind(update.ticker)
            .bind(quantity)
            .bind(invested_cents)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn soft_delete_investment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        investment: InvestmentUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_INVESTMENT_SQL)
            .bind(investment.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn restore_investment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        investment: InvestmentUuid,
    ) -> Result<Option<InvestmentRecord>, sqlx::Error> {
        query_as::<Postgres, InvestmentRecord>(RESTORE_INVESTMENT_SQL)
            .bind(investment.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for InvestmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: InvestmentUuid::from_uuid(row.try_get("uuid")?),
            workspace_uuid: WorkspaceUuid::from_uuid(row.try_get("workspace_uuid")?),
            ticker: row.try_get("ticker")?,
            quantity: from_db_amount("quantity", row.try_get("quantity")?)?,
            invested_cents: from_db_amount("invested_cents", row.try_get("invested_cents")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
