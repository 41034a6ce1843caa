//! Leads Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::Visibility,
    domain::{
        leads::{
            data::{LeadUpdate, NewLead},
            records::{LeadRecord, LeadStatus, LeadUuid},
        },
        workspaces::records::WorkspaceUuid,
    },
};

const LIST_LEADS_SQL: &str = include_str!("sql/list_leads.sql");
const GET_LEAD_SQL: &str = include_str!("sql/get_lead.sql");
const CREATE_LEAD_SQL: &str = include_str!("sql/create_lead.sql");
const UPDATE_LEAD_SQL: &str = include_str!("sql/update_lead.sql");
const DELETE_LEAD_SQL: &str = include_str!("sql/delete_lead.sql");
const RESTORE_LEAD_SQL: &str = include_str!("sql/restore_lead.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgLeadsRepository;

impl PgLeadsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_leads(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        visibility: Visibility,
    ) -> Result<Vec<LeadRecord>, sqlx::Error> {
        query_as::<Postgres, LeadRecord>(LIST_LEADS_SQL)
            .bind(visibility.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_lead(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        lead: LeadUuid,
    ) -> Result<LeadRecord, sqlx::Error> {
        query_as::<Postgres, LeadRecord>(GET_LEAD_SQL)
            .bind(lead.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_lead(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        lead: NewLead,
    ) -> Result<LeadRecord, sqlx::Error> {
        query_as::<Postgres, LeadRecord>(CREATE_LEAD_SQL)
            .bind(lead.uuid.into_uuid())
            .bind(lead.name)
            .bind(lead.email)
            .bind(lead.phone)
            .bind(lead.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_lead(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        lead: LeadUuid,
        update: LeadUpdate,
    ) -> Result<LeadRecord, sqlx::Error> {
        query_as::<Postgres, LeadRecord>(UPDATE_LEAD_SQL)
            .bind(lead.into_uuid())
            .bind(update.name)
            .bind(update.email)
            .bind(update.phone)
            .bind(update.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn soft_delete_lead(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        lead: LeadUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LEAD_SQL)
            .bind(lead.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn restore_lead(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        lead: LeadUuid,
    ) -> Result<Option<LeadRecord>, sqlx::Error> {
        query_as::<Postgres, LeadRecord>(RESTORE_LEAD_SQL)
            .bind(lead.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for LeadRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<LeadStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: LeadUuid::from_uuid(row.try_get("uuid")?),
            workspace_uuid: WorkspaceUuid::from_uuid(row.try_get("workspace_uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
