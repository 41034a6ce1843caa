//! Notes Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::Visibility,
    domain::{
        notes::{
            data::{NewNote, NoteUpdate},
            records::{NoteRecord, NoteUuid},
        },
        workspaces::records::WorkspaceUuid,
    },
};

const LIST_NOTES_SQL: &str = include_str!("sql/list_notes.sql");
const GET_NOTE_SQL: &str = include_str!("sql/get_note.sql");
const CREATE_NOTE_SQL: &str = include_str!("sql/create_note.sql");
const UPDATE_NOTE_SQL: &str = include_str!("sql/update_note.sql");
const DELETE_NOTE_SQL: &str = include_str!("sql/delete_note.sql");
const RESTORE_NOTE_SQL: &str = include_str!("sql/restore_note.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgNotesRepository;

impl PgNotesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_notes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        visibility: Visibility,
    ) -> Result<Vec<NoteRecord>, sqlx::Error> {
        query_as::<Postgres, NoteRecord>(LIST_NOTES_SQL)
            .bind(visibility.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_note(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        note: NoteUuid,
    ) -> Result<NoteRecord, sqlx::Error> {
        query_as::<Postgres, NoteRecord>(GET_NOTE_SQL)
            .bind(note.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_note(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        note: NewNote,
    ) -> Result<NoteRecord, sqlx::Error> {
        query_as::<Postgres, NoteRecord>(CREATE_NOTE_SQL)
            .bind(note.uuid.into_uuid())
            .bind(note.title)
            .bind(note.body)
            .bind(note.pinned)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_note(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        note: NoteUuid,
        update: NoteUpdate,
    ) -> Result<NoteRecord, sqlx::Error> {
        query_as::<Postgres, NoteRecord>(UPDATE_NOTE_SQL)
            .bind(note.into_uuid())
            .bind(update.title)
            .bind(update.body)
            .bind(update.pinned)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn soft_delete_note(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        note: NoteUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_NOTE_SQL)
            .bind(note.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn restore_note(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        note: NoteUuid,
    ) -> Result<Option<NoteRecord>, sqlx::Error> {
        query_as::<Postgres, NoteRecord>(RESTORE_NOTE_SQL)
            .bind(note.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for NoteRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: NoteUuid::from_uuid(row.try_get("uuid")?),
            workspace_uuid: WorkspaceUuid::from_uuid(row.try_get("workspace_uuid")?),
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            pinned: row.try_get("pinned")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
