//! Notes service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    actor::Actor,
    audit::PgAuditRepository,
    database::{Db, Visibility},
    domain::{
        notes::{
            data::{NewNote, NoteUpdate},
            errors::NotesServiceError,
            records::{NoteRecord, NoteUuid},
            repository::PgNotesRepository,
        },
        workspaces::records::WorkspaceUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgNotesService {
    db: Db,
    repository: PgNotesRepository,
    audit: PgAuditRepository,
}

impl PgNotesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgNotesRepository::new(),
            audit: PgAuditRepository::new(),
        }
    }
}

#[async_trait]
impl NotesService for PgNotesService {
    async fn list_notes(
        &self,
        workspace: WorkspaceUuid,
        visibility: Visibility,
    ) -> Result<Vec<NoteRecord>, NotesServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let notes = self.repository.list_notes(&mut tx, visibility).await?;

        tx.commit().await?;

        Ok(notes)
    }

    async fn get_note(
        &self,
        workspace: WorkspaceUuid,
        note: NoteUuid,
    ) -> Result<NoteRecord, NotesServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let note = self.repository.get_note(&mut tx, note).await?;

        tx.commit().await?;

        Ok(note)
    }

    async fn create_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NewNote,
    ) -> Result<NoteRecord, NotesServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let created = self.repository.create_note(&mut tx, note).await?;

        self.audit.record_created(&mut tx, &actor, &created).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NoteUuid,
        update: NoteUpdate,
    ) -> Result<NoteRecord, NotesServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let before = self.repository.get_note(&mut tx, note).await?;
        let updated = self.repository.update_note(&mut tx, note, update).await?;

        self.audit
            .record_updated(&mut tx, &actor, &before, &updated)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NoteUuid,
    ) -> Result<(), NotesServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let before = self.repository.get_note(&mut tx, note).await?;
        let rows_affected = self.repository.soft_delete_note(&mut tx, note).await?;

        if rows_affected == 0 {
            return Err(NotesServiceError::NotFound);
        }

        self.audit.record_deleted(&mut tx, &actor, &before).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn restore_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NoteUuid,
    ) -> Result<NoteRecord, NotesServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let restored = self
            .repository
            .restore_note(&mut tx, note)
            .await?
            .ok_or(NotesServiceError::NotFound)?;

        self.audit
            .record_restored(&mut tx, &actor, &restored)
            .await?;

        tx.commit().await?;

        Ok(restored)
    }
}

#[automock]
#[async_trait]
pub trait NotesService: Send + Sync {
    /// Retrieves the workspace's notes under the given visibility.
    async fn list_notes(
        &self,
        workspace: WorkspaceUuid,
        visibility: Visibility,
    ) -> Result<Vec<NoteRecord>, NotesServiceError>;

    /// Retrieves a single active note.
    async fn get_note(
        &self,
        workspace: WorkspaceUuid,
        note: NoteUuid,
    ) -> Result<NoteRecord, NotesServiceError>;

    /// Creates a new note in the workspace.
    async fn create_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NewNote,
    ) -> Result<NoteRecord, NotesServiceError>;

    /// Replaces the mutable fields of a note.
    async fn update_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NoteUuid,
        update: NoteUpdate,
    ) -> Result<NoteRecord, NotesServiceError>;

    /// Soft-deletes a note.
    async fn delete_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NoteUuid,
    ) -> Result<(), NotesServiceError>;

    /// Clears a note's deletion timestamp.
    async fn restore_note(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        note: NoteUuid,
    ) -> Result<NoteRecord, NotesServiceError>;
}
