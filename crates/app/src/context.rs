//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    audit::{AuditService, PgAuditService},
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        investments::{InvestmentsService, PgInvestmentsService},
        leads::{LeadsService, PgLeadsService},
        notes::{NotesService, PgNotesService},
        workspaces::{PgWorkspacesService, WorkspacesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub workspaces: Arc<dyn WorkspacesService>,
    pub leads: Arc<dyn LeadsService>,
    pub notes: Arc<dyn NotesService>,
    pub investments: Arc<dyn InvestmentsService>,
    pub audit: Arc<dyn AuditService>,
}

impl AppContext {
    /// Build application context from a database URL, with the pool bounded
    /// to the given number of connections.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect_pool(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool.clone())),
            workspaces: Arc::new(PgWorkspacesService::new(pool)),
            leads: Arc::new(PgLeadsService::new(db.clone())),
            notes: Arc::new(PgNotesService::new(db.clone())),
            investments: Arc::new(PgInvestmentsService::new(db.clone())),
            audit: Arc::new(PgAuditService::new(db)),
        })
    }
}
