use atrium_app::{
    database,
    domain::workspaces::{PgWorkspacesService, WorkspacesService, records::WorkspaceUuid},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct DeactivateWorkspaceArgs {
    /// Workspace UUID to deactivate
    #[arg(long)]
    workspace_uuid: WorkspaceUuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DeactivateWorkspaceArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let workspace = PgWorkspacesService::new(pool)
            .deactivate_workspace(self.workspace_uuid)
            .await
            .map_err(|error| format!("failed to deactivate workspace: {error}"))?;

        println!("workspace_uuid: {}", workspace.uuid);
        println!("workspace_active: {}", workspace.active);

        Ok(())
    }
}
