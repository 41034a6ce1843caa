use atrium_app::{
    database,
    domain::workspaces::{
        PgWorkspacesService, WorkspacesService,
        data::NewWorkspace,
        records::WorkspaceUuid,
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateWorkspaceArgs {
    /// Workspace display name
    #[arg(long)]
    name: String,

    /// Workspace slug; derived from the name when omitted
    #[arg(long)]
    slug: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional workspace UUID; generated when omitted
    #[arg(long)]
    workspace_uuid: Option<WorkspaceUuid>,
}

impl CreateWorkspaceArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let service = PgWorkspacesService::new(pool);
        let uuid = self.workspace_uuid.unwrap_or_else(WorkspaceUuid::new);
        let slug = self.slug.unwrap_or_else(|| slugify(&self.name));

        let workspace = service
            .create_workspace(NewWorkspace {
                uuid,
                slug,
                name: self.name,
            })
            .await
            .map_err(|error| format!("failed to create workspace: {error}"))?;

        println!("workspace_uuid: {}", workspace.uuid);
        println!("workspace_slug: {}", workspace.slug);
        println!("workspace_name: {}", workspace.name);

        Ok(())
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}
