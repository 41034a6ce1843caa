use atrium_app::{
    database,
    domain::{
        users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
        workspaces::records::WorkspaceUuid,
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Login email
    #[arg(long)]
    email: String,

    /// Workspace to attach the user to
    #[arg(long)]
    workspace_uuid: Option<WorkspaceUuid>,

    /// Grant elevated privileges
    #[arg(long)]
    superuser: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl CreateUserArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let user = PgUsersService::new(pool)
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: self.email,
                workspace_uuid: self.workspace_uuid,
                superuser: self.superuser,
            })
            .await
            .map_err(|error| format!("failed to create user: {error}"))?;

        println!("user_uuid: {}", user.uuid);
        println!("user_email: {}", user.email);
        println!("user_superuser: {}", user.superuser);

        Ok(())
    }
}
