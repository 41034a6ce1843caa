use atrium_app::{auth::PgAuthService, database};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    /// Token UUID to revoke
    #[arg(long)]
    token_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl RevokeTokenArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let revoked = PgAuthService::new(pool)
            .revoke_api_token(self.token_uuid)
            .await
            .map_err(|error| format!("failed to revoke token: {error}"))?;

        if revoked {
            println!("token revoked");
        } else {
            println!("token was already revoked or does not exist");
        }

        Ok(())
    }
}
