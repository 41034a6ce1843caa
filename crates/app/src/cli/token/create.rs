use atrium_app::{auth::PgAuthService, database, domain::users::records::UserUuid};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// User the token authenticates as
    #[arg(long)]
    user_uuid: UserUuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl CreateTokenArgs {
    pub(crate) async fn run(self) -> Result<(), String> {
        let pool = database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let issued = PgAuthService::new(pool)
            .issue_api_token(self.user_uuid)
            .await
            .map_err(|error| format!("failed to issue token: {error}"))?;

        println!("token_uuid: {}", issued.metadata.uuid);
        println!("api_token: {}", issued.token);
        println!("store this token now; it is only shown once");

        Ok(())
    }
}
