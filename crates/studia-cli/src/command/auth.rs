//! Session commands.

use anyhow::bail;
use clap::Args;
use studia_admin::AdminClient;

use crate::output;

/// Credentials for signing in.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Administrator email address.
    #[arg(long, env = "STUDIA_EMAIL")]
    pub email: String,

    /// Administrator password.
    #[arg(long, env = "STUDIA_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Signs in and persists the session token.
pub async fn login(client: &AdminClient, args: LoginArgs) -> anyhow::Result<()> {
    let response = client.session().login(args.email, args.password).await;
    output::render(response)
}

/// Signs out. Local credentials are cleared even when the server call
/// fails, so a dead server cannot keep the console signed in.
pub async fn logout(client: &AdminClient) -> anyhow::Result<()> {
    output::render(client.session().logout().await)
}

/// Shows the administrator restored from persisted credentials.
///
/// Runs entirely locally; an expired or partial credential record reads
/// as signed out.
pub fn whoami(client: &AdminClient) -> anyhow::Result<()> {
    if !client.session().check_auth() {
        bail!("Not signed in");
    }

    let state = client.session().state();
    if let Some(user) = &state.user {
        println!("{}", serde_json::to_string_pretty(user)?);
    }

    Ok(())
}
