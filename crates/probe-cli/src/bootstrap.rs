use anyhow::Context;
use probe_config::ProbeConfig;
use probe_store::FirestoreClient;

use crate::cli::Cli;

/// Layered config with command-line flags applied last.
pub fn load_config(cli: &Cli) -> anyhow::Result<ProbeConfig> {
    let mut config =
        ProbeConfig::load_with_dotenv().context("failed to load docprobe configuration")?;
    apply_flags(&mut config, cli);
    Ok(config)
}

fn apply_flags(config: &mut ProbeConfig, cli: &Cli) {
    if let Some(path) = &cli.env_file {
        config.env_file.clone_from(path);
    }
    if let Some(project_id) = &cli.project_id {
        config.firestore.project_id.clone_from(project_id);
    }
}

/// Load the credential, mint a token, and bind a Firestore client.
///
/// The credential is read before any network traffic, so a missing key never
/// reaches the token endpoint.
pub fn connect(config: &ProbeConfig) -> anyhow::Result<FirestoreClient> {
    let credential = config.load_credential().with_context(|| {
        format!(
            "failed to load service-account credential from {}",
            config.env_file.display()
        )
    })?;

    let http = probe_store::http::build_client().context("failed to build HTTP client")?;
    let token = probe_auth::authenticate(http.clone(), &credential)
        .context("failed to authenticate service account")?;

    tracing::debug!(
        project_id = %config.firestore.project_id,
        database = %config.firestore.database,
        "connected to firestore"
    );
    Ok(FirestoreClient::new(http, &config.firestore, token))
}
