use crate::Client;
use crate::error::Result as CliResult;

use rx_config::Config;
use rx_session::{
    AuthHeaders, FileSessionStore, PageLocation, RecordingNavigator, SessionShell, SessionStore,
    claims_reader, keys,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use log::info;
use serde_json::{Value, json};

/// Config plus the directory it was loaded from; resolves the session file.
pub struct SessionContext {
    config: Config,
    config_dir: PathBuf,
}

impl SessionContext {
    pub fn new(config: Config, config_dir: &Path) -> Self {
        Self {
            config,
            config_dir: config_dir.to_path_buf(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn open_store(&self) -> CliResult<FileSessionStore> {
        let path = self.config.session_store_path(&self.config_dir);
        Ok(FileSessionStore::open(path)?)
    }

    pub fn client(&self) -> CliResult<Client> {
        let store = self.open_store()?;
        let client = Client::with_timeout(
            &self.config.api.base_url,
            &self.config.api.login_path,
            Duration::from_secs(self.config.api.timeout_secs),
        )?;
        Ok(client.with_session(AuthHeaders::from_store(&store)))
    }
}

/// Run one page load for `url` through the guard and report the outcome.
pub fn resolve(ctx: &SessionContext, url: &str) -> CliResult<Value> {
    let location = PageLocation::parse(url)?;
    let guard = ctx.config().app.guard()?;
    let store = ctx.open_store()?;

    let mut shell = SessionShell::new(guard, store, RecordingNavigator::new(location.as_str()));
    let decision = shell.on_load(&location);
    let route = (decision.is_allowed() && shell.credential().is_none())
        .then(|| ctx.config().app.login_path.clone());

    Ok(json!({
        "decision": decision,
        "state": shell.state(),
        "tenant": shell.tenant(),
        "superadmin": shell.is_superadmin(),
        "final_url": shell.navigator().current_url(),
        "navigations": shell.navigator().navigations(),
        "route": route,
    }))
}

/// Login exchange; on success the credential is persisted.
pub async fn login(
    ctx: &SessionContext,
    username: &str,
    password: &str,
    tenant_id: Option<&str>,
) -> CliResult<Value> {
    let client = ctx.client()?;
    let response = client.login(username, password, tenant_id).await?;

    let guard = ctx.config().app.guard()?;
    let store = ctx.open_store()?;
    let mut shell = SessionShell::new(guard, store, RecordingNavigator::default());
    shell.sign_in(&response.access_token, tenant_id)?;

    info!(
        "Logged in as {username} ({})",
        tenant_id.unwrap_or("no tenant")
    );
    Ok(json!({
        "logged_in": true,
        "username": username,
        "tenant_id": tenant_id,
    }))
}

pub fn logout(ctx: &SessionContext) -> CliResult<Value> {
    let mut store = ctx.open_store()?;
    store.clear()?;
    info!("Session cleared");
    Ok(json!({ "logged_in": false }))
}

/// Unverified view of the stored credential.
pub fn status(ctx: &SessionContext) -> CliResult<Value> {
    let store = ctx.open_store()?;

    let Some(token) = store.get(keys::TOKEN) else {
        return Ok(json!({ "logged_in": false }));
    };

    let remembered_tenant = store.get(keys::TENANT_ID);
    Ok(match claims_reader::read(&token) {
        Ok(claims) => json!({
            "logged_in": true,
            "readable": true,
            "tenant_id": remembered_tenant,
            "claims": claims,
            "expired": claims.is_expired(Utc::now()),
        }),
        Err(e) => json!({
            "logged_in": true,
            "readable": false,
            "tenant_id": remembered_tenant,
            "error": e.to_string(),
        }),
    })
}
