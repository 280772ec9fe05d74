use crate::{
    AuthHeaders, Decision, GuardState, Navigator, PageLocation, Result as SessionResult,
    SessionStore, TOKEN_QUERY_PARAM, TenantConsistencyGuard, keys,
};

use log::{debug, info, warn};

/// Application-shell side of the guard: owns the store and navigator,
/// applies each decision, and keeps the in-memory session flags.
pub struct SessionShell<S: SessionStore, N: Navigator> {
    guard: TenantConsistencyGuard,
    store: S,
    navigator: N,
    credential: Option<String>,
    tenant: Option<String>,
    superadmin: bool,
    state: GuardState,
    last_decision: Option<Decision>,
}

impl<S: SessionStore, N: Navigator> SessionShell<S, N> {
    pub fn new(guard: TenantConsistencyGuard, store: S, navigator: N) -> Self {
        let credential = store.get(keys::TOKEN);
        Self {
            guard,
            store,
            navigator,
            credential,
            tenant: None,
            superadmin: false,
            state: GuardState::Init,
            last_decision: None,
        }
    }

    /// One page load: hydrate from the URL, then evaluate.
    ///
    /// Both steps complete before this returns, so no caller ever observes
    /// a hydrated but unevaluated session.
    pub fn on_load(&mut self, location: &PageLocation) -> Decision {
        self.credential = self.store.get(keys::TOKEN);
        self.state = GuardState::Init;
        self.last_decision = None;

        let location = self.hydrate(location);
        self.run_cycle(&location)
    }

    /// Re-evaluate after a credential or host change within the same load.
    ///
    /// A pending redirect is terminal for the load and is returned as-is.
    pub fn evaluate(&mut self, location: &PageLocation) -> Decision {
        if self.state == GuardState::Redirecting
            && let Some(decision) = &self.last_decision
        {
            return decision.clone();
        }
        self.run_cycle(location)
    }

    /// Adopt a `token` query parameter as the active credential.
    ///
    /// Returns the location with the parameter stripped. The address bar is
    /// rewritten in place only when the parameter was present.
    pub fn hydrate(&mut self, location: &PageLocation) -> PageLocation {
        let Some(token) = location.query_param(TOKEN_QUERY_PARAM) else {
            return location.clone();
        };

        let stripped = location.without_query_param(TOKEN_QUERY_PARAM);
        if token.is_empty() {
            debug!("Ignoring empty {TOKEN_QUERY_PARAM} parameter");
        } else {
            if let Err(e) = self.store.set(keys::TOKEN, &token) {
                warn!("Failed to persist hydrated credential: {e}");
            }
            self.credential = Some(token);
            info!("Adopted credential from URL on {}", location.host());
        }

        self.navigator.replace_current_url(stripped.as_str());
        stripped
    }

    /// Login flow: persist a freshly issued credential.
    ///
    /// `tenant_id` of `None` is the superadmin login path and removes any
    /// remembered tenant.
    pub fn sign_in(&mut self, token: &str, tenant_id: Option<&str>) -> SessionResult<()> {
        self.store.set(keys::TOKEN, token)?;
        match tenant_id {
            Some(tenant) => self.store.set(keys::TENANT_ID, tenant)?,
            None => self.store.delete(keys::TENANT_ID)?,
        }

        self.credential = Some(token.to_string());
        self.tenant = tenant_id.map(String::from);
        self.state = GuardState::Init;
        self.last_decision = None;
        Ok(())
    }

    pub fn sign_out(&mut self) -> SessionResult<()> {
        self.clear_session();
        self.store.clear()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    pub fn is_superadmin(&self) -> bool {
        self.superadmin
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn guard(&self) -> &TenantConsistencyGuard {
        &self.guard
    }

    /// Headers for the active session; `None` while anonymous.
    pub fn auth_headers(&self) -> Option<AuthHeaders> {
        self.credential.as_ref().map(|token| AuthHeaders {
            token: token.clone(),
            tenant_id: self.tenant.clone(),
        })
    }

    pub fn into_parts(self) -> (S, N) {
        (self.store, self.navigator)
    }

    fn run_cycle(&mut self, location: &PageLocation) -> Decision {
        self.state = GuardState::Evaluating;
        let decision = self
            .guard
            .evaluate(self.credential.as_deref(), location, &self.store);
        self.apply(&decision);
        self.last_decision = Some(decision.clone());
        decision
    }

    fn apply(&mut self, decision: &Decision) {
        match decision {
            Decision::Allow { tenant, superadmin } => {
                self.tenant = tenant.clone();
                self.superadmin = *superadmin;
            }
            Decision::Redirect { url, .. } => {
                self.clear_session();
                self.navigator.redirect(url);
            }
            Decision::Logout { reason } => {
                info!("Forcing logout: {reason}");
                self.clear_session();
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear session store on logout: {e}");
                }
            }
        }
        self.state = decision.state();
    }

    fn clear_session(&mut self) {
        self.credential = None;
        self.tenant = None;
        self.superadmin = false;
    }
}
