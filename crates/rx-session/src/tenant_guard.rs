use crate::host_detector::{self, HostDetection};
use crate::{
    BaseOrigin, DEFAULT_DASHBOARD_PATH, Decision, PageLocation, RedirectTarget, SessionError,
    SessionStore, TOKEN_QUERY_PARAM, claims_reader, keys,
};

use log::{info, warn};
use url::form_urlencoded;

/// Logout reason for a tenant claim that cannot name a subdomain.
pub const INVALID_TENANT_CLAIM: &str = "invalid tenant claim";

/// Decides whether a credential may be used on the current origin.
///
/// Rules, evaluated in this order:
/// 1. no credential: allow, anonymous context for the detected tenant
/// 2. undecodable credential: logout
/// 3. bare IPv4 host: allow, no redirect is ever issued
/// 4. superadmin on a tenant subdomain: redirect to the main origin
/// 5. tenant claim that is not a single DNS label: logout
/// 6. tenant claim differs from the detected tenant: redirect to the
///    claimed tenant's origin
/// 7. otherwise allow
///
/// Evaluation is pure; the caller applies the returned [`Decision`].
#[derive(Debug, Clone)]
pub struct TenantConsistencyGuard {
    base: BaseOrigin,
    dashboard_path: String,
}

impl TenantConsistencyGuard {
    pub fn new(base: BaseOrigin) -> Self {
        Self {
            base,
            dashboard_path: String::from(DEFAULT_DASHBOARD_PATH),
        }
    }

    pub fn with_dashboard_path(mut self, path: impl Into<String>) -> Self {
        self.dashboard_path = path.into();
        self
    }

    pub fn base_origin(&self) -> &BaseOrigin {
        &self.base
    }

    pub fn dashboard_path(&self) -> &str {
        &self.dashboard_path
    }

    pub fn evaluate(
        &self,
        credential: Option<&str>,
        location: &PageLocation,
        store: &dyn SessionStore,
    ) -> Decision {
        let detection = host_detector::detect(location.hostname(), self.base.host());

        let Some(credential) = credential.filter(|c| !c.is_empty()) else {
            return Decision::Allow {
                tenant: detection.tenant,
                superadmin: false,
            };
        };

        let claims = match claims_reader::read(credential) {
            Ok(claims) => claims,
            Err(e) => {
                warn!("Credential on {} is unreadable: {e}", location.host());
                let reason = match e {
                    SessionError::Decode { message, .. } => message,
                    other => other.to_string(),
                };
                return Decision::Logout { reason };
            }
        };

        if detection.ip_exempt {
            return Decision::Allow {
                tenant: Self::active_tenant(detection, store),
                superadmin: claims.is_superadmin,
            };
        }

        if claims.is_superadmin && detection.tenant.is_some() {
            let url = self.main_dashboard_url(credential);
            info!(
                "Superadmin session on tenant host {}, redirecting to main origin",
                location.host()
            );
            return Decision::Redirect {
                target: RedirectTarget::Main,
                url,
            };
        }

        if !claims.is_superadmin
            && let Some(claimed) = claims.tenant_id.as_deref()
            && !host_detector::is_tenant_label(claimed)
        {
            warn!(
                "Tenant claim {claimed:?} on {} is not a host label",
                location.host()
            );
            return Decision::Logout {
                reason: String::from(INVALID_TENANT_CLAIM),
            };
        }

        if !claims.is_superadmin
            && let Some(claimed) = claims.tenant_id.as_deref()
            && !claimed.eq_ignore_ascii_case(detection.tenant.as_deref().unwrap_or_default())
        {
            let url = self.tenant_dashboard_url(location, &detection, claimed, credential);
            info!(
                "Session for tenant {claimed} on host {}, redirecting to its origin",
                location.host()
            );
            return Decision::Redirect {
                target: RedirectTarget::Tenant(claimed.to_string()),
                url,
            };
        }

        Decision::Allow {
            tenant: Self::active_tenant(detection, store),
            superadmin: claims.is_superadmin,
        }
    }

    /// Detected tenant, else the one remembered from the last login.
    fn active_tenant(detection: HostDetection, store: &dyn SessionStore) -> Option<String> {
        detection.tenant.or_else(|| store.get(keys::TENANT_ID))
    }

    fn main_dashboard_url(&self, credential: &str) -> String {
        format!(
            "{}{}",
            self.base.url_for(&self.dashboard_path),
            token_query(credential)
        )
    }

    /// `{protocol}//{slug}.{host without its tenant label}{dashboard}?token=`
    fn tenant_dashboard_url(
        &self,
        location: &PageLocation,
        detection: &HostDetection,
        slug: &str,
        credential: &str,
    ) -> String {
        let parent = host_detector::strip_tenant_label(location.hostname(), detection);
        let authority = match location.port() {
            Some(port) => format!("{parent}:{port}"),
            None => parent.to_string(),
        };

        format!(
            "{}//{}.{}{}{}",
            location.protocol(),
            slug,
            authority,
            self.dashboard_path,
            token_query(credential)
        )
    }
}

fn token_query(credential: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(credential.as_bytes()).collect();
    format!("?{TOKEN_QUERY_PARAM}={encoded}")
}
