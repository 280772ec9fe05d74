use std::sync::LazyLock;

use log::debug;
use regex::Regex;

static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern, always compiles
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("dotted quad pattern compiles")
});

static TENANT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("tenant label pattern compiles")
});

/// Tenant slug found on the current host, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostDetection {
    /// `None` means the main origin or a bare IP address
    pub tenant: Option<String>,
    /// Bare IPv4 host: subdomain consistency checks do not apply
    pub ip_exempt: bool,
}

impl HostDetection {
    fn main_origin() -> Self {
        Self::default()
    }

    fn bare_ip() -> Self {
        Self {
            tenant: None,
            ip_exempt: true,
        }
    }

    fn tenant(slug: &str) -> Self {
        Self {
            tenant: Some(slug.to_string()),
            ip_exempt: false,
        }
    }
}

/// Determine whether `current_host` carries a tenant subdomain.
///
/// - `a.b.c` (three or more labels): first label is the tenant
/// - `acme.localhost`: first label is the tenant
/// - dotted-quad IPv4: no tenant, IP-exempt
/// - anything else, or a host equal to `base_host`: main origin
///
/// A `:port` suffix on either argument is ignored. Label comparison is
/// case-insensitive; the slug is returned as written.
pub fn detect(current_host: &str, base_host: &str) -> HostDetection {
    let hostname = strip_port(current_host);

    let detection = if DOTTED_QUAD.is_match(hostname) {
        HostDetection::bare_ip()
    } else if hostname.eq_ignore_ascii_case(strip_port(base_host)) {
        HostDetection::main_origin()
    } else {
        let labels: Vec<&str> = hostname.split('.').collect();
        match labels.as_slice() {
            [slug, last] if last.eq_ignore_ascii_case("localhost") && !slug.is_empty() => {
                HostDetection::tenant(slug)
            }
            [slug, _, _, ..] if !slug.is_empty() => HostDetection::tenant(slug),
            _ => HostDetection::main_origin(),
        }
    };

    debug!(
        "Host {hostname} resolved to tenant={:?} ip_exempt={}",
        detection.tenant, detection.ip_exempt
    );
    detection
}

/// `slug` is a single DNS label and can be prepended to a host as-is.
pub fn is_tenant_label(slug: &str) -> bool {
    TENANT_LABEL.is_match(slug)
}

/// `hostname` with the detected tenant label removed.
///
/// `wrong.example.com` becomes `example.com`; a host with no detected tenant
/// is returned unchanged so a new slug is prepended to the main host.
pub fn strip_tenant_label<'a>(hostname: &'a str, detection: &HostDetection) -> &'a str {
    match detection.tenant {
        Some(_) => hostname
            .split_once('.')
            .map(|(_, parent)| parent)
            .unwrap_or(hostname),
        None => hostname,
    }
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}
