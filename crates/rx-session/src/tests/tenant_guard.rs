use crate::tests::{guard, location, superadmin_token, tenant_token};
use crate::tenant_guard::INVALID_TENANT_CLAIM;
use crate::{Decision, MemorySessionStore, RedirectTarget, keys};

// =========================================================================
// Allowed
// =========================================================================

#[test]
fn given_no_credential_when_evaluated_then_allowed_with_detected_tenant() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();

    let decision = guard.evaluate(None, &location("https://acme.example.com/login"), &store);

    assert_eq!(
        decision,
        Decision::Allow {
            tenant: Some("acme".into()),
            superadmin: false
        }
    );
}

#[test]
fn given_empty_credential_when_evaluated_then_treated_as_absent() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();

    let decision = guard.evaluate(Some(""), &location("https://example.com/"), &store);

    assert!(decision.is_allowed());
}

#[test]
fn given_matching_tenant_claim_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("tenantA");

    let decision = guard.evaluate(
        Some(&token),
        &location("https://tenantA.example.com/dashboard"),
        &store,
    );

    assert!(decision.is_allowed());
}

#[test]
fn given_superadmin_on_main_origin_when_evaluated_then_allowed_as_superadmin() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = superadmin_token(None);

    let decision = guard.evaluate(Some(&token), &location("https://example.com/tenants"), &store);

    assert_eq!(
        decision,
        Decision::Allow {
            tenant: None,
            superadmin: true
        }
    );
}

#[test]
fn given_token_without_tenant_claim_on_tenant_host_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = crate::tests::token_with(serde_json::json!({ "sub": "clerk" }));

    let decision = guard.evaluate(Some(&token), &location("https://acme.example.com/"), &store);

    assert_eq!(decision.tenant(), Some("acme"));
}

#[test]
fn given_main_origin_without_detected_tenant_when_allowed_then_remembered_tenant_is_active() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::with_entries([(keys::TENANT_ID, "acme")]);
    let token = crate::tests::token_with(serde_json::json!({ "sub": "clerk" }));

    let decision = guard.evaluate(Some(&token), &location("https://example.com/"), &store);

    assert_eq!(decision.tenant(), Some("acme"));
}

#[test]
fn given_bare_ip_with_foreign_tenant_claim_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::with_entries([(keys::TENANT_ID, "tenantB")]);
    let token = tenant_token("tenantB");

    let decision = guard.evaluate(Some(&token), &location("http://192.168.0.12:8080/"), &store);

    assert_eq!(
        decision,
        Decision::Allow {
            tenant: Some("tenantB".into()),
            superadmin: false
        }
    );
}

#[test]
fn given_bare_ip_with_superadmin_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = superadmin_token(Some("acme"));

    let decision = guard.evaluate(Some(&token), &location("http://10.1.1.1/"), &store);

    assert!(decision.is_allowed());
}

#[test]
fn given_claim_in_different_case_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("ACME");

    let decision = guard.evaluate(Some(&token), &location("https://acme.example.com/"), &store);

    assert!(decision.is_allowed());
}

// =========================================================================
// Redirecting
// =========================================================================

#[test]
fn given_foreign_tenant_claim_when_evaluated_then_redirects_to_claimed_origin() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("tenantB");

    let decision = guard.evaluate(
        Some(&token),
        &location("https://tenantA.example.com/orders"),
        &store,
    );

    assert_eq!(
        decision,
        Decision::Redirect {
            target: RedirectTarget::Tenant("tenantB".into()),
            url: format!("https://tenantB.example.com/dashboard?token={token}"),
        }
    );
}

#[test]
fn given_tenant_claim_on_main_origin_when_evaluated_then_redirects_to_tenant_origin() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("acme");

    let decision = guard.evaluate(Some(&token), &location("https://example.com/"), &store);

    assert_eq!(
        decision.redirect_url(),
        Some(format!("https://acme.example.com/dashboard?token={token}").as_str())
    );
}

#[test]
fn given_superadmin_on_tenant_host_when_evaluated_then_redirects_to_main_dashboard() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = superadmin_token(None);

    let decision = guard.evaluate(Some(&token), &location("https://tenantA.example.com/"), &store);

    assert_eq!(
        decision,
        Decision::Redirect {
            target: RedirectTarget::Main,
            url: format!("https://example.com/dashboard?token={token}"),
        }
    );
}

#[test]
fn given_superadmin_with_tenant_claim_on_tenant_host_when_evaluated_then_main_wins() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = superadmin_token(Some("tenantB"));

    let decision = guard.evaluate(Some(&token), &location("https://tenantA.example.com/"), &store);

    assert!(matches!(
        decision,
        Decision::Redirect {
            target: RedirectTarget::Main,
            ..
        }
    ));
}

#[test]
fn given_local_dev_port_when_redirected_then_port_is_preserved() {
    let guard = guard("http://localhost:5173");
    let store = MemorySessionStore::new();
    let token = tenant_token("right");

    let decision = guard.evaluate(
        Some(&token),
        &location("http://wrong.localhost:5173/stock"),
        &store,
    );

    assert_eq!(
        decision.redirect_url(),
        Some(format!("http://right.localhost:5173/dashboard?token={token}").as_str())
    );
}

#[test]
fn given_custom_dashboard_path_when_redirected_then_lands_on_it() {
    let guard = guard("https://example.com").with_dashboard_path("/home");
    let store = MemorySessionStore::new();
    let token = superadmin_token(None);

    let decision = guard.evaluate(Some(&token), &location("https://acme.example.com/"), &store);

    assert!(
        decision
            .redirect_url()
            .unwrap()
            .starts_with("https://example.com/home?token=")
    );
}

// =========================================================================
// Logged out
// =========================================================================

#[test]
fn given_malformed_credential_when_evaluated_then_logout() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();

    let decision = guard.evaluate(
        Some("definitely-not-a-token"),
        &location("https://acme.example.com/"),
        &store,
    );

    assert!(decision.is_logout());
}

#[test]
fn given_malformed_credential_on_bare_ip_when_evaluated_then_still_logout() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();

    let decision = guard.evaluate(Some("x.y"), &location("http://127.0.0.1/"), &store);

    assert!(decision.is_logout());
}

#[test]
fn given_tenant_claim_with_url_delimiters_when_evaluated_then_logout_without_redirect() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("evil.test?x=");

    let decision = guard.evaluate(Some(&token), &location("https://acme.example.com/"), &store);

    assert_eq!(
        decision,
        Decision::Logout {
            reason: INVALID_TENANT_CLAIM.into()
        }
    );
    assert_eq!(decision.redirect_url(), None);
}

#[test]
fn given_dotted_tenant_claim_when_evaluated_then_logout() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("a.b");

    let decision = guard.evaluate(Some(&token), &location("https://acme.example.com/"), &store);

    assert!(decision.is_logout());
}

#[test]
fn given_tenant_claim_with_path_or_fragment_when_evaluated_then_logout() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();

    for claim in ["evil.test/", "evil#", "-acme", "acme-", "ac me", "ac:me"] {
        let token = tenant_token(claim);
        let decision = guard.evaluate(Some(&token), &location("https://example.com/"), &store);
        assert!(decision.is_logout(), "claim {claim:?} gave {decision:?}");
    }
}

#[test]
fn given_superadmin_with_invalid_tenant_claim_on_main_origin_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = superadmin_token(Some("not/a/label"));

    let decision = guard.evaluate(Some(&token), &location("https://example.com/"), &store);

    assert!(decision.is_allowed());
}

// =========================================================================
// Idempotence
// =========================================================================

#[test]
fn given_redirect_destination_when_evaluated_then_allowed() {
    let guard = guard("https://example.com");
    let store = MemorySessionStore::new();
    let token = tenant_token("tenantB");

    let first = guard.evaluate(Some(&token), &location("https://tenantA.example.com/"), &store);
    let destination = location(first.redirect_url().unwrap());
    let second = guard.evaluate(Some(&token), &destination, &store);

    assert!(second.is_allowed());
    assert_eq!(second.tenant(), Some("tenantb"));
}

#[test]
fn given_superadmin_redirect_destination_on_subdomain_base_when_evaluated_then_allowed() {
    let guard = guard("https://app.example.com");
    let store = MemorySessionStore::new();
    let token = superadmin_token(None);

    let first = guard.evaluate(
        Some(&token),
        &location("https://acme.app.example.com/"),
        &store,
    );
    let second = guard.evaluate(Some(&token), &location(first.redirect_url().unwrap()), &store);

    assert!(first.is_redirect());
    assert!(second.is_allowed());
}
