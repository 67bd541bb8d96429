use super::*;

#[test]
fn login_endpoint_targets_auth_login() {
    assert!(login_endpoint().ends_with("/api/auth/login"));
}

#[test]
fn register_endpoint_targets_auth_register() {
    assert!(register_endpoint().ends_with("/api/auth/register"));
}

#[test]
fn google_endpoint_targets_auth_google() {
    assert!(google_endpoint().ends_with("/api/auth/google"));
}

#[test]
fn update_company_endpoint_targets_profile_route() {
    assert!(update_company_endpoint().ends_with("/api/profile/update-company"));
}

#[test]
fn endpoints_share_the_configured_base() {
    let base = crate::config::api_base();
    assert_eq!(login_endpoint(), format!("{base}/api/auth/login"));
    assert_eq!(google_endpoint(), format!("{base}/api/auth/google"));
}
