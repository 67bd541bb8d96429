use super::*;

fn user(role: Role, profile_completed: bool) -> User {
    User {
        id: "u_1".to_owned(),
        name: "Test User".to_owned(),
        email: "test@example.com".to_owned(),
        role,
        profile_completed,
    }
}

// =============================================================
// Loading is terminal for every guard
// =============================================================

#[test]
fn all_guards_spin_while_loading_without_a_user() {
    assert_eq!(decide_private(None, true), RouteDecision::Spinner);
    assert_eq!(decide_profile_completion(None, true), RouteDecision::Spinner);
    assert_eq!(decide_admin(None, true), RouteDecision::Spinner);
}

#[test]
fn all_guards_spin_while_loading_even_with_a_known_user() {
    let admin = user(Role::Admin, true);
    assert_eq!(decide_private(Some(&admin), true), RouteDecision::Spinner);
    assert_eq!(decide_profile_completion(Some(&admin), true), RouteDecision::Spinner);
    assert_eq!(decide_admin(Some(&admin), true), RouteDecision::Spinner);
}

// =============================================================
// Anonymous, resolved
// =============================================================

#[test]
fn anonymous_private_route_redirects_to_login() {
    assert_eq!(decide_private(None, false), RouteDecision::Redirect("/login"));
}

#[test]
fn anonymous_profile_completion_redirects_to_login() {
    assert_eq!(
        decide_profile_completion(None, false),
        RouteDecision::Redirect("/login")
    );
}

#[test]
fn anonymous_admin_route_redirects_home() {
    assert_eq!(decide_admin(None, false), RouteDecision::Redirect("/"));
}

// =============================================================
// PrivateRoute profile gating
// =============================================================

#[test]
fn incomplete_profile_is_detoured_to_onboarding() {
    let rider = user(Role::User, false);
    assert_eq!(
        decide_private(Some(&rider), false),
        RouteDecision::Redirect("/complete-profile")
    );
}

#[test]
fn completed_profile_renders_private_routes() {
    let rider = user(Role::User, true);
    assert_eq!(decide_private(Some(&rider), false), RouteDecision::Render);
    let company = user(Role::Company, true);
    assert_eq!(decide_private(Some(&company), false), RouteDecision::Render);
}

// =============================================================
// ProfileCompletionRoute
// =============================================================

#[test]
fn incomplete_profile_may_render_onboarding() {
    let company = user(Role::Company, false);
    assert_eq!(
        decide_profile_completion(Some(&company), false),
        RouteDecision::Render
    );
}

#[test]
fn completed_profile_is_bounced_off_onboarding() {
    let company = user(Role::Company, true);
    assert_eq!(
        decide_profile_completion(Some(&company), false),
        RouteDecision::Redirect("/")
    );
}

// =============================================================
// AdminRoute
// =============================================================

#[test]
fn non_admin_roles_are_redirected_home() {
    let rider = user(Role::User, true);
    let company = user(Role::Company, true);
    assert_eq!(decide_admin(Some(&rider), false), RouteDecision::Redirect("/"));
    assert_eq!(decide_admin(Some(&company), false), RouteDecision::Redirect("/"));
}

#[test]
fn admin_renders_even_with_incomplete_profile() {
    let admin = user(Role::Admin, false);
    assert_eq!(decide_admin(Some(&admin), false), RouteDecision::Render);
}

#[test]
fn admin_renders_with_completed_profile() {
    let admin = user(Role::Admin, true);
    assert_eq!(decide_admin(Some(&admin), false), RouteDecision::Render);
}
