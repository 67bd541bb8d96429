use super::*;

#[test]
fn role_tab_class_marks_the_active_tab() {
    assert_eq!(role_tab_class(true), "auth-card__role auth-card__role--active");
    assert_eq!(role_tab_class(false), "auth-card__role");
}

#[test]
fn google_start_url_carries_the_selected_role() {
    assert_eq!(
        google_start_url("", Role::User),
        "/api/auth/google/start?role=user"
    );
    assert_eq!(
        google_start_url("https://api.privyde.example", Role::Company),
        "https://api.privyde.example/api/auth/google/start?role=company"
    );
}
