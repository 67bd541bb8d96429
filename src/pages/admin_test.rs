use super::*;

// =============================================================
// Section <-> query mapping
// =============================================================

#[test]
fn absent_section_resolves_to_overview() {
    assert_eq!(AdminSection::from_query(None), AdminSection::Overview);
}

#[test]
fn unknown_section_resolves_to_overview() {
    assert_eq!(AdminSection::from_query(Some("payroll")), AdminSection::Overview);
    assert_eq!(AdminSection::from_query(Some("")), AdminSection::Overview);
    assert_eq!(AdminSection::from_query(Some("Bookings")), AdminSection::Overview);
}

#[test]
fn every_section_round_trips_through_its_query_value() {
    for section in AdminSection::ALL {
        assert_eq!(AdminSection::from_query(Some(section.as_query())), section);
    }
}

// =============================================================
// Link targets
// =============================================================

#[test]
fn overview_link_is_the_bare_admin_path() {
    assert_eq!(section_href(AdminSection::Overview), "/admin");
}

#[test]
fn other_sections_carry_the_query_parameter() {
    assert_eq!(section_href(AdminSection::Bookings), "/admin?section=bookings");
    assert_eq!(section_href(AdminSection::Settings), "/admin?section=settings");
}

#[test]
fn section_link_class_marks_the_active_section() {
    assert_eq!(
        section_link_class(true),
        "admin-page__link admin-page__link--active"
    );
    assert_eq!(section_link_class(false), "admin-page__link");
}

// =============================================================
// Integration status
// =============================================================

#[test]
fn integration_status_reflects_presence_of_a_key() {
    assert_eq!(integration_status(""), "Not configured");
    assert_eq!(integration_status("pk_test_123"), "Configured");
}
