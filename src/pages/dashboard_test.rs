use super::*;

#[test]
fn dashboard_title_names_role() {
    assert_eq!(dashboard_title(Role::Owner), "Owner Dashboard (Coming Soon)");
    assert_eq!(dashboard_title(Role::Tenant), "Tenant Dashboard (Coming Soon)");
}
