use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        username: " dana ".to_owned(),
        email: "dana@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        role: "owner".to_owned(),
        phone: String::new(),
    }
}

#[test]
fn valid_form_becomes_request() {
    let request = validate_register_input(&form()).unwrap();
    assert_eq!(request.username, "dana");
    assert_eq!(request.role, Some(Role::Owner));
    assert_eq!(request.phone, None);
}

#[test]
fn blank_role_defaults_to_tenant() {
    let request = validate_register_input(&RegisterForm { role: String::new(), ..form() }).unwrap();
    assert_eq!(request.role, Some(Role::Tenant));
}

#[test]
fn admin_cannot_self_register() {
    let result = validate_register_input(&RegisterForm { role: "admin".to_owned(), ..form() });
    assert_eq!(result, Err("Choose tenant or owner."));
}

#[test]
fn mismatched_passwords_rejected() {
    let result = validate_register_input(&RegisterForm { confirm_password: "other".to_owned(), ..form() });
    assert_eq!(result, Err("Passwords do not match."));
}

#[test]
fn short_password_rejected() {
    let result =
        validate_register_input(&RegisterForm { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..form() });
    assert_eq!(result, Err("Password must be at least 6 characters."));
}

#[test]
fn missing_fields_rejected() {
    let result = validate_register_input(&RegisterForm { username: "  ".to_owned(), ..form() });
    assert_eq!(result, Err("Username, email and password are required."));
}

#[test]
fn phone_is_trimmed_and_kept() {
    let request = validate_register_input(&RegisterForm { phone: " 555-0100 ".to_owned(), ..form() }).unwrap();
    assert_eq!(request.phone.as_deref(), Some("555-0100"));
}
