use super::*;
use crate::net::types::User;

fn signed_in(role: Role) -> Session {
    Session {
        user: Some(User { id: 1, username: "u".to_owned(), email: "u@example.com".to_owned(), role, phone: None }),
        token: Some("t".to_owned()),
        loading: false,
    }
}

#[test]
fn loading_session_is_pending_even_when_anonymous() {
    let session = Session::rehydrating(None);
    assert_eq!(evaluate(&[Role::Owner], &session), GuardDecision::Pending);
    assert_eq!(GuardDecision::Pending.redirect_target(), None);
}

#[test]
fn loading_session_with_token_is_pending() {
    let session = Session::rehydrating(Some("t".to_owned()));
    assert_eq!(evaluate(&[], &session), GuardDecision::Pending);
}

#[test]
fn anonymous_is_redirected_to_login() {
    let decision = evaluate(&[Role::Tenant], &Session::default());
    assert_eq!(decision, GuardDecision::RedirectTo(LOGIN_PATH));
    assert_eq!(decision.redirect_target(), Some("/login"));
}

#[test]
fn wrong_role_is_denied_and_sent_home() {
    let decision = evaluate(&[Role::Owner], &signed_in(Role::Tenant));
    assert_eq!(decision, GuardDecision::Deny);
    assert_eq!(decision.redirect_target(), Some(HOME_PATH));
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(evaluate(&[Role::Owner, Role::Admin], &signed_in(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn empty_allow_list_admits_any_authenticated_user() {
    for role in Role::ALL {
        assert_eq!(evaluate(&[], &signed_in(role)), GuardDecision::Allow);
    }
}

#[test]
fn token_without_resolved_user_is_denied_for_role_gates() {
    let session = Session { user: None, token: Some("t".to_owned()), loading: false };
    assert_eq!(evaluate(&[Role::Tenant], &session), GuardDecision::Deny);
    assert_eq!(evaluate(&[], &session), GuardDecision::Allow);
}
