use super::*;
use crate::net::test_support::identity;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(identity("u-1", role)),
        loading: false,
    }
}

#[test]
fn loading_never_redirects() {
    let loading = AuthState::pending();
    assert_eq!(authorize(&loading, None), GuardDecision::Loading);
    assert_eq!(authorize(&loading, Some(MANAGEMENT_ROLES)), GuardDecision::Loading);

    for role in Role::ALL {
        let state = AuthState {
            loading: true,
            ..signed_in(role)
        };
        assert_eq!(authorize(&state, Some(MANAGEMENT_ROLES)), GuardDecision::Loading);
    }
}

#[test]
fn unauthenticated_goes_to_login_for_every_destination() {
    let state = AuthState::default();
    assert_eq!(authorize(&state, None), GuardDecision::Redirect(AppRoute::Login));
    assert_eq!(
        authorize(&state, Some(MANAGEMENT_ROLES)),
        GuardDecision::Redirect(AppRoute::Login)
    );
    assert_eq!(
        authorize(&state, Some(&[Role::Driver])),
        GuardDecision::Redirect(AppRoute::Login)
    );
}

#[test]
fn roles_outside_management_go_to_dashboard() {
    for role in Role::ALL {
        let expected = if role.can_manage() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(AppRoute::Dashboard)
        };
        assert_eq!(authorize(&signed_in(role), Some(MANAGEMENT_ROLES)), expected);
    }
}

#[test]
fn any_identity_passes_unrestricted_destination() {
    for role in Role::ALL {
        assert_eq!(authorize(&signed_in(role), None), GuardDecision::Allow);
    }
}

#[test]
fn forward_signed_in_only_after_loading() {
    assert!(should_forward_signed_in(&signed_in(Role::Driver)));
    assert!(!should_forward_signed_in(&AuthState::default()));
    assert!(!should_forward_signed_in(&AuthState {
        loading: true,
        ..signed_in(Role::Driver)
    }));
}
