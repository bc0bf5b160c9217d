use customer_api::middleware::auth::AuthUser;
use customer_api::middleware::role::{check_any_role, check_role};
use customer_api::modules::auth::model::Claims;
use customer_api_models::CustomerRole;

fn create_test_auth_user(role: CustomerRole) -> AuthUser {
    AuthUser(Claims {
        sub: "test@example.com".to_string(),
        role,
        exp: 9999999999,
        iat: 1234567890,
    })
}

const READ_ROLES: [CustomerRole; 2] = [CustomerRole::Editor, CustomerRole::Administrator];
const WRITE_ROLES: [CustomerRole; 1] = [CustomerRole::Administrator];

#[test]
fn test_check_role_exact_match() {
    assert!(check_role(&create_test_auth_user(CustomerRole::Editor), CustomerRole::Editor).is_ok());
    assert!(
        check_role(
            &create_test_auth_user(CustomerRole::Administrator),
            CustomerRole::Administrator
        )
        .is_ok()
    );
}

#[test]
fn test_check_role_no_match() {
    assert!(
        check_role(
            &create_test_auth_user(CustomerRole::Editor),
            CustomerRole::Administrator
        )
        .is_err()
    );
}

#[test]
fn test_read_roles_allow_both() {
    assert!(check_any_role(&create_test_auth_user(CustomerRole::Editor), &READ_ROLES).is_ok());
    assert!(
        check_any_role(&create_test_auth_user(CustomerRole::Administrator), &READ_ROLES).is_ok()
    );
}

#[test]
fn test_write_roles_reject_editor() {
    let err = check_any_role(&create_test_auth_user(CustomerRole::Editor), &WRITE_ROLES).unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);

    assert!(
        check_any_role(&create_test_auth_user(CustomerRole::Administrator), &WRITE_ROLES).is_ok()
    );
}

#[test]
fn test_check_any_role_empty_list() {
    assert!(check_any_role(&create_test_auth_user(CustomerRole::Administrator), &[]).is_err());
}
