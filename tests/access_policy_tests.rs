// tests/access_policy_tests.rs
use std::sync::Arc;

use dashgate::application::access::{GrantDashboardAccessCommand, RevokeDashboardAccessCommand};
use dashgate::application::error::ApplicationError;
use dashgate::domain::dashboard::DashboardId;
use dashgate::domain::user::Role;

mod support;
use support::*;

#[tokio::test]
async fn admin_passes_every_dashboard_check() {
    let store = Arc::new(MemStore::default());
    seed_area(&store, 1, "Sales");
    seed_dashboard(&store, 1, "Q1 Report", 1);
    let services = build_services(Arc::clone(&store));

    let allowed = services
        .access_policy
        .authorize_dashboard_access(&admin_principal(99), DashboardId::new(1).unwrap())
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn area_grant_alone_does_not_open_a_dashboard() {
    let store = Arc::new(MemStore::default());
    seed_area(&store, 1, "Sales");
    seed_dashboard(&store, 1, "Q1 Report", 1);
    seed_user(&store, 2, "viewer@example.com", "pw", Role::User);
    grant_area(&store, 2, 1);
    let services = build_services(Arc::clone(&store));

    let allowed = services
        .access_policy
        .authorize_dashboard_access(&user_principal(2), DashboardId::new(1).unwrap())
        .await
        .unwrap();
    assert!(!allowed);
}

#[tokio::test]
async fn both_grants_open_the_dashboard() {
    let store = Arc::new(MemStore::default());
    seed_area(&store, 1, "Sales");
    seed_dashboard(&store, 1, "Q1 Report", 1);
    seed_user(&store, 2, "viewer@example.com", "pw", Role::User);
    grant_area(&store, 2, 1);
    grant_dashboard(&store, 2, 1, 1);
    let services = build_services(Arc::clone(&store));

    let allowed = services
        .access_policy
        .authorize_dashboard_access(&user_principal(2), DashboardId::new(1).unwrap())
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn dashboard_grant_without_area_grant_is_not_enough() {
    let store = Arc::new(MemStore::default());
    seed_area(&store, 1, "Sales");
    seed_dashboard(&store, 1, "Q1 Report", 1);
    seed_user(&store, 2, "viewer@example.com", "pw", Role::User);
    grant_dashboard(&store, 2, 1, 1);
    let services = build_services(Arc::clone(&store));

    let allowed = services
        .access_policy
        .authorize_dashboard_access(&user_principal(2), DashboardId::new(1).unwrap())
        .await
        .unwrap();
    assert!(!allowed);
}

#[tokio::test]
async fn missing_dashboard_is_not_found_even_for_admins() {
    let store = Arc::new(MemStore::default());
    let services = build_services(Arc::clone(&store));

    let err = services
        .access_policy
        .authorize_dashboard_access(&admin_principal(1), DashboardId::new(42).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn granting_requires_the_area_prerequisite() {
    let store = Arc::new(MemStore::default());
    seed_area(&store, 1, "Sales");
    seed_dashboard(&store, 1, "Q1 Report", 1);
    seed_user(&store, 2, "viewer@example.com", "pw", Role::User);
    let services = build_services(Arc::clone(&store));

    let err = services
        .access_policy
        .grant_dashboard_access(
            &admin_principal(1),
            GrantDashboardAccessCommand {
                user_id: 2,
                dashboard_id: 1,
            },
            meta(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn grant_is_an_upsert_and_is_audited() {
    let store = Arc::new(MemStore::default());
    seed_area(&store, 1, "Sales");
    seed_dashboard(&store, 1, "Q1 Report", 1);
    seed_user(&store, 2, "viewer@example.com", "pw", Role::User);
    grant_area(&store, 2, 1);
    let services = build_services(Arc::clone(&store));

    let first = services
        .access_policy
        .grant_dashboard_access(
            &admin_principal(1),
            GrantDashboardAccessCommand {
                user_id: 2,
                dashboard_id: 1,
            },
            meta(),
        )
        .await
        .unwrap();
    assert_eq!(first.granted_by, Some(1));

    // Re-granting must not error; it refreshes the grant in place.
    services
        .access_policy
        .grant_dashboard_access(
            &admin_principal(3),
            GrantDashboardAccessCommand {
                user_id: 2,
                dashboard_id: 1,
            },
            meta(),
        )
        .await
        .unwrap();

    assert_eq!(store.dashboard_grants.lock().unwrap().len(), 1);
    assert_eq!(
        store.dashboard_grants.lock().unwrap()[0].granted_by,
        Some(dashgate::domain::user::UserId::new(3).unwrap())
    );
    assert_eq!(
        logged_actions(&store)
            .iter()
            .filter(|a| *a == "DASHBOARD_ACCESS_GRANTED")
            .count(),
        2
    );
}

#[tokio::test]
async fn revoking_a_missing_grant_is_not_found() {
    let store = Arc::new(MemStore::default());
    seed_user(&store, 2, "viewer@example.com", "pw", Role::User);
    let services = build_services(Arc::clone(&store));

    let err = services
        .access_policy
        .revoke_dashboard_access(
            &admin_principal(1),
            RevokeDashboardAccessCommand {
                user_id: 2,
                dashboard_id: 7,
            },
            meta(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn non_admins_cannot_manage_grants() {
    let store = Arc::new(MemStore::default());
    let services = build_services(Arc::clone(&store));

    let err = services
        .access_policy
        .grant_dashboard_access(
            &user_principal(2),
            GrantDashboardAccessCommand {
                user_id: 3,
                dashboard_id: 1,
            },
            meta(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
