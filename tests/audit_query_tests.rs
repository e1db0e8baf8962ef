// tests/audit_query_tests.rs
use std::sync::Arc;

use chrono::Duration;
use dashgate::application::error::ApplicationError;
use dashgate::application::queries::audit::LogQuery;
use dashgate::domain::audit::{AuditLog, LogLevel};
use dashgate::domain::user::Role;

mod support;
use support::*;

fn seed_log(store: &MemStore, id: i64, action: &str, user_id: Option<i64>, minutes_ago: i64) {
    store.logs.lock().unwrap().push(AuditLog {
        id,
        action: action.into(),
        entity_type: "USER".into(),
        entity_id: None,
        user_id,
        admin_id: None,
        level: LogLevel::Info,
        ip_address: None,
        user_agent: None,
        details: None,
        timestamp: fixed_now() - Duration::minutes(minutes_ago),
    });
}

#[tokio::test]
async fn logs_are_paged_newest_first_with_user_summaries() {
    let store = Arc::new(MemStore::default());
    seed_user(&store, 1, "viewer@example.com", "pw", Role::User);
    seed_log(&store, 1, "LOGIN_SUCCESS", Some(1), 30);
    seed_log(&store, 2, "USER_UPDATED", Some(1), 20);
    seed_log(&store, 3, "USER_DELETED", Some(1), 10);
    let services = build_services(Arc::clone(&store));

    let page = services
        .audit_queries
        .get_logs(
            &admin_principal(9),
            LogQuery {
                page: Some(1),
                limit: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(page.pagination.total_items, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.logs.len(), 2);
    assert_eq!(page.logs[0].action, "USER_DELETED");
    assert_eq!(
        page.logs[0].user.as_ref().unwrap().email,
        "viewer@example.com"
    );
}

#[tokio::test]
async fn limit_is_clamped_to_one_hundred() {
    let store = Arc::new(MemStore::default());
    let services = build_services(Arc::clone(&store));

    let page = services
        .audit_queries
        .get_logs(
            &admin_principal(9),
            LogQuery {
                limit: Some(5_000),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.pagination.items_per_page, 100);
}

#[tokio::test]
async fn action_filter_narrows_the_page() {
    let store = Arc::new(MemStore::default());
    seed_log(&store, 1, "LOGIN_SUCCESS", None, 30);
    seed_log(&store, 2, "LOGIN_FAILED", None, 20);
    seed_log(&store, 3, "LOGIN_SUCCESS", None, 10);
    let services = build_services(Arc::clone(&store));

    let page = services
        .audit_queries
        .get_logs(
            &admin_principal(9),
            LogQuery {
                action: Some("LOGIN_SUCCESS".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(page.pagination.total_items, 2);
    assert!(page.logs.iter().all(|l| l.action == "LOGIN_SUCCESS"));
}

#[tokio::test]
async fn the_trail_is_admin_only() {
    let store = Arc::new(MemStore::default());
    let services = build_services(Arc::clone(&store));

    let err = services
        .audit_queries
        .get_logs(&user_principal(2), LogQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn stats_aggregate_the_trailing_window() {
    let store = Arc::new(MemStore::default());
    seed_log(&store, 1, "LOGIN_SUCCESS", None, 10);
    seed_log(&store, 2, "LOGIN_SUCCESS", None, 20);
    seed_log(&store, 3, "USER_CREATED", None, 30);
    // Outside the 30-day window.
    seed_log(&store, 4, "USER_DELETED", None, 60 * 24 * 40);
    let services = build_services(Arc::clone(&store));

    let stats = services
        .audit_queries
        .get_stats(&admin_principal(9), None)
        .await
        .unwrap();

    assert_eq!(stats.total_logs, 3);
    assert_eq!(stats.action_stats.get("LOGIN_SUCCESS"), Some(&2));
    assert_eq!(stats.action_stats.get("USER_DELETED"), None);
}

#[tokio::test]
async fn csv_export_quotes_and_includes_rows() {
    let store = Arc::new(MemStore::default());
    seed_user(&store, 1, "viewer@example.com", "pw", Role::User);
    store.logs.lock().unwrap().push(AuditLog {
        id: 1,
        action: "USER_UPDATED".into(),
        entity_type: "USER".into(),
        entity_id: Some(1),
        user_id: Some(1),
        admin_id: None,
        level: LogLevel::Warn,
        ip_address: Some("203.0.113.7".into()),
        user_agent: None,
        details: Some(serde_json::json!({ "note": "has,comma" })),
        timestamp: fixed_now(),
    });
    let services = build_services(Arc::clone(&store));

    let csv = services
        .audit_queries
        .export_csv(&admin_principal(9), LogQuery::default())
        .await
        .unwrap();

    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("USER_UPDATED"));
    assert!(csv.contains("viewer@example.com"));
    // The JSON details field contains commas and quotes, so it must be quoted.
    assert!(csv.contains("\"{\"\"note\"\":\"\"has,comma\"\"}\""));
}

#[tokio::test]
async fn cleanup_below_the_retention_floor_is_rejected() {
    let store = Arc::new(MemStore::default());
    let services = build_services(Arc::clone(&store));

    let err = services
        .audit_maintenance
        .clean_old_logs(&admin_principal(9), 3, meta())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn cleanup_deletes_only_logs_older_than_the_cutoff() {
    let store = Arc::new(MemStore::default());
    seed_log(&store, 1, "OLD", None, 60 * 24 * 30);
    seed_log(&store, 2, "RECENT", None, 60);
    let services = build_services(Arc::clone(&store));

    let report = services
        .audit_maintenance
        .clean_old_logs(&admin_principal(9), 7, meta())
        .await
        .unwrap();

    assert_eq!(report.deleted, 1);
    let remaining = logged_actions(&store);
    assert!(remaining.contains(&"RECENT".to_string()));
    assert!(!remaining.contains(&"OLD".to_string()));
    // The purge itself lands in the trail.
    assert!(remaining.contains(&"AUDIT_LOGS_CLEANED".to_string()));
}

#[tokio::test]
async fn cleanup_still_deletes_while_the_recorder_is_disabled() {
    let store = Arc::new(MemStore::default());
    seed_log(&store, 1, "OLD", None, 60 * 24 * 30);
    seed_log(&store, 2, "RECENT", None, 60);
    let services = build_services_with(Arc::clone(&store), false, "fixed-reset-token");

    let report = services
        .audit_maintenance
        .clean_old_logs(&admin_principal(9), 7, meta())
        .await
        .unwrap();

    // The toggle stops new entries, not administration of the trail.
    assert_eq!(report.deleted, 1);
    let remaining = logged_actions(&store);
    assert_eq!(remaining, vec!["RECENT".to_string()]);
}

#[tokio::test]
async fn range_cleanup_validates_the_bounds() {
    let store = Arc::new(MemStore::default());
    let services = build_services(Arc::clone(&store));

    let err = services
        .audit_maintenance
        .clean_by_date_range(
            &admin_principal(9),
            fixed_now(),
            fixed_now() - Duration::days(1),
            meta(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn range_cleanup_deletes_inclusively() {
    let store = Arc::new(MemStore::default());
    seed_log(&store, 1, "INSIDE", None, 60);
    seed_log(&store, 2, "OUTSIDE", None, 60 * 24 * 5);
    let services = build_services(Arc::clone(&store));

    let report = services
        .audit_maintenance
        .clean_by_date_range(
            &admin_principal(9),
            fixed_now() - Duration::days(1),
            fixed_now(),
            meta(),
        )
        .await
        .unwrap();

    assert_eq!(report.deleted, 1);
    assert!(logged_actions(&store).contains(&"OUTSIDE".to_string()));
}
