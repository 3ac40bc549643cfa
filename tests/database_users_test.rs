// ABOUTME: Integration tests for user storage
// ABOUTME: Covers creation, lookup by id and email, duplicate emails and listing order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use healthcare_portal::errors::{AppError, ErrorCode};
use healthcare_portal::database::Database;
use healthcare_portal::models::User;
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_fetch_user() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user(&database, "Ada", "ada@example.com")
        .await
        .unwrap();

    let by_id = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.id, user.id);
    assert_eq!(by_id.name, "Ada");
    assert_eq!(by_id.email, "ada@example.com");
    assert_eq!(by_id.password_hash, user.password_hash);

    let by_email = database
        .get_user_by_email("  ADA@example.com ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
}

#[tokio::test]
async fn test_missing_user_is_none() {
    let database = common::create_test_database().await.unwrap();

    assert!(database.get_user(Uuid::new_v4()).await.unwrap().is_none());
    assert!(database
        .get_user_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let database = common::create_test_database().await.unwrap();
    common::create_test_user(&database, "Ada", "ada@example.com")
        .await
        .unwrap();

    let duplicate = User::new("Other".into(), "Ada@Example.com".into(), "hash".into());
    let err = database.create_user(&duplicate).await.unwrap_err();
    let app_error = AppError::from(err);

    assert_eq!(app_error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(app_error.http_status(), 409);
    assert_eq!(app_error.message, "Email already registered");
}

#[tokio::test]
async fn test_list_users_in_registration_order() {
    let database = common::create_test_database().await.unwrap();
    for (name, email) in [
        ("Ada", "ada@example.com"),
        ("Grace", "grace@example.com"),
        ("Linus", "linus@example.com"),
    ] {
        common::create_test_user(&database, name, email).await.unwrap();
    }

    let names: Vec<String> = database
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.name)
        .collect();
    assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("nested/portal.db").display());

    let user_id = {
        let database = Database::new(&url).await.unwrap();
        common::create_test_user(&database, "Ada", "ada@example.com")
            .await
            .unwrap()
            .id
    };

    let reopened = Database::new(&url).await.unwrap();
    assert!(reopened.get_user(user_id).await.unwrap().is_some());
}
