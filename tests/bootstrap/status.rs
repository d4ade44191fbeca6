//! Tests for the startup bootstrap routine.
//!
//! These run against an empty in-memory database so the bootstrap has to create the schema
//! itself through the migrator before provisioning the administrator.

use funews::server::{
    auth::{claims_for_account, Policy},
    config::AdminAccountConfig,
    error::{bootstrap::BootstrapError, config::ConfigError},
    startup::{self, BootstrapStatus},
};
use funews_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

fn admin_config() -> AdminAccountConfig {
    AdminAccountConfig::new(constant::TEST_ADMIN_EMAIL, constant::TEST_ADMIN_PASSWORD).unwrap()
}

/// Tests bootstrap on an empty store.
///
/// Expected: schema created and exactly one admin account with ID 1 and role 3
#[tokio::test]
async fn creates_admin_in_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let status = startup::bootstrap(&test.db, Ok(admin_config())).await;

    let BootstrapStatus::Created(account) = status else {
        panic!("expected admin to be created, got {:?}", status);
    };
    assert_eq!(account.account_id, 1);
    assert_eq!(account.role, constant::ADMIN_ROLE);
    assert_eq!(account.email, constant::TEST_ADMIN_EMAIL);
    assert_eq!(account.name, startup::ADMIN_ACCOUNT_NAME);
    assert!(Policy::AdminOnly.evaluate(&claims_for_account(&account)));

    let accounts = entity::prelude::SystemAccount::find().all(&test.db).await?;
    assert_eq!(accounts.len(), 1);

    Ok(())
}

/// Tests running bootstrap twice with the same configured email.
///
/// Expected: second run reports AlreadyProvisioned and exactly one admin exists
#[tokio::test]
async fn is_idempotent_across_restarts() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let first = startup::bootstrap(&test.db, Ok(admin_config())).await;
    let second = startup::bootstrap(&test.db, Ok(admin_config())).await;

    assert!(matches!(first, BootstrapStatus::Created(_)));
    assert!(matches!(second, BootstrapStatus::AlreadyProvisioned));

    let admin_count = entity::prelude::SystemAccount::find()
        .filter(entity::system_account::Column::Email.eq(constant::TEST_ADMIN_EMAIL))
        .filter(entity::system_account::Column::Role.eq(constant::ADMIN_ROLE))
        .count(&test.db)
        .await?;
    assert_eq!(admin_count, 1);

    Ok(())
}

/// Tests bootstrap when existing accounts have IDs 3 and 7 and none match the email.
///
/// Expected: admin created with ID 8
#[tokio::test]
async fn assigns_next_id_after_highest_existing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    startup::ensure_schema(&test.db).await?;
    test.account()
        .insert_account(3, "three@x.com", constant::STAFF_ROLE)
        .await?;
    test.account()
        .insert_account(7, "seven@x.com", constant::STAFF_ROLE)
        .await?;

    let status = startup::bootstrap(&test.db, Ok(admin_config())).await;

    let BootstrapStatus::Created(account) = status else {
        panic!("expected admin to be created, got {:?}", status);
    };
    assert_eq!(account.account_id, 8);
    assert_eq!(account.role, constant::ADMIN_ROLE);

    Ok(())
}

/// Tests bootstrap without configured admin credentials.
///
/// Expected: Failed status carrying the configuration error, schema still created
#[tokio::test]
async fn reports_missing_configuration_without_panicking() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let status = startup::bootstrap(
        &test.db,
        Err(ConfigError::MissingEnvVar("ADMIN_ACCOUNT_EMAIL".to_string())),
    )
    .await;

    assert!(status.is_failed());
    assert!(matches!(
        status,
        BootstrapStatus::Failed(BootstrapError::ConfigError(ConfigError::MissingEnvVar(_)))
    ));

    let accounts = entity::prelude::SystemAccount::find().all(&test.db).await?;
    assert!(accounts.is_empty());

    Ok(())
}
