//! Tests for provisioning the administrator account on an existing schema.

use funews::server::{
    config::AdminAccountConfig,
    error::{conflict::ConflictError, Error},
    startup,
};
use funews_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn admin_config() -> AdminAccountConfig {
    AdminAccountConfig::new(constant::TEST_ADMIN_EMAIL, constant::TEST_ADMIN_PASSWORD).unwrap()
}

/// Tests that an account already holding the email is left untouched, whatever its role.
///
/// Expected: Ok(None) and no new account
#[tokio::test]
async fn leaves_existing_account_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_account(2, constant::TEST_ADMIN_EMAIL, constant::STAFF_ROLE)
        .build()
        .await?;

    let result = startup::provision_admin(&test.db, &admin_config()).await;

    assert!(matches!(result, Ok(None)));
    let account = entity::prelude::SystemAccount::find_by_id(2i16)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(account.role, constant::STAFF_ROLE);
    assert_eq!(
        entity::prelude::SystemAccount::find().count(&test.db).await?,
        1
    );

    Ok(())
}

/// Tests that a full account ID range is reported instead of overflowing.
///
/// Expected: ConflictError::AccountIdExhausted and no new account
#[tokio::test]
async fn fails_when_account_ids_exhausted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_account(i16::MAX, "last@x.com", constant::STAFF_ROLE)
        .build()
        .await?;

    let result = startup::provision_admin(&test.db, &admin_config()).await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::AccountIdExhausted(i16::MAX)))
    ));
    assert_eq!(
        entity::prelude::SystemAccount::find().count(&test.db).await?,
        1
    );

    Ok(())
}
