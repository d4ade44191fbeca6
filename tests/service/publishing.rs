//! End-to-end service workflows against the migrated schema.
//!
//! Unlike the unit tests, which build tables from the entity definitions, these tests create
//! the schema through the migrator so the foreign keys and unique constraints exercised are
//! the ones production uses.

use std::collections::HashSet;

use funews::server::{
    error::{conflict::ConflictError, validation::ValidationError, Error},
    model::{category::CategoryParams, news_article::NewsArticleParams, tag::TagParams},
    service::{
        category::CategoryService, news_article::NewsArticleService, tag::TagService,
    },
    startup,
};
use funews_test_utils::prelude::*;

fn article_params(category_id: i32) -> NewsArticleParams {
    NewsArticleParams {
        title: "Campus opens new library".to_string(),
        headline: "A new library opens its doors".to_string(),
        content: "The library will be open to all students.".to_string(),
        source: None,
        category_id,
        status: true,
        account_id: None,
    }
}

async fn migrated() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().build().await?;
    startup::ensure_schema(&test.db).await?;

    Ok(test)
}

/// Tests publishing an article into a category tree and managing its tags.
///
/// Expected: tags follow set semantics and deleting a tag removes it from the article
#[tokio::test]
async fn publishes_and_tags_article() -> Result<(), TestError> {
    let test = migrated().await?;
    let category_service = CategoryService::new(&test.db);
    let tag_service = TagService::new(&test.db);
    let article_service = NewsArticleService::new(&test.db);

    let news = category_service
        .create_category(CategoryParams::new("News", None))
        .await
        .unwrap();
    let campus = category_service
        .create_category(CategoryParams::new("Campus", Some(news.id)))
        .await
        .unwrap();
    let events = tag_service.create_tag(TagParams::new("Events")).await.unwrap();
    let students = tag_service
        .create_tag(TagParams::new("Students"))
        .await
        .unwrap();

    let article = article_service
        .create_article(article_params(campus.id))
        .await
        .unwrap();
    article_service
        .set_tags(article.id, &HashSet::from([events.id, students.id]))
        .await
        .unwrap();

    let tag_ids: HashSet<i32> = article_service
        .get_article_tags(article.id)
        .await
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|tag| tag.id)
        .collect();
    assert_eq!(tag_ids, HashSet::from([events.id, students.id]));

    assert!(tag_service.delete_tag(events.id).await.unwrap());

    let remaining = article_service
        .get_article_tags(article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, students.id);

    Ok(())
}

/// Tests the category guards on the migrated schema.
///
/// Expected: reparenting under a descendant is rejected, a parent with children cannot be
/// deleted and a category still holding articles is protected by its foreign key
#[tokio::test]
async fn guards_category_tree() -> Result<(), TestError> {
    let test = migrated().await?;
    let category_service = CategoryService::new(&test.db);
    let article_service = NewsArticleService::new(&test.db);

    let a = category_service
        .create_category(CategoryParams::new("A", None))
        .await
        .unwrap();
    let b = category_service
        .create_category(CategoryParams::new("B", Some(a.id)))
        .await
        .unwrap();

    let cycle = category_service
        .update_category(a.id, CategoryParams::new("A", Some(b.id)))
        .await;
    assert!(matches!(
        cycle,
        Err(Error::ConflictError(ConflictError::CategoryCycle { .. }))
    ));

    let has_children = category_service.delete_category(a.id).await;
    assert!(matches!(
        has_children,
        Err(Error::ConflictError(ConflictError::CategoryHasSubCategories(_)))
    ));

    article_service
        .create_article(article_params(b.id))
        .await
        .unwrap();
    let referenced = category_service.delete_category(b.id).await;
    assert!(matches!(
        referenced,
        Err(Error::ConflictError(ConflictError::Constraint(_)))
    ));

    let missing_parent = category_service
        .create_category(CategoryParams::new("Orphan", Some(999)))
        .await;
    assert!(matches!(
        missing_parent,
        Err(Error::ValidationError(ValidationError::ParentCategoryNotFound(999)))
    ));

    Ok(())
}

/// Tests that tag names stay unique regardless of case.
///
/// Expected: ConflictError for a differently cased duplicate, including accented letters
#[tokio::test]
async fn rejects_duplicate_tag_names() -> Result<(), TestError> {
    let test = migrated().await?;
    let tag_service = TagService::new(&test.db);

    tag_service.create_tag(TagParams::new("Sports")).await.unwrap();
    tag_service.create_tag(TagParams::new("Économie")).await.unwrap();

    for name in ["SPORTS", "ÉCONOMIE", "économie"] {
        let result = tag_service.create_tag(TagParams::new(name)).await;
        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::DuplicateTagName(_)))
        ));
    }
    assert_eq!(tag_service.get_all_tags().await.unwrap().len(), 2);

    Ok(())
}
