use super::*;

/// Expect Ok(None) when the category does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_news_tables().build().await?;

    let category_service = CategoryService::new(&test.db);
    let result = category_service
        .update_category(1, CategoryParams::new("World", None))
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect Ok when moving a category under an unrelated branch
#[tokio::test]
async fn moves_category_to_other_branch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_news_tables().build().await?;
    let world = test
        .category()
        .insert_category_chain(&["World", "Europe", "France"])
        .await?;
    let sport = test.category().insert_category("Sport", None).await?;

    let category_service = CategoryService::new(&test.db);
    let updated = category_service
        .update_category(world[2].id, CategoryParams::new("France", Some(sport.id)))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.parent_id, Some(sport.id));

    Ok(())
}

/// Expect Ok when detaching a category to make it a root
#[tokio::test]
async fn detaches_category_to_root() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_category("World", None)
        .with_category("Europe", Some(1))
        .build()
        .await?;

    let category_service = CategoryService::new(&test.db);
    let updated = category_service
        .update_category(2, CategoryParams::new("Europe", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.parent_id, None);

    Ok(())
}

/// Expect ConflictError when a category is made its own parent
#[tokio::test]
async fn fails_for_self_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_category("World", None)
        .build()
        .await?;

    let category_service = CategoryService::new(&test.db);
    let result = category_service
        .update_category(1, CategoryParams::new("World", Some(1)))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::CategoryCycle {
            category_id: 1,
            parent_id: 1
        }))
    ));

    Ok(())
}

/// Expect ConflictError for every descendant used as the new parent, and the tree untouched
#[tokio::test]
async fn fails_for_any_descendant_parent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_news_tables().build().await?;
    let chain = test
        .category()
        .insert_category_chain(&["World", "Europe", "France", "Paris"])
        .await?;
    let root = &chain[0];

    let category_service = CategoryService::new(&test.db);

    for descendant in &chain[1..] {
        let result = category_service
            .update_category(root.id, CategoryParams::new("World", Some(descendant.id)))
            .await;

        assert!(
            matches!(result, Err(Error::ConflictError(ConflictError::CategoryCycle { .. }))),
            "descendant {} must be rejected as parent",
            descendant.id
        );
    }

    let stored_root = category_service.get_category(root.id).await.unwrap().unwrap();
    assert_eq!(stored_root.parent_id, None);

    Ok(())
}

/// Expect ConflictError when a middle node is moved under its own grandchild
#[tokio::test]
async fn fails_for_middle_node_moved_under_descendant() -> Result<(), TestError> {
    let test = TestBuilder::new().with_news_tables().build().await?;
    let chain = test
        .category()
        .insert_category_chain(&["World", "Europe", "France", "Paris"])
        .await?;

    let category_service = CategoryService::new(&test.db);
    let result = category_service
        .update_category(chain[1].id, CategoryParams::new("Europe", Some(chain[3].id)))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::CategoryCycle { .. }))
    ));

    Ok(())
}

/// Expect ValidationError when the new parent does not exist
#[tokio::test]
async fn fails_for_nonexistent_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_category("World", None)
        .build()
        .await?;

    let category_service = CategoryService::new(&test.db);
    let result = category_service
        .update_category(1, CategoryParams::new("World", Some(99)))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::ParentCategoryNotFound(99)))
    ));

    Ok(())
}
