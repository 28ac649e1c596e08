use super::*;

/// Tests creating a blog stores a draft and returns it with its author.
///
/// Expected: Ok(BlogWithAuthor) with status DRAFT and the author loaded
#[tokio::test]
async fn creates_draft_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .name("Writer")
        .roles(&["WRITER"])
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let created = repo
        .create(params(author.id, "writing-extractors"), r#"["RUST"]"#.to_string())
        .await?;

    assert!(created.blog.id > 0);
    assert_eq!(created.blog.slug, "writing-extractors");
    assert_eq!(created.blog.status, "DRAFT");
    assert_eq!(created.blog.tags, r#"["RUST"]"#);
    assert_eq!(created.blog.created_at, created.blog.updated_at);
    assert_eq!(created.author.map(|a| a.name), Some("Writer".to_string()));

    Ok(())
}

/// Tests the unique slug constraint rejects a second blog with the same slug.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::blog::BlogFactory::new(db, author.id)
        .slug("taken-slug")
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let result = repo
        .create(params(author.id, "taken-slug"), "[]".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
