use super::*;

/// Tests finding a blog loads its author.
///
/// Expected: Ok(Some(BlogWithAuthor)) with the matching author
#[tokio::test]
async fn finds_blog_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let blog = factory::create_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    let found = repo.find_by_id(blog.id).await?.unwrap();

    assert_eq!(found.blog, blog);
    assert_eq!(found.author, Some(author));

    Ok(())
}

/// Tests blogs are found regardless of status.
///
/// Expected: Ok(Some(_)) for a published blog
#[tokio::test]
async fn finds_blog_in_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let blog = factory::blog::BlogFactory::new(db, author.id)
        .status("PUBLISHED")
        .build()
        .await?;

    let repo = BlogRepository::new(db);
    let found = repo.find_by_id(blog.id).await?;

    assert_eq!(found.map(|b| b.blog.status), Some("PUBLISHED".to_string()));

    Ok(())
}

/// Tests an unknown ID finds nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlogRepository::new(db);
    let found = repo.find_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
