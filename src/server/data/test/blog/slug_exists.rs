use super::*;

/// Tests slug lookup reports taken and free slugs.
///
/// Expected: true for the stored slug, false for any other
#[tokio::test]
async fn reports_taken_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::blog::BlogFactory::new(db, author.id)
        .slug("first-post")
        .build()
        .await?;

    let repo = BlogRepository::new(db);

    assert!(repo.slug_exists("first-post").await?);
    assert!(!repo.slug_exists("second-post").await?);

    Ok(())
}
