use super::*;

/// Tests finding a user by ID.
///
/// Expected: Ok(Some(Model)) for a stored user, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_roles(db, &["EDITOR"]).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(user.id).await?, Some(user.clone()));
    assert!(repo.find_by_id(user.id + 1).await?.is_none());

    Ok(())
}
