use super::*;

/// Tests finding an active message by ID.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_active_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = factory::create_message(db).await?;

    let repo = MessageRepository::new(db);
    let found = repo.find_by_id(message.id).await?;

    assert_eq!(found, Some(message));

    Ok(())
}

/// Tests an inactive message is hidden.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_inactive_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = factory::message::MessageFactory::new(db)
        .status(false)
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let found = repo.find_by_id(message.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests an unknown ID finds nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
