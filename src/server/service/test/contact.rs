use super::*;

/// Tests saving a message stores the bound payload unchanged as an active message.
///
/// Expected: Ok(Message) with the submitted type and text
#[tokio::test]
async fn saves_message_as_bound() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ContactService::new(db);
    let message = service
        .save_message(CreateMessageDto {
            msg_type: "feedback".to_string(),
            msg: "Great articles!".to_string(),
        })
        .await?;

    assert_eq!(message.msg_type, "feedback");
    assert_eq!(message.msg, "Great articles!");

    let found = service.find_message(message.id).await?;
    assert_eq!(found, Some(message));

    Ok(())
}

/// Tests inactive messages are not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_find_inactive_message() -> Result<(), AppError> {
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

    let service = ContactService::new(db);

    assert!(service.find_message(message.id).await?.is_none());

    Ok(())
}

/// Tests the requested page is returned newest first.
///
/// Expected: Ok(Vec<Message>) holding the second page of two
#[tokio::test]
async fn finds_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now() - Duration::days(1);
    for minute in 0..3 {
        factory::message::MessageFactory::new(db)
            .msg(format!("Message {}", minute))
            .created_at(start + Duration::minutes(minute))
            .build()
            .await?;
    }

    let service = ContactService::new(db);
    let page = service
        .find_paginated_messages(&PaginationDto { page: 2, limit: 2 })
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].msg, "Message 0");

    Ok(())
}
