use super::*;

/// Tests creating a message stores it as active.
///
/// Expected: Ok with the message stored with status true and a creation time
#[tokio::test]
async fn creates_active_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams {
            msg_type: "feedback".to_string(),
            msg: "Great articles!".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.msg_type, "feedback");
    assert_eq!(message.msg, "Great articles!");
    assert!(message.status);
    assert!(message.created_at >= before);

    Ok(())
}
