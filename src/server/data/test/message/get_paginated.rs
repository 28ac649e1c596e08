use super::*;

/// Tests pages hold active messages newest first.
///
/// Creates five messages an hour apart and one inactive message, then reads
/// them two per page.
///
/// Expected: Pages [5, 4], [3, 2], [1] by age with the inactive message skipped
#[tokio::test]
async fn pages_active_messages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now() - Duration::hours(10);
    let mut created = Vec::new();
    for hour in 0..5 {
        let message = factory::message::MessageFactory::new(db)
            .msg(format!("Message at hour {}", hour))
            .created_at(start + Duration::hours(hour))
            .build()
            .await?;
        created.push(message.id);
    }
    factory::message::MessageFactory::new(db)
        .status(false)
        .created_at(Utc::now())
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let first = repo.get_paginated(1, 2).await?;
    let second = repo.get_paginated(2, 2).await?;
    let third = repo.get_paginated(3, 2).await?;

    let ids = |page: &[entity::message::Model]| page.iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids(&first), vec![created[4], created[3]]);
    assert_eq!(ids(&second), vec![created[2], created[1]]);
    assert_eq!(ids(&third), vec![created[0]]);

    Ok(())
}

/// Tests a page past the end is empty.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_contact_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db).await?;

    let repo = MessageRepository::new(db);
    let page = repo.get_paginated(5, 10).await?;

    assert!(page.is_empty());

    Ok(())
}
