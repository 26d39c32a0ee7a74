use super::*;

/// Tests storing a freshly provisioned webhook list.
///
/// Verifies that the repository inserts one record per URL with sequential
/// positions starting at zero.
///
/// Expected: Ok with records in position order
#[tokio::test]
async fn stores_urls_with_sequential_positions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let urls = vec![
        "https://discord.com/api/webhooks/1/a".to_string(),
        "https://discord.com/api/webhooks/2/b".to_string(),
    ];

    let repo = ChannelWebhookRepository::new(db);
    let stored = repo.set_webhooks("123456789", &urls).await?;

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].position, 0);
    assert_eq!(stored[0].url, urls[0]);
    assert_eq!(stored[1].position, 1);
    assert_eq!(stored[1].url, urls[1]);

    // Verify records were created in database
    let count = entity::prelude::ChannelWebhook::find()
        .filter(entity::channel_webhook::Column::ChannelId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that a single provisioned webhook yields exactly one record.
///
/// The default provisioning path creates one webhook per channel; verifies the
/// mapping holds exactly that one URL afterwards.
///
/// Expected: Ok with a single record at position 0
#[tokio::test]
async fn stores_a_single_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let urls = vec!["https://discord.com/api/webhooks/1/a".to_string()];

    let repo = ChannelWebhookRepository::new(db);
    repo.set_webhooks("123456789", &urls).await?;

    let fetched = repo.get_urls_by_channel_id("123456789").await?;
    assert_eq!(fetched, urls);

    Ok(())
}

/// Tests that overwriting replaces the previous list.
///
/// Verifies that setting a new list removes the old records entirely rather
/// than appending to them.
///
/// Expected: Ok with only the new list stored
#[tokio::test]
async fn overwrites_previous_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelWebhookRepository::new(db);

    repo.set_webhooks(
        "123456789",
        &[
            "https://discord.com/api/webhooks/1/a".to_string(),
            "https://discord.com/api/webhooks/2/b".to_string(),
        ],
    )
    .await?;

    let replacement = vec!["https://discord.com/api/webhooks/9/z".to_string()];
    repo.set_webhooks("123456789", &replacement).await?;

    let fetched = repo.get_urls_by_channel_id("123456789").await?;
    assert_eq!(fetched, replacement);

    Ok(())
}

/// Tests that writing the same list twice is idempotent.
///
/// Verifies that repeating an overwrite with identical URLs leaves the same
/// mapping, with no duplicated records.
///
/// Expected: Ok with an unchanged list
#[tokio::test]
async fn overwrite_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let urls = vec![
        "https://discord.com/api/webhooks/1/a".to_string(),
        "https://discord.com/api/webhooks/2/b".to_string(),
    ];

    let repo = ChannelWebhookRepository::new(db);
    repo.set_webhooks("123456789", &urls).await?;
    repo.set_webhooks("123456789", &urls).await?;

    let fetched = repo.get_urls_by_channel_id("123456789").await?;
    assert_eq!(fetched, urls);

    Ok(())
}

/// Tests that overwriting one channel leaves other channels untouched.
///
/// Expected: Ok with the other channel's mapping intact
#[tokio::test]
async fn does_not_affect_other_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelWebhookRepository::new(db);

    let first = vec!["https://discord.com/api/webhooks/1/a".to_string()];
    let second = vec!["https://discord.com/api/webhooks/2/b".to_string()];

    repo.set_webhooks("111111111", &first).await?;
    repo.set_webhooks("222222222", &second).await?;

    repo.set_webhooks("111111111", &["https://discord.com/api/webhooks/9/z".to_string()])
        .await?;

    let untouched = repo.get_urls_by_channel_id("222222222").await?;
    assert_eq!(untouched, second);

    Ok(())
}
