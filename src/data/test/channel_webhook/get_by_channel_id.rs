use super::*;

/// Tests looking up webhooks for an unprovisioned channel.
///
/// Verifies that the repository returns an empty list for a channel with no
/// stored mapping, which is the signal that provisioning is needed.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unprovisioned_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelWebhookRepository::new(db);
    let webhooks = repo.get_by_channel_id("123456789").await?;

    assert!(webhooks.is_empty());

    let urls = repo.get_urls_by_channel_id("123456789").await?;
    assert!(urls.is_empty());

    Ok(())
}

/// Tests that webhooks are returned ordered by position.
///
/// Inserts records out of position order and verifies the repository returns
/// them sorted, so the stored list order is stable regardless of insert order.
///
/// Expected: Ok with records in position order
#[tokio::test]
async fn returns_webhooks_ordered_by_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel_id = "123456789";

    ChannelWebhookFactory::new(db)
        .channel_id(channel_id)
        .position(2)
        .url("https://discord.com/api/webhooks/3/c")
        .build()
        .await?;
    ChannelWebhookFactory::new(db)
        .channel_id(channel_id)
        .position(0)
        .url("https://discord.com/api/webhooks/1/a")
        .build()
        .await?;
    ChannelWebhookFactory::new(db)
        .channel_id(channel_id)
        .position(1)
        .url("https://discord.com/api/webhooks/2/b")
        .build()
        .await?;

    let repo = ChannelWebhookRepository::new(db);
    let urls = repo.get_urls_by_channel_id(channel_id).await?;

    assert_eq!(
        urls,
        vec![
            "https://discord.com/api/webhooks/1/a".to_string(),
            "https://discord.com/api/webhooks/2/b".to_string(),
            "https://discord.com/api/webhooks/3/c".to_string(),
        ]
    );

    Ok(())
}

/// Tests that lookups are scoped to the requested channel.
///
/// Verifies that records for other channels are not included in a channel's
/// webhook list.
///
/// Expected: Ok with only the requested channel's records
#[tokio::test]
async fn does_not_return_other_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelWebhook)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ChannelWebhookFactory::new(db)
        .channel_id("111111111")
        .build()
        .await?;
    ChannelWebhookFactory::new(db)
        .channel_id("222222222")
        .build()
        .await?;

    let repo = ChannelWebhookRepository::new(db);
    let webhooks = repo.get_by_channel_id("111111111").await?;

    assert_eq!(webhooks.len(), 1);
    assert_eq!(webhooks[0].channel_id, "111111111");

    Ok(())
}
