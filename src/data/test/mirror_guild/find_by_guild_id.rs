use super::*;

/// Tests looking up a mirror configuration that doesn't exist.
///
/// Verifies that the repository returns None for a guild that has no
/// mirror record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MirrorGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MirrorGuildRepository::new(db);
    let result = repo.find_by_guild_id("123456789").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests looking up an existing mirror configuration.
///
/// Verifies that the repository returns the stored record with its source
/// and destination guild ids intact.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_record_for_configured_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MirrorGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::mirror_guild::MirrorGuildFactory::new(db)
        .guild_id("111111111")
        .mirror_guild_id("222222222")
        .build()
        .await?;

    let repo = MirrorGuildRepository::new(db);
    let found = repo.find_by_guild_id("111111111").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.guild_id, "111111111");
    assert_eq!(found.mirror_guild_id, "222222222");

    Ok(())
}

/// Tests that lookups are scoped to the requested guild.
///
/// Verifies that a record for one guild is not returned when querying
/// for a different guild.
///
/// Expected: Ok(None) for the other guild
#[tokio::test]
async fn does_not_return_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MirrorGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::mirror_guild::MirrorGuildFactory::new(db)
        .guild_id("111111111")
        .build()
        .await?;

    let repo = MirrorGuildRepository::new(db);
    let found = repo.find_by_guild_id("999999999").await?;

    assert!(found.is_none());

    Ok(())
}
