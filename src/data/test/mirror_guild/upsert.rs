use super::*;

/// Tests creating a new mirror guild record.
///
/// Verifies that the repository successfully creates a new record when none
/// exists for the source guild.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MirrorGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MirrorGuildRepository::new(db);
    let result = repo
        .upsert(UpsertMirrorGuildParam {
            guild_id: "111111111".to_string(),
            mirror_guild_id: "222222222".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let mirror = result.unwrap();
    assert_eq!(mirror.guild_id, "111111111");
    assert_eq!(mirror.mirror_guild_id, "222222222");

    // Verify record was created in database
    let stored = entity::prelude::MirrorGuild::find_by_id(mirror.id)
        .one(db)
        .await?;

    assert!(stored.is_some());
    let stored = stored.unwrap();
    assert_eq!(stored.guild_id, "111111111");
    assert_eq!(stored.mirror_guild_id, "222222222");

    Ok(())
}

/// Tests updating an existing mirror guild record.
///
/// Verifies that upserting with the same source guild updates the destination
/// guild on the existing record instead of creating a second one.
///
/// Expected: Ok with record updated in place
#[tokio::test]
async fn updates_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MirrorGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MirrorGuildRepository::new(db);

    let original = repo
        .upsert(UpsertMirrorGuildParam {
            guild_id: "111111111".to_string(),
            mirror_guild_id: "222222222".to_string(),
        })
        .await?;

    let updated = repo
        .upsert(UpsertMirrorGuildParam {
            guild_id: "111111111".to_string(),
            mirror_guild_id: "333333333".to_string(),
        })
        .await?;

    assert_eq!(updated.id, original.id); // Same record ID
    assert_eq!(updated.mirror_guild_id, "333333333");
    assert_eq!(updated.created_at, original.created_at);

    // Verify only one record exists for this guild
    let count = entity::prelude::MirrorGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
