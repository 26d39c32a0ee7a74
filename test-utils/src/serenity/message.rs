//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values,
/// simulating a guild message as Discord's gateway would deliver it. The
/// author uses the migrated username system (discriminator "0"), has no
/// avatar, and the message carries no embeds, attachments, or mentions.
///
/// # Arguments
/// - `channel_id` - Channel the message was sent in (snowflake)
/// - `guild_id` - Guild the message was sent in (snowflake)
/// - `author_id` - Message author's user ID (snowflake)
/// - `author_name` - Message author's username
/// - `content` - Message content
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    channel_id: u64,
    guild_id: u64,
    author_id: u64,
    author_name: &str,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": "10000000000000001",
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": author_name,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
