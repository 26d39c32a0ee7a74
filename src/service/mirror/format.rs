//! Outbound message body construction.
//!
//! Transforms an inbound guild message into the payload posted through a
//! mirror webhook: the author's tag and avatar, embeds passed through
//! unchanged, attachments re-uploaded under their original filenames, and the
//! content with role mentions rewritten plus a footer linking back to the
//! original message. Content is capped at Discord's 2000-character limit with
//! the footer always kept intact.

use std::collections::HashMap;

use serenity::all::{CreateAttachment, CreateEmbed, Message, Role, RoleId};

use crate::error::AppError;

/// Discord's hard ceiling on message content length, in characters.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Suffix marking truncated content; its three characters are reserved out of
/// the content budget whenever truncation applies.
const ELLIPSIS: &str = "...";

/// Payload for a single webhook send.
#[derive(Debug)]
pub struct MessageBody {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<CreateEmbed>,
    pub files: Vec<CreateAttachment>,
    pub content: String,
}

/// Builds the outbound body for a message, downloading its attachments.
///
/// Each attachment is fetched fully into memory and re-attached under its
/// original filename. No size or count limit is enforced beyond what the
/// platform imposes.
///
/// # Arguments
/// - `message` - The inbound guild message
/// - `roles` - The source guild's role registry, for mention rewriting
///
/// # Returns
/// - `Ok(MessageBody)` - Payload ready for webhook execution
/// - `Err(AppError::DiscordErr)` - An attachment download failed
pub async fn prepare_message_body(
    message: &Message,
    roles: &HashMap<RoleId, Role>,
) -> Result<MessageBody, AppError> {
    let mut files = Vec::with_capacity(message.attachments.len());

    for attachment in &message.attachments {
        let data = attachment.download().await?;
        files.push(CreateAttachment::bytes(data, attachment.filename.clone()));
    }

    Ok(build_message_body(message, roles, files))
}

/// Assembles the body from a message and its already-downloaded files.
pub(crate) fn build_message_body(
    message: &Message,
    roles: &HashMap<RoleId, Role>,
    files: Vec<CreateAttachment>,
) -> MessageBody {
    let content = rewrite_role_mentions(&message.content, &message.mention_roles, roles);
    let footer = message_footer(message);

    MessageBody {
        username: message.author.tag(),
        avatar_url: message.author.face(),
        embeds: message.embeds.iter().cloned().map(CreateEmbed::from).collect(),
        files,
        content: compose_content(content, &footer),
    }
}

/// Footer appended to every relayed message: a jump link to the original
/// message plus the original author's numeric id.
fn message_footer(message: &Message) -> String {
    format!(
        "\n\n[Link to message]({}) | **{}**",
        message.link(),
        message.author.id
    )
}

/// Rewrites role-mention tokens (`<@&id>`) into backtick-quoted role names
/// using the source guild's role registry.
///
/// Ids missing from the registry keep their raw mention token; the token is
/// inert in the mirror because every send suppresses role notifications.
pub fn rewrite_role_mentions(
    content: &str,
    mention_roles: &[RoleId],
    roles: &HashMap<RoleId, Role>,
) -> String {
    let mut content = content.to_string();

    for role_id in mention_roles {
        if let Some(role) = roles.get(role_id) {
            content = content.replace(&format!("<@&{role_id}>"), &format!("`@{}`", role.name));
        }
    }

    content
}

/// Appends the footer, truncating content to keep the total within
/// `MAX_CONTENT_LENGTH` characters.
///
/// When content, footer, and the ellipsis together exceed the ceiling, the
/// content is cut to `MAX_CONTENT_LENGTH - footer - 3` characters and
/// suffixed with the ellipsis. The footer is never truncated.
pub fn compose_content(content: String, footer: &str) -> String {
    let footer_chars = footer.chars().count();
    let content_chars = content.chars().count();

    if content_chars + footer_chars + ELLIPSIS.len() > MAX_CONTENT_LENGTH {
        let keep = MAX_CONTENT_LENGTH - footer_chars - ELLIPSIS.len();
        let truncated: String = content.chars().take(keep).collect();
        format!("{truncated}{ELLIPSIS}{footer}")
    } else {
        format!("{content}{footer}")
    }
}
