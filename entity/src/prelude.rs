pub use super::channel_webhook::Entity as ChannelWebhook;
pub use super::mirror_guild::Entity as MirrorGuild;
