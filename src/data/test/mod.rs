mod channel_webhook;
mod mirror_guild;
