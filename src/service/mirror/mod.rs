//! Channel mirroring services.
//!
//! Relays messages from source guild channels into a parallel mirror guild.
//! On first sight of a channel the provisioner creates a matching category,
//! channel, and webhook endpoint(s) in the mirror guild and persists the
//! webhook URLs; every message is then formatted and posted through one of
//! the channel's endpoints chosen at random.

pub mod format;
pub mod guard;
pub mod provision;
pub mod relay;
