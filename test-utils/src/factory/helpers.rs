//! Shared helpers for the entity factories.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter backing unique test identifiers.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns the next unique id for factory-built rows.
///
/// Snowflakes, channel ids, and URLs derived from this value never collide
/// across factories within one test process.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
