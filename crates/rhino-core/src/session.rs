//! Session identity.

use std::sync::atomic::{AtomicU32, Ordering};

/// Identifier of one in-memory shopping session, used to correlate logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new session ID.
    ///
    /// Avoids the system clock, which is unavailable in the browser.
    pub fn generate() -> Self {
        let marker = Box::new(0u8);
        let addr = &*marker as *const u8 as usize as u64;
        Self(format!("{:x}-{:x}", addr, next_sequence()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn next_sequence() -> u32 {
    static SEQUENCE: AtomicU32 = AtomicU32::new(0);
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
