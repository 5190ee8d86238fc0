//! Identifier allocation for saved draft snapshots.

use chrono::Utc;
use tracing::debug;

/// Prefix shared by every saved draft identifier.
pub const DRAFT_ID_PREFIX: &str = "custom-";

/// Issues `custom-<unix millis>` identifiers that never repeat within a session.
///
/// Timestamps are bumped past the last issued value, so two saves inside the
/// same millisecond still receive distinct ids.
#[derive(Debug, Clone, Default)]
pub struct DraftIdAllocator {
    last_issued: Option<i64>,
}

impl DraftIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id from the current wall clock.
    pub fn next_id(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        self.next_id_at(Utc::now().timestamp_millis(), is_taken)
    }

    /// Allocate an id as if the clock read `now_millis`.
    ///
    /// `is_taken` reports ids already present in the theme collection; those
    /// are skipped as well.
    pub fn next_id_at(&mut self, now_millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
        let mut stamp = match self.last_issued {
            Some(last) if now_millis <= last => {
                debug!(now_millis, last, "clock did not advance; bumping draft id");
                last + 1
            }
            _ => now_millis,
        };
        loop {
            let id = format!("{DRAFT_ID_PREFIX}{stamp}");
            if !is_taken(&id) {
                self.last_issued = Some(stamp);
                return id;
            }
            stamp += 1;
        }
    }
}
