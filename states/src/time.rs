use chrono::{DateTime, Utc};

use crate::State;

/// Wall clock as seen by computes.
///
/// The UI advances it once per frame; tests set it explicitly so expiry logic
/// is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }
}

impl State for Time {}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
