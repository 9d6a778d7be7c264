//! Timestamp helpers

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at microsecond precision, the resolution Postgres keeps
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Drops sub-microsecond precision so the value reads back unchanged from Postgres
pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(6)
}
