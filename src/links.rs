//! Links
//!
//! The record a short code points at

use chrono::TimeDelta;
use chrono::naive::NaiveDateTime;
use serde::Serialize;

/// One shortened link
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Creation-order identifier, unique within the registry
    pub id: u64,

    /// Where the short code leads, always carries a scheme
    pub destination: String,

    /// External identifier for the link
    pub code: String,

    /// Number of successful resolutions
    pub clicks: u64,

    /// Creation date
    pub created_at: NaiveDateTime,
}

impl Link {
    /// Age of the link at the given instant
    ///
    /// A clock that moved backwards counts as no age at all
    pub fn age_at(&self, now: NaiveDateTime) -> TimeDelta {
        (now - self.created_at).max(TimeDelta::zero())
    }

    /// Has the link outlived the expiry window at the given instant?
    ///
    /// The boundary is inclusive: a link is expired the moment its age
    /// reaches the window
    pub fn is_expired_at(&self, now: NaiveDateTime, window: TimeDelta) -> bool {
        self.age_at(now) >= window
    }

    /// Time left before the link expires, clamped at zero
    pub fn time_remaining_at(&self, now: NaiveDateTime, window: TimeDelta) -> TimeDelta {
        (window - self.age_at(now)).max(TimeDelta::zero())
    }
}
