use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use chrono_tz::Tz;

/// Stamps new messages with wall-clock time in a fixed civil time zone.
///
/// The stored value carries no offset, so rows written during a DST
/// fall-back hour can sort out of creation order.
#[derive(Debug, Clone, Copy)]
pub struct MessageClock {
    zone: Tz,
}

impl MessageClock {
    pub fn new(zone: Tz) -> Self {
        MessageClock { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn now(&self) -> NaiveDateTime {
        self.stamp(Utc::now())
    }

    pub fn stamp(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.zone).naive_local().trunc_subsecs(6)
    }
}
