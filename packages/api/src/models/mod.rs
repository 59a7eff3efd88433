//! Plain data records handed to the pages.
//!
//! Every record is rebuilt from a wire message on each call; nothing here is
//! cached. Dates cross the boundary as epoch seconds, see [`from_epoch_seconds`]
//! and [`to_epoch_seconds`].

use chrono::{DateTime, Utc};

mod card;
pub mod kinds;
mod study;
mod user;

pub use card::{Block, Card, Topic, TopicRef};
pub use kinds::{BlockType, CardState, ResourcePattern, ResourceType, SearchKind, TopicLevel};
pub use study::{Milestone, NewResource, Resource, Roadmap, SearchResult, Section, Subject};
pub use user::{SignedIn, UserInfo};

/// Wire epoch seconds to a date; `0` means "no date".
pub fn from_epoch_seconds(secs: i64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// Date to wire epoch seconds, floored to whole seconds; `None` becomes `0`.
pub fn to_epoch_seconds(date: Option<DateTime<Utc>>) -> i64 {
    date.map(|d| d.timestamp()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_seconds_to_date() {
        let date = from_epoch_seconds(1_700_000_000).unwrap();
        assert_eq!(date.timestamp(), 1_700_000_000);
        assert_eq!(date.timestamp_millis(), 1_700_000_000 * 1000);
    }

    #[test]
    fn test_zero_is_no_date() {
        assert!(from_epoch_seconds(0).is_none());
        assert_eq!(to_epoch_seconds(None), 0);
    }

    #[test]
    fn test_outbound_dates_are_floored() {
        let date = DateTime::from_timestamp(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(to_epoch_seconds(Some(date)), 1_700_000_000);
    }
}
