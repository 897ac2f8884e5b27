// File: src/learning.rs
use crate::core::types::{MaybeUsedCharacter, UsageInfo, UsageStatistics};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Usage records keyed by codepoint. Only characters picked at least once appear.
pub type UsageData = BTreeMap<char, UsageInfo>;

pub struct UsageTracker {
    use_increment: u32,
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageTracker {
    pub fn new() -> Self {
        Self { use_increment: 1 }
    }

    /// Counts one more use of `codepoint` at `now`.
    /// `last_used` never moves backwards, even if the clock does.
    pub fn record_usage(&self, usage: &mut UsageData, codepoint: char, now: DateTime<Utc>) -> UsageInfo {
        let info = usage
            .entry(codepoint)
            .and_modify(|info| {
                info.use_count = info.use_count.saturating_add(self.use_increment);
                info.last_used = info.last_used.max(now);
            })
            .or_insert_with(|| UsageInfo::first_use(now));
        *info
    }
}

/// The most recently used third, newest first. Never empty unless `used` is.
pub fn most_recent_uses(used: &[MaybeUsedCharacter]) -> Vec<DateTime<Utc>> {
    let mut timestamps: Vec<DateTime<Utc>> =
        used.iter().filter_map(|c| c.usage()).map(|u| u.last_used).collect();
    timestamps.sort_unstable_by(|a, b| b.cmp(a));

    if timestamps.len() < 3 {
        return timestamps;
    }
    let third = timestamps.len().div_ceil(3);
    timestamps.truncate(third);
    timestamps
}

pub fn average_use_count(used: &[MaybeUsedCharacter]) -> f64 {
    let counts: Vec<u32> = used.iter().filter_map(|c| c.usage()).map(|u| u.use_count).collect();
    if counts.is_empty() {
        return 0.0;
    }
    counts.iter().map(|&c| f64::from(c)).sum::<f64>() / counts.len() as f64
}

/// Thresholds for flagging characters as recent or frequent.
/// With fewer than three used characters every one of them counts as recent;
/// with none, the cutoff is the Unix epoch.
pub fn derive_statistics(used: &[MaybeUsedCharacter]) -> UsageStatistics {
    UsageStatistics {
        top_third_recently_used: most_recent_uses(used)
            .last()
            .copied()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        average_use_count: average_use_count(used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Character;
    use crate::unicode::categories::GeneralCategory;
    use chrono::TimeZone;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn used(codepoint: char, last_used: i64, use_count: u32) -> MaybeUsedCharacter {
        MaybeUsedCharacter::Used(
            Character::new(codepoint, "TEST", GeneralCategory::OtherSymbol),
            UsageInfo { last_used: at(last_used), use_count },
        )
    }

    #[test]
    fn test_record_usage_creates_and_increments() {
        let tracker = UsageTracker::new();
        let mut usage = UsageData::new();

        let first = tracker.record_usage(&mut usage, 'x', at(10));
        assert_eq!(first, UsageInfo { last_used: at(10), use_count: 1 });

        tracker.record_usage(&mut usage, 'x', at(20));
        let third = tracker.record_usage(&mut usage, 'x', at(30));
        assert_eq!(third, UsageInfo { last_used: at(30), use_count: 3 });
        assert_eq!(usage.len(), 1);
    }

    #[test]
    fn test_last_used_is_monotonic() {
        let tracker = UsageTracker::new();
        let mut usage = UsageData::new();
        tracker.record_usage(&mut usage, 'x', at(50));
        let info = tracker.record_usage(&mut usage, 'x', at(40));
        assert_eq!(info.last_used, at(50));
        assert_eq!(info.use_count, 2);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = derive_statistics(&[]);
        assert_eq!(stats.average_use_count, 0.0);
        assert_eq!(stats.top_third_recently_used, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_statistics_few_used_takes_least_recent() {
        let stats = derive_statistics(&[used('a', 30, 1), used('b', 10, 3)]);
        assert_eq!(stats.top_third_recently_used, at(10));
        assert_eq!(stats.average_use_count, 2.0);

        let stats = derive_statistics(&[used('a', 30, 4)]);
        assert_eq!(stats.top_third_recently_used, at(30));
    }

    #[test]
    fn test_statistics_top_third() {
        let characters: Vec<MaybeUsedCharacter> =
            (0..7).map(|i| used(char::from(b'a' + i as u8), i * 10, 1)).collect();
        // 7 uses -> newest 3 are the top third: 60, 50, 40
        let stats = derive_statistics(&characters);
        assert_eq!(stats.top_third_recently_used, at(40));

        let characters: Vec<MaybeUsedCharacter> =
            (0..6).map(|i| used(char::from(b'a' + i as u8), i * 10, 1)).collect();
        assert_eq!(derive_statistics(&characters).top_third_recently_used, at(40));
    }
}
