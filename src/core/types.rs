// src/core/types.rs
use crate::unicode::categories::GeneralCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of Unicode scalar values. Used for planes and blocks alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CodepointInterval {
    pub start: u32,
    pub end: u32,
}

impl CodepointInterval {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }

    /// Whether `other` lies entirely inside this interval.
    pub fn encloses(&self, other: &CodepointInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for CodepointInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}..{:04X}", self.start, self.end)
    }
}

/// A single named character of the search universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub codepoint: char,
    pub name: String,
    pub category: GeneralCategory,
}

impl Character {
    pub fn new(codepoint: char, name: impl Into<String>, category: GeneralCategory) -> Self {
        Self { codepoint, name: name.into(), category }
    }

    pub fn scalar(&self) -> u32 {
        self.codepoint as u32
    }

    /// Uppercase hexadecimal codepoint, zero-padded to at least four digits.
    pub fn hexadecimal(&self) -> String {
        to_hexadecimal(self.codepoint)
    }
}

pub fn to_hexadecimal(codepoint: char) -> String {
    format!("{:04X}", codepoint as u32)
}

/// Recency and frequency of a character the user has picked before.
/// `use_count` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageInfo {
    pub last_used: DateTime<Utc>,
    pub use_count: u32,
}

impl UsageInfo {
    pub fn first_use(at: DateTime<Utc>) -> Self {
        Self { last_used: at, use_count: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaybeUsedCharacter {
    Unused(Character),
    Used(Character, UsageInfo),
}

impl MaybeUsedCharacter {
    pub fn new(character: Character, usage: Option<UsageInfo>) -> Self {
        match usage {
            Some(usage) => Self::Used(character, usage),
            None => Self::Unused(character),
        }
    }

    pub fn character(&self) -> &Character {
        match self {
            Self::Unused(character) | Self::Used(character, _) => character,
        }
    }

    pub fn usage(&self) -> Option<&UsageInfo> {
        match self {
            Self::Unused(_) => None,
            Self::Used(_, usage) => Some(usage),
        }
    }

    pub fn codepoint(&self) -> char {
        self.character().codepoint
    }
}

/// Half-open range of matched `char` positions, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchMatch {
    pub score: i64,
    pub ranges: Vec<MatchRange>,
}

/// Outcome of matching one character against a query, per side.
/// `None` means the side was not attempted or did not match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterMatch {
    pub codepoint: Option<SearchMatch>,
    pub name: Option<SearchMatch>,
}

impl CharacterMatch {
    pub fn unscored() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.codepoint.is_some() || self.name.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSearch<T> {
    pub item: T,
    pub matched: CharacterMatch,
}

/// A ranked result with both match sides present, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSearchResult<T> {
    pub item: T,
    pub codepoint: SearchMatch,
    pub name: SearchMatch,
}

/// Thresholds the display layer uses to flag characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageStatistics {
    pub top_third_recently_used: DateTime<Utc>,
    pub average_use_count: f64,
}

impl UsageStatistics {
    pub fn is_recent(&self, character: &MaybeUsedCharacter) -> bool {
        character
            .usage()
            .is_some_and(|usage| usage.last_used >= self.top_third_recently_used)
    }

    pub fn is_frequent(&self, character: &MaybeUsedCharacter) -> bool {
        character
            .usage()
            .is_some_and(|usage| f64::from(usage.use_count) >= self.average_use_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_hexadecimal_is_padded_uppercase() {
        assert_eq!(to_hexadecimal('A'), "0041");
        assert_eq!(to_hexadecimal('\u{1F600}'), "1F600");
        assert_eq!(to_hexadecimal('\u{00e9}'), "00E9");
    }

    #[test]
    fn test_interval_enclosure() {
        let plane = CodepointInterval::new(0x0000, 0xFFFF);
        assert!(plane.encloses(&CodepointInterval::new(0x0080, 0x00FF)));
        assert!(!plane.encloses(&CodepointInterval::new(0xFF00, 0x1_0000)));
        assert!(plane.contains(0xFFFF));
        assert_eq!(CodepointInterval::new(0x80, 0xFF).to_string(), "0080..00FF");
    }

    #[test]
    fn test_usage_flags() {
        let at = |s| Utc.timestamp_opt(s, 0).unwrap();
        let stats = UsageStatistics { top_third_recently_used: at(100), average_use_count: 2.5 };
        let used = MaybeUsedCharacter::Used(
            Character::new('a', "LATIN SMALL LETTER A", GeneralCategory::LowercaseLetter),
            UsageInfo { last_used: at(100), use_count: 3 },
        );
        let stale = MaybeUsedCharacter::Used(
            Character::new('b', "LATIN SMALL LETTER B", GeneralCategory::LowercaseLetter),
            UsageInfo { last_used: at(99), use_count: 2 },
        );
        let unused = MaybeUsedCharacter::Unused(Character::new(
            'c',
            "LATIN SMALL LETTER C",
            GeneralCategory::LowercaseLetter,
        ));

        assert!(stats.is_recent(&used) && stats.is_frequent(&used));
        assert!(!stats.is_recent(&stale) && !stats.is_frequent(&stale));
        assert!(!stats.is_recent(&unused) && !stats.is_frequent(&unused));
    }
}
