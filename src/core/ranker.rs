// File: src/core/ranker.rs
//! Orders matched characters for display.
//!
//! Tie-break chain, first difference wins:
//! 1. name match score, higher first, missing match last
//! 2. codepoint match score, same rule
//! 3. usage: used before unused, then more recent `last_used`, then higher `use_count`
//! 4. ascending codepoint
use crate::core::order::{compare_nullable, compare_numbers};
use crate::core::types::{
    CharacterSearch, CharacterSearchResult, MaybeUsedCharacter, SearchMatch, UsageInfo,
};
use std::cmp::Ordering;

pub fn compare_search_matches(left: &SearchMatch, right: &SearchMatch) -> Ordering {
    compare_numbers(right.score, left.score)
}

fn compare_usage_info(left: &UsageInfo, right: &UsageInfo) -> Ordering {
    compare_numbers(right.last_used, left.last_used)
        .then_with(|| compare_numbers(right.use_count, left.use_count))
}

/// Usage first, then codepoint. Total over distinct codepoints.
pub fn compare_used_characters(left: &MaybeUsedCharacter, right: &MaybeUsedCharacter) -> Ordering {
    compare_nullable(left.usage(), right.usage(), compare_usage_info)
        .then_with(|| compare_numbers(left.codepoint(), right.codepoint()))
}

pub fn compare_character_matches(
    left: &CharacterSearch<MaybeUsedCharacter>,
    right: &CharacterSearch<MaybeUsedCharacter>,
) -> Ordering {
    compare_nullable(left.matched.name.as_ref(), right.matched.name.as_ref(), compare_search_matches)
        .then_with(|| {
            compare_nullable(
                left.matched.codepoint.as_ref(),
                right.matched.codepoint.as_ref(),
                compare_search_matches,
            )
        })
        .then_with(|| compare_used_characters(&left.item, &right.item))
}

/// Replaces missing match sides with an empty zero-score match.
/// Display-only: runs after ordering.
pub fn fill_null_match_scores<T>(search: CharacterSearch<T>) -> CharacterSearchResult<T> {
    CharacterSearchResult {
        item: search.item,
        codepoint: search.matched.codepoint.unwrap_or_default(),
        name: search.matched.name.unwrap_or_default(),
    }
}

pub fn rank(
    mut matches: Vec<CharacterSearch<MaybeUsedCharacter>>,
) -> Vec<CharacterSearchResult<MaybeUsedCharacter>> {
    matches.sort_by(compare_character_matches);
    matches.into_iter().map(fill_null_match_scores).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Character, CharacterMatch, MatchRange};
    use crate::unicode::categories::GeneralCategory;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn character(codepoint: char) -> Character {
        Character::new(codepoint, format!("CHARACTER {}", codepoint), GeneralCategory::OtherSymbol)
    }

    fn unused(codepoint: char) -> MaybeUsedCharacter {
        MaybeUsedCharacter::Unused(character(codepoint))
    }

    fn used(codepoint: char, last_used: i64, use_count: u32) -> MaybeUsedCharacter {
        MaybeUsedCharacter::Used(character(codepoint), UsageInfo { last_used: at(last_used), use_count })
    }

    fn scored(score: i64) -> Option<SearchMatch> {
        Some(SearchMatch { score, ranges: vec![MatchRange { start: 0, end: 1 }] })
    }

    fn search(item: MaybeUsedCharacter, name: Option<SearchMatch>, codepoint: Option<SearchMatch>) -> CharacterSearch<MaybeUsedCharacter> {
        CharacterSearch { item, matched: CharacterMatch { codepoint, name } }
    }

    fn codepoints(results: &[CharacterSearchResult<MaybeUsedCharacter>]) -> Vec<char> {
        results.iter().map(|r| r.item.codepoint()).collect()
    }

    #[test]
    fn test_name_score_dominates() {
        let ranked = rank(vec![
            search(used('a', 100, 9), scored(10), scored(100)),
            search(unused('b'), scored(50), None),
            search(unused('c'), None, scored(500)),
        ]);
        assert_eq!(codepoints(&ranked), vec!['b', 'a', 'c']);
    }

    #[test]
    fn test_codepoint_score_breaks_name_ties() {
        let ranked = rank(vec![
            search(unused('a'), scored(10), None),
            search(unused('b'), scored(10), scored(-2)),
            search(unused('c'), scored(10), scored(0)),
        ]);
        assert_eq!(codepoints(&ranked), vec!['c', 'b', 'a']);
    }

    #[test]
    fn test_usage_then_codepoint() {
        let ranked = rank(vec![
            search(unused('a'), None, None),
            search(used('d', 100, 1), None, None),
            search(used('c', 200, 1), None, None),
            search(used('b', 100, 5), None, None),
            search(unused('\u{0}'), None, None),
        ]);
        // recency before frequency among used characters
        assert_eq!(codepoints(&ranked), vec!['c', 'b', 'd', '\u{0}', 'a']);
    }

    #[test]
    fn test_ranking_is_independent_of_input_order() {
        let items = || {
            vec![
                search(unused('z'), None, None),
                search(used('y', 5, 2), None, None),
                search(unused('x'), None, None),
                search(used('w', 5, 2), None, None),
            ]
        };
        let forward = rank(items());
        let mut reversed_input = items();
        reversed_input.reverse();
        let backward = rank(reversed_input);

        assert_eq!(codepoints(&forward), codepoints(&backward));
        assert_eq!(codepoints(&forward), vec!['w', 'y', 'x', 'z']);
    }

    #[test]
    fn test_fill_keeps_present_matches() {
        let result = fill_null_match_scores(search(unused('a'), scored(7), None));
        assert_eq!(result.name, scored(7).unwrap());
        assert_eq!(result.codepoint, SearchMatch { score: 0, ranges: vec![] });
    }
}
