// File: src/fuzzy/combiner.rs
use crate::core::types::{CharacterMatch, CharacterSearch, MaybeUsedCharacter};
use crate::fuzzy::matcher::{PreparedSearch, SearchPreparer};

/// Longest query still treated as a partial hexadecimal codepoint.
pub const HEX_QUERY_MAX_LEN: usize = 4;

/// Whether the codepoint side is worth attempting for `query`.
pub fn is_hex_safe(query: &str, max_len: usize) -> bool {
    query.chars().count() <= max_len && !query.chars().any(char::is_whitespace)
}

/// Runs one query against characters, on both the codepoint and the name side.
pub struct MatchCombiner {
    codepoint: Option<Box<dyn PreparedSearch>>,
    name: Box<dyn PreparedSearch>,
}

impl MatchCombiner {
    pub fn new(
        query: &str,
        codepoint_search: &dyn SearchPreparer,
        name_search: &dyn SearchPreparer,
        hex_query_max_len: usize,
    ) -> Self {
        let codepoint = is_hex_safe(query, hex_query_max_len).then(|| codepoint_search.prepare(query));
        Self { codepoint, name: name_search.prepare(query) }
    }

    pub fn combine(&mut self, character: &MaybeUsedCharacter) -> CharacterMatch {
        let character = character.character();
        CharacterMatch {
            codepoint: self.codepoint.as_mut().and_then(|search| search.search(&character.hexadecimal())),
            name: self.name.search(&character.name),
        }
    }
}

/// Pairs every character with its match. An empty query keeps everything
/// unscored; otherwise characters matching on neither side are dropped.
pub fn match_characters<I>(
    query: &str,
    characters: I,
    codepoint_search: &dyn SearchPreparer,
    name_search: &dyn SearchPreparer,
    hex_query_max_len: usize,
) -> Vec<CharacterSearch<MaybeUsedCharacter>>
where
    I: IntoIterator<Item = MaybeUsedCharacter>,
{
    if query.is_empty() {
        return characters
            .into_iter()
            .map(|item| CharacterSearch { item, matched: CharacterMatch::unscored() })
            .collect();
    }

    let mut combiner = MatchCombiner::new(query, codepoint_search, name_search, hex_query_max_len);
    characters
        .into_iter()
        .filter_map(|item| {
            let matched = combiner.combine(&item);
            matched.is_match().then_some(CharacterSearch { item, matched })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Character;
    use crate::fuzzy::matcher::{FuzzySearch, SimpleSearch};
    use crate::unicode::categories::GeneralCategory;

    fn universe() -> Vec<MaybeUsedCharacter> {
        vec![
            MaybeUsedCharacter::Unused(Character::new('A', "LATIN CAPITAL LETTER A", GeneralCategory::UppercaseLetter)),
            MaybeUsedCharacter::Unused(Character::new('\u{2192}', "RIGHTWARDS ARROW", GeneralCategory::MathSymbol)),
            MaybeUsedCharacter::Unused(Character::new('\u{1F600}', "GRINNING FACE", GeneralCategory::OtherSymbol)),
        ]
    }

    #[test]
    fn test_hex_safety() {
        assert!(is_hex_safe("41", HEX_QUERY_MAX_LEN));
        assert!(is_hex_safe("1f60", HEX_QUERY_MAX_LEN));
        assert!(!is_hex_safe("1f600", HEX_QUERY_MAX_LEN));
        assert!(!is_hex_safe("a b", HEX_QUERY_MAX_LEN));
        assert!(!is_hex_safe("a\tb", HEX_QUERY_MAX_LEN));
    }

    #[test]
    fn test_empty_query_keeps_everything_unscored() {
        let matches = match_characters("", universe(), &SimpleSearch, &FuzzySearch, HEX_QUERY_MAX_LEN);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.matched == CharacterMatch::unscored()));
    }

    #[test]
    fn test_unmatched_characters_are_dropped() {
        let matches = match_characters("arrow", universe(), &SimpleSearch, &FuzzySearch, HEX_QUERY_MAX_LEN);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].item.codepoint(), '\u{2192}');
        assert!(matches[0].matched.name.is_some());
        // too long for a codepoint
        assert!(matches[0].matched.codepoint.is_none());
    }

    #[test]
    fn test_codepoint_side() {
        let matches = match_characters("41", universe(), &SimpleSearch, &FuzzySearch, HEX_QUERY_MAX_LEN);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].item.codepoint(), 'A');
        assert!(matches[0].matched.codepoint.is_some());
        assert!(matches[0].matched.name.is_none());
    }

    #[test]
    fn test_long_query_skips_codepoint_side() {
        let matches = match_characters("1F600", universe(), &SimpleSearch, &FuzzySearch, HEX_QUERY_MAX_LEN);
        assert!(matches.is_empty());

        let matches = match_characters("1F600", universe(), &SimpleSearch, &FuzzySearch, 5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].item.codepoint(), '\u{1F600}');
    }
}
