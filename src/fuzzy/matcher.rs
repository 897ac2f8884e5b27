// File: src/fuzzy/matcher.rs
use crate::core::types::{MatchRange, SearchMatch};
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A query compiled once and run against many texts.
pub trait PreparedSearch {
    fn search(&mut self, text: &str) -> Option<SearchMatch>;
}

pub trait SearchPreparer: Send + Sync {
    fn prepare(&self, query: &str) -> Box<dyn PreparedSearch>;
}

/// Fuzzy subsequence matching of character names, backed by nucleo.
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzySearch;

impl SearchPreparer for FuzzySearch {
    fn prepare(&self, query: &str) -> Box<dyn PreparedSearch> {
        Box::new(NucleoSearch {
            pattern: Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
            indices: Vec::new(),
        })
    }
}

struct NucleoSearch {
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
    indices: Vec<u32>,
}

impl PreparedSearch for NucleoSearch {
    fn search(&mut self, text: &str) -> Option<SearchMatch> {
        self.indices.clear();
        let haystack = Utf32Str::new(text, &mut self.buf);
        let score = self.pattern.indices(haystack, &mut self.matcher, &mut self.indices)?;

        // atoms report their indices independently
        self.indices.sort_unstable();
        self.indices.dedup();

        Some(SearchMatch {
            score: i64::from(score),
            ranges: indices_to_ranges(&self.indices),
        })
    }
}

/// Case-insensitive substring matching. An earlier hit scores higher.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleSearch;

impl SearchPreparer for SimpleSearch {
    fn prepare(&self, query: &str) -> Box<dyn PreparedSearch> {
        Box::new(SubstringSearch { needle: query.to_uppercase() })
    }
}

struct SubstringSearch {
    needle: String,
}

impl PreparedSearch for SubstringSearch {
    fn search(&mut self, text: &str) -> Option<SearchMatch> {
        let haystack = text.to_uppercase();
        let byte_start = haystack.find(&self.needle)?;
        let start = haystack[..byte_start].chars().count();
        let end = start + self.needle.chars().count();

        Some(SearchMatch {
            score: -(start as i64),
            ranges: vec![MatchRange { start, end }],
        })
    }
}

/// Merges sorted character positions into half-open runs.
fn indices_to_ranges(indices: &[u32]) -> Vec<MatchRange> {
    let mut ranges: Vec<MatchRange> = Vec::new();
    for &index in indices {
        let index = index as usize;
        match ranges.last_mut() {
            Some(range) if range.end == index => range.end += 1,
            _ => ranges.push(MatchRange { start: index, end: index + 1 }),
        }
    }
    ranges
}
