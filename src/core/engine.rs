// File: src/core/engine.rs
use crate::clock::{Clock, SystemClock};
use crate::core::cache::ReadCache;
use crate::core::ranker::rank;
use crate::core::types::{Character, CharacterSearchResult, MaybeUsedCharacter, UsageInfo, UsageStatistics};
use crate::error::Result;
use crate::fuzzy::combiner::{match_characters, HEX_QUERY_MAX_LEN};
use crate::fuzzy::matcher::{FuzzySearch, SearchPreparer, SimpleSearch};
use crate::learning::{derive_statistics, UsageTracker};
use crate::store::{RootDataStore, Revisions};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub type CharacterList = Arc<Vec<MaybeUsedCharacter>>;

/// The search engine: the filtered character universe joined with usage data,
/// and ranked queries over it.
pub struct CharacterService {
    root: Arc<RootDataStore>,
    characters: Arc<[Character]>,
    clock: Arc<dyn Clock>,
    tracker: UsageTracker,
    codepoint_search: Box<dyn SearchPreparer>,
    name_search: Box<dyn SearchPreparer>,
    hex_query_max_len: usize,
    all: ReadCache<Revisions, CharacterList>,
    used: ReadCache<Revisions, CharacterList>,
    statistics: ReadCache<Revisions, UsageStatistics>,
}

impl CharacterService {
    pub fn new(root: Arc<RootDataStore>, characters: Vec<Character>) -> Self {
        Self {
            root,
            characters: characters.into(),
            clock: Arc::new(SystemClock),
            tracker: UsageTracker::new(),
            codepoint_search: Box::new(SimpleSearch),
            name_search: Box::new(FuzzySearch),
            hex_query_max_len: HEX_QUERY_MAX_LEN,
            all: ReadCache::new(),
            used: ReadCache::new(),
            statistics: ReadCache::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_name_search(mut self, search: Box<dyn SearchPreparer>) -> Self {
        self.name_search = search;
        self
    }

    pub fn with_codepoint_search(mut self, search: Box<dyn SearchPreparer>) -> Self {
        self.codepoint_search = search;
        self
    }

    pub fn with_hex_query_max_len(mut self, max_len: usize) -> Self {
        self.hex_query_max_len = max_len;
        self
    }

    /// Every known character, ignoring the filter.
    pub fn get_all_characters(&self) -> &[Character] {
        &self.characters
    }

    /// The filtered universe, each character paired with its usage if any.
    pub async fn get_all(&self) -> Result<CharacterList> {
        let revisions = self.root.revisions();
        self.all
            .get_value(revisions, || async move {
                let data = self.root.get_save_data().await;
                let filter = data.settings.filter.compile();
                let all: Vec<MaybeUsedCharacter> = self
                    .characters
                    .iter()
                    .filter(|character| filter.includes(character))
                    .map(|character| {
                        MaybeUsedCharacter::new(character.clone(), data.usage.get(&character.codepoint).copied())
                    })
                    .collect();
                tracing::debug!("Recomputed character universe: {} characters", all.len());
                Ok(Arc::new(all))
            })
            .await
    }

    /// The part of [`get_all`](Self::get_all) the user has picked before.
    pub async fn get_used(&self) -> Result<CharacterList> {
        let revisions = self.root.revisions();
        self.used
            .get_value(revisions, || async move {
                let all = self.get_all().await?;
                let used: Vec<MaybeUsedCharacter> =
                    all.iter().filter(|character| character.usage().is_some()).cloned().collect();
                Ok(Arc::new(used))
            })
            .await
    }

    pub async fn usage_statistics(&self) -> Result<UsageStatistics> {
        let revisions = self.root.revisions();
        self.statistics
            .get_value(revisions, || async move {
                let used = self.get_used().await?;
                Ok(derive_statistics(&used))
            })
            .await
    }

    pub async fn record_usage(&self, codepoint: char) -> Result<UsageInfo> {
        let now = self.clock.now();
        let tracker = &self.tracker;
        let info = self
            .root
            .update(|data| Ok(tracker.record_usage(&mut data.usage, codepoint, now)))
            .await?;
        tracing::debug!("Recorded usage of {:04X}: {} uses", codepoint as u32, info.use_count);
        Ok(info)
    }

    /// Records usage in the background. Failures are logged, never returned.
    pub fn record_usage_detached(self: &Arc<Self>, codepoint: char) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = service.record_usage(codepoint).await {
                tracing::error!("Failed to record character usage of {:04X}: {}", codepoint as u32, e);
            }
        })
    }

    /// Ranked matches for `query`. An empty query lists the whole universe.
    pub async fn search(&self, query: &str) -> Result<Vec<CharacterSearchResult<MaybeUsedCharacter>>> {
        let all = self.get_all().await?;
        let matches = match_characters(
            query,
            all.iter().cloned(),
            self.codepoint_search.as_ref(),
            self.name_search.as_ref(),
            self.hex_query_max_len,
        );
        Ok(rank(matches))
    }

    /// Drops every cached value, e.g. after the settings were reinitialized.
    pub async fn invalidate(&self) {
        self.all.invalidate().await;
        self.used.invalidate().await;
        self.statistics.invalidate().await;
    }
}
