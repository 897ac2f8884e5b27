use chrono::{DateTime, Duration, TimeZone, Utc};
use search_core::clock::ManualClock;
use search_core::core::types::{Character, CodepointInterval, MatchRange, SearchMatch};
use search_core::error::{ConfigurityError, Error};
use search_core::persistence::{FileDataStore, MemoryDataStore, SaveData};
use search_core::unicode::categories::{GeneralCategory, UNICODE_CHARACTER_CATEGORIES};
use search_core::{CharacterService, DataInitializer, RootDataStore, SettingsStore};
use std::sync::Arc;

const ARROWS: CodepointInterval = CodepointInterval::new(0x2190, 0x21FF);

fn start() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn characters() -> Vec<Character> {
    vec![
        Character::new('a', "LATIN SMALL LETTER A", GeneralCategory::LowercaseLetter),
        Character::new('A', "LATIN CAPITAL LETTER A", GeneralCategory::UppercaseLetter),
        Character::new('B', "LATIN CAPITAL LETTER B", GeneralCategory::UppercaseLetter),
        Character::new('\u{00AD}', "SOFT HYPHEN", GeneralCategory::Format),
        Character::new('\u{2192}', "RIGHTWARDS ARROW", GeneralCategory::MathSymbol),
        Character::new('\u{1F600}', "GRINNING FACE", GeneralCategory::OtherSymbol),
    ]
}

struct Harness {
    backend: Arc<MemoryDataStore>,
    settings: SettingsStore,
    service: Arc<CharacterService>,
    clock: Arc<ManualClock>,
}

async fn harness() -> Harness {
    let backend = Arc::new(MemoryDataStore::new());
    let root = Arc::new(RootDataStore::open(backend.clone()).await.unwrap());
    let clock = Arc::new(ManualClock::new(start()));
    let service = Arc::new(CharacterService::new(root.clone(), characters()).with_clock(clock.clone()));
    DataInitializer::new(root.clone(), service.clone())
        .initialize_data()
        .await
        .unwrap();
    Harness { backend, settings: SettingsStore::new(root), service, clock }
}

#[tokio::test]
async fn test_empty_query_lists_used_then_by_codepoint() {
    let h = harness().await;
    h.service.record_usage('\u{2192}').await.unwrap();
    h.clock.advance(Duration::minutes(5));
    h.service.record_usage('\u{1F600}').await.unwrap();

    let results = h.service.search("").await.unwrap();
    let order: Vec<char> = results.iter().map(|result| result.item.codepoint()).collect();
    assert_eq!(order, vec!['\u{1F600}', '\u{2192}', 'A', 'B', 'a', '\u{00AD}']);
    for result in &results {
        assert_eq!(result.codepoint, SearchMatch::default());
        assert_eq!(result.name, SearchMatch::default());
    }
}

#[tokio::test]
async fn test_short_hex_query_matches_codepoints() {
    let h = harness().await;
    let results = h.service.search("41").await.unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.item.codepoint(), 'A');
    assert_eq!(result.codepoint.score, -2);
    assert_eq!(result.codepoint.ranges, vec![MatchRange { start: 2, end: 4 }]);
    assert_eq!(result.name, SearchMatch::default());
}

#[tokio::test]
async fn test_name_match_outranks_codepoint_only_match() {
    let backend = Arc::new(MemoryDataStore::new());
    let root = Arc::new(RootDataStore::open(backend).await.unwrap());
    let service = Arc::new(CharacterService::new(
        root.clone(),
        vec![
            Character::new('A', "LATIN CAPITAL LETTER A", GeneralCategory::UppercaseLetter),
            Character::new('\u{4E41}', "CJK UNIFIED IDEOGRAPH-4E41", GeneralCategory::OtherLetter),
        ],
    ));
    DataInitializer::new(root, service.clone()).initialize_data().await.unwrap();

    let results = service.search("41").await.unwrap();
    let order: Vec<char> = results.iter().map(|result| result.item.codepoint()).collect();
    assert_eq!(order, vec!['\u{4E41}', 'A']);
    assert!(results[0].name.score > 0);
    assert_eq!(results[0].codepoint.score, -2);
    assert_eq!(results[1].name, SearchMatch::default());
    assert_eq!(results[1].codepoint.score, -2);
}

#[tokio::test]
async fn test_name_query_finds_by_name_only() {
    let h = harness().await;
    let results = h.service.search("arrow").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.codepoint(), '\u{2192}');
    assert!(results[0].name.score > 0);
    assert!(!results[0].name.ranges.is_empty());
}

#[tokio::test]
async fn test_excluding_category_group_removes_its_characters() {
    let h = harness().await;
    assert!(h.service.get_all().await.unwrap().iter().any(|c| c.codepoint() == '\u{00AD}'));

    let control = UNICODE_CHARACTER_CATEGORIES.iter().find(|group| group.abbreviation == "C").unwrap();
    for category in control.categories {
        h.settings.set_character_category(category.abbreviation, false).await.unwrap();
    }

    let all = h.service.get_all().await.unwrap();
    assert_eq!(all.len(), characters().len() - 1);
    assert!(all.iter().all(|c| c.character().category.group_abbreviation() != "C"));
}

#[tokio::test]
async fn test_excluded_block_drops_out_of_search() {
    let h = harness().await;
    assert_eq!(h.service.search("arrow").await.unwrap().len(), 1);

    h.settings.set_character_block(&ARROWS, false).await.unwrap();
    assert!(!h.settings.get_character_block(&ARROWS).await.unwrap());
    assert!(h.service.search("arrow").await.unwrap().is_empty());
    assert_eq!(h.service.get_all_characters().len(), characters().len());
}

#[tokio::test]
async fn test_unknown_plane_is_rejected() {
    let h = harness().await;
    let err = h
        .settings
        .get_character_block(&CodepointInterval::new(0x40000, 0x4007F))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configurity(ConfigurityError::UnknownPlane(_))));
}

#[tokio::test]
async fn test_recording_twice_counts_both_uses() {
    let h = harness().await;
    let first = h.service.record_usage('B').await.unwrap();
    assert_eq!(first.use_count, 1);
    assert_eq!(first.last_used, start());

    h.clock.advance(Duration::seconds(30));
    let second = h.service.record_usage('B').await.unwrap();
    assert_eq!(second.use_count, 2);
    assert_eq!(second.last_used, start() + Duration::seconds(30));

    let persisted = h.backend.snapshot().unwrap();
    assert_eq!(persisted.usage.get(&'B'), Some(&second));

    let used = h.service.get_used().await.unwrap();
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].usage(), Some(&second));
}

#[tokio::test]
async fn test_statistics_without_usage() {
    let h = harness().await;
    let statistics = h.service.usage_statistics().await.unwrap();
    assert_eq!(statistics.top_third_recently_used, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(statistics.average_use_count, 0.0);
}

#[tokio::test]
async fn test_statistics_follow_new_usage() {
    let h = harness().await;
    for (offset, codepoint) in ['a', 'A', 'B', 'a'].into_iter().enumerate() {
        h.clock.set(start() + Duration::minutes(offset as i64));
        h.service.record_usage(codepoint).await.unwrap();
    }

    let statistics = h.service.usage_statistics().await.unwrap();
    // three used characters: the top third is the single newest use
    assert_eq!(statistics.top_third_recently_used, start() + Duration::minutes(3));
    assert!((statistics.average_use_count - 4.0 / 3.0).abs() < f64::EPSILON);

    let used = h.service.get_used().await.unwrap();
    let small_a = used.iter().find(|c| c.codepoint() == 'a').unwrap();
    let capital_b = used.iter().find(|c| c.codepoint() == 'B').unwrap();
    assert!(statistics.is_recent(small_a) && statistics.is_frequent(small_a));
    assert!(!statistics.is_recent(capital_b) && !statistics.is_frequent(capital_b));
}

#[tokio::test]
async fn test_detached_recording_failure_is_not_propagated() {
    let h = harness().await;
    h.backend.set_fail_writes(true);

    h.service.record_usage_detached('A').await.unwrap();
    assert!(h.service.get_used().await.unwrap().is_empty());

    h.backend.set_fail_writes(false);
    h.service.record_usage_detached('A').await.unwrap();
    assert_eq!(h.service.get_used().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_usage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    {
        let root = Arc::new(RootDataStore::open(Arc::new(FileDataStore::new(&path))).await.unwrap());
        let service = Arc::new(CharacterService::new(root.clone(), characters()));
        DataInitializer::new(root, service.clone()).initialize_data().await.unwrap();
        service.record_usage('\u{1F600}').await.unwrap();
    }

    let root = Arc::new(RootDataStore::open(Arc::new(FileDataStore::new(&path))).await.unwrap());
    let service = CharacterService::new(root.clone(), characters());
    let results = service.search("").await.unwrap();
    assert_eq!(results[0].item.codepoint(), '\u{1F600}');
    assert_eq!(root.get_save_data().await.usage.len(), 1);
    assert_ne!(root.get_save_data().await, SaveData::default());
}
