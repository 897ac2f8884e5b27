// File: src/unicode/ucd.rs
//! Loads the character universe from `UnicodeData.txt`.
//!
//! Parsing the full file takes a noticeable moment, so the parsed table can be
//! stored as a compact bincode snapshot next to the persisted settings.
use crate::core::types::Character;
use crate::error::{StorageError, UcdError};
use crate::unicode::categories::GeneralCategory;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

const SNAPSHOT_VERSION: u32 = 2;

/// Range entries expanded with algorithmic names. Others are skipped.
const NAMED_RANGES: &[(&str, &str)] = &[
    ("CJK Ideograph", "CJK UNIFIED IDEOGRAPH-"),
    ("Tangut Ideograph", "TANGUT IDEOGRAPH-"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterTable {
    pub characters: Vec<Character>,
}

/// Identifies the `UnicodeData.txt` a snapshot was parsed from.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct SourceStamp {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceStamp {
    fn of(source: &Path) -> Result<Self, StorageError> {
        let metadata = fs::metadata(source)?;
        Ok(Self {
            path: fs::canonicalize(source)?,
            len: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    source: SourceStamp,
    table: CharacterTable,
}

struct Entry<'a> {
    codepoint: u32,
    name: &'a str,
    category: GeneralCategory,
    unicode_1_name: &'a str,
}

fn parse_entry(line_number: usize, line: &str) -> Result<Entry<'_>, UcdError> {
    let malformed = |reason: String| UcdError::Malformed { line: line_number, reason };
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() < 15 {
        return Err(malformed(format!("expected 15 fields, found {}", fields.len())));
    }

    let codepoint = u32::from_str_radix(fields[0], 16)
        .map_err(|e| malformed(format!("bad codepoint `{}`: {}", fields[0], e)))?;
    let category = fields[2].parse::<GeneralCategory>().map_err(malformed)?;

    Ok(Entry { codepoint, name: fields[1], category, unicode_1_name: fields[10] })
}

/// Parses UnicodeData.txt content. Entries that can't be represented as a
/// named `char` (surrogates, private use, unnamed controls, most ranges) are
/// left out.
pub fn parse_unicode_data(content: &str) -> Result<CharacterTable, UcdError> {
    let mut characters = Vec::new();
    // (line, first codepoint, range label) of an open `<..., First>` entry
    let mut open_range: Option<(usize, u32, String)> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry = parse_entry(line_number, line)?;

        if let Some(label) = entry.name.strip_suffix(", First>") {
            if open_range.is_some() {
                return Err(UcdError::UnpairedRange(line_number));
            }
            let label = label.trim_start_matches('<').to_owned();
            open_range = Some((line_number, entry.codepoint, label));
            continue;
        }

        if entry.name.ends_with(", Last>") {
            let Some((_, start, label)) = open_range.take() else {
                return Err(UcdError::UnpairedRange(line_number));
            };
            expand_range(&mut characters, &label, start, entry.codepoint, entry.category);
            continue;
        }

        if let Some((start_line, _, _)) = open_range {
            return Err(UcdError::UnpairedRange(start_line));
        }

        let name = if entry.name == "<control>" { entry.unicode_1_name } else { entry.name };
        if name.is_empty() || name.starts_with('<') {
            continue;
        }
        match char::from_u32(entry.codepoint) {
            Some(codepoint) => characters.push(Character::new(codepoint, name, entry.category)),
            None => tracing::warn!("Skipping invalid scalar value {:04X}", entry.codepoint),
        }
    }

    if let Some((start_line, _, _)) = open_range {
        return Err(UcdError::UnpairedRange(start_line));
    }

    tracing::debug!("Parsed {} characters from UnicodeData", characters.len());
    Ok(CharacterTable { characters })
}

fn expand_range(
    characters: &mut Vec<Character>,
    label: &str,
    start: u32,
    end: u32,
    category: GeneralCategory,
) {
    let Some((_, prefix)) = NAMED_RANGES.iter().find(|(range, _)| label.starts_with(range)) else {
        tracing::debug!("Skipping unnamed range {} {:04X}..{:04X}", label, start, end);
        return;
    };
    characters.extend((start..=end).filter_map(char::from_u32).map(|codepoint| {
        Character::new(codepoint, format!("{}{:04X}", prefix, codepoint as u32), category)
    }));
}

pub fn load_unicode_data(path: &Path) -> crate::error::Result<CharacterTable> {
    let content = fs::read_to_string(path).map_err(StorageError::from)?;
    Ok(parse_unicode_data(&content)?)
}

/// Stores `table`, parsed from `source`, at `path`.
pub fn save_snapshot(table: &CharacterTable, source: &Path, path: &Path) -> Result<(), StorageError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        source: SourceStamp::of(source)?,
        table: table.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &snapshot)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;

    temp_file.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

/// Returns `None` when the snapshot was written by an incompatible version,
/// or when `source` is not the file it was parsed from or has changed since.
pub fn load_snapshot(path: &Path, source: &Path) -> Result<Option<CharacterTable>, StorageError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = bincode::deserialize_from(reader)
        .map_err(|e| StorageError::Deserialization(e.to_string()))?;

    if snapshot.version != SNAPSHOT_VERSION {
        tracing::warn!("Ignoring character snapshot version {}", snapshot.version);
        return Ok(None);
    }
    if snapshot.source != SourceStamp::of(source)? {
        tracing::debug!("Character snapshot {:?} is stale for {:?}", path, source);
        return Ok(None);
    }
    Ok(Some(snapshot.table))
}
