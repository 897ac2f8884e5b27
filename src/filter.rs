// File: src/filter.rs
//! Which parts of Unicode take part in search.
//!
//! The filter mirrors the reference tables exactly: one entry per block of every
//! plane and one per general category of every group. Entries are never added
//! or removed after construction, only their `included` flags flip.
use crate::core::types::{Character, CodepointInterval};
use crate::error::ConfigurityError;
use crate::unicode::categories::{GeneralCategory, UNICODE_CHARACTER_CATEGORIES};
use crate::unicode::planes::{UnicodeBlock, UNICODE_PLANES_ALL};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const EXCLUDED_CATEGORIES: [&str; 4] = ["Cc", "Cs", "Co", "Cn"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockFilter {
    #[serde(flatten)]
    pub interval: CodepointInterval,
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneFilter {
    #[serde(flatten)]
    pub interval: CodepointInterval,
    pub blocks: Vec<BlockFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub abbreviation: String,
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroupFilter {
    pub abbreviation: String,
    pub categories: Vec<CategoryFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterData {
    pub planes: Vec<PlaneFilter>,
    pub category_groups: Vec<CategoryGroupFilter>,
}

fn block_included_by_default(block: &UnicodeBlock) -> bool {
    !(block.description.contains("Private Use") || block.description.contains("Surrogates"))
}

impl Default for FilterData {
    fn default() -> Self {
        let planes = UNICODE_PLANES_ALL
            .iter()
            .map(|plane| PlaneFilter {
                interval: plane.interval,
                blocks: plane
                    .blocks
                    .iter()
                    .map(|block| BlockFilter {
                        interval: block.interval,
                        included: block_included_by_default(block),
                    })
                    .collect(),
            })
            .collect();

        let category_groups = UNICODE_CHARACTER_CATEGORIES
            .iter()
            .map(|group| CategoryGroupFilter {
                abbreviation: group.abbreviation.to_owned(),
                categories: group
                    .categories
                    .iter()
                    .map(|category| CategoryFilter {
                        abbreviation: category.abbreviation.to_owned(),
                        included: !EXCLUDED_CATEGORIES.contains(&category.abbreviation),
                    })
                    .collect(),
            })
            .collect();

        Self { planes, category_groups }
    }
}

impl FilterData {
    /// Owning plane by containment, then the block by exact interval.
    fn block_position(&self, interval: &CodepointInterval) -> Result<(usize, usize), ConfigurityError> {
        let plane_index = self
            .planes
            .iter()
            .position(|plane| plane.interval.encloses(interval))
            .ok_or(ConfigurityError::UnknownPlane(*interval))?;
        let block_index = self.planes[plane_index]
            .blocks
            .iter()
            .position(|block| block.interval == *interval)
            .ok_or(ConfigurityError::UnknownBlock(*interval))?;
        Ok((plane_index, block_index))
    }

    /// Owning group by the first letter, then the category by full abbreviation.
    fn category_position(&self, abbreviation: &str) -> Result<(usize, usize), ConfigurityError> {
        let group_abbreviation = abbreviation.get(..1).unwrap_or_default();
        let group_index = self
            .category_groups
            .iter()
            .position(|group| !group_abbreviation.is_empty() && group.abbreviation == group_abbreviation)
            .ok_or_else(|| ConfigurityError::UnknownCategoryGroup(abbreviation.to_owned()))?;
        let category_index = self.category_groups[group_index]
            .categories
            .iter()
            .position(|category| category.abbreviation == abbreviation)
            .ok_or_else(|| ConfigurityError::UnknownCategory(abbreviation.to_owned()))?;
        Ok((group_index, category_index))
    }

    pub fn get_block(&self, interval: &CodepointInterval) -> Result<bool, ConfigurityError> {
        let (plane, block) = self.block_position(interval)?;
        Ok(self.planes[plane].blocks[block].included)
    }

    pub fn set_block(&mut self, interval: &CodepointInterval, included: bool) -> Result<(), ConfigurityError> {
        let (plane, block) = self.block_position(interval)?;
        self.planes[plane].blocks[block].included = included;
        Ok(())
    }

    pub fn get_category(&self, abbreviation: &str) -> Result<bool, ConfigurityError> {
        let (group, category) = self.category_position(abbreviation)?;
        Ok(self.category_groups[group].categories[category].included)
    }

    pub fn set_category(&mut self, abbreviation: &str, included: bool) -> Result<(), ConfigurityError> {
        let (group, category) = self.category_position(abbreviation)?;
        self.category_groups[group].categories[category].included = included;
        Ok(())
    }

    /// Checks that the entries match the reference tables one to one.
    pub fn validate(&self) -> Result<(), ConfigurityError> {
        let reference = FilterData::default();
        let mismatch = |what: String| Err(ConfigurityError::FilterMismatch(what));

        if self.planes.len() != reference.planes.len() {
            return mismatch(format!("expected {} planes, found {}", reference.planes.len(), self.planes.len()));
        }
        for (plane, expected) in self.planes.iter().zip(&reference.planes) {
            if plane.interval != expected.interval {
                return mismatch(format!("unexpected plane {}", plane.interval));
            }
            let intervals = plane.blocks.iter().map(|block| block.interval);
            if !intervals.eq(expected.blocks.iter().map(|block| block.interval)) {
                return mismatch(format!("blocks of plane {} differ", plane.interval));
            }
        }

        if self.category_groups.len() != reference.category_groups.len() {
            return mismatch(format!(
                "expected {} category groups, found {}",
                reference.category_groups.len(),
                self.category_groups.len()
            ));
        }
        for (group, expected) in self.category_groups.iter().zip(&reference.category_groups) {
            if group.abbreviation != expected.abbreviation {
                return mismatch(format!("unexpected category group {}", group.abbreviation));
            }
            let abbreviations = group.categories.iter().map(|c| c.abbreviation.as_str());
            if !abbreviations.eq(expected.categories.iter().map(|c| c.abbreviation.as_str())) {
                return mismatch(format!("categories of group {} differ", group.abbreviation));
            }
        }
        Ok(())
    }

    /// Flattens the included blocks and categories for per-character checks.
    pub fn compile(&self) -> CharacterFilter {
        let mut blocks: Vec<CodepointInterval> = self
            .planes
            .iter()
            .flat_map(|plane| &plane.blocks)
            .filter(|block| block.included)
            .map(|block| block.interval)
            .collect();
        blocks.sort_unstable();

        let categories = self
            .category_groups
            .iter()
            .flat_map(|group| &group.categories)
            .filter(|category| category.included)
            .filter_map(|category| category.abbreviation.parse::<GeneralCategory>().ok())
            .collect();

        CharacterFilter { blocks, categories }
    }
}

/// Effective inclusion: the owning block and the general category must both be included.
#[derive(Debug, Clone)]
pub struct CharacterFilter {
    blocks: Vec<CodepointInterval>,
    categories: HashSet<GeneralCategory>,
}

impl CharacterFilter {
    pub fn includes(&self, character: &Character) -> bool {
        self.categories.contains(&character.category) && self.includes_codepoint(character.scalar())
    }

    fn includes_codepoint(&self, codepoint: u32) -> bool {
        let index = self.blocks.partition_point(|block| block.end < codepoint);
        self.blocks.get(index).is_some_and(|block| block.contains(codepoint))
    }
}
