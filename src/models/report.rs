//! Daily report and category grouping

use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::category::Category;
use super::entry::ReportEntry;

/// All backup outcomes for one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The day this report covers
    pub date: NaiveDate,

    /// Entries in the order they appear in the source document
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Create a report for a day
    pub fn new(date: NaiveDate, entries: Vec<ReportEntry>) -> Self {
        Self { date, entries }
    }

    /// An empty report for a day
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Vec::new())
    }

    /// Group this report's entries by category
    pub fn grouped(&self) -> CategoryBuckets<'_> {
        group_by_category(&self.entries)
    }

    /// Position of the first entry with this client
    pub fn position_of_client(&self, client: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.client == client)
    }

    /// Position of an entry borrowed from this report
    ///
    /// Compares by address, so two entries with equal fields stay distinct.
    pub fn position_of(&self, entry: &ReportEntry) -> Option<usize> {
        self.entries.iter().position(|e| std::ptr::eq(e, entry))
    }

    /// Client names that appear more than once
    pub fn duplicate_clients(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            if !seen.insert(entry.client.as_str()) && !duplicates.contains(&entry.client.as_str()) {
                duplicates.push(entry.client.as_str());
            }
        }
        duplicates
    }
}

/// Entries partitioned into the four categories
///
/// Always holds exactly four buckets, one per [`Category`], each preserving
/// the relative order of the source entries. Empty buckets are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBuckets<'a> {
    buckets: [Vec<&'a ReportEntry>; 4],
}

impl<'a> CategoryBuckets<'a> {
    /// Entries in one category
    pub fn get(&self, category: Category) -> &[&'a ReportEntry] {
        &self.buckets[category.index()]
    }

    /// Iterate over all four buckets in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a ReportEntry])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of entries across all buckets
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Number of entries per category
    pub fn counts(&self) -> [usize; 4] {
        [
            self.buckets[0].len(),
            self.buckets[1].len(),
            self.buckets[2].len(),
            self.buckets[3].len(),
        ]
    }

    /// Check if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition entries into the four category buckets
pub fn group_by_category(entries: &[ReportEntry]) -> CategoryBuckets<'_> {
    let mut buckets = CategoryBuckets::default();
    for entry in entries {
        buckets.buckets[entry.category().index()].push(entry);
    }
    buckets
}

impl Serialize for CategoryBuckets<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, entries) in self.iter() {
            map.serialize_entry(category.key(), entries)?;
        }
        map.end()
    }
}
