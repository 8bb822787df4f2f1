// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::matcher::score_fields;

/// One indexed sample: its key plus lowercased searchable fields.
#[derive(Clone, Debug)]
struct IndexEntry<K> {
    key: K,
    fields: SmallVec<[String; 6]>,
}

/// Result of a filter query.
///
/// `ranked` is ordered best-first and drives the selection auto-follow;
/// `set` is the unordered membership view that gates rendering and hit
/// testing. The two always agree on contents.
#[derive(Clone, Debug)]
pub struct FilterOutput<K> {
    /// Matching keys, best match first.
    pub ranked: Vec<K>,
    /// The same keys as an unordered set.
    pub set: HashSet<K>,
}

impl<K> Default for FilterOutput<K> {
    fn default() -> Self {
        Self {
            ranked: Vec::new(),
            set: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> FilterOutput<K> {
    /// Returns the best-ranked key, if any.
    #[must_use]
    pub fn top(&self) -> Option<&K> {
        self.ranked.first()
    }

    /// Returns `true` if `key` matched.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.set.contains(key)
    }

    /// Number of matching keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Searchable index over all known samples, memoized by map revision.
///
/// The index stores lowercased copies of each sample's text fields. It is
/// rebuilt whenever the sample map changes — callers compare
/// [`SearchIndex::revision`] against their map revision and call
/// [`SearchIndex::rebuild`] before querying — but never per query.
///
/// Samples whose field extraction yields nothing useful (every field empty)
/// are excluded from the index rather than failing the build; a malformed
/// sample silently drops out of search results.
#[derive(Clone, Debug)]
pub struct SearchIndex<K> {
    revision: u64,
    entries: Vec<IndexEntry<K>>,
}

impl<K> Default for SearchIndex<K> {
    fn default() -> Self {
        Self {
            revision: 0,
            entries: Vec::new(),
        }
    }
}

impl<K> SearchIndex<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty index at revision zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            revision: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the sample-map revision this index was built from.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the index is up to date with the given map revision.
    #[must_use]
    pub fn is_current(&self, revision: u64) -> bool {
        self.revision == revision
    }

    /// Number of indexed samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds the index from scratch for the given map revision.
    ///
    /// Each entry provides its key and the flattened text fields to index
    /// (name, family name, alternate family names, publishers, designers).
    /// Empty fields are dropped; entries left with no fields are excluded.
    pub fn rebuild<I, F>(&mut self, revision: u64, entries: I)
    where
        I: IntoIterator<Item = (K, F)>,
        F: IntoIterator<Item = String>,
    {
        self.entries.clear();
        for (key, fields) in entries {
            let fields: SmallVec<[String; 6]> = fields
                .into_iter()
                .filter(|f| !f.trim().is_empty())
                .map(|f| f.to_lowercase())
                .collect();
            if fields.is_empty() {
                continue;
            }
            self.entries.push(IndexEntry { key, fields });
        }
        self.revision = revision;
    }

    /// Runs a query against the index.
    ///
    /// An empty (or whitespace-only) query matches every indexed key in
    /// insertion order. A non-empty query returns typo-tolerant matches
    /// ranked best-first; ties keep insertion order.
    #[must_use]
    pub fn query(&self, raw: &str) -> FilterOutput<K> {
        let query = raw.trim().to_lowercase();
        if query.is_empty() {
            let ranked: Vec<K> = self.entries.iter().map(|e| e.key.clone()).collect();
            let set = ranked.iter().cloned().collect();
            return FilterOutput { ranked, set };
        }

        let mut scored: Vec<(&K, f64)> = self
            .entries
            .iter()
            .filter_map(|entry| score_fields(&query, &entry.fields).map(|s| (&entry.key, s)))
            .collect();
        // Stable sort: equal scores keep index insertion order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let ranked: Vec<K> = scored.into_iter().map(|(k, _)| k.clone()).collect();
        let set = ranked.iter().cloned().collect();
        FilterOutput { ranked, set }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::SearchIndex;

    fn sample_index() -> SearchIndex<&'static str> {
        let mut index = SearchIndex::new();
        index.rebuild(
            1,
            [
                (
                    "inter-regular",
                    vec![
                        "Inter".to_string(),
                        "Inter".to_string(),
                        "Rasmus Andersson".to_string(),
                    ],
                ),
                (
                    "lora-regular",
                    vec!["Lora".to_string(), "Lora".to_string(), "Cyreal".to_string()],
                ),
                (
                    "hamburg-serial",
                    vec!["Hamburg Serial".to_string(), "SoftMaker".to_string()],
                ),
            ],
        );
        index
    }

    #[test]
    fn empty_query_matches_everything() {
        let index = sample_index();
        let out = index.query("");
        assert_eq!(out.len(), 3);
        assert!(out.contains(&"inter-regular"));
        assert!(out.contains(&"lora-regular"));
        assert!(out.contains(&"hamburg-serial"));

        // Whitespace-only behaves like empty.
        assert_eq!(index.query("   ").len(), 3);
    }

    #[test]
    fn exact_name_query_matches_its_sample() {
        let index = sample_index();
        let out = index.query("Hamburg Serial");
        assert!(out.contains(&"hamburg-serial"));
        assert_eq!(out.top(), Some(&"hamburg-serial"));
    }

    #[test]
    fn query_is_case_insensitive() {
        let index = sample_index();
        assert!(index.query("LORA").contains(&"lora-regular"));
        assert!(index.query("lora").contains(&"lora-regular"));
    }

    #[test]
    fn designer_fields_are_searchable() {
        let index = sample_index();
        let out = index.query("rasmus");
        assert_eq!(out.top(), Some(&"inter-regular"));
    }

    #[test]
    fn typo_still_matches() {
        let index = sample_index();
        let out = index.query("hambrug");
        assert!(out.contains(&"hamburg-serial"));
    }

    #[test]
    fn ranked_and_set_agree() {
        let index = sample_index();
        let out = index.query("er");
        assert_eq!(out.ranked.len(), out.set.len());
        for key in &out.ranked {
            assert!(out.set.contains(key));
        }
    }

    #[test]
    fn exact_match_outranks_fuzzy_match() {
        let mut index = SearchIndex::new();
        index.rebuild(
            1,
            [
                ("fuzzy", vec!["Loras".to_string()]),
                ("exact", vec!["Lora".to_string()]),
            ],
        );
        assert_eq!(index.query("lora").top(), Some(&"exact"));
    }

    #[test]
    fn entries_without_usable_fields_are_excluded() {
        let mut index = SearchIndex::new();
        index.rebuild(
            1,
            [
                ("good", vec!["Inter".to_string()]),
                ("malformed", vec![String::new(), "   ".to_string()]),
            ],
        );
        assert_eq!(index.len(), 1);
        assert!(!index.query("").contains(&"malformed"));
    }

    #[test]
    fn rebuild_replaces_contents_and_revision() {
        let mut index = sample_index();
        assert!(index.is_current(1));
        assert!(!index.is_current(2));

        let entries: Vec<(&str, Vec<String>)> = vec![("solo", vec!["Solo".to_string()])];
        index.rebuild(2, entries);
        assert!(index.is_current(2));
        assert_eq!(index.len(), 1);
        assert!(index.query("").contains(&"solo"));
        assert!(!index.query("").contains(&"inter-regular"));
    }

    #[test]
    fn no_match_yields_empty_output() {
        let index = sample_index();
        let out = index.query("qqqqzz");
        assert!(out.is_empty());
        assert_eq!(out.top(), None);
    }
}
