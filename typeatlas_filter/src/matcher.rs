// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typo-tolerant scoring of a query against a sample's text fields.
//!
//! Fields and queries are lowercased before they get here. Scores are fixed
//! rungs rather than a continuous measure: ranking only needs a stable
//! "better kind of match beats worse kind of match" order.

use alloc::string::String;
use alloc::vec::Vec;

const SCORE_EXACT: f64 = 1.0;
const SCORE_PREFIX: f64 = 0.92;
const SCORE_SUBSTRING: f64 = 0.84;
const SCORE_TYPO_BASE: f64 = 0.72;
const SCORE_TYPO_STEP: f64 = 0.08;
const SCORE_SUBSEQUENCE: f64 = 0.5;

/// Scores `query` against all of a sample's fields, best field wins.
///
/// Returns `None` when no field matches within tolerance. `query` must be
/// non-empty and lowercased.
pub(crate) fn score_fields(query: &str, fields: &[String]) -> Option<f64> {
    fields
        .iter()
        .filter_map(|field| score_field(query, field))
        .max_by(f64::total_cmp)
}

fn score_field(query: &str, field: &str) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    if field == query {
        return Some(SCORE_EXACT);
    }
    if field.starts_with(query) {
        return Some(SCORE_PREFIX);
    }
    if field.contains(query) {
        return Some(SCORE_SUBSTRING);
    }
    if let Some(dist) = best_token_distance(query, field) {
        return Some(SCORE_TYPO_BASE - SCORE_TYPO_STEP * dist as f64);
    }
    if is_subsequence(query, field) {
        return Some(SCORE_SUBSEQUENCE);
    }
    None
}

/// Edit-distance tolerance: one edit for short needles, two for longer ones.
fn max_edits(len: usize) -> usize {
    if len <= 4 { 1 } else { 2 }
}

/// Minimal edit distance between the query and any whitespace token of the
/// field (or the whole field), within tolerance.
fn best_token_distance(query: &str, field: &str) -> Option<usize> {
    let limit = max_edits(query.chars().count());
    let mut best: Option<usize> = None;
    for token in field.split_whitespace().chain(core::iter::once(field)) {
        if let Some(dist) = levenshtein_within(query, token, limit) {
            if dist > 0 && best.is_none_or(|b| dist < b) {
                best = Some(dist);
            }
        }
    }
    best
}

/// Bounded Levenshtein distance; `None` when the distance exceeds `limit`.
fn levenshtein_within(a: &str, b: &str, limit: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > limit {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = Vec::new();
    curr.resize(b.len() + 1, 0);

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > limit {
            return None;
        }
        core::mem::swap(&mut prev, &mut curr);
    }

    let dist = prev[b.len()];
    (dist <= limit).then_some(dist)
}

/// Returns `true` if the characters of `needle` appear in order in `haystack`.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = needle.chars();
    let Some(mut want) = chars.next() else {
        return true;
    };
    for ch in haystack.chars() {
        if ch == want {
            match chars.next() {
                Some(next) => want = next,
                None => return true,
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::{is_subsequence, levenshtein_within, score_field, score_fields};

    #[test]
    fn exact_beats_prefix_beats_substring() {
        let exact = score_field("lora", "lora").unwrap();
        let prefix = score_field("lora", "lora display").unwrap();
        let substring = score_field("ora", "lora").unwrap();
        assert!(exact > prefix);
        assert!(prefix > substring);
    }

    #[test]
    fn single_typo_matches() {
        // "hamburg" vs "hambrug": transposed letters, distance 2.
        let score = score_field("hambrug", "hamburgerfont");
        assert!(score.is_none());
        let score = score_field("hambrug", "hamburg").unwrap();
        assert!(score > 0.0);
    }

    #[test]
    fn typo_tolerance_scales_with_length() {
        // Needle of 4 chars tolerates one edit, not two.
        assert!(score_field("abcd", "abcx").is_some());
        assert!(score_field("abcd", "abxy").is_none());
        // Longer needles tolerate two.
        assert!(score_field("garamond", "garamind").is_some());
        assert!(score_field("garamond", "garamixd").is_some());
    }

    #[test]
    fn token_level_typos_match_inside_multi_word_fields() {
        let score = score_field("cyreal", "fonts by cyrael");
        assert!(score.is_some());
    }

    #[test]
    fn subsequence_is_weakest_match() {
        let sub = score_field("ltr", "letterform").unwrap();
        let typo = score_field("letterfrom", "letterform").unwrap();
        assert!(sub < typo);
    }

    #[test]
    fn unrelated_strings_do_not_match() {
        assert!(score_field("zzqx", "garamond").is_none());
    }

    #[test]
    fn best_field_wins() {
        let fields = vec!["garamond".to_string(), "claude garamont".to_string()];
        let score = score_fields("garamond", &fields).unwrap();
        assert_eq!(score, super::SCORE_EXACT);
    }

    #[test]
    fn bounded_levenshtein() {
        assert_eq!(levenshtein_within("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_within("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_within("same", "same", 1), Some(0));
        assert_eq!(levenshtein_within("ab", "abcdef", 2), None);
    }

    #[test]
    fn subsequence_ordering() {
        assert!(is_subsequence("itr", "inter"));
        assert!(!is_subsequence("rti", "inter"));
        assert!(is_subsequence("", "anything"));
    }
}
