// Copyright 2025 the Typeatlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

/// Stable identity key of a font sample (the pipeline's `safe_name`).
///
/// Keys are cheap to clone and hash; they survive map replacement, which is
/// what lets in-flight UI state (selection, open detail panels) ride across
/// refetches.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SampleKey(Arc<str>);

impl SampleKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SampleKey({:?})", &*self.0)
    }
}

impl fmt::Display for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SampleKey {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for SampleKey {
    fn from(value: String) -> Self {
        Self(Arc::from(value.as_str()))
    }
}

/// Output of the external pipeline for one sample, once it has run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Computed {
    /// Position in the 2D embedding space.
    pub vector: (f64, f64),
    /// Cluster label assigned by the pipeline.
    pub cluster_id: u32,
}

/// One font sample as fetched from the external boundary.
///
/// Display attributes are immutable between fetches; `computed` is absent
/// until the pipeline has positioned the sample. Samples are stored behind
/// `Arc` in the map so reconciliation can keep unchanged entries
/// referentially identical across refetches.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSample {
    /// Identity key (`safe_name`).
    pub key: SampleKey,
    /// Full font name shown in the UI.
    pub font_name: String,
    /// Family the font belongs to.
    pub family_name: String,
    /// Alternate family names, if any.
    pub alt_family_names: Vec<String>,
    /// Publishers / foundries.
    pub publishers: Vec<String>,
    /// Designers credited for the font.
    pub designers: Vec<String>,
    /// Weight class (100–900).
    pub weight: u16,
    /// Embedding output, present once the pipeline has run.
    pub computed: Option<Computed>,
}

impl FontSample {
    /// Flattened text fields fed to the search index.
    ///
    /// List-valued fields contribute each of their values. Empty strings are
    /// kept here and dropped by the index; a sample with nothing usable is
    /// simply excluded from search rather than treated as an error.
    #[must_use]
    pub fn search_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(
            2 + self.alt_family_names.len() + self.publishers.len() + self.designers.len(),
        );
        fields.push(self.font_name.clone());
        fields.push(self.family_name.clone());
        fields.extend(self.alt_family_names.iter().cloned());
        fields.extend(self.publishers.iter().cloned());
        fields.extend(self.designers.iter().cloned());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::{Computed, FontSample, SampleKey};

    fn sample(key: &str, font_name: &str) -> FontSample {
        FontSample {
            key: SampleKey::from(key),
            font_name: font_name.to_string(),
            family_name: font_name.to_string(),
            alt_family_names: Vec::new(),
            publishers: Vec::new(),
            designers: Vec::new(),
            weight: 400,
            computed: None,
        }
    }

    #[test]
    fn key_round_trips_through_string() {
        let key = SampleKey::from("inter-regular");
        assert_eq!(key.as_str(), "inter-regular");
        assert_eq!(key.to_string(), "inter-regular");
        assert_eq!(key, SampleKey::from(String::from("inter-regular")));
    }

    #[test]
    fn search_fields_flatten_lists() {
        let mut s = sample("inter-regular", "Inter Regular");
        s.alt_family_names = vec!["Inter Display".to_string()];
        s.publishers = vec!["rsms".to_string()];
        s.designers = vec!["Rasmus Andersson".to_string()];

        let fields = s.search_fields();
        assert_eq!(fields.len(), 5);
        assert!(fields.contains(&"Inter Regular".to_string()));
        assert!(fields.contains(&"Rasmus Andersson".to_string()));
    }

    #[test]
    fn equality_covers_computed_payload() {
        let mut a = sample("lora", "Lora");
        let mut b = sample("lora", "Lora");
        assert_eq!(a, b);

        a.computed = Some(Computed {
            vector: (1.0, 2.0),
            cluster_id: 3,
        });
        assert_ne!(a, b);

        b.computed = a.computed;
        assert_eq!(a, b);
    }
}
