use std::path::Path;

use rand::Rng;
use rand::seq::index;

use crate::error::LoadError;
use crate::preprocess::normalize;
use crate::types::VocabularyEntry;

/// Read-only vocabulary collection, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct VocabStore {
    entries: Vec<VocabularyEntry>,
}

/// Result of a phrase search
#[derive(Debug)]
pub struct SearchHits<'a> {
    /// Number of matching entries in the whole collection
    pub total: usize,
    /// First matches in collection order, capped at the requested limit
    pub shown: Vec<&'a VocabularyEntry>,
}

impl VocabStore {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries. Entries with a blank phrase or
    /// meaning are dropped.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let entries: Vec<VocabularyEntry> = serde_json::from_str(json)?;
        let before = entries.len();

        let entries: Vec<_> = entries
            .into_iter()
            .filter(|entry| {
                !entry.phrase.trim().is_empty() && !entry.interpretation.trim().is_empty()
            })
            .collect();

        if entries.len() != before {
            tracing::warn!(
                "Skipped {} vocabulary entries with an empty phrase or meaning",
                before - entries.len()
            );
        }

        Ok(Self { entries })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        tracing::info!("Loading vocabulary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::info!("Loaded {} vocabulary entries", store.len());
        Ok(store)
    }

    /// Like `load_from_file`, but an unreadable file yields an empty store
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::error!("Error loading vocab data from {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Up to `size` distinct entries, uniformly sampled, in random order
    pub fn random_batch<R>(&self, size: usize, rng: &mut R) -> Vec<&VocabularyEntry>
    where
        R: Rng + ?Sized,
    {
        let amount = size.min(self.entries.len());

        index::sample(rng, self.entries.len(), amount)
            .into_iter()
            .map(|i| &self.entries[i])
            .collect()
    }

    /// Case-insensitive substring search over phrases
    pub fn search(&self, query: &str, limit: usize) -> SearchHits<'_> {
        let needle = normalize(query);

        let mut total = 0;
        let mut shown = Vec::new();

        for entry in &self.entries {
            if normalize(&entry.phrase).contains(&needle) {
                total += 1;
                if shown.len() < limit {
                    shown.push(entry);
                }
            }
        }

        SearchHits { total, shown }
    }

    /// Entries on 1-based `page`. Empty when the page is out of range.
    pub fn page(&self, page: usize, page_size: usize) -> &[VocabularyEntry] {
        let Some(start) = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
        else {
            return &[];
        };

        if start >= self.entries.len() {
            return &[];
        }

        let end = start.saturating_add(page_size).min(self.entries.len());
        &self.entries[start..end]
    }
}
