use serde::{Deserialize, Serialize};

/// One vocabulary record as stored in the vocabulary file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Headword
    pub phrase: String,
    /// Meaning shown under the headword
    pub interpretation: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(phrase: impl Into<String>, interpretation: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            interpretation: interpretation.into(),
            examples: vec![],
        }
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

/// A chat plus an optional forum topic inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub chat_id: i64,
    pub thread_id: Option<i32>,
}

impl Destination {
    pub fn new(chat_id: i64, thread_id: Option<i32>) -> Self {
        Self { chat_id, thread_id }
    }

    pub fn chat(chat_id: i64) -> Self {
        Self::new(chat_id, None)
    }
}
