pub mod error;
pub mod format;
pub mod preprocess;
pub mod store;
pub mod types;

pub use error::LoadError;
pub use format::{escape_markdown, format_entry};
pub use store::{SearchHits, VocabStore};
pub use types::{Destination, VocabularyEntry};
