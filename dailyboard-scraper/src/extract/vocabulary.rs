use crate::common::error::{Result, ScrapeError};
use crate::fetch::PageDocument;
use dailyboard_core::VocabularyPair;
use tracing::warn;

/// English and Japanese word lists of one source page, in page order. A page
/// that carries neither region fetched fine but is not a word-list page.
pub fn word_lists(doc: &PageDocument) -> Result<(Vec<String>, Vec<String>)> {
    let english = doc.region_texts(".eng");
    let japanese = doc.region_texts(".jap");
    if english.is_empty() && japanese.is_empty() {
        return Err(ScrapeError::RegionNotFound(".eng/.jap word lists".to_string()));
    }
    Ok((english, japanese))
}

/// Zips the concatenated lists positionally, truncating to the shorter one.
pub fn zip_pairs(english: Vec<String>, japanese: Vec<String>) -> Vec<VocabularyPair> {
    if english.len() != japanese.len() {
        warn!(
            "zip_pairs: word lists misaligned ({} english, {} japanese), truncating",
            english.len(),
            japanese.len()
        );
    }
    english
        .into_iter()
        .zip(japanese)
        .map(|(english, japanese)| VocabularyPair { english, japanese })
        .collect()
}
