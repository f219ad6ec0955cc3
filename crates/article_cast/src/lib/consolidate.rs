//! # Article Consolidation
//!
//! This module reduces the per-page output of a crawl into the single clean
//! text handed to the narration model, and bounds its size for prompting.

use itertools::Itertools;

use crate::crawl::CrawlResult;

/// Separator placed between page texts in the consolidated article.
pub const PAGE_DELIMITER: &str = "\n\n---\n\n";

/// Joins the usable page texts of a crawl, in the crawler's reported order.
///
/// A page contributes only if it carries text and that text is non-empty
/// after trimming surrounding whitespace. A crawl with no usable pages
/// yields an empty string.
pub fn consolidate_pages(result: &CrawlResult) -> String {
    result
        .pages
        .values()
        .filter_map(|page| page.text_content.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .join(PAGE_DELIMITER)
}

/// Returns the prefix of `text` holding at most `max_chars` characters.
///
/// Characters are counted as Unicode scalar values, not bytes, so multi-byte
/// content is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
