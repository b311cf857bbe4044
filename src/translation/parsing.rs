/*!
 * Extraction of word-alignment pairs from model output.
 *
 * Models are asked for a JSON array of {source, target} objects but routinely
 * wrap it in prose. The parser locates the array, parses it leniently, and
 * degrades to an empty list on any failure: word pairs are an enhancement,
 * never worth failing a translation over.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A source/target word or phrase alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Word or phrase in the source text
    pub source: String,

    /// Corresponding word or phrase in the translation
    pub target: String,
}

// Greedy: spans from the first '[{' to the last '}]' so that prose around the
// array never truncates it.
static JSON_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("valid word-pair regex"));

/// Extract word pairs from raw model output.
///
/// Returns an empty list when no JSON array is present, when the array does
/// not parse, or when no entry passes validation. Never returns an error.
/// Entries keep their source order and are not deduplicated.
pub fn parse_word_pairs(model_output: &str) -> Vec<WordPair> {
    let Some(json_match) = JSON_ARRAY.find(model_output) else {
        return Vec::new();
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(json_match.as_str().trim()) {
        Ok(values) => values,
        Err(e) => {
            debug!("Ignoring unparsable word-pair array: {}", e);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .filter_map(|value| {
            let source = value.get("source")?.as_str()?;
            let target = value.get("target")?.as_str()?;
            if source.trim().is_empty() || target.trim().is_empty() {
                return None;
            }
            Some(WordPair {
                source: source.to_string(),
                target: target.to_string(),
            })
        })
        .collect()
}
