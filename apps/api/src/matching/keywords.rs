//! Keyword extraction from job descriptions.
//!
//! A keyword is either a term from the static vocabulary that occurs in the
//! description, or a word repeated often enough to be salient on its own.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum occurrences for a token to count as a frequent word.
pub const MIN_FREQUENCY: usize = 2;
/// Frequent words must be strictly longer than this.
pub const MIN_FREQUENT_WORD_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    Methodology,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabularyEntry {
    pub keyword: &'static str,
    pub category: KeywordCategory,
}

use KeywordCategory::{Methodology, SoftSkill, Technical};

/// Domain vocabulary, matched as plain substrings of the lower-cased text.
/// Order matters: it is the order keywords are reported in.
pub const VOCABULARY: &[(&str, KeywordCategory)] = &[
    ("javascript", Technical),
    ("react", Technical),
    ("node.js", Technical),
    ("python", Technical),
    ("aws", Technical),
    ("docker", Technical),
    ("kubernetes", Technical),
    ("project management", Methodology),
    ("leadership", SoftSkill),
    ("team collaboration", SoftSkill),
    ("agile", Methodology),
    ("scrum", Methodology),
    ("problem solving", SoftSkill),
    ("communication", SoftSkill),
    ("analytical", SoftSkill),
    ("strategic planning", SoftSkill),
    ("data analysis", Technical),
    ("machine learning", Technical),
    ("artificial intelligence", Technical),
    ("sql", Technical),
    ("git", Technical),
    ("ci/cd", Methodology),
    ("testing", Methodology),
    ("debugging", Technical),
    ("optimization", Technical),
    ("scalability", Technical),
    ("html", Technical),
    ("css", Technical),
    ("typescript", Technical),
    ("angular", Technical),
    ("vue", Technical),
    ("mongodb", Technical),
    ("postgresql", Technical),
    ("rest api", Technical),
    ("graphql", Technical),
    ("microservices", Technical),
    ("cloud computing", Technical),
    ("devops", Methodology),
];

// Maximal runs of ASCII word characters, three or longer.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]{3,}").expect("word pattern is valid"));

pub fn vocabulary() -> Vec<VocabularyEntry> {
    VOCABULARY
        .iter()
        .map(|&(keyword, category)| VocabularyEntry { keyword, category })
        .collect()
}

/// Vocabulary terms present in `text`, in vocabulary order.
/// `text` must already be lower-cased.
fn vocabulary_hits(text: &str) -> impl Iterator<Item = &'static str> + '_ {
    VOCABULARY
        .iter()
        .map(|(keyword, _)| *keyword)
        .filter(move |keyword| text.contains(*keyword))
}

/// Tokens seen at least `MIN_FREQUENCY` times and longer than
/// `MIN_FREQUENT_WORD_LEN`, in order of first appearance.
/// `text` must already be lower-cased.
pub fn frequent_words(text: &str) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for m in WORD_RE.find_iter(text) {
        let count = counts.entry(m.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(m.as_str());
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|word| counts[word] >= MIN_FREQUENCY && word.len() > MIN_FREQUENT_WORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Extracts the keyword set of a job description.
///
/// Vocabulary hits come first, then frequent words; duplicates keep their
/// first position.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let text = job_description.to_lowercase();
    let mut seen = HashSet::new();

    vocabulary_hits(&text)
        .map(str::to_string)
        .chain(frequent_words(&text))
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}
