//! Match Analyzer — compares a resume against the keywords of a job description.
//!
//! Default: `KeywordMatchScorer` (substring matching, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn MatchScorer>` so the backend can be swapped
//! without touching the handlers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::keywords::extract_keywords;
use crate::models::resume::ResumeRecord;

/// At most this many missing keywords are reported.
pub const MISSING_KEYWORD_LIMIT: usize = 8;
/// Missing keywords named in the "add these skills" suggestion.
pub const SUGGESTED_KEYWORD_COUNT: usize = 3;
/// More matches than this earn the third strength statement.
pub const FULL_STRENGTHS_MATCH_COUNT: usize = 5;

const TAILOR_THRESHOLD: u32 = 60;
const RESKILL_THRESHOLD: u32 = 40;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Display tier for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,   // ≥ 75
    Moderate, // 50 – 74
    Weak,     // < 50
}

impl MatchBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 75 => MatchBand::Strong,
            s if s >= 50 => MatchBand::Moderate,
            _ => MatchBand::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_score: u32, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>, // first MISSING_KEYWORD_LIMIT only
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub band: MatchBand,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the matching backend. Carried in `AppState` as
/// `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn analyze(&self, resume: &ResumeRecord, job_description: &str) -> MatchResult;

    /// Short backend label, used in logs.
    fn backend(&self) -> &'static str;
}

/// Keyword extraction plus substring matching against the flattened resume.
pub struct KeywordMatchScorer;

impl MatchScorer for KeywordMatchScorer {
    fn analyze(&self, resume: &ResumeRecord, job_description: &str) -> MatchResult {
        compute_match(resume, job_description)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core matching algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_match(resume: &ResumeRecord, job_description: &str) -> MatchResult {
    if job_description.trim().is_empty() {
        debug!("Blank job description, returning empty match");
        return build_result(vec![], vec![], 0);
    }

    let keywords = extract_keywords(job_description);
    let resume_text = resume.searchable_text();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .into_iter()
        .partition(|keyword| resume_text.contains(keyword.as_str()));

    let match_score = match_score(matched.len(), matched.len() + missing.len());

    debug!(
        matched = matched.len(),
        missing = missing.len(),
        match_score,
        "Computed job match"
    );

    build_result(matched, missing, match_score)
}

/// Percentage of keywords matched, rounded half up. Zero when there are no
/// keywords at all.
pub fn match_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

fn build_result(matched: Vec<String>, mut missing: Vec<String>, match_score: u32) -> MatchResult {
    let suggestions = build_suggestions(&missing, match_score);
    let strengths = build_strengths(matched.len());
    missing.truncate(MISSING_KEYWORD_LIMIT);

    MatchResult {
        match_score,
        matched_keywords: matched,
        missing_keywords: missing,
        strengths,
        suggestions,
        band: MatchBand::from_score(match_score),
    }
}

fn build_suggestions(missing: &[String], score: u32) -> Vec<String> {
    let mut suggestions = Vec::new();

    if score < TAILOR_THRESHOLD {
        suggestions.push(
            "Consider adding more relevant keywords to your experience descriptions".to_string(),
        );
        suggestions.push("Tailor your professional summary to match the job requirements".to_string());
    }

    if !missing.is_empty() {
        let top: Vec<&str> = missing
            .iter()
            .take(SUGGESTED_KEYWORD_COUNT)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("Add these key skills to your resume: {}", top.join(", ")));
    }

    if score < RESKILL_THRESHOLD {
        suggestions.push("Consider gaining experience in the missing technical skills".to_string());
        suggestions.push(
            "Highlight transferable skills that relate to the job requirements".to_string(),
        );
    }

    suggestions
}

fn build_strengths(matched_count: usize) -> Vec<String> {
    if matched_count == 0 {
        return vec!["Complete your resume to see your strengths".to_string()];
    }

    let take = if matched_count > FULL_STRENGTHS_MATCH_COUNT { 3 } else { 2 };
    [
        format!("Strong match in {matched_count} key areas"),
        "Relevant technical skills identified".to_string(),
        "Good foundation for this role".to_string(),
    ]
    .into_iter()
    .take(take)
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo};

    fn resume_with_summary(summary: &str) -> ResumeRecord {
        ResumeRecord {
            personal: PersonalInfo {
                summary: Some(summary.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_react_developer_example() {
        let resume = resume_with_summary("React TypeScript");
        let jd = "React Developer needed. Must know React, React, TypeScript, and AWS.";

        let result = compute_match(&resume, jd);
        assert_eq!(result.matched_keywords, vec!["react", "typescript"]);
        assert_eq!(result.missing_keywords, vec!["aws"]);
        assert_eq!(result.match_score, 67);
        assert_eq!(result.band, MatchBand::Moderate);
    }

    #[test]
    fn test_empty_description_returns_zero() {
        let resume = resume_with_summary("Rust developer");
        let result = compute_match(&resume, "");
        assert_eq!(result.match_score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(
            result.strengths,
            vec!["Complete your resume to see your strengths"]
        );
    }

    #[test]
    fn test_whitespace_description_matches_keywordless_description() {
        let resume = ResumeRecord::default();
        let blank = compute_match(&resume, "  \n ");
        let keywordless = compute_match(&resume, "Hi there");
        assert_eq!(blank, keywordless);
        assert_eq!(blank.match_score, 0);
        // score 0 triggers both the tailoring and the reskilling suggestions
        assert_eq!(blank.suggestions.len(), 4);
    }

    #[test]
    fn test_all_keywords_present_scores_100() {
        let resume = ResumeRecord {
            experience: vec![ExperienceEntry {
                position: Some("Backend Engineer".to_string()),
                description: Some("Python and Docker services on AWS with SQL".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let jd = "We need Python, Docker, AWS and SQL.";

        let result = compute_match(&resume, jd);
        assert_eq!(result.match_score, 100);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.band, MatchBand::Strong);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_missing_keywords_capped_at_eight() {
        let jd = "javascript react python aws docker kubernetes agile scrum sql graphql vue angular";
        let result = compute_match(&ResumeRecord::default(), jd);
        assert_eq!(result.match_score, 0);
        assert_eq!(result.missing_keywords.len(), MISSING_KEYWORD_LIMIT);
        assert_eq!(result.missing_keywords[0], "javascript");
    }

    #[test]
    fn test_suggestion_names_top_three_missing() {
        let jd = "javascript react python aws";
        let result = compute_match(&ResumeRecord::default(), jd);
        assert!(result
            .suggestions
            .contains(&"Add these key skills to your resume: javascript, react, python".to_string()));
    }

    #[test]
    fn test_suggestion_order_for_low_score() {
        let jd = "python docker";
        let result = compute_match(&ResumeRecord::default(), jd);
        assert_eq!(
            result.suggestions,
            vec![
                "Consider adding more relevant keywords to your experience descriptions",
                "Tailor your professional summary to match the job requirements",
                "Add these key skills to your resume: python, docker",
                "Consider gaining experience in the missing technical skills",
                "Highlight transferable skills that relate to the job requirements",
            ]
        );
    }

    #[test]
    fn test_mid_score_skips_reskilling_suggestions() {
        // 1 of 2 keywords matched = 50
        let resume = resume_with_summary("python");
        let result = compute_match(&resume, "python docker");
        assert_eq!(result.match_score, 50);
        assert_eq!(result.suggestions.len(), 3);
        assert!(!result
            .suggestions
            .iter()
            .any(|s| s.contains("transferable")));
    }

    #[test]
    fn test_strengths_two_when_five_or_fewer_matches() {
        let resume = resume_with_summary("python docker aws");
        let result = compute_match(&resume, "python docker aws");
        assert_eq!(
            result.strengths,
            vec![
                "Strong match in 3 key areas",
                "Relevant technical skills identified",
            ]
        );
    }

    #[test]
    fn test_strengths_three_when_more_than_five_matches() {
        let skills = "python docker aws sql graphql react";
        let resume = resume_with_summary(skills);
        let result = compute_match(&resume, skills);
        assert_eq!(result.matched_keywords.len(), 6);
        assert_eq!(result.strengths.len(), 3);
        assert_eq!(result.strengths[0], "Strong match in 6 key areas");
    }

    #[test]
    fn test_strengths_two_at_exactly_five_matches() {
        let skills = "python docker aws sql graphql";
        let resume = resume_with_summary(skills);
        let result = compute_match(&resume, skills);
        assert_eq!(result.matched_keywords.len(), 5);
        assert_eq!(
            result.strengths,
            vec![
                "Strong match in 5 key areas",
                "Relevant technical skills identified",
            ]
        );
    }

    #[test]
    fn test_score_of_exactly_60_skips_tailoring_suggestions() {
        // 3 of 5 keywords matched
        let resume = resume_with_summary("python docker aws");
        let result = compute_match(&resume, "python docker aws sql graphql");
        assert_eq!(result.match_score, 60);
        assert_eq!(
            result.suggestions,
            vec!["Add these key skills to your resume: sql, graphql"]
        );
    }

    #[test]
    fn test_score_of_exactly_40_skips_reskilling_suggestions() {
        // 2 of 5 keywords matched
        let resume = resume_with_summary("python aws");
        let result = compute_match(&resume, "python docker aws sql graphql");
        assert_eq!(result.match_score, 40);
        assert_eq!(
            result.suggestions,
            vec![
                "Consider adding more relevant keywords to your experience descriptions",
                "Tailor your professional summary to match the job requirements",
                "Add these key skills to your resume: docker, sql, graphql",
            ]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let resume = resume_with_summary("KUBERNETES expert");
        let result = compute_match(&resume, "Kubernetes");
        assert_eq!(result.matched_keywords, vec!["kubernetes"]);
    }

    #[test]
    fn test_match_score_rounding() {
        assert_eq!(match_score(0, 0), 0);
        assert_eq!(match_score(2, 3), 67);
        assert_eq!(match_score(1, 3), 33);
        assert_eq!(match_score(1, 8), 13); // 12.5 rounds up
        assert_eq!(match_score(5, 5), 100);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(MatchBand::from_score(75), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(74), MatchBand::Moderate);
        assert_eq!(MatchBand::from_score(50), MatchBand::Moderate);
        assert_eq!(MatchBand::from_score(49), MatchBand::Weak);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let resume = resume_with_summary("Agile team lead with Scrum and Git");
        let jd = "Agile team. Scrum master. Team lead with Jira and Jira dashboards.";
        assert_eq!(compute_match(&resume, jd), compute_match(&resume, jd));
    }

    #[test]
    fn test_keyword_scorer_delegates_to_compute_match() {
        let resume = resume_with_summary("React TypeScript");
        let jd = "React React TypeScript AWS";
        let scorer = KeywordMatchScorer;
        assert_eq!(scorer.analyze(&resume, jd), compute_match(&resume, jd));
        assert_eq!(scorer.backend(), "keyword");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = compute_match(&ResumeRecord::default(), "");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matchScore"], 0);
        assert!(json["matchedKeywords"].as_array().unwrap().is_empty());
        assert_eq!(json["band"], "weak");
    }
}
