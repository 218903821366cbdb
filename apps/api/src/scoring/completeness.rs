//! ATS completeness scoring — a fixed rubric over a resume record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::{char_len, present, ResumeRecord};

pub const MAX_SCORE: u32 = 100;
pub const EXCELLENT_THRESHOLD: u32 = 80;
pub const GOOD_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl CompletenessStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= EXCELLENT_THRESHOLD => CompletenessStatus::Excellent,
            s if s >= GOOD_THRESHOLD => CompletenessStatus::Good,
            _ => CompletenessStatus::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletenessStatus::Excellent => "Excellent",
            CompletenessStatus::Good => "Good",
            CompletenessStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub description: String,
    pub satisfied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessResult {
    pub score: u32,
    pub status: CompletenessStatus,
    pub checklist: Vec<ChecklistItem>,
}

/// One line of the rubric. Points are awarded when `check` holds.
pub struct RubricRule {
    pub name: &'static str,
    pub points: u32,
    pub check: fn(&ResumeRecord) -> bool,
}

pub const RUBRIC: &[RubricRule] = &[
    RubricRule {
        name: "full_name",
        points: 10,
        check: |r| {
            present(&r.personal.first_name).is_some() && present(&r.personal.last_name).is_some()
        },
    },
    RubricRule {
        name: "email",
        points: 10,
        check: |r| present(&r.personal.email).is_some(),
    },
    RubricRule {
        name: "phone",
        points: 10,
        check: |r| present(&r.personal.phone).is_some(),
    },
    RubricRule {
        name: "summary",
        points: 15,
        check: |r| char_len(&r.personal.summary) > 50,
    },
    RubricRule {
        name: "experience",
        points: 20,
        check: |r| !r.experience.is_empty(),
    },
    RubricRule {
        name: "experience_detail",
        points: 15,
        check: |r| r.experience.iter().any(|e| char_len(&e.description) > 100),
    },
    RubricRule {
        name: "education",
        points: 10,
        check: |r| !r.education.is_empty(),
    },
    RubricRule {
        name: "skills",
        points: 10,
        check: |r| r.skills.len() >= 5,
    },
];

/// Checklist items, most impactful first. Each predicate sees the record
/// and the already computed score.
const CHECKLIST: &[(&str, fn(&ResumeRecord, u32) -> bool)] = &[
    ("Add more keywords relevant to your industry", |_, score| score >= 60),
    ("Include quantifiable achievements", |_, score| score >= 70),
    ("Complete all contact information", |r, _| {
        present(&r.personal.email).is_some() && present(&r.personal.phone).is_some()
    }),
    ("Add a professional summary", |r, _| present(&r.personal.summary).is_some()),
    ("Include at least 5 relevant skills", |r, _| r.skills.len() >= 5),
];

pub fn compute_completeness(resume: &ResumeRecord) -> CompletenessResult {
    let satisfied: Vec<&RubricRule> = RUBRIC
        .iter()
        .filter(|rule| (rule.check)(resume))
        .collect();
    let raw: u32 = satisfied.iter().map(|rule| rule.points).sum();
    let score = raw.min(MAX_SCORE);

    let checklist = CHECKLIST
        .iter()
        .map(|(description, check)| ChecklistItem {
            description: description.to_string(),
            satisfied: check(resume, score),
        })
        .collect();

    let status = CompletenessStatus::from_score(score);
    debug!(
        score,
        status = status.label(),
        rules = ?satisfied.iter().map(|rule| rule.name).collect::<Vec<_>>(),
        "Computed completeness score"
    );

    CompletenessResult {
        score,
        status,
        checklist,
    }
}
