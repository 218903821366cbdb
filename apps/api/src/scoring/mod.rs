// ATS completeness scoring: rubric, status bands and checklist.

pub mod completeness;
pub mod handlers;
