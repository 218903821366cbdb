// Job-description matching: keyword extraction, resume matching, suggestions.
// `analyzer` and `keywords` are synchronous and perform no I/O.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
