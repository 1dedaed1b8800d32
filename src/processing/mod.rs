//! Scoring pipeline: document wrappers, category analyzers, aggregation

pub mod analyzer;
pub mod document;
pub mod education;
pub mod experience;
pub mod explain;
pub mod format;
pub mod improvements;
pub mod keywords;
pub mod skills;
pub mod vocab;
