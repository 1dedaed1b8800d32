//! Resume match library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{ResumeMatchError, Result};
pub use processing::analyzer::{analyze, AnalysisResult, MatchEngine};
