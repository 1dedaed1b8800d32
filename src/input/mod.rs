//! Input pipeline
//! Handles file type detection, text extraction, and caching

pub mod manager;
pub mod text_extractor;
