//! Topic handling module
//!
//! This module provides the two halves of defender topic handling:
//! building the canonical topic string for a thing name and API, and
//! recognizing an arbitrary topic string against the fixed grammar.
//! Both sides consume the shared API table in [`api`].

// Submodules
pub mod api;
pub mod error;
pub mod topic_builder;
pub mod topic_matcher;

#[cfg(test)]
mod api_tests;

// Re-export commonly used types for convenience
pub use api::{DefenderApi, ReportFormat, TOPIC_BRIDGE, TOPIC_PREFIX};
pub use error::{BuildResult, MatchResult, TopicError, TopicResult};
// Re-export constants and validation utilities
pub use error::{limits, validation};
pub use topic_builder::{
	format_topic, topic_length, write_topic, TopicBuildError,
};
pub use topic_matcher::{match_topic, TopicMatch, TopicMatchError};
