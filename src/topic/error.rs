//! Error types and utilities for the topic module
//!
//! This module contains the composite error type and shared constants
//! for the entire topic module, while individual error types remain
//! in their respective modules.

use thiserror::Error;

use super::topic_builder::TopicBuildError;
use super::topic_matcher::TopicMatchError;

/// Comprehensive error type for all topic operations
///
/// This enum aggregates the builder and matcher errors, providing a
/// single error type for callers that mix both operations while
/// keeping the detailed error information from each submodule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
	/// Topic construction error
	#[error("Topic build error: {0}")]
	Build(#[from] TopicBuildError),

	/// Topic recognition error
	#[error("Topic match error: {0}")]
	Match(#[from] TopicMatchError),
}

/// Convenient Result type for mixed topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Convenient Result type for builder operations
pub type BuildResult<T> = Result<T, TopicBuildError>;

/// Convenient Result type for matcher operations
pub type MatchResult<T> = Result<T, TopicMatchError>;

/// Topic processing limits and constants
pub mod limits {
	use crate::topic::api::{TOPIC_BRIDGE, TOPIC_PREFIX};

	/// Maximum thing name length accepted by AWS IoT Core.
	pub const THING_NAME_MAX_LENGTH: usize = 128;

	/// Length of the longest topic the builder can produce: a
	/// maximum-length thing name with the longest format/suffix tail.
	pub const MAX_TOPIC_LENGTH: usize = TOPIC_PREFIX.len()
		+ THING_NAME_MAX_LENGTH
		+ TOPIC_BRIDGE.len()
		+ "cbor/accepted".len();
}

/// Validation utilities for topic operations
pub mod validation {
	use super::limits::THING_NAME_MAX_LENGTH;
	use super::TopicBuildError;

	/// Validates a thing name for topic construction.
	///
	/// The name must be non-empty and at most
	/// [`THING_NAME_MAX_LENGTH`] bytes long. The matcher deliberately
	/// does not apply this check; only construction does.
	pub fn validate_thing_name(
		thing_name: &str,
	) -> Result<(), TopicBuildError> {
		let length = thing_name.len();
		if length == 0 || length > THING_NAME_MAX_LENGTH {
			return Err(TopicBuildError::invalid_thing_name(length));
		}

		Ok(())
	}
}
