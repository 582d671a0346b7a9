//! Recognition of defender topic strings
//!
//! A left-to-right sequential recognizer over the four grammar
//! segments: prefix, thing name, bridge, format/suffix. Each stage
//! consumes a prefix of the unparsed remainder and rejects the whole
//! topic on the first mismatch; there is no backtracking and no state
//! survives a failure.

use std::fmt;
use std::ops::Range;

use thiserror::Error;
use tracing::debug;

use super::api::{DefenderApi, TOPIC_BRIDGE, TOPIC_PREFIX};
use super::error::MatchResult;

/// Errors that can occur during topic recognition
///
/// Every variant means the input is not a defender topic; the variant
/// names the grammar stage that rejected it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicMatchError {
	/// Topic does not start with `$aws/things/`
	#[error("Topic does not start with the defender prefix '$aws/things/'")]
	PrefixMismatch,

	/// Topic has no thing name after the prefix
	#[error("Topic does not contain a thing name")]
	EmptyThingName,

	/// Topic does not continue with `/defender/metrics/` after the
	/// thing name
	#[error(
		"Topic does not contain the defender bridge '/defender/metrics/'"
	)]
	BridgeMismatch,

	/// Topic tail is not one of the six known format/suffix
	/// combinations
	#[error("Topic does not end with a known report format and suffix")]
	UnknownApi,
}

impl TopicMatchError {
	/// Returns the rejecting grammar stage for categorization
	pub fn error_type(&self) -> &'static str {
		match self {
			| TopicMatchError::PrefixMismatch => "prefix",
			| TopicMatchError::EmptyThingName => "thing_name",
			| TopicMatchError::BridgeMismatch => "bridge",
			| TopicMatchError::UnknownApi => "api",
		}
	}
}

/// Successful recognition of a defender topic.
///
/// Carries the matched API and a view of the thing name borrowed from
/// the input topic string; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicMatch<'t> {
	/// The API the topic addresses
	api: DefenderApi,
	/// Thing name as it appears in the input
	thing_name: &'t str,
}

impl<'t> TopicMatch<'t> {
	/// Returns the matched defender API.
	pub fn api(&self) -> DefenderApi {
		self.api
	}

	/// Returns the thing name embedded in the topic.
	pub fn thing_name(&self) -> &'t str {
		self.thing_name
	}

	/// Returns the byte range of the thing name within the matched
	/// topic string. The start is always the fixed prefix length.
	pub fn thing_name_range(&self) -> Range<usize> {
		TOPIC_PREFIX.len() .. TOPIC_PREFIX.len() + self.thing_name.len()
	}
}

impl fmt::Display for TopicMatch<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Match({} for {})", self.api, self.thing_name)
	}
}

/// Checks whether `topic` is one of the defender topics.
///
/// On success returns the matched API together with the location of
/// the thing name inside `topic`. The thing name ends at the first
/// `/` after the prefix, so identifiers containing slashes (or the
/// bridge text itself) are unrepresentable in this grammar; a topic
/// with no slash after the prefix fails at the bridge stage.
///
/// Unlike the builder, matching does not enforce the 128 byte thing
/// name maximum: any non-empty name up to the first slash is
/// extracted.
///
/// # Errors
///
/// One [`TopicMatchError`] per grammar stage; all of them mean "not a
/// defender topic".
pub fn match_topic(topic: &str) -> MatchResult<TopicMatch<'_>> {
	let rest = topic.strip_prefix(TOPIC_PREFIX).ok_or_else(|| {
		debug!(topic, "topic does not carry the defender prefix");
		TopicMatchError::PrefixMismatch
	})?;

	let name_length = rest.find('/').unwrap_or(rest.len());
	if name_length == 0 {
		debug!(topic, "topic does not carry a thing name");
		return Err(TopicMatchError::EmptyThingName);
	}
	let (thing_name, rest) = rest.split_at(name_length);

	let tail = rest.strip_prefix(TOPIC_BRIDGE).ok_or_else(|| {
		debug!(topic, "topic does not carry the defender bridge");
		TopicMatchError::BridgeMismatch
	})?;

	// Exact tail match only: same length and bytes, never a prefix.
	let api = DefenderApi::ALL
		.into_iter()
		.find(|api| api.api_segment() == tail)
		.ok_or_else(|| {
			debug!(topic, "topic tail is not a known report format/suffix");
			TopicMatchError::UnknownApi
		})?;

	Ok(TopicMatch { api, thing_name })
}
