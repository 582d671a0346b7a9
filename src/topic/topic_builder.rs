//! Construction of defender topic strings
//!
//! The builder is a pure function of its inputs: it computes the exact
//! topic length first and refuses to write anything unless the whole
//! topic fits, so a failed call never leaves partial output behind.

use thiserror::Error;
use tracing::error;

use super::api::{DefenderApi, TOPIC_BRIDGE, TOPIC_PREFIX};
use super::error::{validation, BuildResult};

/// Errors that can occur while constructing a defender topic
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicBuildError {
	/// Thing name length is outside the accepted range
	#[error(
		"Invalid thing name length {length}: must be between 1 and 128 \
		 bytes"
	)]
	InvalidThingName {
		/// Byte length of the rejected thing name
		length: usize,
	},

	/// Destination buffer cannot hold the full topic string
	#[error(
		"Buffer too small for topic: provided {provided} bytes, required \
		 {required}"
	)]
	BufferTooSmall {
		/// Capacity of the destination buffer
		provided: usize,
		/// Exact length of the requested topic
		required: usize,
	},
}

impl TopicBuildError {
	/// Creates a new InvalidThingName error
	pub fn invalid_thing_name(length: usize) -> Self {
		Self::InvalidThingName { length }
	}

	/// Creates a new BufferTooSmall error
	pub fn buffer_too_small(provided: usize, required: usize) -> Self {
		Self::BufferTooSmall { provided, required }
	}
}

/// Returns the exact length of the topic for `api` with a thing name
/// of `thing_name_length` bytes.
///
/// `prefix + thing name + bridge + format + suffix`; the suffix
/// contributes zero bytes for the publish topics.
pub const fn topic_length(
	thing_name_length: usize,
	api: DefenderApi,
) -> usize {
	TOPIC_PREFIX.len()
		+ thing_name_length
		+ TOPIC_BRIDGE.len()
		+ api.api_segment().len()
}

/// Validates the thing name and reports a rejected one.
fn validate_for_build(thing_name: &str) -> BuildResult<()> {
	validation::validate_thing_name(thing_name).map_err(|err| {
		error!(
			thing_name_length = thing_name.len(),
			"cannot build defender topic: {err}"
		);
		err
	})
}

/// Writes the topic for `api` and `thing_name` into `buf`, returning
/// the number of bytes written.
///
/// The buffer capacity is checked against the exact topic length
/// before a single byte is written; on any error `buf` is left
/// untouched.
///
/// # Errors
///
/// [`TopicBuildError::InvalidThingName`] if the thing name is empty or
/// longer than [`limits::THING_NAME_MAX_LENGTH`](super::limits::THING_NAME_MAX_LENGTH);
/// [`TopicBuildError::BufferTooSmall`] if `buf` cannot hold the topic.
pub fn write_topic(
	buf: &mut [u8],
	thing_name: &str,
	api: DefenderApi,
) -> BuildResult<usize> {
	validate_for_build(thing_name)?;

	let required = topic_length(thing_name.len(), api);
	if buf.len() < required {
		error!(
			provided = buf.len(),
			required, "buffer too small for defender topic"
		);
		return Err(TopicBuildError::buffer_too_small(buf.len(), required));
	}

	// Capacity is settled; write the four segments in order.
	let mut offset = 0;
	for segment in [TOPIC_PREFIX, thing_name, TOPIC_BRIDGE, api.api_segment()]
	{
		buf[offset .. offset + segment.len()]
			.copy_from_slice(segment.as_bytes());
		offset += segment.len();
	}
	debug_assert_eq!(offset, required);

	Ok(offset)
}

/// Builds the topic for `api` and `thing_name` as an owned string.
///
/// Allocates the exact topic length up front; unlike [`write_topic`]
/// this cannot fail with [`TopicBuildError::BufferTooSmall`].
pub fn format_topic(
	thing_name: &str,
	api: DefenderApi,
) -> BuildResult<String> {
	validate_for_build(thing_name)?;

	let mut topic =
		String::with_capacity(topic_length(thing_name.len(), api));
	topic.push_str(TOPIC_PREFIX);
	topic.push_str(thing_name);
	topic.push_str(TOPIC_BRIDGE);
	topic.push_str(api.api_segment());

	Ok(topic)
}
