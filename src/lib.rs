//! # Defender Topics
//!
//! A Rust library for constructing and recognizing the MQTT topic
//! strings used by the AWS IoT Device Defender service.
//!
//! ## Features
//!
//! - **Topic Building**: Write a defender topic into a caller-supplied
//!   buffer with an exact up-front capacity check, or build it as an
//!   owned `String`
//! - **Topic Matching**: Recognize an arbitrary topic string and
//!   extract the embedded thing name without copying
//! - **Shared Grammar Table**: One table mapping the six defender APIs
//!   to their report format and response suffix segments
//! - **Report Key Vocabulary**: The verbose/abbreviated report field
//!   names shared with the report serializer, selected at compile time
//! - **Error Handling**: Stage-tagged error types for every rejection
//!
//! The library performs no I/O and holds no state: transport belongs
//! to the MQTT client the caller already has. Diagnostics go through
//! the [`tracing`] facade and never affect results.
//!
//! ## Quick Start
//!
//! ```rust
//! use defender_topics::{match_topic, format_topic, write_topic, DefenderApi};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Build the topic used to publish a JSON report.
//!     let topic = format_topic("MyThing", DefenderApi::JsonReportPublish)?;
//!     assert_eq!(topic, "$aws/things/MyThing/defender/metrics/json");
//!
//!     // Or write it into a caller-supplied buffer without allocating.
//!     let mut buf = [0u8; 64];
//!     let len = write_topic(&mut buf, "MyThing", DefenderApi::JsonReportPublish)?;
//!     assert_eq!(&buf[..len], topic.as_bytes());
//!
//!     // Recognize a topic coming back from the broker.
//!     let matched = match_topic("$aws/things/MyThing/defender/metrics/cbor/accepted")?;
//!     assert_eq!(matched.api(), DefenderApi::CborReportAccepted);
//!     assert_eq!(matched.thing_name(), "MyThing");
//!     Ok(())
//! }
//! ```
//!
//! ## Topic Grammar
//!
//! Every defender topic has the shape
//!
//! ```text
//! $aws/things/<thing name>/defender/metrics/<format>[<suffix>]
//! ```
//!
//! where `<format>` is `json` or `cbor` and `<suffix>` is empty for
//! the publish topic, `/accepted` or `/rejected` for the service's
//! response topics. Anything else is rejected by the matcher.
//!
//! ## Report Keys
//!
//! The `long-keys` cargo feature switches the report field vocabulary
//! in [`report::keys`] from the abbreviated spellings (`"hed"`) to the
//! verbose ones (`"header"`). Both are accepted by the service; the
//! choice is crate-wide and made at compile time.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

// Core modules
pub mod report;
pub mod topic;

// === Core Public API ===
// Grammar table and literals
pub use topic::{DefenderApi, ReportFormat, TOPIC_BRIDGE, TOPIC_PREFIX};
// Topic construction
pub use topic::{format_topic, topic_length, write_topic};
// Topic recognition
pub use topic::{match_topic, TopicMatch};

// === Errors ===
pub use topic::{
	BuildResult, MatchResult, TopicBuildError, TopicError, TopicMatchError,
	TopicResult,
};

// Topic limits and validation utilities
pub use topic::{limits, validation};

/// Error types used throughout the library
///
/// Re-exports all error types in one convenient location for error
/// handling.
pub mod errors {
	//! All error types used in the library

	pub use crate::topic::{TopicBuildError, TopicError, TopicMatchError};
}
