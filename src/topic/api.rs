//! Defender API table and the fixed topic grammar literals
//!
//! Every defender topic is assembled from the literals below plus a
//! thing name; the [`DefenderApi`] enum enumerates the six topics the
//! service knows and maps each to its format-and-suffix tail.

use std::fmt;

/// Topic prefix common to every defender topic.
pub const TOPIC_PREFIX: &str = "$aws/things/";

/// Fixed segment joining the thing name to the report format.
pub const TOPIC_BRIDGE: &str = "/defender/metrics/";

/// Serialization encoding of a telemetry report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
	/// JSON-encoded report
	Json,
	/// CBOR-encoded report
	Cbor,
}

impl ReportFormat {
	/// Returns the topic segment for this format.
	pub const fn as_str(self) -> &'static str {
		match self {
			| ReportFormat::Json => "json",
			| ReportFormat::Cbor => "cbor",
		}
	}
}

impl fmt::Display for ReportFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// The six defender API topics: a report format crossed with the
/// publish request and its accepted/rejected responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefenderApi {
	/// Publish a JSON report
	JsonReportPublish,
	/// Response topic for an accepted JSON report
	JsonReportAccepted,
	/// Response topic for a rejected JSON report
	JsonReportRejected,
	/// Publish a CBOR report
	CborReportPublish,
	/// Response topic for an accepted CBOR report
	CborReportAccepted,
	/// Response topic for a rejected CBOR report
	CborReportRejected,
}

impl DefenderApi {
	/// All defender APIs, in matcher lookup order. The order carries
	/// no meaning beyond table iteration.
	pub const ALL: [DefenderApi; 6] = [
		DefenderApi::JsonReportPublish,
		DefenderApi::JsonReportAccepted,
		DefenderApi::JsonReportRejected,
		DefenderApi::CborReportPublish,
		DefenderApi::CborReportAccepted,
		DefenderApi::CborReportRejected,
	];

	/// Returns the report format this API topic carries.
	pub const fn report_format(self) -> ReportFormat {
		match self {
			| DefenderApi::JsonReportPublish
			| DefenderApi::JsonReportAccepted
			| DefenderApi::JsonReportRejected => ReportFormat::Json,
			| DefenderApi::CborReportPublish
			| DefenderApi::CborReportAccepted
			| DefenderApi::CborReportRejected => ReportFormat::Cbor,
		}
	}

	/// Returns the response suffix segment, empty for the publish
	/// topics.
	pub const fn suffix(self) -> &'static str {
		match self {
			| DefenderApi::JsonReportPublish
			| DefenderApi::CborReportPublish => "",
			| DefenderApi::JsonReportAccepted
			| DefenderApi::CborReportAccepted => "/accepted",
			| DefenderApi::JsonReportRejected
			| DefenderApi::CborReportRejected => "/rejected",
		}
	}

	/// Returns true for the `/accepted` and `/rejected` response
	/// topics.
	pub const fn is_response(self) -> bool {
		!matches!(
			self,
			DefenderApi::JsonReportPublish | DefenderApi::CborReportPublish
		)
	}

	/// Returns the format-and-suffix tail that ends the topic string.
	///
	/// This is the part the matcher compares exactly against the
	/// unparsed remainder of an input topic.
	pub const fn api_segment(self) -> &'static str {
		match self {
			| DefenderApi::JsonReportPublish => "json",
			| DefenderApi::JsonReportAccepted => "json/accepted",
			| DefenderApi::JsonReportRejected => "json/rejected",
			| DefenderApi::CborReportPublish => "cbor",
			| DefenderApi::CborReportAccepted => "cbor/accepted",
			| DefenderApi::CborReportRejected => "cbor/rejected",
		}
	}
}

impl fmt::Display for DefenderApi {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.api_segment())
	}
}
