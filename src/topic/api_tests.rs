//! Tests for the defender API table

use super::api::{DefenderApi, ReportFormat, TOPIC_BRIDGE, TOPIC_PREFIX};

#[test]
fn test_grammar_literals() {
	assert_eq!(TOPIC_PREFIX, "$aws/things/");
	assert_eq!(TOPIC_BRIDGE, "/defender/metrics/");
}

#[test]
fn test_api_segments() {
	assert_eq!(DefenderApi::JsonReportPublish.api_segment(), "json");
	assert_eq!(
		DefenderApi::JsonReportAccepted.api_segment(),
		"json/accepted"
	);
	assert_eq!(
		DefenderApi::JsonReportRejected.api_segment(),
		"json/rejected"
	);
	assert_eq!(DefenderApi::CborReportPublish.api_segment(), "cbor");
	assert_eq!(
		DefenderApi::CborReportAccepted.api_segment(),
		"cbor/accepted"
	);
	assert_eq!(
		DefenderApi::CborReportRejected.api_segment(),
		"cbor/rejected"
	);
}

#[test]
fn test_report_formats() {
	assert_eq!(ReportFormat::Json.as_str(), "json");
	assert_eq!(ReportFormat::Cbor.as_str(), "cbor");

	assert_eq!(
		DefenderApi::JsonReportPublish.report_format(),
		ReportFormat::Json
	);
	assert_eq!(
		DefenderApi::JsonReportRejected.report_format(),
		ReportFormat::Json
	);
	assert_eq!(
		DefenderApi::CborReportAccepted.report_format(),
		ReportFormat::Cbor
	);
}

#[test]
fn test_suffixes() {
	assert_eq!(DefenderApi::JsonReportPublish.suffix(), "");
	assert_eq!(DefenderApi::CborReportPublish.suffix(), "");
	assert_eq!(DefenderApi::JsonReportAccepted.suffix(), "/accepted");
	assert_eq!(DefenderApi::CborReportRejected.suffix(), "/rejected");

	assert!(!DefenderApi::JsonReportPublish.is_response());
	assert!(!DefenderApi::CborReportPublish.is_response());
	assert!(DefenderApi::JsonReportAccepted.is_response());
	assert!(DefenderApi::CborReportRejected.is_response());
}

#[test]
fn test_segment_is_format_plus_suffix() {
	for api in DefenderApi::ALL {
		let expected =
			format!("{}{}", api.report_format().as_str(), api.suffix());
		assert_eq!(api.api_segment(), expected);
	}
}

#[test]
fn test_all_table_is_complete_and_distinct() {
	assert_eq!(DefenderApi::ALL.len(), 6);

	for (i, a) in DefenderApi::ALL.iter().enumerate() {
		for (j, b) in DefenderApi::ALL.iter().enumerate() {
			if i != j {
				assert_ne!(a, b);
				assert_ne!(a.api_segment(), b.api_segment());
			}
		}
	}
}

#[test]
fn test_display_matches_segment() {
	assert_eq!(
		DefenderApi::CborReportAccepted.to_string(),
		"cbor/accepted"
	);
	assert_eq!(ReportFormat::Json.to_string(), "json");
}
