//! Round-trip integration tests
//!
//! Every topic the builder produces must be recognized by the matcher
//! as the same API and thing name, for any valid thing name and every
//! defender API.

use defender_topics::{
	format_topic, limits, match_topic, topic_length, write_topic,
	DefenderApi, TopicBuildError,
};

#[test]
fn test_build_then_match_round_trip() {
	let max_name = "n".repeat(limits::THING_NAME_MAX_LENGTH);
	let names = ["a", "MyThing", "device-01:rev2", max_name.as_str()];

	for name in names {
		for api in DefenderApi::ALL {
			let topic = format_topic(name, api).unwrap();
			let matched = match_topic(&topic).unwrap();

			assert_eq!(matched.api(), api);
			assert_eq!(matched.thing_name(), name);
			assert_eq!(&topic[matched.thing_name_range()], name);
		}
	}
}

#[test]
fn test_buffer_and_string_builders_agree() {
	let mut buf = [0u8; limits::MAX_TOPIC_LENGTH];

	for api in DefenderApi::ALL {
		let topic = format_topic("MyThing", api).unwrap();
		let len = write_topic(&mut buf, "MyThing", api).unwrap();

		assert_eq!(&buf[.. len], topic.as_bytes());
		assert_eq!(len, topic_length("MyThing".len(), api));
	}
}

#[test]
fn test_builder_contract_violations_surface_as_errors() {
	assert!(matches!(
		format_topic("", DefenderApi::JsonReportPublish),
		Err(TopicBuildError::InvalidThingName { length: 0 })
	));

	let name = "a".repeat(limits::THING_NAME_MAX_LENGTH + 1);
	assert!(matches!(
		format_topic(&name, DefenderApi::JsonReportPublish),
		Err(TopicBuildError::InvalidThingName { .. })
	));
}

#[test]
fn test_foreign_topics_do_not_match() {
	let foreign = [
		"$aws/things/MyThing",
		"$aws/things/MyThing/shadow/update/accepted",
		"sensors/MyThing/defender/metrics/json",
		"$aws/things//defender/metrics/json",
		"$aws/things/MyThing/defender/metrics/xml",
	];

	for topic in foreign {
		assert!(
			match_topic(topic).is_err(),
			"unexpected match for {topic}"
		);
	}
}
