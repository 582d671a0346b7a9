//! Report field key names
//!
//! Every key exists in a verbose and an abbreviated spelling, for
//! example `"header"` and `"hed"`. The service understands both, but
//! a report must use one vocabulary consistently, so the choice is
//! made once at compile time via the `long-keys` feature.

/// Defines one report key constant in the vocabulary selected by the
/// `long-keys` feature.
macro_rules! report_key {
	($(#[$doc:meta])* $name:ident: $long:literal, $short:literal) => {
		$(#[$doc])*
		#[cfg(feature = "long-keys")]
		pub const $name: &str = $long;

		$(#[$doc])*
		#[cfg(not(feature = "long-keys"))]
		pub const $name: &str = $short;
	};
}

report_key!(
	/// Report header object
	HEADER: "header", "hed"
);
report_key!(
	/// Metrics object holding all measurements
	METRICS: "metrics", "met"
);
report_key!(
	/// Monotonically increasing report identifier
	REPORT_ID: "report_id", "rid"
);
report_key!(
	/// Report schema version
	VERSION: "version", "v"
);
report_key!(
	/// TCP connections object
	TCP_CONNECTIONS: "tcp_connections", "tc"
);
report_key!(
	/// Established TCP connections object
	ESTABLISHED_CONNECTIONS: "established_connections", "ec"
);
report_key!(
	/// List of individual connections
	CONNECTIONS: "connections", "cs"
);
report_key!(
	/// Remote address of a connection
	REMOTE_ADDR: "remote_addr", "rad"
);
report_key!(
	/// Local port of a connection
	LOCAL_PORT: "local_port", "lp"
);
report_key!(
	/// Local interface of a connection
	LOCAL_INTERFACE: "local_interface", "li"
);
report_key!(
	/// Count total accompanying a list
	TOTAL: "total", "t"
);
report_key!(
	/// Listening TCP ports object
	LISTENING_TCP_PORTS: "listening_tcp_ports", "tp"
);
report_key!(
	/// List of port entries
	PORTS: "ports", "pts"
);
report_key!(
	/// Port number of an entry
	PORT: "port", "pt"
);
report_key!(
	/// Interface a port is bound to
	INTERFACE: "interface", "if"
);
report_key!(
	/// Listening UDP ports object
	LISTENING_UDP_PORTS: "listening_udp_ports", "up"
);
report_key!(
	/// Network statistics object
	NETWORK_STATS: "network_stats", "ns"
);
report_key!(
	/// Bytes received since the last report
	BYTES_IN: "bytes_in", "bi"
);
report_key!(
	/// Bytes sent since the last report
	BYTES_OUT: "bytes_out", "bo"
);
report_key!(
	/// Packets received since the last report
	PACKETS_IN: "packets_in", "pi"
);
report_key!(
	/// Packets sent since the last report
	PACKETS_OUT: "packets_out", "po"
);
