//! Report payload vocabulary
//!
//! Field key names for the device defender report body, shared with
//! the report serializer (an external collaborator; no payload is
//! produced or parsed here). The service accepts a verbose and an
//! abbreviated vocabulary; the `long-keys` cargo feature selects the
//! verbose one crate-wide, the abbreviated one is the default.

pub mod keys;


/// Shortest report publishing period accepted by the service, in
/// seconds.
pub const MIN_REPORT_PERIOD_SECONDS: u32 = 300;
