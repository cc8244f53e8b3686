// fixtures/mod.rs - Test fixtures module
//
// Canned OMDb response bodies shared by the model tests and the stub
// server used in the integration suites. Defining them once keeps the
// wire-format assumptions in a single place.

pub mod payloads;

/// A canned OMDb response body that a stub server can replay
pub trait CannedPayload {
    /// The JSON body, exactly as OMDb would send it
    fn json() -> &'static str;
}
