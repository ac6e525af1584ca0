//! Transport-level retry/backoff behavior attached to leader connections for data-plane calls.
mod options;
mod outcome;
mod retry;
mod time;

pub use options::ConfigurationError;
pub use options::ConnectionPolicy;
pub use options::ConnectionPolicyOptions;
pub use outcome::OutcomeKind;

pub(crate) use time::RealClock;
#[cfg(test)]
pub(crate) use time::RecordingClock;
