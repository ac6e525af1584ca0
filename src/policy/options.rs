use crate::policy::OutcomeKind;
use std::collections::HashSet;
use std::convert::TryFrom;
use tokio::time::Duration;

/// Caller-facing knobs for the data-plane connection policy. Unset fields take the defaults:
/// wait for ready, 5 attempts, 0.5s initial backoff doubling up to 5s, and retry on aborted,
/// resource-exhausted, internal, unavailable and not-found.
#[derive(Clone, Debug, Default)]
pub struct ConnectionPolicyOptions {
    pub wait_for_ready: Option<bool>,
    pub max_attempts: Option<u32>,
    pub initial_backoff: Option<Duration>,
    pub backoff_multiplier: Option<f64>,
    pub max_backoff: Option<Duration>,
    pub retryable_outcomes: Option<Vec<OutcomeKind>>,
}

/// Validated policy. Attached to each leader connection when it is created and consulted by the
/// `Apply` and `Query` calls made over it.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionPolicy {
    pub(super) wait_for_ready: bool,
    pub(super) max_attempts: u32,
    pub(super) initial_backoff: Duration,
    pub(super) backoff_multiplier: f64,
    pub(super) max_backoff: Duration,
    pub(super) retryable_outcomes: HashSet<OutcomeKind>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Illegal connection policy: {0}")]
    IllegalConnectionPolicy(&'static str),
    #[error("Illegal service port {0} for fixed-port address resolution")]
    IllegalServicePort(u16),
}

impl ConnectionPolicy {
    pub fn wait_for_ready(&self) -> bool {
        self.wait_for_ready
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn is_retryable(&self, code: tonic::Code) -> bool {
        match OutcomeKind::from_code(code) {
            Some(kind) => self.retryable_outcomes.contains(&kind),
            None => false,
        }
    }

    fn with_defaults(options: ConnectionPolicyOptions) -> Self {
        let retryable_outcomes = match options.retryable_outcomes {
            Some(outcomes) => outcomes.into_iter().collect(),
            None => OutcomeKind::all().iter().copied().collect(),
        };

        ConnectionPolicy {
            wait_for_ready: options.wait_for_ready.unwrap_or(true),
            max_attempts: options.max_attempts.unwrap_or(5),
            initial_backoff: options.initial_backoff.unwrap_or(Duration::from_millis(500)),
            backoff_multiplier: options.backoff_multiplier.unwrap_or(2.0),
            max_backoff: options.max_backoff.unwrap_or(Duration::from_secs(5)),
            retryable_outcomes,
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.max_attempts < 2 {
            return Err("Max attempts must be at least 2");
        }
        if self.initial_backoff == Duration::from_secs(0) {
            return Err("Initial backoff must be greater than zero");
        }
        if self.max_backoff == Duration::from_secs(0) {
            return Err("Max backoff must be greater than zero");
        }
        if self.initial_backoff > self.max_backoff {
            return Err("Initial backoff must not exceed max backoff");
        }
        if !(self.backoff_multiplier.is_finite() && self.backoff_multiplier > 0.0) {
            return Err("Backoff multiplier must be a positive number");
        }
        if self.retryable_outcomes.is_empty() {
            return Err("At least one retryable outcome is required");
        }

        Ok(())
    }
}

impl Default for ConnectionPolicy {
    fn default() -> Self {
        // Defaults always validate.
        ConnectionPolicy::with_defaults(ConnectionPolicyOptions::default())
    }
}

impl TryFrom<ConnectionPolicyOptions> for ConnectionPolicy {
    type Error = ConfigurationError;

    fn try_from(options: ConnectionPolicyOptions) -> Result<Self, Self::Error> {
        let policy = ConnectionPolicy::with_defaults(options);
        policy
            .validate()
            .map_err(ConfigurationError::IllegalConnectionPolicy)?;
        Ok(policy)
    }
}
