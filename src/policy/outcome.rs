use tonic::Code;

/// Remote call outcomes that a `ConnectionPolicy` may declare retryable.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum OutcomeKind {
    Aborted,
    ResourceExhausted,
    Internal,
    Unavailable,
    NotFound,
}

impl OutcomeKind {
    /// Returns `None` for codes that can never be retried.
    pub fn from_code(code: Code) -> Option<Self> {
        match code {
            Code::Aborted => Some(OutcomeKind::Aborted),
            Code::ResourceExhausted => Some(OutcomeKind::ResourceExhausted),
            Code::Internal => Some(OutcomeKind::Internal),
            Code::Unavailable => Some(OutcomeKind::Unavailable),
            Code::NotFound => Some(OutcomeKind::NotFound),
            _ => None,
        }
    }

    pub(crate) fn all() -> [OutcomeKind; 5] {
        [
            OutcomeKind::Aborted,
            OutcomeKind::ResourceExhausted,
            OutcomeKind::Internal,
            OutcomeKind::Unavailable,
            OutcomeKind::NotFound,
        ]
    }
}
