/// Inputs for which the same-row probability is undefined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("invalid trial count: {trials} (must be at least 1)")]
    InvalidTrialCount { trials: i64 },

    #[error("insufficient seats: {total} total, need at least 2 distinct seats")]
    InsufficientSeats { total: usize },

    #[error("row {index} has no seats")]
    EmptyRow { index: usize },
}
