use crate::{DomainError, RowPartition};

/// Probability that two distinct seats drawn uniformly land in the same row.
///
/// Counts ordered same-row pairs `r * (r - 1)` against all ordered pairs
/// `total * (total - 1)`; the factor of two in `C(n, 2)` cancels.
pub fn exact_probability(rows: &[usize]) -> Result<f64, DomainError> {
    let partition = RowPartition::new(rows)?;
    Ok(exact_for(&partition))
}

pub fn exact_for(partition: &RowPartition) -> f64 {
    let total = partition.total() as u64;
    let same: u64 = partition
        .sizes()
        .iter()
        .map(|&r| r as u64 * (r as u64 - 1))
        .sum();
    same as f64 / (total * (total - 1)) as f64
}
