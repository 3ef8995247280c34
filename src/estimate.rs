use rand::prelude::*;
use rand::seq::index;
use tracing::debug;

use crate::{DomainError, RowPartition};

/// Converts a signed trial count from the command line into a usable one.
pub fn checked_trials(trials: i64) -> Result<u64, DomainError> {
    match u64::try_from(trials) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(DomainError::InvalidTrialCount { trials }),
    }
}

/// Two distinct seats out of `0..total`, every unordered pair equally likely.
pub fn draw_pair<R: Rng + ?Sized>(
    rng: &mut R,
    total: usize,
) -> Result<(usize, usize), DomainError> {
    if total < 2 {
        return Err(DomainError::InsufficientSeats { total });
    }
    let picked = index::sample(rng, total, 2);
    Ok((picked.index(0), picked.index(1)))
}

/// Fresh generator for one computation: seeded when asked, else from system entropy.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fraction of `trials` random seat pairs that share a row, drawing from `rng`.
pub fn estimate_with_rng<R: Rng + ?Sized>(
    partition: &RowPartition,
    trials: u64,
    rng: &mut R,
) -> Result<f64, DomainError> {
    if trials == 0 {
        return Err(DomainError::InvalidTrialCount { trials: 0 });
    }
    let total = partition.total();
    let mut same = 0u64;
    for _ in 0..trials {
        let (a, b) = draw_pair(rng, total)?;
        if partition.row_of(a) == partition.row_of(b) {
            same += 1;
        }
    }
    debug!(trials, same, "sampling finished");
    Ok(same as f64 / trials as f64)
}

/// Monte Carlo estimate of the same-row probability.
///
/// With a seed the whole draw sequence is reproducible; without one the
/// generator is seeded from system entropy. The generator lives only for
/// this call.
pub fn simulate(rows: &[usize], trials: u64, seed: Option<u64>) -> Result<f64, DomainError> {
    if trials == 0 {
        return Err(DomainError::InvalidTrialCount { trials: 0 });
    }
    let partition = RowPartition::new(rows)?;
    debug!(?rows, trials, seeded = seed.is_some(), "sampling seat pairs");
    estimate_with_rng(&partition, trials, &mut seeded_rng(seed))
}
