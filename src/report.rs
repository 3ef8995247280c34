use std::fmt;

use tracing::info;

use crate::estimate::seeded_rng;
use crate::{estimate_with_rng, exact_for, DomainError, RowPartition};

/// Plug-in standard error of a proportion `p` observed over `trials`.
pub fn standard_error(p: f64, trials: u64) -> f64 {
    (p * (1.0 - p) / trials as f64).sqrt()
}

/// Scientific notation with six fractional mantissa digits and a signed,
/// two-digit exponent, e.g. `9.512345e-04`.
pub fn format_scientific(value: f64) -> String {
    let raw = format!("{:.6e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => raw,
        },
        // inf and NaN have no exponent
        None => raw,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<usize>,
    pub trials: u64,
    pub seed: Option<i64>,
    pub estimate: f64,
    pub standard_error: f64,
    pub exact: f64,
}

impl Report {
    /// Runs both calculations. Fails before anything is reported if either does.
    ///
    /// Checks run in the same order as `simulate`: trial count, then rows.
    /// A negative seed keeps its two's-complement bits as the generator seed,
    /// so `Some(-1)` and `simulate(.., Some(u64::MAX))` draw identically.
    pub fn compute(rows: &[usize], trials: u64, seed: Option<i64>) -> Result<Self, DomainError> {
        if trials == 0 {
            return Err(DomainError::InvalidTrialCount { trials: 0 });
        }
        let partition = RowPartition::new(rows)?;
        let exact = exact_for(&partition);
        let mut rng = seeded_rng(seed.map(|seed| seed as u64));
        let estimate = estimate_with_rng(&partition, trials, &mut rng)?;
        let report = Report {
            rows: rows.to_vec(),
            trials,
            seed,
            estimate,
            standard_error: standard_error(estimate, trials),
            exact,
        };
        info!(
            estimate = report.estimate,
            exact = report.exact,
            stderr = report.standard_error,
            "report ready"
        );
        Ok(report)
    }

    pub fn absolute_error(&self) -> f64 {
        (self.estimate - self.exact).abs()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {:?}", self.rows)?;
        writeln!(f, "Trials: {}", self.trials)?;
        if let Some(seed) = self.seed {
            writeln!(f, "Seed: {}", seed)?;
        }
        writeln!(f)?;
        writeln!(f, "Estimated probability (Monte Carlo): {:.6}", self.estimate)?;
        writeln!(
            f,
            "Standard error: {}",
            format_scientific(self.standard_error)
        )?;
        writeln!(f, "Exact probability: {:.6}", self.exact)?;
        writeln!(
            f,
            "Absolute error: {}",
            format_scientific(self.absolute_error())
        )
    }
}
