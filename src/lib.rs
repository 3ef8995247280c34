//! Monte Carlo and closed-form odds that two randomly chosen seats share a row.

mod error;
mod estimate;
mod exact;
mod logging;
mod report;
mod rows;

pub use error::DomainError;
pub use estimate::{checked_trials, draw_pair, estimate_with_rng, simulate};
pub use exact::{exact_for, exact_probability};
pub use logging::init_tracing;
pub use report::{format_scientific, standard_error, Report};
pub use rows::{RowPartition, DEFAULT_ROWS};
