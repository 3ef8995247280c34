use crate::DomainError;

/// Seat counts of the three rows used by the simulator.
pub const DEFAULT_ROWS: [usize; 3] = [5, 6, 7];

/// A fixed split of consecutively numbered seats into rows.
///
/// Seat `i` sits in row `k` when `k` is the smallest index with
/// `i < boundaries[k]`, where `boundaries` holds the running totals of the
/// row sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPartition {
    sizes: Vec<usize>,
    boundaries: Vec<usize>,
}

impl RowPartition {
    pub fn new(sizes: &[usize]) -> Result<Self, DomainError> {
        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(DomainError::EmptyRow { index });
        }
        let boundaries: Vec<usize> = sizes
            .iter()
            .scan(0, |acc, &size| {
                *acc += size;
                Some(*acc)
            })
            .collect();
        let total = boundaries.last().copied().unwrap_or(0);
        if total < 2 {
            return Err(DomainError::InsufficientSeats { total });
        }
        Ok(RowPartition {
            sizes: sizes.to_vec(),
            boundaries,
        })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn total(&self) -> usize {
        // non-empty after validation
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Row holding `seat`, or `None` if the seat is past the last row.
    pub fn row_of(&self, seat: usize) -> Option<usize> {
        let row = self.boundaries.partition_point(|&bound| bound <= seat);
        if row < self.boundaries.len() {
            Some(row)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rows_are_valid() {
        let rows = RowPartition::new(&DEFAULT_ROWS).unwrap();
        assert_eq!(rows.sizes(), &DEFAULT_ROWS);
        assert_eq!(rows.total(), DEFAULT_ROWS.iter().sum::<usize>());
    }

    #[test]
    fn boundaries_are_prefix_sums() {
        let rows = RowPartition::new(&[5, 6, 7]).unwrap();
        assert_eq!(rows.boundaries(), &[5, 11, 18]);
        assert_eq!(rows.total(), 18);
        assert_eq!(rows.sizes().len(), 3);
    }

    #[test]
    fn row_lookup_at_edges() {
        let rows = RowPartition::new(&[5, 6, 7]).unwrap();
        assert_eq!(rows.row_of(0), Some(0));
        assert_eq!(rows.row_of(4), Some(0));
        assert_eq!(rows.row_of(5), Some(1));
        assert_eq!(rows.row_of(10), Some(1));
        assert_eq!(rows.row_of(11), Some(2));
        assert_eq!(rows.row_of(17), Some(2));
        assert_eq!(rows.row_of(18), None);
    }

    #[test]
    fn rejects_degenerate_partitions() {
        assert_eq!(
            RowPartition::new(&[]),
            Err(DomainError::InsufficientSeats { total: 0 })
        );
        assert_eq!(
            RowPartition::new(&[1]),
            Err(DomainError::InsufficientSeats { total: 1 })
        );
        assert_eq!(
            RowPartition::new(&[3, 0, 2]),
            Err(DomainError::EmptyRow { index: 1 })
        );
    }

    #[test]
    fn single_row_of_two_is_enough() {
        let rows = RowPartition::new(&[2]).unwrap();
        assert_eq!(rows.row_of(1), Some(0));
    }
}
