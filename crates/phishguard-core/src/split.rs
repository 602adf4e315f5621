//! Seeded train/test split.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("test fraction must be strictly between 0 and 1, got {0}")]
    InvalidFraction(f64),
    #[error("cannot split {rows} rows with test fraction {fraction}: one side would be empty")]
    TooFewRows { rows: usize, fraction: f64 },
}

/// Row indices of each side of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..rows` with `seed` and hold out `ceil(rows * test_fraction)`
/// indices for testing. The same seed always yields the same split.
pub fn train_test_split(
    rows: usize,
    test_fraction: f64,
    seed: u64,
) -> Result<SplitIndices, SplitError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(SplitError::InvalidFraction(test_fraction));
    }
    let test_len = (rows as f64 * test_fraction).ceil() as usize;
    if test_len == 0 || test_len >= rows {
        return Err(SplitError::TooFewRows {
            rows,
            fraction: test_fraction,
        });
    }

    let mut order: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let train = order.split_off(test_len);
    Ok(SplitIndices { train, test: order })
}
