// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles row indices with a seeded RNG and partitions them
// into a train set and a test set.
//
// Sizes:
//   n_test  = ceil(test_fraction × N)
//   n_train = N − n_test
//   Both must be at least 1.
//
// Two strategies, picked by whether the stratify column exists:
//
//   Plain       shuffle all indices, first n_test → test,
//               the rest → train.
//
//   Stratified  group indices by class (distinct values of the
//               stratify column, sorted). Each class gets a test
//               quota proportional to its size; rounding leftovers
//               go to the classes with the largest fractional
//               remainder. Each class is shuffled and cut at its
//               quota, then both sides are shuffled once more so
//               classes are interleaved.
//
// The same seed and the same input always give the same split.
// Every class needs at least 2 members for a stratified split;
// a singleton class is an error rather than a silent fallback.
//
// Reference: rand crate documentation (SliceRandom, SeedableRng)

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::error::SplitError;
use crate::domain::table::{Table, TrainTestSplit};

/// Split `table` into train/test halves.
///
/// If `stratify_col` names a column of `table` the split is stratified
/// on it; otherwise (None, or a name the table does not have) a plain
/// shuffled split is used.
pub fn split_train_test(
    table:         &Table,
    test_fraction: f64,
    seed:          u64,
    stratify_col:  Option<&str>,
) -> Result<TrainTestSplit, SplitError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let stratify = stratify_col
        .and_then(|name| table.column(name).map(|labels| (name, labels)));

    let (train_idx, test_idx) = match &stratify {
        Some((column, labels)) => {
            tracing::debug!("Stratifying on column '{}'", column);
            stratified_split_indices(labels, column, test_fraction, &mut rng)?
        }
        None => {
            match stratify_col {
                Some(name) if table.has_column(name) => tracing::warn!(
                    "Column '{}' is missing on some rows; using a plain random split",
                    name
                ),
                Some(name) => tracing::debug!(
                    "Column '{}' not present; using a plain random split",
                    name
                ),
                None => {}
            }
            random_split_indices(table.len(), test_fraction, &mut rng)?
        }
    };

    tracing::debug!(
        "Dataset split: {} train, {} test ({}% / {}%)",
        train_idx.len(),
        test_idx.len(),
        (train_idx.len() * 100) / table.len().max(1),
        (test_idx.len()  * 100) / table.len().max(1),
    );

    Ok(TrainTestSplit {
        train:         table.select(&train_idx),
        test:          table.select(&test_idx),
        stratified_on: stratify.map(|(column, _)| column.to_string()),
    })
}

/// Number of (train, test) rows for `rows` rows at `test_fraction`.
pub fn partition_sizes(rows: usize, test_fraction: f64) -> Result<(usize, usize), SplitError> {
    if rows == 0 {
        return Err(SplitError::EmptyDataset);
    }

    // NaN and negatives saturate to 0 in the cast
    let n_test  = ((test_fraction * rows as f64).ceil() as usize).min(rows);
    let n_train = rows - n_test;

    if n_test == 0 {
        return Err(SplitError::EmptyPartition { rows, test_fraction, side: "test" });
    }
    if n_train == 0 {
        return Err(SplitError::EmptyPartition { rows, test_fraction, side: "train" });
    }

    Ok((n_train, n_test))
}

/// Plain shuffled split of `0..rows` into (train, test) indices.
pub fn random_split_indices(
    rows:          usize,
    test_fraction: f64,
    rng:           &mut StdRng,
) -> Result<(Vec<usize>, Vec<usize>), SplitError> {
    let (_, n_test) = partition_sizes(rows, test_fraction)?;

    let mut indices: Vec<usize> = (0..rows).collect();
    indices.shuffle(rng);

    // After this: indices = test part, train = the remainder
    let train = indices.split_off(n_test);
    Ok((train, indices))
}

/// Stratified split of row indices keyed on `labels` (one label per row).
pub fn stratified_split_indices(
    labels:        &[&str],
    column:        &str,
    test_fraction: f64,
    rng:           &mut StdRng,
) -> Result<(Vec<usize>, Vec<usize>), SplitError> {
    let (n_train, n_test) = partition_sizes(labels.len(), test_fraction)?;

    // BTreeMap keeps classes sorted, which fixes the iteration order
    let mut classes: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row, &label) in labels.iter().enumerate() {
        classes.entry(label).or_default().push(row);
    }

    if let Some((class, members)) = classes.iter().find(|(_, m)| m.len() < 2) {
        return Err(SplitError::ClassTooSmall {
            column: column.to_string(),
            class:  class.to_string(),
            count:  members.len(),
        });
    }

    let n_classes = classes.len();
    for (side, size) in [("test", n_test), ("train", n_train)] {
        if size < n_classes {
            return Err(SplitError::TooFewRowsForClasses {
                column:  column.to_string(),
                side,
                size,
                classes: n_classes,
            });
        }
    }

    let counts: Vec<usize> = classes.values().map(Vec::len).collect();
    let test_quota = approximate_mode(&counts, n_test);

    let mut train = Vec::with_capacity(n_train);
    let mut test  = Vec::with_capacity(n_test);

    for (mut members, &quota) in classes.into_values().zip(&test_quota) {
        members.shuffle(rng);
        let rest = members.split_off(quota);
        test.extend(members);
        train.extend(rest);
    }

    train.shuffle(rng);
    test.shuffle(rng);

    Ok((train, test))
}

/// Distribute `n_draws` across classes in proportion to `counts`.
///
/// Each class first gets the floor of its exact share; the draws left
/// over go one each to the classes with the largest fractional part
/// (ties go to the earlier class). No class gets more than its count.
pub fn approximate_mode(counts: &[usize], n_draws: usize) -> Vec<usize> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let exact: Vec<f64> = counts
        .iter()
        .map(|&c| n_draws as f64 * c as f64 / total as f64)
        .collect();

    let mut alloc: Vec<usize> = exact
        .iter()
        .zip(counts)
        .map(|(&e, &c)| (e.floor() as usize).min(c))
        .collect();

    let mut remaining = n_draws.saturating_sub(alloc.iter().sum::<usize>());

    let mut order: Vec<usize> = (0..counts.len()).collect();
    // Stable sort: equal remainders keep class order
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });

    for &class in &order {
        if remaining == 0 {
            break;
        }
        if alloc[class] < counts[class] {
            alloc[class] += 1;
            remaining -= 1;
        }
    }

    alloc
}
