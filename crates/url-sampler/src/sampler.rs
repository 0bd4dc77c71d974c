use crate::error::{GenerateError, Result};
use crate::weights::Weights;
use rand::seq::SliceRandom;
use rand::Rng;

/// Weighted index sampling over a cumulative-weight staircase.
///
/// The weights partition `[0, total)` into half-open blocks, one per index,
/// sized by that index's weight:
///
/// ```text
/// weights     57      22      8
/// cumulative  57      79      87
/// offsets     0..57   57..79  79..87
/// ```
///
/// An offset equal to a cumulative boundary belongs to the next index, and a
/// zero weight yields an empty block that can never be selected.
///
/// Sampling draws every target up front, sorts them, and resolves them all in
/// a single walk over the weights: O(n log n + categories) instead of one
/// scan per sample.
pub fn sample_indices<R: Rng + ?Sized>(
    weights: &Weights,
    n: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut targets = draw_targets(weights.total(), n, rng)?;
    targets.sort_unstable();

    let mut indexes = resolve_targets(weights.as_slice(), &targets)?;

    // Resolution order follows offset magnitude; consumers must not see that.
    indexes.shuffle(rng);
    Ok(indexes)
}

/// Draw `n` uniform offsets in `[0, total)`.
pub fn draw_targets<R: Rng + ?Sized>(total: u64, n: usize, rng: &mut R) -> Result<Vec<u64>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    if total == 0 {
        return Err(GenerateError::DegenerateDistribution { requested: n });
    }
    Ok((0..n).map(|_| rng.gen_range(0..total)).collect())
}

/// Map ascending offsets to indexes with one pass over `weights`.
///
/// `sorted_targets` must be sorted ascending. The result is in target order.
/// Deterministic; all randomness lives in [`draw_targets`] and the shuffle.
pub fn resolve_targets(weights: &[u64], sorted_targets: &[u64]) -> Result<Vec<usize>> {
    debug_assert!(sorted_targets.windows(2).all(|w| w[0] <= w[1]));

    let mut indexes = Vec::with_capacity(sorted_targets.len());
    let mut cursor = 0;
    let mut cumulative: u64 = 0;

    for (index, &weight) in weights.iter().enumerate() {
        if cursor == sorted_targets.len() {
            break;
        }
        cumulative = cumulative.saturating_add(weight);

        // Loop, not `if`: duplicate targets all land on the same index.
        while cursor < sorted_targets.len() && sorted_targets[cursor] < cumulative {
            indexes.push(index);
            cursor += 1;
        }
    }

    if cursor != sorted_targets.len() {
        return Err(GenerateError::UnresolvedTarget {
            unresolved: sorted_targets.len() - cursor,
            requested: sorted_targets.len(),
            total: cumulative,
        });
    }
    Ok(indexes)
}
