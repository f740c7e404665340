use rand::{rngs::StdRng, SeedableRng};

/// Pick `min(amount, items.len())` items without replacement
///
/// The generator is seeded from `seed`, so the same input slice, amount and
/// seed always produce the same items in the same order.
pub fn sample<T: Clone>(items: &[T], amount: usize, seed: u64) -> Vec<T> {
    sample_indices(items.len(), amount, seed)
        .into_iter()
        .map(|idx| items[idx].clone())
        .collect()
}

/// Indices picked by [`sample`] for a collection of length `len`
pub fn sample_indices(len: usize, amount: usize, seed: u64) -> Vec<usize> {
    let amount = amount.min(len);
    if amount == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, len, amount).into_vec()
}
