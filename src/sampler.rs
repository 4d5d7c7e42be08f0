use rand::seq::SliceRandom;
use rand::Rng;

/// Draws `min(count, pool.len())` distinct elements of `pool` in random order.
///
/// Positions are shuffled rather than elements, so the pool is left untouched
/// and no element can be picked twice.
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let amount = count.min(pool.len());
    let mut positions: Vec<usize> = (0..pool.len()).collect();
    let (chosen, _) = positions.partial_shuffle(rng, amount);
    chosen.iter().map(|&i| pool[i].clone()).collect()
}
