use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle the point indices and deal them into `k` near-equal contiguous
/// blocks, assigning block index `c` as the initial cluster id.
///
/// Block sizes differ by at most one, so no cluster starts out empty.
pub fn equal_blocks(rng: &mut impl Rng, n: usize, k: usize) -> Vec<usize> {
    assert!(k >= 1);
    assert!(k <= n);

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let base = n / k;
    let extra = n % k;

    let mut assignments = vec![0usize; n];
    let mut next = 0;
    for c in 0..k {
        // The first `extra` blocks absorb the remainder
        let block = base + usize::from(c < extra);
        for &idx in &order[next..next + block] {
            assignments[idx] = c;
        }
        next += block;
    }
    assert_eq!(next, n);

    assignments
}

/// Draw `k` distinct point indices to seed centroids from.
pub fn random_sample(rng: &mut impl Rng, n: usize, k: usize) -> Vec<usize> {
    assert!(k >= 1);
    assert!(k <= n);

    rand::seq::index::sample(rng, n, k).into_vec()
}
