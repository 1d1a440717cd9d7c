use crate::metric::Metric;
use crate::Dataset;
use rand::Rng;
use std::array;

// Scikit samples (2 + log(k)) candidates per step; 3 covers the small k
// this crate is typically run with
const N_CANDIDATES: usize = 3;

/// Draw one point index with probability proportional to its current
/// minimum distance.
#[inline(always)]
fn sample_by_distance(rng: &mut impl Rng, min_distances: &[f32], sum: f32) -> usize {
    let threshold = rng.random::<f32>() * sum;

    let mut acc = 0.0;
    for (i, &d) in min_distances.iter().enumerate() {
        acc += d;
        if acc > threshold {
            return i;
        }
    }

    min_distances.len() - 1
}

/// Greedy k-means++ seeding: every step samples `N_CANDIDATES` points by
/// distance and keeps the one minimising the total potential (the sum of
/// per-point minimum distances).
pub fn find_initial<M: Metric<[f32]>>(
    rng: &mut impl Rng,
    dataset: Dataset,
    k: usize,
    metric: &M,
) -> Vec<usize> {
    let n = dataset.len();
    assert!(k >= 1);
    assert!(k <= n);

    let mut chosen = Vec::<usize>::with_capacity(k);
    let first = rng.random_range(0..n);
    chosen.push(first);

    let mut min_distances = vec![0.0f32; n];
    let mut min_distances_sum = 0.0f32;
    for i in 0..n {
        let d = metric.distance(dataset.point(i), dataset.point(first));
        min_distances[i] = d;
        min_distances_sum += d;
    }

    // One scratch buffer per candidate, reused across steps
    let mut scratch: [_; N_CANDIDATES] = array::from_fn(|_| vec![0.0f32; n]);

    for _ in 1..k {
        let mut candidates = [0usize; N_CANDIDATES];
        for candidate in candidates.iter_mut() {
            *candidate = sample_by_distance(rng, &min_distances, min_distances_sum);
        }

        let mut potentials = [0.0f32; N_CANDIDATES];

        // mut slices reassure the compiler that the scratch vectors don't alias
        let scratch_slices = scratch.each_mut().map(|v| v.as_mut_slice());

        for i in 0..n {
            let point = dataset.point(i);
            let current_min = min_distances[i];
            for (j, &candidate) in candidates.iter().enumerate() {
                let d = metric
                    .distance(point, dataset.point(candidate))
                    .min(current_min);
                scratch_slices[j][i] = d;
                potentials[j] += d;
            }
        }

        let mut best = 0;
        for j in 1..N_CANDIDATES {
            if potentials[j] < potentials[best] {
                best = j;
            }
        }

        std::mem::swap(&mut min_distances, &mut scratch[best]);
        min_distances_sum = potentials[best];
        chosen.push(candidates[best]);
    }

    chosen
}
