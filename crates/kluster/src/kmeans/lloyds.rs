use crate::kmeans::Clustering;
use crate::metric::Metric;
use crate::Dataset;
use rand::Rng;

/// Compute the coordinate-wise mean of each cluster's members.
///
/// Takes the previous round's assignment and returns a fresh flat centroid
/// buffer of `k * dim` values. A cluster that lost all of its members is
/// reseeded to a randomly chosen dataset point, so every returned centroid
/// is always defined.
pub fn update_centroids(
    rng: &mut impl Rng,
    dataset: Dataset,
    k: usize,
    assignments: &[usize],
) -> Vec<f32> {
    let dim = dataset.dim();
    let n = dataset.len();
    assert_eq!(assignments.len(), n);

    let mut sums = vec![0.0f32; k * dim];
    let mut counts = vec![0u32; k];

    for (point, &assigned_c) in dataset.points().zip(assignments) {
        assert!(assigned_c < k);

        counts[assigned_c] += 1;
        let sum = &mut sums[assigned_c * dim..(assigned_c + 1) * dim];
        for (s, &x) in sum.iter_mut().zip(point) {
            *s += x;
        }
    }

    for (c, &count) in counts.iter().enumerate() {
        let centroid = &mut sums[c * dim..(c + 1) * dim];

        if count == 0 {
            // Lost cluster: reseed from a random point so the centroid
            // stays defined
            let idx = rng.random_range(0..n);
            centroid.copy_from_slice(dataset.point(idx));
            continue;
        }

        for s in centroid {
            *s /= count as f32;
        }
    }

    sums
}

/// Assign every point to its minimum-distance centroid.
///
/// Ties go to the lowest cluster id (strict `<` scan), which keeps the
/// result reproducible.
pub fn reassign<M: Metric<[f32]>>(dataset: Dataset, centroids: &[f32], metric: &M) -> Vec<usize> {
    let dim = dataset.dim();
    assert!(!centroids.is_empty());
    assert!(centroids.len().is_multiple_of(dim));

    let mut assignments = Vec::with_capacity(dataset.len());
    for point in dataset.points() {
        let mut min = f32::MAX;
        let mut min_idx = 0;
        for (c, centroid) in centroids.chunks_exact(dim).enumerate() {
            let d = metric.distance(point, centroid);
            if d < min {
                min = d;
                min_idx = c;
            }
        }
        assignments.push(min_idx);
    }

    assignments
}

/// Gather a flat centroid buffer from the points at the given indices.
pub fn seed_centroids(dataset: Dataset, seeds: &[usize]) -> Vec<f32> {
    let mut centroids = Vec::with_capacity(seeds.len() * dataset.dim());
    for &idx in seeds {
        centroids.extend_from_slice(dataset.point(idx));
    }
    centroids
}

/// Total within-cluster dissimilarity under the given metric.
pub fn inertia<M: Metric<[f32]>>(
    dataset: Dataset,
    centroids: &[f32],
    assignments: &[usize],
    metric: &M,
) -> f32 {
    let dim = dataset.dim();
    assert_eq!(assignments.len(), dataset.len());

    dataset
        .points()
        .zip(assignments)
        .map(|(point, &c)| metric.distance(point, &centroids[c * dim..(c + 1) * dim]))
        .sum()
}

/// Alternate centroid updates and reassignment until the assignment
/// stabilizes, starting from an initial assignment.
///
/// Stops early once a reassignment round changes nothing; otherwise runs
/// exactly `max_iterations` rounds and reports `converged: false`. The
/// returned centroids are the ones the returned assignment was computed
/// against, whether or not the run converged.
pub fn lloyds_loop<M: Metric<[f32]>>(
    rng: &mut impl Rng,
    dataset: Dataset,
    k: usize,
    metric: &M,
    mut assignments: Vec<usize>,
    max_iterations: usize,
) -> Clustering {
    assert_eq!(assignments.len(), dataset.len());
    assert!(k >= 1);
    assert!(k <= dataset.len());
    assert!(max_iterations >= 1);

    let mut centroids = Vec::new();
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iterations {
        centroids = update_centroids(rng, dataset, k, &assignments);
        let next = reassign(dataset, &centroids, metric);
        iterations += 1;

        if next == assignments {
            converged = true;
            break;
        }
        assignments = next;
    }

    Clustering {
        assignments,
        centroids,
        dim: dataset.dim(),
        iterations,
        converged,
    }
}
