pub mod kmeans;
pub mod metric;
pub mod rng;

use crate::kmeans::{init, lloyds, plus_plus_init, Clustering, Init};
use crate::metric::{Metric, SquaredEuclidean};
use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParameterError {
    #[snafu(display("point dimensionality must be positive"))]
    ZeroDimension,

    #[snafu(display("dataset is empty"))]
    EmptyDataset,

    #[snafu(display("buffer length {len} is not a multiple of dimensionality {dim}"))]
    RaggedBuffer { len: usize, dim: usize },

    #[snafu(display("cluster count must be positive"))]
    ZeroClusters,

    #[snafu(display("cluster count {k} exceeds dataset size {n}"))]
    TooManyClusters { k: usize, n: usize },

    #[snafu(display("iteration bound must be positive"))]
    ZeroIterationBound,
}

/// A structure used as a façade for the dataset coordinates.
///
/// Points live in a flat row-major buffer: point `i` occupies
/// `buf[i * dim..(i + 1) * dim]`. The flat layout makes mixed
/// dimensionality within one dataset unrepresentable.
#[derive(Debug, Copy, Clone)]
pub struct Dataset<'a> {
    dim: usize,
    buf: &'a [f32],
}

impl Dataset<'_> {
    /// Wrap a flat coordinate buffer of `n * dim` values.
    ///
    /// ```
    /// let buf = [0.0, 0.0, 0.0, 1.0, 10.0, 0.0, 10.0, 1.0];
    /// let dataset = kluster::Dataset::from_flat(2, &buf).unwrap();
    /// assert_eq!(dataset.len(), 4);
    /// ```
    pub fn from_flat(dim: usize, buf: &[f32]) -> Result<Dataset<'_>, ParameterError> {
        ensure!(dim > 0, ZeroDimensionSnafu);
        ensure!(!buf.is_empty(), EmptyDatasetSnafu);
        ensure!(
            buf.len().is_multiple_of(dim),
            RaggedBufferSnafu {
                len: buf.len(),
                dim
            }
        );

        Ok(Dataset { dim, buf })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() / self.dim
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn point(&self, i: usize) -> &[f32] {
        &self.buf[i * self.dim..(i + 1) * self.dim]
    }

    #[inline]
    pub fn points(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.buf.chunks_exact(self.dim)
    }
}

/// Partition a dataset into `k` clusters.
///
/// Default behavior: squared Euclidean distance, equal-block random
/// initialization, and the default seed. Refinement stops as soon as a
/// reassignment round changes nothing, or after `max_iterations` rounds;
/// hitting the bound is not an error and is reported through
/// [`Clustering::converged`].
///
/// ```
/// let buf = [0.0, 0.0, 0.0, 1.0, 10.0, 0.0, 10.0, 1.0];
/// let dataset = kluster::Dataset::from_flat(2, &buf).unwrap();
///
/// let result = kluster::cluster(dataset, 2, 300).unwrap();
///
/// assert_eq!(result.assignments.len(), 4);
/// assert!(result.converged);
/// ```
///
/// Fails with [`ParameterError`] when `k` is zero, `k` exceeds the dataset
/// size, or `max_iterations` is zero; dataset shape problems are caught at
/// [`Dataset::from_flat`]. No work happens before validation passes.
///
/// See also [`cluster_extra`] for the same function with a caller-supplied
/// metric, initialization strategy, and seed.
pub fn cluster(
    dataset: Dataset,
    k: usize,
    max_iterations: usize,
) -> Result<Clustering, ParameterError> {
    cluster_extra(
        dataset,
        k,
        &SquaredEuclidean,
        Init::EqualBlocks,
        max_iterations,
        rng::DEFAULT_SEED,
    )
}

/// [`cluster`] with every knob exposed.
///
/// Identical inputs, strategy, and seed always produce the identical
/// [`Clustering`].
///
/// ```
/// use kluster::kmeans::Init;
/// use kluster::metric::SquaredEuclidean;
///
/// let buf = [0.0, 0.0, 0.1, 0.1, 5.0, 5.0, 5.1, 5.1];
/// let dataset = kluster::Dataset::from_flat(2, &buf).unwrap();
///
/// let result =
///     kluster::cluster_extra(dataset, 2, &SquaredEuclidean, Init::PlusPlus, 300, 42).unwrap();
///
/// assert!(result.converged);
/// assert_eq!(result.k(), 2);
/// ```
pub fn cluster_extra<M: Metric<[f32]>>(
    dataset: Dataset,
    k: usize,
    metric: &M,
    init: Init,
    max_iterations: usize,
    seed: u64,
) -> Result<Clustering, ParameterError> {
    let n = dataset.len();
    ensure!(k > 0, ZeroClustersSnafu);
    ensure!(k <= n, TooManyClustersSnafu { k, n });
    ensure!(max_iterations > 0, ZeroIterationBoundSnafu);

    let mut rng = rng::with_seed(seed);

    let assignments = match init {
        Init::EqualBlocks => init::equal_blocks(&mut rng, n, k),
        Init::RandomSample => {
            let seeds = init::random_sample(&mut rng, n, k);
            lloyds::reassign(dataset, &lloyds::seed_centroids(dataset, &seeds), metric)
        }
        Init::PlusPlus => {
            let seeds = plus_plus_init::find_initial(&mut rng, dataset, k, metric);
            lloyds::reassign(dataset, &lloyds::seed_centroids(dataset, &seeds), metric)
        }
    };

    Ok(lloyds::lloyds_loop(
        &mut rng,
        dataset,
        k,
        metric,
        assignments,
        max_iterations,
    ))
}
