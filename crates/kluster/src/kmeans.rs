pub mod init;
pub mod lloyds;
pub mod plus_plus_init;

// References:
// - https://scikit-learn.org/stable/modules/generated/sklearn.cluster.KMeans.html
// - Lloyd, Least Squares Quantization in PCM (1982)
//   https://doi.org/10.1109/TIT.1982.1056489
// - Arthur & Vassilvitskii, k-means++: The Advantages of Careful Seeding (2007)
//   https://theory.stanford.edu/~sergei/papers/kMeansPP-soda.pdf

// sklearn KMeans default
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// How the first round's cluster assignment is produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Init {
    /// Shuffle the point indices and deal them into `k` near-equal
    /// contiguous blocks; the block index is the initial cluster id.
    #[default]
    EqualBlocks,
    /// Seed centroids from `k` distinct randomly chosen points.
    RandomSample,
    /// Greedy k-means++ seeding.
    PlusPlus,
}

/// The outcome of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// One cluster id in `0..k` per point index.
    pub assignments: Vec<usize>,
    /// Flat row-major centroid coordinates, `k * dim` values. These are the
    /// centroids the final assignment was computed against.
    pub centroids: Vec<f32>,
    pub dim: usize,
    /// Refinement rounds actually run.
    pub iterations: usize,
    /// False when the iteration bound cut the run short before the
    /// assignment stabilized.
    pub converged: bool,
}

impl Clustering {
    pub fn k(&self) -> usize {
        self.centroids.len() / self.dim
    }

    pub fn centroid(&self, c: usize) -> &[f32] {
        &self.centroids[c * self.dim..(c + 1) * self.dim]
    }
}
