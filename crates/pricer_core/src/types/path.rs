//! Simulated price trajectories.
//!
//! A [`Path`] is the ordered sequence of asset prices a model produces for
//! one Monte Carlo run: `n_steps + 1` points with element 0 the initial
//! spot. Paths are freshly allocated per simulation run, owned exclusively
//! by the caller that requested them, and immutable once produced.

/// A simulated price trajectory.
///
/// Invariants (maintained by the generating model):
/// - every element is strictly positive,
/// - the length is fixed once generated (`n_steps + 1` points).
///
/// The statistics accessors ([`minimum`](Path::minimum),
/// [`maximum`](Path::maximum), [`arithmetic_average`](Path::arithmetic_average),
/// [`geometric_average`](Path::geometric_average)) require a non-empty path;
/// payoff evaluation rejects empty paths before calling them.
///
/// # Examples
/// ```
/// use pricer_core::types::Path;
///
/// let path = Path::new(vec![100.0, 110.0, 90.0, 105.0]);
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.spot(), 100.0);
/// assert_eq!(path.terminal(), 105.0);
/// assert_eq!(path.maximum(), 110.0);
/// assert_eq!(path.minimum(), 90.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Path(Vec<f64>);

impl Path {
    /// Wraps a completed trajectory.
    ///
    /// Positivity of the points is the generating model's responsibility;
    /// it is asserted in debug builds only.
    pub fn new(points: Vec<f64>) -> Self {
        debug_assert!(points.iter().all(|&p| p > 0.0));
        Self(points)
    }

    /// Number of points in the trajectory (`n_steps + 1` when generated).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the trajectory holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The initial spot price (element 0).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.0[0]
    }

    /// The final price S_T (last element).
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Borrow the raw points.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the points.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Smallest price observed along the path.
    pub fn minimum(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest price observed along the path.
    pub fn maximum(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Arithmetic mean of all path points.
    pub fn arithmetic_average(&self) -> f64 {
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// Geometric mean of all path points: exp of the mean of logs.
    ///
    /// Well defined because every point is strictly positive.
    pub fn geometric_average(&self) -> f64 {
        let log_mean = self.0.iter().map(|&p| p.ln()).sum::<f64>() / self.0.len() as f64;
        log_mean.exp()
    }

    /// Consumes the path and returns the underlying points.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
