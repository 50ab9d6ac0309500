//! Error types for the MAX-CUT heuristics.

use thiserror::Error;

/// Result type alias for heuristic operations.
pub type CutResult<T> = Result<T, MaxCutError>;

/// Unified error type for all heuristic operations.
///
/// All variants are non-recoverable for the single heuristic invocation in
/// which they occur: the GRASP driver aborts the whole run rather than
/// skipping a failed iteration, since silently dropping iterations would
/// bias the best-of-N result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaxCutError {
    /// The heaviest-edge query was made on a graph with no edges. The
    /// gain-seeded construction heuristics need at least one edge to seed
    /// the initial partition.
    #[error("heaviest edge queried on a graph with no edges")]
    EmptyGraph,

    /// Restricted-candidate-list selection was invoked with zero candidates.
    /// Unreachable if the construction loop terminates correctly on an
    /// empty remaining-vertex set; kept as an explicit safety net.
    #[error("candidate selection invoked with no candidates")]
    NoCandidates,

    /// The canonical cut weight disagrees with the incrementally tracked
    /// weight after a local-search commit. Signals a gain-cache bug; the
    /// search run is aborted rather than letting corrupted weights flow
    /// into GRASP comparisons.
    #[error("gain cache inconsistent: canonical weight {expected}, tracked weight {actual}")]
    InconsistentCache {
        /// Weight recomputed from scratch.
        expected: i64,
        /// Weight maintained incrementally across flips.
        actual: i64,
    },
}
