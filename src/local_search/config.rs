//! Local search configuration.

/// Which improving flip a round commits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImprovementRule {
    /// Scan the vertices in a fresh random order each round and commit the
    /// first strictly improving flip found, then restart the round. The
    /// random order diversifies which local optimum is reached.
    #[default]
    FirstImprovement,
    /// Scan all vertices each round and commit only the single flip with
    /// the globally best positive gain. Fewer, larger steps; a different
    /// convergence/quality tradeoff, not a better one.
    BestImprovement,
}

/// Configuration parameters for single-vertex-flip local search.
///
/// # Examples
///
/// ```
/// use maxcut_grasp::local_search::{ImprovementRule, LocalSearchConfig};
///
/// let config = LocalSearchConfig::default()
///     .with_rule(ImprovementRule::BestImprovement)
///     .with_verify_weight(true);
/// assert_eq!(config.rule, ImprovementRule::BestImprovement);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Flip-selection rule.
    pub rule: ImprovementRule,
    /// After every committed flip, recompute the cut weight from scratch
    /// and compare it with the incrementally tracked weight, aborting with
    /// [`crate::MaxCutError::InconsistentCache`] on mismatch. Turns the
    /// O(degree) commit into O(E); intended for debugging, off by default.
    pub verify_weight: bool,
}

impl LocalSearchConfig {
    /// Sets the flip-selection rule.
    pub fn with_rule(mut self, rule: ImprovementRule) -> Self {
        self.rule = rule;
        self
    }

    /// Enables or disables the defensive weight cross-check.
    pub fn with_verify_weight(mut self, verify: bool) -> Self {
        self.verify_weight = verify;
        self
    }
}
