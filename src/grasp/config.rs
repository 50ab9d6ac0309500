//! GRASP configuration.

use crate::local_search::LocalSearchConfig;

/// Configuration parameters for the GRASP driver.
///
/// # Examples
///
/// ```
/// use maxcut_grasp::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_alpha(0.8)
///     .with_max_iterations(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// RCL greediness in `[0, 1]`: 1 is pure greedy selection, 0 is
    /// uniform selection over all remaining vertices.
    pub alpha: f64,
    /// Fixed iteration budget. Each iteration is an independent
    /// construction + local search; there is no convergence criterion.
    pub max_iterations: usize,
    /// Settings for the local-search phase of every iteration.
    pub local_search: LocalSearchConfig,
    /// Random seed (`None` draws one from the process RNG).
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            max_iterations: 50,
            local_search: LocalSearchConfig::default(),
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Sets the RCL parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the local-search configuration.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(GraspConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(GraspConfig::default().with_alpha(1.5).validate().is_err());
        assert!(GraspConfig::default().with_alpha(-0.1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(GraspConfig::default().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = GraspConfig::default()
            .with_alpha(0.9)
            .with_max_iterations(10)
            .with_seed(7);
        assert_eq!(config.alpha, 0.9);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.seed, Some(7));
    }
}
