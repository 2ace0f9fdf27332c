//! Run configuration shared by the kernel's consumers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{LatticeError, Result};
use crate::lanes::MAX_DIM;
use crate::sampler::TransformSampler;

/// Checks a dimension that arrives at run time, e.g. from a command line.
pub fn check_dimension(dim: usize) -> Result<usize> {
    if (1..=MAX_DIM).contains(&dim) {
        Ok(dim)
    } else {
        warn!(dim, max = MAX_DIM, "rejecting unsupported dimension");
        Err(LatticeError::UnsupportedDimension { dim })
    }
}

/// Dimension, seed and worker count for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatticeConfig {
    pub dim: usize,
    /// Seed for every generator derived from this config. Drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Worker threads, 0 for the rayon default.
    pub workers: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self { dim: 2, seed: None, workers: 0 }
    }
}

impl LatticeConfig {
    pub fn validate(&self) -> Result<()> {
        check_dimension(self.dim)?;
        Ok(())
    }

    /// The configured seed, drawing and recording one if none was set.
    ///
    /// A drawn seed is logged so the run can be replayed.
    pub fn resolve_seed(&mut self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed: u64 = rand::random();
                info!(seed, "no seed configured, drew one from entropy");
                self.seed = Some(seed);
                seed
            }
        }
    }

    pub fn rng(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.resolve_seed())
    }

    /// A sampler for dimension `D`, which must match the configured dimension.
    pub fn sampler<const D: usize>(&mut self) -> Result<TransformSampler<D>> {
        self.validate()?;
        if self.dim != D {
            return Err(LatticeError::DimensionMismatch { configured: self.dim, requested: D });
        }
        Ok(TransformSampler::from_seed(self.resolve_seed()))
    }

    pub fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.workers).build()?;
        debug!(threads = pool.current_num_threads(), "built worker pool");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimension() {
        assert_eq!(check_dimension(2).unwrap(), 2);
        assert_eq!(check_dimension(MAX_DIM).unwrap(), MAX_DIM);
        assert!(matches!(check_dimension(0), Err(LatticeError::UnsupportedDimension { dim: 0 })));
        assert!(matches!(check_dimension(5), Err(LatticeError::UnsupportedDimension { dim: 5 })));
    }

    #[test]
    fn test_resolve_seed_is_sticky() {
        let mut config = LatticeConfig::default();
        let seed = config.resolve_seed();
        assert_eq!(config.seed, Some(seed));
        assert_eq!(config.resolve_seed(), seed);
    }

    #[test]
    fn test_sampler_dimension_mismatch() {
        let mut config = LatticeConfig { dim: 3, seed: Some(1), workers: 0 };
        assert!(matches!(
            config.sampler::<2>(),
            Err(LatticeError::DimensionMismatch { configured: 3, requested: 2 })
        ));
        assert!(config.sampler::<3>().is_ok());
    }

    #[test]
    fn test_thread_pool_size() {
        let config = LatticeConfig { workers: 2, ..Default::default() };
        assert_eq!(config.thread_pool().unwrap().current_num_threads(), 2);
    }
}
