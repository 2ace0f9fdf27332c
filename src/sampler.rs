use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::debug;

use crate::transform::Transform;

/// Transforms drawn per independently seeded generator in [`par_sample`].
const SAMPLE_CHUNK: usize = 1024;

/// Source of random lattice symmetries that owns its generator.
///
/// Each worker should hold its own sampler; nothing is shared between
/// instances, so samplers on different threads never contend.
#[derive(Clone, Debug)]
pub struct TransformSampler<const D: usize> {
    rng: StdRng,
}

impl<const D: usize> TransformSampler<D> {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn next_transform(&mut self) -> Transform<D> {
        Transform::sample(&mut self.rng)
    }
}

impl<const D: usize> Iterator for TransformSampler<D> {
    type Item = Transform<D>;

    fn next(&mut self) -> Option<Transform<D>> {
        Some(self.next_transform())
    }
}

/// Draws `count` transforms on the rayon pool.
///
/// The output depends only on `seed` and `count`: work is split into fixed
/// chunks, each with its own generator derived from the seed and chunk index.
pub fn par_sample<const D: usize>(seed: u64, count: usize) -> Vec<Transform<D>> {
    let chunks = count.div_ceil(SAMPLE_CHUNK);
    debug!(count, chunks, threads = rayon::current_num_threads(), "sampling transforms");
    (0..chunks)
        .into_par_iter()
        .flat_map_iter(|chunk| {
            let len = SAMPLE_CHUNK.min(count - chunk * SAMPLE_CHUNK);
            TransformSampler::<D>::from_seed(chunk_seed(seed, chunk)).take(len)
        })
        .collect()
}

fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
