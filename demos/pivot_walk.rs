//! Toy pivot-algorithm run built on the lattice kernel.
//!
//! Usage: `cargo run --release --example pivot_walk -- '{"dim": 2, "seed": 1}' 1000 10000`
//! (config JSON, number of steps, number of pivot attempts). Set `RUST_LOG=debug` to see
//! the kernel's own logging.

use std::collections::HashSet;
use std::error::Error;

use pivot_lattice::{BoundingBox, LatticeConfig, LatticeError, Point, Transform};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let mut config: LatticeConfig = match args.next() {
        Some(json) => serde_json::from_str(&json)?,
        None => LatticeConfig::default(),
    };
    let steps: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1000);
    let iters: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(10_000);
    if steps < 2 {
        return Err("a walk needs at least two steps to pivot".into());
    }

    match config.dim {
        1 => run::<1>(&mut config, steps, iters),
        2 => run::<2>(&mut config, steps, iters),
        3 => run::<3>(&mut config, steps, iters),
        4 => run::<4>(&mut config, steps, iters),
        dim => Err(LatticeError::UnsupportedDimension { dim }.into()),
    }
}

fn run<const D: usize>(config: &mut LatticeConfig, steps: usize, iters: usize) -> Result<(), Box<dyn Error>> {
    let mut rng = config.rng();
    let mut walk: Vec<Point<D>> = (0..=steps as i32).map(|i| Point::unit(0) * i).collect();

    let mut accepted = 0;
    for _ in 0..iters {
        let pivot = rng.gen_range(1..walk.len() - 1);
        let t = Transform::<D>::sample(&mut rng);
        if t.is_identity() {
            continue;
        }
        if let Some(moved) = try_pivot(&walk, pivot, &t) {
            walk[pivot + 1..].copy_from_slice(&moved);
            accepted += 1;
        }
    }

    let hull = BoundingBox::hull(&walk)?;
    let end_to_end = walk[walk.len() - 1] - walk[0];
    info!(accepted, iters, "pivot run finished");
    println!("dimension:        {D}");
    println!("accepted pivots:  {accepted} / {iters}");
    println!("end-to-end:       {end_to_end} (squared norm {})", end_to_end.norm());
    println!("bounding box:     {hull}");
    Ok(())
}

/// Rotates the walk after `pivot` about site `pivot`, or `None` if the result self-intersects.
fn try_pivot<const D: usize>(walk: &[Point<D>], pivot: usize, t: &Transform<D>) -> Option<Vec<Point<D>>> {
    let origin = walk[pivot];
    let (fixed, tail) = walk.split_at(pivot + 1);
    let moved: Vec<Point<D>> = tail.iter().map(|&p| *t * (p - origin) + origin).collect();

    // Disjoint bounds cannot collide, so skip the site-by-site check.
    let fixed_box = BoundingBox::hull(fixed).ok()?;
    let moved_box = *t * (BoundingBox::hull(tail).ok()? - origin) + origin;
    if !fixed_box.intersects(&moved_box) {
        return Some(moved);
    }

    let sites: HashSet<Point<D>> = fixed.iter().copied().collect();
    moved.iter().all(|p| !sites.contains(p)).then_some(moved)
}
