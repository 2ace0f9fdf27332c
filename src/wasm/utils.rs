use wasm_bindgen::prelude::*;
use js_sys::Array;

use crate::error::{LatticeError, Result};
use crate::lanes::MAX_DIM;
use crate::point::Point;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

const TS_CONSTANTS_LANES: &'static str = r#"
export const LATTICE_MAX_DIM = 4;
"#;

#[wasm_bindgen(typescript_custom_section)]
const _: &'static str = TS_CONSTANTS_LANES;

/// Largest supported dimension, matching `LATTICE_MAX_DIM`.
#[wasm_bindgen(js_name = maxDim)]
pub fn max_dim() -> usize {
    MAX_DIM
}

/// Splits a flat `[x0, y0, x1, y1, ...]` list into points, rejecting a trailing partial point.
pub fn points_from_flat<const D: usize>(coords: &[i32]) -> Result<Vec<Point<D>>> {
    let chunks = coords.chunks_exact(D);
    if !chunks.remainder().is_empty() {
        return Err(LatticeError::RaggedCoordinates { len: coords.len(), dim: D });
    }
    Ok(chunks.map(|c| Point::new(std::array::from_fn(|i| c[i]))).collect())
}

/// Reads `D` integer coordinates from a JS array, rejecting non-integers and values outside `i32`.
pub fn parse_js_coords<const D: usize>(val: &JsValue) -> Option<[i32; D]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < D as u32 {
        return None;
    }
    let mut coords = [0; D];
    for (i, c) in coords.iter_mut().enumerate() {
        let x = arr.get(i as u32).as_f64()?;
        if x.fract() != 0.0 || x < f64::from(i32::MIN) || x > f64::from(i32::MAX) {
            return None;
        }
        *c = x as i32;
    }
    Some(coords)
}
