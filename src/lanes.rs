//! Fixed-width batched integer arithmetic.
//!
//! Every kernel type is backed by a [`Lanes`] vector: eight `i32` slots, the
//! width of one 256-bit register. The functions here are the only primitives
//! the rest of the crate uses to touch those slots, so the min/max/select
//! tricks in [`crate::BoundingBox`] and [`crate::Transform`] read as plain
//! lane algebra. All arithmetic wraps like hardware lane arithmetic does.
//!
//! Masks are `u8` bit sets where bit `i` selects lane `i`, in the same spirit
//! as a blend immediate.

/// Number of `i32` lanes in one batched vector.
pub const LANES: usize = 8;

/// Largest dimension a box (min half plus max half) can fit into [`LANES`].
pub const MAX_DIM: usize = LANES / 2;

/// One batched vector of `i32` lanes.
pub type Lanes = [i32; LANES];

/// Lane selection mask, bit `i` refers to lane `i`.
pub type Mask = u8;

pub const ZERO: Lanes = [0; LANES];
pub const ONES: Lanes = [1; LANES];
pub const IOTA: Lanes = iota();

/// Rejects, at compile time, any dimension that does not fit the lane width.
#[inline(always)]
pub(crate) const fn assert_dim<const D: usize>() {
    const { assert!(D >= 1 && D <= MAX_DIM, "dimension must be between 1 and MAX_DIM") }
}

const fn iota() -> Lanes {
    let mut out = [0; LANES];
    let mut i = 0;
    while i < LANES {
        out[i] = i as i32;
        i += 1;
    }
    out
}

/// Broadcasts `value` to every lane.
#[inline]
pub fn splat(value: i32) -> Lanes {
    [value; LANES]
}

/// Reads lane `i`, or `None` past the register width.
#[inline]
pub fn extract(data: &Lanes, i: usize) -> Option<i32> {
    data.get(i).copied()
}

/// Returns `data` with lane `i` replaced by `value`, or `None` past the register width.
#[inline]
pub fn insert(mut data: Lanes, value: i32, i: usize) -> Option<Lanes> {
    *data.get_mut(i)? = value;
    Some(data)
}

#[inline]
pub fn add(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i].wrapping_add(b[i]))
}

#[inline]
pub fn sub(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i].wrapping_sub(b[i]))
}

/// Lane-wise product, keeping the low 32 bits.
#[inline]
pub fn mul(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i].wrapping_mul(b[i]))
}

#[inline]
pub fn min(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i].min(b[i]))
}

#[inline]
pub fn max(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i].max(b[i]))
}

/// Mask of lanes where `a > b`.
#[inline]
pub fn cmpgt(a: &Lanes, b: &Lanes) -> Mask {
    (0..LANES).fold(0, |mask, i| mask | (((a[i] > b[i]) as Mask) << i))
}

/// Mask of lanes where `a == b`.
#[inline]
pub fn cmpeq(a: &Lanes, b: &Lanes) -> Mask {
    (0..LANES).fold(0, |mask, i| mask | (((a[i] == b[i]) as Mask) << i))
}

/// Takes lane `i` from `b` where bit `i` of `mask` is set, otherwise from `a`.
#[inline]
pub fn blend(a: &Lanes, b: &Lanes, mask: Mask) -> Lanes {
    std::array::from_fn(|i| if mask & (1 << i) != 0 { b[i] } else { a[i] })
}

/// Gathers `data[index[i]]` into lane `i`.
///
/// Indices are taken modulo [`LANES`], matching a variable lane permute.
#[inline]
pub fn permute(data: &Lanes, index: &Lanes) -> Lanes {
    std::array::from_fn(|i| data[index[i] as usize % LANES])
}

/// Mask covering lanes `0..d`.
#[inline]
pub const fn low_mask(d: usize) -> Mask {
    ((1u16 << d) - 1) as Mask
}

/// Mask covering lanes `d..2d`.
#[inline]
pub const fn high_mask(d: usize) -> Mask {
    low_mask(d) << d
}

/// Swaps lanes `0..d` with lanes `d..2d`; lanes from `2d` on are unchanged.
///
/// For a box this pairs each axis minimum with its maximum.
#[inline]
pub fn swap_halves(data: &Lanes, d: usize) -> Lanes {
    let index = std::array::from_fn(|i| {
        if i < d {
            (i + d) as i32
        } else if i < 2 * d {
            (i - d) as i32
        } else {
            i as i32
        }
    });
    permute(data, &index)
}

/// Copies lanes `0..d` into lanes `d..2d` and zeroes the rest.
///
/// This is the broadcast used to move both corners of a box by one point.
#[inline]
pub fn replicate_low(data: &Lanes, d: usize) -> Lanes {
    let index = std::array::from_fn(|i| (i % d.max(1)) as i32);
    blend(&ZERO, &permute(data, &index), low_mask(2 * d))
}

/// Extends a gather index over lanes `0..d` to both halves of a box vector.
///
/// Lane `k` and lane `d + k` read from source axis `perm[k]` of their half;
/// lanes from `2d` on map to themselves.
#[inline]
pub fn widen_permutation(perm: &Lanes, d: usize) -> Lanes {
    std::array::from_fn(|i| {
        if i < d {
            perm[i]
        } else if i < 2 * d {
            perm[i - d] + d as i32
        } else {
            i as i32
        }
    })
}

/// Canonically orders `d` possibly inverted pairs.
///
/// Lanes `k` and `d + k` hold the two ends of pair `k`. The result holds the
/// smaller end in lane `k` and the larger in lane `d + k`, so for `d = 2`
/// `(a, b, c, d)` becomes `(min(a, c), min(b, d), max(a, c), max(b, d))`.
#[inline]
pub fn sort_bounds(pairs: &Lanes, d: usize) -> Lanes {
    let swapped = swap_halves(pairs, d);
    let minima = min(pairs, &swapped);
    let maxima = max(pairs, &swapped);
    blend(&minima, &maxima, high_mask(d))
}
