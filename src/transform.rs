use std::fmt;
use std::ops::Mul;

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use tracing::debug;

use crate::bounds::BoundingBox;
use crate::error::{LatticeError, Result};
use crate::lanes::{self, Lanes};
use crate::point::Point;

/// A symmetry of the `D`-dimensional lattice: a signed permutation of the axes.
///
/// Stored in gather form: output axis `k` reads input axis `perm[k]` and
/// multiplies it by `signs[k]`. Lanes past `D` hold the identity, so every
/// dimension shares the same [`Transform::IDENTITY`] vector.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform<const D: usize> {
    perm: Lanes,
    signs: Lanes,
}

impl<const D: usize> Transform<D> {
    pub const IDENTITY: Self = Self { perm: lanes::IOTA, signs: lanes::ONES };

    pub fn identity() -> Self {
        lanes::assert_dim::<D>();
        Self::IDENTITY
    }

    /// Sends input axis `i` to output axis `perm[i]`, scaled by `signs[i]`.
    ///
    /// The matrix of the result has `M[perm[i]][i] = signs[i]`, so
    /// `new([1, 0], [1, -1])` rotates `(2, 3)` to `(-3, 2)`.
    pub fn new(perm: [usize; D], signs: [i32; D]) -> Result<Self> {
        lanes::assert_dim::<D>();
        let mut seen = [false; D];
        for &axis in &perm {
            if axis >= D || seen[axis] {
                return Err(LatticeError::InvalidPermutation { perm: perm.to_vec(), dim: D });
            }
            seen[axis] = true;
        }
        if let Some((axis, &sign)) = signs.iter().enumerate().find(|&(_, &s)| s != 1 && s != -1) {
            return Err(LatticeError::InvalidSign { axis, sign });
        }
        Ok(Self::from_scatter(&perm, &signs))
    }

    fn from_scatter(perm: &[usize; D], signs: &[i32; D]) -> Self {
        let mut t = Self::identity();
        for i in 0..D {
            t.perm[perm[i]] = i as i32;
            t.signs[perm[i]] = signs[i];
        }
        t
    }

    /// A transform taking `p` onto `q`.
    ///
    /// Target axes are filled in ascending order, each from the lowest unused
    /// source axis of equal magnitude, with a sign flip when the values differ.
    /// Fails when `q` is not a signed rearrangement of `p`.
    pub fn between(p: &Point<D>, q: &Point<D>) -> Result<Self> {
        let (from, to) = (p.coords(), q.coords());
        let mut used = [false; D];
        let mut t = Self::identity();
        for k in 0..D {
            let source = (0..D).find(|&i| !used[i] && from[i].unsigned_abs() == to[k].unsigned_abs());
            let Some(i) = source else {
                debug!(%p, %q, axis = k, "points are not related by a lattice symmetry");
                return Err(LatticeError::NoSymmetry { from: p.to_string(), to: q.to_string() });
            };
            used[i] = true;
            t.perm[k] = i as i32;
            t.signs[k] = if from[i] == to[k] { 1 } else { -1 };
        }
        Ok(t)
    }

    /// Draws a uniformly random element of the group from `rng`.
    ///
    /// Each axis gets an independent fair sign and the permutation is a
    /// uniform shuffle, so all `D! * 2^D` elements are equally likely.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        lanes::assert_dim::<D>();
        let signs: [i32; D] = std::array::from_fn(|_| if rng.gen_bool(0.5) { 1 } else { -1 });
        let mut perm: [usize; D] = std::array::from_fn(|i| i);
        perm.shuffle(rng);
        Self::from_scatter(&perm, &signs)
    }

    /// [`Transform::sample`] using the calling thread's generator.
    pub fn random() -> Self {
        Self::sample(&mut rand::thread_rng())
    }

    /// Number of elements in the group, `D! * 2^D`.
    pub const fn group_order() -> usize {
        let mut order = 1 << D;
        let mut k = 2;
        while k <= D {
            order *= k;
            k += 1;
        }
        order
    }

    /// Every element of the group, permutations in lexicographic order and
    /// sign patterns counted in binary within each permutation.
    pub fn all() -> Vec<Self> {
        let mut out = Vec::with_capacity(Self::group_order());
        let mut perm: [usize; D] = std::array::from_fn(|i| i);
        loop {
            for flips in 0..1u32 << D {
                let signs = std::array::from_fn(|i| if flips & (1 << i) != 0 { -1 } else { 1 });
                out.push(Self::from_scatter(&perm, &signs));
            }
            if !next_permutation(&mut perm) {
                break;
            }
        }
        out
    }

    /// Permutes the coordinates of `p`, then applies the signs.
    ///
    /// Negation wraps, so a coordinate of `i32::MIN` maps to itself under a
    /// sign flip. Coordinates must be greater than `i32::MIN` for the result
    /// to be the lattice image.
    pub fn apply(&self, p: &Point<D>) -> Point<D> {
        Point::from_lanes(lanes::mul(&lanes::permute(p.lanes(), &self.perm), &self.signs))
    }

    /// Transforms both corners of `b`, then re-sorts each axis so min <= max.
    ///
    /// An empty box is returned as is; sorting its bounds would make it non-empty.
    /// Like [`Transform::apply`], bounds must be greater than `i32::MIN`, or
    /// the image no longer contains the images of the box's points.
    pub fn apply_box(&self, b: &BoundingBox<D>) -> BoundingBox<D> {
        if b.is_empty() {
            return *b;
        }
        let perm = lanes::widen_permutation(&self.perm, D);
        let signs = lanes::replicate_low(&self.signs, D);
        let corners = lanes::mul(&lanes::permute(b.lanes(), &perm), &signs);
        BoundingBox::from_lanes(lanes::sort_bounds(&corners, D))
    }

    /// The transform that applies `other` first and `self` second.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            perm: lanes::permute(&other.perm, &self.perm),
            signs: lanes::mul(&self.signs, &lanes::permute(&other.signs, &self.perm)),
        }
    }

    pub fn inverse(&self) -> Self {
        let mut inv = Self::identity();
        for k in 0..D {
            let source = self.perm[k] as usize;
            inv.perm[source] = k as i32;
            inv.signs[source] = self.signs[k];
        }
        inv
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Target axis of each input axis, the `perm` accepted by [`Transform::new`].
    pub fn permutation(&self) -> [usize; D] {
        let inv = self.inverse();
        std::array::from_fn(|i| inv.perm[i] as usize)
    }

    /// Sign applied to each input axis, the `signs` accepted by [`Transform::new`].
    pub fn signs(&self) -> [i32; D] {
        let inv = self.inverse();
        std::array::from_fn(|i| inv.signs[i])
    }

    /// Signed permutation matrix `M` with `M * p == self.apply(p)`.
    pub fn to_matrix(&self) -> [[i32; D]; D] {
        let mut m = [[0; D]; D];
        for (k, row) in m.iter_mut().enumerate() {
            row[self.perm[k] as usize] = self.signs[k];
        }
        m
    }
}

fn next_permutation(perm: &mut [usize]) -> bool {
    let Some(i) = perm.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i] {
        j -= 1;
    }
    perm.swap(i, j);
    perm[i + 1..].reverse();
    true
}

impl<const D: usize> Default for Transform<D> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const D: usize> Distribution<Transform<D>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Transform<D> {
        Transform::sample(rng)
    }
}

impl<const D: usize> Mul<Point<D>> for Transform<D> {
    type Output = Point<D>;

    fn mul(self, p: Point<D>) -> Point<D> {
        self.apply(&p)
    }
}

impl<const D: usize> Mul<BoundingBox<D>> for Transform<D> {
    type Output = BoundingBox<D>;

    fn mul(self, b: BoundingBox<D>) -> BoundingBox<D> {
        self.apply_box(&b)
    }
}

impl<const D: usize> Mul for Transform<D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<const D: usize> fmt::Display for Transform<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, row) in self.to_matrix().iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row:?}")?;
        }
        write!(f, "]")
    }
}

impl<const D: usize> fmt::Debug for Transform<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("perm", &self.permutation())
            .field("signs", &self.signs())
            .finish()
    }
}
