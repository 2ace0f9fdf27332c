use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Sub, SubAssign};

use rayon::prelude::*;

use crate::error::{LatticeError, Result};
use crate::interval::Interval;
use crate::lanes::{self, Lanes};
use crate::point::Point;

/// Points per task when [`BoundingBox::par_hull`] splits its input.
const HULL_CHUNK: usize = 4096;

/// Axis-aligned bounding box on the `D`-dimensional lattice.
///
/// Bounds are packed as `[min_0, .., min_{D-1}, max_0, .., max_{D-1}, 0, ..]`.
/// The box is empty when `min_i > max_i` on any axis. Empty boxes compare
/// equal to each other regardless of their stored bounds, like [`Interval`];
/// use [`BoundingBox::lanes`] for a bit-exact comparison.
#[derive(Clone, Copy)]
pub struct BoundingBox<const D: usize> {
    data: Lanes,
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [i32; D], max: [i32; D]) -> Self {
        lanes::assert_dim::<D>();
        let mut data = lanes::ZERO;
        data[..D].copy_from_slice(&min);
        data[D..2 * D].copy_from_slice(&max);
        Self { data }
    }

    pub fn from_intervals(intervals: [Interval; D]) -> Self {
        Self::new(intervals.map(|i| i.left), intervals.map(|i| i.right))
    }

    /// Wraps raw bound lanes, clearing everything past lane `2D`.
    pub fn from_lanes(data: Lanes) -> Self {
        lanes::assert_dim::<D>();
        Self { data: lanes::blend(&lanes::ZERO, &data, lanes::low_mask(2 * D)) }
    }

    /// Bounds of `points`, stored relative to [`BoundingBox::anchor`].
    ///
    /// Axis 0 is measured from `first[0] - 1` and every other axis from
    /// `first[i]`, so the first point itself sits at `e_0`.
    pub fn from_points(points: &[Point<D>]) -> Result<Self> {
        let mut bounds = Self::hull(points)?;
        bounds -= Self::anchor(points)?;
        Ok(bounds)
    }

    /// The origin [`BoundingBox::from_points`] measures against: `first - e_0`.
    pub fn anchor(points: &[Point<D>]) -> Result<Point<D>> {
        let first = points.first().ok_or(LatticeError::EmptyPointSet)?;
        Ok(*first - Point::unit(0))
    }

    /// Smallest box containing every point, in absolute coordinates.
    pub fn hull(points: &[Point<D>]) -> Result<Self> {
        if points.is_empty() {
            return Err(LatticeError::EmptyPointSet);
        }
        Ok(Self::hull_of(points))
    }

    /// Same as [`BoundingBox::hull`], reducing chunks of the input in parallel.
    pub fn par_hull(points: &[Point<D>]) -> Result<Self> {
        points
            .par_chunks(HULL_CHUNK)
            .map(Self::hull_of)
            .reduce_with(|a, b| a | b)
            .ok_or(LatticeError::EmptyPointSet)
    }

    fn hull_of(points: &[Point<D>]) -> Self {
        lanes::assert_dim::<D>();
        let active = lanes::low_mask(2 * D);
        let mut mins = lanes::blend(&lanes::ZERO, &lanes::splat(i32::MAX), active);
        let mut maxs = lanes::blend(&lanes::ZERO, &lanes::splat(i32::MIN), active);
        for p in points {
            let wide = lanes::replicate_low(p.lanes(), D);
            mins = lanes::min(&mins, &wide);
            maxs = lanes::max(&maxs, &wide);
        }
        Self { data: lanes::blend(&mins, &maxs, lanes::high_mask(D)) }
    }

    pub fn lanes(&self) -> &Lanes {
        &self.data
    }

    pub fn min(&self) -> Point<D> {
        Point::from_lanes(self.data)
    }

    pub fn max(&self) -> Point<D> {
        Point::from_lanes(lanes::swap_halves(&self.data, D))
    }

    /// Projection onto axis `i`.
    ///
    /// # Panics
    /// Panics if `i >= D`.
    #[track_caller]
    pub fn axis(&self, i: usize) -> Interval {
        assert!(i < D, "axis {i} is out of range for dimension {D}");
        Interval::new(self.data[i], self.data[i + D])
    }

    pub fn get(&self, i: usize) -> Option<Interval> {
        (i < D).then(|| Interval::new(self.data[i], self.data[i + D]))
    }

    pub fn intervals(&self) -> [Interval; D] {
        std::array::from_fn(|i| Interval::new(self.data[i], self.data[i + D]))
    }

    /// True when some axis has `min > max`.
    ///
    /// Each minimum is compared against its own maximum by swapping the two
    /// halves, and only the min half of the comparison mask is inspected.
    pub fn is_empty(&self) -> bool {
        let swapped = lanes::swap_halves(&self.data, D);
        lanes::cmpgt(&self.data, &swapped) & lanes::low_mask(D) != 0
    }

    /// Lane-wise minimum and maximum of both boxes, shared by union and intersection.
    fn extrema(&self, other: &Self) -> (Lanes, Lanes) {
        (lanes::min(&self.data, &other.data), lanes::max(&self.data, &other.data))
    }

    /// Hull of both boxes: min half from the minima, max half from the maxima.
    pub fn union(&self, other: &Self) -> Self {
        let (mins, maxs) = self.extrema(other);
        Self { data: lanes::blend(&mins, &maxs, lanes::high_mask(D)) }
    }

    /// Overlap of both boxes: min half from the maxima, max half from the minima.
    ///
    /// Disjoint boxes yield `min > max` on the separating axis, which
    /// [`BoundingBox::is_empty`] reports.
    pub fn intersection(&self, other: &Self) -> Self {
        let (mins, maxs) = self.extrema(other);
        Self { data: lanes::blend(&mins, &maxs, lanes::low_mask(D)) }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        !self.intersection(other).is_empty()
    }

    pub fn contains(&self, p: &Point<D>) -> bool {
        let wide = lanes::replicate_low(p.lanes(), D);
        let below = lanes::cmpgt(&self.data, &wide) & lanes::low_mask(D);
        let above = lanes::cmpgt(&wide, &self.data) & lanes::high_mask(D);
        below | above == 0
    }

    /// True when every point of `other` lies in `self`. Empty boxes are contained in anything.
    pub fn contains_box(&self, other: &Self) -> bool {
        other.is_empty() || lanes::cmpeq(&self.union(other).data, &self.data) == lanes::low_mask(lanes::LANES)
    }
}

impl<const D: usize> PartialEq for BoundingBox<D> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data || (self.is_empty() && other.is_empty())
    }
}

impl<const D: usize> Eq for BoundingBox<D> {}

impl<const D: usize> From<[Interval; D]> for BoundingBox<D> {
    fn from(intervals: [Interval; D]) -> Self {
        Self::from_intervals(intervals)
    }
}

impl<const D: usize> BitOr for BoundingBox<D> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl<const D: usize> BitAnd for BoundingBox<D> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(&rhs)
    }
}

// Translation moves both corners, so the point is replicated into both halves.
impl<const D: usize> AddAssign<Point<D>> for BoundingBox<D> {
    fn add_assign(&mut self, p: Point<D>) {
        self.data = lanes::add(&self.data, &lanes::replicate_low(p.lanes(), D));
    }
}

impl<const D: usize> SubAssign<Point<D>> for BoundingBox<D> {
    fn sub_assign(&mut self, p: Point<D>) {
        self.data = lanes::sub(&self.data, &lanes::replicate_low(p.lanes(), D));
    }
}

impl<const D: usize> Add<Point<D>> for BoundingBox<D> {
    type Output = Self;

    fn add(mut self, p: Point<D>) -> Self {
        self += p;
        self
    }
}

impl<const D: usize> Sub<Point<D>> for BoundingBox<D> {
    type Output = Self;

    fn sub(mut self, p: Point<D>) -> Self {
        self -= p;
        self
    }
}

impl<const D: usize> fmt::Display for BoundingBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, interval) in self.intervals().iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

impl<const D: usize> fmt::Debug for BoundingBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingBox({self})")
    }
}
