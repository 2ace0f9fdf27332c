use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{LatticeError, Result};
use crate::lanes::{self, Lanes};

/// A point of the `D`-dimensional integer lattice.
///
/// Coordinates live in lanes `0..D` of a [`Lanes`] vector; the remaining
/// lanes are always zero so that batched operations can run over the full
/// register without masking.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<const D: usize> {
    coords: Lanes,
}

impl<const D: usize> Point<D> {
    pub fn zero() -> Self {
        lanes::assert_dim::<D>();
        Self { coords: lanes::ZERO }
    }

    pub fn new(coords: [i32; D]) -> Self {
        let mut p = Self::zero();
        p.coords[..D].copy_from_slice(&coords);
        p
    }

    /// Builds a point from raw lanes, clearing everything past lane `D`.
    pub fn from_lanes(data: Lanes) -> Self {
        lanes::assert_dim::<D>();
        Self { coords: lanes::blend(&lanes::ZERO, &data, lanes::low_mask(D)) }
    }

    /// The unit vector `e_i`.
    ///
    /// # Panics
    /// Panics if `i >= D`. Use [`Point::checked_unit`] when the axis is not known to be valid.
    #[track_caller]
    pub fn unit(i: usize) -> Self {
        match Self::checked_unit(i) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn checked_unit(i: usize) -> Result<Self> {
        if i >= D {
            return Err(LatticeError::AxisOutOfRange { axis: i, dim: D });
        }
        let mut p = Self::zero();
        p.coords[i] = 1;
        Ok(p)
    }

    /// Coordinate `i`, or `None` if `i >= D`.
    pub fn get(&self, i: usize) -> Option<i32> {
        if i < D { lanes::extract(&self.coords, i) } else { None }
    }

    pub fn coords(&self) -> [i32; D] {
        std::array::from_fn(|i| self.coords[i])
    }

    pub fn lanes(&self) -> &Lanes {
        &self.coords
    }

    /// Squared Euclidean norm.
    ///
    /// Exact for every input except four coordinates of `i32::MIN`, where it saturates.
    pub fn norm(&self) -> u64 {
        self.coords[..D]
            .iter()
            .map(|&x| u64::from(x.unsigned_abs()).pow(2))
            .fold(0, u64::saturating_add)
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> From<[i32; D]> for Point<D> {
    fn from(coords: [i32; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = i32;

    #[track_caller]
    fn index(&self, i: usize) -> &i32 {
        assert!(i < D, "axis {i} is out of range for dimension {D}");
        &self.coords[i]
    }
}

impl<const D: usize> Add for Point<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { coords: lanes::add(&self.coords, &rhs.coords) }
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { coords: lanes::sub(&self.coords, &rhs.coords) }
    }
}

impl<const D: usize> AddAssign for Point<D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const D: usize> SubAssign for Point<D> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const D: usize> Neg for Point<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { coords: lanes::sub(&lanes::ZERO, &self.coords) }
    }
}

impl<const D: usize> MulAssign<i32> for Point<D> {
    // Unused lanes are zero, so scaling the whole register keeps them zero.
    fn mul_assign(&mut self, k: i32) {
        self.coords = lanes::mul(&self.coords, &lanes::splat(k));
    }
}

impl<const D: usize> Mul<i32> for Point<D> {
    type Output = Self;

    fn mul(mut self, k: i32) -> Self {
        self *= k;
        self
    }
}

impl<const D: usize> Mul<Point<D>> for i32 {
    type Output = Point<D>;

    fn mul(self, p: Point<D>) -> Point<D> {
        p * self
    }
}

impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coords[..D].iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

impl<const D: usize> fmt::Debug for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add() {
        assert_eq!(Point::new([1, 2]) + Point::new([3, -1]), Point::new([4, 1]));
        assert_eq!(Point::new([1, 2]) - Point::new([3, -1]), Point::new([-2, 3]));
    }

    #[test]
    fn test_scalar_mul_keeps_padding_zero() {
        let mut p = Point::new([2, -3]);
        p *= 5;
        assert_eq!(p.coords(), [10, -15]);
        assert!(p.lanes()[2..].iter().all(|&x| x == 0));
        assert_eq!(-2 * Point::new([1, 1]), Point::new([-2, -2]));
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Point::<2>::unit(0), Point::new([1, 0]));
        assert_eq!(Point::<2>::unit(1), Point::new([0, 1]));
        assert_eq!(Point::<3>::unit(2), Point::new([0, 0, 1]));
        assert!(matches!(
            Point::<2>::checked_unit(2),
            Err(LatticeError::AxisOutOfRange { axis: 2, dim: 2 })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_unit_out_of_range_panics() {
        let _ = Point::<2>::unit(5);
    }

    #[test]
    #[should_panic(expected = "axis 2 is out of range")]
    fn test_index_out_of_range_panics() {
        let p = Point::new([1, 2]);
        let _ = p[2];
    }

    #[test]
    fn test_get_and_index() {
        let p = Point::new([4, -7, 9]);
        assert_eq!(p[1], -7);
        assert_eq!(p.get(2), Some(9));
        assert_eq!(p.get(3), None);
    }

    #[test]
    fn test_norm() {
        assert_eq!(Point::new([3, 4]).norm(), 25);
        assert_eq!(Point::new([i32::MIN, i32::MIN]).norm(), 1u64 << 63);
        assert_eq!(Point::new([i32::MIN; 4]).norm(), u64::MAX);
    }

    #[test]
    fn test_from_lanes_clears_padding() {
        let p = Point::<2>::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(p, Point::new([1, 2]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new([1, -2]).to_string(), "(1, -2)");
        assert_eq!(format!("{:?}", Point::new([0, 5, 6])), "Point(0, 5, 6)");
    }
}
