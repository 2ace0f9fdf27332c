use pivot_lattice::{BoundingBox, Interval, LatticeError, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bx(x: (i32, i32), y: (i32, i32)) -> BoundingBox<2> {
    BoundingBox::from_intervals([Interval::new(x.0, x.1), Interval::new(y.0, y.1)])
}

#[test]
fn test_overlapping_intersection() {
    let a = bx((0, 5), (0, 3));
    let b = bx((2, 10), (-1, 2));
    assert_eq!(a & b, bx((2, 5), (0, 2)));
    assert_eq!(b & a, bx((2, 5), (0, 2)));
}

#[test]
fn test_disjoint_intersection() {
    let a = bx((0, 1), (0, 1));
    let b = bx((5, 6), (5, 6));
    let c = a & b;
    assert!(c.is_empty());
    // The inverted bounds are kept, only their emptiness matters.
    assert_eq!(c.axis(0), Interval::new(5, 1));
    assert!(c.axis(0).is_empty());
}

#[test]
fn test_touching_boxes_intersect_on_shared_face() {
    let a = bx((0, 4), (0, 4));
    let b = bx((4, 8), (2, 9));
    assert_eq!(a & b, bx((4, 4), (2, 4)));
    assert!(a.intersects(&b));
}

#[test]
fn test_union_of_walk_segments() {
    let left = [Point::new([0, 0]), Point::new([1, 0]), Point::new([1, 1])];
    let right = [Point::new([2, 1]), Point::new([2, 2]), Point::new([3, 2])];
    let all: Vec<_> = left.iter().chain(right.iter()).copied().collect();

    let hull = BoundingBox::hull(&left).unwrap() | BoundingBox::hull(&right).unwrap();
    assert_eq!(hull, BoundingBox::hull(&all).unwrap());
    assert_eq!(hull, bx((0, 3), (0, 2)));
}

#[test]
fn test_from_points_is_anchored() {
    let walk = [Point::new([5, 5]), Point::new([6, 5]), Point::new([6, 4]), Point::new([7, 4])];
    let b = BoundingBox::from_points(&walk).unwrap();
    assert_eq!(b, bx((1, 3), (-1, 0)));
    // Moving the whole walk leaves the anchored box unchanged.
    let shifted: Vec<_> = walk.iter().map(|&p| p + Point::new([-20, 13])).collect();
    assert_eq!(BoundingBox::from_points(&shifted).unwrap(), b);
}

#[test]
fn test_hull_is_minimal() {
    let mut rng = StdRng::seed_from_u64(11);
    let points: Vec<Point<3>> = (0..500)
        .map(|_| Point::new([rng.gen_range(-50..50), rng.gen_range(-50..50), rng.gen_range(0..10)]))
        .collect();
    let hull = BoundingBox::hull(&points).unwrap();

    assert!(points.iter().all(|p| hull.contains(p)));
    for axis in 0..3 {
        let interval = hull.axis(axis);
        assert!(points.iter().any(|p| p[axis] == interval.left));
        assert!(points.iter().any(|p| p[axis] == interval.right));
    }
}

#[test]
fn test_par_hull_matches_hull() {
    let mut rng = StdRng::seed_from_u64(3);
    let points: Vec<Point<2>> = (0..20_000)
        .map(|_| Point::new([rng.gen_range(-10_000..10_000), rng.gen_range(-10_000..10_000)]))
        .collect();
    assert_eq!(BoundingBox::par_hull(&points).unwrap(), BoundingBox::hull(&points).unwrap());
}

#[test]
fn test_single_point_box() {
    let b = BoundingBox::from_points(&[Point::new([4, -2])]).unwrap();
    assert_eq!(b, bx((1, 1), (0, 0)));
    assert!(matches!(BoundingBox::<2>::hull(&[]), Err(LatticeError::EmptyPointSet)));
}

#[test]
fn test_interval_access() {
    let b = BoundingBox::new([1, 2, 3, 4], [5, 6, 7, 8]);
    assert_eq!(
        b.intervals(),
        [Interval::new(1, 5), Interval::new(2, 6), Interval::new(3, 7), Interval::new(4, 8)]
    );
    assert_eq!(b.get(3), Some(Interval::new(4, 8)));
    assert_eq!(b.get(4), None);
    assert_eq!(b.to_string(), "[1, 5] x [2, 6] x [3, 7] x [4, 8]");
}

#[test]
#[should_panic(expected = "axis 2 is out of range for dimension 2")]
fn test_axis_out_of_range_panics() {
    let _ = bx((0, 1), (0, 1)).axis(2);
}
