use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::transform::Transform;
use crate::wasm::utils::{parse_js_coords, points_from_flat};
use wasm_bindgen::prelude::*;

// --- Point ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    inner: Point<2>,
}

#[wasm_bindgen]
impl Point2D {
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32) -> Point2D {
        Point2D { inner: Point::new([x, y]) }
    }

    /// Builds a point from a JS array `[x, y]`, or `undefined` if it does not hold two integers.
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(val: JsValue) -> Option<Point2D> {
        parse_js_coords::<2>(&val).map(|c| Point2D { inner: Point::new(c) })
    }

    pub fn unit(axis: usize) -> Result<Point2D, JsError> {
        Ok(Point2D { inner: Point::checked_unit(axis)? })
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 { self.inner[0] }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 { self.inner[1] }
    pub fn coords(&self) -> Vec<i32> { self.inner.coords().to_vec() }
    pub fn add(&self, other: &Point2D) -> Point2D { Point2D { inner: self.inner + other.inner } }
    pub fn sub(&self, other: &Point2D) -> Point2D { Point2D { inner: self.inner - other.inner } }
    pub fn scale(&self, k: i32) -> Point2D { Point2D { inner: self.inner * k } }
    pub fn norm(&self) -> u64 { self.inner.norm() }
    pub fn equals(&self, other: &Point2D) -> bool { self.inner == other.inner }
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String { self.inner.to_string() }
}

impl From<Point<2>> for Point2D {
    fn from(inner: Point<2>) -> Self {
        Self { inner }
    }
}

impl From<Point2D> for Point<2> {
    fn from(p: Point2D) -> Self {
        p.inner
    }
}

// --- Bounding Box ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox2D {
    inner: BoundingBox<2>,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> BoundingBox2D {
        BoundingBox2D { inner: BoundingBox::new([min_x, min_y], [max_x, max_y]) }
    }

    /// Anchored bounds of a flat `[x0, y0, x1, y1, ...]` path, see `BoundingBox::from_points`.
    ///
    /// Fails on an odd number of coordinates or an empty path.
    #[wasm_bindgen(js_name = fromPoints)]
    pub fn from_points(coords: &[i32]) -> Result<BoundingBox2D, JsError> {
        let points = points_from_flat::<2>(coords)?;
        Ok(BoundingBox2D { inner: BoundingBox::from_points(&points)? })
    }

    #[wasm_bindgen(getter)]
    pub fn min_x(&self) -> i32 { self.inner.axis(0).left }
    #[wasm_bindgen(getter)]
    pub fn min_y(&self) -> i32 { self.inner.axis(1).left }
    #[wasm_bindgen(getter)]
    pub fn max_x(&self) -> i32 { self.inner.axis(0).right }
    #[wasm_bindgen(getter)]
    pub fn max_y(&self) -> i32 { self.inner.axis(1).right }
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }
    pub fn union(&self, other: &BoundingBox2D) -> BoundingBox2D { BoundingBox2D { inner: self.inner | other.inner } }
    pub fn intersection(&self, other: &BoundingBox2D) -> BoundingBox2D { BoundingBox2D { inner: self.inner & other.inner } }
    pub fn intersects(&self, other: &BoundingBox2D) -> bool { self.inner.intersects(&other.inner) }
    pub fn contains(&self, x: i32, y: i32) -> bool { self.inner.contains(&Point::new([x, y])) }
    pub fn translate(&self, dx: i32, dy: i32) -> BoundingBox2D { BoundingBox2D { inner: self.inner + Point::new([dx, dy]) } }
    pub fn equals(&self, other: &BoundingBox2D) -> bool { self.inner == other.inner }
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String { self.inner.to_string() }
}

impl From<BoundingBox<2>> for BoundingBox2D {
    fn from(inner: BoundingBox<2>) -> Self {
        Self { inner }
    }
}

impl From<BoundingBox2D> for BoundingBox<2> {
    fn from(b: BoundingBox2D) -> Self {
        b.inner
    }
}

// --- Transform ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    inner: Transform<2>,
}

#[wasm_bindgen]
impl Transform2D {
    #[wasm_bindgen(constructor)]
    pub fn new(perm: &[u32], signs: &[i32]) -> Result<Transform2D, JsError> {
        let (&[p0, p1], &[s0, s1]) = (perm, signs) else {
            return Err(JsError::new("expected two permutation entries and two signs"));
        };
        Ok(Transform2D { inner: Transform::new([p0 as usize, p1 as usize], [s0, s1])? })
    }

    pub fn identity() -> Transform2D { Transform2D { inner: Transform::identity() } }
    pub fn random() -> Transform2D { Transform2D { inner: Transform::random() } }

    /// A symmetry taking `p` onto `q`.
    pub fn between(p: &Point2D, q: &Point2D) -> Result<Transform2D, JsError> {
        Ok(Transform2D { inner: Transform::between(&p.inner, &q.inner)? })
    }

    pub fn apply(&self, p: &Point2D) -> Point2D { Point2D { inner: self.inner.apply(&p.inner) } }
    #[wasm_bindgen(js_name = applyBox)]
    pub fn apply_box(&self, b: &BoundingBox2D) -> BoundingBox2D { BoundingBox2D { inner: self.inner.apply_box(&b.inner) } }
    pub fn compose(&self, other: &Transform2D) -> Transform2D { Transform2D { inner: self.inner * other.inner } }
    pub fn inverse(&self) -> Transform2D { Transform2D { inner: self.inner.inverse() } }
    #[wasm_bindgen(js_name = isIdentity)]
    pub fn is_identity(&self) -> bool { self.inner.is_identity() }
    /// Row-major signed permutation matrix.
    pub fn matrix(&self) -> Vec<i32> { self.inner.to_matrix().concat() }
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String { self.inner.to_string() }
}

impl From<Transform<2>> for Transform2D {
    fn from(inner: Transform<2>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_wrapper() {
        let p = Point2D::new(1, 2).add(&Point2D::new(3, -1));
        assert_eq!((p.x(), p.y()), (4, 1));
        assert_eq!(p.scale(2).coords(), vec![8, 2]);
        assert_eq!(p.to_js_string(), "(4, 1)");
    }

    #[test]
    fn test_box_wrapper() {
        let a = BoundingBox2D::new(0, 0, 5, 3);
        let b = BoundingBox2D::new(2, -1, 10, 2);
        assert!(a.intersection(&b).equals(&BoundingBox2D::new(2, 0, 5, 2)));
        assert!(BoundingBox2D::new(0, 0, 1, 1).intersection(&BoundingBox2D::new(5, 5, 6, 6)).is_empty());
        let walk = BoundingBox2D::from_points(&[0, 0, 1, 0, 1, 1]).ok().expect("non-empty path");
        assert!(walk.equals(&BoundingBox2D::new(1, 0, 2, 1)));
        assert!(a.union(&b).equals(&BoundingBox2D::new(0, -1, 10, 3)));
        assert!(a.contains(5, 3) && !a.contains(6, 0));
        assert!(a.translate(-1, 2).equals(&BoundingBox2D::new(-1, 2, 4, 5)));
    }

    #[test]
    fn test_transform_wrapper() {
        let t = Transform2D::new(&[1, 0], &[1, -1]).ok().expect("valid transform");
        assert!(t.apply(&Point2D::new(2, 3)).equals(&Point2D::new(-3, 2)));
        assert_eq!(t.matrix(), vec![0, -1, 1, 0]);
        assert!(t.compose(&t.inverse()).is_identity());
        let r = t.apply_box(&BoundingBox2D::new(0, 0, 5, 3));
        assert_eq!((r.min_x(), r.max_x(), r.min_y(), r.max_y()), (-3, 0, 0, 5));
    }
}
