use std::fmt;

/// A closed interval `[left, right]` of lattice coordinates.
///
/// The interval is empty when `left > right`. All empty intervals compare
/// equal to each other, whatever their bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interval {
    pub left: i32,
    pub right: i32,
}

impl Interval {
    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    pub fn contains(&self, x: i32) -> bool {
        self.left <= x && x <= self.right
    }

    /// Number of lattice sites covered, zero when empty.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.right) - i64::from(self.left) + 1) as u64
        }
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        (self.left == other.left && self.right == other.right) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Interval {}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}
