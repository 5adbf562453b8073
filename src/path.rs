use crate::Cost;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;

/// Ordered tiles from the start of a movement to its target, both included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Point>,
    cost: Cost,
}

impl Path {
    pub fn new(steps: Vec<Point>, cost: Cost) -> Path {
        Path { steps, cost }
    }

    /// Accumulated terrain cost of every step after the first.
    pub fn cost(&self) -> Cost {
        self.cost
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }
    pub fn step(&self, index: usize) -> Option<Point> {
        self.steps.get(index).copied()
    }
    pub fn x(&self, index: usize) -> Option<i32> {
        self.step(index).map(|p| p.x)
    }
    pub fn y(&self, index: usize) -> Option<i32> {
        self.step(index).map(|p| p.y)
    }
    pub fn first(&self) -> Option<Point> {
        self.steps.first().copied()
    }
    pub fn last(&self) -> Option<Point> {
        self.steps.last().copied()
    }
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.steps.contains(&Point::new(x, y))
    }
    pub fn append_step(&mut self, x: i32, y: i32) {
        self.steps.push(Point::new(x, y));
    }
    pub fn prepend_step(&mut self, x: i32, y: i32) {
        self.steps.insert(0, Point::new(x, y));
    }

    /// True if every step moves exactly one tile along an axis.
    pub fn is_connected(&self) -> bool {
        self.steps
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.x.abs_diff(b.x) + a.y.abs_diff(b.y) == 1)
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (cost {})",
            self.steps
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .join(" -> "),
            self.cost
        )
    }
}
