use grid_util::point::Point;
use std::ops::Add;

/// The four axis-aligned steps. Tile maps grow downwards, so [Direction::South] is `+y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        let (dx, dy) = dir.offset();
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Order in which the neighbours of an expanded node are tried. This never changes the cost of
/// the path that is found, only which of several equally cheap paths comes out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExpansionOrder {
    /// Try the axis with the larger remaining distance first, stepping towards the target.
    #[default]
    TargetBiased,
    /// Always use the same order.
    Fixed([Direction; 4]),
}

impl ExpansionOrder {
    /// Directions to try given the remaining signed distance `(dx, dy)` to the target.
    pub fn directions(&self, dx: i32, dy: i32) -> [Direction; 4] {
        use Direction::*;
        match *self {
            ExpansionOrder::Fixed(order) => order,
            ExpansionOrder::TargetBiased => {
                if dx.abs() > dy.abs() {
                    if dx < 0 {
                        [West, South, North, East]
                    } else {
                        [East, West, South, North]
                    }
                } else if dy < 0 {
                    [North, East, West, South]
                } else {
                    [South, East, West, North]
                }
            }
        }
    }
}
