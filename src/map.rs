//! The collaborators a [PathFinder](crate::PathFinder) consumes: a source of terrain costs used
//! once when the node grid is built, and a passability predicate consulted during every search.
use crate::error::{PathError, Result};
use crate::Cost;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use log::warn;

/// Dimensions of a rectangular tile map, shared by [TerrainSource] and [Passability].
pub trait TileGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn tile_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }
}

/// Provides the per-tile movement cost read when the node grid is (re)built. Costs must be at
/// least 1; a reported 0 is read as 1.
pub trait TerrainSource: TileGrid {
    fn terrain_cost(&self, x: usize, y: usize) -> Cost;
}

/// Decides whether a tile can be entered by a given mover. The mover is whatever descriptor the
/// game layer needs to answer that question: a unit kind, a set of traversal flags or a full unit.
pub trait Passability: TileGrid {
    type Mover: ?Sized;

    fn is_blocked(&self, mover: &Self::Mover, x: usize, y: usize) -> bool;
}

/// A plain tile map with a movement cost and a blocked flag per tile. Blocked tiles are
/// impassable for every mover, which is why its [Passability::Mover] is `()`.
#[derive(Clone, Debug)]
pub struct TerrainMap {
    pub costs: SimpleGrid<Cost>,
    pub blocked: BoolGrid,
}

impl TerrainMap {
    pub fn new(width: usize, height: usize, cost: Cost) -> TerrainMap {
        TerrainMap {
            costs: SimpleGrid::new(width, height, cost),
            blocked: BoolGrid::new(width, height, false),
        }
    }

    /// Parses a map drawn as text, one line per row. Digits 1 to 9 are terrain costs and `#` marks
    /// a blocked tile (which still gets cost 1). Surrounding blank lines and indentation are ignored.
    pub fn parse(text: &str) -> Result<TerrainMap> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut map = TerrainMap::new(width, height, 1);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(PathError::RaggedMap {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '#' => map.set_blocked(x, y, true),
                    _ => match ch.to_digit(10).filter(|&c| c > 0) {
                        Some(cost) => map.set_cost(x, y, cost),
                        None => {
                            return Err(PathError::InvalidTile {
                                line: y,
                                column: x,
                                ch,
                            })
                        }
                    },
                }
            }
        }
        Ok(map)
    }

    pub fn cost(&self, x: usize, y: usize) -> Cost {
        self.costs.get(x, y)
    }
    /// Sets the cost of entering (x, y). A cost of 0 is stored as 1.
    pub fn set_cost(&mut self, x: usize, y: usize, cost: Cost) {
        if cost == 0 {
            warn!("Terrain cost 0 at ({}, {}) raised to 1", x, y);
        }
        self.costs.set(x, y, cost.max(1));
    }
    pub fn blocked(&self, x: usize, y: usize) -> bool {
        self.blocked.get(x, y)
    }
    pub fn set_blocked(&mut self, x: usize, y: usize, blocked: bool) {
        self.blocked.set(x, y, blocked);
    }
}

impl TileGrid for TerrainMap {
    fn width(&self) -> usize {
        self.costs.width
    }
    fn height(&self) -> usize {
        self.costs.height
    }
}

impl TerrainSource for TerrainMap {
    fn terrain_cost(&self, x: usize, y: usize) -> Cost {
        self.cost(x, y)
    }
}

impl Passability for TerrainMap {
    type Mover = ();

    fn is_blocked(&self, _: &(), x: usize, y: usize) -> bool {
        self.blocked(x, y)
    }
}

impl fmt::Display for TerrainMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            let row = (0..self.width())
                .map(|x| match (self.blocked(x, y), self.cost(x, y)) {
                    (true, _) => '#',
                    (false, c) => char::from_digit(c, 10).unwrap_or('+'),
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
