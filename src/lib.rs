//! # tile_pathfinding
//!
//! Movement paths and reachable-tile ranges for units on a tile map where every tile has a
//! movement cost and some tiles cannot be entered by some units. Searches are
//! [uniform-cost](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and bounded by the
//! unit's movement budget, so they stay cheap even on large maps.
//!
//! A [PathFinder] is built once per map from a [TerrainSource] and then answers two kinds of
//! queries, both taking a [Passability] map and a mover:
//! - [PathFinder::find_path]: the cheapest path to a single target within the budget.
//! - [PathFinder::find_range]: every tile the unit can walk to ([RangeMode::Movement]) or
//!   threaten ([RangeMode::Threat]) within the budget.
//!
//! ```
//! use grid_util::point::Point;
//! use tile_pathfinding::{PathFinder, TerrainMap};
//!
//! let map = TerrainMap::parse(
//!     "
//!     11#11
//!     11#11
//!     11111
//!     ",
//! )
//! .unwrap();
//! let mut finder = PathFinder::new(&map);
//! let path = finder
//!     .find_path(&map, &(), 8, Point::new(0, 0), Point::new(4, 0))
//!     .unwrap();
//! assert_eq!(path.cost(), 8);
//! let reachable = finder.find_range(&map, &(), 2, Point::new(0, 0), true);
//! assert_eq!(reachable.len(), 4);
//! ```
mod error;
mod expansion;
mod map;
mod node_grid;
mod observer;
mod path;
mod pathfinder;
mod range;
mod search_context;

pub use crate::error::{PathError, Result};
pub use crate::expansion::{Direction, ExpansionOrder};
pub use crate::map::{Passability, TerrainMap, TerrainSource, TileGrid};
pub use crate::node_grid::{Node, NodeGrid};
pub use crate::observer::{NodeView, SearchObserver, SearchTrace, TraceEvent};
pub use crate::path::Path;
pub use crate::pathfinder::{PathFinder, RangeMode, SearchConfig};
pub use crate::range::TileRange;
pub use crate::search_context::{Frontier, Visited};

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::{IndexMap, IndexSet};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Movement cost of a tile, and accumulated cost along a path.
pub type Cost = u32;

/// Depth of a node no search has reached yet.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Number of axis-aligned steps between two tiles.
pub fn manhattan_distance(a: Point, b: Point) -> Cost {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
