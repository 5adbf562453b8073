use crate::map::{TerrainSource, TileGrid};
use crate::{Cost, UNREACHABLE};
use core::fmt;
use grid_util::point::Point;
use log::{info, warn};

/// Search state of a single map tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub pos: Point,
    /// Terrain cost of entering this tile.
    pub cost: Cost,
    pub(crate) depth: Cost,
    pub(crate) heuristic: f32,
    pub(crate) parent: Option<usize>,
    pub(crate) generation: u32,
}

impl Node {
    fn new(pos: Point, cost: Cost) -> Node {
        Node {
            pos,
            cost,
            depth: UNREACHABLE,
            heuristic: 0.0,
            parent: None,
            generation: 0,
        }
    }
    /// Accumulated cost from the origin of the search that last reached this node.
    pub fn depth(&self) -> Cost {
        self.depth
    }
    /// Euclidean distance from the expanding node to the target when this node was last reached.
    /// Recorded for observers, never used for ordering.
    pub fn heuristic(&self) -> f32 {
        self.heuristic
    }
}

/// Dense width x height array of [Node]s, allocated once and reused by every search.
///
/// Rather than clearing every node between searches, each search bumps a generation counter and
/// nodes stamped with an older generation are reset the first time they are touched.
#[derive(Clone, Debug)]
pub struct NodeGrid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    generation: u32,
}

impl NodeGrid {
    pub fn new<T: TerrainSource + ?Sized>(source: &T) -> NodeGrid {
        let (width, height) = (source.width(), source.height());
        info!("Allocating {}x{} node grid", width, height);
        let nodes = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Node::new(Point::new(x as i32, y as i32), entry_cost(source, x, y)))
            .collect();
        NodeGrid {
            width,
            height,
            nodes,
            generation: 0,
        }
    }

    /// Re-reads every tile's terrain cost. Search state is left to be reset lazily.
    pub fn reload_costs<T: TerrainSource + ?Sized>(&mut self, source: &T) {
        for node in self.nodes.iter_mut() {
            node.cost = entry_cost(source, node.pos.x as usize, node.pos.y as usize);
        }
    }

    /// The node for tile (x, y), if it is on the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<&Node> {
        self.index(Point::new(x, y)).map(|ix| &self.nodes[ix])
    }

    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        self.tile_in_bounds(p.x, p.y)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    pub(crate) fn node(&self, ix: usize) -> &Node {
        &self.nodes[ix]
    }

    /// Starts a new search generation, invalidating the state left by previous searches.
    pub(crate) fn begin_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for node in self.nodes.iter_mut() {
                node.generation = 0;
            }
            self.generation = 1;
        }
    }

    /// Mutable access to a node, resetting it first if it belongs to an earlier search.
    pub(crate) fn touch(&mut self, ix: usize) -> &mut Node {
        let generation = self.generation;
        let node = &mut self.nodes[ix];
        if node.generation != generation {
            node.generation = generation;
            node.depth = UNREACHABLE;
            node.heuristic = 0.0;
            node.parent = None;
        }
        node
    }

    pub(crate) fn depth(&self, ix: usize) -> Cost {
        let node = &self.nodes[ix];
        if node.generation == self.generation {
            node.depth
        } else {
            UNREACHABLE
        }
    }

    pub(crate) fn parent(&self, ix: usize) -> Option<usize> {
        let node = &self.nodes[ix];
        if node.generation == self.generation {
            node.parent
        } else {
            None
        }
    }
}

/// Terrain cost of tile (x, y), raised to 1 if the source reports 0. Budget pruning relies on
/// every step costing at least 1.
fn entry_cost<T: TerrainSource + ?Sized>(source: &T, x: usize, y: usize) -> Cost {
    let cost = source.terrain_cost(x, y);
    if cost == 0 {
        warn!("Tile ({}, {}) has terrain cost 0, using 1", x, y);
        return 1;
    }
    cost
}

impl TileGrid for NodeGrid {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for NodeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Costs:")?;
        for row in self.nodes.chunks(self.width.max(1)) {
            let values = row.iter().map(|n| n.cost).collect::<Vec<Cost>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
