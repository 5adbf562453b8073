use crate::error::{PathError, Result};
use crate::expansion::ExpansionOrder;
use crate::map::{Passability, TerrainSource, TileGrid};
use crate::node_grid::{Node, NodeGrid};
use crate::observer::{NodeView, SearchObserver};
use crate::path::Path;
use crate::range::TileRange;
use crate::search_context::{Frontier, Visited};
use crate::{manhattan_distance, Cost, FxIndexSet};
use core::fmt;
use grid_util::point::Point;
use log::{debug, trace, warn};
use smallvec::SmallVec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub expansion_order: ExpansionOrder,
    /// Stops a query after this many nodes have been expanded. Searches are otherwise bounded
    /// only by the movement budget.
    pub max_expansions: Option<usize>,
}

/// What a range query measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeMode {
    /// Tiles the mover can walk to, paying terrain costs, within the budget.
    Movement,
    /// Tiles within the budget in plain tile steps, whether or not the mover could enter them.
    /// Used to show what a unit threatens.
    Threat,
}

impl RangeMode {
    fn step_cost(self) -> StepCost {
        match self {
            RangeMode::Movement => StepCost::Terrain,
            RangeMode::Threat => StepCost::Uniform(1),
        }
    }
}

/// How much entering a node costs during one query. Threat ranges read every tile as cost 1
/// without touching the terrain costs stored in the grid.
#[derive(Clone, Copy, Debug)]
enum StepCost {
    Terrain,
    Uniform(Cost),
}

impl StepCost {
    fn of(self, node: &Node) -> Cost {
        match self {
            StepCost::Terrain => node.cost,
            StepCost::Uniform(cost) => cost,
        }
    }
}

/// Cheap rejection before searching: no path of axis-aligned steps, each costing at least one,
/// can fit in the budget.
fn exceeds_budget(start: Point, target: Point, max_distance: Cost) -> bool {
    let dx = start.x.abs_diff(target.x);
    let dy = start.y.abs_diff(target.y);
    dx > max_distance || dy > max_distance || dx + dy > max_distance
}

/// Uniform-cost search over a tile map. Owns one [Node] per tile plus the open and closed sets,
/// all reused between queries, so a single instance must not be shared by concurrent callers.
///
/// Terrain costs are read once from a [TerrainSource] when the finder is built. Passability is
/// asked of a [Passability] map on every query, which lets occupancy change between calls.
pub struct PathFinder {
    nodes: NodeGrid,
    open: Frontier<Cost>,
    closed: Visited,
    config: SearchConfig,
}

impl PathFinder {
    pub fn new<T: TerrainSource + ?Sized>(map: &T) -> PathFinder {
        PathFinder::with_config(map, SearchConfig::default())
    }

    pub fn with_config<T: TerrainSource + ?Sized>(map: &T, config: SearchConfig) -> PathFinder {
        PathFinder {
            nodes: NodeGrid::new(map),
            open: Frontier::new(),
            closed: Visited::default(),
            config,
        }
    }

    pub fn width(&self) -> usize {
        self.nodes.width()
    }
    pub fn height(&self) -> usize {
        self.nodes.height()
    }
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }
    pub fn nodes(&self) -> &NodeGrid {
        &self.nodes
    }
    /// The search node of tile (x, y). Its depth and parent describe the last query that reached it.
    pub fn node(&self, x: i32, y: i32) -> Option<&Node> {
        self.nodes.get(x, y)
    }

    /// Re-reads terrain costs, e.g. after the map has been edited.
    pub fn reload_costs<T: TerrainSource + ?Sized>(&mut self, map: &T) -> Result<()> {
        self.check_dimensions(map)?;
        self.nodes.reload_costs(map);
        Ok(())
    }

    /// Finds the cheapest path from `start` to `target` whose accumulated terrain cost, not counting
    /// the start tile, is at most `max_distance`.
    pub fn find_path<P: Passability + ?Sized>(
        &mut self,
        map: &P,
        mover: &P::Mover,
        max_distance: Cost,
        start: Point,
        target: Point,
    ) -> Result<Path> {
        self.find_path_observed(map, mover, max_distance, start, target, &mut ())
    }

    /// [find_path](Self::find_path), reporting every expansion and relaxation to `observer`.
    pub fn find_path_observed<P, O>(
        &mut self,
        map: &P,
        mover: &P::Mover,
        max_distance: Cost,
        start: Point,
        target: Point,
        observer: &mut O,
    ) -> Result<Path>
    where
        P: Passability + ?Sized,
        O: SearchObserver + ?Sized,
    {
        self.check_dimensions(map)?;
        let start_ix = self.nodes.index(start).ok_or_else(|| {
            warn!("Path requested from {} which is off the grid", start);
            PathError::StartOutOfBounds {
                start,
                width: self.width(),
                height: self.height(),
            }
        })?;
        let not_reachable = PathError::NotReachable { start, target };
        debug!(
            "Searching path from {} to {} within {}",
            start, target, max_distance
        );
        let Some(target_ix) = self.passable_index(map, mover, target) else {
            debug!("{} is blocked or off the grid", target);
            return Err(not_reachable);
        };
        if exceeds_budget(start, target, max_distance) {
            debug!("{} is further than {} from {}", target, max_distance, start);
            return Err(not_reachable);
        }
        if start_ix == target_ix {
            return Ok(Path::new(vec![start], 0));
        }

        self.begin_search(start_ix);
        let mut expansions = 0;
        while let Some((current, _)) = self.open.pop_min() {
            if current == target_ix {
                break;
            }
            if self.expansion_limit_reached(expansions) {
                break;
            }
            expansions += 1;
            self.close(current, StepCost::Terrain, observer);

            let pos = self.nodes.node(current).pos;
            let (dx, dy) = (target.x - pos.x, target.y - pos.y);
            let heuristic = (dx as f32).hypot(dy as f32);
            let neighbours: SmallVec<[usize; 4]> = self
                .config
                .expansion_order
                .directions(dx, dy)
                .into_iter()
                .map(|dir| pos + dir)
                .filter(|&p| manhattan_distance(p, target) <= max_distance)
                .filter_map(|p| self.passable_index(map, mover, p))
                .collect();
            for neighbour in neighbours {
                self.relax(
                    current,
                    neighbour,
                    heuristic,
                    max_distance,
                    StepCost::Terrain,
                    observer,
                );
            }
        }

        if self.nodes.parent(target_ix).is_none() {
            debug!(
                "No path from {} to {} after {} expansions",
                start, target, expansions
            );
            return Err(not_reachable);
        }
        Ok(self.backtrack(start_ix, target_ix))
    }

    /// Every tile reachable from `start` within `max_distance`. With `is_movement_range` the mover's
    /// passability and terrain costs apply, otherwise tiles are counted in plain steps and
    /// passability is ignored (see [RangeMode]).
    pub fn find_range<P: Passability + ?Sized>(
        &mut self,
        map: &P,
        mover: &P::Mover,
        max_distance: Cost,
        start: Point,
        is_movement_range: bool,
    ) -> TileRange {
        let mode = if is_movement_range {
            RangeMode::Movement
        } else {
            RangeMode::Threat
        };
        self.find_range_with_mode(map, mover, max_distance, start, mode)
    }

    pub fn find_range_with_mode<P: Passability + ?Sized>(
        &mut self,
        map: &P,
        mover: &P::Mover,
        max_distance: Cost,
        start: Point,
        mode: RangeMode,
    ) -> TileRange {
        self.find_range_observed(map, mover, max_distance, start, mode, &mut ())
    }

    /// Range query that never fails: an off-grid start or a mismatched map yields an empty range.
    pub fn find_range_observed<P, O>(
        &mut self,
        map: &P,
        mover: &P::Mover,
        max_distance: Cost,
        start: Point,
        mode: RangeMode,
        observer: &mut O,
    ) -> TileRange
    where
        P: Passability + ?Sized,
        O: SearchObserver + ?Sized,
    {
        if let Err(err) = self.check_dimensions(map) {
            warn!("Range query skipped: {}", err);
            return TileRange::default();
        }
        let Some(start_ix) = self.nodes.index(start) else {
            warn!("Range requested from {} which is off the grid", start);
            return TileRange::default();
        };
        debug!("{:?} range from {} within {}", mode, start, max_distance);

        let step = mode.step_cost();
        let mut discovered: FxIndexSet<usize> = FxIndexSet::default();
        self.begin_search(start_ix);
        let mut expansions = 0;
        while let Some((current, _)) = self.open.pop_min() {
            if self.expansion_limit_reached(expansions) {
                break;
            }
            expansions += 1;
            self.close(current, step, observer);

            let pos = self.nodes.node(current).pos;
            let neighbours: SmallVec<[usize; 4]> = self
                .config
                .expansion_order
                .directions(0, 0)
                .into_iter()
                .map(|dir| pos + dir)
                .filter(|&p| manhattan_distance(start, p) <= max_distance)
                .filter_map(|p| match mode {
                    RangeMode::Movement => self.passable_index(map, mover, p),
                    RangeMode::Threat => self.nodes.index(p),
                })
                .collect();
            for neighbour in neighbours {
                if self.relax(current, neighbour, 0.0, max_distance, step, observer) {
                    discovered.insert(neighbour);
                }
            }
        }
        debug!(
            "{:?} range from {} holds {} tiles",
            mode,
            start,
            discovered.len()
        );
        discovered
            .into_iter()
            .map(|ix| (self.nodes.node(ix).pos, self.nodes.depth(ix)))
            .collect()
    }

    fn check_dimensions<G: TileGrid + ?Sized>(&self, map: &G) -> Result<()> {
        if map.width() != self.width() || map.height() != self.height() {
            return Err(PathError::DimensionMismatch {
                width: self.width(),
                height: self.height(),
                found_width: map.width(),
                found_height: map.height(),
            });
        }
        Ok(())
    }

    /// Grid index of `p` if it is on the grid and the mover may enter it.
    fn passable_index<P: Passability + ?Sized>(
        &self,
        map: &P,
        mover: &P::Mover,
        p: Point,
    ) -> Option<usize> {
        self.nodes
            .index(p)
            .filter(|_| !map.is_blocked(mover, p.x as usize, p.y as usize))
    }

    fn expansion_limit_reached(&self, expansions: usize) -> bool {
        match self.config.max_expansions {
            Some(limit) if expansions >= limit => {
                debug!("Expansion limit of {} reached", limit);
                true
            }
            _ => false,
        }
    }

    fn begin_search(&mut self, start_ix: usize) {
        self.nodes.begin_search();
        self.open.clear();
        self.closed.clear();
        let origin = self.nodes.touch(start_ix);
        origin.depth = 0;
        origin.parent = None;
        self.open.insert(start_ix, 0);
    }

    fn view(&self, ix: usize, step: StepCost) -> NodeView {
        let node = self.nodes.node(ix);
        NodeView {
            pos: node.pos,
            depth: self.nodes.depth(ix),
            step_cost: step.of(node),
            heuristic: node.heuristic,
        }
    }

    fn close<O: SearchObserver + ?Sized>(&mut self, ix: usize, step: StepCost, observer: &mut O) {
        self.closed.insert(ix);
        observer.node_expanded(self.view(ix, step));
    }

    /// Offers `neighbour` a path through `current`. Returns true if the neighbour was (re)inserted
    /// into the frontier with a new depth.
    fn relax<O: SearchObserver + ?Sized>(
        &mut self,
        current: usize,
        neighbour: usize,
        heuristic: f32,
        max_distance: Cost,
        step: StepCost,
        observer: &mut O,
    ) -> bool {
        let current_depth = self.nodes.depth(current);
        let node = self.nodes.touch(neighbour);
        let next_step_cost = current_depth.saturating_add(step.of(node));
        if next_step_cost < node.depth {
            self.open.remove(neighbour);
            self.closed.remove(neighbour);
        }
        if self.open.contains(neighbour) || self.closed.contains(neighbour) {
            return false;
        }
        node.heuristic = heuristic;
        if next_step_cost > max_distance {
            return false;
        }
        node.parent = Some(current);
        node.depth = next_step_cost;
        trace!("{} reached at depth {}", node.pos, next_step_cost);
        self.open.insert(neighbour, next_step_cost);
        observer.node_relaxed(self.view(neighbour, step));
        true
    }

    fn backtrack(&self, start_ix: usize, target_ix: usize) -> Path {
        let mut steps: Vec<Point> = std::iter::successors(Some(target_ix), |&ix| {
            if ix == start_ix {
                None
            } else {
                self.nodes.parent(ix)
            }
        })
        .map(|ix| self.nodes.node(ix).pos)
        .collect();
        steps.reverse();
        Path::new(steps, self.nodes.depth(target_ix))
    }
}

impl fmt::Display for PathFinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::Direction::*;
    use crate::map::TerrainMap;
    use crate::observer::{SearchTrace, TraceEvent};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Land units stay out of water, boats stay in it.
    struct Unit {
        swims: bool,
    }

    struct Shore {
        terrain: TerrainMap,
        water: Vec<Point>,
    }

    impl TileGrid for Shore {
        fn width(&self) -> usize {
            self.terrain.width()
        }
        fn height(&self) -> usize {
            self.terrain.height()
        }
    }

    impl TerrainSource for Shore {
        fn terrain_cost(&self, x: usize, y: usize) -> Cost {
            self.terrain.cost(x, y)
        }
    }

    impl Passability for Shore {
        type Mover = Unit;

        fn is_blocked(&self, mover: &Unit, x: usize, y: usize) -> bool {
            let wet = self.water.contains(&p(x as i32, y as i32));
            wet != mover.swims
        }
    }

    #[test]
    fn straight_line() {
        let map = TerrainMap::new(5, 5, 1);
        let mut finder = PathFinder::new(&map);
        let path = finder.find_path(&map, &(), 4, p(0, 0), p(4, 0)).unwrap();
        assert_eq!(path.steps(), &[p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(4, 0)]);
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn budget_too_small() {
        let map = TerrainMap::new(5, 5, 1);
        let mut finder = PathFinder::new(&map);
        assert_eq!(
            finder.find_path(&map, &(), 3, p(0, 0), p(4, 0)),
            Err(PathError::NotReachable {
                start: p(0, 0),
                target: p(4, 0)
            })
        );
    }

    #[test]
    fn routes_around_blocked_tile() {
        let mut map = TerrainMap::new(5, 5, 1);
        map.set_blocked(2, 0, true);
        let mut finder = PathFinder::new(&map);
        let path = finder.find_path(&map, &(), 6, p(0, 0), p(4, 0)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.cost(), 6);
        assert!(!path.contains(2, 0));
        assert!(path.is_connected());
        assert_eq!((path.first(), path.last()), (Some(p(0, 0)), Some(p(4, 0))));
        assert!(finder.find_path(&map, &(), 5, p(0, 0), p(4, 0)).is_err());
    }

    #[test]
    fn prefers_cheap_terrain() {
        let map = TerrainMap::parse(
            "
            191
            111
            ",
        )
        .unwrap();
        let mut finder = PathFinder::new(&map);
        let path = finder.find_path(&map, &(), 10, p(0, 0), p(2, 0)).unwrap();
        assert_eq!(path.steps(), &[p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 0)]);
        assert_eq!(path.cost(), 4);
        // Neither the hill nor the detour fits
        assert!(finder.find_path(&map, &(), 3, p(0, 0), p(2, 0)).is_err());
    }

    #[test]
    fn blocked_or_off_grid_target() {
        let mut map = TerrainMap::new(3, 3, 1);
        map.set_blocked(2, 2, true);
        let mut finder = PathFinder::new(&map);
        assert!(finder.find_path(&map, &(), 10, p(0, 0), p(2, 2)).is_err());
        assert!(finder.find_path(&map, &(), 10, p(0, 0), p(3, 0)).is_err());
        assert!(finder.find_path(&map, &(), 10, p(0, 0), p(0, -1)).is_err());
    }

    #[test]
    fn enclosed_target() {
        let map = TerrainMap::parse(
            "
            111
            1#1
            #1#
            ",
        )
        .unwrap();
        let mut finder = PathFinder::new(&map);
        assert!(finder.find_path(&map, &(), 20, p(0, 0), p(1, 2)).is_err());
    }

    #[test]
    fn start_off_grid() {
        let map = TerrainMap::new(3, 3, 1);
        let mut finder = PathFinder::new(&map);
        assert_eq!(
            finder.find_path(&map, &(), 4, p(-1, 0), p(1, 0)),
            Err(PathError::StartOutOfBounds {
                start: p(-1, 0),
                width: 3,
                height: 3
            })
        );
        assert!(finder.find_range(&map, &(), 4, p(3, 3), true).is_empty());
    }

    #[test]
    fn mismatched_map() {
        let map = TerrainMap::new(3, 3, 1);
        let other = TerrainMap::new(4, 3, 1);
        let mut finder = PathFinder::new(&map);
        assert!(matches!(
            finder.find_path(&other, &(), 4, p(0, 0), p(1, 0)),
            Err(PathError::DimensionMismatch { found_width: 4, .. })
        ));
        assert!(finder.find_range(&other, &(), 4, p(0, 0), true).is_empty());
        assert!(finder.reload_costs(&other).is_err());
    }

    #[test]
    fn equal_start_goal() {
        let map = TerrainMap::new(1, 1, 3);
        let mut finder = PathFinder::new(&map);
        let path = finder.find_path(&map, &(), 0, p(0, 0), p(0, 0)).unwrap();
        assert_eq!(path.steps(), &[p(0, 0)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn start_tile_cost_is_not_paid() {
        let map = TerrainMap::parse("91").unwrap();
        let mut finder = PathFinder::new(&map);
        assert_eq!(
            finder.find_path(&map, &(), 1, p(0, 0), p(1, 0)).unwrap().cost(),
            1
        );
        assert_eq!(
            finder.find_path(&map, &(), 9, p(1, 0), p(0, 0)).unwrap().cost(),
            9
        );
        assert!(finder.find_path(&map, &(), 8, p(1, 0), p(0, 0)).is_err());
    }

    #[test]
    fn expansion_order_picks_between_equal_paths() {
        let map = TerrainMap::new(2, 2, 1);
        let mut finder = PathFinder::new(&map);
        let biased = finder.find_path(&map, &(), 2, p(0, 0), p(1, 1)).unwrap();
        assert_eq!(biased.steps(), &[p(0, 0), p(0, 1), p(1, 1)]);

        finder.config_mut().expansion_order = ExpansionOrder::Fixed([East, South, West, North]);
        let fixed = finder.find_path(&map, &(), 2, p(0, 0), p(1, 1)).unwrap();
        assert_eq!(fixed.steps(), &[p(0, 0), p(1, 0), p(1, 1)]);
        assert_eq!(biased.cost(), fixed.cost());
    }

    #[test]
    fn mover_decides_passability() {
        let shore = Shore {
            terrain: TerrainMap::new(4, 1, 1),
            water: vec![p(2, 0), p(3, 0)],
        };
        let mut finder = PathFinder::new(&shore);
        let walker = Unit { swims: false };
        let boat = Unit { swims: true };
        assert!(finder.find_path(&shore, &walker, 3, p(0, 0), p(3, 0)).is_err());
        assert!(finder.find_path(&shore, &boat, 1, p(2, 0), p(3, 0)).is_ok());

        let walk = finder.find_range(&shore, &walker, 3, p(0, 0), true);
        assert_eq!(walk.points().collect::<Vec<_>>(), vec![p(1, 0)]);
        let threat = finder.find_range(&shore, &walker, 3, p(0, 0), false);
        assert_eq!(threat.len(), 3);
    }

    #[test]
    fn movement_range_pays_terrain() {
        let map = TerrainMap::parse(
            "
            1131
            1#11
            1111
            ",
        )
        .unwrap();
        let mut finder = PathFinder::new(&map);
        let range = finder.find_range(&map, &(), 2, p(0, 0), true);
        let mut tiles = range.iter().collect::<Vec<_>>();
        tiles.sort_by_key(|(pt, _)| (pt.y, pt.x));
        assert_eq!(
            tiles,
            vec![(p(1, 0), 1), (p(0, 1), 1), (p(0, 2), 2)]
        );
        assert!(!range.contains(&p(0, 0)));
    }

    #[test]
    fn threat_range_counts_tiles() {
        let map = TerrainMap::parse(
            "
            19999
            #9999
            99999
            ",
        )
        .unwrap();
        let mut finder = PathFinder::new(&map);
        let range = finder.find_range(&map, &(), 2, p(0, 0), false);
        let mut points = range.points().collect::<Vec<_>>();
        points.sort_by_key(|pt| (pt.y, pt.x));
        assert_eq!(points, vec![p(1, 0), p(2, 0), p(0, 1), p(1, 1), p(0, 2)]);
        assert_eq!(range.cost_at(&p(0, 2)), Some(2));
        assert_eq!(range.cost_at(&p(1, 1)), Some(2));
    }

    #[test]
    fn threat_range_leaves_terrain_alone() {
        let map = TerrainMap::parse("1551").unwrap();
        let mut finder = PathFinder::new(&map);
        let before = finder.find_path(&map, &(), 20, p(0, 0), p(3, 0)).unwrap();
        finder.find_range(&map, &(), 3, p(0, 0), false);
        assert_eq!(finder.node(1, 0).unwrap().cost, 5);
        let after = finder.find_path(&map, &(), 20, p(0, 0), p(3, 0)).unwrap();
        assert_eq!(before, after);
        assert_eq!(after.cost(), 11);
    }

    #[test]
    fn repeated_queries_agree() {
        let map = TerrainMap::parse(
            "
            12121
            2#2#2
            12121
            ",
        )
        .unwrap();
        let mut finder = PathFinder::new(&map);
        let first = finder.find_path(&map, &(), 12, p(0, 0), p(4, 2)).unwrap();
        finder.find_range(&map, &(), 12, p(4, 0), true);
        finder.find_path(&map, &(), 12, p(4, 2), p(0, 0)).unwrap();
        let second = finder.find_path(&map, &(), 12, p(0, 0), p(4, 2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn trace_reports_progress() {
        let map = TerrainMap::new(3, 1, 1);
        let mut finder = PathFinder::new(&map);
        let mut trace = SearchTrace::new();
        finder
            .find_path_observed(&map, &(), 2, p(0, 0), p(2, 0), &mut trace)
            .unwrap();
        let view = |x, depth, heuristic| NodeView {
            pos: p(x, 0),
            depth,
            step_cost: 1,
            heuristic,
        };
        assert_eq!(
            trace.events,
            vec![
                TraceEvent::Expanded(view(0, 0, 0.0)),
                TraceEvent::Relaxed(view(1, 1, 2.0)),
                TraceEvent::Expanded(view(1, 1, 2.0)),
                TraceEvent::Relaxed(view(2, 2, 1.0)),
            ]
        );
    }

    #[test]
    fn trace_of_threat_range_uses_unit_steps() {
        let map = TerrainMap::new(3, 3, 4);
        let mut finder = PathFinder::new(&map);
        let mut trace = SearchTrace::new();
        let range =
            finder.find_range_observed(&map, &(), 1, p(1, 1), RangeMode::Threat, &mut trace);
        assert_eq!(range.len(), 4);
        assert_eq!(trace.relaxed().count(), 4);
        assert!(trace.relaxed().all(|n| n.step_cost == 1 && n.depth == 1));
        assert_eq!(trace.expanded().count(), 5);
    }

    #[test]
    fn expansion_limit() {
        let map = TerrainMap::new(5, 5, 1);
        let config = SearchConfig {
            max_expansions: Some(1),
            ..SearchConfig::default()
        };
        let mut finder = PathFinder::with_config(&map, config);
        assert!(finder.find_path(&map, &(), 4, p(0, 0), p(4, 0)).is_err());
        assert!(finder.find_path(&map, &(), 1, p(0, 0), p(1, 0)).is_ok());
        assert_eq!(finder.find_range(&map, &(), 4, p(0, 0), true).len(), 2);
    }

    #[test]
    fn reload_costs_changes_paths() {
        let mut map = TerrainMap::new(3, 1, 1);
        let mut finder = PathFinder::new(&map);
        map.set_cost(1, 0, 4);
        finder.reload_costs(&map).unwrap();
        assert_eq!(
            finder.find_path(&map, &(), 5, p(0, 0), p(2, 0)).unwrap().cost(),
            5
        );
    }

    /// A row of tiles whose source reports no cost at all.
    struct Rink;

    impl TileGrid for Rink {
        fn width(&self) -> usize {
            4
        }
        fn height(&self) -> usize {
            1
        }
    }

    impl TerrainSource for Rink {
        fn terrain_cost(&self, _x: usize, _y: usize) -> Cost {
            0
        }
    }

    impl Passability for Rink {
        type Mover = ();

        fn is_blocked(&self, _: &(), _x: usize, _y: usize) -> bool {
            false
        }
    }

    #[test]
    fn free_terrain_costs_one_step() {
        let mut finder = PathFinder::new(&Rink);
        let near: Vec<_> = finder.find_range(&Rink, &(), 1, p(0, 0), true).into_iter().collect();
        assert_eq!(near, vec![(p(1, 0), 1)]);
        let all: Vec<_> = finder.find_range(&Rink, &(), 3, p(0, 0), true).into_iter().collect();
        assert_eq!(all, vec![(p(1, 0), 1), (p(2, 0), 2), (p(3, 0), 3)]);
        assert!(finder.find_path(&Rink, &(), 2, p(0, 0), p(3, 0)).is_err());
        assert_eq!(
            finder.find_path(&Rink, &(), 3, p(0, 0), p(3, 0)).unwrap().cost(),
            3
        );
    }
}
