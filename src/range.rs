use crate::{Cost, FxIndexMap};
use grid_util::point::Point;

/// Tiles found by a range query, in discovery order, each with the cheapest accumulated cost
/// the query found for it. The origin of the query is not included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileRange {
    tiles: FxIndexMap<Point, Cost>,
}

impl TileRange {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.tiles.contains_key(point)
    }
    pub fn cost_at(&self, point: &Point) -> Option<Cost> {
        self.tiles.get(point).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cost)> + '_ {
        self.tiles.iter().map(|(p, c)| (*p, *c))
    }
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.tiles.keys().copied()
    }
}

impl FromIterator<(Point, Cost)> for TileRange {
    fn from_iter<I: IntoIterator<Item = (Point, Cost)>>(iter: I) -> Self {
        TileRange {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TileRange {
    type Item = (Point, Cost);
    type IntoIter = indexmap::map::IntoIter<Point, Cost>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
