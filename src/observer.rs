//! Hooks for watching a search progress, e.g. to draw the explored tiles with their depth and
//! cost on top of the map. Observers only ever see copies of node state.
use crate::Cost;
use grid_util::point::Point;

/// Snapshot of a node at the moment an event fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView {
    pub pos: Point,
    pub depth: Cost,
    /// Cost charged for entering the tile in this search. Equals the terrain cost except in
    /// threat-range queries, where every step costs 1.
    pub step_cost: Cost,
    pub heuristic: f32,
}

pub trait SearchObserver {
    /// A node was taken from the frontier and closed.
    fn node_expanded(&mut self, _node: NodeView) {}
    /// A node was reached with a better depth and (re)inserted into the frontier.
    fn node_relaxed(&mut self, _node: NodeView) {}
}

impl SearchObserver for () {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEvent {
    Expanded(NodeView),
    Relaxed(NodeView),
}

/// Records every event of a search in the order they happened.
#[derive(Clone, Debug, Default)]
pub struct SearchTrace {
    pub events: Vec<TraceEvent>,
}

impl SearchTrace {
    pub fn new() -> SearchTrace {
        SearchTrace::default()
    }
    pub fn expanded(&self) -> impl Iterator<Item = &NodeView> {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Expanded(n) => Some(n),
            TraceEvent::Relaxed(_) => None,
        })
    }
    pub fn relaxed(&self) -> impl Iterator<Item = &NodeView> {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Relaxed(n) => Some(n),
            TraceEvent::Expanded(_) => None,
        })
    }
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SearchObserver for SearchTrace {
    fn node_expanded(&mut self, node: NodeView) {
        self.events.push(TraceEvent::Expanded(node));
    }
    fn node_relaxed(&mut self, node: NodeView) {
        self.events.push(TraceEvent::Relaxed(node));
    }
}
