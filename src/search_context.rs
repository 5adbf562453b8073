//! The open and closed sets of a search. Both track nodes by their index in the
//! [NodeGrid](crate::node_grid::NodeGrid), so membership is by identity rather than position.
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder<K> {
    cost: K,
    seq: u64,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest cost first, then earliest insertion
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Nodes discovered but not yet evaluated, popped in ascending cost order. Nodes with equal cost
/// come out in the order they were inserted.
///
/// Removal is lazy: the heap entry stays behind and is skipped when it surfaces, since only the
/// entry whose sequence number matches `live` belongs to the node's current membership.
pub struct Frontier<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    live: FxHashMap<usize, u64>,
    next_seq: u64,
}

impl<K: Ord + Copy> Default for Frontier<K> {
    fn default() -> Self {
        Frontier::new()
    }
}

impl<K: Ord + Copy> Frontier<K> {
    pub fn new() -> Frontier<K> {
        Frontier {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Adds a node, replacing its previous entry if it was already present.
    pub fn insert(&mut self, index: usize, cost: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(index, seq);
        self.heap.push(SmallestCostHolder { cost, seq, index });
    }

    pub fn pop_min(&mut self) -> Option<(usize, K)> {
        while let Some(SmallestCostHolder { cost, seq, index }) = self.heap.pop() {
            if self.live.get(&index) == Some(&seq) {
                self.live.remove(&index);
                return Some((index, cost));
            }
        }
        None
    }

    pub fn peek_min(&mut self) -> Option<(usize, K)> {
        while let Some(top) = self.heap.peek() {
            if self.live.get(&top.index) == Some(&top.seq) {
                return Some((top.index, top.cost));
            }
            self.heap.pop();
        }
        None
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.live.remove(&index).is_some()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.live.contains_key(&index)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.next_seq = 0;
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

/// Nodes fully evaluated in the current search.
#[derive(Clone, Debug, Default)]
pub struct Visited {
    set: FxHashSet<usize>,
}

impl Visited {
    pub fn insert(&mut self, index: usize) -> bool {
        self.set.insert(index)
    }
    pub fn remove(&mut self, index: usize) -> bool {
        self.set.remove(&index)
    }
    pub fn contains(&self, index: usize) -> bool {
        self.set.contains(&index)
    }
    pub fn clear(&mut self) {
        self.set.clear();
    }
    pub fn len(&self) -> usize {
        self.set.len()
    }
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
