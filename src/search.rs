use crate::{Cell, CostModel, Grid};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

// Structured after the bidirectional Dijkstra query in a contraction-hierarchy
// router: a cost/predecessor map keyed by node plus a binary heap of
// `(cost, node)` entries whose `Ord` is reversed so the heap pops smallest
// cost first. This search only runs in one direction and stops at the first
// popped target rather than meeting in the middle, and it carries an extra
// insertion-sequence tiebreaker the CH query has no need for, since ties on
// cost alone would otherwise resolve in whatever order a hash map happens to
// iterate.

/// The result of one [`shortest_path`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Source-to-target, inclusive of both endpoints. Never empty.
    pub path: Vec<Cell>,
    /// Sum of per-edge costs along `path`.
    pub cost: u32,
}

struct HeapEntry {
    cost: u32,
    seq: u64,
    node: Cell,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Min-heap: reverse both fields so the lowest cost (and, among ties, the
    // earliest-inserted entry) pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find the lowest-cost cell sequence from any cell in `sources` to any cell
/// in `targets`, under `cost`, over the free cells of `grid` (a cell in
/// `targets` is always considered traversable, even if `grid` marks it
/// blocked). Returns `None` ("unroutable") if no such sequence exists.
///
/// `sources` and `targets` must both be non-empty. If they overlap, the
/// first source (in iteration order) that is also a target is returned as a
/// single-cell, zero-cost path.
pub fn shortest_path(
    grid: &Grid,
    cost: &CostModel,
    sources: &[Cell],
    targets: &[Cell],
) -> Option<PathResult> {
    debug_assert!(!sources.is_empty());
    debug_assert!(!targets.is_empty());

    let target_set: FxHashSet<Cell> = targets.iter().copied().collect();

    if let Some(&s) = sources.iter().find(|s| target_set.contains(s)) {
        return Some(PathResult {
            path: vec![s],
            cost: 0,
        });
    }

    let mut dist: HashMap<Cell, u32> = HashMap::new();
    let mut prev: HashMap<Cell, Cell> = HashMap::new();
    let mut heap = BinaryHeap::with_capacity(sources.len().max(16));
    let mut seq: u64 = 0;

    for &source in sources {
        // Later sources may duplicate an earlier one; only the first wins.
        if let std::collections::hash_map::Entry::Vacant(entry) = dist.entry(source) {
            entry.insert(0);
            heap.push(HeapEntry {
                cost: 0,
                seq,
                node: source,
            });
            seq += 1;
        }
    }

    while let Some(HeapEntry { cost: popped_cost, node: current, .. }) = heap.pop() {
        let recorded_cost = *dist.get(&current).expect("node was inserted before being queued");
        if popped_cost > recorded_cost {
            continue; // stale entry superseded by a cheaper rediscovery
        }

        if target_set.contains(&current) {
            return Some(PathResult {
                path: reconstruct_path(&prev, current),
                cost: recorded_cost,
            });
        }

        for (neighbor, dx, dy) in grid.in_plane_neighbors(current) {
            let admitted = grid.is_free(neighbor) || target_set.contains(&neighbor);
            if !admitted {
                continue;
            }
            let edge_cost = cost.step(current.layer, dx, dy);
            relax(&mut dist, &mut prev, &mut heap, &mut seq, current, neighbor, recorded_cost + edge_cost);
        }

        let via = current.via_partner();
        let admitted = grid.is_free(via) || target_set.contains(&via);
        if admitted {
            relax(&mut dist, &mut prev, &mut heap, &mut seq, current, via, recorded_cost + cost.via());
        }
    }

    None
}

fn relax(
    dist: &mut HashMap<Cell, u32>,
    prev: &mut HashMap<Cell, Cell>,
    heap: &mut BinaryHeap<HeapEntry>,
    seq: &mut u64,
    from: Cell,
    to: Cell,
    new_cost: u32,
) {
    if new_cost < *dist.get(&to).unwrap_or(&u32::MAX) {
        dist.insert(to, new_cost);
        prev.insert(to, from);
        heap.push(HeapEntry {
            cost: new_cost,
            seq: *seq,
            node: to,
        });
        *seq += 1;
    }
}

fn reconstruct_path(prev: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&before) = prev.get(&current) {
        path.push(before);
        current = before;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Layer;

    fn cell(layer: Layer, x: u32, y: u32) -> Cell {
        Cell::new(layer, x, y)
    }

    #[test]
    fn test_single_cell_when_source_is_target() {
        let grid = Grid::new(2, 2);
        let cost = CostModel::default();
        let a = cell(Layer::Horizontal, 0, 0);
        let result = shortest_path(&grid, &cost, &[a], &[a]).unwrap();
        assert_eq!(result.path, vec![a]);
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_straight_line_on_preferred_axis() {
        let grid = Grid::new(1, 5);
        let cost = CostModel::default();
        let a = cell(Layer::Horizontal, 0, 0);
        let b = cell(Layer::Horizontal, 0, 4);
        let result = shortest_path(&grid, &cost, &[a], &[b]).unwrap();
        assert_eq!(result.cost, 4);
        assert_eq!(result.path.len(), 5);
    }

    #[test]
    fn test_blocked_layer_forces_via() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            grid.add_obstacle(1, y);
        }
        let cost = CostModel::default();
        let a = cell(Layer::Horizontal, 0, 1);
        let b = cell(Layer::Horizontal, 2, 1);
        let result = shortest_path(&grid, &cost, &[a], &[b]).unwrap();
        assert_eq!(result.cost, 2 * cost.via() + 2 * cost.step_cost);
    }

    #[test]
    fn test_fully_enclosed_pin_is_unroutable() {
        let mut grid = Grid::new(3, 3);
        grid.add_obstacle(0, 1);
        grid.add_obstacle(2, 1);
        grid.add_obstacle(1, 0);
        grid.add_obstacle(1, 2);
        grid.set_blocked(cell(Layer::Vertical, 1, 1));
        let cost = CostModel::default();
        let a = cell(Layer::Horizontal, 1, 1);
        let b = cell(Layer::Horizontal, 0, 0);
        assert!(shortest_path(&grid, &cost, &[a], &[b]).is_none());
    }

    #[test]
    fn test_multi_source_picks_cheapest() {
        let grid = Grid::new(5, 5);
        let cost = CostModel::default();
        let near = cell(Layer::Horizontal, 2, 2);
        let far = cell(Layer::Horizontal, 0, 0);
        let goal = cell(Layer::Horizontal, 2, 4);
        let result = shortest_path(&grid, &cost, &[far, near], &[goal]).unwrap();
        assert_eq!(result.cost, 2);
        assert_eq!(*result.path.first().unwrap(), near);
    }
}
