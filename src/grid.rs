use crate::{Cell, Layer};

/// Two parallel occupancy maps, one per layer, each `width` x `height`.
/// Obstacles are applied once at session start on layer 0 only; nets then
/// mutate the grid monotonically (FREE -> BLOCKED, never back) as they are
/// routed. The grid is owned by the driver for the lifetime of a session:
/// the searcher borrows it read-only and the connector mutates it only after
/// a search returns.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    blocked: [Vec<bool>; 2],
}

impl Grid {
    #[inline]
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            blocked: [vec![false; size], vec![false; size]],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell.x, cell.y)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    #[must_use]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked[cell.layer.index()][self.index(cell.x, cell.y)]
    }

    #[inline]
    #[must_use]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.is_blocked(cell)
    }

    #[inline]
    pub fn set_blocked(&mut self, cell: Cell) {
        let idx = self.index(cell.x, cell.y);
        self.blocked[cell.layer.index()][idx] = true;
    }

    #[inline]
    pub fn set_free(&mut self, cell: Cell) {
        let idx = self.index(cell.x, cell.y);
        self.blocked[cell.layer.index()][idx] = false;
    }

    /// Mark `cell` blocked on layer 0 only — the obstacle semantics fixed by
    /// the reference implementation.
    pub fn add_obstacle(&mut self, x: u32, y: u32) {
        self.set_blocked(Cell::new(Layer::Horizontal, x, y));
    }

    /// The four in-plane neighbors of `cell` that lie within the grid bounds.
    pub fn in_plane_neighbors(&self, cell: Cell) -> impl Iterator<Item = (Cell, i32, i32)> + '_ {
        const DELTAS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        DELTAS.iter().filter_map(move |&(dx, dy)| {
            let nx = cell.x as i64 + dx as i64;
            let ny = cell.y as i64 + dy as i64;
            if nx < 0 || ny < 0 {
                return None;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if self.in_bounds(nx, ny) {
                Some((Cell::new(cell.layer, nx, ny), dx, dy))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_obstacle_applies_only_to_layer_zero() {
        let mut grid = Grid::new(4, 4);
        grid.add_obstacle(1, 1);
        assert!(grid.is_blocked(Cell::new(Layer::Horizontal, 1, 1)));
        assert!(grid.is_free(Cell::new(Layer::Vertical, 1, 1)));
    }

    #[test]
    fn test_monotonic_block_does_not_unblock() {
        let mut grid = Grid::new(2, 2);
        let c = Cell::new(Layer::Horizontal, 0, 0);
        grid.set_blocked(c);
        grid.set_blocked(c);
        assert!(grid.is_blocked(c));
    }

    #[test]
    fn test_in_plane_neighbors_respects_bounds() {
        let grid = Grid::new(3, 3);
        let corner = Cell::new(Layer::Horizontal, 0, 0);
        let neighbors: Vec<_> = grid.in_plane_neighbors(corner).map(|(c, _, _)| c).collect();
        assert_eq!(neighbors.len(), 2);
    }
}
