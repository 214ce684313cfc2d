use crate::{search::shortest_path, Cell, CostModel, Grid};

/// Connects all pins of a net by repeatedly searching from the union of
/// already-routed cells to the remaining pins (Rentsch-style iterative
/// pin-attachment). `pins` must have at least two elements, with `pins[0]`
/// already the elected source (see [`crate::sequencer`]).
///
/// On success, every cell of the returned path has been marked `BLOCKED` on
/// `grid`. On failure the grid is left exactly as it was when the first
/// unreachable pin was attempted — cells committed for pins that *did*
/// attach successfully before the failure remain blocked, matching the
/// reference's "partial commit before the throw" behavior.
pub fn connect_net(grid: &mut Grid, cost: &CostModel, pins: &[Cell]) -> Option<Vec<Cell>> {
    debug_assert!(pins.len() >= 2);

    let mut connected: Vec<Cell> = vec![pins[0]];
    let mut remaining: Vec<Cell> = pins[1..].to_vec();
    let mut full_path: Vec<Cell> = Vec::new();

    while !remaining.is_empty() {
        let result = shortest_path(grid, cost, &connected, &remaining)?;
        let attached = *result.path.last().expect("path is never empty");

        for &cell in &result.path {
            grid.set_blocked(cell);
            if !connected.contains(&cell) {
                connected.push(cell);
            }
        }
        full_path.extend(result.path);
        remaining.retain(|&p| p != attached);
    }

    Some(full_path)
}
