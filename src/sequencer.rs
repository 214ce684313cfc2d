use crate::{Cell, Net};

/// Sum over all unordered pin pairs of their Manhattan distance (layer
/// ignored). Used only to order nets; short, tightly-clustered nets route
/// first so they don't consume resources the sprawling nets need more.
#[must_use]
pub fn manhattan_score(pins: &[Cell]) -> u64 {
    let mut score: u64 = 0;
    for i in 0..pins.len() {
        for j in (i + 1)..pins.len() {
            score += u64::from(pins[i].manhattan_distance(&pins[j]));
        }
    }
    score
}

/// Reorders `pins` so the pin closest to any chip edge (`min(x, y, W-x,
/// H-y)`, ties broken by original order) comes first. The rest keep their
/// relative order.
pub fn elect_source(pins: &mut [Cell], width: u32, height: u32) {
    let source_index = pins
        .iter()
        .enumerate()
        .min_by_key(|(i, cell)| (cell.distance_to_edge(width, height), *i))
        .map(|(i, _)| i)
        .expect("a net always has at least one pin");

    pins.swap(0, source_index);
}

/// Returns the indices of `nets` in routing order: ascending Manhattan
/// score, ties broken by net name.
#[must_use]
pub fn order_nets(nets: &[Net]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..nets.len()).collect();
    indices.sort_by(|&a, &b| {
        let score_a = manhattan_score(&nets[a].pins);
        let score_b = manhattan_score(&nets[b].pins);
        score_a
            .cmp(&score_b)
            .then_with(|| nets[a].name.cmp(&nets[b].name))
    });
    indices
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Layer;

    fn cell(x: u32, y: u32) -> Cell {
        Cell::new(Layer::Horizontal, x, y)
    }

    #[test]
    fn test_elect_source_picks_edge_closest_pin() {
        let mut pins = vec![cell(5, 5), cell(0, 0), cell(9, 9)];
        elect_source(&mut pins, 10, 10);
        assert_eq!(pins[0], cell(0, 0));
    }

    #[test]
    fn test_elect_source_ties_break_by_original_order() {
        let mut pins = vec![cell(0, 5), cell(9, 5)];
        elect_source(&mut pins, 10, 10);
        assert_eq!(pins[0], cell(0, 5));
    }

    #[test]
    fn test_order_nets_ascending_score_then_name() {
        let nets = vec![
            Net::new("B", vec![cell(0, 0), cell(3, 3)]),
            Net::new("A", vec![cell(0, 0), cell(1, 0)]),
            Net::new("C", vec![cell(0, 0), cell(3, 3)]),
        ];
        let order = order_nets(&nets);
        let names: Vec<&str> = order.iter().map(|&i| nets[i].name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
