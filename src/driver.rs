use crate::{connector::connect_net, sequencer, Cell, CostModel, Grid, RoutingProblem};
use log::{debug, info, warn};

/// An insertion-ordered name -> path map. `RoutingResult::routes` needs
/// lookup by net name (for tests and callers that want one net's geometry)
/// while preserving the order nets were routed in (for `write::render` and
/// `visualize::write_png`, where that order is the only place it's recorded).
/// A plain `Vec` of pairs gives both without pulling in an ordered-map crate
/// the rest of this codebase has no other use for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutesMap(Vec<(String, Vec<Cell>)>);

impl RoutesMap {
    pub fn insert(&mut self, name: String, path: Vec<Cell>) {
        self.0.push((name, path));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Vec<Cell>> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.iter().map(|(name, _)| name)
    }

    pub fn values(&self) -> impl Iterator<Item = &Vec<Cell>> {
        self.0.iter().map(|(_, path)| path)
    }
}

impl<'a> IntoIterator for &'a RoutesMap {
    type Item = &'a (String, Vec<Cell>);
    type IntoIter = std::slice::Iter<'a, (String, Vec<Cell>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Vec<Cell>)> for RoutesMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Cell>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The outcome of routing an entire [`RoutingProblem`]: every net that
/// routed successfully, in routing order, plus the names of nets that did
/// not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingResult {
    pub routes: RoutesMap,
    pub failures: Vec<String>,
}

impl RoutingResult {
    #[must_use]
    pub fn routed_count(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Builds the grid for `problem`, routes every net in sequencer order, and
/// returns the accumulated result. A net that fails to route is logged and
/// skipped; the session always completes and never returns an error for
/// routing failures (only [`crate::parse`] can fail the session).
pub fn route(problem: &RoutingProblem, cost: &CostModel) -> RoutingResult {
    let mut grid = Grid::new(problem.width, problem.height);
    for &(x, y) in &problem.obstacles {
        grid.add_obstacle(x, y);
    }

    let mut result = RoutingResult::default();
    let order = sequencer::order_nets(&problem.nets);

    for net_index in order {
        let net = &problem.nets[net_index];
        let mut pins = net.pins.clone();
        sequencer::elect_source(&mut pins, problem.width, problem.height);

        for &pin in &pins {
            grid.set_free(pin);
        }

        match connect_net(&mut grid, cost, &pins) {
            Some(path) => {
                debug!("routed net '{}' in {} cells", net.name, path.len());
                result.routes.insert(net.name.clone(), path);
            }
            None => {
                warn!("net '{}' is unroutable", net.name);
                result.failures.push(net.name.clone());
            }
        }

        for &pin in &pins {
            grid.set_blocked(pin);
        }
    }

    info!(
        "routing session complete: {} routed, {} failed",
        result.routed_count(),
        result.failed_count()
    );
    result
}
