use crate::Cell;

/// A named, ordered list of pins. Before sequencing, the order is whatever
/// the input file declared; after [`crate::sequencer::elect_source`] the
/// first element is the elected source and the rest are targets to be
/// attached in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    pub name: String,
    pub pins: Vec<Cell>,
}

impl Net {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, pins: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            pins,
        }
    }
}

/// A fully parsed and validated routing problem: grid dimensions, the
/// obstacle cells, and the nets to route, in the order declared in the
/// input file (the sequencer reorders a copy of this list; it does not
/// mutate the parsed problem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingProblem {
    pub width: u32,
    pub height: u32,
    pub obstacles: Vec<(u32, u32)>,
    pub nets: Vec<Net>,
}
