use crate::error::Result;
use crate::RoutingResult;
use std::fmt::Write as _;
use std::io::Write as _;

/// Renders `result` to the ASCII output grammar (see `SPEC_FULL.md` §6): one
/// line per routed net, in routing order, pins in 1-based layer form. Unrouted
/// nets are omitted — callers that need the failure list read
/// [`RoutingResult::failures`] directly.
#[must_use]
pub fn render(result: &RoutingResult) -> String {
    let mut out = String::new();
    for (name, path) in &result.routes {
        out.push_str(name);
        for cell in path {
            let _ = write!(out, " ({}, {}, {})", cell.layer.one_based(), cell.x, cell.y);
        }
        out.push('\n');
    }
    out
}

/// Renders `result` and writes it to `path`, truncating any existing file.
pub fn write_file(path: impl AsRef<std::path::Path>, result: &RoutingResult) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(render(result).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::driver::RoutesMap;
    use crate::{Cell, Layer};

    #[test]
    fn test_renders_one_line_per_net_in_routing_order() {
        let mut routes = RoutesMap::default();
        routes.insert(
            "A".to_string(),
            vec![
                Cell::new(Layer::Horizontal, 0, 0),
                Cell::new(Layer::Horizontal, 1, 0),
            ],
        );
        routes.insert(
            "B".to_string(),
            vec![Cell::new(Layer::Vertical, 2, 2)],
        );
        let result = RoutingResult {
            routes,
            failures: vec!["C".to_string()],
        };
        let rendered = render(&result);
        assert_eq!(rendered, "A (1, 0, 0) (1, 1, 0)\nB (2, 2, 2)\n");
    }

    #[test]
    fn test_failed_nets_are_omitted() {
        let result = RoutingResult {
            routes: RoutesMap::default(),
            failures: vec!["A".to_string()],
        };
        assert_eq!(render(&result), "");
    }
}
