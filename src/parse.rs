use crate::error::{RouterError, Result};
use crate::{Cell, Layer, Net, RoutingProblem};

/// Parses the ASCII input grammar (see the crate's `SPEC_FULL.md` §6) into a
/// validated [`RoutingProblem`]. Fails fast on the first malformed or
/// out-of-bounds line, naming the offending line number.
pub fn parse_str(input: &str) -> Result<RoutingProblem> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| RouterError::MalformedHeader {
        line: 0,
        reason: "input file is empty".to_string(),
    })?;
    let (width, height) = parse_header(header_line, header)?;

    if width == 0 || height == 0 || width > 1000 || height > 1000 {
        return Err(RouterError::GridTooLarge { width, height });
    }

    let mut obstacles = Vec::new();
    let mut nets = Vec::new();

    for (line_no, line) in lines {
        if let Some(rest) = line.strip_prefix("OBS") {
            let coords = parse_tuples(line_no, rest)?;
            let [(x, y)] = coords.as_slice() else {
                return Err(RouterError::MalformedLine {
                    line: line_no,
                    reason: format!("OBS takes exactly one (x,y) pair, got {}", coords.len()),
                });
            };
            check_in_bounds(line_no, width, height, *x, *y)?;
            obstacles.push((*x, *y));
        } else {
            let mut parts = line.splitn(2, char::is_whitespace);
            let name = parts.next().unwrap_or("").to_string();
            let rest = parts.next().unwrap_or("");
            validate_net_name(line_no, &name)?;

            let coords = parse_net_tuples(line_no, rest)?;
            if coords.len() < 2 {
                return Err(RouterError::DegenerateNet {
                    line: line_no,
                    name,
                });
            }

            let mut pins = Vec::with_capacity(coords.len());
            for (layer, x, y) in coords {
                check_in_bounds(line_no, width, height, x, y)?;
                let layer = Layer::from_one_based(layer).ok_or_else(|| RouterError::OutOfBounds {
                    line: line_no,
                    reason: format!("layer must be 1 or 2, got {layer}"),
                })?;
                pins.push(Cell::new(layer, x, y));
            }
            nets.push(Net::new(name, pins));
        }
    }

    Ok(RoutingProblem {
        width,
        height,
        obstacles,
        nets,
    })
}

/// Reads and parses `path`. I/O failures are wrapped as [`RouterError::Io`].
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<RoutingProblem> {
    let contents = std::fs::read_to_string(path)?;
    parse_str(&contents)
}

fn parse_header(line_no: usize, header: &str) -> Result<(u32, u32)> {
    let (w, h) = header.split_once('x').ok_or_else(|| RouterError::MalformedHeader {
        line: line_no,
        reason: format!("expected '<W>x<H>', got '{header}'"),
    })?;
    let width = w.trim().parse::<u32>().map_err(|_| RouterError::MalformedHeader {
        line: line_no,
        reason: format!("width '{w}' is not a non-negative integer"),
    })?;
    let height = h.trim().parse::<u32>().map_err(|_| RouterError::MalformedHeader {
        line: line_no,
        reason: format!("height '{h}' is not a non-negative integer"),
    })?;
    Ok((width, height))
}

fn check_in_bounds(line_no: usize, width: u32, height: u32, x: u32, y: u32) -> Result<()> {
    if x >= width || y >= height {
        return Err(RouterError::OutOfBounds {
            line: line_no,
            reason: format!("({x}, {y}) is outside {width}x{height}"),
        });
    }
    Ok(())
}

fn validate_net_name(line_no: usize, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(RouterError::InvalidNetName {
            line: line_no,
            name: name.to_string(),
        })
    }
}

/// Parses a sequence of `(a, b)` pairs from `rest`, used for `OBS` lines.
fn parse_tuples(line_no: usize, rest: &str) -> Result<Vec<(u32, u32)>> {
    let mut out = Vec::new();
    for group in tuple_groups(line_no, rest)? {
        let [a, b] = group.as_slice() else {
            return Err(RouterError::MalformedLine {
                line: line_no,
                reason: format!("expected 2 values in '({})', got {}", group.len(), group.len()),
            });
        };
        out.push((*a, *b));
    }
    Ok(out)
}

/// Parses a sequence of `(layer, x, y)` triples, used for net pin lists.
fn parse_net_tuples(line_no: usize, rest: &str) -> Result<Vec<(u32, u32, u32)>> {
    let mut out = Vec::new();
    for group in tuple_groups(line_no, rest)? {
        let [layer, x, y] = group.as_slice() else {
            return Err(RouterError::MalformedLine {
                line: line_no,
                reason: format!("expected (layer,x,y), got {} values", group.len()),
            });
        };
        out.push((*layer, *x, *y));
    }
    Ok(out)
}

/// Splits `rest` on `(...)` groups and parses each group's comma-separated
/// integers.
fn tuple_groups(line_no: usize, rest: &str) -> Result<Vec<Vec<u32>>> {
    let mut groups = Vec::new();
    let mut remainder = rest;
    while let Some(open) = remainder.find('(') {
        let close = remainder[open..].find(')').ok_or_else(|| RouterError::MalformedLine {
            line: line_no,
            reason: "unmatched '(' in coordinate list".to_string(),
        })?;
        let body = &remainder[open + 1..open + close];
        let mut values = Vec::new();
        for part in body.split(',') {
            let part = part.trim();
            let value = part.parse::<u32>().map_err(|_| RouterError::MalformedLine {
                line: line_no,
                reason: format!("'{part}' is not a non-negative integer"),
            })?;
            values.push(value);
        }
        groups.push(values);
        remainder = &remainder[open + close + 1..];
    }
    if groups.is_empty() {
        return Err(RouterError::MalformedLine {
            line: line_no,
            reason: "no '(...)' coordinate group found".to_string(),
        });
    }
    Ok(groups)
}
