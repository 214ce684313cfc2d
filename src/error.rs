use thiserror::Error;

/// Errors that can abort a routing session. Unroutable nets are not part of
/// this taxonomy — they are data carried in [`crate::RoutingResult::failures`],
/// never a `Result::Err`.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The grid-size header line is missing, or not of the form `<W>x<H>`.
    #[error("line {line}: malformed grid size header ({reason})")]
    MalformedHeader { line: usize, reason: String },

    /// An `OBS` or net line did not match the input grammar.
    #[error("line {line}: malformed line ({reason})")]
    MalformedLine { line: usize, reason: String },

    /// A coordinate or layer fell outside the declared grid bounds.
    #[error("line {line}: out-of-bounds coordinate or layer ({reason})")]
    OutOfBounds { line: usize, reason: String },

    /// A net declared fewer than two pins.
    #[error("line {line}: net '{name}' has fewer than 2 pins")]
    DegenerateNet { line: usize, name: String },

    /// A net name did not match `[A-Za-z_][A-Za-z0-9_]*`.
    #[error("line {line}: invalid net name '{name}'")]
    InvalidNetName { line: usize, name: String },

    /// The grid declared a width or height outside `1..=1000`.
    #[error("grid dimensions {width}x{height} are out of the allowed 1..=1000 range")]
    GridTooLarge { width: u32, height: u32 },

    /// Wraps an underlying I/O failure reading the input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RouterError>;
