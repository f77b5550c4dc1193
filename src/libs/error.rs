use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The sequence is shorter than one window
    TooShort {
        /// Length of the normalized sequence
        len: usize,
        /// Requested window width
        width: usize,
    },
    /// A caller-supplied parameter is out of its domain
    InvalidParameter(String),
    /// Population statistics were requested over zero windows
    EmptyWindowSet,
    /// Two results share no comparable window
    EmptyComparison,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::TooShort { len, width } => write!(
                f,
                "Sequence too short for window size {}: {} bases",
                width, len
            ),
            ScanError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ScanError::EmptyWindowSet => write!(f, "Stats error: empty window set"),
            ScanError::EmptyComparison => {
                write!(f, "Comparison error: no windows to compare")
            }
        }
    }
}

impl std::error::Error for ScanError {}
